//! Route pages.

pub mod dashboard;
