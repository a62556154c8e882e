//! Small shared helpers: formatting and markup.

pub mod format;
pub mod markup;
