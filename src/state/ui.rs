#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available inside each table row's detail strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Clients,
    Deals,
    Skills,
}
