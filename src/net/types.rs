//! Wire types for the sales-data and AI endpoints.
//!
//! Every field a payload may omit carries `#[serde(default)]` so a sparse
//! response degrades to empty values instead of a deserialization error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One sales representative: the primary dashboard entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesRep {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub clients: Vec<Client>,
}

impl SalesRep {
    /// Sum of all deal values for this representative.
    ///
    /// Backs both the "Total Deals Value" table column and the bar chart
    /// series.
    pub fn total_value(&self) -> f64 {
        self.deals.iter().map(|d| d.value).sum()
    }
}

/// A single deal. `client` is a display name, not a foreign key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub status: String,
}

/// A client contact attached to a representative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub contact: String,
}

/// Envelope returned by `GET /api/data`.
///
/// A payload without the `salesReps` field is an empty collection, not an
/// error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default, rename = "salesReps")]
    pub sales_reps: Vec<SalesRep>,
}

/// Body for `POST /api/ai`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Envelope returned by `POST /api/ai`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub response: String,
}
