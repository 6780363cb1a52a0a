//! Request/response bodies exchanged with the Sotien HTTP backend.
//!
//! The server and the browser client live outside this repo; these types
//! pin down the JSON shapes they exchange. Amounts travel as plain numbers
//! in base đồng (already resolved through the shorthand codec), dates as
//! ISO `YYYY-MM-DD` strings, months as `YYYY-MM`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    impl TransactionKind {
        /// Canonical kind string used by the backend.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Income => "income",
                Self::Expense => "expense",
            }
        }
    }

    /// Request body for creating a transaction.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub amount: f64,
        pub category: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub description: String,
        /// `YYYY-MM-DD HH:MM:SS`; the server fills it in when omitted.
        pub date: Option<String>,
        /// Savings asset this expense funds, if any.
        pub asset_id: Option<i64>,
    }

    /// A stored transaction as returned by the list endpoints.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Transaction {
        pub id: i64,
        pub amount: f64,
        pub category: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub description: String,
        pub date: String,
    }
}

pub mod budget {
    use super::*;

    /// Request body for setting a monthly category budget.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetSet {
        pub category: String,
        pub monthly_limit: f64,
        /// `YYYY-MM`; defaults to the current month server-side.
        pub month: Option<String>,
    }

    /// One row of the budget-status endpoint.
    ///
    /// `level` is the server-computed warning band:
    /// - `safe`: below 80% of the limit
    /// - `warning`: 80% to just under the limit
    /// - `danger`: at or over the limit
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetStatusEntry {
        pub category: String,
        pub limit: f64,
        pub spent: f64,
        pub remaining: f64,
        pub percentage: f64,
        pub level: String,
    }
}

pub mod asset {
    use super::*;

    /// Asset kind as stored by the backend.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum AssetKind {
        Savings,
        Cumulative,
        Gold,
        Other,
    }

    /// Request body for creating or updating an asset.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AssetUpsert {
        pub name: String,
        #[serde(rename = "type")]
        pub kind: AssetKind,
        pub amount: f64,
        pub interest_rate: f64,
        pub term_months: Option<u32>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub auto_contribution: f64,
    }

    /// A stored asset as returned by `/api/assets`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Asset {
        pub id: i64,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: AssetKind,
        pub amount: f64,
        pub interest_rate: f64,
        pub term_months: Option<u32>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub auto_contribution: f64,
    }
}
