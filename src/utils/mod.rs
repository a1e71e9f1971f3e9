//! Utility functions shared by the API, the dashboard and the scenario runner.
//!
//! - [`timestamp`] - Parsing and formatting of local date-times

pub mod timestamp;
