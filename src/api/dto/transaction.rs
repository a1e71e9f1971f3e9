//! DTOs for the ledger snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Transaction;
use crate::utils::timestamp::format_timestamp;

/// Query parameters for `GET /api/transactions`.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    /// Only return stays of this plate.
    pub plate: Option<String>,

    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl TransactionsQuery {
    /// Validates pagination and returns `(offset, limit)`.
    ///
    /// Defaults: page 1, page size 25. Page size must be between 1 and 100.
    pub fn offset_limit(&self) -> Result<(usize, usize), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(25);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&page_size) {
            return Err("Page size must be between 1 and 100".to_string());
        }

        let offset = (page as usize - 1)
            .checked_mul(page_size as usize)
            .ok_or_else(|| "Page is out of range".to_string())?;

        Ok((offset, page_size as usize))
    }
}

/// One ledger entry. `end` is absent while the vehicle is still parked.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub plate_number: String,
    pub start: String,
    pub end: Option<String>,
    pub payment: u64,
    /// `parking` while open, `closed` once paid.
    pub status: &'static str,
}

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            plate_number: tx.plate_number.clone(),
            start: format_timestamp(tx.start),
            end: tx.end.map(format_timestamp),
            payment: tx.payment,
            status: if tx.is_open() { "parking" } else { "closed" },
        }
    }
}

/// Page of ledger entries, newest first.
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<TransactionResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_limit_defaults() {
        assert_eq!(TransactionsQuery::default().offset_limit().unwrap(), (0, 25));
    }

    #[test]
    fn test_offset_limit_bounds() {
        let query = TransactionsQuery {
            page: Some(3),
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(query.offset_limit().unwrap(), (20, 10));

        let zero_page = TransactionsQuery {
            page: Some(0),
            ..Default::default()
        };
        assert!(zero_page.offset_limit().is_err());

        let huge = TransactionsQuery {
            page_size: Some(500),
            ..Default::default()
        };
        assert!(huge.offset_limit().is_err());
    }

    #[test]
    fn test_offset_limit_last_page_does_not_overflow() {
        let query = TransactionsQuery {
            page: Some(u32::MAX),
            page_size: Some(100),
            ..Default::default()
        };

        match query.offset_limit() {
            Ok((offset, limit)) => {
                assert_eq!(offset, (u32::MAX as usize - 1) * 100);
                assert_eq!(limit, 100);
            }
            Err(message) => assert_eq!(message, "Page is out of range"),
        }
    }
}
