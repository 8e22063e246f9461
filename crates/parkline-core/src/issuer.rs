//! Ticket and receipt numbering.
//!
//! Ticket numbers come from current occupancy and are reused; receipt
//! numbers come from a counter and never are.

use crate::ledger::{LedgerKey, OccupancyLedger};
use crate::types::VehicleClass;

/// Prefix carried by every receipt number.
pub const RECEIPT_PREFIX: &str = "R-";

/// Allocates ticket and receipt numbers for one facility.
#[derive(Debug, Clone)]
pub struct Issuer {
    pad_width: usize,
    receipts_issued: u64,
}

impl Issuer {
    pub fn new(pad_width: usize) -> Self {
        Issuer {
            pad_width,
            receipts_issued: 0,
        }
    }

    /// Number of receipts issued so far.
    pub fn receipts_issued(&self) -> u64 {
        self.receipts_issued
    }

    /// Picks the ticket number for a new `vehicle` entering `ledger`.
    ///
    /// The number is `occupancy + 1`. When out-of-order exits leave that
    /// number still held by a parked vehicle of the same class, the lowest
    /// free number for the class is used instead, so two parked vehicles
    /// never share a (ticket, class) key.
    pub fn ticket_number(&self, ledger: &OccupancyLedger, vehicle: VehicleClass) -> String {
        let preferred = self.format(ledger.len() as u64 + 1);
        if !ledger.contains(&LedgerKey::new(preferred.clone(), vehicle)) {
            return preferred;
        }

        (1u64..)
            .map(|n| self.format(n))
            .find(|candidate| !ledger.contains(&LedgerKey::new(candidate.clone(), vehicle)))
            .unwrap_or(preferred)
    }

    /// Advances the receipt counter and returns the new receipt number.
    pub fn next_receipt_number(&mut self) -> String {
        self.receipts_issued += 1;
        format!("{}{}", RECEIPT_PREFIX, self.format(self.receipts_issued))
    }

    fn format(&self, n: u64) -> String {
        format!("{:0width$}", n, width = self.pad_width)
    }
}
