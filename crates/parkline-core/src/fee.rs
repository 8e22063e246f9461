//! # Fee Module
//!
//! Provides the `Fee` type for parking charges.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Fees are whole currency units. Rates in a fee model are u32, hours    │
//! │  and days are u64. A bare integer makes it easy to multiply a rate by  │
//! │  minutes instead of hours; a Fee only multiplies by a unit count.      │
//! │                                                                         │
//! │    rate (u32) ──► Fee::from_rate ──► × hours/days (u64) ──► Fee        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parkline_core::fee::Fee;
//!
//! let hourly = Fee::from_rate(10);
//! let stay = hourly * 3 + hourly; // 3 full hours plus a started hour
//! assert_eq!(stay.amount(), 40);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Fee Type
// =============================================================================

/// A non-negative parking charge in whole currency units.
///
/// Arithmetic saturates at `u64::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fee(u64);

impl Fee {
    /// Creates a fee from a raw amount.
    #[inline]
    pub const fn new(amount: u64) -> Self {
        Fee(amount)
    }

    /// Creates a single-unit fee from a tier rate.
    #[inline]
    pub const fn from_rate(rate: u32) -> Self {
        Fee(rate as u64)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Returns zero fee.
    #[inline]
    pub const fn zero() -> Self {
        Fee(0)
    }

    /// Multiplies the fee by a number of billed units (hours or days).
    #[inline]
    pub const fn times(&self, units: u64) -> Self {
        Fee(self.0.saturating_mul(units))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Fee {
    fn default() -> Self {
        Fee::zero()
    }
}

impl Add for Fee {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Fee(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Fee {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a unit count.
impl Mul<u64> for Fee {
    type Output = Self;

    #[inline]
    fn mul(self, units: u64) -> Self {
        self.times(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
