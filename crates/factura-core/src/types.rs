//! # Domain Types
//!
//! Small value types shared by items, tax policies and invoices.
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐
//! │    TaxRate      │   │    Category     │
//! │  ─────────────  │   │  ─────────────  │
//! │  bps (u32)      │   │  Food           │
//! │  500 = 5%       │   │  Clothing       │
//! └─────────────────┘   │  Electronics    │
//!                       └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1900 bps = 19%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a whole percentage (`5` → 5%).
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        TaxRate(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percentage())
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category that decides an item's tax treatment.
///
/// ## Adding a Category
/// 1. Add a variant here (and to [`Category::ALL`])
/// 2. Add one row to [`crate::tax::STANDARD_TAX_TABLE`]
///
/// Nothing else changes: the invoice and printer dispatch through the
/// registry, never on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Clothing,
    Electronics,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 3] = [Category::Food, Category::Clothing, Category::Electronics];

    /// Display tag used on receipts and in error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
