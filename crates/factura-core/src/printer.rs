//! # Invoice Printer
//!
//! Renders an invoice as a plain-text receipt.
//!
//! ## Layout
//! ```text
//! ========================================
//!               SALES INVOICE
//! ========================================
//!
//! ITEMS:
//! ----------------------------------------
//!   [Food] Bread - $5000.00         $5000.00
//!     Tax (5.0%)                     $250.00
//!     Subtotal                      $5250.00
//!
//! ----------------------------------------
//! SUBTOTAL:                         $5000.00
//! TOTAL TAX:                         $250.00
//! ----------------------------------------
//! TOTAL:                            $5250.00
//! ========================================
//! ```
//!
//! ## Missing Rules
//! Per-item lines re-derive tax straight from the registry. An item whose
//! category has no rule is displayed with zero tax and no tax line. The
//! summary block comes from [`Invoice::total_tax`] and [`Invoice::total`],
//! which reject the same invoice with `MissingTaxRule`, so `render` fails as
//! a whole and no partial receipt is returned.

use std::fmt;

use crate::error::CoreResult;
use crate::invoice::Invoice;
use crate::money::Money;
use crate::tax::TaxRegistry;

const RULE_HEAVY: &str = "========================================";
const RULE_LIGHT: &str = "----------------------------------------";

/// Something that turns an invoice into display text.
pub trait InvoicePrinter {
    /// Renders `invoice`, looking per-item tax up in `registry`.
    fn render(&self, invoice: &Invoice<'_>, registry: &TaxRegistry) -> CoreResult<String>;
}

/// Fixed-width text receipt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePrinter;

impl InvoicePrinter for SimplePrinter {
    fn render(&self, invoice: &Invoice<'_>, registry: &TaxRegistry) -> CoreResult<String> {
        let receipt = Receipt {
            invoice,
            registry,
            subtotal: invoice.subtotal(),
            total_tax: invoice.total_tax()?,
            total: invoice.total()?,
        };
        Ok(receipt.to_string())
    }
}

/// A fully priced invoice, ready to format.
struct Receipt<'a> {
    invoice: &'a Invoice<'a>,
    registry: &'a TaxRegistry,
    subtotal: Money,
    total_tax: Money,
    total: Money,
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Receipt {
            invoice,
            registry,
            subtotal,
            total_tax,
            total,
        } = self;

        writeln!(out, "{RULE_HEAVY}")?;
        writeln!(out, "              SALES INVOICE")?;
        writeln!(out, "{RULE_HEAVY}")?;
        writeln!(out)?;
        writeln!(out, "ITEMS:")?;
        writeln!(out, "{RULE_LIGHT}")?;

        for item in invoice.items() {
            let policy = registry.lookup(item.category());
            let price = item.price();
            let tax = policy.map_or(Money::zero(), |p| p.compute(item));

            writeln!(out, "  {:<30} {:>12}", item.to_string(), price)?;
            if let Some(policy) = policy {
                let label = format!("Tax ({})", policy.rate());
                writeln!(out, "    {:<28} {:>12}", label, tax)?;
            }
            writeln!(out, "    {:<28} {:>12}", "Subtotal", price + tax)?;
            writeln!(out)?;
        }

        writeln!(out, "{RULE_LIGHT}")?;
        writeln!(out, "{:<32} {:>12}", "SUBTOTAL:", subtotal)?;
        writeln!(out, "{:<32} {:>12}", "TOTAL TAX:", total_tax)?;
        writeln!(out, "{RULE_LIGHT}")?;
        writeln!(out, "{:<32} {:>12}", "TOTAL:", total)?;
        writeln!(out, "{RULE_HEAVY}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
