//! # Invoice
//!
//! An ordered, append-only list of items plus a shared reference to the tax
//! registry used to price them.
//!
//! ## Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Invoice Computation                               │
//! │                                                                         │
//! │  subtotal()  = Σ price                       always succeeds           │
//! │                                                                         │
//! │  total_tax() = Σ registry[category].compute  all-or-nothing            │
//! │                 └── any category unregistered → MissingTaxRule         │
//! │                                                                         │
//! │  total()     = subtotal() + total_tax()?     fails with total_tax()    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use factura_core::{Invoice, Item, Money, TaxRegistry};
//!
//! let registry = TaxRegistry::standard();
//! let mut invoice = Invoice::new(&registry);
//! invoice.append(Item::food("Bread", Money::from_units(5000)).unwrap());
//!
//! assert_eq!(invoice.subtotal(), Money::from_units(5000));
//! assert_eq!(invoice.total_tax().unwrap(), Money::from_units(250));
//! assert_eq!(invoice.total().unwrap(), Money::from_units(5250));
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::money::Money;
use crate::tax::{TaxPolicy, TaxRegistry};
use crate::types::Category;

// =============================================================================
// Invoice
// =============================================================================

/// An invoice under construction.
///
/// ## Invariants
/// - Items keep insertion order; order affects display only
/// - Items are never removed; "start over" means a new `Invoice`
/// - The registry is borrowed, never owned, so one registry can back any
///   number of invoices
#[derive(Debug, Clone)]
pub struct Invoice<'r> {
    id: Uuid,
    created_at: DateTime<Utc>,
    items: Vec<Item>,
    registry: &'r TaxRegistry,
}

impl<'r> Invoice<'r> {
    /// Creates an empty invoice with a fresh id, issued now.
    pub fn new(registry: &'r TaxRegistry) -> Self {
        Invoice::with_identity(registry, Uuid::new_v4(), Utc::now())
    }

    /// Creates an empty invoice with a caller-chosen id and issue time.
    pub fn with_identity(registry: &'r TaxRegistry, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Invoice {
            id,
            created_at,
            items: Vec::new(),
            registry,
        }
    }

    /// Appends an item to the end of the invoice.
    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Sum of all item prices. Independent of which tax rules exist.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    /// Sum of per-item tax.
    ///
    /// ## Errors
    /// [`CoreError::MissingTaxRule`] naming the category of the first item
    /// (in insertion order) that has no registered policy. No partial total is
    /// ever returned.
    pub fn total_tax(&self) -> CoreResult<Money> {
        self.items
            .iter()
            .map(|item| {
                self.policy_for(item.category())
                    .map(|policy| policy.compute(item))
            })
            .sum()
    }

    /// `subtotal() + total_tax()`. Fails exactly when `total_tax()` fails.
    pub fn total(&self) -> CoreResult<Money> {
        Ok(self.subtotal() + self.total_tax()?)
    }

    /// Read-only view of the items, in insertion order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Detached copy of the items; changing it never touches the invoice.
    pub fn to_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn registry(&self) -> &'r TaxRegistry {
        self.registry
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Serializable snapshot of the invoice and its totals.
    ///
    /// Fails under the same condition as [`Invoice::total_tax`].
    pub fn summary(&self) -> CoreResult<InvoiceSummary> {
        let lines = self
            .items
            .iter()
            .map(|item| {
                self.policy_for(item.category()).map(|policy| SummaryLine {
                    name: item.name().to_string(),
                    category: item.category(),
                    price: item.price(),
                    tax: policy.compute(item),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let subtotal = self.subtotal();
        let total_tax: Money = lines.iter().map(|line| line.tax).sum();

        Ok(InvoiceSummary {
            invoice_id: self.id,
            issued_at: self.created_at,
            item_count: lines.len(),
            subtotal,
            total_tax,
            total: subtotal + total_tax,
            lines,
        })
    }

    fn policy_for(&self, category: Category) -> CoreResult<&'r TaxPolicy> {
        self.registry
            .lookup(category)
            .ok_or(CoreError::MissingTaxRule { category })
    }
}

impl fmt::Display for Invoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invoice with {} item(s)", self.items.len())
    }
}

// =============================================================================
// Summary Snapshot
// =============================================================================

/// A fully-taxed invoice, ready to serialize.
///
/// Amounts serialize as integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    pub invoice_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub item_count: usize,
    pub subtotal: Money,
    pub total_tax: Money,
    pub total: Money,
    pub lines: Vec<SummaryLine>,
}

/// One taxed line of an [`InvoiceSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub category: Category,
    pub price: Money,
    pub tax: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
