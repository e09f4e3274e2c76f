//! # factura-core: Pure Invoicing Logic
//!
//! This crate is the **heart** of Factura. It prices itemized invoices
//! against a category-keyed tax registry, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Factura Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Menu ──► Add Item ──► Totals ──► Print Receipt               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ factura-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐       │   │
//! │  │   │   item   │  │   tax    │  │ invoice  │  │ printer  │       │   │
//! │  │   │   Item   │  │ Registry │  │ Invoice  │  │  Simple  │       │   │
//! │  │   │          │  │ Policy   │  │ Summary  │  │ Printer  │       │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Category` and `TaxRate`
//! - [`money`] - Money type with integer arithmetic
//! - [`item`] - Validated invoice items
//! - [`tax`] - Tax policies and the category registry
//! - [`invoice`] - Invoice aggregation and summary snapshot
//! - [`printer`] - Text receipt rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and price parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use factura_core::{Invoice, InvoicePrinter, Item, Money, SimplePrinter, TaxRegistry};
//!
//! let registry = TaxRegistry::standard();
//! let mut invoice = Invoice::new(&registry);
//!
//! invoice.append(Item::food("Bread", Money::from_units(5000)).unwrap());
//! invoice.append(Item::clothing("Shirt", Money::from_units(25000)).unwrap());
//!
//! assert_eq!(invoice.subtotal(), Money::from_units(30000));
//! assert_eq!(invoice.total_tax().unwrap(), Money::from_units(5000));
//!
//! let receipt = SimplePrinter.render(&invoice, &registry).unwrap();
//! assert!(receipt.contains("TOTAL:"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoice;
pub mod item;
pub mod money;
pub mod printer;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceSummary, SummaryLine};
pub use item::Item;
pub use money::Money;
pub use printer::{InvoicePrinter, SimplePrinter};
pub use tax::{TaxPolicy, TaxRegistry, STANDARD_TAX_TABLE};
pub use types::{Category, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Highest accepted item price, in cents ($1,000,000,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000_000;
