//! # Items
//!
//! An [`Item`] is one priced, categorized line on an invoice. Items are
//! validated once, at construction, and are immutable afterwards.

use serde::Serialize;
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Category;
use crate::validation::{validate_item_name, validate_price};

/// A purchased item.
///
/// ## Invariants
/// - `name` is non-empty after trimming
/// - `price >= 0`
///
/// Fields are private so these hold for every `Item` in existence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    name: String,
    price: Money,
    category: Category,
}

impl Item {
    /// Creates a validated item.
    ///
    /// ## Errors
    /// [`CoreError::InvalidItem`](crate::CoreError::InvalidItem) when the name
    /// is blank or too long, or the price is negative.
    ///
    /// ## Example
    /// ```rust
    /// use factura_core::{Category, Item, Money};
    ///
    /// let bread = Item::new("Bread", Money::from_units(5000), Category::Food).unwrap();
    /// assert_eq!(bread.category(), Category::Food);
    ///
    /// assert!(Item::new("Bread", Money::from_cents(-1), Category::Food).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, category: Category) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        Ok(Item {
            name,
            price,
            category,
        })
    }

    /// Creates a [`Category::Food`] item.
    pub fn food(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Item::new(name, price, Category::Food)
    }

    /// Creates a [`Category::Clothing`] item.
    pub fn clothing(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Item::new(name, price, Category::Clothing)
    }

    /// Creates a [`Category::Electronics`] item.
    pub fn electronics(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Item::new(name, price, Category::Electronics)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }
}

/// `[Food] Bread - $5000.00`
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("[{}] {} - {}", self.category, self.name, self.price);
        f.pad(&text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
