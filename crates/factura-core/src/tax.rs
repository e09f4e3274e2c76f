//! # Tax Policies and the Registry
//!
//! The registry maps each [`Category`] to the [`TaxPolicy`] that taxes it.
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Per-Item Tax Dispatch                               │
//! │                                                                         │
//! │  Item { category: Clothing, price: 25000 }                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  registry.lookup(Clothing) ── None ──► MissingTaxRule (in Invoice)     │
//! │       │                                                                 │
//! │       ▼ Some(policy)                                                   │
//! │  policy.compute(item) = 25000 × 19% = 4750                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no fallback and no default rate: a category is taxed only if it
//! was registered.
//!
//! ## Usage
//! ```rust
//! use factura_core::{Category, Item, Money, TaxRegistry};
//!
//! let registry = TaxRegistry::standard();
//! let shirt = Item::clothing("Shirt", Money::from_units(25000)).unwrap();
//!
//! let policy = registry.lookup(Category::Clothing).unwrap();
//! assert_eq!(policy.compute(&shirt), Money::from_units(4750));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::item::Item;
use crate::money::Money;
use crate::types::{Category, TaxRate};

// =============================================================================
// Standard Table
// =============================================================================

/// The fixed rate table the standard registry is built from.
///
/// | Category    | Rate |
/// |-------------|------|
/// | Food        | 5%   |
/// | Clothing    | 19%  |
/// | Electronics | 25%  |
pub const STANDARD_TAX_TABLE: [(Category, TaxRate); 3] = [
    (Category::Food, TaxRate::from_percent(5)),
    (Category::Clothing, TaxRate::from_percent(19)),
    (Category::Electronics, TaxRate::from_percent(25)),
];

// =============================================================================
// Tax Policy
// =============================================================================

/// A tax rate plus the rule that turns an item into tax owed.
///
/// Stateless and `Copy`, so one policy can serve any number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxPolicy {
    rate: TaxRate,
}

impl TaxPolicy {
    #[inline]
    pub const fn new(rate: TaxRate) -> Self {
        TaxPolicy { rate }
    }

    #[inline]
    pub const fn rate(&self) -> TaxRate {
        self.rate
    }

    /// Tax owed on one item: `price × rate / 100`, rounded to the cent.
    ///
    /// Never negative, since item prices never are.
    #[inline]
    pub fn compute(&self, item: &Item) -> Money {
        item.price().calculate_tax(self.rate)
    }
}

impl fmt::Display for TaxPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VAT ({})", self.rate)
    }
}

// =============================================================================
// Tax Registry
// =============================================================================

/// Category → policy mapping, consulted once per item.
///
/// ## Lifecycle
/// Built up front (by value, through the consuming builder methods), then
/// shared by reference with every [`Invoice`](crate::Invoice) and
/// [`InvoicePrinter`](crate::InvoicePrinter). There is no way to mutate a
/// registry through a shared reference.
///
/// Completeness is not checked: a registry may omit categories, and the
/// omission surfaces only when an invoice holding such an item is taxed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxRegistry {
    rules: HashMap<Category, TaxPolicy>,
}

impl TaxRegistry {
    /// A registry with no rules.
    pub fn empty() -> Self {
        TaxRegistry::default()
    }

    /// The registry built from [`STANDARD_TAX_TABLE`].
    pub fn standard() -> Self {
        TaxRegistry::from_rules(
            STANDARD_TAX_TABLE
                .iter()
                .map(|&(category, rate)| (category, TaxPolicy::new(rate))),
        )
    }

    /// Builds a registry from `(category, policy)` pairs.
    ///
    /// A later pair for the same category replaces an earlier one.
    pub fn from_rules(rules: impl IntoIterator<Item = (Category, TaxPolicy)>) -> Self {
        TaxRegistry {
            rules: rules.into_iter().collect(),
        }
    }

    /// Returns the registry with `policy` registered for `category`.
    ///
    /// ```rust
    /// use factura_core::{Category, TaxPolicy, TaxRate, TaxRegistry};
    ///
    /// let registry = TaxRegistry::empty()
    ///     .with_rule(Category::Food, TaxPolicy::new(TaxRate::from_percent(5)));
    ///
    /// assert!(registry.contains(Category::Food));
    /// assert!(registry.lookup(Category::Clothing).is_none());
    /// ```
    #[must_use]
    pub fn with_rule(mut self, category: Category, policy: TaxPolicy) -> Self {
        self.rules.insert(category, policy);
        self
    }

    /// The policy registered for exactly this category, if any.
    #[inline]
    pub fn lookup(&self, category: Category) -> Option<&TaxPolicy> {
        self.rules.get(&category)
    }

    #[inline]
    pub fn contains(&self, category: Category) -> bool {
        self.rules.contains_key(&category)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered rules in category order.
    pub fn rules(&self) -> Vec<(Category, TaxPolicy)> {
        let mut rules: Vec<_> = self.rules.iter().map(|(c, p)| (*c, *p)).collect();
        rules.sort_by_key(|(category, _)| *category);
        rules
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Category, units: i64) -> Item {
        Item::new("test", Money::from_units(units), category).unwrap()
    }

    #[test]
    fn test_standard_registry_rates() {
        let registry = TaxRegistry::standard();
        assert_eq!(registry.len(), 3);

        let rate = |c| registry.lookup(c).map(|p| p.rate().bps());
        assert_eq!(rate(Category::Food), Some(500));
        assert_eq!(rate(Category::Clothing), Some(1900));
        assert_eq!(rate(Category::Electronics), Some(2500));
    }

    #[test]
    fn test_standard_registry_covers_every_category() {
        let registry = TaxRegistry::standard();
        for category in Category::ALL {
            assert!(registry.contains(category), "{category} has no rule");
        }
    }

    #[test]
    fn test_policy_compute() {
        let food = TaxPolicy::new(TaxRate::from_percent(5));
        assert_eq!(food.compute(&item(Category::Food, 5000)), Money::from_units(250));

        let electronics = TaxPolicy::new(TaxRate::from_percent(25));
        assert_eq!(
            electronics.compute(&item(Category::Electronics, 1500000)),
            Money::from_units(375000)
        );
    }

    #[test]
    fn test_policy_ignores_item_category() {
        // The registry decides which policy applies; the policy itself only taxes the price.
        let policy = TaxPolicy::new(TaxRate::from_percent(19));
        assert_eq!(
            policy.compute(&item(Category::Food, 100)),
            policy.compute(&item(Category::Electronics, 100))
        );
    }

    #[test]
    fn test_empty_registry_has_no_fallback() {
        let registry = TaxRegistry::empty();
        assert!(registry.is_empty());
        for category in Category::ALL {
            assert!(registry.lookup(category).is_none());
        }
    }

    #[test]
    fn test_with_rule_replaces_existing() {
        let registry = TaxRegistry::standard()
            .with_rule(Category::Food, TaxPolicy::new(TaxRate::from_percent(10)));
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.lookup(Category::Food).map(TaxPolicy::rate),
            Some(TaxRate::from_percent(10))
        );
    }

    #[test]
    fn test_rules_sorted_by_category() {
        let registry = TaxRegistry::from_rules([
            (Category::Electronics, TaxPolicy::new(TaxRate::from_percent(25))),
            (Category::Food, TaxPolicy::new(TaxRate::from_percent(5))),
        ]);
        let categories: Vec<_> = registry.rules().into_iter().map(|(c, _)| c).collect();
        assert_eq!(categories, vec![Category::Food, Category::Electronics]);
    }

    #[test]
    fn test_policy_display() {
        let policy = TaxPolicy::new(TaxRate::from_percent(19));
        assert_eq!(policy.to_string(), "VAT (19.0%)");
    }
}
