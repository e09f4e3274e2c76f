//! # Validation Module
//!
//! Input validation for item construction and price entry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console                                                      │
//! │  ├── Menu option parsing                                               │
//! │  └── parse_amount(): decimal text → Money                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Item::new()                                                  │
//! │  └── THIS MODULE: name and price rules                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Invoice                                                      │
//! │  └── Only ever sees valid items                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use factura_core::validation::{parse_amount, validate_item_name};
//!
//! validate_item_name("Bread").unwrap();
//! assert_eq!(parse_amount("10.5").unwrap().cents(), 1050);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_NAME_LEN, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must be at most [`MAX_ITEM_NAME_LEN`] characters
///
/// ```rust
/// use factura_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Laptop 15\"").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must be at most [`MAX_PRICE_CENTS`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Parses decimal price text into [`Money`].
///
/// Accepts an optional leading `-` or `+`, whole units, and up to two
/// fractional digits (`"25000"`, `"10.5"`, `"-3.25"`). Negative amounts parse
/// successfully; rejecting them is [`validate_price`]'s job.
///
/// ```rust
/// use factura_core::validation::parse_amount;
///
/// assert_eq!(parse_amount(" 3500 ").unwrap().cents(), 350_000);
/// assert_eq!(parse_amount("-3.25").unwrap().cents(), -325);
/// assert!(parse_amount("12.345").is_err());
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(text: &str) -> ValidationResult<Money> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let (negative, digits) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("must be a number"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid("must be a number"));
    }
    if fraction.len() > 2 {
        return Err(invalid("at most two decimal places"));
    }

    let too_large = || invalid("amount is too large");
    let units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| too_large())?
    };
    let minor: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| too_large())? * 10,
        _ => fraction.parse().map_err(|_| too_large())?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(minor))
        .ok_or_else(too_large)?;

    Ok(Money::from_cents(if negative { -cents } else { cents }))
}

// =============================================================================
// Unit Tests
// =============================================================================
