//! Product draft validation and normalization.
//!
//! [`validate`] checks every field of a [`ProductDraft`] and reports all
//! failures together. A draft that passes is converted into a typed
//! [`ProductInput`] with the name trimmed, ready to be committed.
//!
//! The only variant knob is the minimum name length, carried by
//! [`ValidationPolicy`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Field, ProductDraft, ProductInput};

/// Result of validating a draft.
pub type ValidationResult = Result<ProductInput, FieldErrors>;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    Required,
    #[error("Name must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Price must be greater than 0")]
    MustBePositive,
    #[error("Stock cannot be negative")]
    CannotBeNegative,
    #[error("Stock is too large")]
    OutOfRange,
}

/// Field-scoped validation errors, kept in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drops the error for `field`, as a form does when that field is edited.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error)?;
        }
        Ok(())
    }
}

/// Validation strictness.
///
/// `min_name_length` of 0 or 1 only requires a non-blank name. Anything larger
/// requires that many characters after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub min_name_length: usize,
}

impl ValidationPolicy {
    pub const STRICT_MIN_NAME_LENGTH: usize = 3;

    pub fn loose() -> Self {
        Self { min_name_length: 1 }
    }

    pub fn strict() -> Self {
        Self {
            min_name_length: Self::STRICT_MIN_NAME_LENGTH,
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::loose()
    }
}

/// Validates a draft and, when every field passes, converts it into a
/// [`ProductInput`].
///
/// # Examples
/// ```
/// use product_inventory::domain::{Field, ProductDraft};
/// use product_inventory::validation::{validate, FieldError, ValidationPolicy};
///
/// let input = validate(&ProductDraft::new("  Desk ", "120.5", "4"), &ValidationPolicy::loose()).unwrap();
/// assert_eq!(input.name, "Desk");
/// assert_eq!(input.stock, 4);
///
/// let errors = validate(&ProductDraft::new("", "0", "-1"), &ValidationPolicy::loose()).unwrap_err();
/// assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
/// assert_eq!(errors.get(Field::Price), Some(FieldError::MustBePositive));
/// assert_eq!(errors.get(Field::Stock), Some(FieldError::CannotBeNegative));
/// ```
pub fn validate(draft: &ProductDraft, policy: &ValidationPolicy) -> ValidationResult {
    let mut errors = FieldErrors::new();

    let name = draft.name.trim();
    if policy.min_name_length > 1 {
        if name.chars().count() < policy.min_name_length {
            errors.insert(
                Field::Name,
                FieldError::TooShort {
                    min: policy.min_name_length,
                },
            );
        }
    } else if name.is_empty() {
        errors.insert(Field::Name, FieldError::Required);
    }

    let price = match parse_price(&draft.price) {
        Some(price) if price > 0.0 => Some(price),
        _ => {
            errors.insert(Field::Price, FieldError::MustBePositive);
            None
        }
    };

    let stock = match parse_stock(&draft.stock) {
        LenientInt::Value(n) if n < 0 => {
            errors.insert(Field::Stock, FieldError::CannotBeNegative);
            None
        }
        LenientInt::Value(n) => match u32::try_from(n) {
            Ok(stock) => Some(stock),
            Err(_) => {
                errors.insert(Field::Stock, FieldError::OutOfRange);
                None
            }
        },
        LenientInt::Invalid => {
            errors.insert(Field::Stock, FieldError::CannotBeNegative);
            None
        }
        LenientInt::Overflow => {
            errors.insert(Field::Stock, FieldError::OutOfRange);
            None
        }
    };

    match (price, stock) {
        (Some(price), Some(stock)) if errors.is_empty() => Ok(ProductInput {
            name: name.to_string(),
            price,
            stock,
        }),
        _ => Err(errors),
    }
}

/// Parses a price field. Blank, malformed and non-finite text yield `None`.
pub(crate) fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// Outcome of the lenient integer parse used for stock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LenientInt {
    Value(i64),
    Invalid,
    Overflow,
}

/// Parses an optional sign and the leading decimal digits, ignoring whatever
/// follows, so `"5.9"` reads as 5 and `"12 units"` as 12.
pub(crate) fn parse_stock(raw: &str) -> LenientInt {
    let text = raw.trim();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return LenientInt::Invalid;
    }

    match rest[..digits].parse::<i64>() {
        Ok(n) if negative => LenientInt::Value(-n),
        Ok(n) => LenientInt::Value(n),
        Err(_) => LenientInt::Overflow,
    }
}
