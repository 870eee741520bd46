/// Decimal text → `BigUint` → binary digit text.
///
/// All arithmetic is delegated to `num-bigint`. This module only decides which
/// tokens count as decimal integers and wraps the digit string in a type that
/// guarantees its shape.
use num_bigint::BigUint;

use super::errors::ConvertError;

/// Base-2 digits of a non-negative integer, most significant first.
///
/// Always non-empty and made only of `'0'` and `'1'`. There are no leading
/// zeros except for the value zero itself, which is `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryDigits(String);

impl BinaryDigits {
    /// The digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of binary digits.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.len()
    }

    /// Consume into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Parse a base-10 literal into an arbitrary-precision unsigned integer.
///
/// Only ASCII digits are accepted. `num-bigint` itself would also take a
/// leading `+` and `_` separators, so the token is checked before parsing.
///
/// # Errors
///
/// - `UnsupportedNegativeValue` for `-` followed by one or more digits.
/// - `InvalidNumberFormat` for anything else that is not `[0-9]+`.
pub fn parse_decimal(text: &str) -> Result<BigUint, ConvertError> {
    if let Some(magnitude) = text.strip_prefix('-')
        && is_decimal_literal(magnitude)
    {
        return Err(ConvertError::UnsupportedNegativeValue {
            input: text.to_owned(),
        });
    }

    if !is_decimal_literal(text) {
        return Err(ConvertError::InvalidNumberFormat {
            input: text.to_owned(),
        });
    }

    BigUint::parse_bytes(text.as_bytes(), 10).ok_or_else(|| ConvertError::InvalidNumberFormat {
        input: text.to_owned(),
    })
}

/// Canonical unsigned binary representation of `n`.
#[must_use]
pub fn to_binary_digits(n: &BigUint) -> BinaryDigits {
    BinaryDigits(n.to_str_radix(2))
}

/// Parse `text` as decimal and return its binary digits.
///
/// # Errors
///
/// Same as [`parse_decimal`].
pub fn convert(text: &str) -> Result<BinaryDigits, ConvertError> {
    parse_decimal(text).map(|n| to_binary_digits(&n))
}

fn is_decimal_literal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
