/// Grouped binary formatting.
///
/// Digits are left-padded with zeros to a whole number of groups, then a
/// separator is inserted between groups. Padding and real digits share one
/// running group counter, so the pad/data seam is not a boundary of its own:
///
/// - `"101"` in groups of 4 → `"0101"`
/// - `"11111111"` in groups of 4 → `"1111 1111"`
/// - `"100000"` in groups of 4 → `"0010 0000"`
use super::bridge::BinaryDigits;
use super::errors::ConvertError;

/// Default number of digits per group.
pub const DEFAULT_GROUP_SIZE: usize = 4;

/// Default separator between groups.
pub const DEFAULT_SEPARATOR: char = ' ';

/// Group size and separator for pretty-printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    group_size: usize,
    separator: char,
}

impl GroupSpec {
    /// Build a spec.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGroupSize` when `group_size` is zero.
    pub fn new(group_size: usize, separator: char) -> Result<Self, ConvertError> {
        if group_size == 0 {
            return Err(ConvertError::InvalidGroupSize { size: group_size });
        }
        Ok(Self {
            group_size,
            separator,
        })
    }

    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }
}

impl Default for GroupSpec {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

/// Smallest multiple of `group_size` that is at least `len`.
///
/// `group_size` must be non-zero; [`GroupSpec`] guarantees that for callers
/// inside this crate.
#[must_use]
pub fn padded_length(len: usize, group_size: usize) -> usize {
    len.div_ceil(group_size) * group_size
}

/// Render `digits` zero-padded and split into groups per `spec`.
///
/// The result never starts or ends with the separator and carries no newline.
#[must_use]
pub fn format_grouped(digits: &BinaryDigits, spec: &GroupSpec) -> String {
    let size = spec.group_size();
    let separator = spec.separator();
    let total = padded_length(digits.bit_len(), size);
    let pad_count = total - digits.bit_len();
    let separators = total / size - 1;

    let mut out = String::with_capacity(total + separators * separator.len_utf8());
    let padded = std::iter::repeat_n('0', pad_count).chain(digits.as_str().chars());

    let mut in_group = 0;
    for digit in padded {
        if in_group == size {
            out.push(separator);
            in_group = 0;
        }
        out.push(digit);
        in_group += 1;
    }
    out
}
