//! Selection of core variants to compute.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::core_length::CoreVariant;
use super::error::EphemeralityError;

/// A non-empty subset of `{left, middle, right, sorted}`.
///
/// Written as 1 to 4 distinct letters from `l`, `m`, `r`, `s` (`"lmrs"` for
/// all four). Displays and serializes in canonical `lmrs` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariantSet {
    bits: u8,
}

impl VariantSet {
    pub fn all() -> Self {
        Self { bits: 0b1111 }
    }

    /// A set holding only `variant`.
    pub fn only(variant: CoreVariant) -> Self {
        Self {
            bits: Self::bit(variant),
        }
    }

    /// Build a set from variants. Returns `None` if `variants` is empty.
    pub fn from_iter_checked<I>(variants: I) -> Option<Self>
    where
        I: IntoIterator<Item = CoreVariant>,
    {
        let bits = variants
            .into_iter()
            .fold(0u8, |acc, v| acc | Self::bit(v));
        (bits != 0).then_some(Self { bits })
    }

    fn bit(variant: CoreVariant) -> u8 {
        match variant {
            CoreVariant::Left => 0b0001,
            CoreVariant::Middle => 0b0010,
            CoreVariant::Right => 0b0100,
            CoreVariant::Sorted => 0b1000,
        }
    }

    pub fn contains(&self, variant: CoreVariant) -> bool {
        self.bits & Self::bit(variant) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Always false for a parsed set; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Selected variants in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = CoreVariant> + '_ {
        CoreVariant::ALL
            .into_iter()
            .filter(move |v| self.contains(*v))
    }
}

impl Default for VariantSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for VariantSet {
    type Err = EphemeralityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EphemeralityError::InvalidVariants(s.to_string());

        if s.is_empty() || s.chars().count() > CoreVariant::ALL.len() {
            return Err(invalid());
        }

        let mut bits = 0u8;
        for letter in s.chars() {
            let variant = CoreVariant::from_letter(letter).ok_or_else(invalid)?;
            let bit = Self::bit(variant);
            if bits & bit != 0 {
                return Err(invalid());
            }
            bits |= bit;
        }
        Ok(Self { bits })
    }
}

impl TryFrom<String> for VariantSet {
    type Error = EphemeralityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VariantSet> for String {
    fn from(set: VariantSet) -> Self {
        set.to_string()
    }
}

impl std::fmt::Display for VariantSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for variant in self.iter() {
            write!(f, "{}", variant.letter())?;
        }
        Ok(())
    }
}
