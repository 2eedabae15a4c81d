//! # wordstat-math
//!
//! **Tier 0 (Numeric Helpers)**
//!
//! Deterministic numeric helpers for wordstat microcrates.
//!
//! ## What belongs here
//! * Exact fixed-point division and rounding
//! * Tie-aware maximum selection
//!
//! ## What does NOT belong here
//! * Word counting or tokenization
//! * Report formatting
//!
//! Everything here is integer arithmetic. Averages are carried as
//! [`FixedDecimal`] so that rounding is exact and the rendered form keeps
//! every fractional digit.

#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest supported number of fractional digits.
///
/// `u64::MAX * 10^18` still fits in a `u128`.
pub const MAX_SCALE: u32 = 18;

/// A non-negative decimal with a fixed number of fractional digits.
///
/// `units` is the value multiplied by `10^scale`. Equality is
/// representation equality: `4.50` and `4.5` are different values here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedDecimal {
    units: u128,
    scale: u32,
}

impl FixedDecimal {
    /// Build from raw units. `scale` is clamped to [`MAX_SCALE`].
    #[must_use]
    pub fn from_units(units: u128, scale: u32) -> Self {
        Self {
            units,
            scale: scale.min(MAX_SCALE),
        }
    }

    #[must_use]
    pub fn units(&self) -> u128 {
        self.units
    }

    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Integer part, truncated.
    #[must_use]
    pub fn whole(&self) -> u128 {
        self.units / pow10(self.scale)
    }

    /// Fractional digits as an integer (`4.056` -> `56`).
    #[must_use]
    pub fn fraction(&self) -> u128 {
        self.units % pow10(self.scale)
    }

    /// Lossy conversion for callers that need a float.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.units as f64 / pow10(self.scale) as f64
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.units);
        }
        write!(
            f,
            "{}.{:0width$}",
            self.whole(),
            self.fraction(),
            width = self.scale as usize
        )
    }
}

/// Error returned when a string is not a plain non-negative decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecimalError {
    input: String,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid decimal literal: {:?}", self.input)
    }
}

impl std::error::Error for ParseDecimalError {}

impl FromStr for FixedDecimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecimalError {
            input: s.to_string(),
        };
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) if !f.is_empty() => (w, f),
            Some(_) => return Err(err()),
            None => (s, ""),
        };
        if whole.is_empty()
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }
        let scale = u32::try_from(frac.len()).map_err(|_| err())?;
        if scale > MAX_SCALE {
            return Err(err());
        }
        let digits = format!("{whole}{frac}");
        let units = digits.parse::<u128>().map_err(|_| err())?;
        Ok(Self { units, scale })
    }
}

impl Serialize for FixedDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FixedDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn pow10(scale: u32) -> u128 {
    10u128.pow(scale)
}

/// Divide `numer / denom` and round half-up to `scale` fractional digits.
///
/// Returns `None` when `denom` is zero. A remainder of exactly one half
/// rounds away from zero (`4.5555 -> 4.556`, `0.0005 -> 0.001`).
#[must_use]
pub fn div_round_half_up(numer: u64, denom: u64, scale: u32) -> Option<FixedDecimal> {
    if denom == 0 {
        return None;
    }
    let scale = scale.min(MAX_SCALE);
    let scaled = u128::from(numer) * pow10(scale);
    let denom = u128::from(denom);
    let mut units = scaled / denom;
    let rem = scaled % denom;
    if rem * 2 >= denom {
        units += 1;
    }
    Some(FixedDecimal { units, scale })
}

/// Return the largest value and every key that reaches it, keys ascending.
///
/// An empty input yields `(V::default(), vec![])`.
#[must_use]
pub fn max_with_ties<K, V, I>(entries: I) -> (V, Vec<K>)
where
    K: Ord,
    V: Ord + Copy + Default,
    I: IntoIterator<Item = (K, V)>,
{
    let mut best = V::default();
    let mut keys: Vec<K> = Vec::new();
    for (key, value) in entries {
        if keys.is_empty() || value > best {
            best = value;
            keys.clear();
            keys.push(key);
        } else if value == best {
            keys.push(key);
        }
    }
    keys.sort();
    (best, keys)
}
