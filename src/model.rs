use std::borrow::Borrow;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use approx::abs_diff_eq;
use ordered_float::OrderedFloat;
use strum::{Display, EnumIter, EnumString};
use tracing::warn;

/// A named node of the transport network.
/// Labels are trimmed of surrounding whitespace, two labels that only differ by surrounding
/// whitespace identify the same station.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Station(String);

impl Station {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Station {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative weight accumulated along a path, either a cost or a time.
/// Weights are totally ordered so they can key the search frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(OrderedFloat<f64>);

impl Weight {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    /// Weight of a station that has not been reached.
    pub const INFINITY: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn value(&self) -> f64 {
        self.0.0
    }

    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    /// Returns true if both weights are equal up to floating point rounding errors.
    pub fn approx_eq(&self, other: Self) -> bool {
        const EPSILON: f64 = 1e-9;
        self == &other || abs_diff_eq!(self.value(), other.value(), epsilon = EPSILON)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Add for Weight {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, w| acc + w)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The two independent weights carried by every connection.
/// Both are stored together so that whoever reads an edge always sees a consistent pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weights {
    pub cost: Weight,
    pub time: Weight,
}

impl Weights {
    pub const ZERO: Self = Self {
        cost: Weight::ZERO,
        time: Weight::ZERO,
    };

    pub const fn new(cost: f64, time: f64) -> Self {
        Self {
            cost: Weight::new(cost),
            time: Weight::new(time),
        }
    }

    /// Gets the weight the given mode optimizes.
    pub const fn get(&self, mode: Mode) -> Weight {
        match mode {
            Mode::Cheapest => self.cost,
            Mode::Fastest => self.time,
        }
    }
}

impl PartialEq for Weights {
    fn eq(&self, other: &Self) -> bool {
        self.cost.approx_eq(other.cost) && self.time.approx_eq(other.time)
    }
}

impl Add for Weights {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            cost: self.cost + rhs.cost,
            time: self.time + rhs.time,
        }
    }
}

impl AddAssign for Weights {
    fn add_assign(&mut self, rhs: Self) {
        self.cost += rhs.cost;
        self.time += rhs.time;
    }
}

impl Sum for Weights {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, w| acc + w)
    }
}

/// Selects the weight dimension a route search optimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Lowest total cost.
    #[default]
    Cheapest,
    /// Lowest total travel time.
    Fastest,
}

impl Mode {
    /// Parses the mode ignoring case and surrounding whitespace.
    /// Unknown modes fall back to [`Mode::Cheapest`].
    pub fn parse_or_default(mode: &str) -> Self {
        mode.trim().parse().unwrap_or_else(|_| {
            let fallback = Self::default();
            warn!("Invalid mode {mode:?}, defaulting to {fallback}");
            fallback
        })
    }
}
