//! Total orders used to arrange values in the trees of this crate.
//!
//! A tree never asks its values how they compare. Instead it is handed a
//! [`Compare`] at construction and consults it for every descent. Any closure
//! of the shape `Fn(&T, &T) -> Ordering` is a `Compare`, [`Natural`] defers to
//! `Ord`, and [`OrderCode`] names the string orderings the `dendrologist`
//! binary offers on its command line.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use dendrology::order::{Compare, Natural, OrderCode};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"ash", &"oak"), Ordering::Equal);
//!
//! let code: OrderCode = "-1".parse().unwrap();
//! assert_eq!(code.compare("elm", "fir"), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A total order over `T`.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The order given by `T`'s own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Returned when a string does not name one of the [`OrderCode`]s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order code `{0}`, expected an integer in -3..=3")]
pub struct InvalidOrderCode(pub String);

/// The orderings over strings selectable by number. Lengths are measured in
/// characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderCode {
    /// `0`: increasing length, ties broken in reverse lexicographic order.
    LengthThenReverseLexicographic,
    /// `-1`: reverse lexicographic order.
    ReverseLexicographic,
    /// `1`: lexicographic order.
    Lexicographic,
    /// `-2`: decreasing length. Strings of equal length are equal.
    DecreasingLength,
    /// `2`: increasing length. Strings of equal length are equal.
    IncreasingLength,
    /// `-3`: decreasing length, ties broken in reverse lexicographic order.
    DecreasingLengthThenReverseLexicographic,
    /// `3`: increasing length, ties broken in lexicographic order.
    IncreasingLengthThenLexicographic,
}

impl OrderCode {
    /// Every order code, in numeric order.
    pub const ALL: [OrderCode; 7] = [
        Self::DecreasingLengthThenReverseLexicographic,
        Self::DecreasingLength,
        Self::ReverseLexicographic,
        Self::LengthThenReverseLexicographic,
        Self::Lexicographic,
        Self::IncreasingLength,
        Self::IncreasingLengthThenLexicographic,
    ];

    /// The number that selects this ordering.
    pub fn code(self) -> i8 {
        match self {
            Self::DecreasingLengthThenReverseLexicographic => -3,
            Self::DecreasingLength => -2,
            Self::ReverseLexicographic => -1,
            Self::LengthThenReverseLexicographic => 0,
            Self::Lexicographic => 1,
            Self::IncreasingLength => 2,
            Self::IncreasingLengthThenLexicographic => 3,
        }
    }

    /// Looks up the ordering selected by `code`.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|order| i64::from(order.code()) == code)
    }

    fn compare_str(self, a: &str, b: &str) -> Ordering {
        let by_len = || a.chars().count().cmp(&b.chars().count());
        match self {
            Self::LengthThenReverseLexicographic => by_len().then_with(|| b.cmp(a)),
            Self::ReverseLexicographic => b.cmp(a),
            Self::Lexicographic => a.cmp(b),
            Self::DecreasingLength => by_len().reverse(),
            Self::IncreasingLength => by_len(),
            Self::DecreasingLengthThenReverseLexicographic => {
                by_len().reverse().then_with(|| b.cmp(a))
            }
            Self::IncreasingLengthThenLexicographic => by_len().then_with(|| a.cmp(b)),
        }
    }
}

impl<T: AsRef<str> + ?Sized> Compare<T> for OrderCode {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.compare_str(a.as_ref(), b.as_ref())
    }
}

impl FromStr for OrderCode {
    type Err = InvalidOrderCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| InvalidOrderCode(s.to_owned()))
    }
}

impl fmt::Display for OrderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::LengthThenReverseLexicographic => {
                "increasing length, then reverse lexicographic"
            }
            Self::ReverseLexicographic => "reverse lexicographic",
            Self::Lexicographic => "lexicographic",
            Self::DecreasingLength => "decreasing length",
            Self::IncreasingLength => "increasing length",
            Self::DecreasingLengthThenReverseLexicographic => {
                "decreasing length, then reverse lexicographic"
            }
            Self::IncreasingLengthThenLexicographic => "increasing length, then lexicographic",
        };
        write!(f, "{} ({})", self.code(), description)
    }
}
