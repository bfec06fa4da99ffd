//! The optional-value container.
//!
//! [`Optional<T>`] is either [`Optional::Present`] holding exactly one owned `T`,
//! or [`Optional::Absent`] holding nothing at all. The present variant is the only
//! place a value can live, so "present but holding nothing" cannot be expressed.
//! Instances are never mutated after construction; every operation either borrows
//! or consumes `self` and hands back a new value.
//!
//! Nullable inputs from the outside world arrive as `Option<T>` and are turned into
//! an `Optional<T>` at the construction boundary, either leniently
//! ([`Optional::of_nullable`]) or asserting that a value exists ([`Optional::of`]).

// used to print out readable forms of an optional
use std::fmt;
// used by the iterators handed out by to_sequence() and iter()
use std::iter::FusedIterator;

// serialized like a nullable value
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PresenceError, Result};

// Absent comes first so ordering agrees with Option: absent sorts before any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    Absent,
    Present(T),
}

// ------------- Construction -------------
impl<T> Optional<T> {
    /// Wraps a value the caller is certain exists.
    ///
    /// Passing `None` is a programming error and yields
    /// [`PresenceError::InvariantViolation`].
    pub fn of(value: Option<T>) -> Result<Self> {
        match value {
            Some(value) => Ok(Self::Present(value)),
            None => Err(PresenceError::InvariantViolation(
                "of() requires a value, use of_nullable() when it may be missing".into(),
            )),
        }
    }
    /// Infallible counterpart of [`Optional::of`] for a value already in hand.
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
    pub const fn empty() -> Self {
        Self::Absent
    }
}

// ------------- Inspection & extraction -------------
impl<T> Optional<T> {
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }
    /// Returns the held value, or [`PresenceError::EmptyValueAccess`] when absent.
    ///
    /// Check [`is_present`](Self::is_present) first, or prefer one of the
    /// default-supplying operations.
    pub fn get(&self) -> Result<&T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(PresenceError::EmptyValueAccess),
        }
    }
    /// Owned form of [`get`](Self::get).
    pub fn into_value(self) -> Result<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(PresenceError::EmptyValueAccess),
        }
    }
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

// ------------- Transformation -------------
impl<T> Optional<T> {
    /// Applies `transform` to the held value. Not invoked when absent.
    pub fn map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(transform(value)),
            Self::Absent => Optional::Absent,
        }
    }
    /// Like [`map`](Self::map), but a `None` coming out of `transform`
    /// collapses the result to absent.
    pub fn map_nullable<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => Optional::of_nullable(transform(value)),
            Self::Absent => Optional::Absent,
        }
    }
    pub fn flat_map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => transform(value),
            Self::Absent => Optional::Absent,
        }
    }
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = self {
            if predicate(&value) {
                return Self::Present(value);
            }
        }
        Self::Absent
    }
}

// ------------- Defaults & alternatives -------------
impl<T> Optional<T> {
    /// The default has already been built by the caller, whether it is needed or not.
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }
    /// `supplier` runs only when absent.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }
    /// Returns `self` untouched when present, otherwise the optional `supplier` builds.
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => supplier(),
        }
    }
    /// Returns the held value, or the error built by `error_supplier`.
    /// The error is only constructed on the absent path.
    pub fn or_else_throw<E, F>(self, error_supplier: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error_supplier()),
        }
    }
}

// ------------- Side effects -------------
impl<T> Optional<T> {
    pub fn if_present<F>(&self, on_present: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            on_present(value);
        }
    }
    /// Runs exactly one of the two callbacks, exactly once.
    pub fn if_present_or_else<F, G>(&self, on_present: F, on_absent: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }
}

// ------------- Sequences -------------
impl<T> Optional<T> {
    /// A sequence of one element when present, none when absent.
    pub fn to_sequence(self) -> IntoIter<T> {
        IntoIter { inner: self.into_option() }
    }
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref().into_option() }
    }
}

#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        self.to_sequence()
    }
}
impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ------------- Conversions -------------
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}
impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Optional[{}]", value),
            Self::Absent => write!(f, "Optional.empty"),
        }
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_of_present_has_exactly_one_element() {
        let mut seq = Optional::present(7).to_sequence();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.next(), Some(7));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None); // fused
    }

    #[test]
    fn sequence_of_absent_is_empty() {
        let seq = Optional::<i32>::empty().to_sequence();
        assert_eq!(seq.size_hint(), (0, Some(0)));
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn borrowed_iteration_leaves_value_in_place() {
        let optional = Optional::present(String::from("SAT3455"));
        let seen: Vec<&String> = (&optional).into_iter().collect();
        assert_eq!(seen, vec![&String::from("SAT3455")]);
        assert!(optional.is_present());
    }

    #[test]
    fn display_matches_both_states() {
        assert_eq!(Optional::present(42).to_string(), "Optional[42]");
        assert_eq!(Optional::<i32>::empty().to_string(), "Optional.empty");
    }

    #[test]
    fn serializes_like_a_nullable_value() {
        assert_eq!(serde_json::to_string(&Optional::present(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Optional::<i32>::empty()).unwrap(), "null");
        let back: Optional<i32> = serde_json::from_str("null").unwrap();
        assert_eq!(back, Optional::Absent);
        let back: Optional<i32> = serde_json::from_str("12").unwrap();
        assert_eq!(back, Optional::Present(12));
    }

    #[test]
    fn ordering_agrees_with_option() {
        assert!(Optional::Absent < Optional::present(i32::MIN));
        let pairs = [(Optional::present(1), Optional::Absent), (Optional::present(1), Optional::present(2))];
        for (a, b) in pairs {
            assert_eq!(a.cmp(&b), a.into_option().cmp(&b.into_option()));
        }
        let mut sorted = vec![Optional::present(3), Optional::Absent, Optional::present(1)];
        sorted.sort();
        assert_eq!(sorted, vec![Optional::Absent, Optional::present(1), Optional::present(3)]);
    }

    #[test]
    fn default_is_absent() {
        assert_eq!(Optional::<u8>::default(), Optional::empty());
    }

    #[test]
    fn option_conversions_agree() {
        assert_eq!(Optional::from(Some(3)), Optional::present(3));
        assert_eq!(Optional::<i32>::from(None), Optional::Absent);
        assert_eq!(Option::from(Optional::present(3)), Some(3));
        assert_eq!(Optional::<i32>::empty().into_option(), None);
    }
}
