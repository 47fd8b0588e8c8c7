//! Non-owning maybe-references.
//!
//! Fallible lookups throughout this crate — container access, [`Value`]
//! accessors — report absence through [`OptRef`]/[`OptMut`] instead of
//! panicking or returning errors. The wrappers never own or manage the
//! lifetime of their referent; the borrow checker guarantees the referent
//! outlives them, so a present reference is always valid.
//!
//! [`Value`]: crate::value::Value

use std::cmp::Ordering;
use std::fmt;

/// A shared reference that may be absent.
pub struct OptRef<'a, T: ?Sized>(Option<&'a T>);

impl<'a, T: ?Sized> OptRef<'a, T> {
    pub fn some(value: &'a T) -> Self {
        Self(Some(value))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// The underlying reference.
    ///
    /// # Panics
    ///
    /// Panics if the reference is absent; check [`has_value`](Self::has_value)
    /// first or use [`value`](Self::value).
    pub fn get(self) -> &'a T {
        match self.0 {
            Some(value) => value,
            None => panic!("OptRef::get on an absent reference"),
        }
    }

    pub fn value(self) -> Option<&'a T> {
        self.0
    }

    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(&'a T) -> U,
    {
        self.0.map(f)
    }
}

impl<T: Copy> OptRef<'_, T> {
    pub fn copied(self) -> Option<T> {
        self.0.copied()
    }
}

impl<T: Clone> OptRef<'_, T> {
    pub fn cloned(self) -> Option<T> {
        self.0.cloned()
    }
}

impl<T: ?Sized> Clone for OptRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OptRef<'_, T> {}

impl<'a, T: ?Sized> From<&'a T> for OptRef<'a, T> {
    fn from(value: &'a T) -> Self {
        Self(Some(value))
    }
}

impl<'a, T: ?Sized> From<Option<&'a T>> for OptRef<'a, T> {
    fn from(value: Option<&'a T>) -> Self {
        Self(value)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for OptRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => f.debug_tuple("OptRef").field(&value).finish(),
            None => f.write_str("OptRef(absent)"),
        }
    }
}

/// A maybe-reference compares to a plain value only when present; an absent
/// reference is unequal to (and unordered against) everything. Two
/// maybe-references can be compared through [`value`](Self::value).
impl<T, U> PartialEq<U> for OptRef<'_, T>
where
    T: ?Sized + PartialEq<U>,
{
    fn eq(&self, other: &U) -> bool {
        matches!(self.0, Some(value) if value == other)
    }
}

impl<T, U> PartialOrd<U> for OptRef<'_, T>
where
    T: ?Sized + PartialOrd<U> + PartialEq<U>,
{
    fn partial_cmp(&self, other: &U) -> Option<Ordering> {
        self.0.and_then(|value| value.partial_cmp(other))
    }
}

/// An exclusive reference that may be absent.
pub struct OptMut<'a, T: ?Sized>(Option<&'a mut T>);

impl<'a, T: ?Sized> OptMut<'a, T> {
    pub fn some(value: &'a mut T) -> Self {
        Self(Some(value))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// The underlying reference.
    ///
    /// # Panics
    ///
    /// Panics if the reference is absent.
    pub fn get(self) -> &'a mut T {
        match self.0 {
            Some(value) => value,
            None => panic!("OptMut::get on an absent reference"),
        }
    }

    pub fn value(self) -> Option<&'a mut T> {
        self.0
    }

    /// Reborrow as a shared maybe-reference without consuming.
    pub fn as_ref(&self) -> OptRef<'_, T> {
        OptRef(self.0.as_deref())
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for OptMut<'a, T> {
    fn from(value: &'a mut T) -> Self {
        Self(Some(value))
    }
}

impl<'a, T: ?Sized> From<Option<&'a mut T>> for OptMut<'a, T> {
    fn from(value: Option<&'a mut T>) -> Self {
        Self(value)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for OptMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("OptMut").field(value).finish(),
            None => f.write_str("OptMut(absent)"),
        }
    }
}

impl<T, U> PartialEq<U> for OptMut<'_, T>
where
    T: ?Sized + PartialEq<U>,
{
    fn eq(&self, other: &U) -> bool {
        matches!(&self.0, Some(value) if **value == *other)
    }
}
