//! Growable contiguous array.
//!
//! [`Array`] is the sequence container behind the JSON array variant and the
//! hash map's bucket table. It owns a single heap allocation of capacity
//! `>= len`; slots `[0, len)` hold live elements and `[len, capacity)` are
//! uninitialized storage managed by [`RawBuf`](crate::buf::RawBuf).
//!
//! Growth doubles the capacity (0 → 1, then ×2), and every reallocation
//! relocates existing elements by move, never by clone. Checked access
//! (`at`, `front`, `back`) reports out-of-bounds as an absent
//! [`OptRef`]/[`OptMut`] rather than an error; indexing panics like a slice.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use crate::buf::RawBuf;
use crate::opt_ref::{OptMut, OptRef};

pub struct Array<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Array<T> {
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized; the pointer is
        // aligned and non-null even when no allocation exists (len == 0).
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, plus we hold the unique borrow.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    pub fn push(&mut self, value: T) {
        self.grow_if_full();
        // SAFETY: slot `len` is within capacity and uninitialized.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` held a live element; decrementing first makes
        // it storage again, so the read takes ownership exactly once.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Checked access: absent when `index >= len`.
    pub fn at(&self, index: usize) -> OptRef<'_, T> {
        OptRef::from(self.as_slice().get(index))
    }

    pub fn at_mut(&mut self, index: usize) -> OptMut<'_, T> {
        OptMut::from(self.as_mut_slice().get_mut(index))
    }

    pub fn front(&self) -> OptRef<'_, T> {
        OptRef::from(self.as_slice().first())
    }

    pub fn front_mut(&mut self) -> OptMut<'_, T> {
        OptMut::from(self.as_mut_slice().first_mut())
    }

    pub fn back(&self) -> OptRef<'_, T> {
        OptRef::from(self.as_slice().last())
    }

    pub fn back_mut(&mut self) -> OptMut<'_, T> {
        OptMut::from(self.as_mut_slice().last_mut())
    }

    /// Guarantee capacity for at least `capacity` elements without changing
    /// the length. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Drop excess capacity so that `capacity == len`.
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.capacity() {
            self.reallocate(self.len);
        }
    }

    /// Drop all elements, keeping the allocation.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Zero the length before dropping so a panicking destructor cannot
        // expose half-dropped elements.
        self.len = 0;
        // SAFETY: `live` covers exactly the previously initialized slots.
        unsafe { ptr::drop_in_place(live) };
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            let new_cap = match self.capacity() {
                0 => 1,
                cap => match cap.checked_mul(2) {
                    Some(doubled) => doubled,
                    None => panic!("capacity overflow"),
                },
            };
            self.reallocate(new_cap);
        }
    }

    /// Move the live elements into a fresh allocation of `new_cap` slots and
    /// release the old storage without running destructors.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let new_buf = RawBuf::with_capacity(new_cap);
        // SAFETY: both buffers are valid for `len` slots and do not overlap;
        // the elements are relocated bitwise, so the old buffer must only be
        // deallocated, never dropped element-wise — which is exactly what
        // RawBuf's Drop does.
        unsafe { ptr::copy_nonoverlapping(self.buf.ptr(), new_buf.ptr(), self.len) };
        self.buf = new_buf;
    }
}

impl<T: Clone> Array<T> {
    /// Grow to `new_len` by appending clones of `fill`, or shrink by
    /// dropping the tail.
    pub fn resize(&mut self, new_len: usize, fill: T) {
        if new_len > self.len {
            self.reserve(new_len);
            while self.len < new_len {
                self.push(fill.clone());
            }
        } else if new_len < self.len {
            let tail: *mut [T] = &mut self.as_mut_slice()[new_len..];
            self.len = new_len;
            // SAFETY: the tail slots were initialized and are now storage.
            unsafe { ptr::drop_in_place(tail) };
        }
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        self.clear();
        // RawBuf releases the storage.
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        let mut array = Self::with_capacity(self.len);
        for value in self.iter() {
            array.push(value.clone());
        }
        array
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for Array<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Array<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut array = self;
        let len = array.len;
        // The iterator takes over element ownership; the array must not run
        // destructors on its way out.
        array.len = 0;
        let buf = mem::replace(&mut array.buf, RawBuf::new());

        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

/// Consuming iterator over an [`Array`]. Elements not yet yielded are
/// dropped with the iterator.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: `start` indexes a live, not-yet-yielded element.
        let value = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: `end` now indexes the last live, not-yet-yielded element.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
