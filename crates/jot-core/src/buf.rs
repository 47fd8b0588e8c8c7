//! Raw heap storage backing [`Array`](crate::array::Array).
//!
//! `RawBuf` owns an allocation of uninitialized slots and nothing else: it
//! never constructs or drops elements, only acquires and releases memory.
//! [`Array`](crate::array::Array) layers element lifetimes on top, so the
//! split mirrors the usual allocation/initialization separation: dropping a
//! `RawBuf` frees the storage without touching its contents.
//!
//! Allocation failure is fatal (`handle_alloc_error`), not a recoverable
//! error. Zero-sized element types never allocate; their capacity is
//! reported as `usize::MAX`.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// RawBuf owns its contents the way Vec does.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An empty buffer: dangling pointer, no allocation.
    pub(crate) const fn new() -> Self {
        let cap = if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            0
        };

        Self {
            ptr: NonNull::dangling(),
            cap,
            _marker: PhantomData,
        }
    }

    /// Allocate storage for exactly `cap` uninitialized slots.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::new();
        if cap > 0 && mem::size_of::<T>() != 0 {
            let layout = match Layout::array::<T>(cap) {
                Ok(layout) => layout,
                Err(_) => panic!("capacity overflow"),
            };

            // SAFETY: the layout has nonzero size (cap > 0 and T is not
            // zero-sized).
            let raw = unsafe { alloc::alloc(layout) };
            buf.ptr = match NonNull::new(raw.cast::<T>()) {
                Some(ptr) => ptr,
                None => alloc::handle_alloc_error(layout),
            };
            buf.cap = cap;
        }

        buf
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn cap(&self) -> usize {
        self.cap
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap > 0 && mem::size_of::<T>() != 0 {
            // The layout was validated when the buffer was allocated.
            if let Ok(layout) = Layout::array::<T>(self.cap) {
                // SAFETY: ptr was returned by alloc with this layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
    }
}
