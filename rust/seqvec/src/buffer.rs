//! Raw owned storage region with a fixed capacity.
//!
//! [`Buffer`] exclusively owns a contiguous allocation sized for a requested
//! number of elements. It never resizes itself and it never drops elements:
//! element lifecycle is entirely the caller's responsibility. The buffer
//! allocates the region on construction and frees it exactly once on drop.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// An owned contiguous region capable of holding `capacity` elements of `T`.
///
/// The capacity is fixed for the buffer's lifetime. Slots are uninitialized
/// unless the caller has written them; dropping the buffer frees the region
/// without touching slot contents. Growth is a caller-level operation:
/// allocate a new `Buffer`, migrate, then [`swap`](Buffer::swap).
pub struct Buffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
}

impl<T> Buffer<T> {
    /// Creates an empty buffer with capacity 0 and no storage.
    #[inline]
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    /// Allocates a buffer capable of holding `capacity` elements.
    ///
    /// Capacity 0 and zero-sized element types hold no storage. The slots of
    /// the returned buffer are uninitialized.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::AllocationFailure`](crate::ErrorKind::AllocationFailure)
    /// if the array layout overflows the address space or the global allocator
    /// cannot provide the region.
    pub fn with_capacity(capacity: usize) -> Result<Buffer<T>> {
        if capacity == 0 || std::mem::size_of::<T>() == 0 {
            return Ok(Buffer {
                ptr: NonNull::dangling(),
                capacity,
            });
        }
        let layout =
            Layout::array::<T>(capacity).map_err(|_| Error::allocation_failure(capacity))?;
        let ptr = unsafe { alloc::alloc(layout) };
        match NonNull::new(ptr as *mut T) {
            Some(ptr) => Ok(Buffer { ptr, capacity }),
            None => Err(Error::allocation_failure(capacity)),
        }
    }

    /// Returns the number of element slots the region can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a raw pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a reference to the element at `offset`.
    ///
    /// No bounds check is performed at this layer.
    ///
    /// # Safety
    ///
    /// `offset` must be less than [`capacity`](Buffer::capacity) and the slot
    /// must hold an initialized value.
    #[inline]
    pub unsafe fn get(&self, offset: usize) -> &T {
        debug_assert!(offset < self.capacity);
        unsafe { &*self.ptr.as_ptr().add(offset) }
    }

    /// Returns a mutable reference to the element at `offset`.
    ///
    /// # Safety
    ///
    /// `offset` must be less than [`capacity`](Buffer::capacity) and the slot
    /// must hold an initialized value.
    #[inline]
    pub unsafe fn get_mut(&mut self, offset: usize) -> &mut T {
        debug_assert!(offset < self.capacity);
        unsafe { &mut *self.ptr.as_ptr().add(offset) }
    }

    /// Writes `value` into the slot at `offset` without reading or dropping
    /// any previous content.
    ///
    /// # Safety
    ///
    /// `offset` must be less than [`capacity`](Buffer::capacity). If the slot
    /// already holds an initialized value, that value is leaked.
    #[inline]
    pub unsafe fn write(&mut self, offset: usize, value: T) {
        debug_assert!(offset < self.capacity);
        unsafe { std::ptr::write(self.ptr.as_ptr().add(offset), value) }
    }

    /// Exchanges the owned regions of two buffers in O(1), without allocating.
    #[inline]
    pub fn swap(&mut self, other: &mut Buffer<T>) {
        std::mem::swap(self, other);
    }

    /// Transfers ownership of the region out of `self`, leaving it with
    /// capacity 0 and no storage.
    #[inline]
    pub fn take(&mut self) -> Buffer<T> {
        std::mem::replace(self, Buffer::new())
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        if self.capacity != 0 && std::mem::size_of::<T>() != 0 {
            // The layout was validated when the region was allocated.
            let layout = Layout::array::<T>(self.capacity).expect("array layout");
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

unsafe impl<T: Send> Send for Buffer<T> {}

unsafe impl<T: Sync> Sync for Buffer<T> {}
