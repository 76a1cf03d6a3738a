//! Growable contiguous vector over a raw [`Buffer`], with explicit, fallible
//! allocation.
//!
//! [`SeqVec`] tracks a logical length over an owned fixed-capacity region.
//! Slots `[0, len)` hold initialized elements; slots `[len, capacity)` are
//! allocated headroom and never touched until they become live. Every growth
//! path fully builds a replacement buffer, migrates the live prefix with a
//! bitwise move, and only then swaps ownership, so the vector is left intact
//! when allocation fails.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr;

use crate::buffer::Buffer;
use crate::error::{Error, Result};

/// A capacity hint consumed by [`SeqVec::with_reserve`].
///
/// Distinguishes pre-sizing (`with_reserve(Reserve(n))`: length 0, capacity
/// `n`) from pre-filling ([`SeqVec::with_len`]: length and capacity `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserve(pub usize);

impl Reserve {
    /// Returns the requested capacity, in elements.
    #[inline]
    pub fn capacity(self) -> usize {
        self.0
    }
}

impl From<usize> for Reserve {
    fn from(capacity: usize) -> Reserve {
        Reserve(capacity)
    }
}

/// A growable, contiguous-storage sequence container.
///
/// Comparable to `Vec<T>`, with two deliberate differences: every operation
/// that may allocate returns a [`Result`] instead of aborting on allocation
/// failure, and the reallocation policy is fixed and observable (doubling
/// with a floor of 1; [`reserve`](SeqVec::reserve) allocates exactly what was
/// asked).
pub struct SeqVec<T> {
    buf: Buffer<T>,
    len: usize,
}

impl<T> SeqVec<T> {
    /// Creates an empty vector with no storage.
    #[inline]
    pub const fn new() -> SeqVec<T> {
        SeqVec {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a vector of `len` default-valued elements, with capacity
    /// equal to `len`.
    pub fn with_len(len: usize) -> Result<SeqVec<T>>
    where
        T: Default,
    {
        let mut vec = SeqVec {
            buf: Buffer::with_capacity(len)?,
            len: 0,
        };
        while vec.len < len {
            unsafe { vec.buf.write(vec.len, T::default()) };
            vec.len += 1;
        }
        Ok(vec)
    }

    /// Creates a vector of `len` clones of `value`, with capacity equal
    /// to `len`.
    pub fn from_elem(len: usize, value: T) -> Result<SeqVec<T>>
    where
        T: Clone,
    {
        let mut vec = SeqVec {
            buf: Buffer::with_capacity(len)?,
            len: 0,
        };
        while vec.len < len {
            unsafe { vec.buf.write(vec.len, value.clone()) };
            vec.len += 1;
        }
        Ok(vec)
    }

    /// Creates a vector holding a clone of each element of `values`, in
    /// order, with capacity equal to the slice length.
    pub fn from_slice(values: &[T]) -> Result<SeqVec<T>>
    where
        T: Clone,
    {
        let mut vec = SeqVec {
            buf: Buffer::with_capacity(values.len())?,
            len: 0,
        };
        for value in values {
            unsafe { vec.buf.write(vec.len, value.clone()) };
            vec.len += 1;
        }
        Ok(vec)
    }

    /// Creates an empty vector with the capacity carried by `hint`.
    ///
    /// The length of the returned vector is 0.
    pub fn with_reserve(hint: Reserve) -> Result<SeqVec<T>> {
        Ok(SeqVec {
            buf: Buffer::with_capacity(hint.capacity())?,
            len: 0,
        })
    }

    /// Returns a deep copy of the vector, with capacity equal to its length.
    pub fn try_clone(&self) -> Result<SeqVec<T>>
    where
        T: Clone,
    {
        SeqVec::from_slice(self.as_slice())
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a reference to the element at `index`, or `None` if
    /// `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(unsafe { self.buf.get(index) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            Some(unsafe { self.buf.get_mut(index) })
        } else {
            None
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if
    /// `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        if index < self.len {
            Ok(unsafe { self.buf.get(index) })
        } else {
            Err(Error::out_of_range(index, self.len))
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if
    /// `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index < self.len {
            Ok(unsafe { self.buf.get_mut(index) })
        } else {
            Err(Error::out_of_range(index, self.len))
        }
    }

    /// Returns a slice over the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns a mutable slice over the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drops all live elements. The length becomes 0; capacity and storage
    /// are untouched.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the vector to `new_len` elements, dropping the tail.
    ///
    /// Has no effect when `new_len >= len`. Never deallocates.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = self.len - new_len;
        // Commit the new length before dropping, so a panicking element
        // destructor cannot leave dropped slots observable as live.
        self.len = new_len;
        unsafe {
            let p = self.buf.as_mut_ptr().add(new_len);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p, tail));
        }
    }

    /// Resizes the vector to `new_len` elements, filling any new slots with
    /// `T::default()`.
    ///
    /// Shrinking truncates without deallocating. Growing beyond the current
    /// capacity reallocates to `max(2 * capacity, new_len)`; only
    /// `[len, new_len)` becomes live, the rest stays headroom.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::AllocationFailure`](crate::ErrorKind::AllocationFailure)
    /// if growth is required and the new buffer cannot be allocated. The
    /// vector is unchanged in that case.
    pub fn resize(&mut self, new_len: usize) -> Result<()>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > self.capacity() {
            self.grow_to(self.capacity().saturating_mul(2).max(new_len))?;
        }
        while self.len < new_len {
            unsafe { self.buf.write(self.len, T::default()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Resizes the vector to `new_len` elements, filling any new slots with
    /// clones of `value`.
    ///
    /// Same shrink/grow behavior as [`resize`](SeqVec::resize).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::AllocationFailure`](crate::ErrorKind::AllocationFailure)
    /// if growth is required and the new buffer cannot be allocated.
    pub fn resize_with(&mut self, new_len: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > self.capacity() {
            self.grow_to(self.capacity().saturating_mul(2).max(new_len))?;
        }
        while self.len < new_len {
            unsafe { self.buf.write(self.len, value.clone()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Ensures the vector can hold at least `capacity` elements in total.
    ///
    /// Note that unlike `Vec::reserve`, the argument is a total capacity,
    /// not an additional one. When growth is needed, exactly `capacity`
    /// slots are allocated. Never shrinks; the length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::AllocationFailure`](crate::ErrorKind::AllocationFailure)
    /// if the new buffer cannot be allocated. The vector is unchanged in
    /// that case.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity > self.capacity() {
            self.grow_to(capacity)?;
        }
        Ok(())
    }

    /// Appends an element to the back of the vector.
    ///
    /// Amortized O(1): when full, capacity grows to `max(1, 2 * capacity)`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::AllocationFailure`](crate::ErrorKind::AllocationFailure)
    /// if growth is required and the new buffer cannot be allocated. The
    /// vector is unchanged in that case.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            self.grow_to(self.capacity().saturating_mul(2).max(1))?;
        }
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, or `None` if the vector is
    /// empty. Never reallocates.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Inserts `value` at `index`, shifting the suffix one slot to the
    /// right. `index == len` appends. Returns the offset of the inserted
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::AllocationFailure`](crate::ErrorKind::AllocationFailure)
    /// if growth is required and the new buffer cannot be allocated. The
    /// vector is unchanged in that case and `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize> {
        assert!(
            index <= self.len,
            "insertion index {index} out of range for length {}",
            self.len
        );
        if self.len == self.capacity() {
            // Full: build the replacement with the element already in place,
            // then swap ownership.
            let mut fresh = Buffer::with_capacity(self.capacity().saturating_mul(2).max(1))?;
            unsafe {
                let src = self.buf.as_ptr();
                let dst = fresh.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                ptr::write(dst.add(index), value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), self.len - index);
            }
            self.buf.swap(&mut fresh);
        } else {
            unsafe {
                let p = self.buf.as_mut_ptr().add(index);
                ptr::copy(p, p.add(1), self.len - index);
                ptr::write(p, value);
            }
        }
        self.len += 1;
        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting the suffix one
    /// slot to the left. The element that followed the removed one now lives
    /// at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index {index} out of range for length {}",
            self.len
        );
        unsafe {
            let p = self.buf.as_mut_ptr().add(index);
            let value = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Reallocates to exactly `new_capacity` slots and migrates the live
    /// prefix by bitwise move. The old region is freed only after the new
    /// one is fully populated; on allocation failure nothing changes.
    #[cold]
    fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = Buffer::with_capacity(new_capacity)?;
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        self.buf.swap(&mut fresh);
        Ok(())
    }
}

impl<T> Drop for SeqVec<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SeqVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SeqVec<T> {
    /// Deep copy with capacity equal to the source length.
    ///
    /// # Panics
    ///
    /// Panics if allocation fails; use [`SeqVec::try_clone`] for the
    /// fallible form.
    fn clone(&self) -> SeqVec<T> {
        self.try_clone().expect("allocation failure while cloning")
    }

    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() {
            // Assigning an empty vector drops both length and capacity.
            *self = SeqVec::new();
        } else {
            *self = source.clone();
        }
    }
}

impl<T> std::ops::Deref for SeqVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> std::ops::DerefMut for SeqVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a SeqVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SeqVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for SeqVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SeqVec<T> {}

impl<T: PartialOrd> PartialOrd for SeqVec<T> {
    /// Lexicographic ordering over the logical element sequence.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SeqVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SeqVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SeqVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_slice().fmt(f)
    }
}
