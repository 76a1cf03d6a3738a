//! Growable contiguous sequence storage with explicit, fallible allocation.
//!
//! The crate provides two layers:
//!
//! - [`Buffer`]: a raw owned region of fixed capacity. Allocates on
//!   construction, frees exactly once on drop, never resizes itself and
//!   never drops elements.
//! - [`SeqVec`]: the vector proper. Tracks a logical length over its buffer
//!   and implements all growth, insertion, removal and comparison semantics.
//!   Growth builds the replacement buffer fully before swapping ownership,
//!   so an allocation failure leaves the vector in its prior state.
//!
//! Only two operations can fail: checked element access
//! ([`SeqVec::at`] / [`SeqVec::at_mut`], with [`ErrorKind::OutOfRange`]) and
//! allocation ([`ErrorKind::AllocationFailure`]).

pub mod buffer;
pub mod error;
pub mod vector;

pub use buffer::Buffer;
pub use error::{Error, ErrorKind, Result};
pub use vector::{Reserve, SeqVec};
