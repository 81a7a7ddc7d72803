//! A count-min sketch for approximate frequency counting (support no_std).
//!
//! [`CountMinSketch`] keeps a fixed `depth x width` grid of saturating
//! counters. Every item is addressed by its coordinates, one column per row,
//! which the caller derives from its own hashing scheme. Counters can be
//! incremented, decremented (never below zero), queried for the minimum
//! across rows, reset, and halved for aging.
//!
//! ```
//! use cmsketch::{CountMinSketch, SketchError};
//!
//! let mut sketch = CountMinSketch::<u32>::new(4, 3)?;
//! sketch.increment(&[1, 2, 0])?;
//! assert_eq!(sketch.estimate(&[1, 2, 0])?, 1);
//!
//! // one column per row, each below the width
//! assert!(sketch.increment(&[1, 2]).is_err());
//! assert!(sketch.increment(&[1, 2, 4]).is_err());
//! # Ok::<(), SketchError>(())
//! ```
//!
//! [`CountMinSketch`]: struct.CountMinSketch.html
#![no_std]
#![deny(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod macros;
mod counter;
mod error;
mod polyfill;
mod sketch;

pub use counter::Counter;
pub use error::SketchError;
pub use sketch::{CountMinSketch, CountMinSketchBuilder};
