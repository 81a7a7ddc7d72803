//! This mod implements a Count-Min sketch over caller-supplied coordinates.
//!
//! The sketch never hashes items itself. Callers map every item to exactly
//! one column per row (its coordinates) and pass those in, which keeps the
//! hashing scheme outside of the counter grid.
use crate::counter::Counter;
use crate::error::SketchError;
use crate::polyfill;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::mem;
use core::slice::ChunksExact;

/// `CountMinSketchBuilder` is used to help build a [`CountMinSketch`] with custom configurations.
///
/// [`CountMinSketch`]: struct.CountMinSketch.html
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CountMinSketchBuilder {
    width: usize,
    depth: usize,
    error_bounds: Option<(f64, f64)>,
}

impl CountMinSketchBuilder {
    /// The constructor of CountMinSketchBuilder
    pub fn new(width: usize, depth: usize) -> Self {
        Self::default().set_width(width).set_depth(depth)
    }

    /// Set the number of columns per row
    pub fn set_width(self, width: usize) -> Self {
        Self {
            width,
            depth: self.depth,
            error_bounds: self.error_bounds,
        }
    }

    /// Set the number of rows
    pub fn set_depth(self, depth: usize) -> Self {
        Self {
            width: self.width,
            depth,
            error_bounds: self.error_bounds,
        }
    }

    /// Size the sketch from a relative error `epsilon` and a failure
    /// probability `delta`. When set, it takes precedence over the explicit
    /// width and depth.
    pub fn set_error_bounds(self, epsilon: f64, delta: f64) -> Self {
        Self {
            width: self.width,
            depth: self.depth,
            error_bounds: Some((epsilon, delta)),
        }
    }

    /// Finalize the builder to [`CountMinSketch`]
    ///
    /// [`CountMinSketch`]: struct.CountMinSketch.html
    pub fn finalize<C: Counter>(self) -> Result<CountMinSketch<C>, SketchError> {
        let (width, depth) = match self.error_bounds {
            Some((epsilon, delta)) => (
                CountMinSketch::<C>::suggest_width(epsilon)?,
                CountMinSketch::<C>::suggest_depth(delta)?,
            ),
            None => (self.width, self.depth),
        };

        if width == 0 {
            return Err(SketchError::InvalidWidth(width));
        }

        if depth == 0 {
            return Err(SketchError::InvalidDepth(depth));
        }

        let len = width
            .checked_mul(depth)
            .ok_or(SketchError::OutOfMemory { width, depth })?;

        // Reserve up front so allocation failure is reported instead of aborting.
        let mut counters: Vec<C> = Vec::new();
        counters
            .try_reserve_exact(len)
            .map_err(|_| SketchError::OutOfMemory { width, depth })?;
        counters.resize(len, C::ZERO);

        log::debug!(
            "count-min sketch created: width={}, depth={}, bytes={}",
            width,
            depth,
            len * mem::size_of::<C>()
        );

        Ok(CountMinSketch {
            width,
            depth,
            counters,
        })
    }
}

/// `CountMinSketch` is a fixed-size grid of `depth` rows by `width`
/// saturating counters, stored row-major in one contiguous block.
///
/// Each row is an independent counting array. Collisions can only inflate a
/// counter, so the minimum across rows never underestimates the true count.
///
/// The sketch has no internal synchronization; wrap it in a lock to share it
/// between threads.
///
/// # Example
///
/// ```
/// use cmsketch::CountMinSketch;
///
/// let mut sketch = CountMinSketch::<u32>::new(4, 3).unwrap();
/// let coords = [1, 2, 0];
///
/// (0..3).for_each(|_| sketch.increment(&coords).unwrap());
/// assert_eq!(sketch.estimate(&coords).unwrap(), 3);
///
/// sketch.decrement(&coords).unwrap();
/// assert_eq!(sketch.estimate(&coords).unwrap(), 2);
///
/// sketch.reset();
/// assert_eq!(sketch.estimate(&coords).unwrap(), 0);
/// sketch.destroy();
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CountMinSketch<C: Counter = u32> {
    width: usize,
    depth: usize,
    counters: Vec<C>,
}

impl<C: Counter> CountMinSketch<C> {
    /// Create a zeroed sketch with `width` columns and `depth` rows.
    pub fn new(width: usize, depth: usize) -> Result<Self, SketchError> {
        CountMinSketchBuilder::new(width, depth).finalize()
    }

    /// Create a sketch sized so that, with probability `1 - delta`, an
    /// estimate exceeds the true count by at most `epsilon` times the total
    /// number of increments.
    pub fn with_error_bounds(epsilon: f64, delta: f64) -> Result<Self, SketchError> {
        CountMinSketchBuilder::default()
            .set_error_bounds(epsilon, delta)
            .finalize()
    }

    /// Create a sketch from a [`CountMinSketchBuilder`].
    ///
    /// [`CountMinSketchBuilder`]: struct.CountMinSketchBuilder.html
    pub fn from_builder(builder: CountMinSketchBuilder) -> Result<Self, SketchError> {
        builder.finalize()
    }

    /// Returns a [`CountMinSketchBuilder`] with default configurations.
    ///
    /// [`CountMinSketchBuilder`]: struct.CountMinSketchBuilder.html
    pub fn builder() -> CountMinSketchBuilder {
        CountMinSketchBuilder::default()
    }

    /// Returns the width which gives a relative error of at most `epsilon`:
    /// `ceil(e / epsilon)`.
    pub fn suggest_width(epsilon: f64) -> Result<usize, SketchError> {
        if !(epsilon > 0.0 && epsilon < 1.0) {
            return Err(SketchError::InvalidEpsilon(epsilon));
        }
        Ok(polyfill::ceil(core::f64::consts::E / epsilon) as usize)
    }

    /// Returns the depth which bounds the failure probability by `delta`:
    /// `ceil(ln(1 / delta))`.
    pub fn suggest_depth(delta: f64) -> Result<usize, SketchError> {
        if !(delta > 0.0 && delta < 1.0) {
            return Err(SketchError::InvalidDelta(delta));
        }
        Ok(polyfill::ceil(polyfill::ln(1.0 / delta)) as usize)
    }

    /// Number of columns per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of counters, `width * depth`.
    #[inline]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if every counter is zero.
    pub fn is_empty(&self) -> bool {
        self.counters.iter().all(|&c| c == C::ZERO)
    }

    /// Bytes held by the counter grid.
    pub fn size_bytes(&self) -> usize {
        self.counters.len() * mem::size_of::<C>()
    }

    /// The relative error `e / width` guaranteed by this width.
    pub fn relative_error(&self) -> f64 {
        core::f64::consts::E / self.width as f64
    }

    /// `increment` adds one to the counter addressed in every row, clamping
    /// at `C::MAX`.
    pub fn increment(&mut self, coords: &[usize]) -> Result<(), SketchError> {
        self.check_coords(coords)?;
        let width = self.width;
        for (row, &column) in coords.iter().enumerate() {
            let ctr = &mut self.counters[width * row + column];
            if *ctr == C::MAX {
                log::trace!(
                    "count-min counter saturated: row={}, column={}",
                    row,
                    column
                );
            }
            *ctr = ctr.saturating_inc();
        }
        Ok(())
    }

    /// `decrement` subtracts one from the counter addressed in every row,
    /// leaving counters that are already zero untouched.
    pub fn decrement(&mut self, coords: &[usize]) -> Result<(), SketchError> {
        self.check_coords(coords)?;
        let width = self.width;
        for (row, &column) in coords.iter().enumerate() {
            let ctr = &mut self.counters[width * row + column];
            *ctr = ctr.saturating_dec();
        }
        Ok(())
    }

    /// `estimate` returns the minimum of the counters addressed by `coords`.
    pub fn estimate(&self, coords: &[usize]) -> Result<C, SketchError> {
        self.check_coords(coords)?;
        let width = self.width;
        Ok(coords
            .iter()
            .enumerate()
            .map(|(row, &column)| self.counters[width * row + column])
            .fold(C::MAX, |min, v| if v < min { v } else { min }))
    }

    /// `reset` zeroes all counters.
    pub fn reset(&mut self) {
        self.counters.iter_mut().for_each(|c| *c = C::ZERO);
        log::debug!(
            "count-min sketch reset: width={}, depth={}",
            self.width,
            self.depth
        );
    }

    /// `halve` divides every counter by two, aging old observations.
    pub fn halve(&mut self) {
        self.counters.iter_mut().for_each(|c| *c = c.halve());
        log::debug!(
            "count-min sketch halved: width={}, depth={}",
            self.width,
            self.depth
        );
    }

    /// `merge` adds the counters of `other` into this sketch, clamping at
    /// `C::MAX`. Both sketches must share the same dimensions and the same
    /// coordinate scheme for the result to be meaningful.
    pub fn merge(&mut self, other: &Self) -> Result<(), SketchError> {
        if self.width != other.width || self.depth != other.depth {
            return Err(SketchError::IncompatibleDimensions {
                expected: (self.width, self.depth),
                found: (other.width, other.depth),
            });
        }

        self.counters
            .iter_mut()
            .zip(other.counters.iter())
            .for_each(|(a, &b)| *a = a.saturating_add(b));
        log::debug!(
            "count-min sketch merged: width={}, depth={}",
            self.width,
            self.depth
        );
        Ok(())
    }

    /// Returns the single counter at `(row, column)`.
    pub fn counter(&self, row: usize, column: usize) -> Result<C, SketchError> {
        let idx = self.offset(row, column)?;
        Ok(self.counters[idx])
    }

    /// Returns the counters of one row.
    pub fn row(&self, row: usize) -> Result<&[C], SketchError> {
        if row >= self.depth {
            return Err(SketchError::RowOutOfRange {
                row,
                depth: self.depth,
            });
        }
        let start = self.width * row;
        Ok(&self.counters[start..start + self.width])
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, C> {
        self.counters.chunks_exact(self.width)
    }

    /// `destroy` releases the counter storage. The sketch cannot be used
    /// afterwards.
    pub fn destroy(self) {
        log::debug!(
            "count-min sketch destroyed: width={}, depth={}, bytes={}",
            self.width,
            self.depth,
            self.size_bytes()
        );
        drop(self)
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> Result<usize, SketchError> {
        if row >= self.depth {
            return Err(SketchError::RowOutOfRange {
                row,
                depth: self.depth,
            });
        }
        if column >= self.width {
            return Err(SketchError::IndexOutOfRange {
                row,
                column,
                width: self.width,
            });
        }
        Ok(self.width * row + column)
    }

    // every coordinate is checked before any counter is touched
    fn check_coords(&self, coords: &[usize]) -> Result<(), SketchError> {
        if coords.len() != self.depth {
            return Err(SketchError::CoordinatesLength {
                expected: self.depth,
                actual: coords.len(),
            });
        }
        coords
            .iter()
            .enumerate()
            .try_for_each(|(row, &column)| self.offset(row, column).map(|_| ()))
    }
}

impl<C: Counter> Debug for CountMinSketch<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "CountMinSketch {}x{}", self.width, self.depth)?;
        for row in self.rows() {
            for c in row {
                write!(f, "{:02} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
