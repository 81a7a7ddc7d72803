use core::fmt::{Debug, Display, Formatter};

/// `SketchError` contains the errors of this crate.
#[derive(Copy, Clone, PartialEq)]
pub enum SketchError {
    /// Count-Min sketch with a zero width
    InvalidWidth(usize),
    /// Count-Min sketch with a zero depth
    InvalidDepth(usize),
    /// The counter storage for a `width * depth` grid could not be allocated
    OutOfMemory {
        /// requested number of columns
        width: usize,
        /// requested number of rows
        depth: usize,
    },
    /// The coordinates do not carry exactly one column per row
    CoordinatesLength {
        /// the depth of the sketch
        expected: usize,
        /// the number of coordinates supplied
        actual: usize,
    },
    /// A column index falls outside the grid
    IndexOutOfRange {
        /// the row being addressed
        row: usize,
        /// the offending column
        column: usize,
        /// the width of the sketch
        width: usize,
    },
    /// A row index falls outside the grid
    RowOutOfRange {
        /// the offending row
        row: usize,
        /// the depth of the sketch
        depth: usize,
    },
    /// Two sketches with different shapes cannot be merged
    IncompatibleDimensions {
        /// `(width, depth)` of the receiving sketch
        expected: (usize, usize),
        /// `(width, depth)` of the other sketch
        found: (usize, usize),
    },
    /// Invalid relative error for sizing a sketch
    InvalidEpsilon(f64),
    /// Invalid failure probability for sizing a sketch
    InvalidDelta(f64),
}

impl SketchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SketchError::InvalidWidth(v) => write!(f, "invalid count-min sketch width: {}", *v),
            SketchError::InvalidDepth(v) => write!(f, "invalid count-min sketch depth: {}", *v),
            SketchError::OutOfMemory { width, depth } => write!(
                f,
                "out of memory: cannot allocate {} x {} counters",
                *width, *depth
            ),
            SketchError::CoordinatesLength { expected, actual } => write!(
                f,
                "invalid coordinates: expected {} indices (one per row), got {}",
                *expected, *actual
            ),
            SketchError::IndexOutOfRange { row, column, width } => write!(
                f,
                "index out of range: column {} in row {}, which should be in range [0, {})",
                *column, *row, *width
            ),
            SketchError::RowOutOfRange { row, depth } => write!(
                f,
                "row out of range: row {}, which should be in range [0, {})",
                *row, *depth
            ),
            SketchError::IncompatibleDimensions { expected, found } => write!(
                f,
                "incompatible dimensions: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            SketchError::InvalidEpsilon(v) => write!(
                f,
                "invalid relative error: {}, which should be in range (0.0, 1.0)",
                *v
            ),
            SketchError::InvalidDelta(v) => write!(
                f,
                "invalid failure probability: {}, which should be in range (0.0, 1.0)",
                *v
            ),
        }
    }
}

impl Display for SketchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.fmt(f)
    }
}

impl Debug for SketchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.fmt(f)
    }
}

cfg_std!(
    impl std::error::Error for SketchError {}
);

#[cfg(test)]
mod test {
    use super::SketchError;
    use std::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            SketchError::InvalidWidth(0).to_string(),
            "invalid count-min sketch width: 0"
        );
        assert_eq!(
            SketchError::CoordinatesLength {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "invalid coordinates: expected 3 indices (one per row), got 2"
        );
        assert_eq!(
            SketchError::IndexOutOfRange {
                row: 1,
                column: 4,
                width: 4
            }
            .to_string(),
            "index out of range: column 4 in row 1, which should be in range [0, 4)"
        );
        assert_eq!(
            SketchError::IncompatibleDimensions {
                expected: (4, 3),
                found: (8, 3)
            }
            .to_string(),
            "incompatible dimensions: expected 4x3, found 8x3"
        );
    }

    #[test]
    fn test_debug_matches_display() {
        let err = SketchError::OutOfMemory {
            width: usize::MAX,
            depth: 2,
        };
        assert_eq!(std::format!("{:?}", err), err.to_string());
    }
}
