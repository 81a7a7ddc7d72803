//! Counter types which can back a [`CountMinSketch`].
//!
//! [`CountMinSketch`]: struct.CountMinSketch.html
use core::fmt::{Debug, Display};

mod private {
    pub trait Sealed {}
}

/// Unsigned integer type usable as a sketch counter.
///
/// All arithmetic saturates: counters never wrap past `MAX` and never go
/// below `ZERO`.
pub trait Counter: private::Sealed + Copy + Ord + Debug + Display + Default {
    /// Zero value for fresh and reset counters.
    const ZERO: Self;

    /// Maximum representable value, at which increments clamp.
    const MAX: Self;

    /// Adds one, clamping at `MAX`.
    fn saturating_inc(self) -> Self;

    /// Subtracts one, clamping at `ZERO`.
    fn saturating_dec(self) -> Self;

    /// Adds `other`, clamping at `MAX`.
    fn saturating_add(self, other: Self) -> Self;

    /// Divides by two, truncating toward zero.
    fn halve(self) -> Self;
}

macro_rules! impl_counter {
    ($($name:ty),* $(,)?) => {
        $(
            impl private::Sealed for $name {}

            impl Counter for $name {
                const ZERO: Self = 0;
                const MAX: Self = <$name>::MAX;

                #[inline(always)]
                fn saturating_inc(self) -> Self {
                    <$name>::saturating_add(self, 1)
                }

                #[inline(always)]
                fn saturating_dec(self) -> Self {
                    <$name>::saturating_sub(self, 1)
                }

                #[inline(always)]
                fn saturating_add(self, other: Self) -> Self {
                    <$name>::saturating_add(self, other)
                }

                #[inline(always)]
                fn halve(self) -> Self {
                    self >> 1
                }
            }
        )*
    };
}

impl_counter!(u8, u16, u32, u64);

#[cfg(test)]
mod test {
    use super::Counter;

    #[test]
    fn test_saturating_inc() {
        assert_eq!(Counter::saturating_inc(0u8), 1);
        assert_eq!(Counter::saturating_inc(254u8), 255);
        assert_eq!(Counter::saturating_inc(u8::MAX), u8::MAX);
        assert_eq!(Counter::saturating_inc(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_saturating_dec() {
        assert_eq!(Counter::saturating_dec(0u16), 0);
        assert_eq!(Counter::saturating_dec(1u16), 0);
        assert_eq!(Counter::saturating_dec(u32::MAX), u32::MAX - 1);
    }

    #[test]
    fn test_saturating_add_and_halve() {
        assert_eq!(Counter::saturating_add(200u8, 100u8), u8::MAX);
        assert_eq!(Counter::saturating_add(2u32, 3u32), 5);
        assert_eq!(Counter::halve(7u32), 3);
        assert_eq!(Counter::halve(1u64), 0);
        assert_eq!(<u16 as Counter>::ZERO, 0);
        assert_eq!(<u16 as Counter>::MAX, u16::MAX);
    }
}
