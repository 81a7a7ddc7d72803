//! Two level polyfill for the f64 `ceil` and `ln` functions used when sizing
//! a sketch from error bounds. Without `std` these fall back to libm's
//! implementation from musl's libc.
use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "std")] {
        #[inline(always)]
        pub(crate) fn ceil(val: f64) -> f64 {
            val.ceil()
        }
        #[inline(always)]
        pub(crate) fn ln(val: f64) -> f64 {
            val.ln()
        }
    } else {
        #[inline(always)]
        pub(crate) fn ceil(val: f64) -> f64 {
            libm::ceil(val)
        }
        #[inline(always)]
        pub(crate) fn ln(val: f64) -> f64 {
            libm::log(val)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ceil_ln() {
        assert_eq!(ceil(2.0001), 3.0);
        assert_eq!(ceil(4.0), 4.0);
        assert!((ln(core::f64::consts::E) - 1.0).abs() < 1e-12);
        assert_eq!(ceil(ln(1.0 / 0.01)), 5.0);
    }
}
