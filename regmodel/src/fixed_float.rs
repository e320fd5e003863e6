use std::fmt;

/// Float wrapper formatting like C's `%f`: non-finite values print as `nan`, `inf`, `-inf`.
///
/// Finite values use the float's own [Display](fmt::Display) with the requested width and
/// precision, so `{:.6}` yields six digits after the decimal point.
///
/// ```
/// use regmodel::FixedFloat;
///
/// assert_eq!(format!("{:.6}", FixedFloat(1.)), "1.000000");
/// assert_eq!(format!("{:.6}", FixedFloat(f64::NAN)), "nan");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedFloat(pub f64);

impl fmt::Display for FixedFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.pad("nan")
        } else if v.is_infinite() {
            f.pad(if v > 0. { "inf" } else { "-inf" })
        } else {
            fmt::Display::fmt(&v, f)
        }
    }
}
