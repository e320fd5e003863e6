use crate::{ModelFunction, RegressionModel};
use nalgebra::SVector;
use num_dual::DualNum;

#[cfg_attr(doc, katexit::katexit)]
/// Power law model
///
/// $$ y = a x^b $$
///
/// with factor $a$ (parameter 0) and exponent $b$ (parameter 1). Negative $x$ with a
/// non-integer exponent yields NaN.
#[derive(RegressionModel, Clone, Copy, Debug, Default, PartialEq)]
#[parameters = "a, b"]
#[equation = "y = {a:.6}x^{b:.6}"]
pub struct Power;

impl ModelFunction<2> for Power {
    fn f<D: DualNum<f64>>(&self, x: D, params: &SVector<D, 2>) -> D {
        params[0].clone() * x.powd(params[1].clone())
    }
}
