use crate::{ModelFunction, RegressionModel};
use nalgebra::SVector;
use num_dual::DualNum;

#[cfg_attr(doc, katexit::katexit)]
/// Linear model $y = m x + b$ with slope $m$ (parameter 0) and intercept $b$ (parameter 1).
#[derive(RegressionModel, Clone, Copy, Debug, Default, PartialEq)]
#[parameters = "m, b"]
#[equation = "y = {m:.6}x + {b:.6}"]
pub struct Linear;

impl ModelFunction<2> for Linear {
    fn f<D: DualNum<f64>>(&self, x: D, params: &SVector<D, 2>) -> D {
        params[0].clone() * x + params[1].clone()
    }
}
