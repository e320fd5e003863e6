use crate::{ModelFunction, RegressionModel};
use nalgebra::SVector;
use num_dual::DualNum;

#[cfg_attr(doc, katexit::katexit)]
/// Michaelis-Menten model of enzyme kinetics.
///
/// $$ y = \frac{V x}{K + x} $$
///
/// with maximum reaction rate $V$ (parameter 0) and Michaelis constant $K$ (parameter 1), the
/// substrate concentration at which the rate is $V / 2$. The model does not guard the
/// singularity at $x = -K$, the result follows IEEE-754 division.
///
/// ```
/// use regmodel::{MichaelisMenten, RegressionModel};
///
/// let params = [5., 2.];
/// let mp = MichaelisMenten.model_parameters(&params).unwrap();
/// assert_eq!(mp["V"], 5.);
/// assert_eq!(mp["K"], 2.);
/// assert_eq!(
///     MichaelisMenten.model_equation(&params).unwrap(),
///     "y = 5.000000x/(2.000000+x)"
/// );
/// ```
#[derive(RegressionModel, Clone, Copy, Debug, Default, PartialEq)]
#[parameters = "V, K"]
#[equation = "y = {V:.6}x/({K:.6}+x)"]
pub struct MichaelisMenten;

impl ModelFunction<2> for MichaelisMenten {
    fn f<D: DualNum<f64>>(&self, x: D, params: &SVector<D, 2>) -> D {
        let v = params[0].clone();
        let k = params[1].clone();
        v * x.clone() / (k + x)
    }
}
