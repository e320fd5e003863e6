use crate::{Error, ModelParameters, Result};
use nalgebra::{DVector, SVector};
use num_dual::DualNum;
use rayon::prelude::*;

/// Minimal number of points from which [RegressionModel::predict] evaluates in parallel.
pub const PAR_MIN_LEN: usize = 4096;

/// Required model function for [RegressionModel] derive.
pub trait ModelFunction<const P: usize> {
    /// Defines the model value at `x` for the parameter vector `params`.
    fn f<D: DualNum<f64>>(&self, x: D, params: &SVector<D, P>) -> D;
}

/// Capability interface of a regression model `y = f(x; θ)` with parameter vector `θ`.
///
/// The unchecked methods `val`, `val_grad` and `equation` index the parameter vector directly
/// and are usually generated by `#[derive(RegressionModel)]` from a [ModelFunction].
/// The provided methods check the length of the parameter vector first and should be preferred
/// by callers.
///
/// ```
/// use regmodel::{MichaelisMenten, RegressionModel};
///
/// let mm = MichaelisMenten;
/// let params = [1., 1.];
/// assert_eq!(mm.model_equation(&params).unwrap(), "y = 1.000000x/(1.000000+x)");
/// assert_eq!(mm.evaluate_model(1., &params).unwrap(), 0.5);
/// assert!(mm.evaluate_model(1., &[1.]).is_err());
/// ```
pub trait RegressionModel: Send + Sync {
    /// Parameter names in parameter vector order.
    fn parameter_names(&self) -> &'static [&'static str];

    /// Model value `f(x; θ)`.
    ///
    /// # Panics
    /// Panics if `params` holds fewer values than [RegressionModel::parameter_names].
    fn val(&self, x: f64, params: &[f64]) -> f64;

    /// Model value and its gradient with respect to the parameters.
    ///
    /// # Panics
    /// Panics if `params` holds fewer values than [RegressionModel::parameter_names].
    fn val_grad(&self, x: f64, params: &[f64]) -> (f64, DVector<f64>);

    /// Human readable model equation with the parameters substituted.
    ///
    /// Derived models format each parameter through [FixedFloat](crate::FixedFloat), so
    /// non-finite values print as `nan`, `inf` and `-inf`.
    ///
    /// # Panics
    /// Panics if `params` holds fewer values than [RegressionModel::parameter_names].
    fn equation(&self, params: &[f64]) -> String;

    /// Number of parameters read by the model.
    fn no_parameters(&self) -> usize {
        self.parameter_names().len()
    }

    /// Returns [Error::InvalidArgument] if `params` is too short for the model.
    fn check_parameters(&self, params: &[f64]) -> Result<()> {
        let ge_len = self.no_parameters();
        if params.len() < ge_len {
            return Err(Error::InvalidArgument {
                vector: "params",
                len: params.len(),
                ge_len,
            });
        }
        Ok(())
    }

    /// Returns the named view of the parameter vector.
    fn model_parameters(&self, params: &[f64]) -> Result<ModelParameters> {
        self.check_parameters(params)?;
        Ok(ModelParameters::new(
            self.parameter_names(),
            params[..self.no_parameters()].to_vec(),
        ))
    }

    /// Returns the model equation.
    fn model_equation(&self, params: &[f64]) -> Result<String> {
        self.check_parameters(params)?;
        Ok(self.equation(params))
    }

    /// Returns the model value at `x`. Singularities of the formula yield IEEE-754 special values.
    fn evaluate_model(&self, x: f64, params: &[f64]) -> Result<f64> {
        self.check_parameters(params)?;
        Ok(self.val(x, params))
    }

    /// Returns the model value and its parameter gradient at `x`.
    fn evaluate_model_grad(&self, x: f64, params: &[f64]) -> Result<(f64, DVector<f64>)> {
        self.check_parameters(params)?;
        Ok(self.val_grad(x, params))
    }

    /// Returns the model values for every entry of `xs`.
    fn predict(&self, xs: &DVector<f64>, params: &[f64]) -> Result<DVector<f64>> {
        self.check_parameters(params)?;
        let ys = match xs.len() {
            0..PAR_MIN_LEN => xs.map(|x| self.val(x, params)),
            PAR_MIN_LEN.. => DVector::from_vec(
                xs.as_slice()
                    .par_iter()
                    .map(|x| self.val(*x, params))
                    .collect(),
            ),
        };
        Ok(ys)
    }
}
