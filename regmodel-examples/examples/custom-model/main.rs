use nalgebra::SVector;
use num_dual::DualNum;
use regmodel::{ModelFunction, RegressionModel, Result};

// with help of the RegressionModel derive and the required implementation
// of the ModelFunction the parameter gradient is generated automatically
#[derive(RegressionModel)]
#[parameters = "V, K, n"]
#[equation = "y = {V:.6}x^{n:.6}/({K:.6}^{n:.6}+x^{n:.6})"]
struct Hill;

impl ModelFunction<3> for Hill {
    fn f<D: DualNum<f64>>(&self, x: D, params: &SVector<D, 3>) -> D {
        let (v, k, n) = (params[0].clone(), params[1].clone(), params[2].clone());
        let xn = x.powd(n.clone());
        v * xn.clone() / (k.powd(n) + xn)
    }
}

// cooperative binding: Hill equation with coefficient n
fn main() -> Result<()> {
    let params = [1., 2., 2.5];
    println!("{}", Hill.model_equation(&params)?);
    for x in [0.5, 1., 2., 4., 8.] {
        let (y, grad) = Hill.evaluate_model_grad(x, &params)?;
        println!(
            "x = {x:>4}: y = {y:.4}, grad = [{:.4}, {:.4}, {:.4}]",
            grad[0], grad[1], grad[2]
        );
    }
    Ok(())
}
