//! Rate curve of an enzyme with V = 1 and K = 10 evaluated over substrate concentrations,
//! next to the sensitivities of the rate to both parameters.
//!
//! The K sensitivity peaks in magnitude at [S] = K: rates measured near the Michaelis
//! constant carry most information about it, rates far above it mostly about V.

use nalgebra::DVector;
use regmodel::{MichaelisMenten, RegressionModel, Result};

const V_MAX: f64 = 1.0;
const K_M: f64 = 10.0;

fn main() -> Result<()> {
    let mm = MichaelisMenten;
    let params = [V_MAX, K_M];
    println!("Michaelis-Menten rate curve");
    println!("{}\n", mm.model_equation(&params)?);

    let s = DVector::from_vec(vec![0.5, 1., 2., 5., 10., 20., 50., 100.]);
    let v = mm.predict(&s, &params)?;

    println!("{:>8} {:>10} {:>12} {:>12}", "[S]", "v", "dv/dV_max", "dv/dK_m");
    let mut s_max_sens = (0., 0.);
    for (s, v) in s.iter().zip(v.iter()) {
        let (_, grad) = mm.evaluate_model_grad(*s, &params)?;
        println!("{s:>8.2} {v:>10.4} {:>12.4} {:>12.5}", grad[0], grad[1]);
        if grad[1].abs() > s_max_sens.1 {
            s_max_sens = (*s, grad[1].abs());
        }
    }
    println!(
        "\nK_m sensitivity is largest at [S] = {} (K_m = {K_M})",
        s_max_sens.0
    );
    Ok(())
}
