use regmodel::{MichaelisMenten, RegressionModel, Result};

// y = Vx/(K+x) with parameters as returned by a fit
fn main() -> Result<()> {
    let mm = MichaelisMenten;
    let params = [5., 2.];

    println!("{}", mm.model_equation(&params)?);
    for (name, value) in mm.model_parameters(&params)?.iter() {
        println!("{name} = {value}");
    }
    for x in [0., 1., 2., 10., 100.] {
        println!("y({x}) = {:.4}", mm.evaluate_model(x, &params)?);
    }

    // a parameter vector missing K is rejected
    if let Err(e) = mm.evaluate_model(1., &[5.]) {
        println!("error: {e}");
    }
    Ok(())
}
