use regmodel::{ModelKind, Result};
use std::num::ParseFloatError;

// every argument has to be a number, a skipped value would shift the parameter positions
fn parse_params<I: IntoIterator<Item = String>>(
    args: I,
) -> std::result::Result<Vec<f64>, ParseFloatError> {
    args.into_iter().map(|a| a.parse::<f64>()).collect()
}

// usage: cargo run --example model-dispatch -- michaelis-menten 2 0.5
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let kind: ModelKind = args
        .next()
        .unwrap_or_else(|| ModelKind::MichaelisMenten.to_string())
        .parse()?;
    let mut params = match parse_params(args) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("invalid parameter value: {e}");
            std::process::exit(2);
        }
    };
    if params.is_empty() {
        params = vec![1., 1.];
    }

    let model = kind.model();
    println!("{kind}: {}", model.model_equation(&params)?);
    for (name, value) in model.model_parameters(&params)?.iter() {
        println!("  {name} = {value}");
    }
    for x in [0., 0.5, 1., 2., 4.] {
        println!("  y({x}) = {:.6}", model.evaluate_model(x, &params)?);
    }
    Ok(())
}
