#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
extern crate self as regmodel;

mod error;
mod fixed_float;
mod model;
mod models;
mod parameters;

pub use error::{Error, Result};
pub use fixed_float::FixedFloat;
pub use model::{ModelFunction, PAR_MIN_LEN, RegressionModel};
pub use models::{Linear, MichaelisMenten, ModelKind, Power};
pub use parameters::ModelParameters;
pub use regmodel_derive::RegressionModel;
