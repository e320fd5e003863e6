mod linear;
mod michaelis_menten;
mod power;
use crate::{Error, RegressionModel};
pub use linear::Linear;
pub use michaelis_menten::MichaelisMenten;
pub use power::Power;
use std::{fmt, str::FromStr, sync::Arc};

/// Selects one of the provided regression models by tag.
///
/// ```
/// use regmodel::{ModelKind, RegressionModel};
///
/// let kind: ModelKind = "Michaelis_Menten".parse().unwrap();
/// assert_eq!(kind, ModelKind::MichaelisMenten);
/// let model = kind.model();
/// assert_eq!(model.parameter_names(), &["V", "K"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// [MichaelisMenten]
    MichaelisMenten,
    /// [Linear]
    Linear,
    /// [Power]
    Power,
}

impl ModelKind {
    /// All model kinds.
    pub const ALL: [ModelKind; 3] = [
        ModelKind::MichaelisMenten,
        ModelKind::Linear,
        ModelKind::Power,
    ];

    /// Name used by [Display](fmt::Display) and [FromStr].
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::MichaelisMenten => "michaelis-menten",
            ModelKind::Linear => "linear",
            ModelKind::Power => "power",
        }
    }

    /// Returns the model of this kind.
    pub fn model(self) -> Arc<dyn RegressionModel> {
        match self {
            ModelKind::MichaelisMenten => Arc::new(MichaelisMenten),
            ModelKind::Linear => Arc::new(Linear),
            ModelKind::Power => Arc::new(Power),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or(Error::UnknownModel { name: s.to_string() })
    }
}
