/// Main error type
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// A parameter vector holds fewer values than the model reads.
    #[error("parameter vector {vector} has {len} values but the model requires at least {ge_len}")]
    InvalidArgument {
        /// Vector name
        vector: &'static str,
        /// Number of values found
        len: usize,
        /// Required minimum number of values
        ge_len: usize,
    },
    /// No regression model is registered under the given name.
    #[error("unknown regression model {name}, expected one of michaelis-menten, linear, power")]
    UnknownModel {
        /// Name that failed to parse.
        name: String,
    },
}

/// Main result type
pub type Result<T> = std::result::Result<T, Error>;
