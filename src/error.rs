use thiserror::Error;

/// Errors raised by matrix algebra, network topology and training setup.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation's shape precondition was violated. Shapes are `(rows, cols)`.
    #[error("shape mismatch in `{op}`: left is {left:?}, right is {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("unknown {kind} function `{name}`")]
    UnknownFunction { kind: &'static str, name: String },

    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
