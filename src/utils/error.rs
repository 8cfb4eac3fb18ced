use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid integer {token:?}: {reason}")]
    InvalidOperand { token: String, reason: String },

    #[error("expected two integers on stdin, found {found}")]
    MissingOperands { found: usize },
}

impl GcdError {
    /// Process exit code for this error: 2 for malformed input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            GcdError::Io(_) => 1,
            GcdError::InvalidOperand { .. } | GcdError::MissingOperands { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, GcdError>;
