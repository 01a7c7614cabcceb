use thiserror::Error;

use tradenorm_core::PipelineError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    /// `--help` or `--version` was requested; not a failure.
    #[error(transparent)]
    Informational(clap::Error),

    #[error("invalid usage")]
    InvalidUsage { usage: String },

    #[error("invalid exchange: {exchange}")]
    InvalidExchange { exchange: String, usage: String },

    #[error(transparent)]
    Validation(#[from] tradenorm_core::ValidationError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Informational(_) => 0,
            Self::InvalidUsage { .. }
            | Self::InvalidExchange { .. }
            | Self::Validation(_)
            | Self::Pipeline(PipelineError::UnknownExchange(_)) => 1,
            Self::Pipeline(PipelineError::Read(_) | PipelineError::Write(_)) => 2,
        }
    }

    /// Usage line to print after the error, for errors caused by bad arguments.
    pub fn usage(&self) -> Option<&str> {
        match self {
            Self::InvalidUsage { usage } | Self::InvalidExchange { usage, .. } => Some(usage.as_str()),
            Self::Informational(_) | Self::Validation(_) | Self::Pipeline(_) => None,
        }
    }
}
