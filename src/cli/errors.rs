use thiserror::Error;

/// Exit status for a malformed command line, matching clap's own.
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_FAILURE: u8 = 1;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{count} of {total} file(s) failed")]
    FailedOrders { count: usize, total: usize },

    #[error(transparent)]
    Dump(#[from] resourcedump::Error),
}

impl AppError {
    /// Process exit status: 0 for help/version output, 2 for usage errors,
    /// 1 for anything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Dump(e) if e.is_informational() => 0,
            AppError::Dump(resourcedump::Error::Usage(_)) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
