use thiserror::Error;

use qrce_core::QrError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    #[error("usage error")]
    Usage,

    #[error("input is too long")]
    InputTooLong,

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("qr error: {0}")]
    Qr(#[from] QrError),
}
