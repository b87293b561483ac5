use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum HasherError {
    /// `update` was called after the digest had been finalized. The hasher
    /// cannot be reopened; start a new one.
    #[error("adding data to a closed hasher")]
    InvalidState,
    /// A digest string was not exactly 64 hex characters.
    #[error("invalid digest hex: {reason}")]
    InvalidDigestHex { reason: String },
}

impl From<HasherError> for std::io::Error {
    fn from(err: HasherError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}
