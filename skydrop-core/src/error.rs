use thiserror::Error;

/// Internal failures of the core. Deliberately small: verification, the
/// codec, and the caches are total with respect to their callers, so the
/// only typed failure is a secret source that cannot be read — and even
/// that is swallowed (logged, fail-closed) by the verifier.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("configuration unavailable: {0}")]
    ConfigUnavailable(String),
}
