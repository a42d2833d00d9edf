//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `CoachService`.
///
/// Non-2xx statuses and transport failures collapse into the same
/// user-facing "request failed" condition; the display string is what the
/// views render inline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoachApiError {
    #[error("HTTP {}", .0.as_u16())]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
