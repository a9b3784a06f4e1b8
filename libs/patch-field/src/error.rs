use thiserror::Error;

/// Errors returned by [`PatchField`](crate::PatchField) accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchFieldError {
    /// The value was read from a field that was absent from the payload.
    #[error("no value provided")]
    NotProvided,
}
