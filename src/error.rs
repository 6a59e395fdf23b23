//! Pipeline errors.

/// Errors that abort a pipeline run.
///
/// An unknown report type is deliberately absent: the report pipeline
/// treats it as a no-op, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A tag was given where the lookup table has no fallback.
    #[error("unsupported notification type: {tag}")]
    UnsupportedType { tag: String },

    /// A record lacked a field the current step needs.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn unsupported(tag: &str) -> Self {
        Self::UnsupportedType {
            tag: tag.to_string(),
        }
    }
}

/// Read a required optional field, or fail naming it.
pub(crate) fn require<'a, T: ?Sized>(value: Option<&'a T>, field: &'static str) -> Result<&'a T> {
    value.ok_or(Error::MissingField { field })
}
