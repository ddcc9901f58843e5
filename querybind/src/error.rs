use core::fmt;

/// Errors that can occur when binding values onto a target.
///
/// Per-value conversion failures are not errors: the field keeps its zero
/// value and is still reported as bound. See [`Binder::bind_report`](crate::Binder::bind_report)
/// for per-field outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    /// The target is not a struct, nor an owning pointer to one.
    NotAStruct {
        /// The type identifier of the rejected target.
        type_identifier: &'static str,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::NotAStruct { type_identifier } => write!(
                f,
                "cannot bind query values into `{type_identifier}`: not a struct"
            ),
        }
    }
}

impl core::error::Error for BindError {}
