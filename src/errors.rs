//! Errors raised while configuring or attaching a touch trigger

use derive_more::{Display, Error};

/// Everything that can go wrong outside the tracker itself.
///
/// The tracker never fails: malformed samples are dropped.
#[derive(Debug, Display, Error)]
pub enum TriggerError {
    /// The options document was not valid JSON or had mistyped fields.
    #[display(fmt = "invalid trigger options: {}", _0)]
    InvalidJson(#[error(source)] serde_json::Error),
    /// The JS options object could not be turned into JSON (e.g. it is cyclic).
    #[display(fmt = "trigger options are not serializable: {}", reason)]
    Unserializable { reason: String },
    /// A numeric option was negative, NaN or infinite.
    #[display(fmt = "option `{}` must be finite and non-negative, got {}", name, value)]
    InvalidOption {
        name: &'static str,
        value: f64,
    },
    /// `addEventListener` threw.
    #[display(fmt = "failed to bind `{}`: {}", event, reason)]
    Bind {
        event: &'static str,
        reason: String,
    },
    /// The node a hook was pointed at is not mounted or is not an `HtmlElement`.
    #[display(fmt = "touch trigger target is not a mounted HtmlElement")]
    NotAnElement,
}

impl From<serde_json::Error> for TriggerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err)
    }
}
