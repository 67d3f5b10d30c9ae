//! Errors raised while converting raw protocol strings into typed values.
//!
//! Only the string boundary can fail. Once a value is typed, every agent
//! operation is infallible and degrades to a default instead of erroring.

/// Failure to interpret a raw protocol token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown facing direction {0:?}")]
    UnknownDirection(String),

    #[error("unknown lifecycle state {0:?}")]
    UnknownLifecycle(String),

    #[error("unknown action {0:?}")]
    UnknownAction(String),

    #[error("malformed enemy distance in cue {0:?}")]
    MalformedEnemyDistance(String),
}
