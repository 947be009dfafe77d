use thiserror::Error;

/// Reasons a browser canvas could not be bound. Any of these leaves the
/// background inert.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`")]
    MissingSurface(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("canvas `{0}` has no 2d context")]
    NoContext(String),

    #[error("could not attach `{0}` listener: {1}")]
    Listener(&'static str, String),
}
