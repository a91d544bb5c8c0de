
use thiserror::Error;

/// Errors raised while parsing textual sort specifications.
///
/// Resolution and comparison are infallible by design: absent paths degrade
/// to [`crate::datatype::SortValue::Null`] instead of erroring.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("Parse error: {message}")]
    Parse { message: String },
    #[error("Unknown order: {0}")]
    UnknownOrder(String),
}

pub type Result<T> = std::result::Result<T, SortError>;
