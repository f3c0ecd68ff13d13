/// Errors that can occur during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid range: a = {a} must be finite and less than b = {b}")]
    InvalidRange { a: f64, b: f64 },

    #[error("objective returned NaN at x = {x}")]
    NotANumber { x: f64 },
}
