use thiserror::Error;

/// Reasons a step falls outside the range where `I + G` approximates the
/// exponential map.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ModelError<T: core::fmt::Debug + core::fmt::Display> {
    #[error("generator norm {norm} exceeds the linearization bound {bound}")]
    LinearizationExceeded { norm: T, bound: T },

    #[error("non-finite motion parameters or elapsed time")]
    NonFinite,
}
