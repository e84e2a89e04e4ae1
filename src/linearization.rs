use nalgebra::RealField;

use crate::error::ModelError;
use crate::generator::generator;
use crate::norm::norm;
use crate::types::Vars;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearizationTolerance<T> {
    /// Largest Frobenius norm of the linear 2x2 block of `G` that is accepted.
    pub max_generator_norm: T,
}

impl<T: RealField + Copy> Default for LinearizationTolerance<T> {
    fn default() -> Self {
        LinearizationTolerance {
            max_generator_norm: nalgebra::convert(0.1),
        }
    }
}

/// Checks whether `I + G` is a usable stand-in for `exp(G)` over `[0, t]`.
///
/// None of the model queries call this; it is up to the estimator to bound
/// its time windows. Returns the norm of the generator's linear 2x2 block;
/// the translation column is left out since `G^2` only involves that block,
/// so a pure translation is warped exactly by `I + G`.
pub fn check_linearization<T>(
    vars: &Vars<T>,
    t: T,
    tolerance: &LinearizationTolerance<T>,
) -> Result<T, ModelError<T>>
where
    T: RealField + Copy + core::fmt::Debug + core::fmt::Display,
{
    if !t.is_finite() || vars.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::NonFinite);
    }

    let g_matrix = generator(&(vars * t));
    let g_norm = norm(&g_matrix.fixed_view::<2, 2>(0, 0));
    if g_norm > tolerance.max_generator_norm {
        log::debug!(
            "rejecting step t = {}: generator norm {} > {}",
            t,
            g_norm,
            tolerance.max_generator_norm
        );
        return Err(ModelError::LinearizationExceeded {
            norm: g_norm,
            bound: tolerance.max_generator_norm,
        });
    }
    Ok(g_norm)
}
