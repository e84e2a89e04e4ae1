use nalgebra::RealField;

use crate::types::{PMatrix, Point};

/// First order displacement of `c` under small parameter perturbations, for
/// propagating parameter covariance into image space.
///
/// Laid out independently of the parameter Jacobian: the translation
/// columns come right after warp and scale.
#[rustfmt::skip]
pub fn perturbation<T: RealField + Copy>(c: &Point<T>, t: T) -> PMatrix<T> {
    let ct = c * t;
    let zero = T::zero();

    PMatrix::new(
        -ct[1], ct[0], t, zero, ct[0], ct[1],
        ct[0], ct[1], zero, t, -ct[1], ct[0],
    )
}
