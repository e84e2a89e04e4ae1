use nalgebra::RealField;

use crate::generator::generator;
use crate::types::{CMatrix, GMatrix, Point, PointHomogeneous, TMatrix, Vars};

/// First order Taylor expansion of the exponential map, `I + G`.
pub fn transformation_g<T: RealField + Copy>(g_matrix: &GMatrix<T>) -> TMatrix<T> {
    TMatrix::identity() + g_matrix
}

pub fn transformation_from_vars<T: RealField + Copy>(varst: &Vars<T>) -> TMatrix<T> {
    transformation_g(&generator(varst))
}

/// Warps `ch` by `I + G`. Returns the warped point together with the
/// transformation matrix it was computed from.
pub fn transformation<T: RealField + Copy>(
    g_matrix: &GMatrix<T>,
    ch: &PointHomogeneous<T>,
) -> (Point<T>, TMatrix<T>) {
    let t_matrix = transformation_g(g_matrix);
    let cm = t_matrix.fixed_rows::<2>(0) * ch;
    (cm, t_matrix)
}

/// Derivative of the warped point with respect to the original point.
pub fn coordinate_jacobian<T: RealField + Copy>(t_matrix: &TMatrix<T>) -> CMatrix<T> {
    t_matrix.fixed_view::<2, 2>(0, 0).into_owned()
}
