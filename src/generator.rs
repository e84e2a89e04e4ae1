use nalgebra::RealField;

use crate::types::{GMatrix, Param, Point, PointHomogeneous, Vars};

/// Affine Lie-algebra element for the time-scaled parameters `varst = t * vars`.
#[rustfmt::skip]
pub fn generator<T: RealField + Copy>(varst: &Vars<T>) -> GMatrix<T> {
    let zero = T::zero();

    GMatrix::new(
        varst[1] + varst[2], varst[3] - varst[0], varst[4],
        varst[3] + varst[0], varst[1] - varst[2], varst[5],
        zero, zero, zero,
    )
}

/// `G * ch`, dropping the homogeneous row (always zero).
pub fn apply_generator<T: RealField + Copy>(
    g_matrix: &GMatrix<T>,
    ch: &PointHomogeneous<T>,
) -> Point<T> {
    g_matrix.fixed_rows::<2>(0) * ch
}

#[rustfmt::skip]
pub fn dgenerator_dw<T: RealField + Copy>(t: T) -> GMatrix<T> {
    let zero = T::zero();

    GMatrix::new(
        zero, -t, zero,
        t, zero, zero,
        zero, zero, zero,
    )
}

#[rustfmt::skip]
pub fn dgenerator_ds<T: RealField + Copy>(t: T) -> GMatrix<T> {
    let zero = T::zero();

    GMatrix::new(
        t, zero, zero,
        zero, t, zero,
        zero, zero, zero,
    )
}

#[rustfmt::skip]
pub fn dgenerator_dh<T: RealField + Copy>(t: T) -> GMatrix<T> {
    let zero = T::zero();

    GMatrix::new(
        t, zero, zero,
        zero, -t, zero,
        zero, zero, zero,
    )
}

#[rustfmt::skip]
pub fn dgenerator_dr<T: RealField + Copy>(t: T) -> GMatrix<T> {
    let zero = T::zero();

    GMatrix::new(
        zero, t, zero,
        t, zero, zero,
        zero, zero, zero,
    )
}

#[rustfmt::skip]
pub fn dgenerator_dvx<T: RealField + Copy>(t: T) -> GMatrix<T> {
    let zero = T::zero();

    GMatrix::new(
        zero, zero, t,
        zero, zero, zero,
        zero, zero, zero,
    )
}

#[rustfmt::skip]
pub fn dgenerator_dvy<T: RealField + Copy>(t: T) -> GMatrix<T> {
    let zero = T::zero();

    GMatrix::new(
        zero, zero, zero,
        zero, zero, t,
        zero, zero, zero,
    )
}

pub fn dgenerator<T: RealField + Copy>(param: Param, t: T) -> GMatrix<T> {
    match param {
        Param::Warp => dgenerator_dw(t),
        Param::Scale => dgenerator_ds(t),
        Param::ShearA => dgenerator_dh(t),
        Param::ShearB => dgenerator_dr(t),
        Param::Vx => dgenerator_dvx(t),
        Param::Vy => dgenerator_dvy(t),
    }
}
