use nalgebra::base::dimension::Const;
use nalgebra::{ArrayStorage, Matrix};

pub type Vector<T, const D: usize> = Matrix<T, Const<D>, Const<1>, ArrayStorage<T, D, 1>>;
pub type MatrixRxC<T, const R: usize, const C: usize> =
    Matrix<T, Const<R>, Const<C>, ArrayStorage<T, R, C>>;

pub const N_WARP: usize = 1;
pub const N_SCALE: usize = 1;
pub const N_SHEAR: usize = 2;
pub const N_VELOCITY: usize = 2;
pub const N_VARS: usize = N_WARP + N_SCALE + N_SHEAR + N_VELOCITY;
pub const N_DIMS: usize = 2;
pub const N_MATRIX: usize = N_DIMS + 1;

pub type Vars<T> = Vector<T, N_VARS>;
pub type Point<T> = Vector<T, N_DIMS>;
pub type PointHomogeneous<T> = Vector<T, N_MATRIX>;

pub type GMatrix<T> = MatrixRxC<T, N_MATRIX, N_MATRIX>;
pub type TMatrix<T> = MatrixRxC<T, N_MATRIX, N_MATRIX>;
pub type DMatrix<T> = MatrixRxC<T, N_DIMS, N_VARS>;
pub type PMatrix<T> = MatrixRxC<T, N_DIMS, N_VARS>;
pub type CMatrix<T> = MatrixRxC<T, N_DIMS, N_DIMS>;

/// Motion parameters in the order they appear in [`Vars`] and in the
/// columns of the parameter Jacobian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    /// In-plane rotation rate.
    Warp,
    /// Uniform scale rate.
    Scale,
    /// Shear along the image axes.
    ShearA,
    /// Shear along the diagonals.
    ShearB,
    /// Translation velocity along x.
    Vx,
    /// Translation velocity along y.
    Vy,
}

impl Param {
    pub const ALL: [Param; N_VARS] = [
        Param::Warp,
        Param::Scale,
        Param::ShearA,
        Param::ShearB,
        Param::Vx,
        Param::Vy,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

pub fn homogeneous<T: nalgebra::RealField + Copy>(c: &Point<T>) -> PointHomogeneous<T> {
    PointHomogeneous::new(c[0], c[1], T::one())
}
