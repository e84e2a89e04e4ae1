#![cfg_attr(not(feature = "std"), no_std)]

//! Continuous-time 2D affine motion model with closed-form derivatives.
//!
//! The warp of a point over `[0, t]` is approximated by `I + G`, with `G` the
//! affine Lie-algebra element built from `t * vars`. See [`doc::jacobian`] for
//! the derivation of the Jacobians.

pub mod doc {
    pub mod jacobian;
}

mod error;
mod generator;
mod jacobian;
mod linearization;
mod model;
mod norm;
mod perturbation;
mod transform;
mod types;

pub use crate::error::ModelError;
pub use crate::generator::{
    apply_generator, dgenerator, dgenerator_dh, dgenerator_dr, dgenerator_ds, dgenerator_dvx,
    dgenerator_dvy, dgenerator_dw, generator,
};
pub use crate::jacobian::{dtransformation_dparam, dtransformation_dvars};
pub use crate::linearization::{check_linearization, LinearizationTolerance};
pub use crate::model::{Affinity, CoordinateJacobian, MotionModel, Uncertainty};
pub use crate::perturbation::perturbation;
pub use crate::transform::{
    coordinate_jacobian, transformation, transformation_from_vars, transformation_g,
};
pub use crate::types::{
    homogeneous, CMatrix, DMatrix, GMatrix, PMatrix, Param, Point, PointHomogeneous, TMatrix,
    Vars, N_DIMS, N_MATRIX, N_SCALE, N_SHEAR, N_VARS, N_VELOCITY, N_WARP,
};
