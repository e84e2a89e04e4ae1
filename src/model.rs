use core::marker::PhantomData;

use nalgebra::RealField;

use crate::generator::{apply_generator, generator};
use crate::jacobian::dtransformation_dvars;
use crate::perturbation::perturbation;
use crate::transform::{coordinate_jacobian, transformation};
use crate::types::{homogeneous, CMatrix, DMatrix, PMatrix, Point, Vars};

/// Warped point with everything needed to propagate parameter uncertainty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uncertainty<T: RealField + Copy> {
    pub cm: Point<T>,
    pub dcm: DMatrix<T>,
    /// `G * ch`, before the Taylor expansion is added to the identity.
    pub cg: Point<T>,
    pub perturbation: PMatrix<T>,
}

/// Warped point with its derivatives with respect to the parameters and
/// to the original point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateJacobian<T: RealField + Copy> {
    pub cm: Point<T>,
    pub dcm: DMatrix<T>,
    pub dc: CMatrix<T>,
}

/// A continuous-time motion model queried per event by an incremental
/// estimator. Every query is a pure function of its arguments.
pub trait MotionModel {
    type Scalar: RealField + Copy;
    type Vars;
    type Point;
    type Uncertainty;
    type CoordinateJacobian;

    fn evaluate(&self, vars: &Self::Vars, c: &Self::Point, t: Self::Scalar) -> Self::Point;

    fn evaluate_with_uncertainty(
        &self,
        vars: &Self::Vars,
        c: &Self::Point,
        t: Self::Scalar,
    ) -> Self::Uncertainty;

    fn evaluate_with_coordinate_jacobian(
        &self,
        vars: &Self::Vars,
        c: &Self::Point,
        t: Self::Scalar,
    ) -> Self::CoordinateJacobian;
}

/// 2D affine flow linearised over `[0, t]`.
///
/// `vars` is `[warp, scale, shear_a, shear_b, vx, vy]`. The exponential map
/// is truncated after the first order term, so `t * vars` has to stay small
/// for the warp to be meaningful; see [`crate::check_linearization`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Affinity<T> {
    _scalar: PhantomData<T>,
}

impl<T: RealField + Copy> Affinity<T> {
    pub fn new() -> Self {
        Affinity {
            _scalar: PhantomData,
        }
    }
}

impl<T: RealField + Copy> MotionModel for Affinity<T> {
    type Scalar = T;
    type Vars = Vars<T>;
    type Point = Point<T>;
    type Uncertainty = Uncertainty<T>;
    type CoordinateJacobian = CoordinateJacobian<T>;

    fn evaluate(&self, vars: &Vars<T>, c: &Point<T>, t: T) -> Point<T> {
        let varst = vars * t;
        let g_matrix = generator(&varst);
        let (cm, _) = transformation(&g_matrix, &homogeneous(c));
        cm
    }

    fn evaluate_with_uncertainty(&self, vars: &Vars<T>, c: &Point<T>, t: T) -> Uncertainty<T> {
        let varst = vars * t;
        let g_matrix = generator(&varst);
        let ch = homogeneous(c);

        let (cm, _) = transformation(&g_matrix, &ch);
        Uncertainty {
            cm,
            dcm: dtransformation_dvars(&ch, t),
            cg: apply_generator(&g_matrix, &ch),
            perturbation: perturbation(c, t),
        }
    }

    fn evaluate_with_coordinate_jacobian(
        &self,
        vars: &Vars<T>,
        c: &Point<T>,
        t: T,
    ) -> CoordinateJacobian<T> {
        let varst = vars * t;
        let g_matrix = generator(&varst);
        let ch = homogeneous(c);

        let (cm, t_matrix) = transformation(&g_matrix, &ch);
        CoordinateJacobian {
            cm,
            dcm: dtransformation_dvars(&ch, t),
            dc: coordinate_jacobian(&t_matrix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::norm::norm;
    use crate::transform::transformation_from_vars;
    use crate::types::Param;

    fn sample_vars() -> Vars<f64> {
        Vars::from_column_slice(&[0.12, -0.3, 0.08, 0.25, 35.0, -12.0])
    }

    #[test]
    fn test_evaluate_scenarios() {
        let model = Affinity::<f64>::new();

        let vars = Vars::from_column_slice(&[0., 0., 0., 0., 1., 0.]);
        assert_eq!(model.evaluate(&vars, &Point::new(0., 0.), 2.), Point::new(2., 0.));

        let vars = Vars::from_column_slice(&[0., 1., 0., 0., 0., 0.]);
        assert_eq!(model.evaluate(&vars, &Point::new(1., 1.), 1.), Point::new(2., 2.));
    }

    #[test]
    fn test_evaluate_at_zero_time() {
        let model = Affinity::<f64>::new();
        let c = Point::new(183.25, -41.5);
        assert_eq!(model.evaluate(&sample_vars(), &c, 0.), c);

        let r = model.evaluate_with_coordinate_jacobian(&sample_vars(), &c, 0.);
        assert_eq!(r.cm, c);
        assert_eq!(r.dc, CMatrix::identity());
        assert_eq!(r.dcm, DMatrix::zeros());
    }

    #[test]
    fn test_queries_agree_on_warped_point() {
        let model = Affinity::<f64>::new();
        let c = Point::new(64., 20.);
        let t = 0.004;

        let cm = model.evaluate(&sample_vars(), &c, t);
        let u = model.evaluate_with_uncertainty(&sample_vars(), &c, t);
        let j = model.evaluate_with_coordinate_jacobian(&sample_vars(), &c, t);
        assert_eq!(u.cm, cm);
        assert_eq!(j.cm, cm);
        assert_eq!(u.dcm, j.dcm);
    }

    #[test]
    fn test_uncertainty_outputs() {
        let model = Affinity::<f64>::new();
        let c = Point::new(-5., 9.);
        let t = 0.02;
        let u = model.evaluate_with_uncertainty(&sample_vars(), &c, t);

        // cm = c + cg, since T = I + G
        assert!(norm(&(u.cm - (c + u.cg))) < 1e-12);
        assert_eq!(u.perturbation, perturbation(&c, t));
        assert_eq!(u.dcm.column(Param::Vx.index()), Point::new(t, 0.));
    }

    #[test]
    fn test_coordinate_jacobian_is_top_left_block() {
        let model = Affinity::<f64>::new();
        let t = 0.01;
        let j = model.evaluate_with_coordinate_jacobian(&sample_vars(), &Point::new(3., 4.), t);
        let t_matrix = transformation_from_vars(&(sample_vars() * t));
        assert_eq!(j.dc, t_matrix.fixed_view::<2, 2>(0, 0).into_owned());
    }

    #[test]
    fn test_coordinate_jacobian_finite_difference() {
        let model = Affinity::<f64>::new();
        let c = Point::new(30., -18.);
        let t = 0.01;
        let j = model.evaluate_with_coordinate_jacobian(&sample_vars(), &c, t);

        let eps = 1e-5;
        for k in 0..2 {
            let mut shifted = c;
            shifted[k] += eps;
            let numerical = (model.evaluate(&sample_vars(), &shifted, t) - j.cm) / eps;
            assert!(norm(&(numerical - j.dc.column(k))) < 1e-6);
        }
    }

    #[test]
    fn test_deterministic() {
        let model = Affinity::<f64>::new();
        let c = Point::new(0.1, 0.7);
        let t = 0.3;
        let first = model.evaluate_with_uncertainty(&sample_vars(), &c, t);
        for _ in 0..8 {
            let again = model.evaluate_with_uncertainty(&sample_vars(), &c, t);
            assert_eq!(again, first);
        }
    }
}
