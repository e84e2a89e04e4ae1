use nalgebra::RealField;

use crate::generator::{apply_generator, dgenerator};
use crate::types::{DMatrix, GMatrix, Param, Point, PointHomogeneous};

/// Column of the parameter Jacobian for a single generator derivative.
pub fn dtransformation_dparam<T: RealField + Copy>(
    dg_matrix: &GMatrix<T>,
    ch: &PointHomogeneous<T>,
) -> Point<T> {
    apply_generator(dg_matrix, ch)
}

/// Jacobian of the warped point with respect to the motion parameters.
///
/// `T = I + G` is linear in the parameters, so column `i` is just
/// `dG/dparam_i * ch` with the homogeneous row dropped.
pub fn dtransformation_dvars<T: RealField + Copy>(ch: &PointHomogeneous<T>, t: T) -> DMatrix<T> {
    let mut dcm = DMatrix::zeros();
    for param in Param::ALL {
        let dg_matrix = dgenerator(param, t);
        dcm.set_column(param.index(), &dtransformation_dparam(&dg_matrix, ch));
    }
    dcm
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::matrix;

    use crate::generator::generator;
    use crate::norm::norm;
    use crate::transform::transformation;
    use crate::types::{homogeneous, Vars};

    #[test]
    fn test_dtransformation_dvars() {
        let c = Point::new(3., -2.);
        let t = 0.5;
        let dcm = dtransformation_dvars(&homogeneous(&c), t);

        #[rustfmt::skip]
        let expected: DMatrix<f64> = matrix![
            -t * c[1], t * c[0], t * c[0], t * c[1], t, 0.;
            t * c[0], t * c[1], -t * c[1], t * c[0], 0., t
        ];
        assert_eq!(dcm, expected);
    }

    #[test]
    fn test_dtransformation_dvars_finite_difference() {
        let vars = Vars::from_column_slice(&[0.2, -0.1, 0.05, 0.3, 4.0, -1.5]);
        let c = Point::new(12.0, -7.5);
        let t = 0.01;
        let ch = homogeneous(&c);

        let (cm0, _) = transformation(&generator(&(vars * t)), &ch);
        let dcm = dtransformation_dvars(&ch, t);

        let eps = 1e-4;
        for param in Param::ALL {
            let mut shifted = vars;
            shifted[param.index()] += eps;
            let (cm1, _) = transformation(&generator(&(shifted * t)), &ch);
            let numerical = (cm1 - cm0) / eps;
            let d = numerical - dcm.column(param.index());
            assert!(norm(&d) < 1e-6);
        }
    }

    #[test]
    fn test_zero_time_has_zero_jacobian() {
        let dcm = dtransformation_dvars(&PointHomogeneous::new(4., 5., 1.), 0.);
        assert_eq!(dcm, DMatrix::zeros());
    }
}
