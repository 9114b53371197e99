//! Mathematical utilities for 2D frame calculations

pub mod sparse;

use nalgebra::{DMatrix, DVector, Matrix3, SMatrix, SVector};

// Re-export sparse utilities
pub use sparse::{MatrixAssembler, SkylineSolver, SparseMatrixBuilder};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;

/// 6x6 matrix for element stiffness/mass
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-element vector for element end forces/displacements
pub type Vec6 = SVector<f64, 6>;

/// Compute the transformation matrix for a 2D frame element
///
/// # Arguments
/// * `i_node` - Start node coordinates [X, Y]
/// * `j_node` - End node coordinates [X, Y]
///
/// # Returns
/// 6x6 matrix `T` with `d_local = T * d_global`. The caller guarantees a
/// non-zero length.
pub fn frame_transformation_matrix(i_node: &[f64; 2], j_node: &[f64; 2]) -> Mat6 {
    let dx = j_node[0] - i_node[0];
    let dy = j_node[1] - i_node[1];
    let length = (dx * dx + dy * dy).sqrt();

    let c = dx / length;
    let s = dy / length;

    let r = Mat3::new(
        c, s, 0.0,
        -s, c, 0.0,
        0.0, 0.0, 1.0,
    );

    let mut t = Mat6::zeros();
    t.fixed_view_mut::<3, 3>(0, 0).copy_from(&r);
    t.fixed_view_mut::<3, 3>(3, 3).copy_from(&r);
    t
}

/// Compute the local stiffness matrix for a 2D frame element
///
/// Local DOF order is [u_i, v_i, θ_i, u_j, v_j, θ_j].
pub fn frame_local_stiffness(e: f64, a: f64, iz: f64, length: f64) -> Mat6 {
    let l = length;
    let ea_l = e * a / l;
    let ei_l = e * iz / l;
    let ei_l2 = ei_l / l;
    let ei_l3 = ei_l2 / l;

    #[rustfmt::skip]
    let data = [
        ea_l,   0.0,           0.0,         -ea_l,  0.0,           0.0,
        0.0,    12.0 * ei_l3,  6.0 * ei_l2,  0.0,   -12.0 * ei_l3, 6.0 * ei_l2,
        0.0,    6.0 * ei_l2,   4.0 * ei_l,   0.0,   -6.0 * ei_l2,  2.0 * ei_l,
        -ea_l,  0.0,           0.0,          ea_l,  0.0,           0.0,
        0.0,    -12.0 * ei_l3, -6.0 * ei_l2, 0.0,   12.0 * ei_l3,  -6.0 * ei_l2,
        0.0,    6.0 * ei_l2,   2.0 * ei_l,   0.0,   -6.0 * ei_l2,  4.0 * ei_l,
    ];

    Mat6::from_row_slice(&data)
}

/// P-Delta geometric stiffness for a 2D frame element
///
/// # Arguments
/// * `n` - Axial force (positive = tension)
/// * `length` - Element length
pub fn frame_geometric_stiffness(n: f64, length: f64) -> Mat6 {
    let mut kg = Mat6::zeros();
    if n.abs() < 1e-14 {
        return kg;
    }
    let n_l = n / length;
    kg[(1, 1)] = n_l;
    kg[(1, 4)] = -n_l;
    kg[(4, 1)] = -n_l;
    kg[(4, 4)] = n_l;
    kg
}

/// Lumped mass matrix: half the element mass on each end translation
pub fn frame_lumped_mass(mass_per_length: f64, length: f64) -> Mat6 {
    let half = 0.5 * mass_per_length * length;
    let mut m = Mat6::zeros();
    for dof in [0, 1, 3, 4] {
        m[(dof, dof)] = half;
    }
    m
}

/// Consistent mass matrix in local coordinates
pub fn frame_consistent_mass(mass_per_length: f64, length: f64) -> Mat6 {
    let l = length;
    let ml = mass_per_length * l;
    let a = ml / 6.0;
    let b = ml / 420.0;

    #[rustfmt::skip]
    let data = [
        2.0 * a, 0.0,             0.0,                 1.0 * a, 0.0,             0.0,
        0.0,     156.0 * b,       22.0 * l * b,        0.0,     54.0 * b,        -13.0 * l * b,
        0.0,     22.0 * l * b,    4.0 * l * l * b,     0.0,     13.0 * l * b,    -3.0 * l * l * b,
        1.0 * a, 0.0,             0.0,                 2.0 * a, 0.0,             0.0,
        0.0,     54.0 * b,        13.0 * l * b,        0.0,     156.0 * b,       -22.0 * l * b,
        0.0,     -13.0 * l * b,   -3.0 * l * l * b,    0.0,     -22.0 * l * b,   4.0 * l * l * b,
    ];

    Mat6::from_row_slice(&data)
}

/// Rotate a local element matrix to global axes: `Tᵀ · K · T`
pub fn to_global(k_local: &Mat6, t: &Mat6) -> Mat6 {
    t.transpose() * k_local * t
}

/// Solve a linear system using LU decomposition
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transformation_matrix_horizontal() {
        let t = frame_transformation_matrix(&[0.0, 0.0], &[10.0, 0.0]);
        assert_relative_eq!(t, Mat6::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_transformation_matrix_vertical() {
        let t = frame_transformation_matrix(&[0.0, 0.0], &[0.0, 10.0]);
        // local x = global Y, local y = -global X
        assert_relative_eq!(t[(0, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(t[(1, 0)], -1.0, epsilon = 1e-12);
        assert_relative_eq!(t[(2, 2)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(t[(3, 4)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_local_stiffness_symmetry() {
        let k = frame_local_stiffness(29500.0, 72.3, 3230.0, 162.0);
        assert_relative_eq!(k, k.transpose(), epsilon = 1e-9);
        // Rigid-body translation produces no force
        let rigid = Vec6::from_row_slice(&[1.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
        assert_relative_eq!((k * rigid).norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_column_global_lateral_stiffness() {
        // A vertical column carries its 12EI/L^3 bending term on global X
        let (e, a, iz, l) = (29500.0, 72.3, 3230.0, 162.0);
        let t = frame_transformation_matrix(&[0.0, 0.0], &[0.0, l]);
        let k = to_global(&frame_local_stiffness(e, a, iz, l), &t);
        assert_relative_eq!(k[(0, 0)], 12.0 * e * iz / l.powi(3), max_relative = 1e-12);
        assert_relative_eq!(k[(1, 1)], e * a / l, max_relative = 1e-12);
    }

    #[test]
    fn test_mass_matrices_conserve_total_mass() {
        let (m, l) = (0.2, 30.0);
        let lumped = frame_lumped_mass(m, l);
        let consistent = frame_consistent_mass(m, l);
        let ux = Vec6::from_row_slice(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        let uy = Vec6::from_row_slice(&[0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
        for mass in [lumped, consistent] {
            assert_relative_eq!(ux.dot(&(mass * ux)), m * l, max_relative = 1e-12);
            assert_relative_eq!(uy.dot(&(mass * uy)), m * l, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_geometric_stiffness_zero_axial() {
        assert_eq!(frame_geometric_stiffness(0.0, 10.0), Mat6::zeros());
        let kg = frame_geometric_stiffness(100.0, 10.0);
        assert_relative_eq!(kg[(1, 1)], 10.0);
        assert_relative_eq!(kg[(1, 4)], -10.0);
    }
}
