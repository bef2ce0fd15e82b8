//! Orientation Module
//!
//! Exact 90° rotations of the unit grid.
//!
//! An [`Orientation`] is one of the 24 proper rotations of a cube, stored as an
//! integer 3×3 matrix (columns are the images of the X, Y and Z unit vectors).
//! Composition is integer matrix multiplication, so any number of quarter-turn
//! increments stays exact: four turns about one axis give back the identity
//! bit-for-bit, never "almost" the identity.
//!
//! Floating point only appears at the edges: [`Orientation::apply_vec3`],
//! [`Orientation::to_mat3`] / [`Orientation::to_quat`] for a renderer, and
//! [`Orientation::from_euler_xyz`] for importing angles stored by older tools.

use std::collections::VecDeque;
use std::f32::consts::FRAC_PI_2;

use glam::{IVec3, Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of proper rotations of a cube.
pub const ORIENTATION_COUNT: usize = 24;

/// Angular tolerance (radians) when snapping Euler angles to quarter turns.
pub const EULER_SNAP_TOLERANCE: f32 = 1e-3;

/// A principal world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit vector along this axis.
    pub const fn unit(self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }

    /// Component of `v` along this axis.
    pub fn component(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// `v` with its component along this axis replaced by `value`.
    pub fn with_component(self, mut v: Vec3, value: f32) -> Vec3 {
        v[self.index()] = value;
        v
    }
}

/// Raised when a matrix is not one of the 24 cube rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("matrix {0:?} is not a proper 90-degree rotation")]
pub struct OrientationError(pub [[i32; 3]; 3]);

/// Exact rotation of the grid by multiples of 90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[i32; 3]; 3]", into = "[[i32; 3]; 3]")]
pub struct Orientation {
    cols: [IVec3; 3],
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        cols: [IVec3::X, IVec3::Y, IVec3::Z],
    };

    /// +90° (right-handed) about a world axis.
    pub const fn quarter_turn(axis: Axis) -> Orientation {
        let cols = match axis {
            // y -> z, z -> -y
            Axis::X => [IVec3::X, IVec3::Z, IVec3::NEG_Y],
            // z -> x, x -> -z
            Axis::Y => [IVec3::NEG_Z, IVec3::Y, IVec3::X],
            // x -> y, y -> -x
            Axis::Z => [IVec3::Y, IVec3::NEG_X, IVec3::Z],
        };
        Orientation { cols }
    }

    /// Columns of the rotation matrix (images of X, Y and Z).
    pub fn columns(&self) -> [IVec3; 3] {
        self.cols
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Rotate an integer vector. Exact.
    pub fn apply(&self, v: IVec3) -> IVec3 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }

    /// Rotate a floating point vector.
    ///
    /// Every matrix entry is -1, 0 or 1, so this only permutes and negates
    /// components; no rounding is introduced.
    pub fn apply_vec3(&self, v: Vec3) -> Vec3 {
        self.cols[0].as_vec3() * v.x + self.cols[1].as_vec3() * v.y + self.cols[2].as_vec3() * v.z
    }

    /// Matrix product `self · rhs` (apply `rhs` first).
    fn mul(&self, rhs: &Orientation) -> Orientation {
        Orientation {
            cols: [
                self.apply(rhs.cols[0]),
                self.apply(rhs.cols[1]),
                self.apply(rhs.cols[2]),
            ],
        }
    }

    /// Rotate by `first`, then by `then`, both about world axes.
    pub fn compose(first: Orientation, then: Orientation) -> Orientation {
        then.mul(&first)
    }

    /// One quarter turn about a world axis, applied after the current rotation.
    pub fn rotate90(self, axis: Axis) -> Orientation {
        Self::compose(self, Self::quarter_turn(axis))
    }

    /// `quarter_turns` turns about a world axis; negative values turn backwards.
    pub fn rotate_by(self, axis: Axis, quarter_turns: i32) -> Orientation {
        (0..quarter_turns.rem_euclid(4)).fold(self, |o, _| o.rotate90(axis))
    }

    /// Inverse rotation (the transpose).
    pub fn inverse(&self) -> Orientation {
        let [c0, c1, c2] = self.cols;
        Orientation {
            cols: [
                IVec3::new(c0.x, c1.x, c2.x),
                IVec3::new(c0.y, c1.y, c2.y),
                IVec3::new(c0.z, c1.z, c2.z),
            ],
        }
    }

    /// All 24 proper rotations, identity first.
    ///
    /// Generated as the closure of the identity under quarter turns about the
    /// three axes, so it is exactly the set reachable by interactive rotation.
    pub fn all() -> Vec<Orientation> {
        let mut found = vec![Self::IDENTITY];
        let mut queue = VecDeque::from([Self::IDENTITY]);

        while let Some(current) = queue.pop_front() {
            for axis in Axis::ALL {
                let next = current.rotate90(axis);
                if !found.contains(&next) {
                    found.push(next);
                    queue.push_back(next);
                }
            }
        }

        found
    }

    // ========================================================================
    // Float bridges
    // ========================================================================

    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(
            self.cols[0].as_vec3(),
            self.cols[1].as_vec3(),
            self.cols[2].as_vec3(),
        )
    }

    pub fn to_quat(&self) -> Quat {
        Quat::from_mat3(&self.to_mat3())
    }

    /// Snap an XYZ-order Euler rotation (radians) to an exact orientation.
    ///
    /// The matrix is `Rx · Ry · Rz`, the convention of the Euler angles older
    /// scene files store. Returns `None` if any angle is further than
    /// [`EULER_SNAP_TOLERANCE`] from a multiple of 90°.
    pub fn from_euler_xyz(euler: Vec3) -> Option<Orientation> {
        let turns = |angle: f32| -> Option<i32> {
            let k = (angle / FRAC_PI_2).round();
            if (angle - k * FRAC_PI_2).abs() <= EULER_SNAP_TOLERANCE {
                Some(k as i32)
            } else {
                None
            }
        };

        let rx = Self::IDENTITY.rotate_by(Axis::X, turns(euler.x)?);
        let ry = Self::IDENTITY.rotate_by(Axis::Y, turns(euler.y)?);
        let rz = Self::IDENTITY.rotate_by(Axis::Z, turns(euler.z)?);
        Some(rx.mul(&ry).mul(&rz))
    }

    fn determinant(&self) -> i32 {
        self.cols[0].dot(self.cols[1].cross(self.cols[2]))
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<[[i32; 3]; 3]> for Orientation {
    type Error = OrientationError;

    fn try_from(cols: [[i32; 3]; 3]) -> Result<Self, Self::Error> {
        let candidate = Orientation {
            cols: cols.map(IVec3::from_array),
        };

        // Unit columns that are mutually orthogonal with det +1.
        let unit = candidate
            .cols
            .iter()
            .all(|c| c.abs().element_sum() == 1 && c.abs().max_element() == 1);
        if unit && candidate.determinant() == 1 {
            Ok(candidate)
        } else {
            Err(OrientationError(cols))
        }
    }
}

impl From<Orientation> for [[i32; 3]; 3] {
    fn from(o: Orientation) -> Self {
        o.cols.map(|c| c.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quarter_turns_map_axes() {
        let rx = Orientation::quarter_turn(Axis::X);
        assert_eq!(rx.apply(IVec3::Y), IVec3::Z);
        assert_eq!(rx.apply(IVec3::Z), IVec3::NEG_Y);

        let ry = Orientation::quarter_turn(Axis::Y);
        assert_eq!(ry.apply(IVec3::Z), IVec3::X);
        assert_eq!(ry.apply(IVec3::X), IVec3::NEG_Z);

        let rz = Orientation::quarter_turn(Axis::Z);
        assert_eq!(rz.apply(IVec3::X), IVec3::Y);
        assert_eq!(rz.apply(IVec3::Y), IVec3::NEG_X);
    }

    #[test]
    fn test_quarter_turns_agree_with_glam() {
        for axis in Axis::ALL {
            let exact = Orientation::quarter_turn(axis).to_quat();
            let float = Quat::from_axis_angle(axis.unit().as_vec3(), FRAC_PI_2);
            let v = Vec3::new(1.0, 2.0, 3.0);
            let a = exact * v;
            let b = float * v;
            assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_four_turns_is_identity() {
        for axis in Axis::ALL {
            let mut o = Orientation::IDENTITY;
            for _ in 0..4 {
                o = o.rotate90(axis);
            }
            assert!(o.is_identity(), "axis {axis:?}");
        }
    }

    #[test]
    fn test_rotate_by_negative_is_inverse() {
        for axis in Axis::ALL {
            let back = Orientation::IDENTITY.rotate_by(axis, -1);
            assert_eq!(back, Orientation::quarter_turn(axis).inverse());
            assert_eq!(back.rotate90(axis), Orientation::IDENTITY);
        }
    }

    #[test]
    fn test_exactly_24_orientations() {
        let all = Orientation::all();
        assert_eq!(all.len(), ORIENTATION_COUNT);
        assert_eq!(all[0], Orientation::IDENTITY);
        assert!(all.iter().all(|o| o.determinant() == 1));
    }

    #[test]
    fn test_compose_order_is_first_then_second() {
        let rx = Orientation::quarter_turn(Axis::X);
        let rz = Orientation::quarter_turn(Axis::Z);
        // X first: Y -> Z, then Z about Z stays Z.
        assert_eq!(Orientation::compose(rx, rz).apply(IVec3::Y), IVec3::Z);
        // Z first: Y -> -X, then -X about X stays -X.
        assert_eq!(Orientation::compose(rz, rx).apply(IVec3::Y), IVec3::NEG_X);
    }

    #[test]
    fn test_euler_import() {
        let o = Orientation::from_euler_xyz(Vec3::new(0.0, 0.0, FRAC_PI_2)).unwrap();
        assert_eq!(o, Orientation::quarter_turn(Axis::Z));

        // Float noise as produced by quaternion round trips still snaps.
        let noisy = Vec3::new(-FRAC_PI_2 + 1e-6, std::f32::consts::PI, 0.0);
        let o = Orientation::from_euler_xyz(noisy).unwrap();
        let expected = Orientation::IDENTITY
            .rotate_by(Axis::X, -1)
            .mul(&Orientation::IDENTITY.rotate_by(Axis::Y, 2));
        assert_eq!(o, expected);

        assert_eq!(Orientation::from_euler_xyz(Vec3::new(0.3, 0.0, 0.0)), None);
    }

    #[test]
    fn test_euler_import_matches_glam_convention() {
        let euler = Vec3::new(FRAC_PI_2, -FRAC_PI_2, std::f32::consts::PI);
        let exact = Orientation::from_euler_xyz(euler).unwrap().to_mat3();
        let float = Mat3::from_euler(glam::EulerRot::XYZ, euler.x, euler.y, euler.z);
        for i in 0..3 {
            let (a, b) = (exact.col(i), float.col(i));
            assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_serde_rejects_non_rotations() {
        let json = serde_json::to_string(&Orientation::quarter_turn(Axis::Y)).unwrap();
        let back: Orientation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Orientation::quarter_turn(Axis::Y));

        // Reflection: det = -1
        let reflection = "[[-1,0,0],[0,1,0],[0,0,1]]";
        assert!(serde_json::from_str::<Orientation>(reflection).is_err());
        // Scaled column
        let scaled = "[[2,0,0],[0,1,0],[0,0,1]]";
        assert!(serde_json::from_str::<Orientation>(scaled).is_err());
    }

    #[test]
    fn test_axis_component_helpers() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::Y.component(v), 2.0);
        assert_eq!(Axis::Z.with_component(v, 9.0), Vec3::new(1.0, 2.0, 9.0));
    }
}
