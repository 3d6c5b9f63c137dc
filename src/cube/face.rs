use std::fmt;

use glam::Vec3;

/// Principal axis of a cube face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

/// One of the six cube map faces, in storage order.
///
/// The discriminant is the face index used by every buffer in this crate:
/// `axis * 2 + (1 if negative)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CubeFace {
    /// +X
    PosX = 0,
    /// -X
    NegX = 1,
    /// +Y
    PosY = 2,
    /// -Y
    NegY = 3,
    /// +Z
    PosZ = 4,
    /// -Z
    NegZ = 5,
}

impl CubeFace {
    /// All faces in storage order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Face for a storage index in `0..6`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Storage index of this face.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Axis this face is perpendicular to.
    pub fn axis(self) -> Axis {
        match self {
            CubeFace::PosX | CubeFace::NegX => Axis::X,
            CubeFace::PosY | CubeFace::NegY => Axis::Y,
            CubeFace::PosZ | CubeFace::NegZ => Axis::Z,
        }
    }

    /// Whether the face looks down the negative half of its axis.
    pub fn is_negative(self) -> bool {
        (self as u8) & 1 == 1
    }

    /// The face on the same axis with the opposite sign.
    pub fn opposite(self) -> Self {
        // Flipping the low bit swaps the sign and keeps the axis.
        Self::ALL[self.index() ^ 1]
    }

    /// Local frame of this face.
    ///
    /// Matches the usual cube map convention (the OpenGL `sc`/`tc` selection table):
    /// `u` grows with the texel column and `v` grows with the texel row.
    pub fn frame(self) -> FaceFrame {
        let (normal, u_axis, v_axis) = match self {
            CubeFace::PosX => (Vec3::X, Vec3::NEG_Z, Vec3::NEG_Y),
            CubeFace::NegX => (Vec3::NEG_X, Vec3::Z, Vec3::NEG_Y),
            CubeFace::PosY => (Vec3::Y, Vec3::X, Vec3::Z),
            CubeFace::NegY => (Vec3::NEG_Y, Vec3::X, Vec3::NEG_Z),
            CubeFace::PosZ => (Vec3::Z, Vec3::X, Vec3::NEG_Y),
            CubeFace::NegZ => (Vec3::NEG_Z, Vec3::NEG_X, Vec3::NEG_Y),
        };
        FaceFrame {
            normal,
            u_axis,
            v_axis,
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CubeFace::PosX => "+X",
            CubeFace::NegX => "-X",
            CubeFace::PosY => "+Y",
            CubeFace::NegY => "-Y",
            CubeFace::PosZ => "+Z",
            CubeFace::NegZ => "-Z",
        };
        f.write_str(s)
    }
}

/// Orthonormal basis of a face: the hemicube point at face coordinates `(u, v)` in `[-1, 1]`
/// is `normal + u * u_axis + v * v_axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceFrame {
    /// Outward face normal (the major axis).
    pub normal: Vec3,
    /// Direction of increasing column.
    pub u_axis: Vec3,
    /// Direction of increasing row.
    pub v_axis: Vec3,
}

impl FaceFrame {
    /// Unnormalized point on the unit cube for face coordinates `(u, v)`.
    pub fn point(&self, u: f32, v: f32) -> Vec3 {
        self.normal + self.u_axis * u + self.v_axis * v
    }
}

/// Map normalized face coordinates `s, t` in `[0, 1]` to a unit direction.
pub fn direction_for_face(face: CubeFace, s: f32, t: f32) -> Vec3 {
    face.frame()
        .point(s * 2.0 - 1.0, t * 2.0 - 1.0)
        .normalize()
}

#[cfg(test)]
#[path = "../../tests/unit/cube/face.rs"]
mod tests;
