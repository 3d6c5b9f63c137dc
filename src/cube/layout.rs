use glam::Vec3;

use crate::cube::face::{CubeFace, direction_for_face};
use crate::cube::solid_angle::solid_angle_term;
use crate::cube::warp::tex_coord_warp;
use crate::foundation::error::{GgxError, GgxResult};

/// Address of one texel in a cube map mip chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TexelCoord {
    /// Cube face.
    pub face: CubeFace,
    /// Mip level, `0` is the base resolution.
    pub mip: u32,
    /// Column within the mip.
    pub x: u32,
    /// Row within the mip.
    pub y: u32,
}

/// Face-major, mip-minor, row-major layout of a six-face mip chain.
///
/// This is both the linear work-item order of the convolver and the byte order of the
/// output container: face `+X` with all its mips, then `-X`, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MipChainLayout {
    base_res: u32,
    num_mips: u32,
    texels_per_face: usize,
}

impl MipChainLayout {
    /// Layout with every level down to 1x1.
    pub fn full_chain(base_res: u32) -> GgxResult<Self> {
        Self::new(base_res, full_chain_len(base_res))
    }

    /// Layout with `num_mips` levels below and including `base_res`.
    pub fn new(base_res: u32, num_mips: u32) -> GgxResult<Self> {
        if base_res == 0 {
            return Err(GgxError::validation("cube face resolution must be > 0"));
        }
        if num_mips == 0 || num_mips > full_chain_len(base_res) {
            return Err(GgxError::validation(format!(
                "mip count {num_mips} is not valid for a {base_res}x{base_res} face"
            )));
        }
        let texels_per_face = (0..num_mips)
            .map(|mip| {
                let r = (base_res >> mip).max(1) as usize;
                r * r
            })
            .sum();
        Ok(Self {
            base_res,
            num_mips,
            texels_per_face,
        })
    }

    /// Resolution of mip 0.
    pub fn base_res(&self) -> u32 {
        self.base_res
    }

    /// Number of levels in the chain.
    pub fn num_mips(&self) -> u32 {
        self.num_mips
    }

    /// Side length of `mip`.
    pub fn mip_resolution(&self, mip: u32) -> u32 {
        (self.base_res >> mip).max(1)
    }

    /// Texels in one face, summed over every level.
    pub fn texels_per_face(&self) -> usize {
        self.texels_per_face
    }

    /// Texels in the whole chain: `6 * texels_per_face`.
    pub fn total_texels(&self) -> usize {
        self.texels_per_face * 6
    }

    /// Offset of the first texel of `mip`, relative to the start of its face.
    pub fn mip_offset(&self, mip: u32) -> usize {
        (0..mip.min(self.num_mips))
            .map(|m| {
                let r = self.mip_resolution(m) as usize;
                r * r
            })
            .sum()
    }

    /// Decompose a linear index into `(face, mip, x, y)`.
    ///
    /// Returns `None` for indices past [`Self::total_texels`].
    pub fn flat_index_to_texel(&self, index: usize) -> Option<TexelCoord> {
        if index >= self.total_texels() {
            return None;
        }
        let face = CubeFace::from_index(index / self.texels_per_face)?;
        let mut rem = index % self.texels_per_face;

        let mut mip = 0;
        let mut res = self.base_res as usize;
        while rem >= res * res {
            rem -= res * res;
            res = (res >> 1).max(1);
            mip += 1;
        }

        Some(TexelCoord {
            face,
            mip,
            x: (rem % res) as u32,
            y: (rem / res) as u32,
        })
    }

    /// Inverse of [`Self::flat_index_to_texel`].
    pub fn texel_to_flat_index(&self, coord: TexelCoord) -> usize {
        let res = self.mip_resolution(coord.mip) as usize;
        coord.face.index() * self.texels_per_face
            + self.mip_offset(coord.mip)
            + coord.y as usize * res
            + coord.x as usize
    }
}

/// Decompose `index` for a `base_res` chain of `num_mips` levels.
///
/// Free-function form of [`MipChainLayout::flat_index_to_texel`].
pub fn flat_index_to_texel(index: usize, base_res: u32, num_mips: u32) -> Option<TexelCoord> {
    MipChainLayout::new(base_res, num_mips)
        .ok()?
        .flat_index_to_texel(index)
}

/// Number of levels from `base_res` down to 1x1.
pub fn full_chain_len(base_res: u32) -> u32 {
    u32::BITS - base_res.leading_zeros()
}

/// A texel's sample direction together with the solid angle it covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    /// Unit direction through the (possibly warped) texel center.
    pub vector: Vec3,
    /// Solid angle of the texel's footprint on the hemicube face.
    pub solid_angle: f32,
}

/// Direction of texel `(x, y)` on a `resolution`-sided `face`, warped by `warp`.
pub fn texel_direction(face: CubeFace, x: u32, y: u32, resolution: u32, warp: f32) -> Direction {
    let s = tex_coord_warp(x, resolution, warp);
    let t = tex_coord_warp(y, resolution, warp);
    Direction {
        vector: direction_for_face(face, s, t),
        solid_angle: solid_angle_term(x, y, 1.0 / resolution as f32),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cube/layout.rs"]
mod tests;
