use crate::color::srgb::decode_srgb8;
use crate::cube::face::CubeFace;
use crate::cube::solid_angle::solid_angle_term;
use crate::cube::warp::tex_coord_warp;
use crate::foundation::error::{GgxError, GgxResult};

/// Lane width the rows are padded to.
pub(crate) const ROW_ALIGN: usize = 4;

/// Precomputed data for one source texel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceTexel {
    /// `1 / |p|` for the hemicube point `p` of the texel; turns a raw dot product into a cosine.
    pub inv_dist: f32,
    /// Solid angle of the texel.
    pub solid_angle: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// The source cube map prepared for convolution.
///
/// Stored as parallel arrays (one per field), face-major and row-major. Rows are padded to
/// a multiple of the vector lane width with zero-weight texels so the vector kernel can always load
/// whole lanes. Built once, then shared read-only by every worker.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    res: usize,
    stride: usize,
    inv_dist: Vec<f32>,
    solid_angle: Vec<f32>,
    red: Vec<f32>,
    green: Vec<f32>,
    blue: Vec<f32>,
}

/// One padded row of a [`SourceBuffer`]; every slice has `stride` entries.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SourceRow<'a> {
    pub inv_dist: &'a [f32],
    pub solid_angle: &'a [f32],
    pub red: &'a [f32],
    pub green: &'a [f32],
    pub blue: &'a [f32],
}

impl SourceBuffer {
    /// Prepare six `res x res` RGBA8 (sRGB) faces, stored back to back in face order.
    ///
    /// Alpha is ignored.
    pub fn from_rgba8(res: u32, faces: &[u8]) -> GgxResult<Self> {
        if res == 0 {
            return Err(GgxError::validation("source face resolution must be > 0"));
        }
        let res = res as usize;
        let expected = res
            .checked_mul(res)
            .and_then(|v| v.checked_mul(6 * 4))
            .ok_or_else(|| GgxError::validation("source buffer size overflow"))?;
        if faces.len() != expected {
            return Err(GgxError::validation(format!(
                "source faces must be {expected} bytes for {res}x{res}x6 RGBA8, got {}",
                faces.len()
            )));
        }

        let stride = res.div_ceil(ROW_ALIGN) * ROW_ALIGN;
        let len = 6 * res * stride;
        let mut buf = Self {
            res,
            stride,
            inv_dist: vec![0.0; len],
            solid_angle: vec![0.0; len],
            red: vec![0.0; len],
            green: vec![0.0; len],
            blue: vec![0.0; len],
        };

        // Geometry is identical for every face; compute it once per texel position.
        let inverse_edge = 1.0 / res as f32;
        let mut face_inv_dist = vec![0.0f32; res * res];
        let mut face_solid_angle = vec![0.0f32; res * res];
        for y in 0..res {
            let v = tex_coord_warp(y as u32, res as u32, 0.0) * 2.0 - 1.0;
            for x in 0..res {
                let u = tex_coord_warp(x as u32, res as u32, 0.0) * 2.0 - 1.0;
                face_inv_dist[y * res + x] = 1.0 / (u * u + v * v + 1.0).sqrt();
                face_solid_angle[y * res + x] = solid_angle_term(x as u32, y as u32, inverse_edge);
            }
        }

        for (face_idx, face_px) in faces.chunks_exact(res * res * 4).enumerate() {
            for y in 0..res {
                let dst_row = (face_idx * res + y) * stride;
                for x in 0..res {
                    let src = (y * res + x) * 4;
                    let dst = dst_row + x;
                    buf.inv_dist[dst] = face_inv_dist[y * res + x];
                    buf.solid_angle[dst] = face_solid_angle[y * res + x];
                    buf.red[dst] = decode_srgb8(face_px[src]);
                    buf.green[dst] = decode_srgb8(face_px[src + 1]);
                    buf.blue[dst] = decode_srgb8(face_px[src + 2]);
                }
            }
        }

        Ok(buf)
    }

    /// Side length of each source face.
    pub fn resolution(&self) -> usize {
        self.res
    }

    /// Padded row length.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Record for texel `(x, y)` of `face`, or `None` outside the face.
    pub fn texel(&self, face: CubeFace, x: usize, y: usize) -> Option<SourceTexel> {
        if x >= self.res || y >= self.res {
            return None;
        }
        let i = self.row_start(face, y) + x;
        Some(SourceTexel {
            inv_dist: self.inv_dist[i],
            solid_angle: self.solid_angle[i],
            color: [self.red[i], self.green[i], self.blue[i]],
        })
    }

    pub(crate) fn row(&self, face: CubeFace, y: usize) -> SourceRow<'_> {
        let start = self.row_start(face, y);
        let span = start..start + self.stride;
        SourceRow {
            inv_dist: &self.inv_dist[span.clone()],
            solid_angle: &self.solid_angle[span.clone()],
            red: &self.red[span.clone()],
            green: &self.green[span.clone()],
            blue: &self.blue[span],
        }
    }

    fn row_start(&self, face: CubeFace, y: usize) -> usize {
        (face.index() * self.res + y) * self.stride
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convolve/source.rs"]
mod tests;
