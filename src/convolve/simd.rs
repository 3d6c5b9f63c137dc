//! Four-lane kernel.
//!
//! Each row window is widened to whole lanes starting at a multiple of four. Lanes that face
//! away are clamped to zero cosine instead of branched over, and the zero-weight padding at
//! the end of every source row keeps all loads in bounds.

use glam::Vec3;
use wide::f32x4;

use crate::convolve::kernel::{ConvolutionKernel, FaceAccum};
use crate::convolve::scan::{FaceScan, GgxLobe};
use crate::convolve::source::{ROW_ALIGN, SourceBuffer};
use crate::cube::face::CubeFace;

/// `wide::f32x4` implementation of [`ConvolutionKernel`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SimdKernel;

impl ConvolutionKernel for SimdKernel {
    fn name(&self) -> &'static str {
        "simd"
    }

    fn accumulate_face(
        &self,
        source: &SourceBuffer,
        face: CubeFace,
        normal: Vec3,
        lobe: &GgxLobe,
    ) -> FaceAccum {
        let scan = FaceScan::new(normal, face, source.resolution());
        let dx = scan.dx();
        let lane_steps = f32x4::from([0.0, dx, 2.0 * dx, 3.0 * dx]);
        let step = f32x4::splat(4.0 * dx);
        let aa = f32x4::splat(lobe.aa);
        let c1 = f32x4::splat(lobe.c1);
        let c2 = f32x4::splat(lobe.c2);

        let mut red = f32x4::ZERO;
        let mut green = f32x4::ZERO;
        let mut blue = f32x4::ZERO;
        let mut weight = f32x4::ZERO;

        for row in scan.rows() {
            let texels = source.row(face, row.y);
            let start = row.columns.start - row.columns.start % ROW_ALIGN;
            let mut raw_nl = f32x4::splat(scan.nl_at(row.offset, start)) + lane_steps;

            let mut x = start;
            while x < row.columns.end {
                let nl = (raw_nl * load4(texels.inv_dist, x)).max(f32x4::ZERO);
                let d = nl * c1 + c2;
                let w = load4(texels.solid_angle, x) * (aa / (d * d)) * nl;

                red += load4(texels.red, x) * w;
                green += load4(texels.green, x) * w;
                blue += load4(texels.blue, x) * w;
                weight += w;

                raw_nl += step;
                x += ROW_ALIGN;
            }
        }

        FaceAccum {
            color: [horizontal_sum(red), horizontal_sum(green), horizontal_sum(blue)],
            weight: horizontal_sum(weight),
        }
    }
}

// `x` is lane aligned and rows are padded to whole lanes.
#[inline(always)]
fn load4(row: &[f32], x: usize) -> f32x4 {
    let mut lanes = [0.0f32; 4];
    lanes.copy_from_slice(&row[x..x + 4]);
    f32x4::from(lanes)
}

#[inline(always)]
fn horizontal_sum(v: f32x4) -> f32 {
    let [a, b, c, d] = v.to_array();
    (a + b) + (c + d)
}
