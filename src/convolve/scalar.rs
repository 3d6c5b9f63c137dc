use glam::Vec3;

use crate::convolve::kernel::{ConvolutionKernel, FaceAccum};
use crate::convolve::scan::{FaceScan, GgxLobe};
use crate::convolve::source::SourceBuffer;
use crate::cube::face::CubeFace;

/// One texel at a time, skipping texels that face away.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarKernel;

impl ConvolutionKernel for ScalarKernel {
    fn name(&self) -> &'static str {
        "scalar"
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
        let mut acc = FaceAccum::default();

        for row in scan.rows() {
            let texels = source.row(face, row.y);
            let mut raw_nl = scan.nl_at(row.offset, row.columns.start);
            for x in row.columns {
                let nl = raw_nl * texels.inv_dist[x];
                raw_nl += dx;
                if nl > 0.0 {
                    let weight = texels.solid_angle[x] * lobe.distribution(nl) * nl;
                    acc.add_sample([texels.red[x], texels.green[x], texels.blue[x]], weight);
                }
            }
        }
        acc
    }
}
