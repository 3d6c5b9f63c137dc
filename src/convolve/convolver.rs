use crate::color::srgb::encode_rgb_opaque;
use crate::convolve::kernel::{ConvolutionKernel, convolve_texel};
use crate::convolve::roughness::RoughnessSchedule;
use crate::convolve::source::SourceBuffer;
use crate::cube::layout::{MipChainLayout, texel_direction};
use crate::cube::warp::warp_factor;

/// Computes individual output texels of a prefiltered mip chain.
///
/// Holds only shared references and per-mip constants, so one instance serves every worker.
pub struct Convolver<'a> {
    kernel: &'a dyn ConvolutionKernel,
    source: &'a SourceBuffer,
    layout: MipChainLayout,
    mips: Vec<MipParams>,
}

#[derive(Clone, Copy, Debug)]
struct MipParams {
    resolution: u32,
    warp: f32,
    roughness: f32,
}

impl<'a> Convolver<'a> {
    /// Convolver writing `layout` from `source` with `kernel`.
    pub fn new(
        kernel: &'a dyn ConvolutionKernel,
        source: &'a SourceBuffer,
        layout: MipChainLayout,
    ) -> Self {
        let schedule = RoughnessSchedule::new(layout.num_mips());
        let mips = (0..layout.num_mips())
            .map(|mip| {
                let resolution = layout.mip_resolution(mip);
                MipParams {
                    resolution,
                    warp: warp_factor(resolution),
                    roughness: schedule.roughness(mip),
                }
            })
            .collect();
        Self {
            kernel,
            source,
            layout,
            mips,
        }
    }

    /// Output layout.
    pub fn layout(&self) -> &MipChainLayout {
        &self.layout
    }

    /// Roughness used for each mip, in level order.
    pub fn roughness_per_mip(&self) -> impl Iterator<Item = f32> + '_ {
        self.mips.iter().map(|m| m.roughness)
    }

    /// Linear color of output texel `index` (see [`MipChainLayout::flat_index_to_texel`]).
    ///
    /// Indices past the end of the chain yield black.
    pub fn linear_texel(&self, index: usize) -> [f32; 3] {
        let Some(coord) = self.layout.flat_index_to_texel(index) else {
            return [0.0; 3];
        };
        let params = self.mips[coord.mip as usize];
        let dir = texel_direction(coord.face, coord.x, coord.y, params.resolution, params.warp);
        convolve_texel(
            self.kernel,
            self.source,
            coord.face,
            dir.vector,
            params.roughness,
        )
    }

    /// Encoded sRGB8 texel with opaque alpha.
    pub fn texel(&self, index: usize) -> [u8; 4] {
        encode_rgb_opaque(self.linear_texel(index))
    }
}
