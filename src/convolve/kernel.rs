use glam::Vec3;

use crate::convolve::scalar::ScalarKernel;
use crate::convolve::scan::GgxLobe;
use crate::convolve::simd::SimdKernel;
use crate::convolve::source::SourceBuffer;
use crate::cube::face::CubeFace;

/// Weighted color sum over part of the sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FaceAccum {
    /// Sum of `weight * linear color`.
    pub color: [f32; 3],
    /// Sum of weights.
    pub weight: f32,
}

impl FaceAccum {
    /// Add one weighted sample.
    pub fn add_sample(&mut self, color: [f32; 3], weight: f32) {
        self.color[0] += color[0] * weight;
        self.color[1] += color[1] * weight;
        self.color[2] += color[2] * weight;
        self.weight += weight;
    }

    /// Merge another accumulator into this one.
    pub fn merge(&mut self, other: FaceAccum) {
        self.color[0] += other.color[0];
        self.color[1] += other.color[1];
        self.color[2] += other.color[2];
        self.weight += other.weight;
    }

    /// Normalized linear color; black when nothing was accumulated.
    pub fn resolve(&self) -> [f32; 3] {
        if self.weight == 0.0 {
            return [0.0; 3];
        }
        let inv = 1.0 / self.weight;
        [self.color[0] * inv, self.color[1] * inv, self.color[2] * inv]
    }
}

/// Integration strategy for one (destination direction, source face) pair.
///
/// Implementations must agree with each other to within 8-bit quantization. They are
/// stateless and shared across workers.
pub trait ConvolutionKernel: Send + Sync {
    /// Short name used in logs and stats.
    fn name(&self) -> &'static str;

    /// GGX- and solid-angle-weighted sum of `face` as seen from direction `normal`.
    fn accumulate_face(
        &self,
        source: &SourceBuffer,
        face: CubeFace,
        normal: Vec3,
        lobe: &GgxLobe,
    ) -> FaceAccum;
}

/// Source faces integrated for output texels on `out_face`.
///
/// The face opposite `out_face` is never visited.
pub fn visible_source_faces(out_face: CubeFace) -> impl Iterator<Item = CubeFace> {
    CubeFace::ALL
        .into_iter()
        .filter(move |&face| face.axis() != out_face.axis() || face == out_face)
}

/// Prefiltered linear color for direction `normal` of an output texel on `out_face`.
pub fn convolve_texel(
    kernel: &dyn ConvolutionKernel,
    source: &SourceBuffer,
    out_face: CubeFace,
    normal: Vec3,
    roughness: f32,
) -> [f32; 3] {
    let lobe = GgxLobe::new(roughness);
    let mut total = FaceAccum::default();
    for face in visible_source_faces(out_face) {
        total.merge(kernel.accumulate_face(source, face, normal, &lobe));
    }
    total.resolve()
}

/// Which [`ConvolutionKernel`] to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KernelChoice {
    /// Vector kernel when the CPU supports it, scalar otherwise.
    #[default]
    Auto,
    /// Portable scalar kernel.
    Scalar,
    /// Four-lane vector kernel.
    Simd,
}

static SCALAR: ScalarKernel = ScalarKernel;
static SIMD: SimdKernel = SimdKernel;

impl KernelChoice {
    /// Kernel instance for this choice.
    pub fn resolve(self) -> &'static dyn ConvolutionKernel {
        match self {
            KernelChoice::Scalar => &SCALAR,
            KernelChoice::Simd => &SIMD,
            KernelChoice::Auto if simd_supported() => &SIMD,
            KernelChoice::Auto => &SCALAR,
        }
    }
}

/// Whether the host has native 4-lane float vectors.
pub fn simd_supported() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::arch::is_x86_feature_detected!("sse2")
    }
    #[cfg(target_arch = "aarch64")]
    {
        std::arch::is_aarch64_feature_detected!("neon")
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
    {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convolve/kernel.rs"]
mod tests;
