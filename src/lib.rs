//! ggxcube prefilters cube-mapped environments for image-based lighting.
//!
//! Given one cube map, it produces a full mip chain in which level `k` holds the environment
//! convolved with a GGX lobe whose roughness grows with `k`. A renderer then picks the level
//! matching a surface's roughness with a single trilinear lookup.
//!
//! # Pipeline overview
//!
//! 1. **Load**: a DDS file becomes a [`CubeMap`] (uncompressed RGBA8, six square faces).
//! 2. **Prepare**: the base level is decoded to linear color and paired with per-texel
//!    solid angles in a [`SourceBuffer`].
//! 3. **Convolve**: every output texel is integrated independently over the visible
//!    hemicube by a [`ConvolutionKernel`], spread over a rayon pool.
//! 4. **Save**: the chain is encoded back to sRGB8 and written as a DDS cube map.
//!
//! [`prefilter_file`] runs all four steps; [`prefilter_cubemap`] is the in-memory core.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate, the vector kernel uses `wide`.
//! - **Order independent**: each output texel is a pure function of its flat index.
//! - **Kernel agnostic**: scalar and vector kernels agree to within one 8-bit step.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod convolve;
mod cube;
mod dds;
mod foundation;
mod pipeline;

pub use color::srgb::{decode_srgb8, encode_rgb_opaque, encode_srgb8, reference_srgb8};
pub use convolve::convolver::Convolver;
pub use convolve::driver::{ConvolveThreading, for_each_texel_range};
pub use convolve::kernel::{
    ConvolutionKernel, FaceAccum, KernelChoice, convolve_texel, simd_supported,
    visible_source_faces,
};
pub use convolve::roughness::RoughnessSchedule;
pub use convolve::scalar::ScalarKernel;
pub use convolve::scan::{FaceScan, GgxLobe, ScanRow, ScanRows};
pub use convolve::simd::SimdKernel;
pub use convolve::source::{SourceBuffer, SourceTexel};
pub use cube::face::{Axis, CubeFace, FaceFrame, direction_for_face};
pub use cube::layout::{
    Direction, MipChainLayout, TexelCoord, flat_index_to_texel, full_chain_len, texel_direction,
};
pub use cube::solid_angle::{area_element, solid_angle_term};
pub use cube::warp::{tex_coord_warp, warp_factor};
pub use dds::container::DdsImage;
pub use dds::format::{DdsFlags, DdsFormat, clamp_mip_count, mip_size, surface_size};
pub use foundation::error::{GgxError, GgxResult};
pub use pipeline::{
    CubeMap, PrefilterOpts, PrefilterStats, prefilter_cubemap, prefilter_file,
    write_face_previews,
};
