use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::convolve::convolver::Convolver;
use crate::convolve::driver::{ConvolveThreading, for_each_texel_range};
use crate::convolve::kernel::KernelChoice;
use crate::convolve::source::SourceBuffer;
use crate::cube::face::CubeFace;
use crate::cube::layout::MipChainLayout;
use crate::dds::container::DdsImage;
use crate::dds::format::{DdsFlags, DdsFormat};
use crate::foundation::error::{GgxError, GgxResult};

/// Six square RGBA8 faces with a mip chain, laid out face-major then mip then row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeMap {
    layout: MipChainLayout,
    data: Vec<u8>,
}

impl CubeMap {
    /// Wrap `data`, which must hold exactly `6 * sum(res_k^2) * 4` bytes.
    pub fn new(face_res: u32, num_mips: u32, data: Vec<u8>) -> GgxResult<Self> {
        let layout = MipChainLayout::new(face_res, num_mips)?;
        let expected = layout.total_texels() * 4;
        if data.len() != expected {
            return Err(GgxError::validation(format!(
                "cube map data is {} bytes, {face_res}x{face_res} with {num_mips} mips needs {expected}",
                data.len()
            )));
        }
        Ok(Self { layout, data })
    }

    /// Single-level cube map with every texel set to `rgba`.
    pub fn solid(face_res: u32, rgba: [u8; 4]) -> GgxResult<Self> {
        let layout = MipChainLayout::new(face_res, 1)?;
        let data = rgba.repeat(layout.total_texels());
        Self::new(face_res, 1, data)
    }

    /// Build a single-level cube map from one RGBA color per face.
    pub fn from_face_colors(face_res: u32, colors: [[u8; 4]; 6]) -> GgxResult<Self> {
        let per_face = face_res as usize * face_res as usize;
        let data = colors.iter().flat_map(|c| c.repeat(per_face)).collect();
        Self::new(face_res, 1, data)
    }

    /// Side length of mip 0.
    pub fn face_res(&self) -> u32 {
        self.layout.base_res()
    }

    /// Levels per face.
    pub fn num_mips(&self) -> u32 {
        self.layout.num_mips()
    }

    /// Texel addressing of this map.
    pub fn layout(&self) -> &MipChainLayout {
        &self.layout
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGBA8 bytes of one face at one level.
    pub fn level(&self, face: CubeFace, mip: u32) -> Option<&[u8]> {
        if mip >= self.layout.num_mips() {
            return None;
        }
        let res = self.layout.mip_resolution(mip) as usize;
        let start = (face.index() * self.layout.texels_per_face() + self.layout.mip_offset(mip)) * 4;
        self.data.get(start..start + res * res * 4)
    }

    /// Pixel at `(x, y)` of `face`/`mip`.
    pub fn texel(&self, face: CubeFace, mip: u32, x: u32, y: u32) -> Option<[u8; 4]> {
        let res = self.layout.mip_resolution(mip);
        if x >= res || y >= res {
            return None;
        }
        let level = self.level(face, mip)?;
        let i = (y as usize * res as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&level[i..i + 4]);
        Some(px)
    }

    /// The six mip-0 faces, back to back.
    pub fn base_level(&self) -> Vec<u8> {
        CubeFace::ALL
            .into_iter()
            .filter_map(|face| self.level(face, 0))
            .flatten()
            .copied()
            .collect()
    }

    /// Wrap as an RGBA8 cube map container with `flags` (the cube map flag is always set).
    pub fn to_dds(&self, flags: DdsFlags) -> DdsImage {
        self.clone().into_dds(flags)
    }

    /// Like [`CubeMap::to_dds`], moving the pixel data instead of copying it.
    pub fn into_dds(self, flags: DdsFlags) -> DdsImage {
        DdsImage {
            format: DdsFormat::Rgba8,
            flags: flags | DdsFlags::CUBEMAP,
            width: self.face_res(),
            height: self.face_res(),
            num_mips: self.num_mips(),
            data: self.data,
        }
    }
}

impl TryFrom<DdsImage> for CubeMap {
    type Error = GgxError;

    /// Validate a loaded container as convolver input.
    ///
    /// The image must be uncompressed RGBA8, flagged as a cube map, with square faces.
    fn try_from(image: DdsImage) -> GgxResult<Self> {
        if image.format != DdsFormat::Rgba8 {
            return Err(GgxError::validation(format!(
                "input must be uncompressed RGBA8, got {}",
                image.format
            )));
        }
        if !image.is_cubemap() {
            return Err(GgxError::validation("input is not a cube map"));
        }
        if image.width != image.height {
            return Err(GgxError::validation(format!(
                "cube faces must be square, got {}x{}",
                image.width, image.height
            )));
        }
        Self::new(image.width, image.num_mips, image.data)
    }
}

/// Options for a prefilter run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefilterOpts {
    /// Worker threads and chunking.
    pub threading: ConvolveThreading,
    /// Integration kernel.
    pub kernel: KernelChoice,
}

impl PrefilterOpts {
    /// Reject unusable options before any file is touched.
    pub fn validate(&self) -> GgxResult<()> {
        self.threading.validate()
    }
}

/// Counters and timings of one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrefilterStats {
    /// Source texels (`6 * res^2`).
    pub source_texels: usize,
    /// Output texels over the whole chain.
    pub output_texels: usize,
    /// Output levels per face.
    pub num_mips: u32,
    /// Name of the kernel that ran.
    pub kernel: &'static str,
    /// Worker threads used.
    pub threads: usize,
    /// Reading and parsing the input file.
    pub load: Duration,
    /// Building the source buffer.
    pub prepare: Duration,
    /// The convolution itself.
    pub convolve: Duration,
    /// Encoding and writing the output file.
    pub save: Duration,
}

/// Convolve `source` into a full roughness mip chain.
///
/// Only mip 0 of `source` is read. The output has the same face resolution and one level per
/// halving down to 1x1.
#[tracing::instrument(skip(source), fields(face_res = source.face_res()))]
pub fn prefilter_cubemap(
    source: &CubeMap,
    opts: &PrefilterOpts,
) -> GgxResult<(CubeMap, PrefilterStats)> {
    opts.validate()?;
    if source.num_mips() > 1 {
        tracing::warn!(
            num_mips = source.num_mips(),
            "source has a mip chain, only level 0 is used"
        );
    }

    let started = Instant::now();
    let res = source.face_res();
    let buffer = SourceBuffer::from_rgba8(res, &source.base_level())?;
    let prepare = started.elapsed();

    let layout = MipChainLayout::full_chain(res)?;
    let kernel = opts.kernel.resolve();
    let convolver = Convolver::new(kernel, &buffer, layout);
    for (mip, roughness) in convolver.roughness_per_mip().enumerate() {
        tracing::debug!(mip, roughness, "mip roughness");
    }

    let started = Instant::now();
    let mut texels = vec![[0u8; 4]; layout.total_texels()];
    let threads = for_each_texel_range(&mut texels, &opts.threading, |range, chunk| {
        for (px, index) in chunk.iter_mut().zip(range) {
            *px = convolver.texel(index);
        }
    })?;
    let convolve = started.elapsed();

    let stats = PrefilterStats {
        source_texels: 6 * res as usize * res as usize,
        output_texels: layout.total_texels(),
        num_mips: layout.num_mips(),
        kernel: kernel.name(),
        threads,
        prepare,
        convolve,
        ..PrefilterStats::default()
    };
    tracing::info!(
        source_texels = stats.source_texels,
        output_texels = stats.output_texels,
        num_mips = stats.num_mips,
        kernel = stats.kernel,
        threads = stats.threads,
        prepare_ms = prepare.as_millis() as u64,
        convolve_ms = convolve.as_millis() as u64,
        "convolved cube map"
    );

    let out = CubeMap::new(res, layout.num_mips(), texels.into_flattened())?;
    Ok((out, stats))
}

/// Load `input`, prefilter it and write the result to `output`.
///
/// Nothing is written when the options or the input fail validation. The output keeps the
/// input's sRGB flag.
#[tracing::instrument(skip(opts))]
pub fn prefilter_file(
    input: &Path,
    output: &Path,
    opts: &PrefilterOpts,
) -> GgxResult<(CubeMap, PrefilterStats)> {
    opts.validate()?;

    let started = Instant::now();
    let image = DdsImage::load(input)?;
    let srgb = image.flags & DdsFlags::SRGB;
    let source = CubeMap::try_from(image)?;
    let load = started.elapsed();
    tracing::info!(
        face_res = source.face_res(),
        num_mips = source.num_mips(),
        load_ms = load.as_millis() as u64,
        "loaded source"
    );

    let (out, mut stats) = prefilter_cubemap(&source, opts)?;
    stats.load = load;

    let started = Instant::now();
    let written = out.into_dds(srgb);
    written.save(output)?;
    let out = CubeMap::try_from(written)?;
    stats.save = started.elapsed();
    tracing::info!(
        path = %output.display(),
        save_ms = stats.save.as_millis() as u64,
        "wrote prefiltered cube map"
    );

    Ok((out, stats))
}

/// Write every face and level of `cube` as `face{F}_mip{M}.png` into `dir`.
///
/// Returns the written paths in face-major order.
pub fn write_face_previews(cube: &CubeMap, dir: &Path) -> GgxResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| GgxError::io(dir, e))?;

    let mut written = Vec::with_capacity(6 * cube.num_mips() as usize);
    for face in CubeFace::ALL {
        for mip in 0..cube.num_mips() {
            let res = cube.layout().mip_resolution(mip);
            let bytes = cube
                .level(face, mip)
                .ok_or_else(|| GgxError::validation(format!("missing level {mip} of {face}")))?;
            let path = dir.join(format!("face{}_mip{mip}.png", face.index()));
            image::save_buffer_with_format(
                &path,
                bytes,
                res,
                res,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write preview {}", path.display()))?;
            written.push(path);
        }
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;
