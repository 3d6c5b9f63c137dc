use std::fmt;

bitflags::bitflags! {
    /// Surface properties carried alongside the pixel format.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DdsFlags: u32 {
        /// Six faces, stored `+X, -X, +Y, -Y, +Z, -Z`.
        const CUBEMAP = 0x01;
        /// Color channels are sRGB encoded.
        const SRGB = 0x02;
        /// Channels are signed normalized.
        const SIGNED = 0x04;
    }
}

/// Pixel formats the container understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DdsFormat {
    /// BC1 / DXT1, 8 bytes per 4x4 block.
    Bc1,
    /// BC2 / DXT3, 16 bytes per block.
    Bc2,
    /// BC3 / DXT5, 16 bytes per block.
    Bc3,
    /// BC4 / ATI1, one channel, 8 bytes per block.
    Bc4,
    /// BC5 / ATI2, two channels, 16 bytes per block.
    Bc5,
    /// BC6H half-float HDR, 16 bytes per block.
    Bc6h,
    /// BC7, 16 bytes per block.
    Bc7,
    /// Uncompressed 8-bit RGBA.
    Rgba8,
}

impl DdsFormat {
    /// Bytes per 4x4 block, or `None` for uncompressed formats.
    pub fn block_bytes(self) -> Option<usize> {
        match self {
            DdsFormat::Bc1 | DdsFormat::Bc4 => Some(8),
            DdsFormat::Bc2 | DdsFormat::Bc3 | DdsFormat::Bc5 | DdsFormat::Bc6h | DdsFormat::Bc7 => {
                Some(16)
            }
            DdsFormat::Rgba8 => None,
        }
    }
}

impl fmt::Display for DdsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DdsFormat::Bc1 => "BC1",
            DdsFormat::Bc2 => "BC2",
            DdsFormat::Bc3 => "BC3",
            DdsFormat::Bc4 => "BC4",
            DdsFormat::Bc5 => "BC5",
            DdsFormat::Bc6h => "BC6H",
            DdsFormat::Bc7 => "BC7",
            DdsFormat::Rgba8 => "RGBA8",
        };
        f.write_str(name)
    }
}

/// Byte size of level `mip` of one `width x height` surface.
///
/// Dimensions are halved per level and clamped to 1; returns `Some(0)` once both reach 0 and
/// `None` when the size does not fit in `usize`.
pub fn mip_size(format: DdsFormat, width: u32, height: u32, mip: u32) -> Option<usize> {
    let w = width.checked_shr(mip).unwrap_or(0) as usize;
    let h = height.checked_shr(mip).unwrap_or(0) as usize;
    if w == 0 && h == 0 {
        return Some(0);
    }
    let (w, h) = (w.max(1), h.max(1));
    match format.block_bytes() {
        Some(block) => w.div_ceil(4).checked_mul(h.div_ceil(4))?.checked_mul(block),
        None => w.checked_mul(h)?.checked_mul(4),
    }
}

/// `num_mips` truncated after the first level where both dimensions are 1.
pub fn clamp_mip_count(width: u32, height: u32, num_mips: u32) -> u32 {
    let longest = width.max(height).max(1);
    num_mips.min(u32::BITS - longest.leading_zeros())
}

/// Bytes in one face's mip chain, or `None` on overflow.
pub fn surface_size(format: DdsFormat, width: u32, height: u32, num_mips: u32) -> Option<usize> {
    (0..clamp_mip_count(width, height, num_mips)).try_fold(0usize, |total, mip| {
        total.checked_add(mip_size(format, width, height, mip)?)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/dds/format.rs"]
mod tests;
