use std::path::Path;

use crate::dds::format::{DdsFlags, DdsFormat, clamp_mip_count, surface_size};
use crate::dds::header::{
    DX10_HEADER_LEN, DdsHeader, Dx10Header, HEADER_LEN, MAGIC, Surface, decode_surface,
    encode_surface,
};
use crate::foundation::error::{GgxError, GgxResult};

/// A DDS file held in memory.
///
/// `data` holds every face's full mip chain back to back (face-major), exactly as on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DdsImage {
    /// Pixel format of `data`.
    pub format: DdsFormat,
    /// Cube map / color space flags.
    pub flags: DdsFlags,
    /// Width of level 0.
    pub width: u32,
    /// Height of level 0.
    pub height: u32,
    /// Mip levels per face.
    pub num_mips: u32,
    /// Pixel payload.
    pub data: Vec<u8>,
}

impl DdsImage {
    /// Number of stored faces (6 for cube maps).
    pub fn face_count(&self) -> usize {
        if self.flags.contains(DdsFlags::CUBEMAP) {
            6
        } else {
            1
        }
    }

    /// Whether the image is flagged as a cube map.
    pub fn is_cubemap(&self) -> bool {
        self.flags.contains(DdsFlags::CUBEMAP)
    }

    /// Payload bytes implied by the dimensions, format and mip count.
    ///
    /// Fails with a format error when the size does not fit in memory addressing.
    pub fn expected_payload_len(&self) -> GgxResult<usize> {
        payload_len(self.format, self.width, self.height, self.num_mips, self.face_count())
    }

    /// Parse a complete DDS file.
    pub fn from_bytes(bytes: &[u8]) -> GgxResult<Self> {
        if bytes.len() < MAGIC.len() + HEADER_LEN {
            return Err(GgxError::format(format!(
                "file is {} bytes, too short for a DDS header",
                bytes.len()
            )));
        }
        let (magic, rest) = bytes.split_at(MAGIC.len());
        if magic != MAGIC.as_slice() {
            return Err(GgxError::format("missing 'DDS ' magic"));
        }
        let (header_bytes, mut rest) = rest.split_at(HEADER_LEN);
        let header = DdsHeader::parse(fixed(header_bytes)?)?;

        let dx10 = if header.has_dx10() {
            if rest.len() < DX10_HEADER_LEN {
                return Err(GgxError::format("truncated DX10 header"));
            }
            let (dx10_bytes, tail) = rest.split_at(DX10_HEADER_LEN);
            rest = tail;
            Some(Dx10Header::parse(fixed(dx10_bytes)?))
        } else {
            None
        };

        let surface = decode_surface(&header, dx10.as_ref())?;
        let mut image = Self {
            format: surface.format,
            flags: surface.flags,
            width: surface.width,
            height: surface.height,
            num_mips: clamp_mip_count(surface.width, surface.height, surface.num_mips),
            data: Vec::new(),
        };

        let expected = image.expected_payload_len()?;
        if rest.len() < expected {
            return Err(GgxError::format(format!(
                "payload is {} bytes, {}x{} {} with {} mips needs {expected}",
                rest.len(),
                image.width,
                image.height,
                image.format,
                image.num_mips
            )));
        }
        image.data = rest[..expected].to_vec();
        Ok(image)
    }

    /// Serialize to DDS bytes.
    ///
    /// The stored mip count is truncated at the first 1x1 level.
    pub fn to_bytes(&self) -> GgxResult<Vec<u8>> {
        let num_mips = clamp_mip_count(self.width, self.height, self.num_mips);
        let surface = Surface {
            format: self.format,
            flags: self.flags,
            width: self.width,
            height: self.height,
            num_mips,
        };
        let (header, dx10) = encode_surface(&surface)?;

        let payload_len =
            payload_len(self.format, self.width, self.height, num_mips, self.face_count())?;
        if self.data.len() < payload_len {
            return Err(GgxError::validation(format!(
                "image data is {} bytes, expected {payload_len}",
                self.data.len()
            )));
        }

        let mut out = Vec::with_capacity(4 + HEADER_LEN + DX10_HEADER_LEN + payload_len);
        out.extend_from_slice(&MAGIC);
        header.write(&mut out);
        if let Some(dx10) = dx10 {
            dx10.write(&mut out);
        }
        out.extend_from_slice(&self.data[..payload_len]);
        Ok(out)
    }

    /// Read and parse `path`.
    pub fn load(path: &Path) -> GgxResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| GgxError::io(path, e))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize and write to `path`.
    pub fn save(&self, path: &Path) -> GgxResult<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(|e| GgxError::io(path, e))
    }
}

fn payload_len(
    format: DdsFormat,
    width: u32,
    height: u32,
    num_mips: u32,
    faces: usize,
) -> GgxResult<usize> {
    surface_size(format, width, height, num_mips)
        .and_then(|face_len| face_len.checked_mul(faces))
        .ok_or_else(|| {
            GgxError::format(format!(
                "surface size overflow for {width}x{height} {format} with {num_mips} mips"
            ))
        })
}

fn fixed<const N: usize>(bytes: &[u8]) -> GgxResult<&[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| GgxError::format(format!("expected {N} header bytes, got {}", bytes.len())))
}

#[cfg(test)]
#[path = "../../tests/unit/dds/container.rs"]
mod tests;
