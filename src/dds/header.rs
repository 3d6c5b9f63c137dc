//! On-disk DDS headers: the 124-byte legacy header and the optional 20-byte DX10 extension.

use crate::dds::format::{DdsFlags, DdsFormat};
use crate::foundation::error::{GgxError, GgxResult};

pub(crate) const MAGIC: [u8; 4] = *b"DDS ";
pub(crate) const HEADER_LEN: usize = 124;
pub(crate) const DX10_HEADER_LEN: usize = 20;

const HEADER_FLAGS_REQUIRED: u32 = 0x0000_1007;
const HEADER_FLAGS_MIPMAPCOUNT: u32 = 0x0002_0000;

const PF_ALPHAPIXELS: u32 = 0x1;
const PF_FOURCC: u32 = 0x4;
const PF_RGB: u32 = 0x40;

const CAPS_COMPLEX: u32 = 0x8;
const CAPS_REQUIRED: u32 = 0x1000;
const CAPS_MIPMAP: u32 = 0x0040_0000;
const CAPS2_CUBEMAP: u32 = 0xfe00;

const DX10_MISC_TEXTURECUBE: u32 = 0x4;
const DX10_DIMENSION_TEXTURE2D: u32 = 3;

const RGBA8_MASKS: [u32; 4] = [0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000];

// DXGI_FORMAT values.
const DXGI_R8G8B8A8_UNORM: u32 = 28;
const DXGI_R8G8B8A8_UNORM_SRGB: u32 = 29;
const DXGI_R8G8B8A8_SNORM: u32 = 31;
const DXGI_BC1_TYPELESS: u32 = 70;
const DXGI_BC1_UNORM: u32 = 71;
const DXGI_BC1_UNORM_SRGB: u32 = 72;
const DXGI_BC2_TYPELESS: u32 = 73;
const DXGI_BC2_UNORM: u32 = 74;
const DXGI_BC2_UNORM_SRGB: u32 = 75;
const DXGI_BC3_TYPELESS: u32 = 76;
const DXGI_BC3_UNORM: u32 = 77;
const DXGI_BC3_UNORM_SRGB: u32 = 78;
const DXGI_BC4_TYPELESS: u32 = 79;
const DXGI_BC4_UNORM: u32 = 80;
const DXGI_BC4_SNORM: u32 = 81;
const DXGI_BC5_TYPELESS: u32 = 82;
const DXGI_BC5_UNORM: u32 = 83;
const DXGI_BC5_SNORM: u32 = 84;
const DXGI_BC6H_TYPELESS: u32 = 94;
const DXGI_BC6H_UF16: u32 = 95;
const DXGI_BC6H_SF16: u32 = 96;
const DXGI_BC7_TYPELESS: u32 = 97;
const DXGI_BC7_UNORM: u32 = 98;
const DXGI_BC7_UNORM_SRGB: u32 = 99;
// Flag-only entries: recognised as sRGB / signed but not loadable.
const DXGI_R16G16B16A16_SNORM: u32 = 13;
const DXGI_R16G16_SNORM: u32 = 37;
const DXGI_R8G8_SNORM: u32 = 51;
const DXGI_R16_SNORM: u32 = 58;
const DXGI_R8_SNORM: u32 = 63;
const DXGI_B8G8R8A8_UNORM_SRGB: u32 = 91;
const DXGI_B8G8R8X8_UNORM_SRGB: u32 = 93;

const fn four_cc(code: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*code)
}

/// Fields of the legacy header that matter for reading and writing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DdsHeader {
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub num_mips: u32,
    pub pf_flags: u32,
    pub four_cc: u32,
    pub rgb_bit_count: u32,
    pub masks: [u32; 4],
    pub caps: u32,
    pub caps2: u32,
}

/// DX10 extension header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Dx10Header {
    pub dxgi_format: u32,
    pub dimension: u32,
    pub misc_flags: u32,
    pub array_size: u32,
    pub misc_flags2: u32,
}

/// Format and flags decoded from a pair of headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Surface {
    pub format: DdsFormat,
    pub flags: DdsFlags,
    pub width: u32,
    pub height: u32,
    pub num_mips: u32,
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}

impl DdsHeader {
    pub fn parse(bytes: &[u8; HEADER_LEN]) -> GgxResult<Self> {
        let size = read_u32(bytes, 0);
        if size as usize != HEADER_LEN {
            return Err(GgxError::format(format!(
                "unexpected DDS header size {size}, want {HEADER_LEN}"
            )));
        }
        Ok(Self {
            flags: read_u32(bytes, 4),
            height: read_u32(bytes, 8),
            width: read_u32(bytes, 12),
            num_mips: read_u32(bytes, 24),
            pf_flags: read_u32(bytes, 76),
            four_cc: read_u32(bytes, 80),
            rgb_bit_count: read_u32(bytes, 84),
            masks: [
                read_u32(bytes, 88),
                read_u32(bytes, 92),
                read_u32(bytes, 96),
                read_u32(bytes, 100),
            ],
            caps: read_u32(bytes, 104),
            caps2: read_u32(bytes, 108),
        })
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        let mut words = [0u32; HEADER_LEN / 4];
        words[0] = HEADER_LEN as u32;
        words[1] = self.flags;
        words[2] = self.height;
        words[3] = self.width;
        words[6] = self.num_mips;
        // words[7..18] reserved
        words[18] = 32;
        words[19] = self.pf_flags;
        words[20] = self.four_cc;
        words[21] = self.rgb_bit_count;
        words[22..26].copy_from_slice(&self.masks);
        words[26] = self.caps;
        words[27] = self.caps2;
        for w in words {
            out.extend_from_slice(&w.to_le_bytes());
        }
    }

    pub fn has_dx10(&self) -> bool {
        self.pf_flags & PF_FOURCC != 0 && self.four_cc == four_cc(b"DX10")
    }
}

impl Dx10Header {
    pub fn parse(bytes: &[u8; DX10_HEADER_LEN]) -> Self {
        Self {
            dxgi_format: read_u32(bytes, 0),
            dimension: read_u32(bytes, 4),
            misc_flags: read_u32(bytes, 8),
            array_size: read_u32(bytes, 12),
            misc_flags2: read_u32(bytes, 16),
        }
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        for w in [
            self.dxgi_format,
            self.dimension,
            self.misc_flags,
            self.array_size,
            self.misc_flags2,
        ] {
            out.extend_from_slice(&w.to_le_bytes());
        }
    }
}

/// Decode format, flags and dimensions.
pub(crate) fn decode_surface(header: &DdsHeader, dx10: Option<&Dx10Header>) -> GgxResult<Surface> {
    let mut flags = DdsFlags::empty();
    if header.caps2 & CAPS2_CUBEMAP == CAPS2_CUBEMAP {
        flags |= DdsFlags::CUBEMAP;
    }

    let format = match dx10 {
        Some(dx10) => {
            if dx10.misc_flags & DX10_MISC_TEXTURECUBE != 0 {
                flags |= DdsFlags::CUBEMAP;
            }
            flags |= dxgi_flags(dx10.dxgi_format);
            dxgi_to_format(dx10.dxgi_format).ok_or_else(|| {
                GgxError::format(format!("unsupported DXGI format {}", dx10.dxgi_format))
            })?
        }
        None if header.pf_flags & PF_FOURCC != 0 => {
            let (format, signed) = four_cc_to_format(header.four_cc).ok_or_else(|| {
                GgxError::format(format!(
                    "unsupported fourCC '{}'",
                    String::from_utf8_lossy(&header.four_cc.to_le_bytes())
                ))
            })?;
            if signed {
                flags |= DdsFlags::SIGNED;
            }
            format
        }
        None if header.pf_flags == PF_RGB | PF_ALPHAPIXELS
            && header.rgb_bit_count == 32
            && header.masks == RGBA8_MASKS =>
        {
            DdsFormat::Rgba8
        }
        None => {
            return Err(GgxError::format(format!(
                "unsupported pixel format (flags {:#x}, {} bpp, masks {:x?})",
                header.pf_flags, header.rgb_bit_count, header.masks
            )));
        }
    };

    let num_mips = if header.flags & HEADER_FLAGS_MIPMAPCOUNT != 0 {
        header.num_mips.max(1)
    } else {
        1
    };

    Ok(Surface {
        format,
        flags,
        width: header.width,
        height: header.height,
        num_mips,
    })
}

/// Build the headers for `surface`; the DX10 header is present only when needed.
pub(crate) fn encode_surface(surface: &Surface) -> GgxResult<(DdsHeader, Option<Dx10Header>)> {
    let cubemap = surface.flags.contains(DdsFlags::CUBEMAP);
    let mut header = DdsHeader {
        flags: HEADER_FLAGS_REQUIRED,
        width: surface.width,
        height: surface.height,
        caps: CAPS_COMPLEX | CAPS_REQUIRED,
        caps2: if cubemap { CAPS2_CUBEMAP } else { 0 },
        ..DdsHeader::default()
    };
    if surface.num_mips > 1 {
        header.flags |= HEADER_FLAGS_MIPMAPCOUNT;
        header.num_mips = surface.num_mips;
        header.caps |= CAPS_MIPMAP;
    }

    let unsupported = || {
        GgxError::validation(format!(
            "{} cannot be stored with flags {:?}",
            surface.format, surface.flags
        ))
    };

    let srgb = surface.flags.contains(DdsFlags::SRGB);
    let signed = surface.flags.contains(DdsFlags::SIGNED);
    let dxgi = match (surface.format, srgb, signed) {
        (_, true, true) => return Err(unsupported()),
        (DdsFormat::Bc1, true, _) => Some(DXGI_BC1_UNORM_SRGB),
        (DdsFormat::Bc2, true, _) => Some(DXGI_BC2_UNORM_SRGB),
        (DdsFormat::Bc3, true, _) => Some(DXGI_BC3_UNORM_SRGB),
        (DdsFormat::Bc7, true, _) => Some(DXGI_BC7_UNORM_SRGB),
        (DdsFormat::Rgba8, true, _) => Some(DXGI_R8G8B8A8_UNORM_SRGB),
        (_, true, _) => return Err(unsupported()),
        (DdsFormat::Bc4, _, true) => {
            header.set_four_cc(b"BC4S");
            None
        }
        (DdsFormat::Bc5, _, true) => {
            header.set_four_cc(b"BC5S");
            None
        }
        (DdsFormat::Bc6h, _, true) => Some(DXGI_BC6H_SF16),
        (DdsFormat::Rgba8, _, true) => Some(DXGI_R8G8B8A8_SNORM),
        (_, _, true) => return Err(unsupported()),
        (DdsFormat::Bc1, ..) => {
            header.set_four_cc(b"DXT1");
            None
        }
        (DdsFormat::Bc2, ..) => {
            header.set_four_cc(b"DXT3");
            None
        }
        (DdsFormat::Bc3, ..) => {
            header.set_four_cc(b"DXT5");
            None
        }
        (DdsFormat::Bc4, ..) => {
            header.set_four_cc(b"ATI1");
            None
        }
        (DdsFormat::Bc5, ..) => {
            header.set_four_cc(b"ATI2");
            None
        }
        (DdsFormat::Bc6h, ..) => Some(DXGI_BC6H_UF16),
        (DdsFormat::Bc7, ..) => Some(DXGI_BC7_UNORM),
        (DdsFormat::Rgba8, ..) => {
            header.pf_flags = PF_RGB | PF_ALPHAPIXELS;
            header.rgb_bit_count = 32;
            header.masks = RGBA8_MASKS;
            None
        }
    };

    let dx10 = dxgi.map(|dxgi_format| {
        header.set_four_cc(b"DX10");
        Dx10Header {
            dxgi_format,
            dimension: DX10_DIMENSION_TEXTURE2D,
            misc_flags: if cubemap { DX10_MISC_TEXTURECUBE } else { 0 },
            array_size: 1,
            misc_flags2: 0,
        }
    });
    Ok((header, dx10))
}

impl DdsHeader {
    fn set_four_cc(&mut self, code: &[u8; 4]) {
        self.pf_flags = PF_FOURCC;
        self.four_cc = four_cc(code);
    }
}

fn dxgi_to_format(dxgi: u32) -> Option<DdsFormat> {
    Some(match dxgi {
        DXGI_BC1_TYPELESS | DXGI_BC1_UNORM | DXGI_BC1_UNORM_SRGB => DdsFormat::Bc1,
        DXGI_BC2_TYPELESS | DXGI_BC2_UNORM | DXGI_BC2_UNORM_SRGB => DdsFormat::Bc2,
        DXGI_BC3_TYPELESS | DXGI_BC3_UNORM | DXGI_BC3_UNORM_SRGB => DdsFormat::Bc3,
        DXGI_BC4_TYPELESS | DXGI_BC4_UNORM | DXGI_BC4_SNORM => DdsFormat::Bc4,
        DXGI_BC5_TYPELESS | DXGI_BC5_UNORM | DXGI_BC5_SNORM => DdsFormat::Bc5,
        DXGI_BC6H_TYPELESS | DXGI_BC6H_UF16 | DXGI_BC6H_SF16 => DdsFormat::Bc6h,
        DXGI_BC7_TYPELESS | DXGI_BC7_UNORM | DXGI_BC7_UNORM_SRGB => DdsFormat::Bc7,
        DXGI_R8G8B8A8_UNORM | DXGI_R8G8B8A8_UNORM_SRGB | DXGI_R8G8B8A8_SNORM => DdsFormat::Rgba8,
        _ => return None,
    })
}

fn dxgi_flags(dxgi: u32) -> DdsFlags {
    match dxgi {
        DXGI_R8G8B8A8_UNORM_SRGB
        | DXGI_BC1_UNORM_SRGB
        | DXGI_BC2_UNORM_SRGB
        | DXGI_BC3_UNORM_SRGB
        | DXGI_B8G8R8A8_UNORM_SRGB
        | DXGI_B8G8R8X8_UNORM_SRGB
        | DXGI_BC7_UNORM_SRGB => DdsFlags::SRGB,
        DXGI_R16G16B16A16_SNORM
        | DXGI_R8G8B8A8_SNORM
        | DXGI_R16G16_SNORM
        | DXGI_R8G8_SNORM
        | DXGI_R16_SNORM
        | DXGI_R8_SNORM
        | DXGI_BC4_SNORM
        | DXGI_BC5_SNORM
        | DXGI_BC6H_SF16 => DdsFlags::SIGNED,
        _ => DdsFlags::empty(),
    }
}

/// Legacy fourCC to format, with whether the code implies signed data.
fn four_cc_to_format(code: u32) -> Option<(DdsFormat, bool)> {
    const TABLE: [(&[u8; 4], DdsFormat, bool); 11] = [
        (b"DXT1", DdsFormat::Bc1, false),
        (b"DXT2", DdsFormat::Bc2, false),
        (b"DXT3", DdsFormat::Bc2, false),
        (b"DXT4", DdsFormat::Bc3, false),
        (b"DXT5", DdsFormat::Bc3, false),
        (b"ATI1", DdsFormat::Bc4, false),
        (b"BC4U", DdsFormat::Bc4, false),
        (b"BC4S", DdsFormat::Bc4, true),
        (b"ATI2", DdsFormat::Bc5, false),
        (b"BC5U", DdsFormat::Bc5, false),
        (b"BC5S", DdsFormat::Bc5, true),
    ];
    TABLE
        .iter()
        .find(|(cc, ..)| four_cc(cc) == code)
        .map(|&(_, format, signed)| (format, signed))
}

#[cfg(test)]
#[path = "../../tests/unit/dds/header.rs"]
mod tests;
