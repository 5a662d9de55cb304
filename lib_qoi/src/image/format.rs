use thiserror::Error;

use crate::constants::{HEADER_SIZE, MAGIC};

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("invalid header length: expected 14 bytes, got {0}")]
    InvalidLength(usize),
    #[error("invalid magic number: {0:?}")]
    InvalidMagic([u8; 4]),
    #[error("failed to parse image dimensions")]
    DimensionParsingFailed,
    #[error("invalid channel count: expected 3 (RGB) or 4 (RGBA), got {0}")]
    InvalidChannels(u8),
    #[error("invalid color space: expected 0 (linear) or 1 (sRGB), got {0}")]
    InvalidColorSpace(u8),
}

/// Number of channels in the source image. The pixel buffer always carries
/// four bytes per pixel; this value is header metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb = 3,
    Rgba = 4,
}

impl Channels {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Channels {
    type Error = HeaderError;

    fn try_from(byte: u8) -> Result<Self, HeaderError> {
        match byte {
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(HeaderError::InvalidChannels(other)),
        }
    }
}

/// 0 means all channels are linear, 1 means sRGB with linear alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Linear = 0,
    Srgb = 1,
}

impl ColorSpace {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ColorSpace {
    type Error = HeaderError;

    fn try_from(byte: u8) -> Result<Self, HeaderError> {
        match byte {
            0 => Ok(Self::Linear),
            1 => Ok(Self::Srgb),
            other => Err(HeaderError::InvalidColorSpace(other)),
        }
    }
}

/// The fixed 14-byte file header: magic, big-endian dimensions, channel
/// count and color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub color_space: ColorSpace,
}

impl Header {
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0; HEADER_SIZE];
        bytes[..4].copy_from_slice(&MAGIC);
        bytes[4..8].copy_from_slice(&self.width.to_be_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_be_bytes());
        bytes[12] = self.channels.as_byte();
        bytes[13] = self.color_space.as_byte();
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HeaderError> {
        if bytes.len() != HEADER_SIZE {
            return Err(HeaderError::InvalidLength(bytes.len()));
        }
        if bytes[..4] != MAGIC {
            return Err(HeaderError::InvalidMagic([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]));
        }
        let width = u32::from_be_bytes(
            bytes[4..8]
                .try_into()
                .map_err(|_| HeaderError::DimensionParsingFailed)?,
        );
        let height = u32::from_be_bytes(
            bytes[8..12]
                .try_into()
                .map_err(|_| HeaderError::DimensionParsingFailed)?,
        );
        Ok(Self {
            width,
            height,
            channels: Channels::try_from(bytes[12])?,
            color_space: ColorSpace::try_from(bytes[13])?,
        })
    }
}

/// A decoded image: dimensions, header metadata and the raw RGBA pixel
/// buffer (four bytes per pixel, row-major). Three-channel sources carry an
/// opaque alpha byte per pixel.
#[derive(Debug)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub color_space: ColorSpace,
    pub pixels: Vec<u8>,
}

impl Image {
    pub fn new(
        width: u32,
        height: u32,
        channels: Channels,
        color_space: ColorSpace,
        pixels: Vec<u8>,
    ) -> Self {
        Self {
            width,
            height,
            channels,
            color_space,
            pixels,
        }
    }

    pub fn header(&self) -> Header {
        Header {
            width: self.width,
            height: self.height,
            channels: self.channels,
            color_space: self.color_space,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
