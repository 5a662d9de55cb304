use log::{debug, error, info};
use thiserror::Error;

use super::format::Image;
use crate::codec::{encode_pixels, StreamEncodeError};
use crate::constants::END_MARKER;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("pixel buffer holds {actual} bytes but the dimensions require {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
    #[error("failed to encode pixel data")]
    StreamFailed(#[from] StreamEncodeError),
}

/// Assembles the full file: header, opcode stream, end marker. Either the
/// whole byte vector is produced or an error is returned; no partial output
/// surfaces to the caller.
pub fn encode(image: &Image) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding");

    // Saturating: absurd dimensions can never match a real buffer length.
    let expected = image.pixel_count().saturating_mul(4);
    if image.pixels.len() != expected {
        error!(
            "Pixel buffer holds {} bytes, expected {} for {}x{}",
            image.pixels.len(),
            expected,
            image.width,
            image.height
        );
        return Err(EncodingError::PixelCountMismatch {
            expected,
            actual: image.pixels.len(),
        });
    }

    let mut encoded_data: Vec<u8> = Vec::new();

    // Step 1: Write header
    encoded_data.extend_from_slice(&image.header().to_bytes());
    debug!(
        "Header written: width={} height={} channels={:?} color_space={:?}",
        image.width, image.height, image.channels, image.color_space
    );

    // Step 2: Compress the pixel data into the opcode stream
    let stream = encode_pixels(&image.pixels)?;
    debug!(
        "Opcode stream emitted: {} bytes for {} pixels",
        stream.len(),
        image.pixel_count()
    );
    encoded_data.extend_from_slice(&stream);

    // Step 3: Append the end-of-stream marker
    encoded_data.extend_from_slice(&END_MARKER);

    info!("Encoding process completed successfully");
    Ok(encoded_data)
}
