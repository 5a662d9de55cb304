use log::{debug, error, info};
use thiserror::Error;

use super::format::{Header, HeaderError, Image};
use crate::codec::{decode_pixels, StreamDecodeError};
use crate::constants::{END_MARKER, HEADER_SIZE};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("file too short: {0} bytes cannot hold a header and end marker")]
    UnexpectedEof(usize),
    #[error("invalid header")]
    InvalidHeader(#[from] HeaderError),
    #[error("missing end-of-stream marker")]
    MissingEndMarker,
    #[error("failed to decode pixel data")]
    StreamFailed(#[from] StreamDecodeError),
}

/// Parses a whole QOI file: header, opcode stream, end marker.
pub fn decode(encoded_data: &[u8]) -> Result<Image, DecodeError> {
    if encoded_data.len() < HEADER_SIZE + END_MARKER.len() {
        error!("File of {} bytes is too short", encoded_data.len());
        return Err(DecodeError::UnexpectedEof(encoded_data.len()));
    }

    let header = Header::from_bytes(&encoded_data[..HEADER_SIZE]).map_err(|e| {
        error!("Header rejected: {e}");
        e
    })?;
    debug!(
        "Image dimensions read: width={} height={}",
        header.width, header.height
    );

    if !encoded_data.ends_with(&END_MARKER) {
        error!("End-of-stream marker missing or corrupted");
        return Err(DecodeError::MissingEndMarker);
    }

    // The opcode stream sits between the header and the end marker.
    let payload = &encoded_data[HEADER_SIZE..encoded_data.len() - END_MARKER.len()];
    debug!("Opcode stream length: {}", payload.len());

    let pixel_count = header.width as usize * header.height as usize;
    let pixels = decode_pixels(payload, pixel_count)?;
    info!("Decoding successful");

    Ok(Image::new(
        header.width,
        header.height,
        header.channels,
        header.color_space,
        pixels,
    ))
}
