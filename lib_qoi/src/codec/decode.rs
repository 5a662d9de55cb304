use thiserror::Error;

use super::pixel::{Pixel, PixelCache};
use crate::constants::{DATA_MASK, OP_DIFF, OP_INDEX, OP_LUMA, OP_RGB, OP_RGBA, TAG_MASK};

#[derive(Error, Debug)]
pub enum StreamDecodeError {
    #[error("truncated stream: opcode 0x{tag:02x} at byte {position} is missing payload bytes")]
    TruncatedOpcode { tag: u8, position: usize },
    #[error("stream ended after {produced} of {expected} pixels")]
    MissingPixels { produced: usize, expected: usize },
    #[error("run opcode at byte {position} overflows the expected {expected} pixels")]
    TooManyPixels { position: usize, expected: usize },
    #[error("inconsistent stream: {consumed} of {expected} payload bytes consumed")]
    TrailingBytes { consumed: usize, expected: usize },
}

/// Decodes a QOI opcode stream into a raw RGBA pixel buffer of exactly
/// `pixel_count` pixels.
///
/// The decoder mirrors the encoder's state: a previous pixel seeded to
/// transparent black and a zeroed 64-slot cache. Before each opcode is
/// dispatched the previous pixel is refreshed into its cache slot, so a run
/// of N pixels touches the cache once, not N times.
///
/// # Errors
/// Fails if an opcode declares payload bytes the stream cannot supply, if
/// the stream ends before `pixel_count` pixels are produced, if a run
/// overshoots the pixel count, or if payload bytes are left over once the
/// last pixel is produced.
pub fn decode_pixels(data: &[u8], pixel_count: usize) -> Result<Vec<u8>, StreamDecodeError> {
    // A corrupt header can claim absurd dimensions. Each payload byte
    // yields at most 62 pixels, so cap the reservation by the payload
    // instead of trusting the claimed pixel count.
    let max_pixels = pixel_count.min(data.len().saturating_mul(62));
    let mut output = Vec::with_capacity(max_pixels.saturating_mul(4));
    let mut cache = PixelCache::new();
    let mut previous = Pixel::default();
    let mut produced = 0;
    let mut cursor = 0;

    while produced < pixel_count {
        if cursor >= data.len() {
            return Err(StreamDecodeError::MissingPixels {
                produced,
                expected: pixel_count,
            });
        }
        cache.store_pixel(previous);

        let byte = data[cursor];
        let position = cursor;
        cursor += 1;

        let pixel = match byte {
            OP_RGB => {
                let [r, g, b] = take::<3>(data, &mut cursor, byte, position)?;
                Pixel::new(r, g, b, previous.a)
            }
            OP_RGBA => {
                let [r, g, b, a] = take::<4>(data, &mut cursor, byte, position)?;
                Pixel::new(r, g, b, a)
            }
            _ => match byte & TAG_MASK {
                OP_INDEX => cache.lookup((byte & DATA_MASK) as usize),
                OP_DIFF => {
                    let dr = (byte >> 4 & 0b11).wrapping_sub(2);
                    let dg = (byte >> 2 & 0b11).wrapping_sub(2);
                    let db = (byte & 0b11).wrapping_sub(2);
                    previous.with_deltas(dr, dg, db)
                }
                OP_LUMA => {
                    let [second] = take::<1>(data, &mut cursor, byte, position)?;
                    let dg = (byte & DATA_MASK).wrapping_sub(32);
                    let dr = dg.wrapping_add(second >> 4 & 0b1111).wrapping_sub(8);
                    let db = dg.wrapping_add(second & 0b1111).wrapping_sub(8);
                    previous.with_deltas(dr, dg, db)
                }
                _ => {
                    // OP_RUN: count is biased by -1 and never changes the
                    // previous pixel.
                    let count = (byte & DATA_MASK) as usize + 1;
                    if produced + count > pixel_count {
                        return Err(StreamDecodeError::TooManyPixels {
                            position,
                            expected: pixel_count,
                        });
                    }
                    for _ in 0..count {
                        output.extend_from_slice(&previous.to_rgba());
                    }
                    produced += count;
                    continue;
                }
            },
        };

        output.extend_from_slice(&pixel.to_rgba());
        produced += 1;
        previous = pixel;
    }

    if cursor != data.len() {
        return Err(StreamDecodeError::TrailingBytes {
            consumed: cursor,
            expected: data.len(),
        });
    }

    Ok(output)
}

fn take<const N: usize>(
    data: &[u8],
    cursor: &mut usize,
    tag: u8,
    position: usize,
) -> Result<[u8; N], StreamDecodeError> {
    let end = *cursor + N;
    if end > data.len() {
        return Err(StreamDecodeError::TruncatedOpcode { tag, position });
    }
    let mut bytes = [0; N];
    bytes.copy_from_slice(&data[*cursor..end]);
    *cursor = end;
    Ok(bytes)
}
