use thiserror::Error;

use super::pixel::{Pixel, PixelCache};
use crate::constants::{MAX_RUN_LENGTH, OP_DIFF, OP_INDEX, OP_LUMA, OP_RGB, OP_RGBA, OP_RUN};

#[derive(Error, Debug)]
pub enum StreamEncodeError {
    #[error("invalid pixel data length: expected multiple of 4 bytes, got {0}")]
    InvalidPixelDataLength(usize),
}

/// Encodes a raw RGBA pixel buffer into a QOI opcode stream.
///
/// Greedy single pass: for each pixel the first applicable rule wins, in
/// order run, index, diff, luma, rgb, rgba. Higher-priority rules are
/// strictly shorter or tie for shortest, so the choice is locally optimal.
///
/// # Errors
/// Returns `StreamEncodeError::InvalidPixelDataLength` if the input length
/// is not a multiple of 4.
pub fn encode_pixels(pixels: &[u8]) -> Result<Vec<u8>, StreamEncodeError> {
    if pixels.len() % 4 != 0 {
        return Err(StreamEncodeError::InvalidPixelDataLength(pixels.len()));
    }

    let mut output = Vec::with_capacity(pixels.len() / 4);
    let mut cache = PixelCache::new();
    let mut previous = Pixel::default();
    let mut run: u8 = 0;

    for chunk in pixels.chunks_exact(4) {
        let pixel = Pixel::from_rgba(chunk);

        if pixel == previous {
            run += 1;
            if run == MAX_RUN_LENGTH {
                output.push(op_run(run));
                run = 0;
            }
            continue;
        }
        if run > 0 {
            output.push(op_run(run));
            run = 0;
        }

        let index = pixel.hash_index();
        if cache.lookup(index) == pixel {
            output.push(op_index(index));
        } else {
            // Every index miss refreshes the slot, no matter which rule
            // ends up emitting the pixel.
            cache.store(index, pixel);

            if let Some(byte) = op_diff(previous, pixel) {
                output.push(byte);
            } else if let Some(bytes) = op_luma(previous, pixel) {
                output.extend_from_slice(&bytes);
            } else if pixel.a == previous.a {
                output.extend_from_slice(&op_rgb(pixel));
            } else {
                output.extend_from_slice(&op_rgba(pixel));
            }
        }
        previous = pixel;
    }
    if run > 0 {
        output.push(op_run(run));
    }

    Ok(output)
}

fn op_index(index: usize) -> u8 {
    OP_INDEX | index as u8
}

/// Count is stored with a bias of -1, so the valid range 1..=62 fits in six
/// bits without colliding with the RGB/RGBA tags.
fn op_run(count: u8) -> u8 {
    OP_RUN | (count - 1)
}

fn op_rgb(pixel: Pixel) -> [u8; 4] {
    [OP_RGB, pixel.r, pixel.g, pixel.b]
}

fn op_rgba(pixel: Pixel) -> [u8; 5] {
    [OP_RGBA, pixel.r, pixel.g, pixel.b, pixel.a]
}

/// Per-channel deltas in -2..=1, biased by +2, two bits each. Wrapping
/// subtraction makes a 255 -> 0 step count as +1.
fn op_diff(previous: Pixel, pixel: Pixel) -> Option<u8> {
    if pixel.a != previous.a {
        return None;
    }
    let dr = pixel.r.wrapping_sub(previous.r).wrapping_add(2);
    let dg = pixel.g.wrapping_sub(previous.g).wrapping_add(2);
    let db = pixel.b.wrapping_sub(previous.b).wrapping_add(2);
    if dr > 3 || dg > 3 || db > 3 {
        return None;
    }
    Some(OP_DIFF | dr << 4 | dg << 2 | db)
}

/// Green delta in -32..=31 biased by +32; red and blue deltas are stored
/// relative to the green delta, in -8..=7 biased by +8.
fn op_luma(previous: Pixel, pixel: Pixel) -> Option<[u8; 2]> {
    if pixel.a != previous.a {
        return None;
    }
    let dg = pixel.g.wrapping_sub(previous.g);
    let green = dg.wrapping_add(32);
    let red = pixel.r.wrapping_sub(previous.r).wrapping_sub(dg).wrapping_add(8);
    let blue = pixel.b.wrapping_sub(previous.b).wrapping_sub(dg).wrapping_add(8);
    if green > 63 || red > 15 || blue > 15 {
        return None;
    }
    Some([OP_LUMA | green, red << 4 | blue])
}
