mod common;

use common::{checkerboard, gradient, noise, translucent};
use lib_qoi::codec::{decode_pixels, encode_pixels};

fn round_trip(pixels: &[u8]) {
    let encoded = encode_pixels(pixels).unwrap();
    let decoded = decode_pixels(&encoded, pixels.len() / 4).unwrap();
    assert_eq!(decoded, pixels);
}

#[test]
fn test_round_trip_gradient() {
    round_trip(&gradient());
}

#[test]
fn test_round_trip_noise() {
    round_trip(&noise());
}

#[test]
fn test_round_trip_checkerboard() {
    round_trip(&checkerboard());
}

#[test]
fn test_round_trip_translucent() {
    round_trip(&translucent());
}

#[test]
fn test_round_trip_single_color() {
    round_trip(&[255, 0, 0, 255].repeat(16));
}

#[test]
fn test_checkerboard_compresses_to_index_ops() {
    let pixels = checkerboard();
    let encoded = encode_pixels(&pixels).unwrap();
    // Two literals up front, then one byte per pixel at worst.
    assert!(encoded.len() < pixels.len() / 4 + 10);
}

#[test]
fn test_run_of_62_flushes_into_one_opcode() {
    // One literal establishes the pixel, then exactly 62 repeats, then a
    // +1 step on each channel.
    let mut pixels = [7, 7, 7, 255].repeat(63);
    pixels.extend_from_slice(&[8, 8, 8, 255]);

    let encoded = encode_pixels(&pixels).unwrap();
    assert_eq!(
        encoded,
        vec![
            0xFF, 7, 7, 7, 255, // RGBA literal
            0xC0 | 61, // RUN, count 62
            0x7F, // DIFF +1/+1/+1
        ]
    );
}

#[test]
fn test_run_of_63_splits_into_two_opcodes() {
    let pixels = [7, 7, 7, 255].repeat(64);
    let encoded = encode_pixels(&pixels).unwrap();
    assert_eq!(
        encoded,
        vec![
            0xFF, 7, 7, 7, 255, // RGBA literal
            0xC0 | 61, // RUN, count 62
            0xC0, // RUN, count 1
        ]
    );
}

#[test]
fn test_diff_boundary_plus_one_each_channel() {
    let pixels = [100, 100, 100, 255, 101, 101, 101, 255];
    let encoded = encode_pixels(&pixels).unwrap();
    let last = *encoded.last().unwrap();
    assert_eq!(last, 0b0111_1111); // DIFF with all deltas at +1
}

#[test]
fn test_diff_boundary_plus_two_falls_through_to_luma() {
    let pixels = [100, 100, 100, 255, 102, 100, 100, 255];
    let encoded = encode_pixels(&pixels).unwrap();
    let luma = &encoded[encoded.len() - 2..];
    assert_eq!(luma[0] & 0b1100_0000, 0b1000_0000);
    assert_eq!(luma[0] & 0b0011_1111, 32); // dG = 0
    assert_eq!(luma[1], (2 + 8) << 4 | 8); // dR - dG = 2, dB - dG = 0
}

#[test]
fn test_identical_histories_reference_identical_cache_slots() {
    let mut first = checkerboard();
    let mut second = checkerboard();
    first.extend_from_slice(&[1, 2, 3, 255]);
    second.extend_from_slice(&[4, 5, 6, 255]);

    let shared = encode_pixels(&checkerboard()).unwrap();
    let first = encode_pixels(&first).unwrap();
    let second = encode_pixels(&second).unwrap();

    // Same pixel history, same cache state, same opcode prefix.
    assert_eq!(&first[..shared.len()], &shared[..]);
    assert_eq!(&second[..shared.len()], &shared[..]);
}

#[test]
fn test_decoder_rejects_corrupted_stream() {
    let pixels = gradient();
    let mut encoded = encode_pixels(&pixels).unwrap();
    encoded.truncate(encoded.len() - 1);
    assert!(decode_pixels(&encoded, pixels.len() / 4).is_err());
}
