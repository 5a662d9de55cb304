//! Shared pixel fixtures for the integration tests. All buffers are RGBA,
//! four bytes per pixel, row-major.

/// 16x16 grayscale ramp, one step per pixel. Exercises DIFF and LUMA ops.
pub fn gradient() -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..256 {
        data.extend_from_slice(&[i as u8, i as u8, i as u8, 255]);
    }
    data
}

/// 16x16 deterministic noise. Mostly literals, with the occasional cache
/// hit.
pub fn noise() -> Vec<u8> {
    let mut data = Vec::new();
    let mut state: u32 = 0x2545_f491;
    for _ in 0..256 {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let bytes = state.to_be_bytes();
        data.extend_from_slice(&[bytes[0], bytes[1], bytes[2], 255]);
    }
    data
}

/// 16x16 two-color checkerboard. Exercises INDEX ops heavily.
pub fn checkerboard() -> Vec<u8> {
    let mut data = Vec::new();
    for y in 0..16 {
        for x in 0..16 {
            if (x + y) % 2 == 0 {
                data.extend_from_slice(&[200, 30, 60, 255]);
            } else {
                data.extend_from_slice(&[20, 90, 180, 255]);
            }
        }
    }
    data
}

/// 16x16 buffer with varying alpha, forcing RGBA literals.
pub fn translucent() -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..256u32 {
        data.extend_from_slice(&[(i * 7 % 256) as u8, 128, (255 - i % 256) as u8, (i % 256) as u8]);
    }
    data
}
