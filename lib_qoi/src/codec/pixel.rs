use crate::constants::CACHE_SIZE;

/// A single RGBA pixel. Channel arithmetic wraps modulo 256, matching the
/// two's-complement byte semantics the wire format is defined in terms of.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reads a pixel from the first four bytes of `chunk`.
    pub fn from_rgba(chunk: &[u8]) -> Self {
        Self::new(chunk[0], chunk[1], chunk[2], chunk[3])
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Cache slot for this pixel. Must stay bit-for-bit identical between
    /// encoder and decoder; any deviation corrupts every index reference.
    pub fn hash_index(&self) -> usize {
        (self.r as usize * 3 + self.g as usize * 5 + self.b as usize * 7 + self.a as usize * 11)
            % CACHE_SIZE
    }

    /// Applies already-unbiased channel deltas to this pixel. Alpha is
    /// carried over unchanged.
    pub fn with_deltas(&self, dr: u8, dg: u8, db: u8) -> Self {
        Self {
            r: self.r.wrapping_add(dr),
            g: self.g.wrapping_add(dg),
            b: self.b.wrapping_add(db),
            a: self.a,
        }
    }
}

/// Direct-mapped table of recently seen pixels, indexed by `hash_index`.
///
/// One slot per hash bucket, overwritten on collision. The encoder and
/// decoder both start from an all-zero table and mutate it in lock-step, so
/// index opcodes resolve to the same pixel on both sides.
#[derive(Debug)]
pub struct PixelCache {
    slots: [Pixel; CACHE_SIZE],
}

impl PixelCache {
    pub fn new() -> Self {
        Self {
            slots: [Pixel::default(); CACHE_SIZE],
        }
    }

    pub fn lookup(&self, index: usize) -> Pixel {
        self.slots[index]
    }

    pub fn store(&mut self, index: usize, pixel: Pixel) {
        self.slots[index] = pixel;
    }

    /// Stores the pixel in its own hash slot.
    pub fn store_pixel(&mut self, pixel: Pixel) {
        self.slots[pixel.hash_index()] = pixel;
    }
}

impl Default for PixelCache {
    fn default() -> Self {
        Self::new()
    }
}
