pub mod decode;
pub mod encode;
pub mod pixel;

pub use decode::{decode_pixels, StreamDecodeError};
pub use encode::{encode_pixels, StreamEncodeError};
