use std::{env, fs, process};

use image::ImageFormat;
use log::{error, info};
use thiserror::Error;

use lib_qoi::{Channels, ColorSpace, Image};

#[derive(Error, Debug)]
enum ToolError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding failed: {0}")]
    Encode(#[from] lib_qoi::image::encoder::EncodingError),
    #[error("decoding failed: {0}")]
    Decode(#[from] lib_qoi::image::decoder::DecodeError),
    #[error("decoded pixel buffer does not match the image dimensions")]
    BufferMismatch,
}

fn encode_file(input: &str, output: &str) -> Result<(), ToolError> {
    let source = image::open(input)?;
    let channels = if source.color().has_alpha() {
        Channels::Rgba
    } else {
        Channels::Rgb
    };
    let rgba = source.to_rgba8();
    let (width, height) = rgba.dimensions();

    let qoi = Image::new(width, height, channels, ColorSpace::Srgb, rgba.into_raw());
    let encoded = lib_qoi::encode(&qoi)?;
    fs::write(output, encoded)?;
    info!("Encoded {input} ({width}x{height}) to {output}");
    Ok(())
}

fn decode_file(input: &str, output: &str) -> Result<(), ToolError> {
    let data = fs::read(input)?;
    let decoded = lib_qoi::decode(&data)?;
    let buffer = image::RgbaImage::from_raw(decoded.width, decoded.height, decoded.pixels)
        .ok_or(ToolError::BufferMismatch)?;
    buffer.save_with_format(output, ImageFormat::Png)?;
    info!("Decoded {input} to {output}");
    Ok(())
}

fn usage() -> ! {
    eprintln!("usage: qoi-tool <encode|decode> <input> <output>");
    process::exit(2);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        usage();
    }

    let result = match args[1].as_str() {
        "encode" => encode_file(&args[2], &args[3]),
        "decode" => decode_file(&args[2], &args[3]),
        _ => usage(),
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("qoi-tool: {e}");
        process::exit(1);
    }
}
