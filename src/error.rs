use thiserror::Error;

use crate::patch_table::PatchRange;

#[derive(Error, Debug)]
pub enum BamError {
    #[error("ROM too short: {range} needs {needed:#x} bytes, ROM has {rom_len:#x}")]
    RomTooShort {
        range: PatchRange,
        needed: usize,
        rom_len: usize,
    },

    #[error("Palette range {0} has an odd length")]
    MisalignedRange(PatchRange),

    #[error("Pixel buffer length {0} is not a multiple of 4")]
    PixelBuffer(usize),

    #[error("No ROM loaded")]
    NoRom,

    #[error("Invalid value for --{name}: {value}")]
    InvalidArgument { name: String, value: String },

    #[error("{0}")]
    Cli(#[from] clap::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BamError {
    pub fn invalid_argument(name: impl Into<String>, value: impl Into<String>) -> Self {
        BamError::InvalidArgument {
            name: name.into(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BamError>;
