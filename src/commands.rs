use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{info, warn};
use serde::Serialize;

use crate::colour::AdjustmentParams;
use crate::error::{BamError, Result};
use crate::patch_table::PatchTable;
use crate::preview;
use crate::rom::{export_file_name, RomImage};

pub const DEFAULT_SCREENSHOT: &str = "screenshot.png";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Patch {
        rom: PathBuf,
        out: Option<PathBuf>,
        params: AdjustmentParams,
    },
    Preview {
        image: PathBuf,
        out: PathBuf,
        params: AdjustmentParams,
    },
    Table,
}

/// Printed after a patch run.
#[derive(Debug, Serialize)]
pub struct PatchReport {
    pub output: PathBuf,
    pub params: AdjustmentParams,
    pub ranges: usize,
    pub bytes_changed: usize,
}

/// What the page held between slider moves: the loaded ROM, the screenshot
/// and the current slider values.
pub struct Session {
    table: PatchTable,
    rom: Option<RomImage>,
    screenshot: Option<RgbaImage>,
    params: AdjustmentParams,
}

impl Session {
    pub fn new(table: PatchTable) -> Self {
        Session {
            table,
            rom: None,
            screenshot: None,
            params: AdjustmentParams::default(),
        }
    }

    pub fn params(&self) -> AdjustmentParams {
        self.params
    }

    pub fn load_rom(&mut self, rom: RomImage) {
        if rom.len() < self.table.required_len() {
            warn!(
                "ROM is {:#x} bytes, palettes reach {:#x}; export will fail",
                rom.len(),
                self.table.required_len()
            );
        }
        self.rom = Some(rom);
    }

    pub fn load_screenshot(&mut self, img: RgbaImage) {
        self.screenshot = Some(img);
    }

    pub fn set_params(&mut self, params: AdjustmentParams) {
        if !params.in_slider_range() {
            warn!("Adjustment {:?} is outside the slider range", params);
        }
        self.params = params;
    }

    /// Back to zero on every slider.
    pub fn reset(&mut self) -> Result<Option<RgbaImage>> {
        self.params = AdjustmentParams::default();
        self.adjust_preview()
    }

    /// Re-renders the screenshot with the current params, if one is loaded.
    pub fn adjust_preview(&self) -> Result<Option<RgbaImage>> {
        match &self.screenshot {
            Some(img) => preview::adjust_image(img, &self.params).map(Some),
            None => Ok(None),
        }
    }

    /// Patched ROM and the file name to save it under.
    pub fn export(&self) -> Result<(String, Vec<u8>)> {
        let rom = self.rom.as_ref().ok_or(BamError::NoRom)?;
        let patched = rom.patched(&self.table, &self.params)?;
        Ok((export_file_name(&self.params), patched))
    }
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Patch { rom, out, params } => {
                let report = patch(&rom, out, params)?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Command::Preview { image, out, params } => {
                let mut session = Session::new(PatchTable::default());
                session.load_screenshot(preview::load_screenshot(&image)?);
                session.set_params(params);
                if let Some(img) = session.adjust_preview()? {
                    preview::save_screenshot(&img, &out)?;
                    info!("Wrote preview {}", out.display());
                }
            }
            Command::Table => {
                let table = PatchTable::default();
                println!("{}", serde_json::to_string_pretty(&table)?);
            }
        }
        Ok(())
    }
}

/// Writes the graded ROM next to the source unless `out` says otherwise.
pub fn patch(rom_path: &Path, out: Option<PathBuf>, params: AdjustmentParams) -> Result<PatchReport> {
    let table = PatchTable::default();
    let ranges = table.ranges().len();

    let mut session = Session::new(table);
    let rom = RomImage::load(rom_path)?;
    let source = rom.bytes().to_vec();
    session.load_rom(rom);
    session.set_params(params);

    let (file_name, patched) = session.export()?;
    let output = out.unwrap_or_else(|| {
        rom_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&file_name)
    });
    fs::write(&output, &patched)?;
    info!("Wrote {}", output.display());

    let bytes_changed = source.iter().zip(&patched).filter(|(a, b)| a != b).count();
    Ok(PatchReport {
        output,
        params,
        ranges,
        bytes_changed,
    })
}
