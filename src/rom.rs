use std::fs;
use std::path::Path;

use log::info;

use crate::colour::AdjustmentParams;
use crate::error::Result;
use crate::patch_table::PatchTable;

const EXPORT_PREFIX: &str = "BustAMoveGBA";

/// The ROM as read from disk. Never written to; patching always returns a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    pub fn new(data: Vec<u8>) -> Self {
        RomImage { data }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        info!("Loaded ROM {} ({:#x} bytes)", path.display(), data.len());
        Ok(RomImage { data })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn patched(&self, table: &PatchTable, params: &AdjustmentParams) -> Result<Vec<u8>> {
        table.apply(&self.data, params)
    }
}

/// Download name with the params baked in, e.g. `BustAMoveGBA_sat-20_con10_brt0.bin`.
pub fn export_file_name(params: &AdjustmentParams) -> String {
    format!(
        "{}_sat{}_con{}_brt{}.bin",
        EXPORT_PREFIX, params.saturation, params.contrast, params.brightness
    )
}
