use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::colour::AdjustmentParams;
use crate::error::{BamError, Result};
use crate::palette::adjust_colour_pair;

pub const PALETTE_MULTIPLAYER_FIRST: usize = 0xdb350;
pub const PALETTE_MULTIPLAYER_LAST: usize = 0xdc550;
pub const PALETTE_MULTIPLAYER_DELTA: usize = 0x00200;
pub const PALETTE_MULTIPLAYER_LENGTH: usize = 0xa0;

/// A run of RGB555 entries inside the ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatchRange {
    pub name: &'static str,
    pub offset: usize,
    pub length: usize,
}

impl PatchRange {
    pub const fn new(name: &'static str, offset: usize, length: usize) -> Self {
        PatchRange {
            name,
            offset,
            length,
        }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    pub const fn overlaps(&self, other: &PatchRange) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

impl fmt::Display for PatchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{:#x}, +{:#x})", self.name, self.offset, self.length)
    }
}

pub const PALETTES: [PatchRange; 10] = [
    PatchRange::new("title screen", 0xdc830, 0x160),
    PatchRange::new("main menu", 0xdc9c0, 0x00c),
    PatchRange::new("white screen", 0xdb1f0, 0x200),
    PatchRange::new("in-game", 0xdc5f0, 0x120),
    PatchRange::new("in-game", 0xdb350, 0x0a0),
    PatchRange::new("in-game", 0xdc810, 0x020),
    PatchRange::new("in-game", 0xdc7f0, 0x020),
    PatchRange::new("in-game", 0xdca30, 0x020),
    PatchRange::new("in-game", 0xdcc50, 0x020),
    PatchRange::new("in-game", 0xdca50, 0x0e0),
];

/// Ranges at `first, first + delta, ...` up to and including `last`.
pub fn multiplayer_ranges(first: usize, last: usize, delta: usize, length: usize) -> Vec<PatchRange> {
    if delta == 0 || first > last {
        return Vec::new();
    }
    (first..=last)
        .step_by(delta)
        .map(|offset| PatchRange::new("multiplayer", offset, length))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchTable {
    ranges: Vec<PatchRange>,
}

impl PatchTable {
    pub fn new(ranges: Vec<PatchRange>) -> Self {
        PatchTable { ranges }
    }

    /// Multiplayer palettes followed by the named palettes.
    pub fn bust_a_move() -> Self {
        let mut ranges = multiplayer_ranges(
            PALETTE_MULTIPLAYER_FIRST,
            PALETTE_MULTIPLAYER_LAST,
            PALETTE_MULTIPLAYER_DELTA,
            PALETTE_MULTIPLAYER_LENGTH,
        );
        ranges.extend_from_slice(&PALETTES);
        PatchTable { ranges }
    }

    pub fn ranges(&self) -> &[PatchRange] {
        &self.ranges
    }

    /// Smallest ROM length that covers every range.
    pub fn required_len(&self) -> usize {
        self.ranges.iter().map(PatchRange::end).max().unwrap_or(0)
    }

    /// Index pairs of ranges that share at least one byte.
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.ranges.iter().enumerate() {
            for (j, b) in self.ranges.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Checks every range is whole entries and fits in a ROM of `rom_len` bytes.
    pub fn validate(&self, rom_len: usize) -> Result<()> {
        for range in &self.ranges {
            if range.length % 2 != 0 {
                return Err(BamError::MisalignedRange(*range));
            }
            if range.end() > rom_len {
                return Err(BamError::RomTooShort {
                    range: *range,
                    needed: range.end(),
                    rom_len,
                });
            }
        }

        for (i, j) in self.overlaps() {
            debug!("Palette ranges overlap: {} and {}", self.ranges[i], self.ranges[j]);
        }
        Ok(())
    }

    /// Copies `rom` and grades every palette entry in the copy.
    /// Entries are always read from `rom`, so overlapping ranges are only adjusted once.
    pub fn apply(&self, rom: &[u8], params: &AdjustmentParams) -> Result<Vec<u8>> {
        self.validate(rom.len())?;

        let mut patched = rom.to_vec();
        for range in &self.ranges {
            let source = &rom[range.offset..range.end()];
            let target = &mut patched[range.offset..range.end()];
            for (src, dst) in source.chunks_exact(2).zip(target.chunks_exact_mut(2)) {
                let (lo, hi) = adjust_colour_pair(src[0], src[1], params);
                dst[0] = lo;
                dst[1] = hi;
            }
        }

        if params.is_identity() && patched != rom {
            warn!("Zero adjustment changed palette data; source colours were not canonical RGB555");
        }
        Ok(patched)
    }
}

impl Default for PatchTable {
    fn default() -> Self {
        Self::bust_a_move()
    }
}
