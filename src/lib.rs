pub mod cli;
pub mod colour;
pub mod commands;
pub mod error;
pub mod palette;
pub mod patch_table;
pub mod preview;
pub mod rom;
