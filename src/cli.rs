use std::ffi::OsString;
use std::path::PathBuf;

use clap::{App, ArgMatches};

use crate::colour::AdjustmentParams;
use crate::commands::{Command, DEFAULT_SCREENSHOT};
use crate::error::{BamError, Result};

pub fn parse_args<I, T>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let yaml = clap::load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches_from_safe(args)?;

    match matches.subcommand() {
        ("patch", Some(sub)) => Ok(Command::Patch {
            rom: PathBuf::from(sub.value_of("ROM").unwrap_or_default()),
            out: sub.value_of("out").map(PathBuf::from),
            params: read_params(&matches, sub)?,
        }),
        ("preview", Some(sub)) => Ok(Command::Preview {
            image: PathBuf::from(sub.value_of("IMAGE").unwrap_or(DEFAULT_SCREENSHOT)),
            out: PathBuf::from(sub.value_of("out").unwrap_or_default()),
            params: read_params(&matches, sub)?,
        }),
        _ => Ok(Command::Table),
    }
}

fn read_params(top: &ArgMatches, sub: &ArgMatches) -> Result<AdjustmentParams> {
    Ok(AdjustmentParams {
        saturation: read_int(top, sub, "saturation")?,
        brightness: read_int(top, sub, "brightness")?,
        contrast: read_int(top, sub, "contrast")?,
    })
}

// globals may land on either level depending on where they were typed
fn read_int(top: &ArgMatches, sub: &ArgMatches, name: &str) -> Result<i32> {
    match sub.value_of(name).or_else(|| top.value_of(name)) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| BamError::invalid_argument(name, raw)),
        None => Ok(0),
    }
}
