//! smf-fixtures - writes the preset Standard MIDI Files used by parser tests.
//!
//! # Usage
//!
//! ```bash
//! smf-fixtures                       # all presets into tests/test_data
//! smf-fixtures -o out -f tempo_change --strict
//! RUST_LOG=debug smf-fixtures --list
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use smf_fixtures::prelude::*;

const DEFAULT_OUT_DIR: &str = "tests/test_data";

/// Command-line options.
struct CliOptions {
    /// Directory the fixtures are written to.
    out_dir: PathBuf,
    /// Presets to generate, empty means all.
    fixtures: Vec<Fixture>,
    /// Reject tracks that do not end with End of Track.
    validation: Validation,
    /// Print the preset names and exit.
    list: bool,
}

impl CliOptions {
    /// Parses command-line arguments.
    ///
    /// Supports:
    /// - `--out <dir>` or `-o <dir>`: output directory
    /// - `--fixture <name>` or `-f <name>`: generate only this preset, repeatable
    /// - `--strict`: validate track structure before writing
    /// - `--list`: print the preset names
    /// - `--help` or `-h`: print help and exit
    fn parse() -> Result<Self> {
        let mut args = std::env::args().skip(1);
        let mut options = Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            fixtures: Vec::new(),
            validation: Validation::Lenient,
            list: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" | "-o" => {
                    let dir = args.next().context("--out requires a directory")?;
                    options.out_dir = PathBuf::from(dir);
                }
                "--fixture" | "-f" => {
                    let name = args.next().context("--fixture requires a preset name")?;
                    let fixture = Fixture::from_name(&name)
                        .with_context(|| format!("unknown fixture {name}, see --list"))?;
                    options.fixtures.push(fixture);
                }
                "--strict" => options.validation = Validation::Strict,
                "--list" => options.list = true,
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => bail!("unknown option {other}, see --help"),
            }
        }

        if options.fixtures.is_empty() {
            options.fixtures = Fixture::ALL.to_vec();
        }
        Ok(options)
    }
}

fn print_help() {
    eprintln!("smf-fixtures - write preset Standard MIDI Files");
    eprintln!();
    eprintln!("Usage: smf-fixtures [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --out DIR        Output directory (default {DEFAULT_OUT_DIR})");
    eprintln!("  -f, --fixture NAME   Only write this preset, may be repeated");
    eprintln!("      --strict         Require every track to end with End of Track");
    eprintln!("      --list           Print the preset names and exit");
    eprintln!("  -h, --help           Print this help message");
}

fn main() -> Result<()> {
    env_logger::init();
    let options = CliOptions::parse()?;

    if options.list {
        for fixture in Fixture::ALL {
            println!("{fixture}\t{}", fixture.file_name());
        }
        return Ok(());
    }

    let written = write_fixtures(&options.out_dir, &options.fixtures, options.validation)
        .with_context(|| format!("generating fixtures in {}", options.out_dir.display()))?;
    for path in written {
        println!("Created: {}", path.display());
    }
    Ok(())
}
