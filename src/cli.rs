//! Command line arguments, logging setup and the usage banner.

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use prettytable::{cell, Row, Table};

use crate::material::MaterialPreset;

/// Interactive per-vertex Phong shading demo
#[derive(Parser, Debug)]
#[command(name = "light", version)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Initial material preset (brass or silver)
    #[arg(long)]
    pub material: Option<MaterialPreset>,
}

pub fn log_filter_from_level(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialises logging. `RUST_LOG` takes precedence over the verbosity flag.
pub fn setup_logging(level: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log_filter_from_level(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:5} [{}]: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or("light"),
                record.args()
            )
        })
        .parse_env("RUST_LOG");
    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialised: {}", e);
    }
}

fn binding(keys: &str, action: &str) -> Row {
    Row::new(vec![cell!(keys), cell!(action)])
}

/// Table of the key bindings
pub fn key_bindings() -> Table {
    let mut table = Table::new();
    table.set_titles(binding("Keys", "Action"));
    table.add_row(binding("a / d", "Yaw camera"));
    table.add_row(binding("w / s", "Pitch camera"));
    table.add_row(binding("q / e", "Roll camera"));
    table.add_row(binding("' / /", "Slide camera up / down"));
    table.add_row(binding("arrow keys", "Slide camera left / right / forward / back"));
    table.add_row(binding("u / j", "Move light up / down"));
    table.add_row(binding("h / k", "Move light left / right"));
    table.add_row(binding("c", "Switch material (brass / silver)"));
    table.add_row(binding("Esc", "Quit"));
    table
}

pub fn print_usage() {
    key_bindings().printstd();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_filter_from_level(0), LevelFilter::Info);
        assert_eq!(log_filter_from_level(1), LevelFilter::Debug);
        assert_eq!(log_filter_from_level(5), LevelFilter::Trace);
        let args = Args::parse_from(["light", "-vv"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn banner_lists_every_binding() {
        let table = key_bindings();
        assert_eq!(table.len(), 9);
    }
}
