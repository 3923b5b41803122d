use anyhow::{Context, Result, anyhow};
use chrono::Local;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

pub mod types;
pub mod validation;

pub use types::*;

use crate::controller::DEFAULT_TREND_WINDOW;

pub fn args_checks() -> Args {
    Args::parse()
}

/// Merge CLI values over the optional TOML file, then fill defaults.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, no mode was
/// given anywhere, or a file-supplied window is zero.
pub fn load_config(args: Args) -> Result<CleanArgs> {
    let file_config = read_file_config(&args)?;
    let mode = args
        .mode
        .or(file_config.mode)
        .ok_or_else(|| anyhow!("missing --mode"))?;
    let window = args
        .window
        .or(file_config.window)
        .unwrap_or(DEFAULT_TREND_WINDOW);
    if window == 0 {
        return Err(anyhow!("window in config toml must be at least 1"));
    }

    Ok(CleanArgs {
        mode,
        db_path: args.db_path.or(file_config.db_path),
        data_dir: args
            .data_dir
            .or(file_config.data_dir)
            .unwrap_or_else(|| PathBuf::from("data")),
        record_json: args.record_json,
        delete: args.delete_category.zip(args.delete_position),
        today: args.today.unwrap_or_else(|| Local::now().date_naive()),
        window,
        last_n: args.last_n.or(file_config.last_n),
        shot: args.shot,
        format: args.format.or(file_config.format).unwrap_or_default(),
        output: args.output,
    })
}

fn read_file_config(args: &Args) -> Result<FileConfig> {
    match args.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))
        }
        None => Ok(FileConfig::default()),
    }
}
