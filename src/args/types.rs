use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use crate::model::{Category, ShotType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Dashboard,
    Testing,
    #[value(name = "three_hole_loop")]
    #[serde(rename = "three_hole_loop")]
    Loop,
    Putting,
    #[value(name = "wedge_ladder")]
    #[serde(rename = "wedge_ladder")]
    Wedge,
    Goals,
    Drills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Golf practice log: record sessions and render progress pages", long_about = None)]
pub struct Args {
    /// Page to render.
    #[arg(short = 'm', long, value_enum)]
    pub mode: Option<Mode>,
    /// Optional TOML file supplying any of the options below. Command-line values win.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// SQLite database file. Without one, records live in memory for this run only.
    #[arg(short = 'd', long, value_name = "DB_PATH", value_parser = crate::args::validation::check_parent_dir_is_writeable)]
    pub db_path: Option<PathBuf>,
    /// Directory holding goals.json, drills.json and testing_lookup.json.
    #[arg(long, value_name = "DATA_DIR", value_parser = crate::args::validation::check_readable_dir)]
    pub data_dir: Option<PathBuf>,
    /// JSON file with one practice record to append before rendering.
    #[arg(long, value_name = "RECORD_JSON", value_parser = crate::args::validation::check_readable_file)]
    pub record_json: Option<PathBuf>,
    /// Category to delete a record from; needs --delete-position.
    #[arg(long, value_name = "CATEGORY", requires = "delete_position")]
    pub delete_category: Option<Category>,
    /// Zero-based position of the record in load order.
    #[arg(long, value_name = "POSITION", requires = "delete_category")]
    pub delete_position: Option<usize>,
    /// Reference date (YYYY-MM-DD) for streaks and weekly/monthly counts. Defaults to the local date.
    #[arg(long, value_name = "DATE", value_parser = crate::args::validation::check_date)]
    pub today: Option<NaiveDate>,
    /// Rolling window for trend charts.
    #[arg(long, value_name = "WINDOW", value_parser = crate::args::validation::check_window)]
    pub window: Option<usize>,
    /// Testing page: limit the history chart to the last N tests.
    #[arg(long, value_name = "N")]
    pub last_n: Option<usize>,
    /// Testing page: chart one shot type instead of the average handicap.
    #[arg(long, value_name = "SHOT_TYPE")]
    pub shot: Option<ShotType>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write the page here instead of stdout.
    #[arg(short = 'o', long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub mode: Option<Mode>,
    pub db_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub window: Option<usize>,
    pub last_n: Option<usize>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub mode: Mode,
    pub db_path: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub record_json: Option<PathBuf>,
    pub delete: Option<(Category, usize)>,
    pub today: NaiveDate,
    pub window: usize,
    pub last_n: Option<usize>,
    pub shot: Option<ShotType>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}
