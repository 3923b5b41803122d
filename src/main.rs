use anyhow::{Context, Result};
use maud::Markup;
use serde::Serialize;
use std::fs;

use golf_practice::args::{self, CleanArgs, Mode, OutputFormat};
use golf_practice::config::ReferenceData;
use golf_practice::controller::{dashboard, putting, testing, three_hole_loop, wedge_ladder};
use golf_practice::lookup::HistoryMetric;
use golf_practice::model::PracticeRecord;
use golf_practice::storage::{MemoryStorage, SqliteStorage, Storage};
use golf_practice::view;

fn main() -> Result<()> {
    env_logger::init();
    let config = args::load_config(args::args_checks())?;

    let reference = ReferenceData::load_from_dir(&config.data_dir)
        .with_context(|| format!("load reference data from {}", config.data_dir.display()))?;
    let storage: Box<dyn Storage> = match &config.db_path {
        Some(path) => Box::new(SqliteStorage::open(path)?),
        None => {
            log::warn!("no --db-path given; records are kept in memory for this run");
            Box::new(MemoryStorage::new())
        }
    };

    if let Some(path) = &config.record_json {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read record json {}", path.display()))?;
        let record: PracticeRecord = serde_json::from_str(&contents)
            .with_context(|| format!("parse record json {}", path.display()))?;
        storage
            .append(record.category(), record)
            .context("append record")?;
    }
    if let Some((category, position)) = config.delete {
        storage
            .delete(category, position)
            .with_context(|| format!("delete {category} record {position}"))?;
    }

    let page = render(&config, storage.as_ref(), &reference)?;
    match &config.output {
        Some(path) => {
            fs::write(path, page).with_context(|| format!("write {}", path.display()))?;
        }
        None => println!("{page}"),
    }
    Ok(())
}

fn emit<T: Serialize>(
    format: OutputFormat,
    title: &str,
    data: &T,
    html: impl FnOnce(&T) -> Markup,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Html => view::page(title, html(data)).into_string(),
    })
}

fn render(config: &CleanArgs, storage: &dyn Storage, reference: &ReferenceData) -> Result<String> {
    let format = config.format;
    match config.mode {
        Mode::Dashboard => {
            let data = dashboard::get_data_for_dashboard(storage, reference, config.today)?;
            emit(format, "Golf Practice Tracker", &data, view::render_dashboard)
        }
        Mode::Testing => {
            let metric = config.shot.map_or(HistoryMetric::Average, HistoryMetric::Shot);
            let data = testing::get_data_for_testing(
                storage,
                reference,
                metric,
                config.last_n,
                config.window,
            )?;
            emit(format, "Short Game Testing", &data, view::render_testing)
        }
        Mode::Loop => {
            let data = three_hole_loop::get_data_for_loop(storage, config.window)?;
            emit(format, "3-Hole Loop", &data, view::render_loop)
        }
        Mode::Putting => {
            let data = putting::get_data_for_putting(storage, config.window)?;
            emit(format, "Putting Testing", &data, view::render_putting)
        }
        Mode::Wedge => {
            let data = wedge_ladder::get_data_for_wedge_ladder(storage, config.window)?;
            emit(format, "Wedge Ladder", &data, view::render_wedge_ladder)
        }
        Mode::Goals => emit(format, "Goals", &reference.goals, |goals| {
            view::render_goals(goals.as_ref())
        }),
        Mode::Drills => emit(format, "Drill Descriptions", &reference.drills, |_| {
            view::render_drills(reference)
        }),
    }
}
