use chrono::NaiveDate;
use serde::Serialize;

use crate::error::PracticeError;
use crate::model::{PuttingTest, PuttingTestKind, PuttingTestSession};
use crate::scoring::{
    DistanceMakes, PuttingSummary, luke_donald_make_pct, putting_summary, swedish_level_label,
};
use crate::stats::rolling_mean;
use crate::storage::{Storage, load_putting_tests};

#[derive(Debug, Serialize)]
pub struct KindTrend {
    pub kind: PuttingTestKind,
    pub scores: Vec<(NaiveDate, Option<f64>)>,
    pub rolling: Vec<(NaiveDate, Option<f64>)>,
}

#[derive(Debug, Serialize)]
pub struct PuttingData {
    pub summaries: Vec<PuttingSummary>,
    pub trends: Vec<KindTrend>,
    pub luke_donald_by_distance: Vec<DistanceMakes>,
    /// Benchmark closest to the latest Swedish total.
    pub swedish_level: Option<&'static str>,
}

/// # Errors
/// Returns an error if the putting tests fail to load or `window` is zero.
pub fn get_data_for_putting(
    storage: &dyn Storage,
    window: usize,
) -> Result<PuttingData, PracticeError> {
    let sessions = load_putting_tests(storage)?;
    build_putting_data(&sessions, window)
}

/// # Errors
/// Returns `PracticeError::Validation` if `window` is zero.
pub fn build_putting_data(
    sessions: &[PuttingTestSession],
    window: usize,
) -> Result<PuttingData, PracticeError> {
    let summaries = PuttingTestKind::ALL
        .iter()
        .map(|&kind| putting_summary(sessions, kind))
        .collect();

    let mut trends = Vec::with_capacity(PuttingTestKind::ALL.len());
    for kind in PuttingTestKind::ALL {
        let mut of_kind: Vec<&PuttingTestSession> =
            sessions.iter().filter(|s| s.kind() == kind).collect();
        of_kind.sort_by_key(|s| s.date);
        let scores: Vec<(NaiveDate, Option<f64>)> = of_kind
            .iter()
            .map(|s| (s.date, Some(f64::from(s.score()))))
            .collect();
        let rolling = rolling_mean(&scores, window)?;
        trends.push(KindTrend {
            kind,
            scores,
            rolling,
        });
    }

    let swedish_level = sessions.iter().rev().find_map(|s| match s.test {
        PuttingTest::Swedish { total_score, .. } => {
            Some(swedish_level_label(f64::from(total_score)))
        }
        _ => None,
    });

    Ok(PuttingData {
        summaries,
        trends,
        luke_donald_by_distance: luke_donald_make_pct(sessions),
        swedish_level,
    })
}
