//! Barangay officials
//!
//! Officials are drawn from a shuffled copy of the resident pool without
//! repetition, so one resident never holds two posts in a run. Terms are
//! one year long and start at a random date in the previous calendar
//! year, which makes roughly half the terms still current.

use crate::entities::resident::ResidentSummary;
use crate::fakery::RandomSource;
use crate::types::clock;
use crate::types::OfficialPosition;
use chrono::{Duration, NaiveDate};

/// One row of the `barangay_officials` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialRow {
    /// Identifier of the form `OFF-<10 hex digits>`.
    pub id: String,
    /// The resident holding the post.
    pub resident_id: String,
    /// Display name, copied from the resident summary.
    pub official_name: String,
    /// The post held.
    pub position: OfficialPosition,
    /// Term start, an ISO date in the previous calendar year.
    pub term_start: String,
    /// Term end, exactly 365 days after the start.
    pub term_end: String,
    /// Whether the term is still running today.
    pub is_current: bool,
    /// Creation timestamp, up to 20 days in the past.
    pub created_at: String,
    /// Equal to `created_at` at generation time.
    pub updated_at: String,
}

/// Generates barangay official rows.
#[derive(Debug)]
pub struct OfficialFactory;

impl OfficialFactory {
    /// Generate up to `target` officials over `residents`. The effective
    /// count is `min(target, residents.len())`.
    pub fn generate(
        residents: &[ResidentSummary],
        target: usize,
        src: &mut RandomSource,
    ) -> Vec<OfficialRow> {
        if target == 0 || residents.is_empty() {
            return Vec::new();
        }

        let mut pool: Vec<&ResidentSummary> = residents.iter().collect();
        src.shuffle(&mut pool);
        let count = target.min(pool.len());

        let year = clock::current_year();
        let today = clock::today();
        let mut rows = Vec::with_capacity(count);
        for resident in pool.iter().take(count) {
            // Day capped at 28 so the drawn date exists in every month.
            let start = NaiveDate::from_ymd_opt(year - 1, src.range(1..=12u32), src.range(1..=28u32))
                .unwrap_or_else(|| today - Duration::days(365));
            let end = start + Duration::days(365);
            let stamp = clock::iso_now(-src.range(0..=20i64));

            rows.push(OfficialRow {
                id: format!("OFF-{}", &src.uuid().simple().to_string()[..10]),
                resident_id: resident.id.clone(),
                official_name: resident.full_name.clone(),
                position: src.pick(OfficialPosition::ALL),
                term_start: start.format("%Y-%m-%d").to_string(),
                term_end: end.format("%Y-%m-%d").to_string(),
                is_current: end >= today,
                created_at: stamp.clone(),
                updated_at: stamp,
            });
        }
        rows
    }
}
