//! Resident records
//!
//! Residents are the root of the dataset: every other entity references a
//! resident id, so the resident batch is generated first and its summaries
//! feed the remaining factories.

use crate::fakery::RandomSource;
use crate::types::clock;
use crate::types::{CivilStatus, EducationLevel, EmploymentStatus, Gender, IdGenerator, IncomeBracket};
use chrono::Duration;

/// Suffix candidates for a resident's name, `None` included so most
/// residents carry no suffix.
const NAME_SUFFIXES: &[Option<&str>] = &[None, Some("Jr."), Some("Sr."), Some("III"), Some("IV")];

/// One row of the `residents` table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentRow {
    /// Identifier of the form `BR-<year>-<10 digits>`.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Middle name, present for roughly 60% of residents.
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: String,
    /// Name suffix, when any.
    pub suffix: Option<String>,
    /// Birth date as an ISO calendar date. Every resident is an adult
    /// between 18 and 70 years old.
    pub birth_date: String,
    /// City of birth.
    pub birth_place: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Civil status.
    pub civil_status: CivilStatus,
    /// Always `Filipino` in generated data.
    pub nationality: String,
    /// Mobile contact number.
    pub contact: String,
    /// House number component of the address.
    pub house_number: String,
    /// Street component of the address.
    pub street: String,
    /// Purok, `Zone 1` through `Zone 7`.
    pub purok: String,
    /// Barangay name.
    pub barangay: String,
    /// City.
    pub city: String,
    /// Province.
    pub province: String,
    /// Stated occupation.
    pub occupation: String,
    /// Employment classification.
    pub employment: EmploymentStatus,
    /// Household income bracket.
    pub income_bracket: IncomeBracket,
    /// Highest educational attainment.
    pub education_level: EducationLevel,
    /// Whether the resident is a registered voter (~70%).
    pub is_voter: bool,
    /// Whether the record is active (~90%).
    pub is_active: bool,
    /// Set to `Relocated` exactly when the record is inactive.
    pub deactivation_reason: Option<String>,
    /// Registration timestamp, up to 90 days in the past.
    pub registered_at: String,
    /// Last-update timestamp, equal to `registered_at` at generation time.
    pub updated_at: String,
}

/// The slice of a resident other factories need: the foreign key and the
/// display name officials reuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentSummary {
    /// Resident identifier.
    pub id: String,
    /// `first_name last_name`, without middle name or suffix.
    pub full_name: String,
    /// Whether the resident record is active.
    pub is_active: bool,
}

impl ResidentRow {
    /// The summary downstream factories consume.
    pub fn summary(&self) -> ResidentSummary {
        ResidentSummary {
            id: self.id.clone(),
            full_name: format!("{} {}", self.first_name, self.last_name),
            is_active: self.is_active,
        }
    }
}

/// Generates resident rows.
#[derive(Debug)]
pub struct ResidentFactory;

impl ResidentFactory {
    /// Generate `count` residents. Zero yields an empty batch.
    pub fn generate(
        count: usize,
        src: &mut RandomSource,
        ids: &mut IdGenerator,
    ) -> Vec<ResidentRow> {
        let mut rows = Vec::with_capacity(count);
        for _ in 0..count {
            rows.push(Self::generate_one(src, ids));
        }
        rows
    }

    fn generate_one(src: &mut RandomSource, ids: &mut IdGenerator) -> ResidentRow {
        let id = ids.next_resident();
        let first_name = src.first_name();
        let last_name = src.last_name();
        let middle_name = src.chance(0.6).then(|| src.first_name());
        let suffix = src.pick(NAME_SUFFIXES).map(str::to_string);
        let is_active = src.chance(0.9);
        // registered_at and updated_at share one draw so fresh rows never
        // look edited.
        let stamp = clock::iso_now(-src.range(0..=90i64));

        ResidentRow {
            id,
            first_name,
            middle_name,
            last_name,
            suffix,
            birth_date: Self::adult_birth_date(src),
            birth_place: src.city(),
            gender: src.pick(Gender::ALL),
            civil_status: src.pick(CivilStatus::ALL),
            nationality: "Filipino".to_string(),
            contact: src.phone_number(),
            house_number: src.numerify("###"),
            street: src.street_name(),
            purok: format!("Zone {}", src.range(1..=7u32)),
            barangay: src.street_name(),
            city: src.city(),
            province: src.province(),
            occupation: src.job_title(),
            employment: src.pick(EmploymentStatus::ALL),
            income_bracket: src.pick(IncomeBracket::ALL),
            education_level: src.pick(EducationLevel::ALL),
            is_voter: src.chance(0.7),
            is_active,
            deactivation_reason: (!is_active).then(|| "Relocated".to_string()),
            registered_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    /// A birth date between 70 and 18 years before today.
    fn adult_birth_date(src: &mut RandomSource) -> String {
        let today = clock::today();
        let start = today - Duration::days(70 * 365);
        let end = today - Duration::days(18 * 365);
        let span = (end - start).num_days();
        (start + Duration::days(src.range(0..=span))).format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn batch(count: usize, seed: u64) -> Vec<ResidentRow> {
        let mut src = RandomSource::seeded(seed);
        let mut ids = IdGenerator::for_year(2026);
        ResidentFactory::generate(count, &mut src, &mut ids)
    }

    #[test]
    fn test_generates_requested_count_with_sequential_ids() {
        let rows = batch(10, 42);

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].id, "BR-2026-0000000001");
        assert_eq!(rows[9].id, "BR-2026-0000000010");
    }

    #[test]
    fn test_zero_count_yields_empty_batch() {
        assert!(batch(0, 42).is_empty());
    }

    #[test]
    fn test_deactivation_reason_tracks_active_flag() {
        for row in batch(200, 7) {
            if row.is_active {
                assert!(row.deactivation_reason.is_none(), "active row {} has a reason", row.id);
            } else {
                assert_eq!(row.deactivation_reason.as_deref(), Some("Relocated"));
            }
        }
    }

    #[test]
    fn test_every_resident_is_an_adult() {
        let today = clock::today();
        for row in batch(100, 9) {
            let birth = NaiveDate::parse_from_str(&row.birth_date, "%Y-%m-%d").unwrap();
            let age_days = (today - birth).num_days();
            assert!(age_days >= 18 * 365, "{} too young: {}", row.id, row.birth_date);
            assert!(age_days <= 70 * 365, "{} too old: {}", row.id, row.birth_date);
        }
    }

    #[test]
    fn test_fixed_fields_and_purok_range() {
        for row in batch(50, 11) {
            assert_eq!(row.nationality, "Filipino");
            assert!(row.purok.starts_with("Zone "));
            let zone: u32 = row.purok["Zone ".len()..].parse().unwrap();
            assert!((1..=7).contains(&zone));
            assert_eq!(row.registered_at, row.updated_at);
        }
    }

    #[test]
    fn test_summary_exposes_first_and_last_name_only() {
        let rows = batch(1, 3);
        let summary = rows[0].summary();

        assert_eq!(summary.id, rows[0].id);
        assert_eq!(summary.full_name, format!("{} {}", rows[0].first_name, rows[0].last_name));
        assert_eq!(summary.is_active, rows[0].is_active);
    }

    #[test]
    fn test_same_seed_same_rows_apart_from_timestamps() {
        let a = batch(20, 1234);
        let b = batch(20, 1234);

        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.id, right.id);
            assert_eq!(left.first_name, right.first_name);
            assert_eq!(left.last_name, right.last_name);
            assert_eq!(left.middle_name, right.middle_name);
            assert_eq!(left.birth_date, right.birth_date);
            assert_eq!(left.contact, right.contact);
            assert_eq!(left.is_voter, right.is_voter);
            assert_eq!(left.is_active, right.is_active);
        }
    }
}
