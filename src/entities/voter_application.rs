//! Voter-registration applications
//!
//! Applications land in a random workflow status. Review fields are
//! filled exactly when the status is past PENDING, and appointment
//! fields exactly when the status is SCHEDULED or VERIFIED. The slip
//! reference reuses the application's ordinal within the run.

use crate::entities::resident::ResidentSummary;
use crate::fakery::RandomSource;
use crate::types::clock;
use crate::types::{ApplicationStatus, ApplicationType, IdGenerator};
use chrono::Duration;

/// One row of the `voter_applications` table.
#[derive(Debug, Clone, PartialEq)]
pub struct VoterApplicationRow {
    /// Identifier of the form `VA-<year>-<5 digits>`.
    pub id: String,
    /// The applying resident.
    pub resident_id: String,
    /// Kind of application.
    pub application_type: ApplicationType,
    /// Free-text description of the applicant's current registration.
    pub current_registration_details: String,
    /// ID scan paths are never populated by the generator.
    pub valid_id_front_path: Option<String>,
    /// See `valid_id_front_path`.
    pub valid_id_back_path: Option<String>,
    /// Workflow status.
    pub status: ApplicationStatus,
    /// Reviewer remark, present exactly when the application was reviewed.
    pub review_notes: Option<String>,
    /// Reviewer username, present exactly when the application was reviewed.
    pub reviewed_by: Option<String>,
    /// Appointment time, 1 to 14 days out, present exactly for
    /// SCHEDULED and VERIFIED applications.
    pub appointment_datetime: Option<String>,
    /// Appointment venue, `Barangay Hall Room 1` through `5`.
    pub appointment_venue: Option<String>,
    /// Slip reference of the form `SLIP-<5 digit ordinal>`.
    pub appointment_slip_reference: Option<String>,
    /// Submission timestamp, 10 to 60 days in the past.
    pub submitted_at: String,
    /// Never set at generation time.
    pub reviewed_at: Option<String>,
    /// Last-update timestamp, up to 9 days in the past.
    pub updated_at: String,
}

/// Generates voter application rows.
#[derive(Debug)]
pub struct VoterApplicationFactory;

impl VoterApplicationFactory {
    /// Generate `target` applications over `residents`. An empty resident
    /// pool yields an empty batch.
    pub fn generate(
        residents: &[ResidentSummary],
        target: usize,
        src: &mut RandomSource,
        ids: &mut IdGenerator,
    ) -> Vec<VoterApplicationRow> {
        if target == 0 || residents.is_empty() {
            return Vec::new();
        }

        let mut rows = Vec::with_capacity(target);
        for _ in 0..target {
            let resident = &residents[src.range(0..residents.len())];
            let status = src.pick(ApplicationStatus::ALL);
            let id = ids.next_application();
            let ordinal = ids.application_count();

            let mut review_notes = None;
            let mut reviewed_by = None;
            if status.is_reviewed() {
                review_notes = Some(src.sentence());
                reviewed_by = Some(src.username());
            }

            let mut appointment_datetime = None;
            let mut appointment_venue = None;
            let mut appointment_slip_reference = None;
            if status.has_appointment() {
                appointment_datetime = Some(clock::iso_timestamp(
                    clock::utc_now() + Duration::days(src.range(1..=14)),
                ));
                appointment_venue = Some(format!("Barangay Hall Room {}", src.range(1..=5u32)));
                appointment_slip_reference = Some(format!("SLIP-{:05}", ordinal));
            }

            rows.push(VoterApplicationRow {
                id,
                resident_id: resident.id.clone(),
                application_type: src.pick(ApplicationType::ALL),
                current_registration_details: src.sentence(),
                valid_id_front_path: None,
                valid_id_back_path: None,
                status,
                review_notes,
                reviewed_by,
                appointment_datetime,
                appointment_venue,
                appointment_slip_reference,
                submitted_at: clock::iso_now(-src.range(10..=60i64)),
                reviewed_at: None,
                updated_at: clock::iso_now(-src.range(0..=9i64)),
            });
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(count: usize) -> Vec<ResidentSummary> {
        (1..=count)
            .map(|n| ResidentSummary {
                id: format!("BR-2026-{:010}", n),
                full_name: format!("Resident {}", n),
                is_active: true,
            })
            .collect()
    }

    fn batch(target: usize, seed: u64) -> Vec<VoterApplicationRow> {
        let mut src = RandomSource::seeded(seed);
        let mut ids = IdGenerator::for_year(2026);
        VoterApplicationFactory::generate(&summaries(6), target, &mut src, &mut ids)
    }

    #[test]
    fn test_generates_target_count_with_sequential_ids() {
        let rows = batch(15, 42);

        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0].id, "VA-2026-00001");
        assert_eq!(rows[14].id, "VA-2026-00015");
    }

    #[test]
    fn test_review_fields_track_status() {
        for row in batch(120, 7) {
            if row.status.is_reviewed() {
                assert!(row.review_notes.is_some(), "{} reviewed without notes", row.id);
                assert!(row.reviewed_by.is_some());
            } else {
                assert!(row.review_notes.is_none());
                assert!(row.reviewed_by.is_none());
            }
        }
    }

    #[test]
    fn test_appointment_fields_track_status() {
        for row in batch(120, 9) {
            if row.status.has_appointment() {
                assert!(row.appointment_datetime.is_some(), "{} has no appointment", row.id);
                let venue = row.appointment_venue.as_deref().unwrap();
                assert!(venue.starts_with("Barangay Hall Room "));
                let slip = row.appointment_slip_reference.as_deref().unwrap();
                assert!(slip.starts_with("SLIP-"));
            } else {
                assert!(row.appointment_datetime.is_none());
                assert!(row.appointment_venue.is_none());
                assert!(row.appointment_slip_reference.is_none());
            }
        }
    }

    #[test]
    fn test_slip_reference_reuses_application_ordinal() {
        for (index, row) in batch(120, 21).iter().enumerate() {
            if let Some(slip) = &row.appointment_slip_reference {
                assert_eq!(slip, &format!("SLIP-{:05}", index + 1));
            }
        }
    }

    #[test]
    fn test_id_paths_and_reviewed_at_stay_empty() {
        for row in batch(30, 3) {
            assert!(row.valid_id_front_path.is_none());
            assert!(row.valid_id_back_path.is_none());
            assert!(row.reviewed_at.is_none());
        }
    }

    #[test]
    fn test_empty_resident_pool_yields_empty_batch() {
        let mut src = RandomSource::seeded(1);
        let mut ids = IdGenerator::for_year(2026);
        assert!(VoterApplicationFactory::generate(&[], 15, &mut src, &mut ids).is_empty());
    }
}
