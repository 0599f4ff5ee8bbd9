//! Document requests
//!
//! Requests draw a random resident and document type, then land in a
//! random workflow status. Staff fields are filled exactly when the
//! status means a staff member touched the request. ISSUED requests are
//! reported back to the caller so the document factory can mint one
//! document per issued request.

use crate::entities::resident::ResidentSummary;
use crate::fakery::RandomSource;
use crate::types::clock;
use crate::types::{DocumentType, IdGenerator, RequestStatus};
use chrono::Duration;

/// One row of the `document_requests` table.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequestRow {
    /// Identifier of the form `REQ-<year>-<6 digits>`.
    pub id: String,
    /// The requesting resident.
    pub resident_id: String,
    /// Kind of paper requested.
    pub document_type: DocumentType,
    /// Stated purpose.
    pub purpose: String,
    /// Requested validity end, 10 to 60 days out, as an ISO date.
    pub requested_valid_until: String,
    /// Free-text note from the requester.
    pub notes: String,
    /// JSON blob of extra intake fields.
    pub additional_info: String,
    /// Workflow status.
    pub status: RequestStatus,
    /// Staff remark, present exactly when the request was handled.
    pub staff_notes: Option<String>,
    /// Handling staff username, present exactly when the request was handled.
    pub handled_by: Option<String>,
    /// Never linked at generation time; issuance fills it in production.
    pub linked_document_reference: Option<String>,
    /// Submission timestamp, 1 to 45 days in the past.
    pub created_at: String,
    /// Equal to `created_at` for pending requests, otherwise a later
    /// handling timestamp up to 10 days in the past.
    pub updated_at: String,
}

/// An ISSUED request, carried forward so the document factory can mint
/// the matching document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuableRequest {
    /// The requesting resident.
    pub resident_id: String,
    /// Document type to issue.
    pub document_type: DocumentType,
    /// The originating request id.
    pub request_id: String,
}

/// A generated request batch plus its issuable subset.
#[derive(Debug)]
pub struct DocumentRequestBatch {
    /// All generated rows, in insertion order.
    pub rows: Vec<DocumentRequestRow>,
    /// The ISSUED rows, in the same order they appear in `rows`.
    pub issuable: Vec<IssuableRequest>,
}

/// Generates document request rows.
#[derive(Debug)]
pub struct DocumentRequestFactory;

impl DocumentRequestFactory {
    /// Generate `target` requests over `residents`. An empty resident pool
    /// yields an empty batch.
    pub fn generate(
        residents: &[ResidentSummary],
        target: usize,
        src: &mut RandomSource,
        ids: &mut IdGenerator,
    ) -> DocumentRequestBatch {
        let mut batch = DocumentRequestBatch { rows: Vec::with_capacity(target), issuable: Vec::new() };
        if target == 0 || residents.is_empty() {
            return batch;
        }

        for _ in 0..target {
            let resident = &residents[src.range(0..residents.len())];
            let document_type = src.pick(DocumentType::ALL);
            let status = src.pick(RequestStatus::ALL);
            let id = ids.next_request();

            let created_at = clock::iso_now(-src.range(1..=45i64));
            let mut updated_at = created_at.clone();
            let mut staff_notes = None;
            let mut handled_by = None;
            if status.requires_handling() {
                handled_by = Some(src.username());
                staff_notes = Some(src.sentence());
                updated_at = clock::iso_now(-src.range(0..=10i64));
            }

            if status == RequestStatus::Issued {
                batch.issuable.push(IssuableRequest {
                    resident_id: resident.id.clone(),
                    document_type,
                    request_id: id.clone(),
                });
            }

            batch.rows.push(DocumentRequestRow {
                id,
                resident_id: resident.id.clone(),
                document_type,
                purpose: src.sentence(),
                requested_valid_until: (clock::today() + Duration::days(src.range(10..=60)))
                    .format("%Y-%m-%d")
                    .to_string(),
                notes: src.sentence(),
                additional_info: src.json_blob(3),
                status,
                staff_notes,
                handled_by,
                linked_document_reference: None,
                created_at,
                updated_at,
            });
        }
        batch
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

    fn batch(target: usize, seed: u64) -> DocumentRequestBatch {
        let mut src = RandomSource::seeded(seed);
        let mut ids = IdGenerator::for_year(2026);
        DocumentRequestFactory::generate(&summaries(8), target, &mut src, &mut ids)
    }

    #[test]
    fn test_generates_target_count_with_sequential_ids() {
        let batch = batch(25, 42);

        assert_eq!(batch.rows.len(), 25);
        assert_eq!(batch.rows[0].id, "REQ-2026-000001");
        assert_eq!(batch.rows[24].id, "REQ-2026-000025");
    }

    #[test]
    fn test_staff_fields_track_status() {
        for row in batch(100, 7).rows {
            if row.status.requires_handling() {
                assert!(row.handled_by.is_some(), "{} handled fields missing", row.id);
                assert!(row.staff_notes.is_some());
            } else {
                assert!(row.handled_by.is_none(), "{} pending but handled", row.id);
                assert!(row.staff_notes.is_none());
                assert_eq!(row.created_at, row.updated_at);
            }
        }
    }

    #[test]
    fn test_issuable_subset_matches_issued_rows() {
        let batch = batch(100, 13);

        let issued: Vec<&DocumentRequestRow> =
            batch.rows.iter().filter(|r| r.status == RequestStatus::Issued).collect();
        assert_eq!(batch.issuable.len(), issued.len());
        for (payload, row) in batch.issuable.iter().zip(issued) {
            assert_eq!(payload.request_id, row.id);
            assert_eq!(payload.resident_id, row.resident_id);
            assert_eq!(payload.document_type, row.document_type);
        }
    }

    #[test]
    fn test_resident_ids_come_from_pool() {
        let pool = summaries(8);
        for row in batch(50, 3).rows {
            assert!(pool.iter().any(|r| r.id == row.resident_id));
        }
    }

    #[test]
    fn test_reference_is_never_linked_and_blob_parses() {
        for row in batch(20, 5).rows {
            assert!(row.linked_document_reference.is_none());
            assert!(serde_json::from_str::<serde_json::Value>(&row.additional_info).is_ok());
        }
    }

    #[test]
    fn test_empty_resident_pool_yields_empty_batch() {
        let mut src = RandomSource::seeded(1);
        let mut ids = IdGenerator::for_year(2026);
        let batch = DocumentRequestFactory::generate(&[], 25, &mut src, &mut ids);

        assert!(batch.rows.is_empty());
        assert!(batch.issuable.is_empty());
    }
}
