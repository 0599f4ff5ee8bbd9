//! Issued documents
//!
//! Documents come from two sources. Every ISSUED request always produces
//! one document, issued today with matching resident and type and a back
//! reference to the request. After those, independent documents with no
//! request link are added until the configured minimum is met, so the
//! final count is `max(minimum, issued requests)`.

use crate::entities::document_request::IssuableRequest;
use crate::entities::resident::ResidentSummary;
use crate::fakery::RandomSource;
use crate::types::clock;
use crate::types::{DocumentType, IdGenerator};
use chrono::Duration;

/// One row of the `documents` table.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRow {
    /// Reference of the form `<type prefix>-<year>-<10 digits>`.
    pub reference: String,
    /// The resident the document was issued to.
    pub resident_id: String,
    /// Kind of paper.
    pub document_type: DocumentType,
    /// Stated purpose.
    pub purpose: String,
    /// Issue date, ISO calendar date.
    pub issued_date: String,
    /// Validity end date.
    pub valid_until: String,
    /// Issuing staff username.
    pub issued_by: String,
    /// JSON blob of extra issuance fields.
    pub additional_info: String,
    /// Originating request id for request-derived documents, absent for
    /// independent ones.
    pub request_id: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Generates document rows.
#[derive(Debug)]
pub struct DocumentFactory;

impl DocumentFactory {
    /// Generate documents for every issuable request, then fill with
    /// independent documents up to `minimum`. Filling needs a resident to
    /// attach to, so an empty pool caps the batch at the issuable rows.
    pub fn generate(
        residents: &[ResidentSummary],
        issuable: &[IssuableRequest],
        minimum: usize,
        src: &mut RandomSource,
        ids: &mut IdGenerator,
    ) -> Vec<DocumentRow> {
        let mut rows = Vec::with_capacity(minimum.max(issuable.len()));

        let today = clock::today();
        for payload in issuable {
            rows.push(DocumentRow {
                reference: ids.next_document(payload.document_type),
                resident_id: payload.resident_id.clone(),
                document_type: payload.document_type,
                purpose: src.sentence(),
                issued_date: today.format("%Y-%m-%d").to_string(),
                valid_until: (today + Duration::days(90)).format("%Y-%m-%d").to_string(),
                issued_by: src.username(),
                additional_info: src.json_blob(2),
                request_id: Some(payload.request_id.clone()),
                created_at: clock::iso_now(0),
            });
        }

        if residents.is_empty() {
            return rows;
        }

        while rows.len() < minimum {
            let resident = &residents[src.range(0..residents.len())];
            let document_type = src.pick(DocumentType::ALL);
            rows.push(DocumentRow {
                reference: ids.next_document(document_type),
                resident_id: resident.id.clone(),
                document_type,
                purpose: src.sentence(),
                issued_date: (today - Duration::days(src.range(0..=30)))
                    .format("%Y-%m-%d")
                    .to_string(),
                valid_until: (today + Duration::days(src.range(30..=180)))
                    .format("%Y-%m-%d")
                    .to_string(),
                issued_by: src.username(),
                additional_info: src.json_blob(2),
                request_id: None,
                created_at: clock::iso_now(0),
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

    fn issuable(count: usize) -> Vec<IssuableRequest> {
        (1..=count)
            .map(|n| IssuableRequest {
                resident_id: format!("BR-2026-{:010}", n),
                document_type: DocumentType::BarangayClearance,
                request_id: format!("REQ-2026-{:06}", n),
            })
            .collect()
    }

    #[test]
    fn test_one_document_per_issuable_request() {
        let mut src = RandomSource::seeded(42);
        let mut ids = IdGenerator::for_year(2026);
        let rows = DocumentFactory::generate(&summaries(5), &issuable(3), 0, &mut src, &mut ids);

        assert_eq!(rows.len(), 3);
        for (row, payload) in rows.iter().zip(issuable(3)) {
            assert_eq!(row.request_id.as_deref(), Some(payload.request_id.as_str()));
            assert_eq!(row.resident_id, payload.resident_id);
            assert_eq!(row.document_type, payload.document_type);
            assert_eq!(row.issued_date, clock::today().format("%Y-%m-%d").to_string());
        }
    }

    #[test]
    fn test_fills_to_minimum_with_unlinked_documents() {
        let mut src = RandomSource::seeded(7);
        let mut ids = IdGenerator::for_year(2026);
        let rows = DocumentFactory::generate(&summaries(5), &issuable(2), 6, &mut src, &mut ids);

        assert_eq!(rows.len(), 6);
        assert!(rows[..2].iter().all(|r| r.request_id.is_some()));
        assert!(rows[2..].iter().all(|r| r.request_id.is_none()));
    }

    #[test]
    fn test_issuable_rows_exceeding_minimum_are_all_kept() {
        let mut src = RandomSource::seeded(3);
        let mut ids = IdGenerator::for_year(2026);
        let rows = DocumentFactory::generate(&summaries(5), &issuable(8), 4, &mut src, &mut ids);
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn test_reference_prefix_matches_type() {
        let mut src = RandomSource::seeded(11);
        let mut ids = IdGenerator::for_year(2026);
        let rows = DocumentFactory::generate(&summaries(5), &[], 20, &mut src, &mut ids);

        assert_eq!(rows.len(), 20);
        for row in &rows {
            assert!(
                row.reference.starts_with(row.document_type.reference_prefix()),
                "reference {} does not match type {}",
                row.reference,
                row.document_type
            );
        }
    }

    #[test]
    fn test_empty_resident_pool_skips_filling() {
        let mut src = RandomSource::seeded(5);
        let mut ids = IdGenerator::for_year(2026);
        let rows = DocumentFactory::generate(&[], &issuable(2), 10, &mut src, &mut ids);
        assert_eq!(rows.len(), 2);
    }
}
