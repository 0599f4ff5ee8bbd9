//! Connection handling and bulk inserts
//!
//! [`SeedStore`] owns the connection; [`SeedTransaction`] scopes one
//! seeding run. Dropping an uncommitted transaction rolls everything
//! back, so a failed run leaves the database exactly as it found it.

use crate::entities::{
    DocumentRequestRow, DocumentRow, OfficialRow, ResidentRow, UserRow, VoterApplicationRow,
};
use crate::store::schema;
use rusqlite::{params, Connection, Transaction};
use std::path::Path;
use tracing::debug;

/// Handle on the barangay records database.
#[derive(Debug)]
pub struct SeedStore {
    conn: Connection,
}

impl SeedStore {
    /// Open (creating if needed) the database at `path`, with foreign key
    /// enforcement on.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database, for tests and dry experiments.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    /// Create any missing tables. Safe to call on a database the records
    /// application already initialized.
    pub fn ensure_schema(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(schema::CREATE_ALL)
    }

    /// Delete all rows from every table, children first.
    ///
    /// Foreign key enforcement is suspended for the deletes and restored
    /// on every exit path. Must run outside a transaction: SQLite ignores
    /// the pragma while one is open.
    pub fn reset_tables(&self) -> Result<(), rusqlite::Error> {
        self.conn.pragma_update(None, "foreign_keys", false)?;
        let deleted = self.delete_all_rows();
        let restored = self.conn.pragma_update(None, "foreign_keys", true);
        deleted.and(restored)
    }

    fn delete_all_rows(&self) -> Result<(), rusqlite::Error> {
        for table in schema::TABLES_CHILD_FIRST {
            let removed = self.conn.execute(&format!("DELETE FROM {}", table), [])?;
            debug!(table = *table, rows = removed, "cleared table");
        }
        Ok(())
    }

    /// Number of rows in `table`.
    pub fn table_count(&self, table: &str) -> Result<i64, rusqlite::Error> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
    }

    /// Begin the transaction one seeding run writes under.
    pub fn begin(&mut self) -> Result<SeedTransaction<'_>, rusqlite::Error> {
        Ok(SeedTransaction { tx: self.conn.transaction()? })
    }

    /// Direct access to the connection, for callers that need ad-hoc
    /// queries against a seeded database.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Write scope for one seeding run. All inserts go through this; nothing
/// is visible until [`SeedTransaction::commit`].
#[derive(Debug)]
pub struct SeedTransaction<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> SeedTransaction<'conn> {
    /// Insert a batch of residents.
    pub fn insert_residents(&self, rows: &[ResidentRow]) -> Result<(), rusqlite::Error> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO residents (
                id, first_name, middle_name, last_name, suffix, birth_date, birth_place,
                gender, civil_status, nationality, contact, house_number, street, purok,
                barangay, city, province, occupation, employment, income_bracket,
                education_level, is_voter, is_active, deactivation_reason, registered_at,
                updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.id,
                row.first_name,
                row.middle_name,
                row.last_name,
                row.suffix,
                row.birth_date,
                row.birth_place,
                row.gender.as_str(),
                row.civil_status.as_str(),
                row.nationality,
                row.contact,
                row.house_number,
                row.street,
                row.purok,
                row.barangay,
                row.city,
                row.province,
                row.occupation,
                row.employment.as_str(),
                row.income_bracket.as_str(),
                row.education_level.as_str(),
                row.is_voter,
                row.is_active,
                row.deactivation_reason,
                row.registered_at,
                row.updated_at,
            ])?;
        }
        Ok(())
    }

    /// Insert a batch of user accounts.
    pub fn insert_users(&self, rows: &[UserRow]) -> Result<(), rusqlite::Error> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO users (
                id, username, password_hash, role, linked_resident_id, is_active,
                created_at, last_login_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.id,
                row.username,
                row.password_hash,
                row.role.as_str(),
                row.linked_resident_id,
                row.is_active,
                row.created_at,
                row.last_login_at,
                row.updated_at,
            ])?;
        }
        Ok(())
    }

    /// Insert a batch of document requests.
    pub fn insert_document_requests(
        &self,
        rows: &[DocumentRequestRow],
    ) -> Result<(), rusqlite::Error> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO document_requests (
                id, resident_id, document_type, purpose, requested_valid_until, notes,
                additional_info, status, staff_notes, handled_by,
                linked_document_reference, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.id,
                row.resident_id,
                row.document_type.as_str(),
                row.purpose,
                row.requested_valid_until,
                row.notes,
                row.additional_info,
                row.status.as_str(),
                row.staff_notes,
                row.handled_by,
                row.linked_document_reference,
                row.created_at,
                row.updated_at,
            ])?;
        }
        Ok(())
    }

    /// Insert a batch of documents.
    pub fn insert_documents(&self, rows: &[DocumentRow]) -> Result<(), rusqlite::Error> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO documents (
                reference, resident_id, type, purpose, issued_date, valid_until,
                issued_by, additional_info, request_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.reference,
                row.resident_id,
                row.document_type.as_str(),
                row.purpose,
                row.issued_date,
                row.valid_until,
                row.issued_by,
                row.additional_info,
                row.request_id,
                row.created_at,
            ])?;
        }
        Ok(())
    }

    /// Insert a batch of voter applications.
    pub fn insert_voter_applications(
        &self,
        rows: &[VoterApplicationRow],
    ) -> Result<(), rusqlite::Error> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO voter_applications (
                id, resident_id, application_type, current_registration_details,
                valid_id_front_path, valid_id_back_path, status, review_notes,
                reviewed_by, appointment_datetime, appointment_venue,
                appointment_slip_reference, submitted_at, reviewed_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.id,
                row.resident_id,
                row.application_type.as_str(),
                row.current_registration_details,
                row.valid_id_front_path,
                row.valid_id_back_path,
                row.status.as_str(),
                row.review_notes,
                row.reviewed_by,
                row.appointment_datetime,
                row.appointment_venue,
                row.appointment_slip_reference,
                row.submitted_at,
                row.reviewed_at,
                row.updated_at,
            ])?;
        }
        Ok(())
    }

    /// Insert a batch of barangay officials.
    pub fn insert_officials(&self, rows: &[OfficialRow]) -> Result<(), rusqlite::Error> {
        let mut stmt = self.tx.prepare_cached(
            "INSERT INTO barangay_officials (
                id, resident_id, official_name, position, term_start, term_end,
                is_current, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.id,
                row.resident_id,
                row.official_name,
                row.position.as_str(),
                row.term_start,
                row.term_end,
                row.is_current,
                row.created_at,
                row.updated_at,
            ])?;
        }
        Ok(())
    }

    /// Make the run's writes visible. Dropping instead rolls back.
    pub fn commit(self) -> Result<(), rusqlite::Error> {
        self.tx.commit()
    }
}
