//! Table definitions for the barangay records database
//!
//! The DDL matches what the records application itself creates, so a
//! database seeded here is directly usable by it. All timestamps are
//! stored as offset-naive ISO-8601 text and booleans as integers.

/// Creates all six tables if they do not already exist.
pub const CREATE_ALL: &str = "
    PRAGMA foreign_keys = ON;
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT UNIQUE NOT NULL,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL,
        linked_resident_id TEXT,
        is_active INTEGER DEFAULT 1,
        created_at TEXT NOT NULL,
        last_login_at TEXT,
        updated_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS residents (
        id TEXT PRIMARY KEY,
        first_name TEXT NOT NULL,
        middle_name TEXT,
        last_name TEXT NOT NULL,
        suffix TEXT,
        birth_date TEXT NOT NULL,
        birth_place TEXT,
        gender TEXT NOT NULL,
        civil_status TEXT,
        nationality TEXT,
        contact TEXT,
        house_number TEXT,
        street TEXT,
        purok TEXT,
        barangay TEXT,
        city TEXT,
        province TEXT,
        occupation TEXT,
        employment TEXT,
        income_bracket TEXT,
        education_level TEXT,
        is_voter INTEGER DEFAULT 0,
        is_active INTEGER DEFAULT 1,
        deactivation_reason TEXT,
        registered_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS document_requests (
        id TEXT PRIMARY KEY,
        resident_id TEXT NOT NULL,
        document_type TEXT NOT NULL,
        purpose TEXT,
        requested_valid_until TEXT,
        notes TEXT,
        additional_info TEXT,
        status TEXT NOT NULL,
        staff_notes TEXT,
        handled_by TEXT,
        linked_document_reference TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        FOREIGN KEY (resident_id) REFERENCES residents(id)
    );
    CREATE TABLE IF NOT EXISTS documents (
        reference TEXT PRIMARY KEY,
        resident_id TEXT NOT NULL,
        type TEXT NOT NULL,
        purpose TEXT,
        issued_date TEXT NOT NULL,
        valid_until TEXT,
        issued_by TEXT NOT NULL,
        additional_info TEXT,
        request_id TEXT,
        created_at TEXT NOT NULL,
        FOREIGN KEY (resident_id) REFERENCES residents(id),
        FOREIGN KEY (request_id) REFERENCES document_requests(id)
    );
    CREATE TABLE IF NOT EXISTS voter_applications (
        id TEXT PRIMARY KEY,
        resident_id TEXT NOT NULL,
        application_type TEXT NOT NULL,
        current_registration_details TEXT,
        valid_id_front_path TEXT,
        valid_id_back_path TEXT,
        status TEXT NOT NULL,
        review_notes TEXT,
        reviewed_by TEXT,
        appointment_datetime TEXT,
        appointment_venue TEXT,
        appointment_slip_reference TEXT,
        submitted_at TEXT NOT NULL,
        reviewed_at TEXT,
        updated_at TEXT NOT NULL,
        FOREIGN KEY (resident_id) REFERENCES residents(id)
    );
    CREATE TABLE IF NOT EXISTS barangay_officials (
        id TEXT PRIMARY KEY,
        resident_id TEXT NOT NULL,
        official_name TEXT NOT NULL,
        position TEXT NOT NULL,
        term_start TEXT NOT NULL,
        term_end TEXT NOT NULL,
        is_current INTEGER DEFAULT 1,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        FOREIGN KEY (resident_id) REFERENCES residents(id)
    );
";

/// All tables, children before parents, so a reset never trips a
/// foreign key even when the pragma is left on.
pub const TABLES_CHILD_FIRST: &[&str] = &[
    "documents",
    "document_requests",
    "voter_applications",
    "barangay_officials",
    "users",
    "residents",
];
