//! Domain enumerations for the barangay records schema
//!
//! Every enumeration stores a fixed uppercase (or title-case, where the
//! production schema uses one) code in the database. Each type exposes the
//! full candidate slice (`ALL`) for uniform random selection, a `Display`
//! impl that writes the storage code, and a `FromStr` that parses it back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resident gender as recorded on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// All genders the intake form offers.
    pub const ALL: &'static [Gender] = &[Gender::Male, Gender::Female];

    /// Storage code written to the `residents.gender` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Civil status of a resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CivilStatus {
    /// Never married
    Single,
    /// Currently married
    Married,
    /// Spouse deceased
    Widowed,
    /// Legally separated
    Separated,
    /// Marriage dissolved
    Divorced,
}

impl CivilStatus {
    /// All civil statuses the schema accepts.
    pub const ALL: &'static [CivilStatus] = &[
        CivilStatus::Single,
        CivilStatus::Married,
        CivilStatus::Widowed,
        CivilStatus::Separated,
        CivilStatus::Divorced,
    ];

    /// Storage code written to the `residents.civil_status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            CivilStatus::Single => "SINGLE",
            CivilStatus::Married => "MARRIED",
            CivilStatus::Widowed => "WIDOWED",
            CivilStatus::Separated => "SEPARATED",
            CivilStatus::Divorced => "DIVORCED",
        }
    }
}

impl fmt::Display for CivilStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CivilStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SINGLE" => Ok(CivilStatus::Single),
            "MARRIED" => Ok(CivilStatus::Married),
            "WIDOWED" => Ok(CivilStatus::Widowed),
            "SEPARATED" => Ok(CivilStatus::Separated),
            "DIVORCED" => Ok(CivilStatus::Divorced),
            _ => Err(format!("Unknown civil status: {}", s)),
        }
    }
}

/// Employment classification of a resident.
///
/// Stored title-case, matching what the production intake screens write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Working for an employer
    Employed,
    /// Running their own livelihood
    SelfEmployed,
    /// Not currently working
    Unemployed,
    /// Enrolled in school
    Student,
}

impl EmploymentStatus {
    /// All employment classifications.
    pub const ALL: &'static [EmploymentStatus] = &[
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Unemployed,
        EmploymentStatus::Student,
    ];

    /// Storage string written to the `residents.employment` column.
    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "Employed",
            EmploymentStatus::SelfEmployed => "Self-employed",
            EmploymentStatus::Unemployed => "Unemployed",
            EmploymentStatus::Student => "Student",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly household income bracket, in Philippine pesos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeBracket {
    /// Below 10,000
    Below10k,
    /// 10,000 to 20,000
    TenTo20k,
    /// 20,000 to 30,000
    TwentyTo30k,
    /// 30,000 to 50,000
    ThirtyTo50k,
    /// Above 50,000
    Above50k,
}

impl IncomeBracket {
    /// All income brackets.
    pub const ALL: &'static [IncomeBracket] = &[
        IncomeBracket::Below10k,
        IncomeBracket::TenTo20k,
        IncomeBracket::TwentyTo30k,
        IncomeBracket::ThirtyTo50k,
        IncomeBracket::Above50k,
    ];

    /// Storage code written to the `residents.income_bracket` column.
    pub fn as_str(self) -> &'static str {
        match self {
            IncomeBracket::Below10k => "BELOW_10K",
            IncomeBracket::TenTo20k => "TEN_TO_20K",
            IncomeBracket::TwentyTo30k => "TWENTY_TO_30K",
            IncomeBracket::ThirtyTo50k => "THIRTY_TO_50K",
            IncomeBracket::Above50k => "ABOVE_50K",
        }
    }
}

impl fmt::Display for IncomeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest educational attainment of a resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    /// No formal schooling
    NoFormalEducation,
    /// Some elementary schooling
    Elementary,
    /// Finished elementary
    ElementaryGraduate,
    /// Some high school
    HighSchool,
    /// Finished high school
    HighSchoolGraduate,
    /// Vocational or technical training
    Vocational,
    /// Some college
    College,
    /// Finished college
    CollegeGraduate,
    /// Post-graduate studies
    PostGraduate,
}

impl EducationLevel {
    /// All education levels.
    pub const ALL: &'static [EducationLevel] = &[
        EducationLevel::NoFormalEducation,
        EducationLevel::Elementary,
        EducationLevel::ElementaryGraduate,
        EducationLevel::HighSchool,
        EducationLevel::HighSchoolGraduate,
        EducationLevel::Vocational,
        EducationLevel::College,
        EducationLevel::CollegeGraduate,
        EducationLevel::PostGraduate,
    ];

    /// Storage code written to the `residents.education_level` column.
    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::NoFormalEducation => "NO_FORMAL_EDUCATION",
            EducationLevel::Elementary => "ELEMENTARY",
            EducationLevel::ElementaryGraduate => "ELEMENTARY_GRADUATE",
            EducationLevel::HighSchool => "HIGH_SCHOOL",
            EducationLevel::HighSchoolGraduate => "HIGH_SCHOOL_GRADUATE",
            EducationLevel::Vocational => "VOCATIONAL",
            EducationLevel::College => "COLLEGE",
            EducationLevel::CollegeGraduate => "COLLEGE_GRADUATE",
            EducationLevel::PostGraduate => "POST_GRADUATE",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of official papers the barangay issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Barangay identification card
    BarangayId,
    /// Barangay clearance
    BarangayClearance,
    /// Certificate of residency
    CertificateOfResidency,
}

impl DocumentType {
    /// All document types.
    pub const ALL: &'static [DocumentType] = &[
        DocumentType::BarangayId,
        DocumentType::BarangayClearance,
        DocumentType::CertificateOfResidency,
    ];

    /// Storage code written to the `document_type` / `type` columns.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::BarangayId => "BARANGAY_ID",
            DocumentType::BarangayClearance => "BARANGAY_CLEARANCE",
            DocumentType::CertificateOfResidency => "CERTIFICATE_OF_RESIDENCY",
        }
    }

    /// Prefix used when minting a document reference of this type.
    pub fn reference_prefix(self) -> &'static str {
        match self {
            DocumentType::BarangayId => "BID",
            DocumentType::BarangayClearance => "BC",
            DocumentType::CertificateOfResidency => "CR",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BARANGAY_ID" => Ok(DocumentType::BarangayId),
            "BARANGAY_CLEARANCE" => Ok(DocumentType::BarangayClearance),
            "CERTIFICATE_OF_RESIDENCY" => Ok(DocumentType::CertificateOfResidency),
            _ => Err(format!("Unknown document type: {}", s)),
        }
    }
}

/// Workflow status of a document request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Submitted, not yet picked up by staff
    Pending,
    /// A staff member is reviewing it
    UnderReview,
    /// Approved, awaiting issuance
    Approved,
    /// Rejected by staff
    Rejected,
    /// The requested document has been issued
    Issued,
}

impl RequestStatus {
    /// All request statuses.
    pub const ALL: &'static [RequestStatus] = &[
        RequestStatus::Pending,
        RequestStatus::UnderReview,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Issued,
    ];

    /// Storage code written to the `document_requests.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::UnderReview => "UNDER_REVIEW",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
            RequestStatus::Issued => "ISSUED",
        }
    }

    /// Whether a staff member has touched the request.
    ///
    /// `handled_by` and `staff_notes` must be non-null exactly when this
    /// returns true.
    pub fn requires_handling(self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(RequestStatus::Pending),
            "UNDER_REVIEW" => Ok(RequestStatus::UnderReview),
            "APPROVED" => Ok(RequestStatus::Approved),
            "REJECTED" => Ok(RequestStatus::Rejected),
            "ISSUED" => Ok(RequestStatus::Issued),
            _ => Err(format!("Unknown request status: {}", s)),
        }
    }
}

/// Workflow status of a voter-registration application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    /// Submitted, not yet reviewed
    Pending,
    /// Under review by the election officer
    UnderReview,
    /// Approved
    Approved,
    /// Rejected
    Rejected,
    /// An in-person appointment has been booked
    Scheduled,
    /// The applicant appeared and was verified
    Verified,
}

impl ApplicationStatus {
    /// All application statuses.
    pub const ALL: &'static [ApplicationStatus] = &[
        ApplicationStatus::Pending,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
        ApplicationStatus::Scheduled,
        ApplicationStatus::Verified,
    ];

    /// Storage code written to the `voter_applications.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::UnderReview => "UNDER_REVIEW",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Scheduled => "SCHEDULED",
            ApplicationStatus::Verified => "VERIFIED",
        }
    }

    /// Whether the application has been reviewed.
    ///
    /// `review_notes` and `reviewed_by` are non-null exactly when this
    /// returns true.
    pub fn is_reviewed(self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }

    /// Whether an in-person appointment exists for this status.
    ///
    /// Appointment datetime, venue, and slip reference are non-null
    /// exactly when this returns true.
    pub fn has_appointment(self) -> bool {
        matches!(self, ApplicationStatus::Scheduled | ApplicationStatus::Verified)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(ApplicationStatus::Pending),
            "UNDER_REVIEW" => Ok(ApplicationStatus::UnderReview),
            "APPROVED" => Ok(ApplicationStatus::Approved),
            "REJECTED" => Ok(ApplicationStatus::Rejected),
            "SCHEDULED" => Ok(ApplicationStatus::Scheduled),
            "VERIFIED" => Ok(ApplicationStatus::Verified),
            _ => Err(format!("Unknown application status: {}", s)),
        }
    }
}

/// Kind of voter-registration application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationType {
    /// First-time registration
    NewRegistration,
    /// Transfer of registration from another locality
    Transfer,
    /// Reactivation of a deactivated record
    Reactivation,
}

impl ApplicationType {
    /// All application types.
    pub const ALL: &'static [ApplicationType] = &[
        ApplicationType::NewRegistration,
        ApplicationType::Transfer,
        ApplicationType::Reactivation,
    ];

    /// Storage code written to the `voter_applications.application_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationType::NewRegistration => "NEW_REGISTRATION",
            ApplicationType::Transfer => "TRANSFER",
            ApplicationType::Reactivation => "REACTIVATION",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a generated user account.
///
/// SUPER_ADMIN exists in the production system but is deliberately never
/// generated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Barangay administrator
    Admin,
    /// Front-desk clerk
    Clerk,
    /// Resident self-service account
    Resident,
}

impl UserRole {
    /// All roles generated accounts may hold.
    pub const ALL: &'static [UserRole] = &[UserRole::Admin, UserRole::Clerk, UserRole::Resident];

    /// The fixed sequence the first few accounts cycle through, so a small
    /// seeded database always contains at least one of each role.
    pub const ASSIGNMENT_CYCLE: &'static [UserRole] =
        &[UserRole::Admin, UserRole::Clerk, UserRole::Resident];

    /// Storage code written to the `users.role` column.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Clerk => "CLERK",
            UserRole::Resident => "RESIDENT",
        }
    }

    /// Role assigned deterministically by position, if the position falls
    /// inside the fixed cycle. Accounts past the cycle draw uniformly.
    pub fn cycled(index: usize) -> Option<UserRole> {
        Self::ASSIGNMENT_CYCLE.get(index).copied()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "CLERK" => Ok(UserRole::Clerk),
            "RESIDENT" => Ok(UserRole::Resident),
            _ => Err(format!("Unknown user role: {}", s)),
        }
    }
}

/// Elected or appointed barangay positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficialPosition {
    /// Barangay captain (punong barangay)
    Captain,
    /// Councilor
    Kagawad,
    /// Sangguniang Kabataan chairman
    SkChairman,
    /// Barangay secretary
    Secretary,
    /// Barangay treasurer
    Treasurer,
}

impl OfficialPosition {
    /// All positions.
    pub const ALL: &'static [OfficialPosition] = &[
        OfficialPosition::Captain,
        OfficialPosition::Kagawad,
        OfficialPosition::SkChairman,
        OfficialPosition::Secretary,
        OfficialPosition::Treasurer,
    ];

    /// Storage code written to the `barangay_officials.position` column.
    pub fn as_str(self) -> &'static str {
        match self {
            OfficialPosition::Captain => "CAPTAIN",
            OfficialPosition::Kagawad => "KAGAWAD",
            OfficialPosition::SkChairman => "SK_CHAIRMAN",
            OfficialPosition::Secretary => "SECRETARY",
            OfficialPosition::Treasurer => "TREASURER",
        }
    }
}

impl fmt::Display for OfficialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
