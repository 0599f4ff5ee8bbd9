//! User accounts
//!
//! Each generated account links to a distinct resident, drawn without
//! repetition from a shuffled copy of the resident pool. The first three
//! accounts cycle through ADMIN, CLERK, RESIDENT so even a tiny dataset
//! has one of each; later accounts draw a role uniformly. SUPER_ADMIN is
//! never generated.

use crate::entities::resident::ResidentSummary;
use crate::fakery::RandomSource;
use crate::types::clock;
use crate::types::UserRole;
use std::collections::HashSet;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// UUID primary key, drawn from the run's seeded source.
    pub id: String,
    /// Unique login name derived from a generated person name.
    pub username: String,
    /// Bcrypt hash shared by every account in the run.
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// The resident this account belongs to.
    pub linked_resident_id: String,
    /// Always true for generated accounts.
    pub is_active: bool,
    /// Creation timestamp, up to 30 days in the past.
    pub created_at: String,
    /// Never set at generation time.
    pub last_login_at: Option<String>,
    /// Equal to `created_at` at generation time.
    pub updated_at: String,
}

/// Generates user account rows.
#[derive(Debug)]
pub struct UserAccountFactory;

impl UserAccountFactory {
    /// Generate up to `target` accounts over `residents`.
    ///
    /// The effective count is `min(target, residents.len())` since each
    /// account needs its own resident. `password_hash` is computed once by
    /// the caller and shared.
    pub fn generate(
        residents: &[ResidentSummary],
        target: usize,
        password_hash: &str,
        src: &mut RandomSource,
    ) -> Vec<UserRow> {
        if target == 0 || residents.is_empty() {
            return Vec::new();
        }

        let mut pool: Vec<&ResidentSummary> = residents.iter().collect();
        src.shuffle(&mut pool);
        let count = target.min(pool.len());

        let mut used = HashSet::new();
        let mut rows = Vec::with_capacity(count);
        for (index, resident) in pool.iter().take(count).enumerate() {
            let role = match UserRole::cycled(index) {
                Some(role) => role,
                None => src.pick(UserRole::ALL),
            };
            let username = Self::unique_username(src, &mut used);
            let stamp = clock::iso_now(-src.range(0..=30i64));

            rows.push(UserRow {
                id: src.uuid().to_string(),
                username,
                password_hash: password_hash.to_string(),
                role,
                linked_resident_id: resident.id.clone(),
                is_active: true,
                created_at: stamp.clone(),
                last_login_at: None,
                updated_at: stamp,
            });
        }
        rows
    }

    /// Build a username no earlier account in this run holds.
    ///
    /// Up to ten fresh person names are sanitized and tried; after that a
    /// numeric `user#####` fallback guarantees termination.
    fn unique_username(src: &mut RandomSource, used: &mut HashSet<String>) -> String {
        for _ in 0..10 {
            let raw = format!("{} {}", src.first_name(), src.last_name());
            let candidate = Self::sanitize(&raw, src);
            if used.insert(candidate.clone()) {
                return candidate;
            }
        }
        let fallback = format!("user{}", src.range(10_000..=99_999u32));
        used.insert(fallback.clone());
        fallback
    }

    /// Lowercase and strip everything that is not alphanumeric. An input
    /// with no usable characters falls back to a numeric name.
    fn sanitize(raw: &str, src: &mut RandomSource) -> String {
        let cleaned: String = raw
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphanumeric())
            .collect();
        if cleaned.is_empty() {
            format!("user{}", src.range(1_000..=9_999u32))
        } else {
            cleaned
        }
    }
}
