//! Seedable randomness with locale fallbacks
//!
//! [`RandomSource`] is the single RNG every generator draws from. It wraps
//! a ChaCha8 stream cipher RNG (cheap, portable, and stable across
//! platforms, so seeded runs replay identically everywhere) together with
//! a [`ValueProvider`]. Value kinds the provider declines are served from
//! the static Philippine candidate lists below, silently.

use crate::fakery::provider::{FakerProvider, ValueProvider};
use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Philippine cities used when the provider has no city coverage.
const PH_CITIES: &[&str] = &[
    "Quezon City",
    "Davao City",
    "Cebu City",
    "Taguig",
    "Pasig",
    "Cagayan de Oro",
    "Iloilo City",
    "Bacolod",
    "Baguio",
    "Zamboanga City",
    "Antipolo",
    "San Fernando",
];

/// Philippine provinces used when the provider has no province coverage.
const PH_PROVINCES: &[&str] = &[
    "Metro Manila",
    "Cavite",
    "Laguna",
    "Batangas",
    "Rizal",
    "Bulacan",
    "Pampanga",
    "Cebu",
    "Iloilo",
    "Davao del Sur",
    "Misamis Oriental",
    "Benguet",
];

/// Street names used when the provider has no street coverage.
const PH_STREETS: &[&str] = &[
    "Mabini Street",
    "Rizal Avenue",
    "Bonifacio Drive",
    "Aguinaldo Highway",
    "Del Pilar Street",
    "Luna Street",
    "Quezon Avenue",
    "Osmena Boulevard",
    "Magsaysay Road",
    "Roxas Street",
];

/// Given names used when the provider has no name coverage.
const FALLBACK_FIRST_NAMES: &[&str] = &[
    "Jose", "Maria", "Juan", "Ana", "Pedro", "Rosa", "Carlos", "Elena", "Miguel", "Sofia",
    "Andres", "Clara", "Ramon", "Teresa", "Diego", "Luz",
];

/// Family names used when the provider has no name coverage.
const FALLBACK_LAST_NAMES: &[&str] = &[
    "Santos", "Reyes", "Cruz", "Bautista", "Ocampo", "Garcia", "Mendoza", "Torres", "Flores",
    "Villanueva", "Ramos", "Castillo", "Aquino", "Navarro", "Salazar", "Domingo",
];

/// Word pool backing the fallback sentence and word generators.
const FALLBACK_WORDS: &[&str] = &[
    "record", "request", "office", "barangay", "service", "copy", "form", "schedule", "notice",
    "resident", "review", "update", "issue", "follow", "hall",
];

/// Occupation titles used when the provider has no job coverage.
const FALLBACK_JOB_TITLES: &[&str] = &[
    "Teacher",
    "Driver",
    "Vendor",
    "Nurse",
    "Carpenter",
    "Office Clerk",
    "Farmer",
    "Security Guard",
    "Seamstress",
    "Electrician",
];

/// The seedable randomness source shared by every generator in a run.
///
/// One value kind per method; the provider answers first and the static
/// fallback lists answer when it declines, so callers always get a value.
#[derive(Debug)]
pub struct RandomSource {
    rng: ChaCha8Rng,
    provider: Box<dyn ValueProvider>,
}

impl RandomSource {
    /// Create a source replayable from `seed`, with the default
    /// English-locale provider.
    pub fn seeded(seed: u64) -> Self {
        Self::with_provider(ChaCha8Rng::seed_from_u64(seed), Box::new(FakerProvider::new()))
    }

    /// Create a source seeded from OS entropy, for unseeded runs.
    pub fn from_entropy() -> Self {
        Self::with_provider(ChaCha8Rng::from_os_rng(), Box::new(FakerProvider::new()))
    }

    /// Create a source from an explicit RNG and provider.
    pub fn with_provider(rng: ChaCha8Rng, provider: Box<dyn ValueProvider>) -> Self {
        Self { rng, provider }
    }

    /// Pick one element uniformly.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty. Callers pass the fixed candidate
    /// slices on the domain enumerations, which are never empty.
    pub fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        options[self.rng.random_range(0..options.len())]
    }

    /// Uniform sample from a range, integer or otherwise.
    pub fn range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Bernoulli trial with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// A UUID drawn from this source, so seeded runs mint the same ids.
    pub fn uuid(&mut self) -> Uuid {
        Uuid::from_u128(self.rng.random())
    }

    /// Replace each `#` in `pattern` with a random digit.
    pub fn numerify(&mut self, pattern: &str) -> String {
        pattern
            .chars()
            .map(|c| {
                if c == '#' {
                    char::from(b'0' + self.rng.random_range(0..10u8))
                } else {
                    c
                }
            })
            .collect()
    }

    /// A given name.
    pub fn first_name(&mut self) -> String {
        match self.provider.first_name(&mut self.rng) {
            Some(name) => name,
            None => self.pick(FALLBACK_FIRST_NAMES).to_string(),
        }
    }

    /// A family name.
    pub fn last_name(&mut self) -> String {
        match self.provider.last_name(&mut self.rng) {
            Some(name) => name,
            None => self.pick(FALLBACK_LAST_NAMES).to_string(),
        }
    }

    /// A Philippine mobile number.
    pub fn phone_number(&mut self) -> String {
        match self.provider.phone_number(&mut self.rng) {
            Some(number) => number,
            None => self.numerify("+63 9## ### ####"),
        }
    }

    /// A city name.
    pub fn city(&mut self) -> String {
        match self.provider.city(&mut self.rng) {
            Some(city) => city,
            None => self.pick(PH_CITIES).to_string(),
        }
    }

    /// A province name.
    pub fn province(&mut self) -> String {
        match self.provider.province(&mut self.rng) {
            Some(province) => province,
            None => self.pick(PH_PROVINCES).to_string(),
        }
    }

    /// A street name.
    pub fn street_name(&mut self) -> String {
        match self.provider.street_name(&mut self.rng) {
            Some(street) => street,
            None => self.pick(PH_STREETS).to_string(),
        }
    }

    /// A short sentence for notes columns.
    pub fn sentence(&mut self) -> String {
        match self.provider.sentence(&mut self.rng) {
            Some(sentence) => sentence,
            None => {
                let count = self.range(4..=8usize);
                let mut words: Vec<&str> = Vec::with_capacity(count);
                for _ in 0..count {
                    words.push(self.pick(FALLBACK_WORDS));
                }
                let mut sentence = words.join(" ");
                if let Some(first) = sentence.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                sentence.push('.');
                sentence
            }
        }
    }

    /// An occupation title.
    pub fn job_title(&mut self) -> String {
        match self.provider.job_title(&mut self.rng) {
            Some(title) => title,
            None => self.pick(FALLBACK_JOB_TITLES).to_string(),
        }
    }

    /// A login-style username fragment.
    pub fn username(&mut self) -> String {
        match self.provider.username(&mut self.rng) {
            Some(username) => username,
            None => {
                let word = self.pick(FALLBACK_WORDS);
                format!("{}{}", word, self.range(10..=99u32))
            }
        }
    }

    /// A small JSON object with `elements` entries of mixed scalar types,
    /// serialized to a string. Fills the free-form `additional_info`
    /// columns.
    pub fn json_blob(&mut self, elements: usize) -> String {
        let mut map = serde_json::Map::with_capacity(elements);
        for n in 0..elements {
            let key = format!("{}_{}", self.word(), n);
            let value = match self.range(0..4u8) {
                0 => serde_json::Value::from(self.sentence()),
                1 => serde_json::Value::from(self.range(0..=9999i64)),
                2 => serde_json::Value::from(self.range(0.0..100.0f64)),
                _ => serde_json::Value::from(self.chance(0.5)),
            };
            map.insert(key, value);
        }
        serde_json::Value::Object(map).to_string()
    }

    /// A single word.
    pub fn word(&mut self) -> String {
        match self.provider.word(&mut self.rng) {
            Some(word) => word,
            None => self.pick(FALLBACK_WORDS).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that declines everything, forcing every fallback path.
    #[derive(Debug)]
    struct DecliningProvider;

    impl ValueProvider for DecliningProvider {
        fn first_name(&self, _: &mut dyn rand::RngCore) -> Option<String> {
            None
        }
        fn last_name(&self, _: &mut dyn rand::RngCore) -> Option<String> {
            None
        }
        fn sentence(&self, _: &mut dyn rand::RngCore) -> Option<String> {
            None
        }
        fn job_title(&self, _: &mut dyn rand::RngCore) -> Option<String> {
            None
        }
        fn username(&self, _: &mut dyn rand::RngCore) -> Option<String> {
            None
        }
        fn word(&self, _: &mut dyn rand::RngCore) -> Option<String> {
            None
        }
    }

    fn declining(seed: u64) -> RandomSource {
        RandomSource::with_provider(ChaCha8Rng::seed_from_u64(seed), Box::new(DecliningProvider))
    }

    #[test]
    fn test_seeded_sources_replay_identically() {
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);

        for _ in 0..20 {
            assert_eq!(a.range(0..=1000i64), b.range(0..=1000i64));
        }
        assert_eq!(a.first_name(), b.first_name());
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.phone_number(), b.phone_number());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomSource::seeded(1);
        let mut b = RandomSource::seeded(2);

        let draws_a: Vec<i64> = (0..10).map(|_| a.range(0..=i64::MAX)).collect();
        let draws_b: Vec<i64> = (0..10).map(|_| b.range(0..=i64::MAX)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_numerify_replaces_only_hashes() {
        let mut src = RandomSource::seeded(5);
        let number = src.numerify("+63 9## ### ####");

        assert!(number.starts_with("+63 9"));
        assert!(!number.contains('#'));
        assert_eq!(number.len(), "+63 9## ### ####".len());
        assert!(number.chars().skip(4).all(|c| c.is_ascii_digit() || c == ' '));
    }

    #[test]
    fn test_fallbacks_cover_declined_kinds() {
        let mut src = declining(11);

        assert!(PH_CITIES.contains(&src.city().as_str()));
        assert!(PH_PROVINCES.contains(&src.province().as_str()));
        assert!(PH_STREETS.contains(&src.street_name().as_str()));
        assert!(FALLBACK_FIRST_NAMES.contains(&src.first_name().as_str()));
        assert!(FALLBACK_LAST_NAMES.contains(&src.last_name().as_str()));
        assert!(FALLBACK_JOB_TITLES.contains(&src.job_title().as_str()));
        assert!(!src.username().is_empty());
    }

    #[test]
    fn test_json_blob_parses_with_requested_entry_count() {
        let mut src = RandomSource::seeded(21);
        let blob = src.json_blob(3);

        let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(parsed.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_fallback_sentence_is_capitalized_and_terminated() {
        let mut src = declining(13);
        let sentence = src.sentence();

        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_chance_extremes() {
        let mut src = RandomSource::seeded(3);
        assert!(src.chance(1.0));
        assert!(!src.chance(0.0));
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut src = RandomSource::seeded(8);
        let mut items: Vec<u32> = (0..50).collect();
        src.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }
}
