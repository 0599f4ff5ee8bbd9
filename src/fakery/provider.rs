//! Pluggable fake-value providers
//!
//! [`ValueProvider`] is the capability seam between the generators and the
//! faker library: each method returns `Some` when the provider can produce
//! that kind of value and `None` when it cannot, letting the caller fall
//! back to its own candidate lists. Methods take the RNG explicitly so the
//! provider stays stateless and the whole run remains replayable from one
//! seed.

use fake::faker::internet::raw::Username;
use fake::faker::job::raw::Title;
use fake::faker::lorem::raw::{Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;
use rand::RngCore;
use std::fmt;

/// A source of locale-flavoured fake values.
///
/// Every method is optional: a `None` means "this provider does not cover
/// that value kind", never an error. Defaults decline the kinds that are
/// inherently locale-specific.
pub trait ValueProvider: fmt::Debug {
    /// A plausible given name.
    fn first_name(&self, rng: &mut dyn RngCore) -> Option<String>;

    /// A plausible family name.
    fn last_name(&self, rng: &mut dyn RngCore) -> Option<String>;

    /// A short free-text sentence, for notes and remarks columns.
    fn sentence(&self, rng: &mut dyn RngCore) -> Option<String>;

    /// An occupation title.
    fn job_title(&self, rng: &mut dyn RngCore) -> Option<String>;

    /// A login-style username fragment.
    fn username(&self, rng: &mut dyn RngCore) -> Option<String>;

    /// A single lowercase word.
    fn word(&self, rng: &mut dyn RngCore) -> Option<String>;

    /// A Philippine mobile number. Declined by default.
    fn phone_number(&self, rng: &mut dyn RngCore) -> Option<String> {
        let _ = rng;
        None
    }

    /// A Philippine city name. Declined by default.
    fn city(&self, rng: &mut dyn RngCore) -> Option<String> {
        let _ = rng;
        None
    }

    /// A Philippine province name. Declined by default.
    fn province(&self, rng: &mut dyn RngCore) -> Option<String> {
        let _ = rng;
        None
    }

    /// A street name. Declined by default.
    fn street_name(&self, rng: &mut dyn RngCore) -> Option<String> {
        let _ = rng;
        None
    }
}

/// [`ValueProvider`] backed by the `fake` crate's English locale.
///
/// Covers names, sentences, job titles, usernames, and words. The
/// locale-specific kinds keep their declining defaults, so Philippine
/// geography and phone formats come from the fallback lists in
/// [`crate::fakery::RandomSource`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FakerProvider;

impl FakerProvider {
    /// Create the English-locale provider.
    pub fn new() -> Self {
        Self
    }
}

impl ValueProvider for FakerProvider {
    fn first_name(&self, rng: &mut dyn RngCore) -> Option<String> {
        Some(FirstName(EN).fake_with_rng(rng))
    }

    fn last_name(&self, rng: &mut dyn RngCore) -> Option<String> {
        Some(LastName(EN).fake_with_rng(rng))
    }

    fn sentence(&self, rng: &mut dyn RngCore) -> Option<String> {
        Some(Sentence(EN, 4..9).fake_with_rng(rng))
    }

    fn job_title(&self, rng: &mut dyn RngCore) -> Option<String> {
        Some(Title(EN).fake_with_rng(rng))
    }

    fn username(&self, rng: &mut dyn RngCore) -> Option<String> {
        Some(Username(EN).fake_with_rng(rng))
    }

    fn word(&self, rng: &mut dyn RngCore) -> Option<String> {
        Some(Word(EN).fake_with_rng(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_faker_provider_covers_core_kinds() {
        let provider = FakerProvider::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        assert!(provider.first_name(&mut rng).is_some_and(|s| !s.is_empty()));
        assert!(provider.last_name(&mut rng).is_some_and(|s| !s.is_empty()));
        assert!(provider.sentence(&mut rng).is_some_and(|s| !s.is_empty()));
        assert!(provider.job_title(&mut rng).is_some_and(|s| !s.is_empty()));
        assert!(provider.username(&mut rng).is_some_and(|s| !s.is_empty()));
        assert!(provider.word(&mut rng).is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn test_faker_provider_declines_locale_specific_kinds() {
        let provider = FakerProvider::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        assert!(provider.phone_number(&mut rng).is_none());
        assert!(provider.city(&mut rng).is_none());
        assert!(provider.province(&mut rng).is_none());
        assert!(provider.street_name(&mut rng).is_none());
    }

    #[test]
    fn test_faker_provider_is_deterministic_per_seed() {
        let provider = FakerProvider::new();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);

        assert_eq!(provider.first_name(&mut a), provider.first_name(&mut b));
        assert_eq!(provider.sentence(&mut a), provider.sentence(&mut b));
    }
}
