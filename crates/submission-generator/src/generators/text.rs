//! Text-like answer generators: names, emails, URLs and phone numbers.

use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::{Word, Words};
use fake::faker::name::en::Name;
use fake::Fake;
use form_schema::AnswerValue;
use rand::Rng;
use std::collections::HashSet;
use tracing::warn;

/// Answer used for every `phone_number` field.
pub const PHONE_NUMBER: &str = "FR+33749119783";

/// Number of fresh emails drawn before falling back to a `+N` suffix.
pub const MAX_UNIQUE_ATTEMPTS: usize = 10_000;

/// Generate a person's full name.
pub fn generate_name<R: Rng>(rng: &mut R) -> AnswerValue {
    AnswerValue::Text(Name().fake_with_rng(rng))
}

fn fake_email<R: Rng>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

/// Generate an email address not present in `seen`, and record it.
pub fn generate_unique_email<R: Rng>(rng: &mut R, seen: &mut HashSet<String>) -> AnswerValue {
    let mut email = fake_email(rng);
    for _ in 1..MAX_UNIQUE_ATTEMPTS {
        if !seen.contains(&email) {
            break;
        }
        email = fake_email(rng);
    }

    if seen.contains(&email) {
        email = disambiguate_email(&email, seen);
        warn!(
            "Exhausted {} attempts for a unique email, using '{}'",
            MAX_UNIQUE_ATTEMPTS, email
        );
    }

    seen.insert(email.clone());
    AnswerValue::Text(email)
}

/// Add the smallest `+N` suffix to the local part of `email` that is not in `seen`.
fn disambiguate_email(email: &str, seen: &HashSet<String>) -> String {
    let (local, domain) = email.split_once('@').unwrap_or((email, "example.com"));
    (1usize..)
        .map(|suffix| format!("{local}+{suffix}@{domain}"))
        .find(|candidate| !seen.contains(candidate))
        .unwrap_or_else(|| format!("{local}+{}@{domain}", seen.len() + 1))
}

/// Generate a web address.
///
/// Produces either `http://www.<domain>/` or `https://<domain>/<slug>`.
pub fn generate_url<R: Rng>(rng: &mut R) -> AnswerValue {
    let word: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    let domain = format!("{}.{}", word.to_lowercase(), suffix);

    let url = if rng.gen_bool(0.5) {
        format!("http://www.{domain}/")
    } else {
        let words: Vec<String> = Words(1..4).fake_with_rng(rng);
        format!("https://{domain}/{}", words.join("-").to_lowercase())
    };
    AnswerValue::Text(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_name() {
        let mut rng = StdRng::seed_from_u64(42);

        let name = generate_name(&mut rng);
        let name = name.as_str().expect("Expected Text value");
        assert!(!name.trim().is_empty());
    }

    #[test]
    fn test_generate_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..20 {
            let email = generate_unique_email(&mut rng, &mut seen);
            let email = email.as_str().unwrap();
            let (local, domain) = email.split_once('@').expect("Expected '@' in email");
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
        }
    }

    #[test]
    fn test_generate_unique_email() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            generate_unique_email(&mut rng, &mut seen);
        }
        assert_eq!(seen.len(), 500);
    }

    #[test]
    fn test_unique_email_records_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        let email = generate_unique_email(&mut rng, &mut seen);
        assert!(seen.contains(email.as_str().unwrap()));
    }

    #[test]
    fn test_disambiguate_email_skips_taken_suffixes() {
        let seen: HashSet<String> = ["ada@example.com", "ada+1@example.com"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(
            disambiguate_email("ada@example.com", &seen),
            "ada+2@example.com"
        );
        assert_eq!(
            disambiguate_email("bob@example.org", &seen),
            "bob+1@example.org"
        );
    }

    #[test]
    fn test_disambiguate_email_without_domain() {
        let seen = HashSet::new();
        assert_eq!(disambiguate_email("nobody", &seen), "nobody+1@example.com");
    }

    #[test]
    fn test_generate_url() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let url = generate_url(&mut rng);
            let url = url.as_str().unwrap();
            assert!(
                url.starts_with("http://www.") || url.starts_with("https://"),
                "Unexpected url {url}"
            );
            assert!(!url.contains(' '));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(generate_name(&mut rng1), generate_name(&mut rng2));
        assert_eq!(generate_url(&mut rng1), generate_url(&mut rng2));
    }
}
