//! Long free-text descriptions for heavy payloads.

use crate::vocabulary::{pick, ADJECTIVES};
use rand::Rng;

const LOREM_SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Generate a description of `sentences` lorem ipsum sentences, each
/// followed by a random adjective, joined with single spaces.
///
/// With 100 sentences the result is around 6 KB.
pub fn generate_description<R: Rng>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| format!("{LOREM_SENTENCE} {}", pick(rng, ADJECTIVES)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_description() {
        let mut rng = StdRng::seed_from_u64(42);
        let description = generate_description(&mut rng, 100);

        assert_eq!(description.matches(LOREM_SENTENCE).count(), 100);
        assert!(description.len() > 5000, "only {} bytes", description.len());
        assert!(!description.ends_with(' '));
    }

    #[test]
    fn test_single_sentence() {
        let mut rng = StdRng::seed_from_u64(42);
        let description = generate_description(&mut rng, 1);

        let adjective = description.strip_prefix(LOREM_SENTENCE).unwrap().trim();
        assert!(ADJECTIVES.contains(&adjective));
    }

    #[test]
    fn test_zero_sentences() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate_description(&mut rng, 0).is_empty());
    }
}
