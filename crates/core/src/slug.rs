//! URL slug generation for courses and categories.

use rand::Rng;

/// Characters used for the random uniqueness suffix.
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 6;

/// Convert a title into a URL-friendly slug with a short random suffix.
///
/// Lowercases, collapses any run of non-alphanumeric characters into a
/// single hyphen, and appends a 6-character random suffix so repeated
/// titles still produce unique slugs.
pub fn generate_slug(title: &str) -> String {
    let mut base = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            base.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            base.push('-');
            last_was_hyphen = true;
        }
    }
    while base.ends_with('-') {
        base.pop();
    }

    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();

    if base.is_empty() {
        suffix
    } else {
        format!("{base}-{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_and_appends_suffix() {
        let slug = generate_slug("Intro to Rust: Ownership & Borrowing");
        let (base, suffix) = slug.rsplit_once('-').unwrap();
        assert_eq!(base, "intro-to-rust-ownership-borrowing");
        assert_eq!(suffix.len(), SUFFIX_LEN);
    }

    #[test]
    fn collapses_punctuation_runs() {
        let slug = generate_slug("  C++ --- for?? Beginners!  ");
        assert!(slug.starts_with("c-for-beginners-"));
    }

    #[test]
    fn same_title_gets_distinct_slugs() {
        let a = generate_slug("Databases");
        let b = generate_slug("Databases");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_title_still_produces_a_slug() {
        let slug = generate_slug("!!!");
        assert_eq!(slug.len(), SUFFIX_LEN);
    }
}
