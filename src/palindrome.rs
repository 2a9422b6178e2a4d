//! Palindrome checking that ignores punctuation, whitespace and case.

use rand::distributions::{Alphanumeric, Distribution};
use rand::Rng;

fn normalize(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns `true` if the alphanumeric characters of `text` read the same in both directions,
/// ignoring case. A text without any alphanumeric characters counts as a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    let chars = normalize(text);

    let mut rest = chars.as_slice();
    while let [first, inner @ .., last] = rest {
        if first != last {
            return false;
        }
        rest = inner;
    }

    true
}

/// A generated string and the verdict `is_palindrome` is expected to give for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub palindrome: bool,
}

/// Generates a random mixed-case ASCII letter string of up to `max_len` characters, a palindrome
/// or not with equal probability. Non-palindromes may be one character longer than `max_len`.
pub fn generate_candidate<R: Rng + ?Sized>(rng: &mut R, max_len: usize) -> Candidate {
    let len = rng.gen_range(1..=max_len.max(1));
    let palindrome = rng.gen_bool(0.5);

    let mut chars: Vec<char> = (0..len).map(|_| random_letter(rng)).collect();

    if palindrome {
        // Mirror the front half, flipping case on the way to keep it interesting.
        for i in 0..len / 2 {
            let mirrored = chars[i];
            chars[len - 1 - i] = if rng.gen_bool(0.5) {
                mirrored.to_ascii_uppercase()
            } else {
                mirrored.to_ascii_lowercase()
            };
        }
    } else {
        // Forcing the ends apart is enough, a single letter gets a different second one.
        let first = chars[0];
        let tail = random_letter_except(rng, first);
        if len == 1 {
            chars.push(tail);
        } else {
            chars[len - 1] = tail;
        }
    }

    Candidate {
        text: chars.into_iter().collect(),
        palindrome,
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    loop {
        let c = Alphanumeric.sample(rng) as char;
        if c.is_ascii_alphabetic() {
            return c;
        }
    }
}

fn random_letter_except<R: Rng + ?Sized>(rng: &mut R, other: char) -> char {
    loop {
        let c = random_letter(rng);
        if !c.eq_ignore_ascii_case(&other) {
            return c;
        }
    }
}
