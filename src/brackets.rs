//! Bracket balance checking for algebraic statements, and a random statement generator with a
//! known verdict for exercising the checker.

use rand::seq::SliceRandom;
use rand::Rng;

const OPENERS: [char; 3] = ['(', '[', '{'];
const CLOSERS: [char; 3] = [')', ']', '}'];
const BRACKETS: [char; 6] = ['(', '[', '{', ')', ']', '}'];

fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

#[inline]
fn is_closer(c: char) -> bool {
    CLOSERS.contains(&c)
}

/// Returns `true` if every `)`, `]` and `}` in `text` closes the most recently opened, still open
/// bracket of the same kind and nothing is left open. Other characters are ignored.
pub fn is_balanced(text: &str) -> bool {
    let bracket_count = text.chars().filter(|c| BRACKETS.contains(c)).count();
    if bracket_count % 2 != 0 {
        return false;
    }

    let mut expected_closers = Vec::with_capacity(bracket_count / 2);
    for c in text.chars() {
        if let Some(closer) = closer_for(c) {
            expected_closers.push(closer);
        } else if is_closer(c) && expected_closers.pop() != Some(c) {
            return false;
        }
    }

    expected_closers.is_empty()
}

/// A generated statement and the verdict `is_balanced` is expected to give for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub balanced: bool,
}

/// Generates a random bracket statement of up to `max_len` characters, balanced or not with
/// equal probability. Balanced statements always hold at least one pair.
///
/// The expected verdict is established by construction, never by calling [`is_balanced`].
pub fn generate_statement<R: Rng + ?Sized>(rng: &mut R, max_len: usize) -> Statement {
    let len = rng.gen_range(1..=max_len.max(1));

    if rng.gen_bool(0.5) {
        Statement {
            text: balanced_statement(rng, len),
            balanced: true,
        }
    } else {
        Statement {
            text: unbalanced_statement(rng, len),
            balanced: false,
        }
    }
}

/// Random walk that opens or closes brackets, `len` is rounded down to an even number of at
/// least two characters.
fn balanced_statement<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let pairs = (len / 2).max(1);
    let mut text = String::with_capacity(pairs * 2);
    let mut open = Vec::with_capacity(pairs);
    let mut opens_left = pairs;

    while opens_left > 0 || !open.is_empty() {
        let must_open = open.is_empty();
        if opens_left > 0 && (must_open || rng.gen_bool(0.5)) {
            let opener = *OPENERS.choose(rng).unwrap_or(&'(');
            text.push(opener);
            open.push(opener);
            opens_left -= 1;
        } else if let Some(closer) = open.pop().and_then(closer_for) {
            text.push(closer);
        }
    }

    text
}

/// Random brackets, made provably unbalanced by leaving at least one bracket kind with unequal
/// open and close counts.
fn unbalanced_statement<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut chars: Vec<char> = (0..len)
        .map(|_| *BRACKETS.choose(rng).unwrap_or(&'('))
        .collect();

    let counts_even_out = OPENERS.iter().zip(CLOSERS.iter()).all(|(open, close)| {
        let opened = chars.iter().filter(|c| *c == open).count();
        let closed = chars.iter().filter(|c| *c == close).count();
        opened == closed
    });

    if counts_even_out {
        // Could be balanced, removing any one bracket tips its kind out of equilibrium.
        if chars.is_empty() {
            chars.push(*BRACKETS.choose(rng).unwrap_or(&'('));
        } else {
            let idx = rng.gen_range(0..chars.len());
            chars.remove(idx);
        }
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn balanced() {
        assert!(is_balanced(""));
        assert!(is_balanced("()"));
        assert!(is_balanced("{[()]}"));
        assert!(is_balanced("()[]{}"));
        assert!(is_balanced("(a + b) * [c - {d / e}]"));
        assert!(is_balanced("x"));
    }

    #[test]
    fn unbalanced() {
        assert!(!is_balanced("("));
        assert!(!is_balanced(")("));
        assert!(!is_balanced("(]"));
        assert!(!is_balanced("([)]"));
        assert!(!is_balanced("(()"));
        assert!(!is_balanced("))(("));
        assert!(!is_balanced("{a + b"));
    }

    #[test]
    fn generator_agrees_with_checker() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut seen = [false; 2];

        for _ in 0..2_000 {
            let statement = generate_statement(&mut rng, 12);
            assert!(!statement.text.is_empty());
            assert!(statement.text.chars().count() <= 12);
            assert_eq!(
                is_balanced(&statement.text),
                statement.balanced,
                "{statement:?}"
            );
            seen[statement.balanced as usize] = true;
        }

        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn generator_handles_tiny_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let statement = generate_statement(&mut rng, 0);
            assert_eq!(is_balanced(&statement.text), statement.balanced);
        }
    }
}
