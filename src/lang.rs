//! Language membership predicates.
//!
//! The checker never owns a language: it is handed a [`Language`], the membership-test
//! capability, and only ever invokes [`Language::contains`]. Any closure `Fn(&str) -> bool` is a
//! language. The types below are the built-in catalog used by the shell and the tests; the
//! checker itself never names them.

crate::prelude!();


/// A language over strings, given by its membership test.
///
/// Implementations must behave as pure functions of their input: the checker assumes
/// `contains` is side-effect-free and terminating, and provides no timeout.
pub trait Language {
    /// True if `word` belongs to the language.
    fn contains(&self, word: &str) -> bool;
}

impl<F> Language for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

/// The language `{ aⁿbⁿ | n ≥ 0 }`.
///
/// The canonical pumping-lemma example, and the shell's default language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnBn;
impl Language for AnBn {
    fn contains(&self, word: &str) -> bool {
        let a_s = word.chars().take_while(|c| *c == 'a').count();
        let b_s = word.chars().skip(a_s).take_while(|c| *c == 'b').count();
        a_s == b_s && word.chars().count() == a_s + b_s
    }
}
impl fmt::Display for AnBn {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        "{ a^n b^n | n ≥ 0 }".fmt(fmt)
    }
}

/// The language `{ aᵖ | p prime }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeAs;
impl Language for PrimeAs {
    fn contains(&self, word: &str) -> bool {
        word.chars().all(|c| c == 'a') && is_prime(word.chars().count())
    }
}
impl fmt::Display for PrimeAs {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        "{ a^p | p prime }".fmt(fmt)
    }
}

/// The language of all strings.
///
/// Nothing can ever be pumped out of it, so every split survives every repetition count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigmaStar;
impl Language for SigmaStar {
    fn contains(&self, _word: &str) -> bool {
        true
    }
}
impl fmt::Display for SigmaStar {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        "Σ*".fmt(fmt)
    }
}

/// Primality by trial division, plenty for witness-sized inputs.
fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1
    }
    true
}
