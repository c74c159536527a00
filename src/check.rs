//! Types and helpers to check a witness against the pumping lemma.
//!
//! A check takes a language (a [`lang::Language`] capability), a pumping length `p`, a witness
//! that belongs to the language with at least `p` symbols, and a repetition bound. It enumerates
//! every legal split `w = x y z` and, for each, looks for the smallest repetition count whose
//! candidate `x yⁱ z` the language rejects.

crate::prelude!();

use lang::Language;
use split::{Split, Witness};

pub mod fails;

pub use fails::{Fail, Fails};


/// Default number of repetition counts tried per split.
///
/// A heuristic: in full generality the lemma quantifies over all non-negative repetition counts,
/// which the search intentionally bounds for tractability. Callers can always pass a larger
/// bound to [`Checker::new`].
pub const DEFAULT_MAX_REP: Rep = 3;

/// Aggregates splits that survived pumping and splits that have been falsified.
///
/// A split "has been falsified" if some repetition count in `0..=max_rep` produced a candidate
/// outside the language; it "survived" if every tested count stayed inside. The check's verdict
/// is [`all_falsified`]: when every split breaks, the lemma is violated everywhere, which is
/// evidence (bounded by the repetition counts tested) that the language is not regular.
///
/// [`all_falsified`]: Self::all_falsified
#[derive(Debug, Clone)]
pub struct CheckRes<'w> {
    /// Splits for which every tested repetition count stayed in the language.
    pub survivors: Vec<Split<'w>>,
    /// Falsifications, one per falsified split, in enumeration order.
    pub fails: Fails<'w>,
}
impl<'w> CheckRes<'w> {
    /// Constructor, no survivors and no falsifications.
    pub fn new() -> Self {
        Self {
            survivors: Vec::new(),
            fails: Fails::new(),
        }
    }

    /// True if every split has been falsified.
    ///
    /// Equivalently: the falsification list holds exactly one record per enumerated split.
    pub fn all_falsified(&self) -> bool {
        self.survivors.is_empty() && !self.fails.is_empty()
    }
    /// True if some splits have been falsified.
    pub fn has_falsifications(&self) -> bool {
        !self.fails.is_empty()
    }

    /// Registers a falsification at the smallest failing repetition count.
    pub fn register_falsification(&mut self, split: Split<'w>, rep: Rep) {
        self.fails.push(Fail::new(split, rep))
    }
    /// Registers a split that survived all tested repetition counts.
    pub fn register_survivor(&mut self, split: Split<'w>) {
        self.survivors.push(split)
    }
}

/// Pumping-lemma checker for one (language, pumping length, witness) instance.
///
/// Precondition validation happens in [`new`]: a constructed checker always describes a legal
/// instance, and [`check`] itself cannot fail. The checker holds no state across calls and
/// invokes the language on nothing but the witness and the candidate strings.
///
/// [`new`]: Self::new
/// [`check`]: Self::check
#[derive(Debug)]
pub struct Checker<'a, L> {
    /// Membership capability, only ever invoked, never inspected.
    lang: &'a L,
    /// Pumping length, at least `1`.
    p: usize,
    /// Witness string, belongs to the language and at least `p` symbols long.
    wit: &'a Witness,
    /// Bound on the repetition counts tried per split.
    max_rep: Rep,
}
impl<'a, L> Checker<'a, L>
where
    L: Language,
{
    /// Constructor, checks the lemma's preconditions.
    ///
    /// # Errors
    ///
    /// - when `p` is zero;
    /// - when the witness does not belong to the language;
    /// - when the witness is shorter than `p` symbols.
    pub fn new(lang: &'a L, p: usize, wit: &'a Witness, max_rep: Rep) -> Res<Self> {
        if p == 0 {
            bail!(ErrorKind::Precondition(
                "pumping length must be a positive integer".into()
            ))
        }
        if !lang.contains(wit.as_str()) {
            bail!(ErrorKind::Precondition(
                "witness string does not belong to the language".into()
            ))
        }
        if wit.len() < p {
            bail!(ErrorKind::Precondition(format!(
                "witness string is shorter than the pumping length ({} < {})",
                wit.len(),
                p,
            )))
        }
        Ok(Self {
            lang,
            p,
            wit,
            max_rep,
        })
    }

    /// Runs the search over every split of the witness.
    ///
    /// Splits are enumerated in increasing `x_end` then increasing `y_end` order. Each one is
    /// either falsified at its smallest failing repetition count or registered as a survivor.
    /// The enumeration never stops early: even once some split survives (making the verdict
    /// false), the remaining splits are still tested so that the falsification list is complete.
    pub fn check(&self) -> CheckRes<'a> {
        let mut res = CheckRes::new();
        for split in self.wit.splits(self.p) {
            match self.falsify(&split) {
                Some(rep) => res.register_falsification(split, rep),
                None => res.register_survivor(split),
            }
        }
        res
    }

    /// Smallest repetition count that pumps `split` out of the language, if any.
    ///
    /// Tries `0..=max_rep` in increasing order and stops at the first rejected candidate:
    /// larger counts are not explored once one fails.
    fn falsify(&self, split: &Split<'a>) -> Option<Rep> {
        for rep in 0..=self.max_rep {
            let candidate = split.pumped(rep);
            if !self.lang.contains(&candidate) {
                return Some(rep);
            }
        }
        None
    }
}
