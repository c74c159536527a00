//! Falsification records.

crate::prelude!();

use split::Split;

/// A falsification: pumping a split's segment some number of times escapes the language.
///
/// `rep` is the smallest repetition count in `0..=max_rep` whose candidate the language
/// rejected. `0` means removing the segment entirely already breaks membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fail<'w> {
    /// The falsified split.
    pub split: Split<'w>,
    /// Smallest failing repetition count.
    pub rep: Rep,
}
impl<'w> Fail<'w> {
    /// Constructor.
    pub fn new(split: Split<'w>, rep: Rep) -> Self {
        Self { split, rep }
    }

    /// Rebuilds the rejected candidate string, `x yⁱ z` for the failing `i`.
    pub fn candidate(&self) -> String {
        self.split.pumped(self.rep)
    }

    /// Pretty one-line representation.
    pub fn pretty(&self, style: impl Style) -> String {
        format!(
            "{}, escapes at {} = {}: `{}`",
            self.split,
            style.bold("i"),
            style.bold(&self.rep.to_string()),
            style.red(&self.candidate()),
        )
    }
}

/// Falsifications for some splits, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fails<'w> {
    /// One record per falsified split.
    pub falsifications: Vec<Fail<'w>>,
}
impl<'w> Deref for Fails<'w> {
    type Target = Vec<Fail<'w>>;
    fn deref(&self) -> &Vec<Fail<'w>> {
        &self.falsifications
    }
}
impl<'w> DerefMut for Fails<'w> {
    fn deref_mut(&mut self) -> &mut Vec<Fail<'w>> {
        &mut self.falsifications
    }
}
impl<'w> Fails<'w> {
    /// Constructor.
    pub fn new() -> Self {
        Self {
            falsifications: Vec::new(),
        }
    }
}
