//! Common imports throughout this project.

pub use std::{
    fmt,
    ops::{Deref, DerefMut},
};

pub use error_chain::bail;

pub use crate::{check, lang, split};

/// Repetition count for the pumped segment of a split.
///
/// In `x yⁱ z` this is `i`. A repetition count of `0` removes the segment entirely.
pub type Rep = usize;

error_chain::error_chain! {
    types {
        Error, ErrorKind, ResExt, Res;
    }

    foreign_links {
        Io(std::io::Error)
        /// I/O error.
        ;
    }

    errors {
        /// A pumping-lemma precondition violation.
        ///
        /// Raised before any split is enumerated: a check that fails this way produces no
        /// partial results.
        Precondition(msg: String) {
            description("precondition violation")
            display("precondition violated: {}", msg)
        }
    }
}

/// Text styling, decided by the caller.
///
/// The library never prints on its own. Pretty representations take a style so that the shell
/// (or anything else) chooses whether the output is colorized.
pub trait Style {
    /// Styles failure-ish text.
    fn red(&self, s: &str) -> String;
    /// Styles success-ish text.
    fn green(&self, s: &str) -> String;
    /// Styles emphasized text.
    fn bold(&self, s: &str) -> String;
    /// Underlines text.
    fn under(&self, s: &str) -> String;
}
impl<'a, T: Style> Style for &'a T {
    fn red(&self, s: &str) -> String {
        (*self).red(s)
    }
    fn green(&self, s: &str) -> String {
        (*self).green(s)
    }
    fn bold(&self, s: &str) -> String {
        (*self).bold(s)
    }
    fn under(&self, s: &str) -> String {
        (*self).under(s)
    }
}

/// Style that leaves text unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Plain;
impl Style for Plain {
    fn red(&self, s: &str) -> String {
        s.into()
    }
    fn green(&self, s: &str) -> String {
        s.into()
    }
    fn bold(&self, s: &str) -> String {
        s.into()
    }
    fn under(&self, s: &str) -> String {
        s.into()
    }
}
