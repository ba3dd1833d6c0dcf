//! Evaluation result types.

use std::fmt;

/// Points awarded for each satisfied criterion.
pub const CRITERION_WEIGHT: u8 = 20;

/// The five strength criteria, in feedback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Digits,
    MixedCase,
    SpecialChars,
    Common,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Digits,
        Criterion::MixedCase,
        Criterion::SpecialChars,
        Criterion::Common,
    ];

    /// Human-readable question printed in front of the Yes/No answer.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "Contains at least 8 characters",
            Criterion::Digits => "Has at least one digit",
            Criterion::MixedCase => "Has both upper and lower case letters",
            Criterion::SpecialChars => "Has at least one special character",
            Criterion::Common => "Is a common password",
        }
    }
}

/// Strength score in `0..=100`, always a multiple of [`CRITERION_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: PasswordScore = PasswordScore(100);

    /// Builds a score from the number of satisfied criteria.
    pub fn from_satisfied(count: usize) -> Self {
        let count = count.min(Criterion::ALL.len()) as u8;
        PasswordScore(count * CRITERION_WEIGHT)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Outcome of evaluating one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub is_long: bool,
    pub has_digits: bool,
    pub has_mixed_case: bool,
    pub has_special_chars: bool,
    pub is_common: bool,
}

impl PasswordEvaluation {
    /// Returns the flag recorded for `criterion`.
    pub fn passed(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.is_long,
            Criterion::Digits => self.has_digits,
            Criterion::MixedCase => self.has_mixed_case,
            Criterion::SpecialChars => self.has_special_chars,
            Criterion::Common => self.is_common,
        }
    }

    pub(crate) fn record(&mut self, criterion: Criterion, passed: bool) {
        let flag = match criterion {
            Criterion::Length => &mut self.is_long,
            Criterion::Digits => &mut self.has_digits,
            Criterion::MixedCase => &mut self.has_mixed_case,
            Criterion::SpecialChars => &mut self.has_special_chars,
            Criterion::Common => &mut self.is_common,
        };
        *flag = passed;
    }

    pub fn score(&self) -> PasswordScore {
        let satisfied = Criterion::ALL.iter().filter(|&&c| self.passed(c)).count();
        PasswordScore::from_satisfied(satisfied)
    }

    /// Per-criterion feedback lines, e.g. `Has at least one digit: Yes`.
    pub fn feedback(&self) -> impl Iterator<Item = String> + '_ {
        Criterion::ALL.into_iter().map(move |c| {
            let answer = if self.passed(c) { "Yes" } else { "No" };
            format!("{}: {}", c.label(), answer)
        })
    }
}
