//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretBox, SecretString};

use crate::blacklist::CommonPasswords;
use crate::sections::{
    Section, blacklist_section, digits_section, length_section, mixed_case_section,
    special_chars_section,
};
use crate::types::{Criterion, PasswordEvaluation};

/// Evaluates password strength against the five criteria.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `common` - Optional list of known-weak passwords
///
/// # Returns
/// A `PasswordEvaluation` holding one flag per criterion. Its score is
/// 20 points per satisfied criterion.
pub fn evaluate_password_strength(
    password: &SecretString,
    common: Option<&dyn CommonPasswords>,
) -> PasswordEvaluation {
    evaluate_bytes(password.expose_secret().as_bytes(), common)
}

/// Evaluates a password given as raw bytes, e.g. read from a terminal that
/// does not send UTF-8. Criteria are checked byte by byte, so the result
/// matches [`evaluate_password_strength`] whenever the bytes are UTF-8.
pub fn evaluate_password_bytes(
    password: &SecretBox<[u8]>,
    common: Option<&dyn CommonPasswords>,
) -> PasswordEvaluation {
    evaluate_bytes(password.expose_secret(), common)
}

fn evaluate_bytes(password: &[u8], common: Option<&dyn CommonPasswords>) -> PasswordEvaluation {
    let mut evaluation = PasswordEvaluation::default();

    // Orchestrator: execute sections in feedback order
    let sections: [(Criterion, Section); 4] = [
        (Criterion::Length, length_section),
        (Criterion::Digits, digits_section),
        (Criterion::MixedCase, mixed_case_section),
        (Criterion::SpecialChars, special_chars_section),
    ];

    for (criterion, section_fn) in sections {
        evaluation.record(criterion, section_fn(password));
    }
    evaluation.record(Criterion::Common, blacklist_section(password, common));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score().value(),
        is_common = evaluation.is_common,
        "password evaluated"
    );

    evaluation
}
