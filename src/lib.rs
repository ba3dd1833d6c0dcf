//! Password strength rating and password generation library
//!
//! Rates a password against five criteria (length, digits, mixed case,
//! special characters, common password), 20 points each, and generates
//! random passwords with a guaranteed uppercase and special character.
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-check` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_check::{Blacklist, evaluate_password_strength, generate_password};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! // A missing wordlist only disables the common-password check
//! let blacklist = Blacklist::load_or_empty("topPasswords.txt");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password, Some(&blacklist));
//! println!("Password Rating: {}", evaluation.score());
//!
//! let generated = generate_password(None).expect("random length is always valid");
//! println!("Your New Password is: {}", generated.expose_secret());
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod generator;
mod menu;
mod sections;
mod types;

// Public API
pub use blacklist::{Blacklist, BlacklistError, CommonPasswords, DEFAULT_BLACKLIST_PATH};
pub use evaluator::{evaluate_password_bytes, evaluate_password_strength};
pub use generator::{
    GeneratorError, MAX_GENERATED_LENGTH, MIN_GENERATED_LENGTH, RANDOM_LENGTH_RANGE, SPECIAL_CHARS,
    generate_password, generate_password_with,
};
pub use menu::Menu;
pub use types::{CRITERION_WEIGHT, Criterion, PasswordEvaluation, PasswordScore};
