//! Conventional commit linting
//!
//! The catalog names the rules, the rule functions check them, and the
//! engine runs them in order against a message.

pub mod catalog;
pub mod engine;
pub mod header;
pub mod patterns;
pub mod rules;
pub mod types;

pub use catalog::RuleDescriptor;
pub use engine::Validator;
pub use header::{HeaderParts, parse_header};
pub use patterns::Patterns;
pub use types::ValidationResult;
