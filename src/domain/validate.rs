//! Field constraint checking applied before every write
//!
//! Each entity declares its constraints as `LengthRule` constants and
//! implements [`Validate`] by running them. A failed check reports
//! every violated field in one message, not just the first.

use crate::error::{NewsdeskError, Result};

/// Declarative length constraint for one string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub field: &'static str,
    pub min: usize,
    pub max: usize,
}

impl LengthRule {
    pub const fn new(field: &'static str, min: usize, max: usize) -> Self {
        LengthRule { field, min, max }
    }

    /// Check a field value, appending one message per violation.
    pub fn check(&self, value: &str, violations: &mut Vec<String>) {
        if value.is_empty() {
            violations.push(format!("{}: must not be empty", self.field));
            return;
        }

        // Counted in characters, not bytes
        let length = value.chars().count();

        if length < self.min {
            violations.push(format!(
                "{}: must be at least {} characters",
                self.field, self.min
            ));
        }
        if length > self.max {
            violations.push(format!(
                "{}: must be no more than {} characters",
                self.field, self.max
            ));
        }
    }
}

/// Constraint gate run on create and update, never on read or delete.
pub trait Validate {
    /// Append a message for every violated constraint.
    fn collect_violations(&self, violations: &mut Vec<String>);

    /// Pass silently, or fail with every violation joined into one message.
    fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        self.collect_violations(&mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(NewsdeskError::ValidationFailed(violations.join(", ")))
        }
    }
}
