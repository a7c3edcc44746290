use crate::{
    expression::{CronExpression, FieldValue},
    field::FieldKind,
    CronError, Result,
};
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of expression validation: failed fields with their reasons.
///
/// Empty result means the expression is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldKind, CronError>,
    structural: bool,
}

impl ValidationResult {
    /// Result of the expression with the wrong number of fields: every field is marked as failed.
    pub fn structural(error: CronError) -> Self {
        Self {
            errors: FieldKind::ALL.into_iter().map(|kind| (kind, error.clone())).collect(),
            structural: true,
        }
    }

    /// Returns `true` if no field failed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if the source couldn't be split into five fields at all.
    #[inline]
    pub fn is_structural(&self) -> bool {
        self.structural
    }

    /// Indices (`0..5`) of the failed fields in ascending order.
    pub fn invalid_fields(&self) -> BTreeSet<usize> {
        self.errors.keys().map(|kind| kind.index()).collect()
    }

    /// Returns `true` if the field at `index` failed.
    pub fn contains(&self, index: usize) -> bool {
        FieldKind::from_index(index).is_some_and(|kind| self.errors.contains_key(&kind))
    }

    /// Reason of the field failure, if it failed.
    pub fn error(&self, kind: FieldKind) -> Option<&CronError> {
        self.errors.get(&kind)
    }

    /// Failed fields with their reasons, in expression order.
    pub fn errors(&self) -> impl Iterator<Item = (FieldKind, &CronError)> {
        self.errors.iter().map(|(kind, error)| (*kind, error))
    }

    /// Converts the result into [`CronError::InvalidFields`] if anything failed.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CronError::InvalidFields(self.invalid_fields().into_iter().collect()))
        }
    }
}

/// Validates every field of the parsed expression independently.
pub fn validate(expression: &CronExpression) -> ValidationResult {
    let errors = expression
        .fields()
        .iter()
        .filter_map(|field| validate_field(field).err().map(|error| (field.kind(), error)))
        .collect();

    ValidationResult {
        errors,
        structural: false,
    }
}

/// Parses and validates raw expression text.
///
/// Wrong number of fields yields the [structural](ValidationResult::is_structural) result.
pub fn validate_str(source: &str) -> ValidationResult {
    match CronExpression::parse(source) {
        Ok(expression) => validate(&expression),
        Err(error) => ValidationResult::structural(error),
    }
}

/// Checks allowed characters, term syntax and bounds of a single field.
pub fn validate_field(field: &FieldValue) -> Result<()> {
    let spec = field.spec();
    let allowed = |c: char| {
        c.is_ascii_digit() || matches!(c, '*' | ',' | '/' | '-') || (spec.has_aliases() && c.is_ascii_alphabetic())
    };
    if !field.source().chars().all(allowed) {
        return Err(CronError::InvalidCharacters(field.source().to_owned()));
    }

    field.terms()?.iter().try_for_each(|term| term.check_bounds(spec))
}
