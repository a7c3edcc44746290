//! Five-field cron expression parser, validator, explainer and occurrence calculator.
#![deny(unsafe_code, missing_docs)]

//! This crate is intended to:
//! - parse classic five-field cron expressions keeping every field's syntax errors separately;
//! - validate each field independently and report which fields are invalid;
//! - calculate upcoming occurrences of the expression;
//! - describe the expression in plain English, fragment by fragment.
//!
//! _This is not a cron jobs scheduler or runner._ It's a pure library: no I/O, no background tasks,
//! every call is a deterministic function of its inputs.
//!
//! ## Cron expression format
//!
//! The expression has exactly five whitespace-separated fields: minutes, hours, days of month, months and days of week.
//!
//! | Field        | Allowed values           | Allowed special characters |
//! |--------------|--------------------------|----------------------------|
//! | Minutes      | 0-59                     | * , - /                    |
//! | Hours        | 0-23                     | * , - /                    |
//! | Day of Month | 1-31                     | * , - /                    |
//! | Month        | 1-12 or JAN-DEC          | * , - /                    |
//! | Day of Week  | 0-7 or SUN-SAT (0 = 7)   | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`, wrapping ranges like `5-1` are invalid;
//! - `/` - repeating values: `*/12` steps from the field's minimum, `30-59/2` from the range start,
//!   `10/5` from `10` up to the field's maximum.
//!
//! Aliases are case-insensitive. If both day of month and day of week are restricted,
//! the expression fires when _any_ of them matches, i.e. `0 0 1 * 1` fires on the 1st and on every Monday.
//!
//! ## How to use
//!
//! - [`CronExpression::parse()`] splits the source into fields, failing only if there aren't exactly five of them;
//! - [`CronExpression::validate()`] (or [`validate_str()`]) reports invalid fields;
//! - [`CronExpression::schedule()`] compiles a valid expression into a [`Schedule`] to calculate occurrences;
//! - [`CronExpression::explain()`] renders the human-readable [`Explanation`].
//!
//! ### Example with `next_occurrence`
//! ```rust
//! use chrono::NaiveDate;
//! use cron_lens::{CronExpression, Result};
//!
//! fn next() -> Result<()> {
//!     let expression = CronExpression::parse("58 5 8 11 *")?;
//!     let after = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//!     let next = expression.next_occurrence(&after)?;
//!     assert_eq!(next.to_string(), "2024-11-08 05:58:00");
//!
//!     Ok(())
//! }
//! # next().unwrap();
//! ```
//!
//! ### Example with validation
//! ```rust
//! use cron_lens::validate_str;
//!
//! let result = validate_str("60 0 1 1 *");
//! assert!(!result.is_valid());
//! assert_eq!(result.invalid_fields().into_iter().collect::<Vec<_>>(), vec![0]);
//!
//! let result = validate_str("* * * *");
//! assert!(result.is_structural());
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::NaiveDate;
//! use cron_lens::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule: Schedule = "*/15 9-17 * * mon-fri".parse::<cron_lens::CronExpression>()?.schedule()?;
//!     let after = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//!     // Get the next 10 occurrences.
//!     schedule.iter(&after).take(10).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`CronExpression`].

/// Crate specific Error implementation.
pub mod error;
/// Human-readable description of an expression.
pub mod explain;
/// Expression parser: fields, terms and the date to expression conversion.
pub mod expression;
/// Static grammar of the five fields.
pub mod field;
pub mod presets;
/// Occurrence calculator.
pub mod schedule;
mod series;
mod utils;
/// Per-field validation.
pub mod validation;

// Re-export of public entities.
pub use error::CronError;
pub use explain::{Explanation, Fragment};
pub use expression::{CronExpression, FieldValue, StepBase, Term};
pub use field::{FieldKind, FieldSpec, FIELD_SPECS};
pub use presets::{preset, Preset, PRESETS};
pub use schedule::{Schedule, DEFAULT_SEARCH_HORIZON};
pub use validation::{validate, validate_str, ValidationResult};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
