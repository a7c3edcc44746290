use crate::{
    explain::Explanation,
    field::{self, FieldKind, FieldSpec, FieldValueType},
    schedule::Schedule,
    series::SeriesWithStep,
    validation::{self, ValidationResult},
    CronError, Result,
};
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::{collections::BTreeSet, fmt::Display, str::FromStr};

/// Domain walked by a step term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepBase {
    /// `*/n`: whole field range, anchored at the field's minimum.
    Wildcard,
    /// `a-b/n`: anchored at `a`, never exceeds `b`.
    Range(FieldValueType, FieldValueType),
    /// `a/n`: anchored at `a`, walks up to the field's maximum.
    From(FieldValueType),
}

/// Single comma-separated primitive of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// `*`
    Wildcard,
    /// `5`
    Single(FieldValueType),
    /// `1-5`
    Range(FieldValueType, FieldValueType),
    /// `*/15`, `1-30/5` or `5/15`
    Step(StepBase, FieldValueType),
}

impl Term {
    /// Classifies one sub-term of the field. Rejects malformed syntax only, bounds are left to the validator.
    pub fn parse(spec: &FieldSpec, input: &str) -> Result<Self> {
        if input == "*" {
            Ok(Term::Wildcard)
        } else if let Some((base, step)) = input.split_once('/') {
            let malformed = || CronError::MalformedStep(input.to_owned());
            let interval = field::parse_number(step)
                .filter(|interval| *interval > 0)
                .ok_or_else(malformed)?;
            let base = if base == "*" {
                StepBase::Wildcard
            } else if let Some((start, end)) = base.split_once('-') {
                let start = spec.parse_value(start).ok_or_else(malformed)?;
                let end = spec.parse_value(end).ok_or_else(malformed)?;
                StepBase::Range(start, end)
            } else {
                StepBase::From(spec.parse_value(base).ok_or_else(malformed)?)
            };
            Ok(Term::Step(base, interval))
        } else if let Some((start, end)) = input.split_once('-') {
            let malformed = || CronError::MalformedRange(input.to_owned());
            let start = spec.parse_value(start).ok_or_else(malformed)?;
            let end = spec.parse_value(end).ok_or_else(malformed)?;
            Ok(Term::Range(start, end))
        } else {
            spec.parse_value(input)
                .map(Term::Single)
                .ok_or_else(|| CronError::MalformedValue(input.to_owned()))
        }
    }

    /// Checks the term against the field bounds.
    ///
    /// Ranges must not wrap around (`start <= end`), step intervals must fit into the field span.
    pub fn check_bounds(&self, spec: &FieldSpec) -> Result<()> {
        let in_bounds = |v: &FieldValueType| (spec.min..=spec.max).contains(v);
        let valid = match *self {
            Term::Wildcard => true,
            Term::Single(value) => in_bounds(&value),
            Term::Range(start, end) => in_bounds(&start) && in_bounds(&end) && start <= end,
            Term::Step(base, interval) => {
                let base_valid = match base {
                    StepBase::Wildcard => true,
                    StepBase::Range(start, end) => in_bounds(&start) && in_bounds(&end) && start <= end,
                    StepBase::From(start) => in_bounds(&start),
                };
                base_valid && (1..=spec.span()).contains(&interval)
            }
        };

        if valid {
            Ok(())
        } else {
            Err(CronError::OutOfBounds {
                field: spec.name,
                value: self.to_string(),
            })
        }
    }

    /// Iterates all values the term matches, in ascending order, without normalization.
    pub fn values(&self, spec: &FieldSpec) -> impl Iterator<Item = FieldValueType> {
        match *self {
            Term::Wildcard => SeriesWithStep::new(spec.min, spec.max, 1),
            Term::Single(value) => SeriesWithStep::single(value),
            Term::Range(start, end) => SeriesWithStep::new(start, end, 1),
            Term::Step(StepBase::Wildcard, interval) => SeriesWithStep::new(spec.min, spec.max, interval),
            Term::Step(StepBase::Range(start, end), interval) => SeriesWithStep::new(start, end, interval),
            Term::Step(StepBase::From(start), interval) => SeriesWithStep::new(start, spec.max, interval),
        }
    }
}

impl Display for StepBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepBase::Wildcard => write!(f, "*"),
            StepBase::Range(start, end) => write!(f, "{start}-{end}"),
            StepBase::From(start) => write!(f, "{start}"),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Wildcard => write!(f, "*"),
            Term::Single(value) => write!(f, "{value}"),
            Term::Range(start, end) => write!(f, "{start}-{end}"),
            Term::Step(base, interval) => write!(f, "{base}/{interval}"),
        }
    }
}

/// One field of an expression: its source token and the decomposed terms.
///
/// Malformed fields are kept with their error, so the rest of the expression still can be inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldValue {
    kind: FieldKind,
    source: String,
    terms: Result<Vec<Term>>,
}

impl FieldValue {
    /// Decomposes the `token` into comma-separated terms.
    pub fn parse(kind: FieldKind, token: &str) -> Self {
        let spec = kind.spec();
        let terms = token
            .split(',')
            .map(|term| Term::parse(spec, term))
            .collect::<Result<Vec<_>>>();

        Self {
            kind,
            source: token.to_owned(),
            terms,
        }
    }

    /// Builds a field from already classified terms.
    pub fn from_terms(kind: FieldKind, terms: Vec<Term>) -> Self {
        let source = join_terms(&terms);
        Self {
            kind,
            source,
            terms: Ok(terms),
        }
    }

    /// Field position.
    #[inline]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Field grammar.
    #[inline]
    pub fn spec(&self) -> &'static FieldSpec {
        self.kind.spec()
    }

    /// Source token as it was provided.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Decomposed terms, or the syntax error of the field.
    pub fn terms(&self) -> Result<&[Term]> {
        self.terms.as_deref().map_err(Clone::clone)
    }

    /// Returns `true` if the field is a bare `*`.
    pub fn is_wildcard(&self) -> bool {
        matches!(self.terms.as_deref(), Ok([Term::Wildcard]))
    }

    /// Union of all values matched by the terms, normalized (day of week `7` becomes `0`).
    pub fn values(&self) -> Result<BTreeSet<FieldValueType>> {
        let spec = self.spec();
        Ok(self
            .terms()?
            .iter()
            .flat_map(|term| term.values(spec))
            .map(|value| spec.normalize(value))
            .collect())
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.terms {
            Ok(terms) => write!(f, "{}", join_terms(terms)),
            Err(_) => write!(f, "{}", self.source),
        }
    }
}

/// Value of the field taken from `date`.
fn date_value(date: &NaiveDateTime, kind: FieldKind) -> FieldValueType {
    let value = match kind {
        FieldKind::Minute => date.minute(),
        FieldKind::Hour => date.hour(),
        FieldKind::DayOfMonth => date.day(),
        FieldKind::Month => date.month(),
        FieldKind::DayOfWeek => date.weekday().num_days_from_sunday(),
    };
    value as FieldValueType
}

fn join_terms(terms: &[Term]) -> String {
    terms.iter().map(|term| term.to_string()).collect::<Vec<_>>().join(",")
}

/// Parsed five-field cron expression: minute, hour, day of month, month and day of week.
///
/// For the expression format and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct CronExpression {
    fields: [FieldValue; 5],
}

impl CronExpression {
    /// Splits `source` into fields and decomposes each of them into terms.
    ///
    /// Returns [`CronError::Structural`] if the source doesn't consist of exactly five fields.
    /// Syntax errors inside fields don't fail parsing, use [`validate()`](Self::validate) to inspect them.
    pub fn parse(source: impl AsRef<str>) -> Result<Self> {
        let source = source.as_ref();
        let tokens: Vec<&str> = source.split_whitespace().collect();
        if tokens.len() != FieldKind::ALL.len() {
            return Err(CronError::Structural(source.to_owned()));
        }

        Ok(Self {
            fields: std::array::from_fn(|i| FieldValue::parse(FieldKind::ALL[i], tokens[i])),
        })
    }

    /// Builds `"m h d M *"` expression which fires at the provided date and time every year.
    pub fn at(date: &NaiveDateTime) -> Self {
        let fields = FieldKind::ALL.map(|kind| match kind {
            FieldKind::DayOfWeek => FieldValue::from_terms(kind, vec![Term::Wildcard]),
            _ => FieldValue::from_terms(kind, vec![Term::Single(date_value(date, kind))]),
        });

        Self { fields }
    }

    /// Expression with every field set to `*`.
    pub fn wildcard() -> Self {
        Self {
            fields: FieldKind::ALL.map(|kind| FieldValue::from_terms(kind, vec![Term::Wildcard])),
        }
    }

    /// Overwrites the concrete minute, hour, day of month and month fields of `template` from `date`.
    ///
    /// Fields which are a bare `*` in `template` stay wildcards.
    /// Day of week is always copied from `template` as is: its [source](FieldValue::source) is kept,
    /// while [`Display`] shows the canonical form, i.e. `mon,sun` is rendered as `1,0`.
    pub fn from_date(date: &NaiveDateTime, template: &CronExpression) -> Self {
        let fields = FieldKind::ALL.map(|kind| {
            let field = template.field(kind);
            if kind == FieldKind::DayOfWeek || field.is_wildcard() {
                field.clone()
            } else {
                FieldValue::from_terms(kind, vec![Term::Single(date_value(date, kind))])
            }
        });

        Self { fields }
    }

    /// All fields in the expression order.
    #[inline]
    pub fn fields(&self) -> &[FieldValue; 5] {
        &self.fields
    }

    /// Field by its kind.
    #[inline]
    pub fn field(&self, kind: FieldKind) -> &FieldValue {
        &self.fields[kind.index()]
    }

    /// Checks syntax and bounds of every field independently.
    #[inline]
    pub fn validate(&self) -> ValidationResult {
        validation::validate(self)
    }

    /// Returns `true` if every field is valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Compiles valid expression into [`Schedule`] to calculate occurrences.
    #[inline]
    pub fn schedule(&self) -> Result<Schedule> {
        Schedule::new(self)
    }

    /// Returns the first occurrence strictly after `after`.
    ///
    /// Fails with [`CronError::InvalidFields`] if expression isn't valid,
    /// or with [`CronError::NoOccurrenceFound`] if the search horizon is exhausted.
    pub fn next_occurrence(&self, after: &NaiveDateTime) -> Result<NaiveDateTime> {
        self.schedule()?.next_occurrence(after)
    }

    /// Returns up to `n` strictly increasing occurrences after `after`.
    ///
    /// The list is shorter than `n` if the search horizon was exhausted.
    pub fn next_n_occurrences(&self, after: &NaiveDateTime, n: usize) -> Result<Vec<NaiveDateTime>> {
        Ok(self.schedule()?.next_n_occurrences(after, n))
    }

    /// Renders a human-readable description of the expression.
    #[inline]
    pub fn explain(&self) -> Explanation {
        Explanation::new(self)
    }
}

impl From<CronExpression> for String {
    fn from(value: CronExpression) -> Self {
        value.to_string()
    }
}

impl From<&CronExpression> for String {
    fn from(value: &CronExpression) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CronExpression {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&String> for CronExpression {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for CronExpression {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for CronExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [minute, hour, dom, month, dow] = &self.fields;
        write!(f, "{minute} {hour} {dom} {month} {dow}")
    }
}
