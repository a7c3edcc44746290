use std::fmt::Display;

/// Numeric type of every field value.
pub type FieldValueType = u16;

/// Position of a field within a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    /// Minutes, `0-59`.
    Minute = 0,
    /// Hours, `0-23`.
    Hour = 1,
    /// Day of month, `1-31`.
    DayOfMonth = 2,
    /// Month, `1-12` or `JAN-DEC`.
    Month = 3,
    /// Day of week, `0-7` or `SUN-SAT`, both `0` and `7` are Sunday.
    DayOfWeek = 4,
}

impl FieldKind {
    /// All fields in the expression order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Zero-based position of the field within the expression.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Field at the provided position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Static grammar of the field.
    #[inline]
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self.index()]
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spec().name)
    }
}

/// Converts a string of decimal digits into a number, signs and spaces aren't allowed.
///
/// Numbers too big for [`FieldValueType`] saturate, so they fail the bounds check rather than the syntax one.
pub(crate) fn parse_number(input: &str) -> Option<FieldValueType> {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        Some(input.parse().unwrap_or(FieldValueType::MAX))
    } else {
        None
    }
}

/// Grammar of a single field: bounds and symbolic aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Field this grammar belongs to.
    pub kind: FieldKind,
    /// Name used in messages and explanations.
    pub name: &'static str,
    /// Short label for field pickers.
    pub label: &'static str,
    /// Minimal allowed value, inclusive.
    pub min: FieldValueType,
    /// Maximal allowed value, inclusive.
    pub max: FieldValueType,
    /// Symbolic names, the first one maps to `min`.
    pub aliases: &'static [&'static str],
}

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Grammar of all five fields in the expression order.
pub static FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec {
        kind: FieldKind::Minute,
        name: "minute",
        label: "minute",
        min: 0,
        max: 59,
        aliases: &[],
    },
    FieldSpec {
        kind: FieldKind::Hour,
        name: "hour",
        label: "hour",
        min: 0,
        max: 23,
        aliases: &[],
    },
    FieldSpec {
        kind: FieldKind::DayOfMonth,
        name: "day-of-month",
        label: "day (month)",
        min: 1,
        max: 31,
        aliases: &[],
    },
    FieldSpec {
        kind: FieldKind::Month,
        name: "month",
        label: "month",
        min: 1,
        max: 12,
        aliases: &MONTHS,
    },
    FieldSpec {
        kind: FieldKind::DayOfWeek,
        name: "day-of-week",
        label: "day (week)",
        min: 0,
        max: 7,
        aliases: &DAYS_OF_WEEK,
    },
];

impl FieldSpec {
    /// Number of distinct values in `min..=max`.
    #[inline]
    pub fn span(&self) -> FieldValueType {
        self.max - self.min + 1
    }

    /// Human-readable range of values, like `0-59`.
    pub fn range_text(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }

    /// Converts a decimal number or a case-insensitive alias into a value.
    ///
    /// Doesn't check bounds: out-of-range numbers are the validator's concern.
    pub fn parse_value(&self, input: &str) -> Option<FieldValueType> {
        parse_number(input).or_else(|| self.resolve_alias(input))
    }

    /// Resolves a symbolic name into its numeric value.
    pub fn resolve_alias(&self, input: &str) -> Option<FieldValueType> {
        self.aliases
            .iter()
            .position(|alias| alias.eq_ignore_ascii_case(input))
            .map(|i| i as FieldValueType + self.min)
    }

    /// Returns `true` if the field accepts symbolic names.
    #[inline]
    pub fn has_aliases(&self) -> bool {
        !self.aliases.is_empty()
    }

    /// Normalizes values with several representations, i.e. Sunday `7` becomes `0`.
    #[inline]
    pub fn normalize(&self, value: FieldValueType) -> FieldValueType {
        if self.kind == FieldKind::DayOfWeek && value == 7 {
            0
        } else {
            value
        }
    }
}
