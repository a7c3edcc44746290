use crate::{
    expression::{CronExpression, FieldValue, StepBase, Term},
    field::{FieldKind, FieldSpec, FieldValueType},
};
use std::fmt::Display;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const DAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Piece of the explanation text, optionally tied to the field it describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    text: String,
    field: Option<FieldKind>,
}

impl Fragment {
    /// Text of the fragment.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Field this fragment was rendered from, `None` for connecting words.
    #[inline]
    pub fn field(&self) -> Option<FieldKind> {
        self.field
    }

    /// Index (`0..5`) of the source field, if any.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.field.map(FieldKind::index)
    }
}

/// Human-readable description of an expression as ordered fragments.
///
/// Malformed fields are rendered from their source text, so invalid expressions can be explained too:
/// a caller can highlight the fragments of the [invalid fields](crate::ValidationResult::invalid_fields).
///
/// ```rust
/// use cron_lens::CronExpression;
///
/// let expression = CronExpression::parse("58 5 8 11 *").unwrap();
/// assert_eq!(expression.explain().to_string(), "At 05:58 on day-of-month 8 in November.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Explanation {
    fragments: Vec<Fragment>,
}

impl Explanation {
    /// Renders the expression field by field.
    pub fn new(expression: &CronExpression) -> Self {
        let mut explanation = Self { fragments: vec![] };
        let minute = expression.field(FieldKind::Minute);
        let hour = expression.field(FieldKind::Hour);
        let dom = expression.field(FieldKind::DayOfMonth);
        let month = expression.field(FieldKind::Month);
        let dow = expression.field(FieldKind::DayOfWeek);

        explanation.push("At ", None);
        match (single_value(minute), single_value(hour)) {
            (Some(m), Some(h)) => {
                explanation.push(format!("{h:02}"), Some(FieldKind::Hour));
                explanation.push(":", None);
                explanation.push(format!("{m:02}"), Some(FieldKind::Minute));
            }
            _ => {
                explanation.push(field_phrase(minute), Some(FieldKind::Minute));
                if !hour.is_wildcard() {
                    explanation.push(" past ", None);
                    explanation.push(field_phrase(hour), Some(FieldKind::Hour));
                }
            }
        }

        if !dom.is_wildcard() {
            explanation.push(" on ", None);
            explanation.push(field_phrase(dom), Some(FieldKind::DayOfMonth));
        }
        if !dow.is_wildcard() {
            explanation.push(if dom.is_wildcard() { " on " } else { " and on " }, None);
            explanation.push(field_phrase(dow), Some(FieldKind::DayOfWeek));
        }
        if !month.is_wildcard() {
            explanation.push(" in ", None);
            explanation.push(field_phrase(month), Some(FieldKind::Month));
        }
        explanation.push(".", None);

        explanation
    }

    /// Ordered fragments of the explanation.
    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    fn push(&mut self, text: impl Into<String>, field: Option<FieldKind>) {
        self.fragments.push(Fragment {
            text: text.into(),
            field,
        });
    }
}

impl Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fragments.iter().try_for_each(|fragment| f.write_str(&fragment.text))
    }
}

impl IntoIterator for Explanation {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Explanation {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

fn single_value(field: &FieldValue) -> Option<FieldValueType> {
    match field.terms() {
        Ok([Term::Single(value)]) => Some(*value),
        _ => None,
    }
}

fn field_phrase(field: &FieldValue) -> String {
    let spec = field.spec();
    let Ok(terms) = field.terms() else {
        return format!("{} {}", spec.name, field.source());
    };

    let singles: Vec<String> = terms
        .iter()
        .filter_map(|term| match term {
            Term::Single(value) => Some(value_name(spec, *value)),
            _ => None,
        })
        .collect();

    if singles.len() == terms.len() {
        let list = join_list(&singles);
        if spec.has_aliases() {
            list
        } else {
            format!("{} {list}", spec.name)
        }
    } else {
        join_list(&terms.iter().map(|term| term_phrase(spec, term)).collect::<Vec<_>>())
    }
}

fn term_phrase(spec: &FieldSpec, term: &Term) -> String {
    let name = spec.name;
    let value = |v| value_name(spec, v);

    match *term {
        Term::Wildcard => format!("every {name}"),
        Term::Single(v) if spec.has_aliases() => value(v),
        Term::Single(v) => format!("{name} {v}"),
        Term::Range(start, end) => format!("every {name} from {} through {}", value(start), value(end)),
        Term::Step(StepBase::Wildcard, interval) => format!("every {} {name}", ordinal(interval)),
        Term::Step(StepBase::Range(start, end), interval) => {
            format!("every {} {name} from {} through {}", ordinal(interval), value(start), value(end))
        }
        Term::Step(StepBase::From(start), interval) => {
            format!("every {} {name} from {} through {}", ordinal(interval), value(start), value(spec.max))
        }
    }
}

/// Month and day of week values are shown by name, out of range values stay numeric.
fn value_name(spec: &FieldSpec, value: FieldValueType) -> String {
    let name = match spec.kind {
        FieldKind::Month => value.checked_sub(1).and_then(|i| MONTH_NAMES.get(i as usize)),
        FieldKind::DayOfWeek => DAY_NAMES.get(spec.normalize(value) as usize),
        _ => None,
    };
    name.map_or_else(|| value.to_string(), |name| (*name).to_owned())
}

fn ordinal(value: FieldValueType) -> String {
    let suffix = match (value % 10, value % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{value}{suffix}")
}

/// `a`, `a and b`, `a, b and c`.
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [single] => single.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn explain(input: &str) -> Explanation {
        CronExpression::parse(input).unwrap().explain()
    }

    #[rstest]
    #[case("58 5 8 11 *", "At 05:58 on day-of-month 8 in November.")]
    #[case("* * * * *", "At every minute.")]
    #[case("0 * * * *", "At minute 0.")]
    #[case("0 0 * * *", "At 00:00.")]
    #[case("30 2 * * *", "At 02:30.")]
    #[case("*/15 * * * *", "At every 15th minute.")]
    #[case("0 */6 * * *", "At minute 0 past every 6th hour.")]
    #[case("0 0,12 * * *", "At minute 0 past hour 0 and 12.")]
    #[case("0 8,12,16 * * *", "At minute 0 past hour 8, 12 and 16.")]
    #[case(
        "*/30 9-17 * * 1-5",
        "At every 30th minute past every hour from 9 through 17 on every day-of-week from Monday through Friday."
    )]
    #[case("0 0 1 * 1", "At 00:00 on day-of-month 1 and on Monday.")]
    #[case("0 8 * * 6,0", "At 08:00 on Saturday and Sunday.")]
    #[case("0 0 * * 7", "At 00:00 on Sunday.")]
    #[case("0 0 1 */3 *", "At 00:00 on day-of-month 1 in every 3rd month.")]
    #[case("0 0 * jan-mar *", "At 00:00 in every month from January through March.")]
    #[case("0 17 28-31 * *", "At 17:00 on every day-of-month from 28 through 31.")]
    #[case("10-30/10 * * * *", "At every 10th minute from 10 through 30.")]
    #[case("5/20 1 * * *", "At every 20th minute from 5 through 59 past hour 1.")]
    #[case("1,*/22 * * * *", "At minute 1 and every 22nd minute.")]
    fn test_explanation(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(explain(input).to_string(), expected);
    }

    #[test]
    fn fragments_refer_to_fields() {
        let explanation = explain("58 5 8 11 *");
        let fragments: Vec<_> = explanation.fragments().iter().map(|f| (f.text(), f.index())).collect();
        assert_eq!(
            fragments,
            vec![
                ("At ", None),
                ("05", Some(1)),
                (":", None),
                ("58", Some(0)),
                (" on ", None),
                ("day-of-month 8", Some(2)),
                (" in ", None),
                ("November", Some(3)),
                (".", None),
            ]
        );
    }

    #[test]
    fn malformed_fields_are_rendered_from_source() {
        let explanation = explain("x 5 * * mon,9");
        assert_eq!(explanation.to_string(), "At minute x past hour 5 on Monday and 9.");

        let minute = explanation
            .into_iter()
            .find(|fragment| fragment.field() == Some(FieldKind::Minute))
            .unwrap();
        assert_eq!(minute.text(), "minute x");
    }

    #[rstest]
    #[case(1, "1st")]
    #[case(2, "2nd")]
    #[case(3, "3rd")]
    #[case(4, "4th")]
    #[case(11, "11th")]
    #[case(12, "12th")]
    #[case(13, "13th")]
    #[case(21, "21st")]
    #[case(22, "22nd")]
    #[case(30, "30th")]
    fn test_ordinal(#[case] value: FieldValueType, #[case] expected: &str) {
        assert_eq!(ordinal(value), expected);
    }
}
