use crate::{
    expression::CronExpression,
    field::{FieldKind, FieldValueType},
    utils, CronError, Result,
};
use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use std::{collections::BTreeSet, fmt::Display};
use tracing::{debug, trace};

/// Default forward search window of the calculator, in months.
///
/// Eight years is the longest gap between two consecutive 29 February dates (i.e. 2096 and 2104).
pub const DEFAULT_SEARCH_HORIZON: u32 = 96;

/// Compiled valid expression: expanded value sets of each field, ready to calculate occurrences.
///
/// For cron expression clarification and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    expression: CronExpression,
    minutes: BTreeSet<FieldValueType>,
    hours: BTreeSet<FieldValueType>,
    doms: BTreeSet<FieldValueType>,
    months: BTreeSet<FieldValueType>,
    dows: BTreeSet<FieldValueType>,
    dom_restricted: bool,
    dow_restricted: bool,
    horizon: u32,
}

impl Schedule {
    /// Validates provided `expression` and expands its fields into value sets.
    ///
    /// Returns [`CronError::InvalidFields`] if any field is invalid.
    pub fn new(expression: &CronExpression) -> Result<Self> {
        expression.validate().into_result()?;

        let values = |kind: FieldKind| expression.field(kind).values();
        let doms = values(FieldKind::DayOfMonth)?;
        let dows = values(FieldKind::DayOfWeek)?;

        Ok(Self {
            expression: expression.clone(),
            minutes: values(FieldKind::Minute)?,
            hours: values(FieldKind::Hour)?,
            dom_restricted: doms.len() < FieldKind::DayOfMonth.spec().span() as usize,
            // Sunday has two representations, so the whole week is seven values.
            dow_restricted: dows.len() < 7,
            doms,
            months: values(FieldKind::Month)?,
            dows,
            horizon: DEFAULT_SEARCH_HORIZON,
        })
    }

    /// Changes the forward search window, in months.
    ///
    /// Window starts from the month of the reference instant, so zero means "the same month only".
    pub fn with_search_horizon(mut self, months: u32) -> Self {
        self.horizon = months;
        self
    }

    /// Forward search window in months.
    #[inline]
    pub fn search_horizon(&self) -> u32 {
        self.horizon
    }

    /// Expression this schedule was compiled from.
    #[inline]
    pub fn expression(&self) -> &CronExpression {
        &self.expression
    }

    /// Returns `true` if the provided instant (truncated to the whole minute) fires.
    pub fn matches(&self, instant: &NaiveDateTime) -> bool {
        self.minutes.contains(&(instant.minute() as FieldValueType))
            && self.hours.contains(&(instant.hour() as FieldValueType))
            && self.months.contains(&(instant.month() as FieldValueType))
            && self.day_matches(instant.year(), instant.month(), instant.day())
    }

    /// Returns the first occurrence strictly after `after`.
    ///
    /// Seconds and fractions of `after` are dropped, the result is always on a whole minute.
    /// Fails with [`CronError::NoOccurrenceFound`] if nothing fires within the search horizon.
    pub fn next_occurrence(&self, after: &NaiveDateTime) -> Result<NaiveDateTime> {
        let start = after
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .and_then(|dt| dt.checked_add_signed(TimeDelta::minutes(1)))
            .ok_or(CronError::NoOccurrenceFound(self.horizon))?;

        self.first_from(start)
    }

    /// Returns up to `n` strictly increasing occurrences after `after`.
    ///
    /// The list is shorter than `n` if the search horizon was exhausted on the way.
    pub fn next_n_occurrences(&self, after: &NaiveDateTime, n: usize) -> Vec<NaiveDateTime> {
        self.iter(after).take(n).collect()
    }

    /// Returns iterator of occurrences strictly after `after`.
    ///
    /// Iterator ends when the search horizon is exhausted.
    #[inline]
    pub fn iter(&self, after: &NaiveDateTime) -> ScheduleIterator<'_> {
        ScheduleIterator {
            schedule: self,
            current: Some(*after),
        }
    }

    /// Returns the first occurrence strictly after `after` in the timezone of `after`.
    ///
    /// Expression is applied to the local wall clock of that timezone:
    /// - local times which don't exist (DST gap) are skipped;
    /// - ambiguous local times (DST overlap) resolve to the earliest instant after `after`.
    pub fn upcoming<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let tz = after.timezone();
        let mut local = after.naive_local();

        loop {
            local = self.next_occurrence(&local)?;
            match tz.from_local_datetime(&local) {
                LocalResult::Single(next) if next > *after => return Ok(next),
                LocalResult::Ambiguous(earliest, _) if earliest > *after => return Ok(earliest),
                LocalResult::Ambiguous(_, latest) if latest > *after => return Ok(latest),
                LocalResult::None => trace!(%local, "skipping non-existent local time"),
                _ => {}
            }
        }
    }

    /// Day of month / day of week combination: if both are restricted, any of them is enough.
    fn day_matches(&self, year: i32, month: u32, day: u32) -> bool {
        let dom = || self.doms.contains(&(day as FieldValueType));
        let dow = || {
            utils::day_of_week(year, month, day).is_some_and(|dow| self.dows.contains(&(dow as FieldValueType)))
        };

        match (self.dom_restricted, self.dow_restricted) {
            (true, true) => dom() || dow(),
            (true, false) => dom(),
            (false, true) => dow(),
            (false, false) => true,
        }
    }

    /// Cascades from `start` (inclusively) through month, day, hour and minute with carry.
    fn first_from(&self, start: NaiveDateTime) -> Result<NaiveDateTime> {
        let mut cursor = Cursor::from(start);
        let limit = cursor.month_index() + i64::from(self.horizon);

        loop {
            if cursor.month_index() > limit {
                debug!(expression = %self.expression, %start, horizon = self.horizon, "no occurrence found");
                return Err(CronError::NoOccurrenceFound(self.horizon));
            }

            if !self.months.contains(&(cursor.month as FieldValueType)) {
                match next_value(&self.months, cursor.month) {
                    Some(month) => cursor.set_month(month),
                    None => cursor.inc_year(),
                }
                continue;
            }

            if !self.day_matches(cursor.year, cursor.month, cursor.day) {
                cursor.inc_day();
                continue;
            }

            match next_value(&self.hours, cursor.hour) {
                Some(hour) if hour != cursor.hour => cursor.set_hour(hour),
                Some(_) => {}
                None => {
                    cursor.inc_day();
                    continue;
                }
            }

            match next_value(&self.minutes, cursor.minute) {
                Some(minute) => {
                    cursor.minute = minute;
                    return cursor.to_datetime().ok_or(CronError::NoOccurrenceFound(self.horizon));
                }
                None => cursor.inc_hour(),
            }
        }
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl TryFrom<&CronExpression> for Schedule {
    type Error = CronError;

    fn try_from(value: &CronExpression) -> Result<Self> {
        Self::new(value)
    }
}

/// Smallest value of the set which is not less than `from`.
#[inline]
fn next_value(values: &BTreeSet<FieldValueType>, from: u32) -> Option<u32> {
    let from = FieldValueType::try_from(from).ok()?;
    values.range(from..).next().map(|v| u32::from(*v))
}

/// Iterator of consecutive occurrences, see [`Schedule::iter()`].
#[derive(Debug, Clone)]
pub struct ScheduleIterator<'a> {
    schedule: &'a Schedule,
    current: Option<NaiveDateTime>,
}

impl Iterator for ScheduleIterator<'_> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let next = self.schedule.next_occurrence(&current).ok()?;
        self.current = Some(next);
        Some(next)
    }
}

/// Calendar position of the calculator, always a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl From<NaiveDateTime> for Cursor {
    fn from(value: NaiveDateTime) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
        }
    }
}

impl Cursor {
    /// Months since the year zero, to measure the search horizon.
    #[inline]
    fn month_index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn to_datetime(self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_opt(self.hour, self.minute, 0)
    }

    /// Increments current year and sets all other elements to the first value.
    fn inc_year(&mut self) {
        self.year += 1;
        self.set_month(1);
    }

    /// Jumps to the start of the month within the current year.
    fn set_month(&mut self, month: u32) {
        self.month = month;
        self.day = 1;
        self.set_hour(0);
    }

    /// Increments current month and sets all other elements to the first value.
    fn inc_month(&mut self) {
        if self.month < 12 {
            self.set_month(self.month + 1);
        } else {
            self.inc_year();
        }
    }

    /// Increments current day of month and sets all other elements to the first value.
    fn inc_day(&mut self) {
        if self.day < utils::days_in_month(self.year, self.month) {
            self.day += 1;
            self.set_hour(0);
        } else {
            self.inc_month();
        }
    }

    fn set_hour(&mut self, hour: u32) {
        self.hour = hour;
        self.minute = 0;
    }

    /// Increments current hour and sets minute to the first value.
    fn inc_hour(&mut self) {
        if self.hour < 23 {
            self.set_hour(self.hour + 1);
        } else {
            self.inc_day();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use chrono_tz::America::New_York;
    use rstest::rstest;
    use rstest_reuse::{apply, template};
    use std::time::Duration;

    fn datetime(input: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn schedule(input: &str) -> Schedule {
        CronExpression::parse(input).unwrap().schedule().unwrap()
    }

    fn cursor(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Cursor {
        Cursor {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    #[template]
    #[rstest]
    #[case("58 5 8 11 *", "2024-01-01T00:00:00", "2024-11-08T05:58:00")]
    #[case("58 5 8 11 *", "2024-11-08T05:58:00", "2025-11-08T05:58:00")]
    #[case("*/15 * * * *", "2024-01-01T00:07:00", "2024-01-01T00:15:00")]
    #[case("*/15 * * * *", "2024-01-01T00:15:00", "2024-01-01T00:30:00")]
    #[case("*/15 * * * *", "2024-01-01T00:15:30", "2024-01-01T00:30:00")]
    #[case("*/15 * * * *", "2024-12-31T23:59:00", "2025-01-01T00:00:00")]
    #[case("* * * * *", "2024-01-01T00:00:00", "2024-01-01T00:01:00")]
    #[case("* * * * *", "2024-01-01T00:00:59", "2024-01-01T00:01:00")]
    #[case("* * * * *", "2024-02-28T23:59:00", "2024-02-29T00:00:00")]
    #[case("0 * * * *", "2024-01-01T00:00:00", "2024-01-01T01:00:00")]
    #[case("0 0 * * *", "2024-01-01T00:00:00", "2024-01-02T00:00:00")]
    #[case("0 0 * * *", "2024-12-31T12:00:00", "2025-01-01T00:00:00")]
    #[case("30 2 * * *", "2024-01-01T02:29:00", "2024-01-01T02:30:00")]
    #[case("30 2 * * *", "2024-01-01T02:30:00", "2024-01-02T02:30:00")]
    #[case("0 0 1 * 1", "2024-01-02T00:00:00", "2024-01-08T00:00:00")]
    #[case("0 0 1 * 1", "2024-01-29T00:00:00", "2024-02-01T00:00:00")]
    #[case("0 0 1 * *", "2024-01-02T00:00:00", "2024-02-01T00:00:00")]
    #[case("0 0 * * 1", "2024-01-02T00:00:00", "2024-01-08T00:00:00")]
    #[case("0 0 * * 0", "2024-01-01T00:00:00", "2024-01-07T00:00:00")]
    #[case("0 0 * * 7", "2024-01-01T00:00:00", "2024-01-07T00:00:00")]
    #[case("0 0 * * sun", "2024-01-01T00:00:00", "2024-01-07T00:00:00")]
    #[case("0 8 * * 6,0", "2024-01-01T00:00:00", "2024-01-06T08:00:00")]
    #[case("0 8 * * 6,0", "2024-01-06T08:00:00", "2024-01-07T08:00:00")]
    #[case("0 8 * * 6,0", "2024-01-07T08:00:00", "2024-01-13T08:00:00")]
    #[case("0 17 * * 1-5", "2024-01-05T17:00:00", "2024-01-08T17:00:00")]
    #[case("*/30 9-17 * * 1-5", "2024-01-01T17:30:00", "2024-01-02T09:00:00")]
    #[case("*/30 9-17 * * 1-5", "2024-01-01T09:10:00", "2024-01-01T09:30:00")]
    #[case("0 0 1-7 * 1", "2024-01-08T00:00:00", "2024-01-15T00:00:00")]
    #[case("0 17 28-31 * *", "2024-02-29T17:00:00", "2024-03-28T17:00:00")]
    #[case("0 0,12 * * *", "2024-01-01T00:00:00", "2024-01-01T12:00:00")]
    #[case("0 */6 * * *", "2024-01-01T19:00:00", "2024-01-02T00:00:00")]
    #[case("10-30/10 * * * *", "2024-01-01T00:30:00", "2024-01-01T01:10:00")]
    #[case("5/20 * * * *", "2024-01-01T00:46:00", "2024-01-01T01:05:00")]
    #[case("0 0 1 */3 *", "2024-02-01T00:00:00", "2024-04-01T00:00:00")]
    #[case("0 0 1 jan,jul *", "2024-01-01T00:00:00", "2024-07-01T00:00:00")]
    #[case("0 0 29 2 *", "2024-01-01T00:00:00", "2024-02-29T00:00:00")]
    #[case("0 0 29 2 *", "2024-03-01T00:00:00", "2028-02-29T00:00:00")]
    #[case("0 0 31 * *", "2024-04-05T00:00:00", "2024-05-31T00:00:00")]
    #[case("0 0 31 */2 *", "2024-02-01T00:00:00", "2024-03-31T00:00:00")]
    #[case("1 2 29-31 * *", "2025-02-01T00:00:21", "2025-03-29T02:01:00")]
    fn occurrences_to_test(#[case] input: &str, #[case] after: &str, #[case] expected: &str) {}

    #[apply(occurrences_to_test)]
    fn test_next_occurrence(#[case] input: &str, #[case] after: &str, #[case] expected: &str) {
        let after = datetime(after);
        let next = schedule(input).next_occurrence(&after);
        assert_eq!(next, Ok(datetime(expected)), "input = {input}, after = {after}");
    }

    #[apply(occurrences_to_test)]
    fn test_occurrence_matches(#[case] input: &str, #[case] after: &str, #[case] _expected: &str) {
        let schedule = schedule(input);
        let after = datetime(after);
        let next = schedule.next_occurrence(&after).unwrap();
        assert!(next > after);
        assert!(schedule.matches(&next), "input = {input}, next = {next}");
    }

    #[rstest]
    #[case("0 0 31 2 *", "2024-01-01T00:00:00")]
    #[case("0 0 30 2 *", "2024-01-01T00:00:00")]
    #[case("0 0 31 4,6,9,11 *", "2024-01-01T00:00:00")]
    #[timeout(Duration::from_secs(1))]
    fn test_impossible_dates(#[case] input: &str, #[case] after: &str) {
        let schedule = schedule(input);
        assert_eq!(
            schedule.next_occurrence(&datetime(after)),
            Err(CronError::NoOccurrenceFound(DEFAULT_SEARCH_HORIZON))
        );
        assert!(schedule.next_n_occurrences(&datetime(after), 5).is_empty());
    }

    #[rstest]
    #[case(0, None)]
    #[case(1, Some("2024-05-31T00:00:00"))]
    #[case(2, Some("2024-05-31T00:00:00"))]
    #[timeout(Duration::from_secs(1))]
    fn test_search_horizon(#[case] horizon: u32, #[case] expected: Option<&str>) {
        let schedule = schedule("0 0 31 * *").with_search_horizon(horizon);
        assert_eq!(schedule.search_horizon(), horizon);

        let next = schedule.next_occurrence(&datetime("2024-04-05T00:00:00"));
        match expected {
            Some(expected) => assert_eq!(next, Ok(datetime(expected))),
            None => assert_eq!(next, Err(CronError::NoOccurrenceFound(horizon))),
        }
    }

    #[test]
    fn leap_day_is_within_default_horizon() {
        // 2096 -> 2104 is the longest gap between leap days.
        let schedule = schedule("0 0 29 2 *");
        let next = schedule.next_occurrence(&datetime("2096-03-01T00:00:00"));
        assert_eq!(next, Ok(datetime("2104-02-29T00:00:00")));
    }

    #[test]
    fn dense_schedule_produces_consecutive_minutes() {
        let schedule = schedule("* * * * *");
        let occurrences = schedule.next_n_occurrences(&datetime("2024-01-01T00:00:00"), 5);
        assert_eq!(
            occurrences,
            vec![
                datetime("2024-01-01T00:01:00"),
                datetime("2024-01-01T00:02:00"),
                datetime("2024-01-01T00:03:00"),
                datetime("2024-01-01T00:04:00"),
                datetime("2024-01-01T00:05:00"),
            ]
        );
    }

    #[rstest]
    #[case("*/15 * * * *")]
    #[case("0 0 1 * 1")]
    #[case("0 9-17 * * 1-5")]
    #[case("0 0 29 2 *")]
    #[case("0 17 28-31 * *")]
    #[timeout(Duration::from_secs(1))]
    fn test_next_n_occurrences_are_increasing(#[case] input: &str) {
        let schedule = schedule(input);
        let after = datetime("2024-01-01T00:00:00");
        let occurrences = schedule.next_n_occurrences(&after, 5);

        assert_eq!(occurrences.len(), 5);
        assert!(occurrences[0] > after);
        for pair in occurrences.windows(2) {
            assert!(pair[0] < pair[1], "{pair:?}");
        }
        for occurrence in &occurrences {
            assert!(schedule.matches(occurrence), "{occurrence}");
        }
    }

    #[test]
    fn day_of_month_or_day_of_week() {
        let schedule = schedule("0 0 1 * 1");
        // Monday.
        assert!(schedule.matches(&datetime("2024-01-08T00:00:00")));
        // Thursday, 1st.
        assert!(schedule.matches(&datetime("2024-02-01T00:00:00")));
        // Tuesday, 2nd.
        assert!(!schedule.matches(&datetime("2024-01-02T00:00:00")));
    }

    #[test]
    fn full_range_is_not_a_restriction() {
        let mondays = schedule("0 0 1-31 * 1");
        assert!(!mondays.matches(&datetime("2024-01-02T00:00:00")));
        assert!(mondays.matches(&datetime("2024-01-08T00:00:00")));

        let first_days = schedule("0 0 1 * 0-6");
        assert!(!first_days.matches(&datetime("2024-01-08T00:00:00")));
        assert!(first_days.matches(&datetime("2024-02-01T00:00:00")));
    }

    #[test]
    fn invalid_expression_is_not_scheduled() {
        let expression = CronExpression::parse("60 0 1 1 *").unwrap();
        assert_eq!(Schedule::new(&expression), Err(CronError::InvalidFields(vec![0])));
        assert_eq!(
            expression.next_occurrence(&datetime("2024-01-01T00:00:00")),
            Err(CronError::InvalidFields(vec![0]))
        );
    }

    #[test]
    fn iterator_takes_occurrences() {
        let schedule = schedule("0 0 1 * *");
        let mut iter = schedule.iter(&datetime("2024-01-15T00:00:00"));
        assert_eq!(iter.next(), Some(datetime("2024-02-01T00:00:00")));
        assert_eq!(iter.next(), Some(datetime("2024-03-01T00:00:00")));
        assert_eq!(iter.next(), Some(datetime("2024-04-01T00:00:00")));
    }

    #[test]
    fn iterator_ends_on_exhausted_horizon() {
        // Horizon counts from every previous occurrence: May is reachable from January, next January isn't.
        let schedule = schedule("0 0 31 1,5 *").with_search_horizon(4);
        let occurrences: Vec<_> = schedule.iter(&datetime("2024-01-15T00:00:00")).collect();
        assert_eq!(
            occurrences,
            vec![datetime("2024-01-31T00:00:00"), datetime("2024-05-31T00:00:00")]
        );
    }

    #[rstest]
    #[case("0 */6 * * *", "2024-01-01T05:30:00+03:00", "2024-01-01T06:00:00+03:00")]
    #[case("0 */6 * * *", "2024-01-01T23:30:00-05:00", "2024-01-02T00:00:00-05:00")]
    #[case("58 5 8 11 *", "2024-01-01T00:00:00+00:00", "2024-11-08T05:58:00+00:00")]
    #[case("* * * * *", "2024-01-01T00:00:30.5+02:00", "2024-01-01T00:01:00+02:00")]
    #[timeout(Duration::from_secs(1))]
    fn test_upcoming(#[case] input: &str, #[case] after: &str, #[case] expected: &str) {
        let after = DateTime::parse_from_rfc3339(after).unwrap();
        let next = schedule(input).upcoming(&after).unwrap();
        assert_eq!(next.to_rfc3339(), expected);
        assert_eq!(next.timezone(), after.timezone());
    }

    #[test]
    fn upcoming_keeps_offset() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let after = tz.with_ymd_and_hms(2024, 1, 1, 8, 59, 0).unwrap();
        let next = schedule("0 9 * * *").upcoming(&after).unwrap();
        assert_eq!(next, tz.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn upcoming_skips_non_existent_local_time() {
        // 2024-03-10 02:00 EST jumps to 03:00 EDT.
        let after = New_York.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let next = schedule("30 2 * * *").upcoming(&after).unwrap();
        assert_eq!(next, New_York.with_ymd_and_hms(2024, 3, 11, 2, 30, 0).unwrap());
    }

    #[test]
    fn upcoming_fires_once_on_ambiguous_local_time() {
        // 2024-11-03 02:00 EDT falls back to 01:00 EST, so 01:30 happens twice.
        let schedule = schedule("30 1 * * *");
        let after = New_York.with_ymd_and_hms(2024, 11, 3, 0, 0, 0).unwrap();

        let first = schedule.upcoming(&after).unwrap();
        assert_eq!(first.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());

        let second = schedule.upcoming(&first).unwrap();
        assert_eq!(second.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 11, 4, 6, 30, 0).unwrap());
    }

    #[test]
    fn upcoming_from_second_pass_of_ambiguous_hour() {
        let schedule = schedule("30 1 * * *");
        // 01:10 EST, after the first 01:30 EDT but before the second 01:30 EST.
        let after = Utc.with_ymd_and_hms(2024, 11, 3, 6, 10, 0).unwrap().with_timezone(&New_York);

        let next = schedule.upcoming(&after).unwrap();
        assert_eq!(next.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 11, 3, 6, 30, 0).unwrap());
    }

    #[test]
    fn display_shows_the_expression() {
        assert_eq!(schedule("0 0 * jan-mar MON-fri").to_string(), "0 0 * 1-3 1-5");
    }

    #[test]
    fn test_inc_year() {
        let mut c = cursor(2024, 5, 10, 12, 30);
        c.inc_year();
        assert_eq!(c, cursor(2025, 1, 1, 0, 0));
    }

    #[test]
    fn test_inc_month() {
        let mut c = cursor(2024, 1, 10, 12, 30);
        c.inc_month();
        assert_eq!(c, cursor(2024, 2, 1, 0, 0));

        let mut c = cursor(2024, 12, 10, 12, 30);
        c.inc_month();
        assert_eq!(c, cursor(2025, 1, 1, 0, 0));
    }

    #[rstest]
    #[case(cursor(2024, 1, 1, 5, 5), cursor(2024, 1, 2, 0, 0))]
    #[case(cursor(2024, 1, 31, 5, 5), cursor(2024, 2, 1, 0, 0))]
    #[case(cursor(2024, 12, 31, 5, 5), cursor(2025, 1, 1, 0, 0))]
    #[case(cursor(2024, 2, 28, 5, 5), cursor(2024, 2, 29, 0, 0))]
    #[case(cursor(2025, 2, 28, 5, 5), cursor(2025, 3, 1, 0, 0))]
    #[case(cursor(2024, 4, 30, 5, 5), cursor(2024, 5, 1, 0, 0))]
    fn test_inc_day(#[case] mut current: Cursor, #[case] expected: Cursor) {
        current.inc_day();
        assert_eq!(current, expected);
    }

    #[rstest]
    #[case(cursor(2024, 1, 1, 0, 5), cursor(2024, 1, 1, 1, 0))]
    #[case(cursor(2024, 1, 1, 23, 5), cursor(2024, 1, 2, 0, 0))]
    #[case(cursor(2024, 12, 31, 23, 59), cursor(2025, 1, 1, 0, 0))]
    fn test_inc_hour(#[case] mut current: Cursor, #[case] expected: Cursor) {
        current.inc_hour();
        assert_eq!(current, expected);
    }

    #[test]
    fn month_index_is_continuous() {
        assert_eq!(cursor(2024, 1, 1, 0, 0).month_index() + 11, cursor(2024, 12, 1, 0, 0).month_index());
        assert_eq!(cursor(2024, 12, 1, 0, 0).month_index() + 1, cursor(2025, 1, 1, 0, 0).month_index());
    }
}
