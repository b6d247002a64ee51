use crate::error::ScheduleParseError;
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::collections::BTreeSet;
use std::str::FromStr;

/// One field of a cron expression: either the `*` wildcard or a concrete
/// set of accepted values.
///
/// The set is never empty and every value lies inside the field's domain;
/// both invariants are enforced by [`Schedule::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Any,
    Values(BTreeSet<u8>),
}

impl Field {
    pub fn matches(&self, value: u8) -> bool {
        match self {
            Field::Any => true,
            Field::Values(set) => set.contains(&value),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Field::Any)
    }
}

/// Valid domain of a single cron field.
struct FieldDomain {
    name: &'static str,
    min: u8,
    max: u8,
}

const MINUTE: FieldDomain = FieldDomain { name: "minute", min: 0, max: 59 };
const HOUR: FieldDomain = FieldDomain { name: "hour", min: 0, max: 23 };
const DAY_OF_MONTH: FieldDomain = FieldDomain { name: "day-of-month", min: 1, max: 31 };
const MONTH: FieldDomain = FieldDomain { name: "month", min: 1, max: 12 };
const DAY_OF_WEEK: FieldDomain = FieldDomain { name: "day-of-week", min: 0, max: 6 };

/// A parsed five-field cron expression.
///
/// Fields are minute, hour, day-of-month, month, day-of-week (0 = Sunday).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpr {
    pub minute: Field,
    pub hour: Field,
    pub day_of_month: Field,
    pub month: Field,
    pub day_of_week: Field,
}

impl CronExpr {
    /// Whether this expression matches the given timestamp.
    ///
    /// Matching is minute-granular; seconds are ignored. Day-of-month and
    /// day-of-week follow the classic cron rule: when both are restricted
    /// they combine with OR, when only one is restricted only that one
    /// needs to match.
    pub fn matches<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        if !self.minute.matches(at.minute() as u8)
            || !self.hour.matches(at.hour() as u8)
            || !self.month.matches(at.month() as u8)
        {
            return false;
        }

        let dom = at.day() as u8;
        let dow = at.weekday().num_days_from_sunday() as u8;

        match (self.day_of_month.is_any(), self.day_of_week.is_any()) {
            (true, true) => true,
            (false, true) => self.day_of_month.matches(dom),
            (true, false) => self.day_of_week.matches(dow),
            (false, false) => self.day_of_month.matches(dom) || self.day_of_week.matches(dow),
        }
    }
}

/// A task schedule: either a parsed cron expression or the explicit
/// disabled state.
///
/// An empty (or all-whitespace) expression string parses to
/// [`Schedule::Disabled`] rather than an error, mirroring the task
/// contract where an empty schedule means "never run".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    Disabled,
    Cron(CronExpr),
}

impl Schedule {
    /// Parse a cron expression string.
    ///
    /// Accepts exactly five whitespace-separated fields, each one of `*`,
    /// a single value, a comma-separated list, a range `a-b`, or a stepped
    /// range `a-b/n` (also `*/n`). Anything else fails with
    /// [`ScheduleParseError`]. Pure function of its input.
    pub fn parse(expression: &str) -> Result<Self, ScheduleParseError> {
        if expression.trim().is_empty() {
            return Ok(Schedule::Disabled);
        }

        let fields: Vec<&str> = expression.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(ScheduleParseError::FieldCount { found: fields.len() });
        }

        Ok(Schedule::Cron(CronExpr {
            minute: parse_field(fields[0], &MINUTE)?,
            hour: parse_field(fields[1], &HOUR)?,
            day_of_month: parse_field(fields[2], &DAY_OF_MONTH)?,
            month: parse_field(fields[3], &MONTH)?,
            day_of_week: parse_field(fields[4], &DAY_OF_WEEK)?,
        }))
    }

    /// Whether the schedule is due at the given timestamp.
    ///
    /// `Disabled` schedules are never due. Evaluated against the
    /// caller-supplied timestamp only; no clock is read here.
    pub fn is_due<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        match self {
            Schedule::Disabled => false,
            Schedule::Cron(expr) => expr.matches(at),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Schedule::Disabled)
    }
}

impl FromStr for Schedule {
    type Err = ScheduleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Schedule::parse(s)
    }
}

/// Parse one whitespace-separated field into a [`Field`].
fn parse_field(token: &str, domain: &FieldDomain) -> Result<Field, ScheduleParseError> {
    if token == "*" {
        return Ok(Field::Any);
    }

    let mut values = BTreeSet::new();

    for part in token.split(',') {
        let (range, step) = match part.split_once('/') {
            Some((range, step)) => (range, Some(parse_number(step, domain)?)),
            None => (part, None),
        };

        let (low, high) = if range == "*" {
            (domain.min, domain.max)
        } else if let Some((a, b)) = range.split_once('-') {
            (parse_value(a, domain)?, parse_value(b, domain)?)
        } else {
            let value = parse_value(range, domain)?;
            (value, value)
        };

        if low > high {
            return Err(ScheduleParseError::InvertedRange {
                field: domain.name,
                low,
                high,
            });
        }

        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(ScheduleParseError::ZeroStep { field: domain.name });
        }

        values.extend((low..=high).step_by(step as usize));
    }

    Ok(Field::Values(values))
}

/// Parse a bare number token (used for step values, which are not bounded
/// by the field's domain).
fn parse_number(token: &str, domain: &FieldDomain) -> Result<u32, ScheduleParseError> {
    token
        .parse::<u32>()
        .map_err(|_| ScheduleParseError::InvalidToken {
            field: domain.name,
            token: token.to_string(),
        })
}

/// Parse a number token and check it against the field's domain.
fn parse_value(token: &str, domain: &FieldDomain) -> Result<u8, ScheduleParseError> {
    let value = parse_number(token, domain)?;
    if value < domain.min as u32 || value > domain.max as u32 {
        return Err(ScheduleParseError::OutOfRange {
            field: domain.name,
            value,
            min: domain.min,
            max: domain.max,
        });
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn parses_all_wildcards() {
        let schedule = Schedule::parse("* * * * *").unwrap();
        assert!(schedule.is_due(&at(2024, 1, 1, 9, 0)));
        assert!(schedule.is_due(&at(2024, 12, 31, 23, 59)));
    }

    #[test]
    fn empty_expression_is_disabled() {
        assert_eq!(Schedule::parse("").unwrap(), Schedule::Disabled);
        assert_eq!(Schedule::parse("   ").unwrap(), Schedule::Disabled);
        assert!(!Schedule::parse("").unwrap().is_due(&at(2024, 1, 1, 9, 0)));
    }

    #[test]
    fn nine_am_every_monday() {
        // 2024-01-01 is a Monday
        let schedule = Schedule::parse("0 9 * * 1").unwrap();
        assert!(schedule.is_due(&at(2024, 1, 1, 9, 0)));
        assert!(!schedule.is_due(&at(2024, 1, 1, 9, 1)));
        assert!(!schedule.is_due(&at(2024, 1, 2, 9, 0)));
    }

    #[test]
    fn seconds_are_ignored() {
        let schedule = Schedule::parse("0 9 * * *").unwrap();
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 30).unwrap();
        assert!(schedule.is_due(&t));
    }

    #[test]
    fn lists_ranges_and_steps() {
        let schedule = Schedule::parse("0,30 9-17 * * 1-5").unwrap();
        assert!(schedule.is_due(&at(2024, 1, 1, 9, 30)));
        assert!(schedule.is_due(&at(2024, 1, 5, 17, 0)));
        assert!(!schedule.is_due(&at(2024, 1, 1, 18, 0)));
        assert!(!schedule.is_due(&at(2024, 1, 6, 9, 0))); // Saturday

        let every_15 = Schedule::parse("*/15 * * * *").unwrap();
        assert!(every_15.is_due(&at(2024, 1, 1, 0, 45)));
        assert!(!every_15.is_due(&at(2024, 1, 1, 0, 20)));

        let stepped_range = Schedule::parse("10-30/10 * * * *").unwrap();
        assert!(stepped_range.is_due(&at(2024, 1, 1, 0, 20)));
        assert!(!stepped_range.is_due(&at(2024, 1, 1, 0, 25)));
    }

    #[test]
    fn dom_and_dow_combine_with_or() {
        // Both restricted: matches on the 15th OR on a Monday.
        let schedule = Schedule::parse("0 0 15 * 1").unwrap();
        assert!(schedule.is_due(&at(2024, 1, 15, 0, 0))); // 15th (a Monday, also)
        assert!(schedule.is_due(&at(2024, 1, 8, 0, 0))); // Monday, not the 15th
        assert!(schedule.is_due(&at(2024, 2, 15, 0, 0))); // 15th, a Thursday
        assert!(!schedule.is_due(&at(2024, 1, 9, 0, 0))); // Tuesday the 9th
    }

    #[test]
    fn single_restricted_day_field_must_match() {
        let dom_only = Schedule::parse("0 0 15 * *").unwrap();
        assert!(dom_only.is_due(&at(2024, 1, 15, 0, 0)));
        assert!(!dom_only.is_due(&at(2024, 1, 8, 0, 0)));

        let dow_only = Schedule::parse("0 0 * * 1").unwrap();
        assert!(dow_only.is_due(&at(2024, 1, 8, 0, 0)));
        assert!(!dow_only.is_due(&at(2024, 1, 9, 0, 0)));
    }

    #[test]
    fn sunday_is_zero() {
        let schedule = Schedule::parse("0 0 * * 0").unwrap();
        assert!(schedule.is_due(&at(2024, 1, 7, 0, 0))); // a Sunday
        assert!(!schedule.is_due(&at(2024, 1, 8, 0, 0)));
    }

    #[test]
    fn minute_out_of_range_is_rejected() {
        let err = Schedule::parse("60 * * * *").unwrap_err();
        assert!(matches!(
            err,
            ScheduleParseError::OutOfRange { field: "minute", value: 60, .. }
        ));
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert!(matches!(
            Schedule::parse("* * *").unwrap_err(),
            ScheduleParseError::FieldCount { found: 3 }
        ));
        assert!(matches!(
            Schedule::parse("* * * * * *").unwrap_err(),
            ScheduleParseError::FieldCount { found: 6 }
        ));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(
            Schedule::parse("abc * * * *").unwrap_err(),
            ScheduleParseError::InvalidToken { field: "minute", .. }
        ));
        assert!(matches!(
            Schedule::parse("1,,2 * * * *").unwrap_err(),
            ScheduleParseError::InvalidToken { .. }
        ));
        assert!(matches!(
            Schedule::parse("30-10 * * * *").unwrap_err(),
            ScheduleParseError::InvertedRange { low: 30, high: 10, .. }
        ));
        assert!(matches!(
            Schedule::parse("*/0 * * * *").unwrap_err(),
            ScheduleParseError::ZeroStep { field: "minute" }
        ));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let schedule = Schedule::parse("0 9 * * 1").unwrap();
        let t = at(2024, 1, 1, 9, 0);
        assert_eq!(schedule.is_due(&t), schedule.is_due(&t));
    }
}
