//! Calendar dates and local date-times.
//!
//! Date-only operations accept either kind and use the calendar date of a
//! date-time; time-of-day accessors read a date as midnight. Day, month and
//! year arithmetic on a date stays a date, hour and minute arithmetic
//! always yields a date-time.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use mathlang_runtime::{
    argument_error, expected_type, Environment, EvalError, EvalResult, Executor, Operation,
    Provider, Scalar, Value,
};

use super::{integer, number, string};

pub struct DateTimeProvider;

impl Provider for DateTimeProvider {
    fn name(&self) -> &'static str {
        "DateTime"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Now", "Current Date and Time", "DateTime/Current", now)
                .with_description("Returns the current local date and time"),
            Operation::new("Today", "Today's Date", "DateTime/Current", today)
                .with_description("Returns the current local date"),
            Operation::new("UtcNow", "UTC Now", "DateTime/Current", utc_now)
                .with_description("Returns the current UTC date and time"),
            Operation::new("DateOf", "Create Date", "DateTime/Creation", date_of)
                .with_description("Creates a date from year, month, and day")
                .required("year", "Year")
                .required("month", "Month (1-12)")
                .required("day", "Day of month"),
            Operation::new("DateTimeOf", "Create DateTime", "DateTime/Creation", datetime_of)
                .with_description("Creates a date-time from its components")
                .required("year", "Year")
                .required("month", "Month (1-12)")
                .required("day", "Day of month")
                .optional("hour", "Hour (0-23)", Value::int(0))
                .optional("minute", "Minute (0-59)", Value::int(0))
                .optional("second", "Second (0-59)", Value::int(0)),
            Operation::new("AddDays", "Add Days", "DateTime/Arithmetic", add_days)
                .with_description("Adds a (possibly fractional) number of days")
                .required("dt", "Date or date-time")
                .required("days", "Number of days"),
            Operation::new("AddHours", "Add Hours", "DateTime/Arithmetic", add_hours)
                .with_description("Adds a (possibly fractional) number of hours")
                .required("dt", "Date or date-time")
                .required("hours", "Number of hours"),
            Operation::new("AddMinutes", "Add Minutes", "DateTime/Arithmetic", add_minutes)
                .with_description("Adds a (possibly fractional) number of minutes")
                .required("dt", "Date or date-time")
                .required("minutes", "Number of minutes"),
            Operation::new("AddMonths", "Add Months", "DateTime/Arithmetic", add_months)
                .with_description("Adds whole months, clamping the day to the month's end")
                .required("dt", "Date or date-time")
                .required("months", "Number of months"),
            Operation::new("AddYears", "Add Years", "DateTime/Arithmetic", add_years)
                .with_description("Adds whole years; Feb 29 becomes Feb 28 in common years")
                .required("dt", "Date or date-time")
                .required("years", "Number of years"),
            Operation::new("DaysBetween", "Days Between", "DateTime/Arithmetic", days_between)
                .with_description("Returns the number of whole days from dt1 to dt2")
                .required("dt1", "Start date")
                .required("dt2", "End date"),
            Operation::new("Year", "Year", "DateTime/Components", year)
                .with_description("Returns the year")
                .required("dt", "Date or date-time"),
            Operation::new("Month", "Month", "DateTime/Components", month)
                .with_description("Returns the month (1-12)")
                .required("dt", "Date or date-time"),
            Operation::new("Day", "Day", "DateTime/Components", day)
                .with_description("Returns the day of the month")
                .required("dt", "Date or date-time"),
            Operation::new("Hour", "Hour", "DateTime/Components", hour)
                .with_description("Returns the hour (0-23)")
                .required("dt", "Date or date-time"),
            Operation::new("Minute", "Minute", "DateTime/Components", minute)
                .with_description("Returns the minute (0-59)")
                .required("dt", "Date or date-time"),
            Operation::new("Second", "Second", "DateTime/Components", second)
                .with_description("Returns the second (0-59)")
                .required("dt", "Date or date-time"),
            Operation::new("DayOfYear", "Day of Year", "DateTime/Components", day_of_year)
                .with_description("Returns the day of the year (1-366)")
                .required("dt", "Date or date-time"),
            Operation::new("WeekOfYear", "Week of Year", "DateTime/Components", week_of_year)
                .with_description("Returns the ISO week number (1-53)")
                .required("dt", "Date or date-time"),
            Operation::new("DayOfWeek", "Day of Week", "DateTime/Components", day_of_week)
                .with_description("Returns the day of the week (Monday = 0)")
                .required("dt", "Date or date-time"),
            Operation::new("IsLeapYear", "Is Leap Year", "DateTime/Info", is_leap_year)
                .with_description("Returns 1 if the year is a leap year, 0 otherwise")
                .required("year", "Year"),
            Operation::new("DaysInMonth", "Days in Month", "DateTime/Info", days_in_month)
                .with_description("Returns the number of days in a month")
                .required("year", "Year")
                .required("month", "Month (1-12)"),
            Operation::new("FormatDateTime", "Format DateTime", "DateTime/Format", format_datetime)
                .with_description("Formats a date or date-time with a strftime pattern")
                .required("dt", "Date or date-time")
                .required("pattern", "Format pattern (e.g. %Y-%m-%d)"),
        ]
    }
}

/// A date or date-time argument, keeping track of which it was.
enum Moment {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Moment {
    fn from_value(op: &str, value: &Value) -> Result<Self, EvalError> {
        match value {
            Value::Scalar(Scalar::Date(d)) => Ok(Moment::Date(*d)),
            Value::Scalar(Scalar::DateTime(dt)) => Ok(Moment::DateTime(*dt)),
            other => Err(expected_type(op, "a date or datetime", &other.type_name())),
        }
    }

    fn date(&self) -> NaiveDate {
        match self {
            Moment::Date(d) => *d,
            Moment::DateTime(dt) => dt.date(),
        }
    }

    fn datetime(&self) -> NaiveDateTime {
        match self {
            Moment::Date(d) => d.and_time(NaiveTime::MIN),
            Moment::DateTime(dt) => *dt,
        }
    }
}

fn component(op: &str, value: &Value) -> Result<u32, EvalError> {
    let n = integer(op, value)?;
    u32::try_from(n).map_err(|_| argument_error(format!("{op}: component out of range: {n}")))
}

fn build_date(op: &str, args: &[Value]) -> Result<NaiveDate, EvalError> {
    let year = integer(op, &args[0])?;
    let month = component(op, &args[1])?;
    let day = component(op, &args[2])?;
    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .ok_or_else(|| argument_error(format!("Invalid date: {year}-{month}-{day}")))
}

fn now(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::datetime(Local::now().naive_local()))
}

fn today(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::date(Local::now().date_naive()))
}

fn utc_now(_args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::datetime(Utc::now().naive_utc()))
}

fn date_of(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::date(build_date("DateOf", args)?))
}

fn datetime_of(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let date = build_date("DateTimeOf", args)?;
    let hour = component("DateTimeOf", &args[3])?;
    let minute = component("DateTimeOf", &args[4])?;
    let second = component("DateTimeOf", &args[5])?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        argument_error(format!("Invalid time: {hour:02}:{minute:02}:{second:02}"))
    })?;
    Ok(Value::datetime(date.and_time(time)))
}

const MILLIS_PER_MINUTE: f64 = 60_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Shift by a fractional amount of some unit, kept to the millisecond.
fn shift(op: &str, moment: &Moment, amount: &Value, unit_millis: f64) -> Result<NaiveDateTime, EvalError> {
    let amount = number(op, amount)?;
    let millis = amount * unit_millis;
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return Err(argument_error(format!("{op}: offset out of range: {}", Value::real(amount))));
    }
    Duration::try_milliseconds(millis.round() as i64)
        .and_then(|delta| moment.datetime().checked_add_signed(delta))
        .ok_or_else(|| argument_error(format!("{op}: resulting date out of range")))
}

/// Calendar-month shift; the day clamps to the last day of the target month.
fn shift_months(op: &str, moment: &Moment, months: i64) -> Result<NaiveDateTime, EvalError> {
    let dt = moment.datetime();
    u32::try_from(months.unsigned_abs())
        .ok()
        .map(Months::new)
        .and_then(|m| {
            if months >= 0 {
                dt.checked_add_months(m)
            } else {
                dt.checked_sub_months(m)
            }
        })
        .ok_or_else(|| argument_error(format!("{op}: resulting date out of range")))
}

fn same_kind(moment: &Moment, shifted: NaiveDateTime) -> Value {
    match moment {
        Moment::Date(_) => Value::date(shifted.date()),
        Moment::DateTime(_) => Value::datetime(shifted),
    }
}

fn add_days(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let moment = Moment::from_value("AddDays", &args[0])?;
    let shifted = shift("AddDays", &moment, &args[1], MILLIS_PER_DAY)?;
    Ok(same_kind(&moment, shifted))
}

fn add_hours(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let moment = Moment::from_value("AddHours", &args[0])?;
    Ok(Value::datetime(shift("AddHours", &moment, &args[1], MILLIS_PER_HOUR)?))
}

fn add_minutes(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let moment = Moment::from_value("AddMinutes", &args[0])?;
    Ok(Value::datetime(shift("AddMinutes", &moment, &args[1], MILLIS_PER_MINUTE)?))
}

fn add_months(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let moment = Moment::from_value("AddMonths", &args[0])?;
    let months = integer("AddMonths", &args[1])?;
    let shifted = shift_months("AddMonths", &moment, months)?;
    Ok(same_kind(&moment, shifted))
}

fn add_years(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let moment = Moment::from_value("AddYears", &args[0])?;
    let years = integer("AddYears", &args[1])?;
    let months = years
        .checked_mul(12)
        .ok_or_else(|| argument_error("AddYears: resulting date out of range"))?;
    let shifted = shift_months("AddYears", &moment, months)?;
    Ok(same_kind(&moment, shifted))
}

fn days_between(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let from = Moment::from_value("DaysBetween", &args[0])?.date();
    let to = Moment::from_value("DaysBetween", &args[1])?.date();
    Ok(Value::int((to - from).num_days()))
}

fn year(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let date = Moment::from_value("Year", &args[0])?.date();
    Ok(Value::int(i64::from(date.year())))
}

fn month(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let date = Moment::from_value("Month", &args[0])?.date();
    Ok(Value::int(i64::from(date.month())))
}

fn day(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let date = Moment::from_value("Day", &args[0])?.date();
    Ok(Value::int(i64::from(date.day())))
}

fn hour(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let time = Moment::from_value("Hour", &args[0])?.datetime();
    Ok(Value::int(i64::from(time.hour())))
}

fn minute(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let time = Moment::from_value("Minute", &args[0])?.datetime();
    Ok(Value::int(i64::from(time.minute())))
}

fn second(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let time = Moment::from_value("Second", &args[0])?.datetime();
    Ok(Value::int(i64::from(time.second())))
}

fn day_of_year(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let date = Moment::from_value("DayOfYear", &args[0])?.date();
    Ok(Value::int(i64::from(date.ordinal())))
}

fn week_of_year(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let date = Moment::from_value("WeekOfYear", &args[0])?.date();
    Ok(Value::int(i64::from(date.iso_week().week())))
}

fn day_of_week(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let date = Moment::from_value("DayOfWeek", &args[0])?.date();
    Ok(Value::int(i64::from(date.weekday().num_days_from_monday())))
}

fn is_leap(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn is_leap_year(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let y = integer("IsLeapYear", &args[0])?;
    Ok(Value::int(i64::from(is_leap(y))))
}

fn days_in_month(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let year = integer("DaysInMonth", &args[0])?;
    let month = integer("DaysInMonth", &args[1])?;
    let days = match month {
        2 if is_leap(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => {
            return Err(argument_error(format!(
                "Month must be between 1 and 12, got {month}"
            )))
        }
    };
    Ok(Value::int(days))
}

/// Dates format as midnight. Unknown specifiers, and specifiers a naive
/// value cannot satisfy (`%z`), are argument errors.
fn format_datetime(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let moment = Moment::from_value("FormatDateTime", &args[0])?;
    let pattern = string("FormatDateTime", &args[1])?;
    let invalid = || argument_error(format!("Invalid format pattern: {pattern}"));
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut formatted = String::new();
    write!(formatted, "{}", moment.datetime().format(pattern)).map_err(|_| invalid())?;
    Ok(Value::string(formatted))
}
