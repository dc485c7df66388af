// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred time values and their resolution against an anchor.
//!
//! A [`TimeValue`] records what a phrase asked for ("in two months", "next
//! Tuesday at 5 pm"); [`TimeValue::resolve`] turns it into a concrete
//! datetime. Resolution is a single pure pass, so the order in which fields
//! were set never matters.

use std::fmt;
use std::ops::Add;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};
use serde::Serialize;

use super::hijri::{self, HijriDate};
use crate::error::{Error, Result};
use crate::units::{DurationUnit, DurationValue};

/// Fractions closer than this to a whole number are rounded.
const ROUNDING_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("am"),
            Meridiem::Pm => f.write_str("pm"),
        }
    }
}

/// A weekday to move to.
///
/// Without `weeks` on the owning value, `nth` counts occurrences from the
/// anchor: `1` is the anchor's day or the next one, `-1` the anchor's day or
/// the previous one. With `weeks`, the day is taken inside the week that many
/// weeks from the anchor's week and `nth` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayTarget {
    /// `None` is the first day of the week.
    pub weekday: Option<Weekday>,
    pub nth: i32,
}

impl WeekdayTarget {
    pub fn new(weekday: Weekday) -> Self {
        WeekdayTarget {
            weekday: Some(weekday),
            nth: 1,
        }
    }

    pub fn week_start() -> Self {
        WeekdayTarget {
            weekday: None,
            nth: 1,
        }
    }
}

/// Options applied while resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOptions {
    pub week_start: Weekday,
}

impl Default for TimeOptions {
    fn default() -> Self {
        TimeOptions {
            week_start: Weekday::Sun,
        }
    }
}

/// Requested changes to an anchor datetime.
///
/// Relative fields are deltas; absolute fields replace the anchor's
/// component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<WeekdayTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub am_pm: Option<Meridiem>,
    /// Next occurrence of this month, strictly after the anchor's month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_month: Option<u32>,
    /// Previous occurrence of this month, strictly before the anchor's month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_month: Option<u32>,
    /// Year, month and day are Hijri.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hijri: bool,
    /// Unset clock fields read as zero instead of the anchor's.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub midnight: bool,
}

impl TimeValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the day at midnight unless a clock time is given.
    pub fn at_midnight(mut self) -> Self {
        self.midnight = true;
        self
    }

    /// The offset a duration describes, `sign` giving its direction.
    ///
    /// Fractional amounts spill into the next smaller unit: a year and a
    /// half is one year and six months.
    pub fn from_duration(duration: &DurationValue, sign: i64) -> Self {
        let mut value = TimeValue::new();
        for vu in &duration.values {
            let mut unit = vu.unit;
            let mut amount = vu.value;
            let mut first = true;
            loop {
                let rounded = amount.round();
                if (amount - rounded).abs() < ROUNDING_TOLERANCE {
                    if rounded != 0.0 || first {
                        value.add_relative(unit, (rounded as i64).saturating_mul(sign));
                    }
                    break;
                }
                let whole = amount.trunc();
                if whole != 0.0 || first {
                    value.add_relative(unit, (whole as i64).saturating_mul(sign));
                }
                match unit.smaller() {
                    Some((smaller, factor)) => {
                        amount = (amount - whole) * factor;
                        unit = smaller;
                        first = false;
                    }
                    None => break,
                }
            }
        }
        value
    }

    /// Adds `amount` to the relative field for `unit`, saturating at the
    /// bounds of `i64`. Resolution rejects offsets that large.
    pub fn add_relative(&mut self, unit: DurationUnit, amount: i64) {
        let field = match unit {
            DurationUnit::Years => &mut self.years,
            DurationUnit::Months => &mut self.months,
            DurationUnit::Weeks => &mut self.weeks,
            DurationUnit::Days => &mut self.days,
            DurationUnit::Hours => &mut self.hours,
            DurationUnit::Minutes => &mut self.minutes,
            DurationUnit::Seconds => &mut self.seconds,
        };
        *field = Some(field.unwrap_or(0).saturating_add(amount));
    }

    pub fn is_empty(&self) -> bool {
        *self == TimeValue::default()
    }

    /// The hour after applying the meridiem.
    pub fn hour_24(&self) -> Option<u32> {
        match (self.hour, self.am_pm) {
            (Some(h), Some(Meridiem::Pm)) if h < 12 => Some(h + 12),
            (hour, _) => hour,
        }
    }

    /// The datetime this value denotes when read at `anchor`.
    ///
    /// Applied in order: date components (Hijri when flagged, with month
    /// search and day clamping), time of day, day and clock deltas, then the
    /// weekday move.
    pub fn resolve(&self, anchor: NaiveDateTime, options: &TimeOptions) -> Result<NaiveDateTime> {
        let date = if self.hijri {
            self.resolve_hijri_date(anchor.date())?
        } else {
            self.resolve_date(anchor.date())?
        };

        let clock = |field: Option<u32>, current: u32| match field {
            Some(v) => v,
            None if self.midnight => 0,
            None => current,
        };
        let hour = clock(self.hour_24(), anchor.hour());
        let minute = clock(self.minute, anchor.minute());
        let second = clock(self.second, anchor.second());
        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| out_of_range(format!("invalid time {hour:02}:{minute:02}:{second:02}")))?;

        let mut days = self.days.unwrap_or(0);
        if self.weekday.is_none() {
            days = checked(days, self.weeks.unwrap_or(0).checked_mul(7))?;
        }
        let total = [
            days.checked_mul(86_400),
            self.hours.unwrap_or(0).checked_mul(3_600),
            self.minutes.unwrap_or(0).checked_mul(60),
            Some(self.seconds.unwrap_or(0)),
        ]
        .into_iter()
        .try_fold(0_i64, |acc, part| checked(acc, part))?;
        let delta = TimeDelta::try_seconds(total).ok_or_else(|| out_of_range("offset too large"))?;
        let mut resolved = date
            .and_time(time)
            .checked_add_signed(delta)
            .ok_or_else(|| out_of_range("offset leaves the calendar"))?;

        if let Some(target) = self.weekday {
            let jump = match self.weeks {
                Some(weeks) => week_jump(resolved.date(), target, weeks, options.week_start),
                None => nth_jump(resolved.date(), target, options.week_start),
            };
            let delta = TimeDelta::try_days(jump).ok_or_else(|| out_of_range("offset too large"))?;
            resolved = resolved
                .checked_add_signed(delta)
                .ok_or_else(|| out_of_range("offset leaves the calendar"))?;
        }
        Ok(resolved)
    }

    fn resolve_date(&self, base: NaiveDate) -> Result<NaiveDate> {
        let (year, month) = self.target_month(base.year(), base.month())?;
        let day = self.day.unwrap_or(base.day()).min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| out_of_range(format!("invalid date {year}-{month:02}-{day:02}")))
    }

    fn resolve_hijri_date(&self, base: NaiveDate) -> Result<NaiveDate> {
        let today = hijri::to_hijri(base);
        let (year, month) = self.target_month(today.year, today.month)?;
        let day = self.day.unwrap_or(today.day).min(hijri::month_length(year, month));
        HijriDate::new(year, month, day)
            .to_gregorian()
            .ok_or_else(|| out_of_range(format!("invalid hijri date {year}-{month:02}-{day:02}")))
    }

    /// Year and month after absolute fields, month search and deltas.
    fn target_month(&self, base_year: i32, base_month: u32) -> Result<(i32, u32)> {
        let mut year = self.year.unwrap_or(base_year);
        let mut month = self.month.unwrap_or(base_month);
        if let Some(next) = self.next_month {
            if next <= base_month {
                year += 1;
            }
            month = next;
        }
        if let Some(prev) = self.prev_month {
            if prev >= base_month {
                year -= 1;
            }
            month = prev;
        }
        if !(1..=12).contains(&month) {
            return Err(out_of_range(format!("invalid month {month}")));
        }
        let shift = checked(self.months.unwrap_or(0), self.years.unwrap_or(0).checked_mul(12))?;
        let total = checked(i64::from(year) * 12 + i64::from(month) - 1, Some(shift))?;
        let year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range("year out of range"))?;
        Ok((year, total.rem_euclid(12) as u32 + 1))
    }
}

fn checked(acc: i64, part: Option<i64>) -> Result<i64> {
    part.and_then(|p| acc.checked_add(p))
        .ok_or_else(|| out_of_range("offset too large"))
}

fn out_of_range(reason: impl Into<String>) -> Error {
    Error::TimeOutOfRange {
        reason: reason.into(),
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

fn index(weekday: Weekday) -> i64 {
    i64::from(weekday.num_days_from_monday())
}

fn target_day(target: WeekdayTarget, week_start: Weekday) -> Weekday {
    target.weekday.unwrap_or(week_start)
}

/// Days from `date` to the target day in the week `weeks` away.
fn week_jump(date: NaiveDate, target: WeekdayTarget, weeks: i64, week_start: Weekday) -> i64 {
    let start = index(week_start);
    let into_week = (index(date.weekday()) - start).rem_euclid(7);
    let target_offset = (index(target_day(target, week_start)) - start).rem_euclid(7);
    -into_week + 7 * weeks + target_offset
}

/// Days from `date` to the `nth` occurrence of the target day.
fn nth_jump(date: NaiveDate, target: WeekdayTarget, week_start: Weekday) -> i64 {
    let current = index(date.weekday());
    let wanted = index(target_day(target, week_start));
    let nth = if target.nth == 0 { 1 } else { i64::from(target.nth) };
    if nth > 0 {
        (wanted - current).rem_euclid(7) + 7 * (nth - 1)
    } else {
        -(current - wanted).rem_euclid(7) + 7 * (nth + 1)
    }
}

fn merge_sum(a: Option<i64>, b: Option<i64>) -> Option<i64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.saturating_add(b)),
        (a, b) => b.or(a),
    }
}

/// Right-biased merge: deltas add up, every other field takes the right
/// operand's value when it has one.
impl Add for TimeValue {
    type Output = TimeValue;

    fn add(self, rhs: TimeValue) -> TimeValue {
        TimeValue {
            years: merge_sum(self.years, rhs.years),
            months: merge_sum(self.months, rhs.months),
            weeks: merge_sum(self.weeks, rhs.weeks),
            days: merge_sum(self.days, rhs.days),
            hours: merge_sum(self.hours, rhs.hours),
            minutes: merge_sum(self.minutes, rhs.minutes),
            seconds: merge_sum(self.seconds, rhs.seconds),
            year: rhs.year.or(self.year),
            month: rhs.month.or(self.month),
            day: rhs.day.or(self.day),
            hour: rhs.hour.or(self.hour),
            minute: rhs.minute.or(self.minute),
            second: rhs.second.or(self.second),
            weekday: rhs.weekday.or(self.weekday),
            am_pm: rhs.am_pm.or(self.am_pm),
            next_month: rhs.next_month.or(self.next_month),
            prev_month: rhs.prev_month.or(self.prev_month),
            hijri: self.hijri || rhs.hijri,
            midnight: self.midnight || rhs.midnight,
        }
    }
}

impl std::iter::Sum for TimeValue {
    fn sum<I: Iterator<Item = TimeValue>>(iter: I) -> TimeValue {
        iter.fold(TimeValue::default(), |acc, v| acc + v)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        let relative = [
            ("years", self.years),
            ("months", self.months),
            ("weeks", self.weeks),
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ];
        for (name, value) in relative {
            if let Some(v) = value {
                parts.push(format!("{name}={v:+}"));
            }
        }
        let absolute = [
            ("year", self.year.map(i64::from)),
            ("month", self.month.map(i64::from)),
            ("day", self.day.map(i64::from)),
            ("hour", self.hour.map(i64::from)),
            ("minute", self.minute.map(i64::from)),
            ("second", self.second.map(i64::from)),
            ("next_month", self.next_month.map(i64::from)),
            ("prev_month", self.prev_month.map(i64::from)),
        ];
        for (name, value) in absolute {
            if let Some(v) = value {
                parts.push(format!("{name}={v}"));
            }
        }
        if let Some(target) = self.weekday {
            match target.weekday {
                Some(day) => parts.push(format!("weekday={day}({:+})", target.nth)),
                None => parts.push("weekday=week_start".to_string()),
            }
        }
        if let Some(m) = self.am_pm {
            parts.push(format!("am_pm={m}"));
        }
        if self.hijri {
            parts.push("hijri".to_string());
        }
        if self.midnight {
            parts.push("midnight".to_string());
        }
        if parts.is_empty() {
            f.write_str("now")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// A span between two time values; either end may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeInterval {
    pub start: Option<TimeValue>,
    pub end: Option<TimeValue>,
}

impl TimeInterval {
    pub fn new(start: Option<TimeValue>, end: Option<TimeValue>) -> Self {
        TimeInterval { start, end }
    }

    pub fn resolve(
        &self,
        anchor: NaiveDateTime,
        options: &TimeOptions,
    ) -> Result<(Option<NaiveDateTime>, Option<NaiveDateTime>)> {
        let start = self.start.as_ref().map(|v| v.resolve(anchor, options)).transpose()?;
        let end = self.end.as_ref().map(|v| v.resolve(anchor, options)).transpose()?;
        Ok((start, end))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |v: &Option<TimeValue>| v.as_ref().map_or_else(String::new, |v| v.to_string());
        write!(f, "[{}] .. [{}]", side(&self.start), side(&self.end))
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
