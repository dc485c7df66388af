// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The time grammar.
//!
//! Vocabulary (weekdays, months, modifiers, meridiems, unit words) is
//! registered first as value rules. The `time_*` parts are built on it, each
//! reducing to a [`TimeValue`]; a time expression is a run of parts whose
//! values are merged left to right.

use std::sync::Arc;

use chrono::Weekday;
use regex::Captures;

use super::value::{Meridiem, TimeInterval, TimeValue, WeekdayTarget};
use crate::duration::Durations;
use crate::error::{Error, Result};
use crate::expression::Expression;
use crate::numeral::Numerals;
use crate::patterns::{alternation, word, Fractions, DIGIT, TAA};
use crate::rule::{RuleCollection, RuleSet};
use crate::units::{DurationUnit, ValueUnit};
use crate::value::Value;

/// Time parts in matching priority: idioms and qualified forms before the
/// bare words they contain.
pub const ORDERED_TIMES: [&str; 22] = [
    "time_after_tomorrow",
    "time_before_yesterday",
    "time_relative_duration",
    "time_unit_mod",
    "time_this_unit",
    "time_weekday_mod",
    "time_this_weekday",
    "time_day_month",
    "time_month_mod",
    "time_weekday",
    "time_month",
    "time_date_dmy",
    "time_date_ymd",
    "time_year",
    "time_clock",
    "time_clock_digits",
    "time_clock_ampm",
    "time_tomorrow",
    "time_yesterday",
    "time_today",
    "time_now",
    "time_ampm",
];

/// Separator between the parts of one time expression.
const PART_SEPARATOR: &str = r"(?:\s*[،,]\s*|\s+)(?:(?:في|على|عند)\s+)?";

const TOMORROW: &str = "بكر[اةه]|بكرى|غد[اً]*|الغد";
const YESTERDAY: &str = "[أا]مس|[اإ]?مبارح|البارح[ةه]";

const WEEKDAYS: [(&str, &str, Weekday); 7] = [
    ("sunday", "ال[أا]حد", Weekday::Sun),
    ("monday", "ال[اإ]ثنين|ال[اإ]تنين|التنين", Weekday::Mon),
    ("tuesday", "الثلاثاء?|التلاتاء?|التلات", Weekday::Tue),
    ("wednesday", "ال[أا]ربعاء?", Weekday::Wed),
    ("thursday", "الخميس", Weekday::Thu),
    ("friday", "الجمع[ةه]", Weekday::Fri),
    ("saturday", "السبت", Weekday::Sat),
];

const GREGORIAN_MONTHS: [(&str, &str); 12] = [
    ("january", "يناير|كانون الثاني|جانفي"),
    ("february", "فبراير|شباط|فيفري"),
    ("march", "مارس|[آا]ذار"),
    ("april", "[أا]بريل|نيسان|[أا]فريل"),
    ("may", "مايو|[أا]يار|ماي"),
    ("june", "يونيو|يونيه|حزيران|جوان"),
    ("july", "يوليو|يوليه|تموز|جويلي[ةه]"),
    ("august", "[أا]غسطس|آب|[أا]وت"),
    ("september", "سبتمبر|[أا]يلول"),
    ("october", "[أا]كتوبر|تشرين ال[أا]ول"),
    ("november", "نوفمبر|تشرين الثاني"),
    ("december", "ديسمبر|كانون ال[أا]ول"),
];

const HIJRI_MONTHS: [(&str, &str); 12] = [
    ("muharram", "محرم"),
    ("safar", "شهر صفر"),
    ("rabi_al_awwal", "ربيع ال[أا]ول"),
    ("rabi_al_thani", "ربيع (?:الثاني|ال[آا]خر)"),
    ("jumada_al_ula", "جماد[ىي] ال[أا]ول[ىي]"),
    ("jumada_al_akhirah", "جماد[ىي] (?:الثاني[ةه]|ال[آا]خر[ةه])"),
    ("rajab", "رجب"),
    ("shaban", "شعبان"),
    ("ramadan", "رمضان"),
    ("shawwal", "شوال"),
    ("dhu_al_qadah", "ذ[وي] القعد[ةه]"),
    ("dhu_al_hijjah", "ذ[وي] الحج[ةه]"),
];

/// The vocabulary the time parts read their captures with.
#[derive(Debug)]
struct Vocabulary {
    weekdays: RuleCollection,
    gregorian: RuleCollection,
    hijri: RuleCollection,
    modifiers: RuleCollection,
    meridiems: RuleCollection,
    units: RuleCollection,
    fractions: Fractions,
    numerals: Arc<Numerals>,
    duration: Expression,
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> Option<&'h str> {
    caps.name(name).map(|m| m.as_str())
}

fn required<'h>(caps: &Captures<'h>, name: &str) -> Result<&'h str> {
    group(caps, name).ok_or_else(|| Error::MissingCaptureGroup(name.to_string()))
}

fn lookup(rules: &RuleCollection, text: &str, what: &str) -> Result<Value> {
    rules
        .lookup_value(text.trim())?
        .ok_or_else(|| Error::UnknownRule(format!("{what} '{text}'")))
}

impl Vocabulary {
    fn number(&self, text: &str) -> Result<u32> {
        Ok(self.numerals.reduce(text)? as u32)
    }

    fn weekday(&self, text: &str) -> Result<Weekday> {
        let text = text.strip_prefix("يوم").map_or(text, str::trim_start);
        let index = lookup(&self.weekdays, text, "weekday")?.as_i64().unwrap_or(-1);
        WEEKDAYS
            .iter()
            .map(|(_, _, day)| *day)
            .find(|day| i64::from(day.num_days_from_monday()) == index)
            .ok_or_else(|| Error::UnknownRule(format!("weekday '{text}'")))
    }

    /// Month number and whether it is a Hijri month.
    fn month(&self, text: &str) -> Result<(u32, bool)> {
        let text = text.trim();
        for candidate in [Some(text), text.strip_prefix("شهر").map(str::trim_start)]
            .into_iter()
            .flatten()
        {
            if let Some(v) = self.hijri.lookup_value(candidate)? {
                return Ok((v.as_i64().unwrap_or(0) as u32, true));
            }
            if let Some(v) = self.gregorian.lookup_value(candidate)? {
                return Ok((v.as_i64().unwrap_or(0) as u32, false));
            }
        }
        Err(Error::UnknownRule(format!("month '{text}'")))
    }

    fn modifier(&self, text: &str) -> Result<i64> {
        Ok(lookup(&self.modifiers, text, "modifier")?.as_i64().unwrap_or(0))
    }

    fn meridiem(&self, text: &str) -> Result<Meridiem> {
        match lookup(&self.meridiems, text, "meridiem")?.as_str() {
            Some("pm") => Ok(Meridiem::Pm),
            _ => Ok(Meridiem::Am),
        }
    }

    fn unit(&self, text: &str) -> Result<DurationUnit> {
        match lookup(&self.units, text, "time unit")? {
            Value::DurationUnit(vu) => Ok(vu.unit),
            _ => Err(Error::UnknownRule(format!("time unit '{text}'"))),
        }
    }

    fn fraction(&self, text: &str) -> Result<f64> {
        self.fractions
            .value(text)?
            .ok_or_else(|| Error::UnknownRule(format!("fraction '{text}'")))
    }

    fn relative_duration(&self, caps: &Captures<'_>) -> Result<TimeValue> {
        let sign = match required(caps, "dir")? {
            "قبل" | "من" => -1,
            _ => 1,
        };
        let text = required(caps, "duration")?;
        match self.duration.full_match(text)?.map(|r| r.value) {
            Some(Value::Duration(measure)) => Ok(TimeValue::from_duration(&measure, sign)),
            _ => Err(Error::UnknownRule(format!("duration '{text}'"))),
        }
    }

    /// "the <unit> <modifier>": shifted by whole units, truncated to the
    /// start of the unit.
    fn unit_shift(&self, caps: &Captures<'_>) -> Result<TimeValue> {
        let unit = self.unit(required(caps, "unit")?)?;
        let n = self.modifier(required(caps, "mod")?)?;
        let mut value = TimeValue::new();
        value.add_relative(unit, n);
        Ok(match unit {
            DurationUnit::Years => TimeValue {
                month: Some(1),
                day: Some(1),
                ..value
            }
            .at_midnight(),
            DurationUnit::Months => TimeValue { day: Some(1), ..value }.at_midnight(),
            DurationUnit::Weeks => TimeValue {
                weekday: Some(WeekdayTarget::week_start()),
                ..value
            }
            .at_midnight(),
            DurationUnit::Days => value.at_midnight(),
            DurationUnit::Hours => TimeValue {
                minute: Some(0),
                second: Some(0),
                ..value
            },
            DurationUnit::Minutes => TimeValue {
                second: Some(0),
                ..value
            },
            DurationUnit::Seconds => value,
        })
    }

    fn weekday_shift(&self, caps: &Captures<'_>) -> Result<TimeValue> {
        let weekday = self.weekday(required(caps, "weekday")?)?;
        let weeks = self.modifier(required(caps, "mod")?)?;
        Ok(TimeValue {
            weeks: Some(weeks),
            weekday: Some(WeekdayTarget::new(weekday)),
            ..TimeValue::default()
        }
        .at_midnight())
    }

    fn month_shift(&self, caps: &Captures<'_>) -> Result<TimeValue> {
        let (month, hijri) = self.month(required(caps, "month")?)?;
        let n = self.modifier(required(caps, "mod")?)?;
        let mut value = TimeValue {
            day: Some(1),
            hijri,
            ..TimeValue::default()
        };
        match n {
            0 => value.month = Some(month),
            n if n > 0 => {
                value.next_month = Some(month);
                value.years = (n > 1).then_some(n - 1);
            }
            n => {
                value.prev_month = Some(month);
                value.years = (n < -1).then_some(n + 1);
            }
        }
        Ok(value.at_midnight())
    }

    fn date(&self, caps: &Captures<'_>) -> Result<TimeValue> {
        let (month, hijri) = match group(caps, "month") {
            Some(text) if text.chars().all(|c| c.is_numeric()) => (self.number(text)?, false),
            Some(text) => self.month(text)?,
            None => return Err(Error::MissingCaptureGroup("month".to_string())),
        };
        let day = group(caps, "day").map(|d| self.number(d)).transpose()?;
        let year = group(caps, "year").map(|y| self.number(y)).transpose()?;
        Ok(TimeValue {
            year: year.map(|y| y as i32),
            month: Some(month),
            day: Some(day.unwrap_or(1)),
            hijri,
            ..TimeValue::default()
        }
        .at_midnight())
    }

    fn clock(&self, caps: &Captures<'_>) -> Result<TimeValue> {
        let mut hour = self.number(required(caps, "hour")?)?;
        let mut minute = 0;
        if let Some(text) = group(caps, "minute") {
            minute = self.number(text)?;
        } else if let Some(text) = group(caps, "plus") {
            minute = (self.fraction(text)? * 60.0).round() as u32;
        } else if let Some(text) = group(caps, "minus") {
            minute = 60 - (self.fraction(text)? * 60.0).round() as u32;
            hour = if hour == 0 { 23 } else { hour - 1 };
        } else if let Some(text) = group(caps, "minutes") {
            minute = self.number(text)?;
        }
        let am_pm = group(caps, "ampm").map(|t| self.meridiem(t)).transpose()?;
        Ok(TimeValue {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(0),
            am_pm,
            ..TimeValue::default()
        })
    }
}

/// The time rules and grammar.
#[derive(Debug)]
pub struct Times {
    parts: RuleCollection,
    hour: Arc<Expression>,
}

impl Times {
    /// Registers the time vocabulary, the `time_*` parts and `time_hour`.
    pub fn register(
        rules: &mut RuleSet,
        numerals: Arc<Numerals>,
        fractions: Fractions,
        durations: &Durations,
    ) -> Result<Self> {
        for (name, pattern, day) in WEEKDAYS {
            let index = i64::from(day.num_days_from_monday());
            rules.add(name, Expression::value(word(pattern), Value::Integer(index)))?;
        }
        for (number, (name, pattern)) in (1..).zip(GREGORIAN_MONTHS) {
            rules.add(name, Expression::value(word(pattern), Value::Integer(number)))?;
        }
        for (number, (name, pattern)) in (1..).zip(HIJRI_MONTHS) {
            rules.add(name, Expression::value(word(pattern), Value::Integer(number)))?;
        }

        let next = format!(
            "القادم{TAA}?|الجايي{TAA}|الجاي{TAA}?|المقبل{TAA}?|التالي{TAA}?|(?:اللي|الي) ?جاي{TAA}?"
        );
        let previous = format!(
            "الماضي{TAA}?|الفائت{TAA}?|الفايت{TAA}?|السابق{TAA}?|المنصرم{TAA}?|(?:اللي|الي) ?فاتت?"
        );
        let modifiers = [
            ("after_next", format!(r"بعد\s+{}", word(&next)), 2),
            ("before_previous", format!(r"قبل\s+{}", word(&previous)), -2),
            ("next", word(&next), 1),
            ("previous", word(&previous), -1),
            ("this", word("هذا|هذه|هذي|هاد|هاي|هادا|هاذا"), 0),
        ];
        for (name, pattern, value) in modifiers {
            rules.add(name, Expression::value(pattern, Value::Integer(value)))?;
        }

        let meridiems = [
            ("am", "صباح[اً]*|الصبح|الصباح|فجر[اً]*|الفجر", "am"),
            (
                "pm",
                "مساء[اً]*|المساء|المسا|مسا|ليل[اً]*|بالليل|الليل|ظهر[اً]*|الظهر|بعد الظهر|العصر|عصر[اً]*",
                "pm",
            ),
            ("am_short", "ص", "am"),
            ("pm_short", "م", "pm"),
        ];
        for (name, pattern, value) in meridiems {
            rules.add(name, Expression::value(word(pattern), Value::Text(value.to_string())))?;
        }

        let units = [
            ("the_year", format!("ال(?:سن{TAA}|عام)"), DurationUnit::Years),
            ("the_month", "الشهر".to_string(), DurationUnit::Months),
            ("the_week", "ال[أا]سبوع".to_string(), DurationUnit::Weeks),
            ("the_day", "اليوم".to_string(), DurationUnit::Days),
            ("the_hour", format!("الساع{TAA}"), DurationUnit::Hours),
            ("the_minute", format!("الدقيق{TAA}"), DurationUnit::Minutes),
        ];
        for (name, pattern, unit) in units {
            let value = Value::DurationUnit(ValueUnit::new(1.0, unit));
            rules.add(name, Expression::value(word(&pattern), value))?;
        }

        let vocabulary = Arc::new(Vocabulary {
            weekdays: rules.slice("sunday", "saturday")?,
            gregorian: rules.slice("january", "december")?,
            hijri: rules.slice("muharram", "dhu_al_hijjah")?,
            modifiers: rules.slice("after_next", "this")?,
            meridiems: rules.slice("am", "pm_short")?,
            units: rules.slice("the_year", "the_minute")?,
            fractions: fractions.clone(),
            numerals: Arc::clone(&numerals),
            duration: durations.expression()?,
        });

        let p = PartPatterns::new(rules, &vocabulary, &fractions, &numerals, durations)?;
        let v = &vocabulary;
        let parts: [(&str, String, PartReducer); 22] = [
            ("time_after_tomorrow", format!(r"بعد\s+{}", word(TOMORROW)), fixed_days(2)),
            (
                "time_before_yesterday",
                format!(r"(?:[أا]ول|قبل)\s+{}", word(YESTERDAY)),
                fixed_days(-2),
            ),
            (
                "time_relative_duration",
                format!(r"(?P<dir>بعد|خلال|قبل|من)\s+(?P<duration>{})", p.duration),
                reducer(v, Vocabulary::relative_duration),
            ),
            (
                "time_unit_mod",
                format!(r"(?P<unit>{})\s+(?P<mod>{})", p.unit, p.modifier),
                reducer(v, Vocabulary::unit_shift),
            ),
            (
                "time_this_unit",
                format!(r"(?P<mod>{})\s+(?P<unit>{})", p.this, p.unit),
                reducer(v, Vocabulary::unit_shift),
            ),
            (
                "time_weekday_mod",
                format!(r"(?P<weekday>{})\s+(?P<mod>{})", p.weekday, p.modifier),
                reducer(v, Vocabulary::weekday_shift),
            ),
            (
                "time_this_weekday",
                format!(r"(?P<mod>{})\s+(?P<weekday>{})", p.this, p.weekday),
                reducer(v, Vocabulary::weekday_shift),
            ),
            (
                "time_day_month",
                format!(
                    r"(?P<day>{DIGIT}{{1,2}}|{})\s+(?:من\s+)?(?P<month>{})(?:\s*[،,]?\s*(?:(?:سن{TAA}|عام)\s+)?(?P<year>{DIGIT}{{4}})\b)?",
                    p.day, p.month
                ),
                reducer(v, Vocabulary::date),
            ),
            (
                "time_month_mod",
                format!(r"(?P<month>{})\s+(?P<mod>{})", p.month, p.modifier),
                reducer(v, Vocabulary::month_shift),
            ),
            (
                "time_weekday",
                format!(r"(?P<weekday>{})", p.weekday),
                reducer(v, |v: &Vocabulary, caps: &Captures<'_>| {
                    let weekday = v.weekday(required(caps, "weekday")?)?;
                    Ok(TimeValue {
                        weekday: Some(WeekdayTarget::new(weekday)),
                        ..TimeValue::default()
                    }
                    .at_midnight())
                }),
            ),
            (
                "time_month",
                format!(r"(?P<month>{})(?:\s+(?P<year>{DIGIT}{{4}})\b)?", p.month),
                reducer(v, Vocabulary::date),
            ),
            (
                "time_date_dmy",
                format!(r"(?P<day>{DIGIT}{{1,2}})[/\-.](?P<month>{DIGIT}{{1,2}})[/\-.](?P<year>{DIGIT}{{4}})\b"),
                reducer(v, Vocabulary::date),
            ),
            (
                "time_date_ymd",
                format!(r"(?P<year>{DIGIT}{{4}})[/\-.](?P<month>{DIGIT}{{1,2}})[/\-.](?P<day>{DIGIT}{{1,2}})\b"),
                reducer(v, Vocabulary::date),
            ),
            (
                "time_year",
                format!(r"(?:سن{TAA}|عام)\s+(?P<year>{DIGIT}{{4}})\b"),
                reducer(v, |v: &Vocabulary, caps: &Captures<'_>| {
                    let year = v.number(required(caps, "year")?)?;
                    Ok(TimeValue {
                        year: Some(year as i32),
                        ..TimeValue::default()
                    })
                }),
            ),
            (
                "time_clock",
                format!(
                    r"الساع{TAA}\s+(?P<hour>{})(?:{})?(?:\s*(?P<ampm>{}))?",
                    p.hour, p.minutes, p.meridiem
                ),
                reducer(v, Vocabulary::clock),
            ),
            (
                "time_clock_digits",
                format!(
                    r"(?P<hour>{DIGIT}{{1,2}}):(?P<minute>{DIGIT}{{2}})(?:\s*(?P<ampm>{}))?",
                    p.meridiem
                ),
                reducer(v, Vocabulary::clock),
            ),
            (
                "time_clock_ampm",
                format!(
                    r"(?P<hour>{})(?:{})?\s*(?P<ampm>{})",
                    p.hour, p.minutes, p.meridiem
                ),
                reducer(v, Vocabulary::clock),
            ),
            ("time_tomorrow", word(TOMORROW), fixed_days(1)),
            ("time_yesterday", word(YESTERDAY), fixed_days(-1)),
            (
                "time_today",
                word("اليوم"),
                Arc::new(|_: &Captures<'_>| -> Result<TimeValue> { Ok(TimeValue::new().at_midnight()) }),
            ),
            (
                "time_now",
                word("ال[آا]ن|هل[أا]|هلق|هس[ةه]|هسا|حالي[اً]*"),
                Arc::new(|_: &Captures<'_>| -> Result<TimeValue> { Ok(TimeValue::new()) }),
            ),
            (
                "time_ampm",
                format!(r"(?P<ampm>{})", p.meridiem_long),
                reducer(v, |v: &Vocabulary, caps: &Captures<'_>| {
                    Ok(TimeValue {
                        am_pm: Some(v.meridiem(required(caps, "ampm")?)?),
                        ..TimeValue::default()
                    })
                }),
            ),
        ];
        for (name, pattern, reduce) in parts {
            rules.add(name, time_expression(pattern, reduce))?;
        }

        let hour = rules.add(
            "time_hour",
            time_expression(
                format!(
                    r"(?P<hour>{})(?:{})?(?:\s*(?P<ampm>{}))?",
                    p.hour, p.minutes, p.meridiem
                ),
                reducer(v, Vocabulary::clock),
            ),
        )?;

        Ok(Times {
            parts: rules.collect(&ORDERED_TIMES)?,
            hour,
        })
    }

    /// The `time_*` parts in priority order.
    pub fn parts(&self) -> &RuleCollection {
        &self.parts
    }

    /// A run of time parts, merged into one [`TimeValue`].
    pub fn expression(&self) -> Result<Expression> {
        self.parts.combine(PART_SEPARATOR, |values| {
            let merged: TimeValue = values
                .into_iter()
                .filter_map(|v| match v {
                    Value::Time(t) => Some(t),
                    _ => None,
                })
                .sum();
            Ok(Value::Time(merged))
        })
    }

    /// "من <time> إلى <time>". Either side may be a bare hour; the start
    /// takes the end's meridiem when it has none.
    pub fn interval(&self, time: &Arc<Expression>) -> Expression {
        let side = alternation([time.bare_pattern(), self.hour.bare_pattern()]);
        let pattern = format!(
            r"\bمن\s+(?P<start>{side})\s*(?:[إا]لى|حتى|لغاية)\s+(?P<end>{side})"
        );
        let time = Arc::clone(time);
        let hour = Arc::clone(&self.hour);
        Expression::reduce(pattern, move |caps, _| {
            let read = |name: &str| -> Result<TimeValue> {
                let text = required(caps, name)?;
                for expression in [&time, &hour] {
                    if let Some(Value::Time(value)) = expression.full_match(text)?.map(|r| r.value) {
                        return Ok(value);
                    }
                }
                Err(Error::UnknownRule(format!("time '{text}'")))
            };
            let mut start = read("start")?;
            let end = read("end")?;
            if start.hour.is_some() && start.am_pm.is_none() {
                start.am_pm = end.am_pm;
            }
            Ok(Value::Interval(TimeInterval::new(Some(start), Some(end))))
        })
    }

    /// "حتى <time>": an interval open at the start.
    pub fn until(&self, time: &Arc<Expression>) -> Expression {
        let pattern = format!(r"\b(?:حتى|لغاية)\s+(?P<end>{})", time.bare_pattern());
        let time = Arc::clone(time);
        Expression::reduce(pattern, move |caps, _| {
            let text = required(caps, "end")?;
            match time.full_match(text)?.map(|r| r.value) {
                Some(Value::Time(end)) => Ok(Value::Interval(TimeInterval::new(None, Some(end)))),
                _ => Err(Error::UnknownRule(format!("time '{text}'"))),
            }
        })
    }
}

type PartReducer = Arc<dyn Fn(&Captures<'_>) -> Result<TimeValue> + Send + Sync>;

fn reducer<F>(vocabulary: &Arc<Vocabulary>, f: F) -> PartReducer
where
    F: Fn(&Vocabulary, &Captures<'_>) -> Result<TimeValue> + Send + Sync + 'static,
{
    let vocabulary = Arc::clone(vocabulary);
    Arc::new(move |caps: &Captures<'_>| f(&vocabulary, caps))
}

fn fixed_days(days: i64) -> PartReducer {
    Arc::new(move |_: &Captures<'_>| -> Result<TimeValue> {
        Ok(TimeValue {
            days: Some(days),
            ..TimeValue::default()
        }
        .at_midnight())
    })
}

fn time_expression(pattern: String, reduce: PartReducer) -> Expression {
    Expression::reduce(pattern, move |caps, _| reduce(caps).map(Value::Time))
}

/// Sub-patterns shared by the parts, named groups stripped.
struct PartPatterns {
    duration: String,
    unit: String,
    modifier: String,
    this: String,
    weekday: String,
    month: String,
    day: String,
    hour: String,
    minutes: String,
    meridiem: String,
    meridiem_long: String,
}

impl PartPatterns {
    fn new(
        rules: &RuleSet,
        vocabulary: &Vocabulary,
        fractions: &Fractions,
        numerals: &Numerals,
        durations: &Durations,
    ) -> Result<Self> {
        let fraction = fractions.pattern();
        let ones = rules.slice("one", "nine")?.join();
        let ten = rules.slice("ten", "ten")?.join();
        let teens = rules.slice("eleven", "nineteen")?.join();
        let twenty_thirty = rules.collect(&["twenty", "thirty"])?.join();
        let hour_word = alternation([rules.slice("eleven", "twelve")?.join(), ten.clone(), ones.clone()]);
        let day_word = format!(
            r"{}(?:\s*و\s*{twenty_thirty})?",
            alternation([teens, twenty_thirty.clone(), ten, ones])
        );
        let minutes = format!(
            r"(?::(?P<minute>{DIGIT}{{2}})|\s*و\s*(?P<plus>{fraction})|\s*[إا]لا\s*(?P<minus>ربع|ثلث)\b|\s*و\s*(?P<minutes>{})\s*(?:دقيق{TAA}|دقائق|دقايق)\b)",
            numerals.pattern()
        );
        Ok(PartPatterns {
            duration: durations.expression()?.bare_pattern(),
            unit: vocabulary.units.join(),
            modifier: vocabulary.modifiers.join(),
            this: rules.slice("this", "this")?.join(),
            weekday: format!(r"(?:يوم\s+)?{}", vocabulary.weekdays.join()),
            month: format!(
                r"(?:شهر\s+)?{}",
                vocabulary.gregorian.clone().chain(&vocabulary.hijri).join()
            ),
            day: day_word,
            hour: format!("(?:{DIGIT}{{1,2}}|{hour_word})"),
            minutes,
            meridiem: vocabulary.meridiems.join(),
            meridiem_long: rules.slice("am", "pm")?.join(),
        })
    }
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
