// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tabular Islamic (Hijri) calendar.
//!
//! The arithmetic civil calendar: a 30-year cycle with 11 leap years, odd
//! months of 30 days and even months of 29, the twelfth month gaining a day
//! in leap years. Day numbers are chrono's days from the common era, where
//! 0001-01-01 is day 1.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Day number of 1 Muharram 1 AH (16 July 622, Julian).
const EPOCH: i64 = 227_015;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        HijriDate { year, month, day }
    }

    pub fn to_gregorian(self) -> Option<NaiveDate> {
        from_hijri(self.year, self.month, self.day)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

pub fn month_length(year: i32, month: u32) -> u32 {
    if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
        30
    } else {
        29
    }
}

fn fixed(year: i64, month: i64, day: i64) -> i64 {
    day + 29 * (month - 1)
        + (6 * month - 1).div_euclid(11)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + EPOCH
        - 1
}

/// The Hijri date falling on `date`.
pub fn to_hijri(date: NaiveDate) -> HijriDate {
    let rd = i64::from(date.num_days_from_ce());
    let year = (30 * (rd - EPOCH) + 10_646).div_euclid(10_631);
    let prior = rd - fixed(year, 1, 1);
    let month = (11 * prior + 330).div_euclid(325);
    let day = rd - fixed(year, month, 1) + 1;
    HijriDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}

/// The Gregorian date of a Hijri date; `None` for an invalid month or day.
pub fn from_hijri(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || day == 0 || day > month_length(year, month) {
        return None;
    }
    let rd = fixed(i64::from(year), i64::from(month), i64::from(day));
    NaiveDate::from_num_days_from_ce_opt(i32::try_from(rd).ok()?)
}

#[cfg(test)]
#[path = "hijri_tests.rs"]
mod tests;
