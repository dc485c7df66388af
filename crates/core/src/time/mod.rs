// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time expressions: vocabulary, grammar, deferred values and calendars.

pub mod grammar;
pub mod hijri;
pub mod value;

pub use grammar::{Times, ORDERED_TIMES};
pub use hijri::HijriDate;
pub use value::{Meridiem, TimeInterval, TimeOptions, TimeValue, WeekdayTarget};
