//! Capture timestamps encoded in filenames
//!
//! Each pattern recognizes one naming scheme at the start of a filename:
//! - `20240615-14-30-00-hills.jpg` date, then hyphenated time
//! - `20240615-beach.jpg` date only, time defaults to noon
//! - `15-06-24_143000.jpg` two-digit day-month-year, compact time
//!
//! A [`PatternSet`] tries its patterns in order. The first one that
//! produces a real calendar date-time wins; a match whose digits don't
//! form a valid date (month 13, Feb 30, hour 24) falls through.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use std::fmt;

use super::data::{CaptureInstant, UnknownDatePolicy};

/// Time given to photos whose filename only carries a date
pub const DATE_ONLY_HOUR: u32 = 12;

/// Two-digit years below this belong to the 2000s, the rest to the 1900s
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// One filename naming scheme
pub trait TimestampPattern: fmt::Debug + Send + Sync {
    /// Short identifier recorded on photos this pattern parsed
    fn name(&self) -> &'static str;

    /// Parse the capture instant from a filename.
    ///
    /// Returns None when the filename doesn't match or the digits
    /// don't form a valid date-time.
    fn parse(&self, filename: &str) -> Option<NaiveDateTime>;

    /// Remove this pattern's timestamp prefix from a filename stem
    fn strip_prefix<'a>(&self, stem: &'a str) -> Option<&'a str>;
}

/// Map a two-digit year onto a full year around [`TWO_DIGIT_YEAR_PIVOT`]
pub fn expand_two_digit_year(yy: i32) -> i32 {
    if yy < TWO_DIGIT_YEAR_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in timestamp pattern must compile")
}

fn field<T: std::str::FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

fn date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(date.and_time(time))
}

fn strip_with<'a>(prefix: &Regex, stem: &'a str) -> Option<&'a str> {
    prefix.find(stem).map(|m| &stem[m.end()..])
}

/// `YYYYMMDD-HH-MM-SS...`, the hyphen after the date is optional
#[derive(Debug, Clone)]
pub struct DateTimePattern {
    parse: Regex,
    prefix: Regex,
}

impl DateTimePattern {
    pub fn new() -> Self {
        Self {
            parse: compile(r"^(\d{4})(\d{2})(\d{2})-?(\d{2})-(\d{2})-(\d{2})"),
            prefix: compile(r"^\d{8}-?\d{2}-\d{2}-\d{2}[-_]?"),
        }
    }
}

impl Default for DateTimePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampPattern for DateTimePattern {
    fn name(&self) -> &'static str {
        "date-time"
    }

    fn parse(&self, filename: &str) -> Option<NaiveDateTime> {
        let caps = self.parse.captures(filename)?;
        date_time(
            field(&caps, 1)?,
            field(&caps, 2)?,
            field(&caps, 3)?,
            field(&caps, 4)?,
            field(&caps, 5)?,
            field(&caps, 6)?,
        )
    }

    fn strip_prefix<'a>(&self, stem: &'a str) -> Option<&'a str> {
        strip_with(&self.prefix, stem)
    }
}

/// `YYYYMMDD-<token>`: a date followed by any text, no time.
///
/// Only the date and its hyphen are timestamp. A leading camera sequence
/// token (letters, optional `_`, at least three digits, like `DJI_0042` or
/// `GOPRO0001`) is dropped from the title as well, so
/// `20240615-DJI_0042-coast.jpg` is titled "coast" while
/// `20240615-santa-cruz.jpg` keeps "santa cruz".
#[derive(Debug, Clone)]
pub struct DateOnlyPattern {
    parse: Regex,
    prefix: Regex,
}

impl DateOnlyPattern {
    pub fn new() -> Self {
        Self {
            parse: compile(r"^(\d{4})(\d{2})(\d{2})-[^-.]"),
            prefix: compile(r"^\d{8}-(?:[A-Za-z]{2,}_?\d{3,}(?:[-_]|$))?"),
        }
    }
}

impl Default for DateOnlyPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampPattern for DateOnlyPattern {
    fn name(&self) -> &'static str {
        "date-only"
    }

    fn parse(&self, filename: &str) -> Option<NaiveDateTime> {
        let caps = self.parse.captures(filename)?;
        date_time(
            field(&caps, 1)?,
            field(&caps, 2)?,
            field(&caps, 3)?,
            DATE_ONLY_HOUR,
            0,
            0,
        )
    }

    fn strip_prefix<'a>(&self, stem: &'a str) -> Option<&'a str> {
        strip_with(&self.prefix, stem)
    }
}

/// `DD-MM-YY_HHMMSS` with a pivoted two-digit year
#[derive(Debug, Clone)]
pub struct DayMonthYearPattern {
    parse: Regex,
    prefix: Regex,
}

impl DayMonthYearPattern {
    pub fn new() -> Self {
        Self {
            parse: compile(r"^(\d{2})-(\d{2})-(\d{2})_(\d{2})(\d{2})(\d{2})"),
            prefix: compile(r"^\d{2}-\d{2}-\d{2}_\d{6}[-_]?"),
        }
    }
}

impl Default for DayMonthYearPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampPattern for DayMonthYearPattern {
    fn name(&self) -> &'static str {
        "day-month-year"
    }

    fn parse(&self, filename: &str) -> Option<NaiveDateTime> {
        let caps = self.parse.captures(filename)?;
        date_time(
            expand_two_digit_year(field(&caps, 3)?),
            field(&caps, 2)?,
            field(&caps, 1)?,
            field(&caps, 4)?,
            field(&caps, 5)?,
            field(&caps, 6)?,
        )
    }

    fn strip_prefix<'a>(&self, stem: &'a str) -> Option<&'a str> {
        strip_with(&self.prefix, stem)
    }
}

/// Ordered list of patterns, first valid match wins
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<Box<dyn TimestampPattern>>,
}

impl PatternSet {
    /// An explicit ordering of patterns
    pub fn new(patterns: Vec<Box<dyn TimestampPattern>>) -> Self {
        Self { patterns }
    }

    /// date-time, then date-only, then day-month-year
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(DateTimePattern::new()),
            Box::new(DateOnlyPattern::new()),
            Box::new(DayMonthYearPattern::new()),
        ])
    }

    /// Append a pattern tried after the existing ones
    pub fn with(mut self, pattern: impl TimestampPattern + 'static) -> Self {
        self.patterns.push(Box::new(pattern));
        self
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Names in the order they are tried
    pub fn names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }

    /// First valid instant and the name of the pattern that produced it
    pub fn parse(&self, filename: &str) -> Option<(NaiveDateTime, &'static str)> {
        self.patterns
            .iter()
            .find_map(|p| p.parse(filename).map(|at| (at, p.name())))
    }

    /// Capture instant for a filename, applying `policy` when nothing matches
    pub fn capture_instant(&self, filename: &str, policy: UnknownDatePolicy) -> CaptureInstant {
        match self.parse(filename) {
            Some((at, pattern)) => CaptureInstant::Parsed { at, pattern },
            None => match policy {
                UnknownDatePolicy::Epoch => CaptureInstant::Unknown,
                UnknownDatePolicy::WallClock => CaptureInstant::WallClock {
                    at: Local::now().naive_local(),
                },
            },
        }
    }

    /// Stem with the first matching timestamp prefix removed.
    ///
    /// Returns the stem unchanged when no pattern's prefix matches.
    pub fn strip_prefix<'a>(&self, stem: &'a str) -> &'a str {
        self.patterns
            .iter()
            .find_map(|p| p.strip_prefix(stem))
            .unwrap_or(stem)
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::standard()
    }
}
