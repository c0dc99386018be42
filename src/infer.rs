//! Column-type classification over raw field text.
//!
//! A [`TypeInference`] instance precomputes the timestamp format set implied
//! by its options, then classifies each value through a fixed priority chain:
//! timestamp, integer (or bigint), numeric, text. The first matching
//! heuristic wins; values matching nothing fall through to text.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use itertools::iproduct;
use rust_decimal::Decimal;

/// Inferred SQL column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    BigInteger,
    Numeric,
    Timestamp,
}

impl ColumnType {
    /// Keyword emitted in the column list of the generated DDL.
    pub fn sql_keyword(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::BigInteger => "bigint",
            ColumnType::Numeric => "numeric",
            ColumnType::Timestamp => "timestamp",
        }
    }
}

/// Which heuristics are enabled and how integer matches are reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceOptions {
    pub timestamps: bool,
    pub integers: bool,
    pub numerics: bool,
    pub big_integers: bool,
}

const COMPACT_DATE_FORMAT: &str = "%Y%m%d";
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", COMPACT_DATE_FORMAT, "%m/%d/%Y", "%b %d, %Y"];
const DATETIME_SEPARATORS: &[&str] = &[" ", "T"];
const TIME_FORMATS: &[(TimeKind, &str)] = &[
    (TimeKind::Naive, "%H:%M:%S"),
    (TimeKind::Zoned, "%H:%M:%S%z"),
    (TimeKind::Zoned, "%H:%M:%S %z"),
    (TimeKind::Naive, "%I:%M:%S %p"),
];

#[derive(Clone, Copy)]
enum TimeKind {
    Naive,
    Zoned,
}

enum TimestampPattern {
    DateOnly(&'static str),
    Naive(String),
    Zoned(String),
}

pub struct TypeInference {
    options: InferenceOptions,
    patterns: Vec<TimestampPattern>,
}

impl TypeInference {
    /// Builds the classifier, expanding the date x separator x time format
    /// join once so per-value classification only iterates a fixed list.
    pub fn new(options: InferenceOptions) -> Self {
        let mut patterns = Vec::new();
        if options.timestamps {
            patterns.extend(DATE_FORMATS.iter().copied().map(TimestampPattern::DateOnly));
            for (date, separator, (kind, time)) in
                iproduct!(DATE_FORMATS, DATETIME_SEPARATORS, TIME_FORMATS)
            {
                let format = format!("{date}{separator}{time}");
                patterns.push(match kind {
                    TimeKind::Naive => TimestampPattern::Naive(format),
                    TimeKind::Zoned => TimestampPattern::Zoned(format),
                });
            }
        }
        Self { options, patterns }
    }

    /// Returns the first type whose heuristic accepts `value`, or
    /// [`ColumnType::Text`] when none does.
    pub fn classify(&self, value: &str) -> ColumnType {
        if self.options.timestamps && self.matches_timestamp(value) {
            return ColumnType::Timestamp;
        }
        if self.options.integers && value.parse::<i64>().is_ok() {
            return if self.options.big_integers {
                ColumnType::BigInteger
            } else {
                ColumnType::Integer
            };
        }
        if self.options.numerics && matches_numeric(value) {
            return ColumnType::Numeric;
        }
        ColumnType::Text
    }

    fn matches_timestamp(&self, value: &str) -> bool {
        let zoned_value = normalize_zone_suffix(value);
        self.patterns.iter().any(|pattern| match pattern {
            TimestampPattern::DateOnly(format) => {
                // The compact date pattern would also accept 7-digit strings
                // (single-digit day); only exact 8-character values qualify.
                if *format == COMPACT_DATE_FORMAT && value.len() != 8 {
                    return false;
                }
                NaiveDate::parse_from_str(value, format).is_ok()
            }
            TimestampPattern::Naive(format) => NaiveDateTime::parse_from_str(value, format).is_ok(),
            TimestampPattern::Zoned(format) => {
                DateTime::parse_from_str(&zoned_value, format).is_ok()
            }
        })
    }
}

fn matches_numeric(value: &str) -> bool {
    if value.parse::<Decimal>().is_ok() {
        return true;
    }
    // Exponent forms and magnitudes past Decimal's 28 digits.
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Rewrites a trailing `Z`/`UTC`/`GMT` zone marker to `+0000` so the
/// offset-bearing formats can parse it.
fn normalize_zone_suffix(value: &str) -> String {
    for marker in ["UTC", "GMT", "Z", "z"] {
        if let Some(rest) = value.trim_end().strip_suffix(marker) {
            return format!("{}+0000", rest.trim_end());
        }
    }
    value.to_string()
}
