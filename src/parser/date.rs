use chrono::{Datelike, Local, NaiveDate};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::warn;

const ENGLISH_MONTHS: [&str; 12] = [
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

const RANGE_SEPARATOR: &str = " - ";
const DATE_TIME_SEPARATOR: &str = " · ";
const TIME_LABELS: [&str; 2] = ["am", "pm"];
/// The label itself plus the character right after it
const TIME_LABEL_SPAN: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateTextError {
    #[error("no month name found")]
    NoMonthFound,
    #[error("'{0}' does not contain the ' · ' separator")]
    MalformedDateText(String),
    #[error("'{0}' is not a '<Month> <Day>' date")]
    UnparseableMonthDay(String),
}

/// A single side of an event schedule, already formatted for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDateTime {
    /// `MM/DD/YYYY`, or empty if the date could not be parsed
    pub date_text: String,
    pub time_text: String,
    pub timezone: String,
}

impl Display for ParsedDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}, {}", self.date_text, self.time_text, self.timezone)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSchedule {
    pub start: ParsedDateTime,
    pub end: Option<ParsedDateTime>,
}

impl EventSchedule {
    pub fn formatted(&self) -> (String, Option<String>) {
        (
            self.start.to_string(),
            self.end.as_ref().map(ParsedDateTime::to_string),
        )
    }
}

/**
Parses schedule text such as `August 24 · 12pm - August 27 · 3pm EDT` into
formatted start and end strings, dating them in the current year.

Returns `(None, None)` when there is no text or no month name in it.
*/
pub fn parse_event_date(date_text: Option<&str>) -> (Option<String>, Option<String>) {
    parse_event_date_in_year(date_text, Local::now().year())
}

pub fn parse_event_date_in_year(
    date_text: Option<&str>,
    year: i32,
) -> (Option<String>, Option<String>) {
    match date_text.map(|text| parse_event_schedule(text, year)) {
        Some(Ok(schedule)) => {
            let (start, end) = schedule.formatted();
            (Some(start), end)
        }
        _ => (None, None),
    }
}

pub fn parse_event_schedule(date_text: &str, year: i32) -> Result<EventSchedule, DateTextError> {
    // Months are tried in calendar order, not by where they appear in the text
    let month_index = ENGLISH_MONTHS
        .iter()
        .find_map(|month| date_text.find(month))
        .ok_or(DateTextError::NoMonthFound)?;
    let date_text = &date_text[month_index..];

    // Anything past a second range separator is dropped
    let mut halves = date_text.split(RANGE_SEPARATOR);

    match (halves.next(), halves.next()) {
        (Some(start_text), Some(end_text)) => {
            let (end_date_time, timezone) = split_date_timezone(end_text);
            let (start_date, start_time) = split_date_time_in_year(start_text, year);

            let (end_date, end_time) = if end_date_time.contains(DATE_TIME_SEPARATOR) {
                split_date_time_in_year(&end_date_time, year)
            } else {
                // Only a time was given, so the event ends on the day it starts
                (start_date.clone(), end_date_time.trim().to_string())
            };

            Ok(EventSchedule {
                start: ParsedDateTime {
                    date_text: start_date,
                    time_text: start_time,
                    timezone: timezone.clone(),
                },
                end: Some(ParsedDateTime {
                    date_text: end_date,
                    time_text: end_time,
                    timezone,
                }),
            })
        }
        _ => {
            let (date_time, timezone) = split_date_timezone(date_text);
            let (date, time) = split_date_time_in_year(&date_time, year);

            Ok(EventSchedule {
                start: ParsedDateTime {
                    date_text: date,
                    time_text: time,
                    timezone,
                },
                end: None,
            })
        }
    }
}

/// Splits `12pm EDT` into `("12pm", "EDT")`. Text without `am`/`pm` comes back whole.
pub fn split_date_timezone(text: &str) -> (String, String) {
    let label_index = TIME_LABELS.iter().find_map(|label| text.find(label));

    match label_index {
        Some(index) => {
            let boundary = text[index..]
                .char_indices()
                .nth(TIME_LABEL_SPAN)
                .map(|(offset, _)| index + offset)
                .unwrap_or(text.len());

            (
                text[..boundary].trim().to_string(),
                text[boundary..].trim().to_string(),
            )
        }
        None => (text.to_string(), String::new()),
    }
}

/// Splits `August 24 · 12pm` into `("08/24/<current year>", "12pm")`, or two
/// empty strings when the text doesn't have that shape.
pub fn split_date_time(text: &str) -> (String, String) {
    split_date_time_in_year(text, Local::now().year())
}

pub fn split_date_time_in_year(text: &str, year: i32) -> (String, String) {
    try_split_date_time(text, year).unwrap_or_else(|err| {
        warn!("Failed to split date and time: {err}");
        (String::new(), String::new())
    })
}

pub fn try_split_date_time(text: &str, year: i32) -> Result<(String, String), DateTextError> {
    let mut segments = text.split(DATE_TIME_SEPARATOR);

    let (Some(month_day), Some(time)) = (segments.next(), segments.next()) else {
        return Err(DateTextError::MalformedDateText(text.to_string()));
    };

    let date = parse_month_day(month_day, year)?;

    Ok((date.format("%m/%d/%Y").to_string(), time.to_string()))
}

fn parse_month_day(month_day: &str, year: i32) -> Result<NaiveDate, DateTextError> {
    // chrono's %B also takes abbreviations like "Aug"
    let has_full_month = month_day.split_whitespace().next().is_some_and(|word| {
        ENGLISH_MONTHS
            .iter()
            .any(|month| month.eq_ignore_ascii_case(word))
    });

    if !has_full_month {
        return Err(DateTextError::UnparseableMonthDay(month_day.to_string()));
    }

    NaiveDate::parse_from_str(&format!("{month_day} {year}"), "%B %d %Y")
        .map_err(|_| DateTextError::UnparseableMonthDay(month_day.to_string()))
}
