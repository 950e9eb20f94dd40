//! Best-effort extraction of structured values from scraped event text.
//!
//! Nothing in here fails: unparseable input degrades to empty strings or `None`.

pub mod contact;
pub mod date;

pub use contact::{extract_email_addresses, extract_phone_numbers};
pub use date::{
    parse_event_date, parse_event_date_in_year, parse_event_schedule, split_date_time,
    split_date_timezone, DateTextError, EventSchedule, ParsedDateTime,
};
