use chrono::{Datelike, Local};
use eventbrite_scraper::parser::*;

fn this_year() -> i32 {
    Local::now().year()
}

#[test_log::test]
fn should_get_nothing_without_date_text() {
    assert_eq!(parse_event_date(None), (None, None));
    assert_eq!(parse_event_date(Some("no month here")), (None, None));
}

#[test_log::test]
fn should_parse_a_range_across_days() {
    let year = this_year();

    assert_eq!(
        parse_event_date(Some("August 24 · 12pm - August 27 · 3pm EDT")),
        (
            Some(format!("08/24/{year} - 12pm, EDT")),
            Some(format!("08/27/{year} - 3pm, EDT"))
        )
    );
}

#[test_log::test]
fn should_parse_a_range_within_a_day() {
    let year = this_year();

    assert_eq!(
        parse_event_date(Some("August 24 · 12pm - 3pm EDT")),
        (
            Some(format!("08/24/{year} - 12pm, EDT")),
            Some(format!("08/24/{year} - 3pm, EDT"))
        )
    );
}

#[test_log::test]
fn should_parse_a_single_start() {
    let year = this_year();

    assert_eq!(
        parse_event_date(Some("August 24 · 12pm EDT")),
        (Some(format!("08/24/{year} - 12pm, EDT")), None)
    );
}

#[test_log::test]
fn should_get_structured_schedule() {
    let schedule = parse_event_schedule("Friday, February 14 · 7pm - 10pm CST", 2025).unwrap();

    assert_eq!(
        schedule,
        EventSchedule {
            start: ParsedDateTime {
                date_text: "02/14/2025".to_string(),
                time_text: "7pm".to_string(),
                timezone: "CST".to_string(),
            },
            end: Some(ParsedDateTime {
                date_text: "02/14/2025".to_string(),
                time_text: "10pm".to_string(),
                timezone: "CST".to_string(),
            }),
        }
    );
}

#[test_log::test]
fn should_split_timezone_tail() {
    assert_eq!(
        split_date_timezone("12pm EDT"),
        ("12pm".to_string(), "EDT".to_string())
    );
    assert_eq!(split_date_timezone("noon"), ("noon".to_string(), String::new()));
}

#[test_log::test]
fn should_extract_contacts_from_a_description() {
    let description = "RSVP at 555-123-4567 or (555) 987-6543. \
        Vendors write to vendors@juneteenthfest.org, press to x.y@z.co";

    assert_eq!(
        extract_phone_numbers(description),
        vec!["555-123-4567", "(555) 987-6543"]
    );
    assert_eq!(
        extract_email_addresses(description),
        vec!["vendors@juneteenthfest.org", "x.y@z.co"]
    );
}

#[test_log::test]
fn should_give_the_same_answer_every_time() {
    let text = Some("November 2 · 6pm - November 3 · 2am PST");

    assert_eq!(parse_event_date(text), parse_event_date(text));
}
