use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(concat!(
        r"\b[0-9]{3}[-.\s]??[0-9]{3}[-.\s]??[0-9]{4}\b",
        r"|\([0-9]{3}\)\s*[0-9]{3}[-.\s]??[0-9]{4}\b",
        r"|\b[0-9]{3}[-.\s]??[0-9]{4}\b",
    ))
    .expect("Failed to create phone regex");
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("Failed to create email regex");
}

/// US-style phone numbers, in the order they appear
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    PHONE_REGEX
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

pub fn extract_email_addresses(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}
