use crate::error::ScraperError;
use crate::eventbrite::model::EventRecord;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writes one JSON object per line
pub struct RecordWriter {
    out: Box<dyn Write + Send>,
}

impl RecordWriter {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    /// Appends to `path`, creating it and its parent directories if needed
    pub fn append_to(path: &Path) -> Result<Self, ScraperError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self::new(Box::new(file)))
    }

    pub fn open(path: Option<&Path>) -> Result<Self, ScraperError> {
        match path {
            Some(path) => Self::append_to(path),
            None => Ok(Self::stdout()),
        }
    }

    pub fn write(&mut self, record: &EventRecord) -> Result<(), ScraperError> {
        let line = serde_json::to_string(record)?;
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn record() -> EventRecord {
        EventRecord {
            name: Some("Juneteenth Festival".to_string()),
            start: Some("06/19/2024 - 11am, EDT".to_string()),
            end: None,
            address: "Freedom Park Atlanta, GA".to_string(),
            phone: "404-555-0188".to_string(),
            email: String::new(),
            image_url: String::new(),
        }
    }

    #[test_log::test]
    fn should_append_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/events.ndjson");

        let mut writer = RecordWriter::append_to(&path).unwrap();
        writer.write(&record()).unwrap();
        writer.write(&record()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test_log::test]
    fn should_use_output_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.ndjson");

        RecordWriter::open(Some(&path))
            .unwrap()
            .write(&record())
            .unwrap();

        let line: Value = serde_json::from_str(fs::read_to_string(&path).unwrap().trim()).unwrap();

        assert_eq!(line["Event Name"], "Juneteenth Festival");
        assert_eq!(line["Start Date & Time"], "06/19/2024 - 11am, EDT");
        assert_eq!(line["End Date & Time"], Value::Null);
        assert_eq!(line["Address"], "Freedom Park Atlanta, GA");
        assert_eq!(line["Phone"], "404-555-0188");
        assert_eq!(line["Email"], "");
        assert_eq!(line["Image"], "");
    }
}
