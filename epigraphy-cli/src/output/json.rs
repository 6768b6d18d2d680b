//! JSON dataset writer

use anyhow::Result;
use epigraphy_core::Record;
use std::io::Write;

/// Writes the dataset as a single JSON array
pub struct DatasetWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> DatasetWriter<W> {
    /// Compact writer, one line for the whole dataset
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Indented output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serialize `records` and flush
    pub fn write(mut self, records: &[Record]) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, records)?;
        } else {
            serde_json::to_writer(&mut self.writer, records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, date: Option<(i32, i32, bool)>) -> Record {
        Record {
            id,
            text: "αβγ.".to_string(),
            metadata: String::new(),
            region_main_id: -1,
            region_main: String::new(),
            region_sub_id: -1,
            region_sub: String::new(),
            date_str: String::new(),
            date_min: date.map(|d| d.0),
            date_max: date.map(|d| d.1),
            date_circa: date.map(|d| d.2),
        }
    }

    #[test]
    fn test_write_compact() {
        let mut buffer = Vec::new();
        DatasetWriter::new(&mut buffer)
            .write(&[record(1, Some((-450, -450, true))), record(2, None)])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["date_min"], -450);
        assert_eq!(value[0]["date_circa"], true);
        assert!(value[1]["date_max"].is_null());
    }

    #[test]
    fn test_write_pretty_round_trips() {
        let mut buffer = Vec::new();
        let records = vec![record(7, Some((101, 200, false)))];
        DatasetWriter::new(&mut buffer)
            .pretty(true)
            .write(&records)
            .unwrap();

        let parsed: Vec<Record> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_write_empty() {
        let mut buffer = Vec::new();
        DatasetWriter::new(&mut buffer).write(&[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
