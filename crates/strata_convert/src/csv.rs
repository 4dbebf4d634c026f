//! CSV converter.

use serde_json::{Map, Value};

/// `json` builds an array of header-keyed objects; everything else returns the source.
///
/// Values stay strings. Rows shorter than the header omit the missing keys,
/// values past the last header are dropped, blank lines are skipped.
pub(crate) fn csv(data: Vec<u8>, ext: &str) -> Result<Vec<u8>, String> {
    if ext != "json" {
        return Ok(data);
    }
    let text = std::str::from_utf8(&data).map_err(|e| format!("CSV is not valid UTF-8: {e}"))?;
    let rows = csv_to_records(text);
    serde_json::to_vec(&Value::Array(rows)).map_err(|e| e.to_string())
}

fn csv_to_records(text: &str) -> Vec<Value> {
    let mut lines = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let mut record = Map::new();
            for (header, value) in headers.iter().zip(line.split(',')) {
                record.insert((*header).to_string(), Value::String(value.trim().to_string()));
            }
            Value::Object(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_omit_missing_columns() {
        let records = csv_to_records("a,b,c\n1,2\n");
        assert_eq!(records.len(), 1);
        let row = records[0].as_object().unwrap();
        assert_eq!(row.get("a"), Some(&Value::String("1".into())));
        assert!(!row.contains_key("c"));
    }

    #[test]
    fn header_only_is_empty_array() {
        assert!(csv_to_records("a,b\n").is_empty());
        assert!(csv_to_records("").is_empty());
    }
}
