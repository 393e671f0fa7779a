use std::io::{self, Write};

use crate::record::Record;

/// Collaborator-side filter: drop records without a reference URL. The
/// parsing engine itself never filters.
pub fn require_url(records: Vec<Record>) -> Vec<Record> {
    records.into_iter().filter(|r| !r.url.is_empty()).collect()
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer, quoting only where needed.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Render the full fixed-column CSV (header row included).
pub fn to_csv_string(records: &[Record]) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let header: Vec<String> = Record::COLUMNS.iter().map(|c| c.to_string()).collect();
    let _ = write_row(&mut buf, &header);
    for record in records {
        let _ = write_row(&mut buf, &record.to_row());
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldSet, Status};

    fn record(name: &str, url: &str) -> Record {
        Record {
            status: Status::Published,
            base_name: name.into(),
            variation: String::new(),
            url: url.into(),
            fields: FieldSet::default(),
        }
    }

    #[test]
    fn header_row_then_one_row_per_record() {
        let csv = to_csv_string(&[record("Widget A", "https://x/y")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("status,base_name,variation,url,price"));
        assert!(lines[1].starts_with("published,Widget A,,https://x/y,"));
    }

    #[test]
    fn quotes_separators_and_embedded_quotes() {
        let mut r = record("Widget, the \"big\" one", "");
        r.variation = "multi\nline".into();
        let csv = to_csv_string(&[r]);
        assert!(csv.contains("\"Widget, the \"\"big\"\" one\""));
        assert!(csv.contains("\"multi\nline\""));
    }

    #[test]
    fn require_url_drops_only_empty_urls() {
        let records = vec![record("a", "https://x/1"), record("b", ""), record("c", "https://x/2")];
        let kept = require_url(records);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| !r.url.is_empty()));
    }
}
