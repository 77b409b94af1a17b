// src/ingest/mod.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, info, trace, warn};

mod error;
mod row;

pub use error::IngestError;
pub use row::{parse_row, Row, MAX_LINE_LEN};

use crate::room::{normalize, RoomTable, MAX_ROOMS, MAX_ROWS};

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    pub table: RoomTable,
    /// Data rows read, header excluded.
    pub rows: usize,
}

/// Open `path` and ingest it. The file is closed when this returns, on
/// success and on every error.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P) -> Result<Ingested, IngestError> {
    let file = File::open(&path).map_err(|source| IngestError::FileOpen {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    let ingested = load_from_reader(BufReader::new(file))?;
    info!(
        rows = ingested.rows,
        rooms = ingested.table.len(),
        "loaded room table"
    );
    Ok(ingested)
}

/// Ingest `<temperature>,<room>` rows from `reader`, after one header line.
///
/// All-or-nothing: the first bad line, or the first row past a limit, aborts
/// and nothing built so far is returned.
pub fn load_from_reader<R: BufRead>(mut reader: R) -> Result<Ingested, IngestError> {
    let mut buf = Vec::new();

    // header, content ignored
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(IngestError::EmptyData);
    }
    trace!(header = %String::from_utf8_lossy(&buf).trim_end(), "skipped header");

    let mut table = RoomTable::new();
    let mut rows = 0usize;
    let mut line_no = 1usize;

    loop {
        buf.clear();
        // reads the whole physical line, so an over-long one is consumed too
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        if row::content_len(&buf) > MAX_LINE_LEN {
            warn!(line = line_no, len = buf.len(), "line too long");
            return Err(IngestError::LineTooLong { line: line_no });
        }

        let text = String::from_utf8_lossy(&buf);
        let line = row::strip_terminator(&text);

        let Some(Row { temperature, room }) = parse_row(line) else {
            return Err(IngestError::MalformedRow {
                line: line_no,
                raw: line.to_string(),
            });
        };
        let key = normalize(room);

        // a new room past the cap is reported ahead of the row cap
        if !table.contains_key(&key) && table.len() >= MAX_ROOMS {
            return Err(IngestError::RoomLimitExceeded { limit: MAX_ROOMS });
        }
        if rows >= MAX_ROWS {
            return Err(IngestError::RowLimitExceeded { limit: MAX_ROWS });
        }
        table.record(room, key, temperature);
        rows += 1;
        debug!(line = line_no, temperature, room, "row");
    }

    if rows == 0 {
        return Err(IngestError::EmptyData);
    }
    Ok(Ingested { table, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,roomtemp::ingest=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn ingest(content: &str) -> Result<Ingested, IngestError> {
        load_from_reader(Cursor::new(content.as_bytes().to_vec()))
    }

    fn csv_file(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content.as_bytes()).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn test_load_example_file() -> anyhow::Result<()> {
        init_test_logging();
        let tmp = csv_file("temperature,room\n21.5,Room A\n19.0,room a\n30.0,Lab 2\n");

        let Ingested { table, rows } = load(tmp.path())?;

        assert_eq!(rows, 3);
        assert_eq!(table.len(), 2);
        let room_a = table.find("rooma").expect("rooma not found");
        assert_eq!(room_a.display_name, "Room A");
        assert_eq!(room_a.readings, vec![21.5, 19.0]);
        let lab = table.find("lab").expect("lab not found");
        assert_eq!(lab.display_name, "Lab 2");
        assert_eq!(lab.readings, vec![30.0]);
        Ok(())
    }

    #[test]
    fn missing_file_is_file_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileOpen { .. }));
    }

    #[test]
    fn empty_and_header_only_files() {
        assert!(matches!(ingest(""), Err(IngestError::EmptyData)));
        assert!(matches!(
            ingest("temperature,room\n"),
            Err(IngestError::EmptyData)
        ));
        assert!(matches!(
            ingest("temperature,room"),
            Err(IngestError::EmptyData)
        ));
    }

    #[test]
    fn first_data_row_is_kept() {
        let got = ingest("t,r\n21.5,Room A\n").unwrap();
        assert_eq!(got.rows, 1);
        assert_eq!(got.table.rooms()[0].readings, vec![21.5]);
    }

    #[test]
    fn header_is_not_validated() {
        let header = "x".repeat(200);
        let got = ingest(&format!("{header}\n1.0,Den\n")).unwrap();
        assert_eq!(got.table.len(), 1);
    }

    #[test]
    fn groups_case_and_punctuation_variants() {
        let got = ingest("t,r\n21.5,Room A\n19.0,room,a!\n").unwrap();
        assert_eq!(got.table.len(), 1);
        let room = &got.table.rooms()[0];
        assert_eq!(room.display_name, "Room A");
        assert_eq!(room.key, "rooma");
        assert_eq!(room.readings, vec![21.5, 19.0]);
    }

    #[test]
    fn line_length_cap() {
        // 5 chars of "20.0," + 44 = 49, accepted
        let ok = format!("t,r\n20.0,{}\n", "a".repeat(44));
        assert!(ingest(&ok).is_ok());

        // CRLF is not counted
        let ok_crlf = format!("t,r\r\n20.0,{}\r\n", "a".repeat(44));
        assert!(ingest(&ok_crlf).is_ok());

        let long = format!("t,r\n20.0,Den\n20.0,{}\n21.0,Den\n", "a".repeat(45));
        match ingest(&long) {
            Err(IngestError::LineTooLong { line }) => assert_eq!(line, 3),
            other => panic!("expected LineTooLong, got {other:?}"),
        }
    }

    #[test]
    fn overlong_line_is_consumed_from_stream() {
        let content = format!("t,r\n20.0,{}\n21.0,Den\n", "a".repeat(60));
        let mut cursor = Cursor::new(content.into_bytes());
        let err = load_from_reader(&mut cursor).unwrap_err();
        assert!(matches!(err, IngestError::LineTooLong { .. }));

        let mut rest = String::new();
        cursor.read_line(&mut rest).unwrap();
        assert_eq!(rest, "21.0,Den\n");
    }

    #[test]
    fn malformed_row_aborts_with_raw_text() {
        let err = ingest("t,r\n21.5,Room A\nwarm,Lab\n19.0,Lab\n").unwrap_err();
        match err {
            IngestError::MalformedRow { line, raw } => {
                assert_eq!(line, 3);
                assert_eq!(raw, "warm,Lab");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_is_malformed() {
        let err = ingest("t,r\n21.5,Room A\n\n").unwrap_err();
        assert!(matches!(err, IngestError::MalformedRow { raw, .. } if raw.is_empty()));
    }

    #[test]
    fn row_limit() {
        let mut content = String::from("t,r\n");
        for i in 0..MAX_ROWS {
            content.push_str(&format!("{}.0,Room A\n", i % 30));
        }
        let got = ingest(&content).unwrap();
        assert_eq!(got.rows, MAX_ROWS);
        assert_eq!(got.table.reading_count(), MAX_ROWS);

        content.push_str("1.0,Room A\n");
        assert!(matches!(
            ingest(&content),
            Err(IngestError::RowLimitExceeded { limit: MAX_ROWS })
        ));
    }

    /// Distinct letter-only names: "a", "b", ..., "z", "aa", "ab", ...
    fn room_name(mut i: usize) -> String {
        let mut name = Vec::new();
        loop {
            name.push(b'a' + (i % 26) as u8);
            if i < 26 {
                break;
            }
            i = i / 26 - 1;
        }
        name.reverse();
        String::from_utf8(name).unwrap()
    }

    #[test]
    fn room_limit() {
        let mut content = String::from("t,r\n");
        for i in 0..MAX_ROOMS {
            content.push_str(&format!("1.0,{}\n", room_name(i)));
        }
        let got = ingest(&content).unwrap();
        assert_eq!(got.table.len(), MAX_ROOMS);
        assert_eq!(got.rows, MAX_ROWS);

        content.push_str(&format!("1.0,{}\n", room_name(MAX_ROOMS)));
        assert!(matches!(
            ingest(&content),
            Err(IngestError::RoomLimitExceeded { limit: MAX_ROOMS })
        ));
    }

    #[test]
    fn full_table_still_rejects_extra_rows_for_known_rooms() {
        let mut content = String::from("t,r\n");
        for i in 0..MAX_ROOMS {
            content.push_str(&format!("1.0,{}\n", room_name(i)));
        }
        content.push_str(&format!("2.0,{}\n", room_name(0).to_uppercase()));
        assert!(matches!(
            ingest(&content),
            Err(IngestError::RowLimitExceeded { .. })
        ));
    }

    #[test]
    fn room_names_are_distinct_keys() {
        let keys: std::collections::HashSet<String> =
            (0..=MAX_ROOMS).map(|i| normalize(&room_name(i))).collect();
        assert_eq!(keys.len(), MAX_ROOMS + 1);
    }
}
