use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    str::FromStr,
};

use crate::vectors::{
    record::{parse_hex, Field, RecordBuilder, VectorRecord, RECORD_PREFIX},
    VectorError,
};

/// What happens to the fields of a record once it completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordMode {
    /// Fields persist into the next record until they are overwritten, so a
    /// record only has to list what changed. This is how existing corpora are
    /// written.
    #[default]
    Carry,
    /// Every record starts empty, and a record that doesn't set every field is
    /// rejected instead of silently reusing a stale value.
    Strict,
}

/// Streams [`VectorRecord`]s out of a corpus, one per `m-master` line.
///
/// The first error ends the stream.
pub struct VectorReader<R> {
    lines: Lines<R>,
    line_number: usize,
    mode: RecordMode,
    current: RecordBuilder,
    done: bool,
}

impl VectorReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>, mode: RecordMode) -> Result<Self, VectorError> {
        let file = File::open(path)?;
        Ok(Self::with_mode(BufReader::new(file), mode))
    }
}

impl<R: BufRead> VectorReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_mode(reader, RecordMode::default())
    }

    pub fn with_mode(reader: R, mode: RecordMode) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            mode,
            current: RecordBuilder::default(),
            done: false,
        }
    }

    /// Returns a completed record if `line` was an `m-master` line.
    fn process_line(&mut self, line: &str) -> Result<Option<VectorRecord>, VectorError> {
        if !line.starts_with(RECORD_PREFIX) {
            return Ok(None);
        }

        let unknown = || VectorError::UnknownField {
            line: self.line_number,
            content: line.to_owned(),
        };
        let (name, value) = line.split_once(':').ok_or_else(unknown)?;
        let field = Field::from_str(name).map_err(|_| unknown())?;
        let value = value.trim();

        if field != Field::Master {
            self.current
                .set(field, value)
                .map_err(|reason| VectorError::Parse {
                    line: self.line_number,
                    reason,
                })?;
            return Ok(None);
        }

        let expected_master = parse_hex(value).map_err(|e| VectorError::Parse {
            line: self.line_number,
            reason: format!("bad hex in {}: {e}", field.name()),
        })?;
        let record = self.current.build(self.line_number, expected_master);
        if self.mode == RecordMode::Strict {
            self.current = RecordBuilder::default();
        }
        record.map(Some)
    }
}

impl<R: BufRead> Iterator for VectorReader<R> {
    type Item = Result<VectorRecord, VectorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(line) = self.lines.next() {
            self.line_number += 1;
            let result = line
                .map_err(VectorError::from)
                .and_then(|line| self.process_line(&line));
            match result {
                Ok(None) => continue,
                Ok(Some(record)) => return Some(Ok(record)),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A TLS 1.0 RSA record, values aligned at column 14 like the bundled corpus.
    const RECORD: &str = "\
m-algorithm:  TlsRsaPremasterSecret
m-premaster:  03:01:aa:aa
m-crandom:    01:01
m-srandom:    02:02
m-protomajor: 3
m-protominor: 1
m-premajor:   3
m-preminor:   1
m-master:     ff:ee
";

    fn read_all(corpus: &str, mode: RecordMode) -> Vec<Result<VectorRecord, VectorError>> {
        VectorReader::with_mode(corpus.as_bytes(), mode).collect()
    }

    #[test]
    fn single_record() {
        let records = read_all(RECORD, RecordMode::Carry);
        assert_eq!(records.len(), 1);
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.line, 9);
        assert_eq!(record.premaster.bytes(), &[0x03, 0x01, 0xaa, 0xaa]);
        assert_eq!(record.premaster.algorithm().name(), "TlsRsaPremasterSecret");
        assert_eq!(record.client_random, vec![1, 1]);
        assert_eq!(record.server_random, vec![2, 2]);
        assert_eq!((record.protocol.major, record.protocol.minor), (3, 1));
        assert_eq!(record.expected_client_version, (3, 1));
        assert_eq!(record.expected_master, vec![0xff, 0xee]);
    }

    #[test]
    fn other_lines_are_skipped() {
        let corpus = format!("# comment\n\nk-master:  00\nsomething else\n{RECORD}\n# trailer\n");
        let records = read_all(&corpus, RecordMode::Carry);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().line, 13);
    }

    #[test]
    fn space_separated_values_and_two_space_indent() {
        let corpus = RECORD.replace("m-master:     ff:ee", "m-master:  ff ee");
        let record = read_all(&corpus, RecordMode::Carry).remove(0).unwrap();
        assert_eq!(record.expected_master, vec![0xff, 0xee]);
    }

    #[test]
    fn carry_reuses_fields() {
        let corpus = format!("{RECORD}m-protominor: 2\nm-master:     01\n");
        let records = read_all(&corpus, RecordMode::Carry);
        assert_eq!(records.len(), 2);
        let second = records[1].as_ref().unwrap();
        assert_eq!(second.line, 11);
        assert_eq!((second.protocol.major, second.protocol.minor), (3, 2));
        assert_eq!(second.premaster.bytes(), &[0x03, 0x01, 0xaa, 0xaa]);
    }

    #[test]
    fn strict_rejects_stale_fields() {
        let corpus = format!("{RECORD}m-protominor: 2\nm-master:     01\n");
        let records = read_all(&corpus, RecordMode::Strict);
        assert_eq!(records.len(), 2);
        assert!(records[0].is_ok());
        assert!(matches!(
            records[1],
            Err(VectorError::MissingField { line: 11, field: "m-algorithm" })
        ));
    }

    #[test]
    fn unknown_field_is_fatal() {
        let corpus = format!("m-kexchange:  RSA\n{RECORD}");
        let records = read_all(&corpus, RecordMode::Carry);
        assert_eq!(records.len(), 1, "the stream ends at the first error");
        let err = records[0].as_ref().unwrap_err();
        assert!(matches!(err, VectorError::UnknownField { line: 1, .. }), "{err}");
        assert!(err.to_string().contains("unknown line: m-kexchange:  RSA"));
    }

    #[test]
    fn prefix_without_colon_is_unknown() {
        let records = read_all("m-master\n", RecordMode::Carry);
        assert!(matches!(records[0], Err(VectorError::UnknownField { line: 1, .. })));
    }

    #[test]
    fn bad_values_carry_line_numbers() {
        let corpus = RECORD.replace("m-protominor: 1", "m-protominor: one");
        let err = read_all(&corpus, RecordMode::Carry).remove(0).unwrap_err();
        assert_eq!(err.line(), Some(6));

        let corpus = RECORD.replace("m-master:     ff:ee", "m-master:     f:fe");
        let err = read_all(&corpus, RecordMode::Carry).remove(0).unwrap_err();
        assert!(matches!(err, VectorError::Parse { line: 9, .. }), "{err}");
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(read_all("", RecordMode::Carry).is_empty());
        assert!(read_all("# nothing here\n", RecordMode::Strict).is_empty());
    }
}
