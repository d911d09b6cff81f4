use crate::utils::{FillError, Result};
use csv::StringRecord;
use std::path::{Path, PathBuf};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads a whole CSV table into memory, tolerating a leading UTF-8 BOM and
/// rows of differing width.
pub struct CsvTableReader {
    path: PathBuf,
}

impl CsvTableReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read_all(&self) -> Result<Vec<StringRecord>> {
        if !file_exists(&self.path) {
            return Err(FillError::FileNotFound(self.path.display().to_string()));
        }

        let bytes = std::fs::read(&self.path)?;
        parse_records(strip_bom(&bytes))
    }
}

pub fn read_records(path: &Path) -> Result<Vec<StringRecord>> {
    CsvTableReader::new(path).read_all()
}

/// Parses headerless CSV. Blank lines come back as empty records so row
/// numbering follows the file.
pub fn parse_records(data: &[u8]) -> Result<Vec<StringRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut records = Vec::new();
    let mut record = StringRecord::new();
    let mut consumed = 0;

    while reader.read_record(&mut record)? {
        let end = reader.position().byte() as usize;
        push_blank_lines(&mut records, data, consumed, end);
        records.push(record.clone());
        consumed = end;
    }
    push_blank_lines(&mut records, data, consumed, data.len());

    Ok(records)
}

// A record read stops after the `\r` of a CRLF, leaving its `\n` at the start
// of the next span.
fn push_blank_lines(records: &mut Vec<StringRecord>, data: &[u8], start: usize, end: usize) {
    let mut rest = &data[start..end];
    if start > 0 && data[start - 1] == b'\r' {
        rest = rest.strip_prefix(b"\n").unwrap_or(rest);
    }

    loop {
        rest = match rest {
            [b'\r', b'\n', tail @ ..] | [b'\r', tail @ ..] | [b'\n', tail @ ..] => tail,
            _ => break,
        };
        records.push(StringRecord::new());
    }
}

pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_strips_bom_from_first_field() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(UTF8_BOM).unwrap();
        write!(file, "code,page,ko,en\r\nA001,Home,기념일,\r\n").unwrap();

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "code");
        assert_eq!(&records[1][2], "기념일");
    }

    #[test]
    fn test_blank_lines_are_kept_as_empty_records() {
        let records = parse_records(b"code,page\r\n\r\nA001,Home\r\n\n\r\n").unwrap();
        let lens: Vec<usize> = records.iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![2, 0, 2, 0, 0]);
        assert_eq!(&records[2][0], "A001");
    }

    #[test]
    fn test_no_blank_records_for_plain_terminators() {
        let inputs: [&[u8]; 4] = [
            b"a,b\r\nc,d\r\n",
            b"a,b\nc,d\n",
            b"a,b\rc,d",
            b"a,\"x\r\ny\"\r\nc,d\r\n",
        ];
        for data in inputs {
            let records = parse_records(data).unwrap();
            assert_eq!(records.len(), 2, "{:?}", String::from_utf8_lossy(data));
            assert!(records.iter().all(|r| r.len() == 2));
        }
    }

    #[test]
    fn test_reads_without_bom_and_ragged_rows() {
        let records = parse_records("a,b,c,d\nshort\nx,y,\"z, w\"\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].len(), 1);
        assert_eq!(records[2].len(), 3);
        assert_eq!(&records[2][2], "z, w");
    }

    #[test]
    fn test_missing_file() {
        let err = read_records(Path::new("no/such/file.csv")).unwrap_err();
        assert!(matches!(err, FillError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let err = parse_records(b"code,page\n\xff\xfe,x\n").unwrap_err();
        assert!(matches!(err, FillError::CsvError(_)));
    }
}
