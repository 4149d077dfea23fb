use crate::error::ProcessError;
use std::str;
use tensor::{StressTensor, N_COMPONENTS};

/// at most this many leading tokens are parsed as numbers, the rest of the
/// line is only echoed
pub const MAX_FIELDS: usize = 12;

/// One input line: the leading numeric fields and the raw bytes they came from.
/// The bytes need not be UTF-8, only the numeric tokens are decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord<'a> {
    raw: &'a [u8],
    fields: Vec<f64>,
}

impl<'a> InputRecord<'a> {
    /// Parses leading whitespace separated numbers. Parsing stops at the first
    /// token that is not a number or after [`MAX_FIELDS`] values.
    pub fn parse(line: &'a [u8]) -> Self {
        let raw = strip_newline(line);
        let fields = raw
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
            .take(MAX_FIELDS)
            .map_while(|token| str::from_utf8(token).ok()?.parse::<f64>().ok())
            .collect();
        InputRecord { raw, fields }
    }

    /// the line without its terminator
    #[inline]
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    #[inline]
    pub fn fields(&self) -> &[f64] {
        &self.fields
    }

    /// the six stress components following `head_cols` passthrough columns
    pub fn tensor(&self, head_cols: usize) -> Result<StressTensor, ProcessError> {
        let required = head_cols + N_COMPONENTS;
        let too_few = ProcessError::TooFewColumns {
            found: self.fields.len(),
            required,
        };
        if self.fields.len() < required {
            return Err(too_few);
        }
        StressTensor::from_slice(&self.fields[head_cols..]).ok_or(too_few)
    }
}

#[inline]
fn strip_newline(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(l) => l.strip_suffix(b"\r").unwrap_or(l),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stops_at_text() {
        let r = InputRecord::parse(b"9 8 3 2 1 0 0 0 extra 7\n");
        assert_eq!(r.raw(), b"9 8 3 2 1 0 0 0 extra 7");
        assert_eq!(r.fields(), &[9.0, 8.0, 3.0, 2.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn parse_number_formats() {
        let r = InputRecord::parse(b"1 -2.5 3e2 +4 .5 6.E-1\t7");
        assert_eq!(r.fields(), &[1.0, -2.5, 300.0, 4.0, 0.5, 0.6, 7.0]);
    }

    #[test]
    fn parse_at_most_twelve() {
        let line = (1..=15).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let r = InputRecord::parse(line.as_bytes());
        assert_eq!(r.fields().len(), MAX_FIELDS);
        assert_eq!(r.fields()[MAX_FIELDS - 1], 12.0);
        assert_eq!(r.raw(), line.as_bytes());
    }

    #[test]
    fn latin1_text_is_kept() {
        let r = InputRecord::parse(b"3 2 1 0 0 0 # 20\xB0C\n");
        assert_eq!(r.raw(), b"3 2 1 0 0 0 # 20\xB0C");
        assert_eq!(r.fields(), &[3.0, 2.0, 1.0, 0.0, 0.0, 0.0]);
        // an undecodable token ends the numbers like any other text
        let r = InputRecord::parse(b"1 \xB02 3");
        assert_eq!(r.fields(), &[1.0]);
    }

    #[test]
    fn crlf_is_stripped() {
        assert_eq!(InputRecord::parse(b"1 2\r\n").raw(), b"1 2");
        assert_eq!(InputRecord::parse(b"1 2").raw(), b"1 2");
        // a lone carriage return is part of the text
        assert_eq!(InputRecord::parse(b"1 2\r").raw(), b"1 2\r");
    }

    #[test]
    fn tensor_offset() {
        let r = InputRecord::parse(b"9 8 3 2 1 0 0 0 extra");
        assert_eq!(
            r.tensor(2).unwrap(),
            StressTensor::new(3.0, 2.0, 1.0, 0.0, 0.0, 0.0)
        );
        assert_eq!(
            r.tensor(3),
            Err(ProcessError::TooFewColumns {
                found: 8,
                required: 9
            })
        );
    }

    #[test]
    fn too_few_columns() {
        let r = InputRecord::parse(b"1 2 3 4 5");
        assert_eq!(
            r.tensor(0),
            Err(ProcessError::TooFewColumns {
                found: 5,
                required: 6
            })
        );
        assert!(InputRecord::parse(b"").tensor(0).is_err());
    }
}
