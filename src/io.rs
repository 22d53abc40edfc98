use std::fs;
use std::path::Path;

use log::warn;

use crate::error::TraceError;

/// Trace-file reading.
///
/// One record per line: a hexadecimal logical address (with or without a
/// `0x` prefix), optionally followed by an access-type column and
/// anything else, which the translation core ignores. Blank lines are
/// skipped.

fn parse_address(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

/// Parse one trace line. `Ok(None)` means the line carries no record.
pub fn parse_record(line_no: usize, line: &str) -> Result<Option<u32>, TraceError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    match parse_address(first) {
        Some(addr) => Ok(Some(addr)),
        None => Err(TraceError::InvalidRecord {
            line: line_no,
            token: first.to_string(),
        }),
    }
}

/// Parse a whole trace, failing on the first malformed record.
pub fn parse_trace(content: &str) -> Result<Vec<u32>, TraceError> {
    let mut addresses = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if let Some(addr) = parse_record(idx + 1, line)? {
            addresses.push(addr);
        }
    }
    Ok(addresses)
}

/// Read a trace file strictly: any malformed record is an error.
pub fn read_trace_file<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, TraceError> {
    let content = fs::read_to_string(path.as_ref()).map_err(|source| TraceError::Io {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    parse_trace(&content)
}

/// Read a trace file, logging and skipping malformed records instead of
/// failing. Skipping is the caller-side recovery the core itself never
/// performs; only I/O failures remain fatal. Returns the addresses and
/// the number of records skipped.
pub fn read_trace_file_lossy<P: AsRef<Path>>(path: P) -> Result<(Vec<u32>, usize), TraceError> {
    let content = fs::read_to_string(path.as_ref()).map_err(|source| TraceError::Io {
        path: path.as_ref().display().to_string(),
        source,
    })?;

    let mut addresses = Vec::new();
    let mut skipped = 0;
    for (idx, line) in content.lines().enumerate() {
        match parse_record(idx + 1, line) {
            Ok(Some(addr)) => addresses.push(addr),
            Ok(None) => {}
            Err(e) => {
                warn!("skipping record: {e}");
                skipped += 1;
            }
        }
    }
    Ok((addresses, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_addresses() {
        let trace = "0x12345 R\n1A2B W\n0XFF R\n";
        let addrs = parse_trace(trace).unwrap();
        assert_eq!(addrs, vec![0x12345, 0x1A2B, 0xFF]);
    }

    #[test]
    fn test_access_type_column_is_optional() {
        let trace = "12345\nABCDE R extra columns here\n";
        let addrs = parse_trace(trace).unwrap();
        assert_eq!(addrs, vec![0x12345, 0xABCDE]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let trace = "\n12345 R\n\n   \n67 W\n";
        let addrs = parse_trace(trace).unwrap();
        assert_eq!(addrs, vec![0x12345, 0x67]);
    }

    #[test]
    fn test_malformed_record_names_line() {
        let trace = "12345 R\nzzzz R\n";
        let err = parse_trace(trace).unwrap_err();
        match err {
            TraceError::InvalidRecord { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "zzzz");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_address_out_of_u32_range_rejected() {
        let err = parse_trace("1FFFFFFFF R\n").unwrap_err();
        assert!(matches!(err, TraceError::InvalidRecord { line: 1, .. }));
    }

    #[test]
    fn test_parse_record_blank_is_none() {
        assert_eq!(parse_record(1, "   ").unwrap(), None);
        assert_eq!(parse_record(1, "").unwrap(), None);
    }

    #[test]
    fn test_empty_trace_is_empty_vec() {
        assert_eq!(parse_trace("").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_read_trace_file_roundtrip() {
        let path = std::env::temp_dir().join("mmu_sim_io_test_trace.txt");
        std::fs::write(&path, "12345 R\nbad R\n67 W\n").unwrap();

        let err = read_trace_file(&path).unwrap_err();
        assert!(matches!(err, TraceError::InvalidRecord { line: 2, .. }));

        let (addrs, skipped) = read_trace_file_lossy(&path).unwrap();
        assert_eq!(addrs, vec![0x12345, 0x67]);
        assert_eq!(skipped, 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_trace_file("/nonexistent/trace.txt").unwrap_err();
        assert!(matches!(err, TraceError::Io { .. }));
    }
}
