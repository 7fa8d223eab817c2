//! Logging for the E1AP codec
//!
//! Subscriber setup on top of `tracing`, E1AP message logging and hex
//! rendering of PDUs for debug output.

use std::fmt::{self, Write as _};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::error::Error;

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level, also dumps PDU payloads
    Trace,
    Debug,
    /// Info level (default)
    #[default]
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// Installs the global tracing subscriber at `level`.
///
/// `RUST_LOG` takes precedence when set. Call once at startup.
///
/// # Example
///
/// ```
/// use e1ap_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.to_string());
}

/// Installs the global tracing subscriber with a directive string such as
/// `"info,e1ap_per=trace"`.
///
/// A second call in the same process is a no-op.
pub fn init_logging_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}

/// Direction of a PDU relative to the local node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Decoded from the wire
    Rx,
    /// Encoded for the wire
    Tx,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rx => f.write_str("RX"),
            Direction::Tx => f.write_str("TX"),
        }
    }
}

/// Logs an E1AP PDU: one debug line, plus the payload in hex at trace level.
///
/// # Example
///
/// ```
/// use e1ap_common::logging::{log_e1ap_message, Direction};
///
/// let data = [0x00, 0x03, 0x00, 0x0b];
/// log_e1ap_message(Direction::Tx, "GNB-CU-UP-E1SetupRequest", &data);
/// ```
pub fn log_e1ap_message(direction: Direction, msg_type: &str, data: &[u8]) {
    tracing::debug!(
        protocol = "E1AP",
        direction = %direction,
        msg_type = msg_type,
        len = data.len(),
        "{} E1AP {}",
        direction,
        msg_type
    );
    tracing::trace!(protocol = "E1AP", hex = %HexDump(data), "E1AP payload");
}

/// Displays a byte slice as lowercase hex without separators.
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Formats bytes as an offset / hex / ASCII dump, 16 bytes per line.
///
/// ```
/// use e1ap_common::logging::format_hex_dump;
///
/// let dump = format_hex_dump(&[0x00, 0x03, 0x41]);
/// assert!(dump.starts_with("00000000  00 03 41"));
/// assert!(dump.ends_with("|..A|"));
/// ```
pub fn format_hex_dump(data: &[u8]) -> String {
    if data.is_empty() {
        return String::from("(empty)");
    }

    let mut lines = Vec::with_capacity(data.len().div_ceil(16));
    for (row, chunk) in data.chunks(16).enumerate() {
        let mut line = String::with_capacity(78);
        let _ = write!(line, "{:08x}  ", row * 16);

        for column in 0..16 {
            if column == 8 {
                line.push(' ');
            }
            match chunk.get(column) {
                Some(byte) => {
                    let _ = write!(line, "{byte:02x} ");
                }
                None => line.push_str("   "),
            }
        }

        line.push_str(" |");
        line.extend(chunk.iter().map(|&byte| {
            if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '.'
            }
        }));
        line.push('|');
        lines.push(line);
    }

    lines.join("\n")
}

/// Formats bytes as hex, optionally split into space separated groups of
/// `group_size` bytes (0 disables grouping).
///
/// ```
/// use e1ap_common::logging::format_hex_compact;
///
/// assert_eq!(format_hex_compact(&[0x04, 0x00, 0x12, 0x34], 0), "04001234");
/// assert_eq!(format_hex_compact(&[0x04, 0x00, 0x12, 0x34], 2), "0400 1234");
/// ```
pub fn format_hex_compact(data: &[u8], group_size: usize) -> String {
    if group_size == 0 {
        return hex::encode(data);
    }

    data.chunks(group_size)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a hex capture as printed by Wireshark or `xxd -p`.
///
/// Whitespace, `:` separators and a leading `0x` are ignored.
///
/// ```
/// use e1ap_common::logging::parse_hex;
///
/// assert_eq!(parse_hex("0x04 00").unwrap(), vec![0x04, 0x00]);
/// assert_eq!(parse_hex("de:ad:be:ef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(digits)
}

/// Reads a capture file holding either hex text (as accepted by
/// [`parse_hex`]) or the raw PDU bytes.
pub fn read_capture<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let bytes = std::fs::read(path.as_ref())?;
    match std::str::from_utf8(&bytes) {
        Ok(text) if looks_like_hex(text) => Ok(parse_hex(text)?),
        _ => Ok(bytes),
    }
}

fn looks_like_hex(text: &str) -> bool {
    !text.trim().is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c.is_whitespace() || matches!(c, ':' | 'x' | 'X'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_display_matches_filter_syntax() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_log_level_serde() {
        let level: LogLevel = serde_yaml::from_str("warning").unwrap();
        assert_eq!(level, LogLevel::Warn);
        assert_eq!(serde_yaml::to_string(&LogLevel::Debug).unwrap().trim(), "debug");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Rx.to_string(), "RX");
        assert_eq!(Direction::Tx.to_string(), "TX");
    }

    #[test]
    fn test_hex_dump_empty() {
        assert_eq!(format_hex_dump(&[]), "(empty)");
    }

    #[test]
    fn test_hex_dump_full_line() {
        let data: Vec<u8> = (0..16).collect();
        let dump = format_hex_dump(&data);
        assert_eq!(
            dump,
            "00000000  00 01 02 03 04 05 06 07  08 09 0a 0b 0c 0d 0e 0f  |................|"
        );
    }

    #[test]
    fn test_hex_dump_partial_line_is_padded() {
        let short = format_hex_dump(b"Hi");
        let full = format_hex_dump(&[b'A'; 16]);
        // The ASCII column starts at the same offset whatever the chunk size
        assert_eq!(short.find('|'), full.find('|'));
        assert!(short.ends_with("|Hi|"));
    }

    #[test]
    fn test_hex_dump_multiline() {
        let data: Vec<u8> = (0..20).collect();
        let dump = format_hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("00000010  10 11 12 13"));
    }

    #[test]
    fn test_hex_compact() {
        let data = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(format_hex_compact(&data, 0), "12345678");
        assert_eq!(format_hex_compact(&data, 1), "12 34 56 78");
        assert_eq!(format_hex_compact(&data, 3), "123456 78");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0004").unwrap(), vec![0x00, 0x04]);
        assert_eq!(parse_hex("  00 0b\n00 02\n").unwrap(), vec![0x00, 0x0b, 0x00, 0x02]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert!(parse_hex("0g").is_err());
        assert!(parse_hex("abc").is_err());
    }

    #[test]
    fn test_read_capture_hex_and_raw() {
        use std::io::Write;

        let mut text = tempfile::NamedTempFile::new().unwrap();
        writeln!(text, "0x00 00 00 13\n00:00:03").unwrap();
        assert_eq!(
            read_capture(text.path()).unwrap(),
            vec![0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x03]
        );

        let mut raw = tempfile::NamedTempFile::new().unwrap();
        raw.write_all(&[0x20, 0x03, 0x00, 0x09]).unwrap();
        assert_eq!(read_capture(raw.path()).unwrap(), vec![0x20, 0x03, 0x00, 0x09]);

        let mut odd = tempfile::NamedTempFile::new().unwrap();
        write!(odd, "abc").unwrap();
        assert!(matches!(read_capture(odd.path()), Err(Error::Hex(_))));

        assert!(matches!(
            read_capture("/nonexistent/capture.bin"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_hex_dump_wrapper() {
        assert_eq!(HexDump(&[0xde, 0xad, 0xbe, 0xef]).to_string(), "deadbeef");
    }
}
