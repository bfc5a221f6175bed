//! Line-oriented input adapter.
//!
//! Turns a text script into external events, one per line:
//!
//! ```text
//! # comment
//! call 5
//! floor 1        (alias: sensor 1)
//! alarm
//! ```
//!
//! Keywords are case-insensitive.  Malformed lines, including ones that are
//! not valid UTF-8, are logged and skipped so a single typo does not end a
//! simulation run.

use std::io::BufRead;

use log::warn;

use crate::app::ports::InputPort;
use crate::error::{ParseError, Result};
use crate::events::{Event, Floor};

/// Parse one script line.  `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Event>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
    let event = match keyword.as_str() {
        "call" => Event::Call {
            floor: parse_floor(words.next())?,
        },
        "floor" | "sensor" => Event::FloorSensor {
            floor: parse_floor(words.next())?,
        },
        "alarm" => Event::Alarm,
        _ => return Err(ParseError::UnknownKeyword.into()),
    };

    if words.next().is_some() {
        return Err(ParseError::TrailingInput.into());
    }
    Ok(Some(event))
}

fn parse_floor(word: Option<&str>) -> core::result::Result<Floor, ParseError> {
    word.ok_or(ParseError::MissingFloor)?
        .parse()
        .map_err(|_| ParseError::InvalidFloor)
}

/// [`InputPort`] over any buffered reader.
pub struct ScriptInput<R> {
    reader: R,
    line_no: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: Vec::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> InputPort for ScriptInput<R> {
    fn next_event(&mut self) -> Option<Event> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(e) => {
                    warn!("script read failed after line {}: {}", self.line_no, e);
                    return None;
                }
            }

            let line = match core::str::from_utf8(&self.buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!("script line {}: not UTF-8 ({})", self.line_no, e);
                    continue;
                }
            };
            match parse_line(line) {
                Ok(Some(event)) => return Some(event),
                Ok(None) => {}
                Err(e) => warn!("script line {}: {} ({:?})", self.line_no, e, line.trim_end()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_every_keyword() {
        assert_eq!(parse_line("call 5").unwrap(), Some(Event::Call { floor: 5 }));
        assert_eq!(
            parse_line("FLOOR -1").unwrap(),
            Some(Event::FloorSensor { floor: -1 })
        );
        assert_eq!(
            parse_line("sensor 2").unwrap(),
            Some(Event::FloorSensor { floor: 2 })
        );
        assert_eq!(parse_line("  Alarm  ").unwrap(), Some(Event::Alarm));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \n").unwrap(), None);
        assert_eq!(parse_line("# call 3").unwrap(), None);
        assert_eq!(
            parse_line("call 3 # lobby").unwrap(),
            Some(Event::Call { floor: 3 })
        );
    }

    #[test]
    fn reports_malformed_lines() {
        assert_eq!(
            parse_line("jump 3").unwrap_err(),
            Error::Parse(ParseError::UnknownKeyword)
        );
        assert_eq!(
            parse_line("call").unwrap_err(),
            Error::Parse(ParseError::MissingFloor)
        );
        assert_eq!(
            parse_line("floor two").unwrap_err(),
            Error::Parse(ParseError::InvalidFloor)
        );
        assert_eq!(
            parse_line("alarm now").unwrap_err(),
            Error::Parse(ParseError::TrailingInput)
        );
    }

    #[test]
    fn input_port_skips_bad_lines() {
        let script = "call 2\nbogus\n\nfloor 1\nalarm\n";
        let mut input = ScriptInput::new(script.as_bytes());
        assert_eq!(input.next_event(), Some(Event::Call { floor: 2 }));
        assert_eq!(input.next_event(), Some(Event::FloorSensor { floor: 1 }));
        assert_eq!(input.line_no(), 4);
        assert_eq!(input.next_event(), Some(Event::Alarm));
        assert_eq!(input.next_event(), None);
    }

    #[test]
    fn input_port_skips_non_utf8_lines() {
        let script: &[u8] = b"call 2\n\xff\xfe bad\nfloor 1\nalarm\n";
        let mut input = ScriptInput::new(script);
        assert_eq!(input.next_event(), Some(Event::Call { floor: 2 }));
        assert_eq!(input.next_event(), Some(Event::FloorSensor { floor: 1 }));
        assert_eq!(input.line_no(), 3);
        assert_eq!(input.next_event(), Some(Event::Alarm));
        assert_eq!(input.next_event(), None);
    }
}
