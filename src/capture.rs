//! Capture export parsing.
//!
//! Parses a plain-text event export into bus events, one event per line:
//!
//! ```text
//! kind start end [bit]
//! ```
//!
//! where `kind` is `enable`, `data`, `disable`, or `error`, the times are
//! capture-relative seconds, and `bit` (0 or 1) is required for data events.
//! Blank lines and lines starting with `#` are skipped. Unknown kinds parse
//! successfully and surface later through the unexpected-event reporting
//! path, mirroring how an upstream analyzer would hand them over.

use nom::{
    bytes::complete::take_while1,
    character::complete::{one_of, space1},
    combinator::opt,
    number::complete::double,
    sequence::preceded,
    IResult,
};

use crate::bus::event::{BusEvent, TimeSpan};
use crate::error::LcdBusError;

fn event_fields(input: &str) -> IResult<&str, (&str, f64, f64, Option<char>)> {
    let (input, kind) = take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)?;
    let (input, start) = preceded(space1, double)(input)?;
    let (input, end) = preceded(space1, double)(input)?;
    let (input, bit) = opt(preceded(space1, one_of("01")))(input)?;
    Ok((input, (kind, start, end, bit)))
}

/// Parses a capture export into the event sequence it records.
pub fn parse_capture(text: &str) -> Result<Vec<BusEvent>, LcdBusError> {
    let mut events = Vec::new();
    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (kind, start, end, bit) = match event_fields(line) {
            Ok((rest, fields)) if rest.trim().is_empty() => fields,
            _ => {
                return Err(LcdBusError::CaptureParseError(format!(
                    "line {}: {line:?}",
                    number + 1
                )))
            }
        };
        let span = TimeSpan { start, end };
        let event = match kind {
            "enable" => BusEvent::Enable { span },
            "disable" => BusEvent::Disable { span },
            "error" => BusEvent::Error { span },
            "data" => {
                let bit = bit.ok_or_else(|| {
                    LcdBusError::CaptureParseError(format!(
                        "line {}: data event without a bit value",
                        number + 1
                    ))
                })?;
                BusEvent::Data {
                    span,
                    bit: bit == '1',
                }
            }
            other => BusEvent::Unknown {
                span,
                kind: other.to_string(),
            },
        };
        events.push(event);
    }
    Ok(events)
}
