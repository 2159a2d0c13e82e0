//! Console primitives for compiled Javalette programs.
//!
//! Everything here is generic over `Write`/`BufRead` so the semantics can
//! be exercised against in-memory streams; the `ffi` module binds these to
//! the process's stdin/stdout/stderr and applies the sentinel contract.

use std::io::{BufRead, Write};

use crate::error::{ReadError, Result};

/// Value returned by `readInt` when a read fails. Compiled programs have no
/// error channel, so it is indistinguishable from a genuinely read -1.
pub const INT_SENTINEL: i32 = -1;

/// Value returned by `readDouble` when a read fails.
pub const DOUBLE_SENTINEL: f64 = -1.0;

/// Write the decimal representation of `value`, followed by a newline.
pub fn write_int<W: Write>(out: &mut W, value: i32) -> std::io::Result<()> {
    writeln!(out, "{}", value)
}

/// Write `value` followed by a newline, using the shortest representation
/// that round-trips: 3.5 prints as "3.5", not "3.500000".
pub fn write_double<W: Write>(out: &mut W, value: f64) -> std::io::Result<()> {
    writeln!(out, "{}", value)
}

/// Write `value` verbatim, followed by a newline.
pub fn write_str<W: Write>(out: &mut W, value: &str) -> std::io::Result<()> {
    writeln!(out, "{}", value)
}

/// Read one line from `input` and parse it as a base-10 integer.
pub fn read_int<R: BufRead>(input: &mut R) -> Result<i32> {
    let raw = read_trimmed_line(input)?;
    raw.parse().map_err(|_| ReadError::Parse { raw })
}

/// Read one line from `input` and parse it as a floating-point number.
pub fn read_double<R: BufRead>(input: &mut R) -> Result<f64> {
    let raw = read_trimmed_line(input)?;
    raw.parse().map_err(|_| ReadError::Parse { raw })
}

/// Read an integer, collapsing any failure to the sentinel after writing
/// the diagnostic to `diag`. A failure to write the diagnostic itself is
/// discarded; the diagnostic stream has no failure mode of its own.
pub fn read_int_or_sentinel<R: BufRead, W: Write>(input: &mut R, diag: &mut W) -> i32 {
    match read_int(input) {
        Ok(value) => value,
        Err(err) => {
            let _ = writeln!(diag, "{}", err);
            INT_SENTINEL
        }
    }
}

/// Read a double, collapsing any failure to the sentinel after writing the
/// diagnostic to `diag`.
pub fn read_double_or_sentinel<R: BufRead, W: Write>(input: &mut R, diag: &mut W) -> f64 {
    match read_double(input) {
        Ok(value) => value,
        Err(err) => {
            let _ = writeln!(diag, "{}", err);
            DOUBLE_SENTINEL
        }
    }
}

/// Read one line, stripping the terminator ("\n" or "\r\n") and nothing
/// else, so leading or interior whitespace still fails the parse. At end of
/// input the returned line is empty.
fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    let len = buf.trim_end_matches('\n').trim_end_matches('\r').len();
    buf.truncate(len);
    Ok(buf)
}
