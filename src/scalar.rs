//! Readers for the scalar tokens: `null`, booleans, and numbers.
//!
//! [`read_number`] is the canonical numeric reader; it is what the event
//! parsers use through the default number policy. [`read_integer`] and
//! [`read_double`] are the narrower low-level readers kept on the public
//! surface for callers that lex numbers themselves.

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::event::Leaf;

/// Consumes the literal `null`.
///
/// # Examples
///
/// ```
/// use injson::{read_null, Cursor};
///
/// let mut buf = *b"null";
/// assert!(read_null(&mut Cursor::new(&mut buf)).is_ok());
/// ```
pub fn read_null(cur: &mut Cursor<'_>) -> Result<(), ParseError> {
    if cur.rest().starts_with(b"null") {
        cur.bump(4);
        Ok(())
    } else {
        Err(cur.unexpected())
    }
}

/// Consumes the literal `true` or `false`.
pub fn read_bool(cur: &mut Cursor<'_>) -> Result<bool, ParseError> {
    if cur.rest().starts_with(b"true") {
        cur.bump(4);
        Ok(true)
    } else if cur.rest().starts_with(b"false") {
        cur.bump(5);
        Ok(false)
    } else {
        Err(cur.unexpected())
    }
}

/// Parses `digits` as an unsigned decimal value, `None` on overflow.
fn decimal_u64(digits: &[u8]) -> Option<u64> {
    let mut v: u64 = 0;
    for &d in digits {
        v = v
            .checked_mul(10)?
            .checked_add(u64::from(d - b'0'))?;
    }
    Some(v)
}

/// Reads a signed integer: optional `-`, then a single `0` or a digit run
/// starting with a non-zero digit.
///
/// Fails with the cursor left *after* the digits when the next byte is `.`,
/// so the caller can fall back to a double reader. The magnitude is limited
/// to `i64::MAX` for either sign; `-9223372036854775807` is the most
/// negative accepted value.
///
/// # Examples
///
/// ```
/// use injson::{read_integer, Cursor};
///
/// let mut buf = *b"-42";
/// assert_eq!(read_integer(&mut Cursor::new(&mut buf))?, -42);
/// # Ok::<(), injson::ParseError>(())
/// ```
pub fn read_integer(cur: &mut Cursor<'_>) -> Result<i64, ParseError> {
    let bytes = cur.rest();
    let mut i = 0;
    let neg = bytes.first() == Some(&b'-');
    if neg {
        i += 1;
    }
    let mag = match bytes.get(i) {
        Some(b'0') => {
            i += 1;
            0
        }
        Some(b'1'..=b'9') => {
            let start = i;
            while bytes.get(i).is_some_and(u8::is_ascii_digit) {
                i += 1;
            }
            decimal_u64(&bytes[start..i])
                .ok_or_else(|| cur.error_ahead(ErrorKind::NumericOverflow, start))?
        }
        Some(&b) => return Err(cur.error_ahead(ErrorKind::UnexpectedByte(b), i)),
        None => return Err(cur.error_ahead(ErrorKind::UnexpectedEnd, i)),
    };
    if mag > i64::MAX as u64 {
        return Err(cur.error(ErrorKind::NumericOverflow));
    }
    cur.bump(i);
    if cur.peek() == b'.' {
        return Err(cur.error(ErrorKind::UnexpectedByte(b'.')));
    }
    let v = mag as i64;
    Ok(if neg { -v } else { v })
}

/// Reads a fractional value: optional `-`, optional `0`, then a `.`-led
/// fraction; anything else yields `0.0`.
///
/// This reader is infallible and reads no exponent. It exists for callers
/// driving the scalar layer directly after a failed [`read_integer`];
/// everything above the scalar layer goes through [`read_number`], which
/// accepts the full numeric grammar.
pub fn read_double(cur: &mut Cursor<'_>) -> f64 {
    let bytes = cur.rest();
    let mut i = 0;
    let neg = bytes.first() == Some(&b'-');
    if neg {
        i += 1;
    }
    if bytes.get(i) == Some(&b'0') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        let mut j = i + 1;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        let d = if j > i + 1 {
            let d = lexeme_to_f64(&bytes[i..j]);
            i = j;
            d
        } else {
            0.0
        };
        cur.bump(i);
        return if neg { -d } else { d };
    }
    cur.bump(i);
    0.0
}

/// `text` is a lexically checked numeric lexeme; conversion cannot fail.
fn lexeme_to_f64(text: &[u8]) -> f64 {
    core::str::from_utf8(text)
        .ok()
        .and_then(|t| t.parse().ok())
        .unwrap_or(0.0)
}

/// Reads a number and classifies it.
///
/// Grammar: optional `-`, a digit run (leading zeros tolerated), an optional
/// `.`-led fraction, an optional decimal `e`/`E` exponent. A fraction or
/// exponent classifies the value as [`Leaf::Double`]; otherwise it is a
/// [`Leaf::Integer`] with the magnitude limited to `i64::MAX`. A `.` or
/// exponent marker not followed by a digit ends the number instead of being
/// consumed.
///
/// # Examples
///
/// ```
/// use injson::{read_number, Cursor, Leaf};
///
/// let mut buf = *b"1e3";
/// assert_eq!(read_number(&mut Cursor::new(&mut buf))?, Leaf::Double(1000.0));
/// # Ok::<(), injson::ParseError>(())
/// ```
pub fn read_number<'buf>(cur: &mut Cursor<'buf>) -> Result<Leaf<'buf>, ParseError> {
    let bytes = cur.rest();
    let mut i = 0;
    let neg = bytes.first() == Some(&b'-');
    if neg {
        i += 1;
    }
    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    if i == int_start {
        return Err(match bytes.get(i) {
            Some(&b) => cur.error_ahead(ErrorKind::UnexpectedByte(b), i),
            None => cur.error_ahead(ErrorKind::UnexpectedEnd, i),
        });
    }
    let int_end = i;

    let mut fractional = false;
    if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
        i += 2;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        fractional = true;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            // The exponent literal itself must fit a signed value; the
            // magnitude of the result may still round to infinity or zero.
            if decimal_u64(&bytes[exp_start..j]).map_or(true, |e| e > i64::MAX as u64) {
                return Err(cur.error_ahead(ErrorKind::NumericOverflow, exp_start));
            }
            i = j;
            fractional = true;
        }
    }

    if fractional {
        let v = lexeme_to_f64(&bytes[..i]);
        cur.bump(i);
        Ok(Leaf::Double(v))
    } else {
        let mag = decimal_u64(&bytes[int_start..int_end])
            .ok_or_else(|| cur.error_ahead(ErrorKind::NumericOverflow, int_start))?;
        if mag > i64::MAX as u64 {
            return Err(cur.error_ahead(ErrorKind::NumericOverflow, int_start));
        }
        cur.bump(i);
        let v = mag as i64;
        Ok(Leaf::Integer(if neg { -v } else { v }))
    }
}
