//! Events emitted by the parsers and the hooks that customise them.
//!
//! The event parsers drive an [`EventSink`], the five structural callbacks
//! of the protocol, and consult a [`NumberPolicy`] whenever the leaf
//! dispatcher meets a byte that starts neither a string nor a literal.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::scalar::read_number;
use crate::string::read_string;

/// A scalar produced by the leaf dispatcher.
///
/// `String` and `Number` alias the input buffer. `Number` is the unparsed
/// numeric representation and is only produced by a policy such as
/// [`RawNumbers`]; the default policy parses numbers into `Integer` or
/// `Double`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leaf<'buf> {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(&'buf str),
    Number(&'buf str),
}

/// Which kind of composite a `begin`/`end` event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    Array,
    Object,
}

/// The callback set consumed by the event parsers.
///
/// For every accepted document the parsers emit one `begin`/`end` pair per
/// composite, an `array_entry` before each array element, an `object_entry`
/// (carrying the decoded key) before each object value, and a `leaf` for
/// every scalar. Implementations must not panic on sequences the parsers
/// produce; there is no way to cancel a parse from inside a callback.
pub trait EventSink<'buf> {
    fn leaf(&mut self, leaf: Leaf<'buf>);
    fn begin(&mut self, composite: Composite);
    fn array_entry(&mut self);
    fn object_entry(&mut self, key: &'buf str);
    fn end(&mut self, composite: Composite);
}

/// How the leaf dispatcher reads a token that is not a string, `null`,
/// `true`, or `false`.
///
/// This is the extension point for deferring numeric interpretation: a
/// policy may parse eagerly ([`ParsedNumbers`]) or return the raw lexeme
/// ([`RawNumbers`]). A policy may also produce non-numeric leaves for inputs
/// beyond the JSON grammar; the parsers pass whatever it returns through to
/// the sink untouched.
pub trait NumberPolicy<'buf> {
    fn read_leaf(&mut self, cur: &mut Cursor<'buf>) -> Result<Leaf<'buf>, ParseError>;
}

/// The default policy: numbers become [`Leaf::Integer`] or [`Leaf::Double`]
/// via [`read_number`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParsedNumbers;

impl<'buf> NumberPolicy<'buf> for ParsedNumbers {
    fn read_leaf(&mut self, cur: &mut Cursor<'buf>) -> Result<Leaf<'buf>, ParseError> {
        read_number(cur)
    }
}

/// A policy that leaves numbers unparsed: the strict JSON number lexeme is
/// returned as a [`Leaf::Number`] slice aliasing the input.
///
/// # Examples
///
/// ```
/// use injson::{parse_leaf, Cursor, Leaf, RawNumbers};
///
/// let mut buf = *b"-12.5e3";
/// let leaf = parse_leaf(&mut Cursor::new(&mut buf), &mut RawNumbers)?;
/// assert_eq!(leaf, Leaf::Number("-12.5e3"));
/// # Ok::<(), injson::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RawNumbers;

/// Length of the strict JSON number lexeme at the start of `bytes`:
/// `-? (0 | [1-9][0-9]*) (.[0-9]+)? ([eE][+-]?[0-9]+)?`.
fn number_lexeme_len(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i)? {
        b'0' => i += 1,
        b'1'..=b'9' => {
            while bytes.get(i).is_some_and(u8::is_ascii_digit) {
                i += 1;
            }
        }
        _ => return None,
    }
    if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
        i += 2;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(u8::is_ascii_digit) {
            while bytes.get(j).is_some_and(u8::is_ascii_digit) {
                j += 1;
            }
            i = j;
        }
    }
    Some(i)
}

impl<'buf> NumberPolicy<'buf> for RawNumbers {
    fn read_leaf(&mut self, cur: &mut Cursor<'buf>) -> Result<Leaf<'buf>, ParseError> {
        let len = number_lexeme_len(cur.rest()).ok_or_else(|| cur.unexpected())?;
        let lexeme = cur.take(len);
        // The lexeme is all ASCII by construction.
        let text = core::str::from_utf8(lexeme)
            .map_err(|_| cur.error(crate::error::ErrorKind::InvalidUtf8))?;
        Ok(Leaf::Number(text))
    }
}

/// The leaf dispatcher: reads the scalar at the cursor and classifies it.
///
/// `"` selects the string decoder, `n`/`t`/`f` the literal readers, and any
/// other byte the number policy.
pub fn parse_leaf<'buf, P: NumberPolicy<'buf>>(
    cur: &mut Cursor<'buf>,
    policy: &mut P,
) -> Result<Leaf<'buf>, ParseError> {
    if cur.peek() == b'"' {
        return read_string(cur).map(Leaf::String);
    }
    if cur.rest().starts_with(b"null") {
        cur.bump(4);
        return Ok(Leaf::Null);
    }
    if cur.rest().starts_with(b"true") {
        cur.bump(4);
        return Ok(Leaf::Boolean(true));
    }
    if cur.rest().starts_with(b"false") {
        cur.bump(5);
        return Ok(Leaf::Boolean(false));
    }
    policy.read_leaf(cur)
}
