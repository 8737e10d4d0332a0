//! The event parsers.
//!
//! Two variants over the same grammar, emitting identical event sequences
//! for every well-formed document:
//!
//! - [`parse_events_recursive`] descends with the call stack, one frame per
//!   nesting level.
//! - [`parse_events`] keeps a single depth counter. Array-versus-object
//!   context is recoverable locally: right after `[` or `{` the next token
//!   tells the two apart (a string followed by `:` is a key, anything else
//!   is an array element), and at the end of a composite the closing byte
//!   itself says which kind is ending. So no per-level state is needed,
//!   only the count of levels still open.
//!
//! Both skip leading whitespace and leave the cursor just past the value's
//! last byte; trailing input is the caller's concern.

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::event::{parse_leaf, Composite, EventSink, Leaf, NumberPolicy, ParsedNumbers};
use crate::string::read_string;

/// Parses one JSON value, emitting events to `sink`, using call-stack
/// recursion proportional to the document depth.
///
/// # Examples
///
/// ```
/// use injson::{parse_events_recursive, Composite, Cursor, EventSink, Leaf};
///
/// struct Count(usize);
/// impl<'buf> EventSink<'buf> for Count {
///     fn leaf(&mut self, _: Leaf<'buf>) { self.0 += 1; }
///     fn begin(&mut self, _: Composite) {}
///     fn array_entry(&mut self) {}
///     fn object_entry(&mut self, _: &'buf str) {}
///     fn end(&mut self, _: Composite) {}
/// }
///
/// let mut buf = *b"[1, 2, 3]";
/// let mut count = Count(0);
/// parse_events_recursive(&mut Cursor::new(&mut buf), &mut count)?;
/// assert_eq!(count.0, 3);
/// # Ok::<(), injson::ParseError>(())
/// ```
pub fn parse_events_recursive<'buf, S: EventSink<'buf>>(
    cur: &mut Cursor<'buf>,
    sink: &mut S,
) -> Result<(), ParseError> {
    parse_events_recursive_with(cur, sink, &mut ParsedNumbers)
}

/// [`parse_events_recursive`] with a custom number policy.
pub fn parse_events_recursive_with<'buf, S, P>(
    cur: &mut Cursor<'buf>,
    sink: &mut S,
    policy: &mut P,
) -> Result<(), ParseError>
where
    S: EventSink<'buf>,
    P: NumberPolicy<'buf>,
{
    cur.skip_whitespace();
    parse_value(cur, sink, policy)
}

fn parse_value<'buf, S, P>(
    cur: &mut Cursor<'buf>,
    sink: &mut S,
    policy: &mut P,
) -> Result<(), ParseError>
where
    S: EventSink<'buf>,
    P: NumberPolicy<'buf>,
{
    match cur.peek() {
        b'[' => {
            cur.bump(1);
            sink.begin(Composite::Array);
            cur.skip_whitespace();
            if cur.peek() != b']' {
                loop {
                    sink.array_entry();
                    parse_value(cur, sink, policy)?;
                    cur.skip_whitespace();
                    if cur.peek() != b',' {
                        break;
                    }
                    cur.bump(1);
                    cur.skip_whitespace();
                }
            }
            if cur.peek() != b']' {
                return Err(cur.error(ErrorKind::ExpectedCommaOrClose));
            }
            cur.bump(1);
            sink.end(Composite::Array);
        }
        b'{' => {
            cur.bump(1);
            sink.begin(Composite::Object);
            cur.skip_whitespace();
            if cur.peek() != b'}' {
                loop {
                    let key = read_string(cur)?;
                    cur.skip_whitespace();
                    if cur.peek() != b':' {
                        return Err(cur.error(ErrorKind::ExpectedColon));
                    }
                    cur.bump(1);
                    sink.object_entry(key);
                    cur.skip_whitespace();
                    parse_value(cur, sink, policy)?;
                    cur.skip_whitespace();
                    if cur.peek() != b',' {
                        break;
                    }
                    cur.bump(1);
                    cur.skip_whitespace();
                }
            }
            if cur.peek() != b'}' {
                return Err(cur.error(ErrorKind::ExpectedCommaOrClose));
            }
            cur.bump(1);
            sink.end(Composite::Object);
        }
        _ => {
            let leaf = parse_leaf(cur, policy)?;
            sink.leaf(leaf);
        }
    }
    Ok(())
}

/// Parses one JSON value, emitting events to `sink`, in constant auxiliary
/// space: the only state carried across nesting levels is a depth counter
/// (plus one string slice held back while its role is still undecided).
///
/// Accepts arbitrarily deep documents without growing the call stack, and
/// emits exactly the event sequence [`parse_events_recursive`] emits for any
/// well-formed input.
pub fn parse_events<'buf, S: EventSink<'buf>>(
    cur: &mut Cursor<'buf>,
    sink: &mut S,
) -> Result<(), ParseError> {
    parse_events_with(cur, sink, &mut ParsedNumbers)
}

/// [`parse_events`] with a custom number policy.
pub fn parse_events_with<'buf, S, P>(
    cur: &mut Cursor<'buf>,
    sink: &mut S,
    policy: &mut P,
) -> Result<(), ParseError>
where
    S: EventSink<'buf>,
    P: NumberPolicy<'buf>,
{
    cur.skip_whitespace();
    let mut depth: usize = 0;
    // A string already consumed from the input but not yet emitted: it was
    // read to decide between "object key" and "array element", and turned
    // out to be the latter.
    let mut pending: Option<&'buf str> = None;

    loop {
        let fst = cur.peek();
        // Did this iteration open a composite that still needs its first
        // member?
        let mut opened = false;
        // With a pending string we are certainly inside an array.
        let mut known_in_array = pending.is_some();

        if let Some(s) = pending.take() {
            sink.leaf(Leaf::String(s));
        } else if fst == b'[' || fst == b'{' {
            cur.bump(1);
            cur.skip_whitespace();
            let kind = if fst == b'[' {
                Composite::Array
            } else {
                Composite::Object
            };
            sink.begin(kind);
            // In ASCII the matching closer is the opener plus two; an empty
            // composite is handled entirely here.
            if cur.peek() == fst + 2 {
                cur.bump(1);
                sink.end(kind);
            } else {
                depth += 1;
                opened = true;
                known_in_array = kind == Composite::Array;
            }
        } else {
            let leaf = parse_leaf(cur, policy)?;
            sink.leaf(leaf);
        }

        if !opened {
            // For every member but the first, the next token is ',' exactly
            // when the composite continues. Close all composites ending
            // here; the closing byte names the kind.
            while depth > 0 {
                cur.skip_whitespace();
                if cur.peek() == b',' {
                    break;
                }
                match cur.peek() {
                    b']' => sink.end(Composite::Array),
                    b'}' => sink.end(Composite::Object),
                    _ => return Err(cur.error(ErrorKind::ExpectedCommaOrClose)),
                }
                cur.bump(1);
                depth -= 1;
                known_in_array = false;
            }
        }

        // A whole value has been read and closed back to the top level.
        if depth == 0 {
            return Ok(());
        }

        if !opened {
            // The close loop above stopped at ','.
            cur.bump(1);
            cur.skip_whitespace();
        }

        if known_in_array || cur.peek() != b'"' {
            sink.array_entry();
        } else {
            // A string here is an object key only if ':' follows; otherwise
            // hold it back and deliver it as the element on the next pass.
            let s = read_string(cur)?;
            cur.skip_whitespace();
            if cur.peek() == b':' {
                sink.object_entry(s);
                cur.bump(1);
                cur.skip_whitespace();
            } else {
                sink.array_entry();
                pending = Some(s);
            }
        }
    }
}
