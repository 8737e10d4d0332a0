//! A destructive, in-place JSON parser.
//!
//! The input is a writable, disposable byte buffer: string tokens are decoded
//! (escape sequences rewritten, a terminating NUL appended) directly inside
//! that buffer, and every decoded string or object key the parser hands out
//! is a `&str` aliasing it. No text is ever copied out of the input.
//!
//! The crate has three layers:
//!
//! - low-level scalar readers ([`read_null`], [`read_bool`], [`read_integer`],
//!   [`read_double`], [`read_number`], [`read_string`]) advancing a shared
//!   [`Cursor`],
//! - two event parsers over the full grammar, [`parse_events_recursive`]
//!   (call stack proportional to document depth) and [`parse_events`]
//!   (a single depth counter in constant auxiliary space), both feeding an
//!   [`EventSink`],
//! - a tree builder ([`parse`], [`parse_with`]) materialising a [`Value`]
//!   that borrows the buffer.
//!
//! # Examples
//!
//! ```
//! use injson::{parse, Cursor, Value};
//!
//! let mut buf = Vec::from(&br#"{"a":[1,-2,3]}"#[..]);
//! let root = parse(&mut Cursor::new(&mut buf))?;
//!
//! let items = root.get("a").and_then(Value::as_array).unwrap();
//! assert_eq!(items[1], Value::Integer(-2));
//! # Ok::<(), injson::ParseError>(())
//! ```
//!
//! A parse consumes its input: the buffer is mutated (escapes rewritten,
//! string tokens NUL-terminated), so re-parsing the same bytes is not
//! supported. Callers that need the original must keep a copy.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod event;
mod parser;
mod print;
mod scalar;
mod string;
mod tree;
mod value;

pub use cursor::Cursor;
pub use error::{ErrorKind, ParseError};
pub use event::{parse_leaf, Composite, EventSink, Leaf, NumberPolicy, ParsedNumbers, RawNumbers};
pub use parser::{
    parse_events, parse_events_recursive, parse_events_recursive_with, parse_events_with,
};
pub use print::write_value;
pub use scalar::{read_bool, read_double, read_integer, read_null, read_number};
pub use string::read_string;
pub use tree::{parse, parse_with};
pub use value::Value;

#[cfg(test)]
mod tests;
