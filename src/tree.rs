//! The tree builder: an event consumer that materialises a [`Value`].
//!
//! The builder keeps a stack of in-progress composites. `begin` pushes an
//! empty one, entry events target the next slot (an object entry stashes its
//! key until the value arrives), `leaf` fills the slot, and `end` pops the
//! finished composite into its parent, or into the root slot when the
//! stack has drained.

use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::event::{Composite, EventSink, Leaf, NumberPolicy, ParsedNumbers};
use crate::parser::parse_events_with;
use crate::value::Value;

enum Pending<'buf> {
    Array(Vec<Value<'buf>>),
    Object {
        entries: Vec<(&'buf str, Value<'buf>)>,
        key: Option<&'buf str>,
    },
}

struct TreeSink<'buf, F> {
    stack: Vec<Pending<'buf>>,
    root: Option<Value<'buf>>,
    store_leaf: F,
}

impl<'buf, F: FnMut(&'buf str) -> Value<'buf>> TreeSink<'buf, F> {
    fn new(store_leaf: F) -> Self {
        TreeSink {
            stack: Vec::new(),
            root: None,
            store_leaf,
        }
    }

    fn place(&mut self, v: Value<'buf>) {
        match self.stack.last_mut() {
            Some(Pending::Array(items)) => items.push(v),
            Some(Pending::Object { entries, key }) => {
                // A keyless value can only come from event sequences the
                // parsers never produce for well-formed input; drop it
                // rather than guessing a slot.
                if let Some(key) = key.take() {
                    entries.push((key, v));
                }
            }
            None => self.root = Some(v),
        }
    }
}

impl<'buf, F: FnMut(&'buf str) -> Value<'buf>> EventSink<'buf> for TreeSink<'buf, F> {
    fn leaf(&mut self, leaf: Leaf<'buf>) {
        let v = match leaf {
            Leaf::Null => Value::Null,
            Leaf::Boolean(b) => Value::Boolean(b),
            Leaf::Integer(i) => Value::Integer(i),
            Leaf::Double(d) => Value::Double(d),
            Leaf::String(s) => Value::String(s),
            Leaf::Number(s) => (self.store_leaf)(s),
        };
        self.place(v);
    }

    fn begin(&mut self, composite: Composite) {
        self.stack.push(match composite {
            Composite::Array => Pending::Array(Vec::new()),
            Composite::Object => Pending::Object {
                entries: Vec::new(),
                key: None,
            },
        });
    }

    fn array_entry(&mut self) {}

    fn object_entry(&mut self, key: &'buf str) {
        if let Some(Pending::Object { key: slot, .. }) = self.stack.last_mut() {
            *slot = Some(key);
        }
    }

    fn end(&mut self, _composite: Composite) {
        let done = match self.stack.pop() {
            Some(Pending::Array(items)) => Value::Array(items),
            Some(Pending::Object { entries, .. }) => Value::Object(entries),
            None => return,
        };
        self.place(done);
    }
}

/// Parses one JSON value into a tree borrowing the buffer.
///
/// Uses the constant-space event parser and the default number policy. On
/// failure everything built so far is released; the buffer keeps whatever
/// rewrites had already happened.
///
/// # Examples
///
/// ```
/// use injson::{parse, Cursor, Value};
///
/// let mut buf = Vec::from(&b"null"[..]);
/// assert_eq!(parse(&mut Cursor::new(&mut buf))?, Value::Null);
///
/// let mut buf = Vec::from(&br#"{"a":[1,-2,3]}"#[..]);
/// let root = parse(&mut Cursor::new(&mut buf))?;
/// assert_eq!(
///     root.get("a").and_then(Value::as_array).map(<[_]>::len),
///     Some(3)
/// );
/// # Ok::<(), injson::ParseError>(())
/// ```
pub fn parse<'buf>(cur: &mut Cursor<'buf>) -> Result<Value<'buf>, ParseError> {
    parse_with(cur, &mut ParsedNumbers, Value::String)
}

/// [`parse`] with a custom number policy and a mapping for the leaves the
/// builder does not handle itself.
///
/// `store_leaf` is called for every [`Leaf::Number`](crate::Leaf::Number)
/// the policy produces (the built-in leaf kinds never reach it) and
/// decides how the unparsed lexeme is stored in the tree.
///
/// # Examples
///
/// ```
/// use injson::{parse_with, Cursor, RawNumbers, Value};
///
/// let mut buf = Vec::from(&br#"[1e400, 2]"#[..]);
/// let root = parse_with(&mut Cursor::new(&mut buf), &mut RawNumbers, Value::String)?;
/// // Numbers survive as their source text, however extreme.
/// assert_eq!(root.as_array().unwrap()[0], Value::String("1e400"));
/// # Ok::<(), injson::ParseError>(())
/// ```
pub fn parse_with<'buf, P, F>(
    cur: &mut Cursor<'buf>,
    policy: &mut P,
    store_leaf: F,
) -> Result<Value<'buf>, ParseError>
where
    P: NumberPolicy<'buf>,
    F: FnMut(&'buf str) -> Value<'buf>,
{
    let mut sink = TreeSink::new(store_leaf);
    parse_events_with(cur, &mut sink, policy)?;
    sink.root.ok_or_else(|| cur.error(ErrorKind::UnexpectedEnd))
}
