//! Test support: an event recorder plus the shared corpus helpers.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{parse_events, parse_events_recursive, Composite, Cursor, EventSink, Leaf, ParseError};

mod parse_bad;
mod property;

/// An owned copy of one emitted event, for comparing traces after the
/// borrowed input is gone.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Ev {
    Begin(Composite),
    End(Composite),
    ArrayEntry,
    ObjectEntry(String),
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Str(String),
    Number(String),
}

#[derive(Default)]
pub(crate) struct Recorder {
    pub events: Vec<Ev>,
}

impl<'buf> EventSink<'buf> for Recorder {
    fn leaf(&mut self, leaf: Leaf<'buf>) {
        self.events.push(match leaf {
            Leaf::Null => Ev::Null,
            Leaf::Boolean(b) => Ev::Boolean(b),
            Leaf::Integer(i) => Ev::Integer(i),
            Leaf::Double(d) => Ev::Double(d),
            Leaf::String(s) => Ev::Str(s.into()),
            Leaf::Number(s) => Ev::Number(s.into()),
        });
    }

    fn begin(&mut self, composite: Composite) {
        self.events.push(Ev::Begin(composite));
    }

    fn array_entry(&mut self) {
        self.events.push(Ev::ArrayEntry);
    }

    fn object_entry(&mut self, key: &'buf str) {
        self.events.push(Ev::ObjectEntry(key.into()));
    }

    fn end(&mut self, composite: Composite) {
        self.events.push(Ev::End(composite));
    }
}

pub(crate) fn record_stackless(input: &[u8]) -> Result<Vec<Ev>, ParseError> {
    let mut buf = Vec::from(input);
    let mut rec = Recorder::default();
    parse_events(&mut Cursor::new(&mut buf), &mut rec)?;
    Ok(rec.events)
}

pub(crate) fn record_recursive(input: &[u8]) -> Result<Vec<Ev>, ParseError> {
    let mut buf = Vec::from(input);
    let mut rec = Recorder::default();
    parse_events_recursive(&mut Cursor::new(&mut buf), &mut rec)?;
    Ok(rec.events)
}

/// Checks the structural accounting of a trace: every `begin` has an `end`,
/// and inside each composite the number of entry events equals the number of
/// members (leaves plus nested composites) at that level.
pub(crate) fn check_trace_invariants(events: &[Ev]) {
    let mut stack: Vec<(usize, usize)> = Vec::new(); // (entries, members)
    for ev in events {
        match ev {
            Ev::Begin(_) => {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                stack.push((0, 0));
            }
            Ev::End(_) => {
                let (entries, members) = stack.pop().expect("end without begin");
                assert_eq!(entries, members, "entry/member mismatch in composite");
            }
            Ev::ArrayEntry => {
                stack.last_mut().expect("entry outside composite").0 += 1;
            }
            Ev::ObjectEntry(_) => {
                stack.last_mut().expect("entry outside composite").0 += 1;
            }
            _ => {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
            }
        }
    }
    assert!(stack.is_empty(), "unbalanced begin/end");
}
