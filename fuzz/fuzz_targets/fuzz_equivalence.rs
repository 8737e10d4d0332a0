//! The recursive and constant-space parsers must emit identical event
//! sequences whenever both accept an input, and neither may panic on any
//! input. Tree building and dropping must likewise be panic-free.

#![no_main]

use injson::{
    parse, parse_events, parse_events_recursive, Composite, Cursor, EventSink, Leaf, ParseError,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, PartialEq)]
enum Ev {
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
struct Recorder {
    events: Vec<Ev>,
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

fuzz_target!(|data: &[u8]| {
    // The recursive parser burns a call frame per nesting level; keep the
    // comparison inputs small enough that depth cannot exhaust the stack.
    if data.len() > 4096 {
        return;
    }

    let mut buf = data.to_vec();
    let mut rec = Recorder::default();
    let stackless: Result<Vec<Ev>, ParseError> =
        parse_events(&mut Cursor::new(&mut buf), &mut rec).map(|()| rec.events);

    let mut buf = data.to_vec();
    let mut rec = Recorder::default();
    let recursive: Result<Vec<Ev>, ParseError> =
        parse_events_recursive(&mut Cursor::new(&mut buf), &mut rec).map(|()| rec.events);
    // The recursive parser accepts exactly the well-formed documents; on
    // those the traces must match. The stackless parser tolerates a few
    // malformed shapes the grammar recovery cannot distinguish, so a
    // one-sided acceptance is only reportable in the other direction.
    if let (Ok(a), Ok(b)) = (&stackless, &recursive) {
        assert_eq!(a, b);
    }
    assert!(
        !(recursive.is_ok() && stackless.is_err()),
        "stackless rejected a document the recursive parser accepts"
    );

    let mut buf = data.to_vec();
    let _ = parse(&mut Cursor::new(&mut buf));
});
