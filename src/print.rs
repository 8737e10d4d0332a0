//! Textual output for built trees.
//!
//! Objects print one entry per line, indented four spaces per nesting
//! level; arrays print on a single line. This is a diagnostic rendering:
//! doubles are written `%f`-style with six fractional digits, so the output
//! does not round-trip numeric precision.

use core::fmt::{self, Write};

use crate::value::Value;

/// Writes `value` to `w` in the crate's diagnostic format.
///
/// Strings and keys are quoted with `"` and `\` escaped and code points
/// below U+0020 written as `\u00xx`.
///
/// # Examples
///
/// ```
/// use injson::{parse, write_value, Cursor};
///
/// let mut buf = Vec::from(&br#"{"a":[1,-2,3]}"#[..]);
/// let root = parse(&mut Cursor::new(&mut buf))?;
///
/// let mut out = String::new();
/// write_value(&mut out, &root)?;
/// assert_eq!(out, "{\n    \"a\": [1, -2, 3]\n}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_value<W: Write>(w: &mut W, value: &Value<'_>) -> fmt::Result {
    write_at_depth(w, value, 0)
}

fn write_at_depth<W: Write>(w: &mut W, value: &Value<'_>, depth: usize) -> fmt::Result {
    match value {
        Value::Null => w.write_str("null"),
        Value::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => write!(w, "{i}"),
        Value::Double(d) => write!(w, "{d:.6}"),
        Value::String(s) => write_quoted(w, s),
        Value::Object(entries) => {
            if entries.is_empty() {
                return w.write_str("{}");
            }
            w.write_str("{\n")?;
            indent(w, depth + 1)?;
            for (i, (key, v)) in entries.iter().enumerate() {
                write_quoted(w, key)?;
                w.write_str(": ")?;
                write_at_depth(w, v, depth + 1)?;
                if i + 1 < entries.len() {
                    w.write_str(",\n")?;
                    indent(w, depth + 1)?;
                }
            }
            w.write_str("\n")?;
            indent(w, depth)?;
            w.write_str("}")
        }
        Value::Array(items) => {
            if items.is_empty() {
                return w.write_str("[]");
            }
            w.write_str("[")?;
            for (i, v) in items.iter().enumerate() {
                write_at_depth(w, v, depth + 1)?;
                if i + 1 < items.len() {
                    w.write_str(", ")?;
                }
            }
            w.write_str("]")
        }
    }
}

fn indent<W: Write>(w: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        w.write_str("    ")?;
    }
    Ok(())
}

fn write_quoted<W: Write>(w: &mut W, s: &str) -> fmt::Result {
    w.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                w.write_char('\\')?;
                w.write_char(c)?;
            }
            c if (c as u32) < 0x20 => write!(w, "\\u{:04x}", c as u32)?,
            _ => w.write_char(c)?,
        }
    }
    w.write_char('"')
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}
