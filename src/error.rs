use thiserror::Error;

/// A parse failure, positioned at the byte offset the cursor had reached.
///
/// The offset counts from the start of the buffer handed to
/// [`Cursor::new`](crate::Cursor::new). Bytes already consumed before the
/// failure (escape rewrites, inserted NUL terminators) are not rolled
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub offset: usize,
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("unexpected byte {0:#04x}")]
    UnexpectedByte(u8),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("unescaped control byte {0:#04x} in string")]
    ControlByte(u8),
    #[error("decoded string is not valid UTF-8")]
    InvalidUtf8,
    #[error("unpaired UTF-16 surrogate")]
    UnpairedSurrogate,
    #[error("numeric value out of range")]
    NumericOverflow,
    #[error("expected ':' after object key")]
    ExpectedColon,
    #[error("expected ',' or a closing bracket")]
    ExpectedCommaOrClose,
}
