//! Quoted, escaped rendering of raw bytes for diagnostics.
//!
//! Protocol traces often need to show strings that came off the wire: AMF
//! command names, stream keys, tcUrls. They may hold anything, so they are
//! rendered inside double quotes with C-style escapes:
//!
//! - printable ASCII is copied, except `"` and `\` which get a backslash
//! - `\a \b \t \n \v \f \r` for the usual control characters
//! - valid UTF-8 is decoded; printable characters are copied, others become
//!   `\uXXXX` or `\UXXXXXXXX`
//! - every other byte becomes `\xXX`
//!
//! Absent data renders as [`NULL_TOKEN`] without quotes.
//!
//! # Example
//!
//! ```
//! use rtmpio::{escape_bytes, Escaped};
//!
//! assert_eq!(escape_bytes(b"Hello, \"World\"!"), r#""Hello, \"World\"!""#);
//! assert_eq!(Escaped::new(b"caf\xC3\xA9\x01").to_string(), r#""café\x01""#);
//! ```

mod printable;
mod table;

use std::fmt::{self, Write};

use table::{ASCII_TABLE, Ascii};

/// Rendered in place of absent data.
pub const NULL_TOKEN: &str = "(NULL)";

/// How much of the input slice is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extent {
    /// The whole slice, embedded NUL bytes included.
    #[default]
    Whole,

    /// Up to the first NUL byte, or the whole slice if there is none.
    NulTerminated,
}

impl Extent {
    fn apply(self, data: &[u8]) -> &[u8] {
        match self {
            Extent::Whole => data,
            Extent::NulTerminated => match data.iter().position(|&b| b == 0) {
                Some(end) => &data[..end],
                None => data,
            },
        }
    }
}

/// Decodes the UTF-8 sequence at the start of `rest`, if it is valid.
fn decode_utf8(rest: &[u8]) -> Option<char> {
    let window = &rest[..rest.len().min(4)];
    let valid = match std::str::from_utf8(window) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&window[..e.valid_up_to()]).ok()?,
    };
    valid.chars().next()
}

/// Writes the quoted, escaped form of `data` to `out`.
///
/// `None` writes [`NULL_TOKEN`]. The closing quote follows the last byte
/// covered by `extent`.
pub fn write_escaped<W: Write + ?Sized>(
    out: &mut W,
    data: Option<&[u8]>,
    extent: Extent,
) -> fmt::Result {
    let Some(data) = data else {
        return out.write_str(NULL_TOKEN);
    };
    let data = extent.apply(data);

    out.write_char('"')?;

    let mut i = 0;
    while i < data.len() {
        let c = data[i];

        if c.is_ascii() {
            match ASCII_TABLE[c as usize] {
                Ascii::Verbatim => out.write_char(c as char)?,
                Ascii::Escape(letter) => {
                    out.write_char('\\')?;
                    out.write_char(letter)?;
                }
                Ascii::Hex => write!(out, "\\x{:02X}", c)?,
            }
            i += 1;
            continue;
        }

        match decode_utf8(&data[i..]) {
            Some(ch) => {
                let cp = ch as u32;
                if printable::is_printable(ch) {
                    out.write_char(ch)?;
                } else if cp <= 0xFFFF {
                    write!(out, "\\u{:04X}", cp)?;
                } else {
                    write!(out, "\\U{:08X}", cp)?;
                }
                i += ch.len_utf8();
            }
            None => {
                write!(out, "\\x{:02X}", c)?;
                i += 1;
            }
        }
    }

    out.write_char('"')
}

/// Appends the quoted, escaped form of `data` to `out`.
///
/// See [`write_escaped`].
pub fn print_escaped(out: &mut String, data: Option<&[u8]>, extent: Extent) {
    // Writing into a String cannot fail.
    write_escaped(out, data, extent).ok();
}

/// Returns the quoted, escaped form of the whole of `data`.
pub fn escape_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() + 2);
    print_escaped(&mut out, Some(data), Extent::Whole);
    out
}

/// A [`Display`](fmt::Display) adapter that renders bytes escaped.
///
/// Useful as a `tracing` field or `format!` argument:
///
/// ```
/// use rtmpio::Escaped;
///
/// let app = b"live\n";
/// assert_eq!(format!("app={}", Escaped::new(app)), r#"app="live\n""#);
/// assert_eq!(Escaped::null().to_string(), "(NULL)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaped<'a> {
    data: Option<&'a [u8]>,
    extent: Extent,
}

impl<'a> Escaped<'a> {
    /// Renders the whole of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data: Some(data),
            extent: Extent::Whole,
        }
    }

    /// Renders `data` up to its first NUL byte.
    pub fn nul_terminated(data: &'a [u8]) -> Self {
        Self {
            data: Some(data),
            extent: Extent::NulTerminated,
        }
    }

    /// Renders absent data.
    pub fn null() -> Self {
        Self {
            data: None,
            extent: Extent::Whole,
        }
    }

    /// Renders `data`, or [`NULL_TOKEN`] when it is `None`.
    pub fn with_extent(data: Option<&'a [u8]>, extent: Extent) -> Self {
        Self { data, extent }
    }
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, self.data, self.extent)
    }
}
