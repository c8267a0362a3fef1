//! ASCII classification for the escape renderer.

/// How a single ASCII byte is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Ascii {
    /// Copied as-is.
    Verbatim,
    /// Backslash followed by this character.
    Escape(char),
    /// `\xXX`.
    Hex,
}

/// Classification of every ASCII byte, indexed by value.
pub(super) static ASCII_TABLE: [Ascii; 128] = build_table();

const fn build_table() -> [Ascii; 128] {
    let mut table = [Ascii::Hex; 128];
    let mut b = 0x20;
    while b <= 0x7E {
        table[b] = Ascii::Verbatim;
        b += 1;
    }
    table[0x07] = Ascii::Escape('a');
    table[0x08] = Ascii::Escape('b');
    table[0x09] = Ascii::Escape('t');
    table[0x0A] = Ascii::Escape('n');
    table[0x0B] = Ascii::Escape('v');
    table[0x0C] = Ascii::Escape('f');
    table[0x0D] = Ascii::Escape('r');
    table[b'"' as usize] = Ascii::Escape('"');
    table[b'\\' as usize] = Ascii::Escape('\\');
    table
}
