//! Single-byte text encoding for the base-14 Helvetica fonts.
//!
//! The fonts are declared with `WinAnsiEncoding` as base encoding, which
//! already covers Latin-1 (including `ó`/`Ó`) and typographic punctuation.
//! The remaining Polish letters are missing from it, so the font's
//! `Differences` array maps them onto the unused control codes starting at
//! [`FIRST_CUSTOM_CODE`]. Glyph names are the standard Adobe names present in
//! every conforming Helvetica.

/// Code assigned to the first entry of [`POLISH_GLYPHS`].
pub const FIRST_CUSTOM_CODE: u8 = 1;

/// Polish letters outside WinAnsi, in code order.
pub const POLISH_GLYPHS: [(char, &str); 16] = [
    ('ą', "aogonek"),
    ('Ą', "Aogonek"),
    ('ć', "cacute"),
    ('Ć', "Cacute"),
    ('ę', "eogonek"),
    ('Ę', "Eogonek"),
    ('ł', "lslash"),
    ('Ł', "Lslash"),
    ('ń', "nacute"),
    ('Ń', "Nacute"),
    ('ś', "sacute"),
    ('Ś', "Sacute"),
    ('ź', "zacute"),
    ('Ź', "Zacute"),
    ('ż', "zdotaccent"),
    ('Ż', "Zdotaccent"),
];

/// WinAnsi codes in 0x80..=0x9F, where it departs from Latin-1.
const WIN_ANSI_EXTRAS: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

/// Byte used for characters the fonts cannot show.
pub const REPLACEMENT: u8 = b'?';

pub fn encode_char(c: char) -> Option<u8> {
    if let Some(index) = POLISH_GLYPHS.iter().position(|(letter, _)| *letter == c) {
        return Some(FIRST_CUSTOM_CODE + index as u8);
    }
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u8),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(extra, _)| *extra == c)
            .map(|(_, code)| *code),
    }
}

/// Encode `text`, returning the bytes and how many characters were replaced.
pub fn encode(text: &str) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let bytes = text
        .chars()
        .map(|c| {
            encode_char(c).unwrap_or_else(|| {
                replaced += 1;
                REPLACEMENT
            })
        })
        .collect();
    (bytes, replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode("Cena: 100 zl"), (b"Cena: 100 zl".to_vec(), 0));
    }

    #[test]
    fn polish_letters_use_custom_codes() {
        let (bytes, replaced) = encode("ąĄżŻ");
        assert_eq!(bytes, vec![1, 2, 15, 16]);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn o_acute_uses_win_ansi() {
        assert_eq!(encode_char('ó'), Some(0xF3));
        assert_eq!(encode_char('Ó'), Some(0xD3));
    }

    #[test]
    fn typographic_punctuation_maps_to_win_ansi() {
        assert_eq!(encode_char('•'), Some(0x95));
        assert_eq!(encode_char('„'), Some(0x84));
        assert_eq!(encode_char('”'), Some(0x94));
        assert_eq!(encode_char('€'), Some(0x80));
    }

    #[test]
    fn unknown_characters_are_replaced_and_counted() {
        let (bytes, replaced) = encode("a→b😀");
        assert_eq!(bytes, b"a?b?".to_vec());
        assert_eq!(replaced, 2);
    }

    #[test]
    fn custom_codes_do_not_collide_with_printable_range() {
        let last = FIRST_CUSTOM_CODE as usize + POLISH_GLYPHS.len() - 1;
        assert!(last < 0x20);
    }
}
