//! Acertijos 4 and 6: reading hidden messages out of noisy text.
//!
//! **Papyrus (4).** Only letters carry meaning. They are collected across the
//! whole papyrus, lowercased, and the resulting stream is run through
//! Ford's codebook:
//!
//! | Codeword | Meaning |
//! |---|---|
//! | `cueva` | `doblar` |
//! | `secreta` | `izquierda` |
//! | `pocos` | `despues` |
//! | `metros` | `derecha` |
//!
//! At each position the longest codeword wins; letters that start no
//! codeword are copied through.
//!
//! **Wall (6).** Digits are paint strokes. `0` and `8` are closed shapes and
//! read as blanks (`_`); `1`, `2` and `9` are strokes (`X`). Every other
//! character, including the remaining digits, is left as it is. Line layout
//! is kept, so the picture survives.

use acertijos_core::io;
use phf::phf_map;

static CODEBOOK: phf::Map<&'static str, &'static str> = phf_map! {
    "cueva" => "doblar",
    "secreta" => "izquierda",
    "pocos" => "despues",
    "metros" => "derecha",
};

static GLYPHS: phf::Map<char, char> = phf_map! {
    '0' => '_',
    '8' => '_',
    '1' => 'X',
    '2' => 'X',
    '9' => 'X',
};

// ---------------------------------------------------------------------------
// Papyrus
// ---------------------------------------------------------------------------

/// ASCII letters of `text`, in order, lowercased.
pub fn extract_letters(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Replace codewords in `letters`, longest match first.
pub fn decode(letters: &str) -> String {
    let (shortest, longest) = CODEBOOK
        .keys()
        .fold((usize::MAX, 0), |(lo, hi), k| (lo.min(k.len()), hi.max(k.len())));

    let mut out = String::with_capacity(letters.len());
    let mut rest = letters;
    'scan: while let Some(c) = rest.chars().next() {
        for len in (shortest..=longest).rev() {
            if let Some(meaning) = rest.get(..len).and_then(|w| CODEBOOK.get(w)) {
                out.push_str(meaning);
                rest = &rest[len..];
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

pub fn solve_papyrus(text: &str) -> String {
    let letters = extract_letters(text);
    tracing::debug!(letters = %letters, "papyrus letters");
    decode(&letters)
}

// ---------------------------------------------------------------------------
// Wall
// ---------------------------------------------------------------------------

pub fn paint(c: char) -> char {
    GLYPHS.get(&c).copied().unwrap_or(c)
}

pub fn solve_wall(text: &str) -> String {
    io::join_lines(io::lines(text).map(|row| row.chars().map(paint).collect::<String>()))
}
