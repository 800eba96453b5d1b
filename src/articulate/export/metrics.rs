//! Glyph advance widths for the two standard PDF fonts the exporter uses.
//!
//! Values are the Adobe AFM widths (1/1000 em) for printable ASCII, indexed
//! from the space character. Characters the PDF cannot encode are measured
//! as the `?` that replaces them; the Latin-1 upper half is measured with
//! [`FALLBACK_WIDTH`].

use super::FontWeight;

const FALLBACK_WIDTH: u16 = 556;
const MM_PER_PT: f64 = 25.4 / 72.0;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// The character actually printed for `c`: itself when WinAnsi can encode it
/// as a single Latin-1 byte, `?` otherwise.
pub fn encodable(c: char) -> char {
    let code = c as u32;
    if (32..=126).contains(&code) || (0xA0..=0xFF).contains(&code) {
        c
    } else {
        '?'
    }
}

fn glyph_width(c: char, weight: FontWeight) -> u16 {
    let c = encodable(c);
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    (c as u32)
        .checked_sub(32)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Width of `text` in millimetres when set at `size_pt`.
pub fn text_width_mm(text: &str, size_pt: f64, weight: FontWeight) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, weight))).sum();
    f64::from(units) / 1000.0 * size_pt * MM_PER_PT
}
