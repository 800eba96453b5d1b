//! # Sheet Export
//!
//! Lays cards out on printable sheets for cutting. The drawing itself goes
//! through the [`DrawingBackend`] trait so the layout code never touches a
//! file format:
//!
//! - [`pdf::PdfBackend`]: Production backend, emits a PDF document
//! - [`recording::RecordingBackend`]: Records draw calls for tests
//!
//! ## Card Face
//!
//! ```text
//! ┌──────────────────────────────┐
//! │▌P▐ Elvis                     │  six equal bands, one per field,
//! │▌O▐ *** Teapot                │  each with a coloured letter box
//! │▌W▐ Paris                     │  and the field text to its right
//! │▌A▐ Juggling                  │
//! │▌N▐ Oak                       │  the category field carries the
//! │▌R▐ Velcro                    │  "***" marker
//! └──────────────────────────────┘
//! ```
//!
//! Long values wrap onto extra lines inside their band. Nothing clips them, so
//! a value with many lines runs into the band below.

use crate::error::Result;
use crate::model::{Card, Field};
use chrono::NaiveDate;

pub mod layout;
pub mod metrics;
pub mod pdf;
#[cfg(any(test, feature = "test_utils"))]
pub mod recording;
pub mod wrap;

use layout::{slot_for, CARD_HEIGHT, CARD_WIDTH};
use wrap::wrap_text;

/// Inset of the bands from the card border.
pub const PADDING: f64 = 1.5;
/// Width of the coloured letter box.
pub const LABEL_BOX_WIDTH: f64 = 6.0;
/// Distance from the band's left edge to the start of the field text.
pub const TEXT_INSET: f64 = 8.0;
/// Vertical step between wrapped lines.
pub const LINE_STEP: f64 = 2.5;
/// Baseline position inside a band, as a fraction of the band height.
pub const BASELINE_RATIO: f64 = 0.6;

pub const LABEL_FONT_SIZE: f64 = 7.0;
pub const VALUE_FONT_SIZE: f64 = 6.0;
pub const BORDER_WIDTH: f64 = 0.5;

pub const FILE_PREFIX: &str = "articulate-cards";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Letter-box colour for each field, shared by every card in a document.
pub fn field_color(field: Field) -> Rgb {
    match field {
        Field::Person => Rgb(231, 76, 60),
        Field::Object => Rgb(52, 152, 219),
        Field::World => Rgb(46, 204, 113),
        Field::Action => Rgb(243, 156, 18),
        Field::Nature => Rgb(155, 89, 182),
        Field::Random => Rgb(230, 126, 34),
    }
}

/// Drawing capability the exporter needs.
///
/// Coordinates are millimetres from the top-left corner of the current page.
/// A fresh backend starts with its first page already open.
pub trait DrawingBackend {
    fn set_font(&mut self, size_pt: f64, weight: FontWeight);
    fn set_text_color(&mut self, color: Rgb);
    fn set_fill_color(&mut self, color: Rgb);
    fn set_draw_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);

    /// Width of `text` in the current font, in millimetres.
    fn text_width(&self, text: &str) -> f64;

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()>;
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()>;

    /// Draws `text` with its baseline starting at (`x`, `y`).
    fn text(&mut self, text: &str, x: f64, y: f64) -> Result<()>;

    fn add_page(&mut self) -> Result<()>;

    /// Serializes the finished document.
    fn finish(&mut self) -> Result<Vec<u8>>;
}

/// `articulate-cards-YYYY-MM-DD.pdf`
pub fn export_filename(date: NaiveDate) -> String {
    format!("{}-{}.pdf", FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Draws every card onto as many pages as needed. Returns the page count.
pub fn draw_cards<D: DrawingBackend>(backend: &mut D, cards: &[Card]) -> Result<usize> {
    let mut pages = 0;
    for (index, card) in cards.iter().enumerate() {
        let slot = slot_for(index);
        if slot.page + 1 > pages {
            if pages > 0 {
                backend.add_page()?;
            }
            pages = slot.page + 1;
        }

        backend.set_draw_color(Rgb::BLACK);
        backend.set_line_width(BORDER_WIDTH);
        backend.stroke_rect(slot.x, slot.y, CARD_WIDTH, CARD_HEIGHT)?;

        draw_card_content(backend, card, slot.x, slot.y)?;
    }
    Ok(pages)
}

fn draw_card_content<D: DrawingBackend>(
    backend: &mut D,
    card: &Card,
    x: f64,
    y: f64,
) -> Result<()> {
    let band_height = (CARD_HEIGHT - PADDING * 2.0) / Field::ALL.len() as f64;
    let baseline = band_height * BASELINE_RATIO;
    let max_width = CARD_WIDTH - PADDING - TEXT_INSET;

    for (i, &field) in Field::ALL.iter().enumerate() {
        let band_y = y + PADDING + i as f64 * band_height;

        backend.set_fill_color(field_color(field));
        backend.fill_rect(x + PADDING, band_y, LABEL_BOX_WIDTH, band_height)?;

        backend.set_text_color(Rgb::WHITE);
        backend.set_font(LABEL_FONT_SIZE, FontWeight::Bold);
        let letter = field.letter().to_string();
        let letter_x = x + PADDING + (LABEL_BOX_WIDTH - backend.text_width(&letter)) / 2.0;
        backend.text(&letter, letter_x, band_y + baseline)?;

        backend.set_text_color(Rgb::BLACK);
        backend.set_font(VALUE_FONT_SIZE, FontWeight::Normal);
        let display = card.display_text(field);
        let lines = wrap_text(&display, max_width, |s| backend.text_width(s));
        for (n, line) in lines.iter().enumerate() {
            backend.text(
                line,
                x + PADDING + TEXT_INSET,
                band_y + baseline + n as f64 * LINE_STEP,
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::layout::{START_X, START_Y};
    use super::recording::{Op, RecordingBackend};
    use super::*;
    use crate::model::CardId;

    fn card(n: u64, category: Option<Field>) -> Card {
        Card {
            person: format!("Person {}", n),
            object: "Teapot".into(),
            world: "Paris".into(),
            action: "Juggling".into(),
            nature: "Oak".into(),
            random: "Velcro".into(),
            category,
            id: CardId(n),
        }
    }

    fn cards(n: u64) -> Vec<Card> {
        (1..=n).map(|i| card(i, None)).collect()
    }

    fn borders(page: &[Op]) -> Vec<(f64, f64)> {
        page.iter()
            .filter_map(|op| match op {
                Op::StrokeRect { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn filename_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(export_filename(date), "articulate-cards-2026-03-07.pdf");
    }

    #[test]
    fn page_count_is_ceil_of_eighths() {
        for (n, expected) in [(1, 1), (8, 1), (9, 2), (16, 2), (17, 3)] {
            let mut backend = RecordingBackend::new();
            let pages = draw_cards(&mut backend, &cards(n)).unwrap();
            assert_eq!(pages, expected, "{} cards", n);
            assert_eq!(backend.pages().len(), expected, "{} cards", n);
        }
    }

    #[test]
    fn nine_cards_put_the_last_one_top_left_of_page_two() {
        let mut backend = RecordingBackend::new();
        draw_cards(&mut backend, &cards(9)).unwrap();

        let pages = backend.pages();
        assert_eq!(borders(&pages[0]).len(), 8);
        assert_eq!(borders(&pages[1]), vec![(START_X, START_Y)]);
        assert!(backend.texts_on(1).iter().any(|t| t == "Person 9"));
        for i in 1..=8 {
            let name = format!("Person {}", i);
            assert!(backend.texts_on(0).contains(&name));
        }
    }

    #[test]
    fn borders_follow_row_major_order() {
        let mut backend = RecordingBackend::new();
        draw_cards(&mut backend, &cards(4)).unwrap();
        assert_eq!(
            borders(&backend.pages()[0]),
            vec![
                (START_X, START_Y),
                (START_X + 77.0, START_Y),
                (START_X, START_Y + 57.0),
                (START_X + 77.0, START_Y + 57.0),
            ]
        );
    }

    #[test]
    fn category_field_is_drawn_with_marker() {
        let mut backend = RecordingBackend::new();
        draw_cards(
            &mut backend,
            &[card(1, Some(Field::Person)), card(2, None)],
        )
        .unwrap();

        let texts = backend.texts_on(0);
        assert!(texts.contains(&"*** Person 1".to_string()));
        assert!(texts.contains(&"Person 2".to_string()));
        assert_eq!(texts.iter().filter(|t| t.contains("***")).count(), 1);
    }

    #[test]
    fn each_band_has_label_box_and_letter() {
        let mut backend = RecordingBackend::new();
        draw_cards(&mut backend, &cards(1)).unwrap();
        let page = &backend.pages()[0];

        let fills: Vec<Rgb> = page
            .iter()
            .filter_map(|op| match op {
                Op::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        let expected: Vec<Rgb> = Field::ALL.iter().map(|f| field_color(*f)).collect();
        assert_eq!(fills, expected);

        let letters: Vec<&str> = page
            .iter()
            .filter_map(|op| match op {
                Op::Text {
                    text,
                    weight: FontWeight::Bold,
                    color,
                    ..
                } if *color == Rgb::WHITE => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(letters, vec!["P", "O", "W", "A", "N", "R"]);
    }

    #[test]
    fn long_values_wrap_downwards_in_their_band() {
        let sentence = "the lost city of atlantis beneath the waves of the great ocean";
        let mut long = card(1, Some(Field::World));
        long.world = format!("{} {}", sentence, sentence);

        let mut backend = RecordingBackend::new();
        draw_cards(&mut backend, &[long]).unwrap();

        let band_height = (CARD_HEIGHT - PADDING * 2.0) / Field::ALL.len() as f64;
        let world_top = START_Y + PADDING + 2.0 * band_height;
        let action_top = world_top + band_height;
        let first_baseline = world_top + band_height * BASELINE_RATIO;
        let action_baseline = action_top + band_height * BASELINE_RATIO;

        let world_lines: Vec<(String, f64)> = backend.pages()[0]
            .iter()
            .filter_map(|op| match op {
                Op::Text {
                    text,
                    x,
                    y,
                    weight: FontWeight::Normal,
                    ..
                } if *x == START_X + PADDING + TEXT_INSET
                    && *y >= first_baseline - 1e-9
                    && *y < action_baseline - 1e-9 =>
                {
                    Some((text.clone(), *y))
                }
                _ => None,
            })
            .collect();

        assert!(world_lines.len() >= 2, "{:?}", world_lines);
        assert!(world_lines[0].0.starts_with("*** the"));
        assert!((world_lines[0].1 - first_baseline).abs() < 1e-9);
        for pair in world_lines.windows(2) {
            assert!((pair[1].1 - pair[0].1 - LINE_STEP).abs() < 1e-9);
        }
        let max_width = CARD_WIDTH - PADDING - TEXT_INSET;
        for (text, _) in &world_lines {
            let width = metrics::text_width_mm(text, VALUE_FONT_SIZE, FontWeight::Normal);
            assert!(width <= max_width, "{} is {} mm", text, width);
        }
        let rejoined: Vec<&str> = world_lines.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(rejoined.join(" "), format!("*** {} {}", sentence, sentence));
    }

    #[test]
    fn drawing_errors_propagate() {
        let mut backend = RecordingBackend::new().failing_on_text("Velcro");
        assert!(draw_cards(&mut backend, &cards(1)).is_err());
    }
}
