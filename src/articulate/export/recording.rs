use super::metrics::text_width_mm;
use super::{DrawingBackend, FontWeight, Rgb};
use crate::error::{ArticulateError, Result};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgb,
    },
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgb,
        line_width: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f64,
        weight: FontWeight,
        color: Rgb,
    },
}

/// Drawing backend that keeps every call, grouped by page.
/// Measures text with the same metrics as the PDF backend.
pub struct RecordingBackend {
    pages: Vec<Vec<Op>>,
    font_size: f64,
    weight: FontWeight,
    text_color: Rgb,
    fill_color: Rgb,
    draw_color: Rgb,
    line_width: f64,
    fail_on_text: Option<String>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self {
            pages: vec![Vec::new()],
            font_size: 12.0,
            weight: FontWeight::Normal,
            text_color: Rgb::BLACK,
            fill_color: Rgb::BLACK,
            draw_color: Rgb::BLACK,
            line_width: 0.2,
            fail_on_text: None,
        }
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `text` fail for any run containing `needle`.
    pub fn failing_on_text(mut self, needle: &str) -> Self {
        self.fail_on_text = Some(needle.to_string());
        self
    }

    pub fn pages(&self) -> &[Vec<Op>] {
        &self.pages
    }

    /// Every text run drawn on `page`, in drawing order.
    pub fn texts_on(&self, page: usize) -> Vec<String> {
        self.pages
            .get(page)
            .map(|ops| {
                ops.iter()
                    .filter_map(|op| match op {
                        Op::Text { text, .. } => Some(text.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn push(&mut self, op: Op) {
        if let Some(page) = self.pages.last_mut() {
            page.push(op);
        }
    }
}

impl DrawingBackend for RecordingBackend {
    fn set_font(&mut self, size_pt: f64, weight: FontWeight) {
        self.font_size = size_pt;
        self.weight = weight;
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.draw_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn text_width(&self, text: &str) -> f64 {
        text_width_mm(text, self.font_size, self.weight)
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        let color = self.fill_color;
        self.push(Op::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        let (color, line_width) = (self.draw_color, self.line_width);
        self.push(Op::StrokeRect {
            x,
            y,
            w,
            h,
            color,
            line_width,
        });
        Ok(())
    }

    fn text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        if let Some(needle) = &self.fail_on_text {
            if text.contains(needle.as_str()) {
                return Err(ArticulateError::Export(format!(
                    "Simulated drawing error on {:?}",
                    text
                )));
            }
        }
        let op = Op::Text {
            text: text.to_string(),
            x,
            y,
            size: self.font_size,
            weight: self.weight,
            color: self.text_color,
        };
        self.push(op);
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        self.pages.push(Vec::new());
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        Ok(format!("recorded {} page(s)", self.pages.len()).into_bytes())
    }
}
