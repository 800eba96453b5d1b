//! Minimal PDF 1.4 writer.
//!
//! Only what card sheets need: filled and stroked rectangles and text in the
//! two standard Helvetica faces, which every PDF viewer ships, so no font data
//! is embedded. Text is WinAnsi encoded; characters outside Latin-1 print as
//! `?`.

use super::layout::{PAGE_HEIGHT, PAGE_WIDTH};
use super::metrics::{encodable, text_width_mm};
use super::{DrawingBackend, FontWeight, Rgb};
use crate::error::Result;
use chrono::Utc;
use std::io::Write;

const TITLE: &str = "Articulate Cards";
const PT_PER_MM: f64 = 72.0 / 25.4;

// Fixed object numbers; pages follow as (page, contents) pairs.
const CATALOG_OBJ: usize = 1;
const PAGES_OBJ: usize = 2;
const FONT_NORMAL_OBJ: usize = 3;
const FONT_BOLD_OBJ: usize = 4;
const INFO_OBJ: usize = 5;
const FIRST_PAGE_OBJ: usize = 6;

pub struct PdfBackend {
    pages: Vec<Vec<u8>>,
    font_size: f64,
    weight: FontWeight,
    text_color: Rgb,
    fill_color: Rgb,
    draw_color: Rgb,
    line_width: f64,
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self {
            pages: vec![Vec::new()],
            font_size: 12.0,
            weight: FontWeight::Normal,
            text_color: Rgb::BLACK,
            fill_color: Rgb::BLACK,
            draw_color: Rgb::BLACK,
            line_width: 0.2,
        }
    }
}

impl PdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn emit(&mut self, op: &[u8]) {
        if let Some(page) = self.pages.last_mut() {
            page.extend_from_slice(op);
        }
    }

    fn font_resource(&self) -> &'static str {
        match self.weight {
            FontWeight::Normal => "F1",
            FontWeight::Bold => "F2",
        }
    }
}

/// Rectangle in PDF user space (points, bottom-left origin).
fn rect_pt(x: f64, y: f64, w: f64, h: f64) -> String {
    format!(
        "{} {} {} {} re",
        num(x * PT_PER_MM),
        num((PAGE_HEIGHT - y - h) * PT_PER_MM),
        num(w * PT_PER_MM),
        num(h * PT_PER_MM)
    )
}

fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn color(c: Rgb) -> String {
    format!(
        "{} {} {}",
        num(f64::from(c.0) / 255.0),
        num(f64::from(c.1) / 255.0),
        num(f64::from(c.2) / 255.0)
    )
}

/// Encodes `text` as the body of a PDF literal string.
fn literal(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars().map(encodable) {
        if matches!(c, '(' | ')' | '\\') {
            out.push(b'\\');
        }
        out.push(c as u8);
    }
    out
}

impl DrawingBackend for PdfBackend {
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
        let op = format!("{} rg\n{} f\n", color(self.fill_color), rect_pt(x, y, w, h));
        self.emit(op.as_bytes());
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        let op = format!(
            "{} RG\n{} w\n{} S\n",
            color(self.draw_color),
            num(self.line_width * PT_PER_MM),
            rect_pt(x, y, w, h)
        );
        self.emit(op.as_bytes());
        Ok(())
    }

    fn text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        let mut op = format!(
            "BT\n/{} {} Tf\n{} rg\n{} {} Td\n(",
            self.font_resource(),
            num(self.font_size),
            color(self.text_color),
            num(x * PT_PER_MM),
            num((PAGE_HEIGHT - y) * PT_PER_MM)
        )
        .into_bytes();
        op.extend(literal(text));
        op.extend_from_slice(b") Tj\nET\n");
        self.emit(&op);
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        self.pages.push(Vec::new());
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let page_refs: Vec<String> = (0..self.pages.len())
            .map(|i| format!("{} 0 R", FIRST_PAGE_OBJ + 2 * i))
            .collect();

        let mut objects: Vec<Vec<u8>> = vec![
            format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_OBJ).into_bytes(),
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                page_refs.join(" "),
                self.pages.len()
            )
            .into_bytes(),
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_vec(),
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        ];

        let mut info = b"<< /Title (".to_vec();
        info.extend(literal(TITLE));
        info.extend(
            format!(
                ") /Producer (articulate) /CreationDate (D:{}Z) >>",
                Utc::now().format("%Y%m%d%H%M%S")
            )
            .into_bytes(),
        );
        objects.push(info);

        for (i, content) in self.pages.iter().enumerate() {
            let contents_obj = FIRST_PAGE_OBJ + 2 * i + 1;
            objects.push(
                format!(
                    "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
                     /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> /Contents {} 0 R >>",
                    PAGES_OBJ,
                    num(PAGE_WIDTH * PT_PER_MM),
                    num(PAGE_HEIGHT * PT_PER_MM),
                    FONT_NORMAL_OBJ,
                    FONT_BOLD_OBJ,
                    contents_obj
                )
                .into_bytes(),
            );
            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(content);
            stream.extend_from_slice(b"\nendstream");
            objects.push(stream);
        }

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            writeln!(out, "{} 0 obj", i + 1)?;
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_at = out.len();
        writeln!(out, "xref\n0 {}\n0000000000 65535 f ", objects.len() + 1)?;
        for offset in offsets {
            writeln!(out, "{:010} 00000 n ", offset)?;
        }
        writeln!(
            out,
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF",
            objects.len() + 1,
            CATALOG_OBJ,
            INFO_OBJ,
            xref_at
        )?;

        Ok(out)
    }
}
