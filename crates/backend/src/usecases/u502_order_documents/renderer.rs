//! PDF rendering of a [`DocumentLayout`].
//!
//! A4 portrait, builtin Helvetica. The first page carries the heading with
//! the client and delivery blocks; rows that do not fit continue on new pages
//! with the table header repeated. Every page gets the configured footer and a
//! page counter.

use std::io::BufWriter;
use std::ops::Range;

use contracts::usecases::u502_order_documents::{DocumentLayout, LabeledField};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(String),
}

/// Turns a laid-out document into file bytes.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, RenderError>;
}

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const LEFT: f32 = 15.0;
const RIGHT: f32 = 195.0;
const TOP: f32 = 282.0;

const FIRST_TABLE_TOP: f32 = 234.0;
const NEXT_TABLE_TOP: f32 = 270.0;
/// Lowest baseline a row or total line may use; the footer lives below.
const TABLE_BOTTOM: f32 = 24.0;
const FOOTER_Y: f32 = 12.0;

const HEADER_H: f32 = 9.0;
const ROW_H: f32 = 6.0;
const TOTAL_H: f32 = 6.0;

const TEXT_SIZE: f32 = 9.0;
const HEADER_SIZE: f32 = 7.5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PagePlan {
    pub rows: Range<usize>,
    pub totals: bool,
}

fn rows_per_page(table_top: f32) -> usize {
    ((table_top - HEADER_H - TABLE_BOTTOM) / ROW_H).floor() as usize + 1
}

fn totals_fit(y: f32, lines: usize) -> bool {
    y - TOTAL_H * lines as f32 >= TABLE_BOTTOM
}

/// Split `rows` table rows over pages. The totals block always follows the
/// last row, on a page of its own when it does not fit below it.
pub(crate) fn plan_pages(rows: usize, total_lines: usize) -> Vec<PagePlan> {
    let mut pages = Vec::new();
    let mut start = 0;
    let mut table_top = FIRST_TABLE_TOP;

    loop {
        let end = (start + rows_per_page(table_top)).min(rows);
        let y_after = table_top - HEADER_H - ROW_H * (end - start) as f32;

        if end == rows {
            if totals_fit(y_after, total_lines) {
                pages.push(PagePlan {
                    rows: start..end,
                    totals: true,
                });
            } else {
                pages.push(PagePlan {
                    rows: start..end,
                    totals: false,
                });
                pages.push(PagePlan {
                    rows: end..end,
                    totals: true,
                });
            }
            return pages;
        }

        pages.push(PagePlan {
            rows: start..end,
            totals: false,
        });
        start = end;
        table_top = NEXT_TABLE_TOP;
    }
}

/// Left edge of every column, by column count.
fn column_positions(count: usize) -> Vec<f32> {
    match count {
        5 => vec![LEFT, 95.0, 112.0, 145.0, 170.0],
        7 => vec![LEFT, 62.0, 76.0, 104.0, 124.0, 148.0, 170.0],
        n => {
            let width = (RIGHT - LEFT) / n.max(1) as f32;
            (0..n).map(|i| LEFT + width * i as f32).collect()
        }
    }
}

/// Builtin PDF fonts only cover WinAnsi, which lacks most Romanian letters.
pub fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ă' | 'â' => 'a',
            'Ă' | 'Â' => 'A',
            'î' => 'i',
            'Î' => 'I',
            'ș' | 'ş' => 's',
            'Ș' | 'Ş' => 'S',
            'ț' | 'ţ' => 't',
            'Ț' | 'Ţ' => 'T',
            '•' => '-',
            c if c.is_ascii() => c,
            _ => '?',
        })
        .collect()
}

/// Transliterate and cut `text` so it stays inside `width_mm`.
fn fit(text: &str, width_mm: f32, size: f32) -> String {
    let safe = pdf_safe(text);
    // Helvetica averages about half an em per glyph
    let max = ((width_mm / (size * 0.19)) as usize).max(4);
    if safe.chars().count() <= max {
        return safe;
    }
    let cut: String = safe.chars().take(max - 3).collect();
    format!("{}...", cut)
}

struct Canvas<'a> {
    layer: PdfLayerReference,
    font: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
}

impl Canvas<'_> {
    fn text(&self, text: &str, size: f32, x: f32, y: f32) {
        self.layer
            .use_text(pdf_safe(text), size, Mm(x), Mm(y), self.font);
    }

    fn bold_text(&self, text: &str, size: f32, x: f32, y: f32) {
        self.layer
            .use_text(pdf_safe(text), size, Mm(x), Mm(y), self.bold);
    }

    fn rule(&self, y: f32) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(LEFT), Mm(y)), false),
                (Point::new(Mm(RIGHT), Mm(y)), false),
            ],
            is_closed: false,
        });
    }
}

pub struct PdfRenderer {
    footer: String,
}

impl PdfRenderer {
    pub fn new(footer: impl Into<String>) -> Self {
        Self {
            footer: footer.into(),
        }
    }

    fn draw_heading(&self, canvas: &Canvas, layout: &DocumentLayout) {
        canvas.bold_text(&layout.title, 16.0, LEFT, TOP);
        canvas.text(&format!("Data: {}", layout.date), 10.0, 160.0, TOP);
        canvas.rule(TOP - 5.0);

        let y = TOP - 12.0;
        canvas.bold_text("Client", 11.0, LEFT, y);
        canvas.bold_text("Livrare și contact", 11.0, 110.0, y);
        draw_block(canvas, &layout.client_block, LEFT, y - 6.0);
        draw_block(canvas, &layout.delivery_block, 110.0, y - 6.0);
    }

    fn draw_continuation(&self, canvas: &Canvas, layout: &DocumentLayout) {
        canvas.bold_text(&format!("{} (continuare)", layout.title), 12.0, LEFT, TOP);
        canvas.text(&format!("Data: {}", layout.date), 10.0, 160.0, TOP);
        canvas.rule(TOP - 5.0);
    }

    fn draw_footer(&self, canvas: &Canvas, page: usize, pages: usize) {
        canvas.rule(FOOTER_Y + 5.0);
        canvas.text(&fit(&self.footer, 140.0, 8.0), 8.0, LEFT, FOOTER_Y);
        canvas.text(&format!("Pagina {} / {}", page, pages), 8.0, 175.0, FOOTER_Y);
    }
}

fn draw_block(canvas: &Canvas, fields: &[LabeledField], x: f32, top: f32) {
    for (i, field) in fields.iter().enumerate() {
        let line = format!("{}: {}", field.label, field.value);
        canvas.text(&fit(&line, 88.0, TEXT_SIZE), TEXT_SIZE, x, top - 5.0 * i as f32);
    }
}

/// Draws the column headers and returns the baseline of the first row.
fn draw_table_header(canvas: &Canvas, columns: &[String], xs: &[f32], top: f32) -> f32 {
    for (i, (title, x)) in columns.iter().zip(xs).enumerate() {
        let width = xs.get(i + 1).copied().unwrap_or(RIGHT) - x;
        canvas.bold_text(&fit(title, width, HEADER_SIZE), HEADER_SIZE, *x, top);
    }
    canvas.rule(top - 3.0);
    top - HEADER_H
}

fn draw_row(canvas: &Canvas, row: &[String], xs: &[f32], y: f32) {
    for (i, (cell, x)) in row.iter().zip(xs).enumerate() {
        let width = xs.get(i + 1).copied().unwrap_or(RIGHT) - x;
        canvas.text(&fit(cell, width, TEXT_SIZE), TEXT_SIZE, *x, y);
    }
}

fn draw_totals(canvas: &Canvas, lines: &[String], top: f32) {
    canvas.rule(top + ROW_H / 3.0);
    for (i, line) in lines.iter().enumerate() {
        let y = top - TOTAL_H * (i + 1) as f32 + ROW_H / 3.0;
        canvas.bold_text(&fit(line, RIGHT - 100.0, 10.0), 10.0, 100.0, y);
    }
}

fn pdf_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Pdf(e.to_string())
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, RenderError> {
        let plan = plan_pages(layout.rows.len(), layout.total_lines.len());
        let xs = column_positions(layout.columns.len());

        let (doc, first_page, first_layer) = PdfDocument::new(
            pdf_safe(&layout.title),
            Mm(PAGE_W),
            Mm(PAGE_H),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;

        for (index, page) in plan.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (p, l) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), format!("Layer {}", index + 1));
                doc.get_page(p).get_layer(l)
            };
            let canvas = Canvas {
                layer,
                font: &font,
                bold: &bold,
            };

            let mut y = if index == 0 {
                self.draw_heading(&canvas, layout);
                FIRST_TABLE_TOP
            } else {
                self.draw_continuation(&canvas, layout);
                NEXT_TABLE_TOP
            };

            if !page.rows.is_empty() {
                y = draw_table_header(&canvas, &layout.columns, &xs, y);
                for row in &layout.rows[page.rows.clone()] {
                    draw_row(&canvas, row, &xs, y);
                    y -= ROW_H;
                }
            }
            if page.totals {
                draw_totals(&canvas, &layout.total_lines, y);
            }
            self.draw_footer(&canvas, index + 1, plan.len());
        }

        tracing::debug!(
            "Rendered {} with {} rows on {} page(s)",
            layout.file_name,
            layout.rows.len(),
            plan.len()
        );

        let mut writer = BufWriter::new(Vec::<u8>::new());
        doc.save(&mut writer).map_err(pdf_err)?;
        writer.into_inner().map_err(pdf_err)
    }
}
