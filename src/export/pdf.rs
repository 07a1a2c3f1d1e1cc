//! Assembles the payslip PDF: header band, employee details, the two amount
//! tables, net-pay banner, and footer disclaimer.
//!
//! The built-in Helvetica fonts only cover WinAnsi, so the rupee sign is
//! written as `Rs.` in the document itself. Table geometry here is
//! presentation only; nothing downstream depends on it.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rect, Rgb,
};
use tracing::info;

use crate::errors::PayslipError;
use crate::ledger::LineItem;
use crate::payslip::Payslip;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const FOOTER_RESERVE: f32 = 25.0;
const AMOUNT_COLUMN_RIGHT: f32 = PAGE_WIDTH - MARGIN - 10.0;
const PT_TO_MM: f32 = 0.352_778;

fn primary() -> Color {
    Color::Rgb(Rgb::new(41.0 / 255.0, 128.0 / 255.0, 185.0 / 255.0, None))
}

fn secondary() -> Color {
    Color::Rgb(Rgb::new(149.0 / 255.0, 165.0 / 255.0, 166.0 / 255.0, None))
}

fn stripe() -> Color {
    Color::Rgb(Rgb::new(0.93, 0.94, 0.95, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Renders `payslip` into `<out_dir>/Payslip_<name>_<id>.pdf` and returns the
/// written path. Synchronous and blocking; the file is complete when this
/// returns.
pub fn export_pdf(payslip: &Payslip, out_dir: &Path) -> Result<PathBuf, PayslipError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("{} - Payslip", payslip.company_name),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    {
        let mut page = Page {
            doc: &doc,
            layer: doc.get_page(first_page).get_layer(first_layer),
            y: 0.0,
        };
        header_band(&mut page, payslip, &bold, &regular);
        employee_details(&mut page, payslip, &bold, &regular);
        amount_table(&mut page, "Earnings", &payslip.earnings, &bold, &regular);
        amount_table(&mut page, "Deductions", &payslip.deductions, &bold, &regular);
        net_pay_banner(&mut page, payslip, &bold, &regular);
        footer(&page, &regular);
    }

    let path = out_dir.join(payslip.export_file_name());
    let mut writer = BufWriter::new(File::create(&path)?);
    doc.save(&mut writer)?;
    info!(path = %path.display(), "exported payslip PDF");
    Ok(path)
}

/// Prefixes the document currency marker onto an amount, replacing the rupee
/// sign Helvetica cannot encode.
fn pdf_amount(amount: &str) -> String {
    let bare = amount.replace('₹', "");
    format!("Rs. {}", bare.trim())
}

/// Rough Helvetica advance width. Close enough to right-align and center
/// short strings; exact metrics are not worth carrying for this layout.
fn text_width(text: &str, font_size: f32) -> f32 {
    let units: f32 = text
        .chars()
        .map(|ch| match ch {
            'i' | 'l' | 'j' | 'f' | 't' | 'I' | '.' | ',' | ' ' | '\'' | ':' | '-' => 0.28,
            'm' | 'w' | 'M' | 'W' => 0.85,
            ch if ch.is_ascii_uppercase() => 0.70,
            ch if ch.is_ascii_digit() => 0.56,
            _ => 0.52,
        })
        .sum();
    units * font_size * PT_TO_MM
}

/// Tracks the write position as a distance from the top edge, adding pages
/// when a block would run into the footer reserve.
struct Page<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl Page<'_> {
    fn ensure_room(&mut self, needed: f32) {
        if self.y + needed <= PAGE_HEIGHT - FOOTER_RESERVE {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = MARGIN;
    }

    fn text(&self, text: &str, size: f32, x: f32, top: f32, color: Color, font: &IndirectFontRef) {
        self.layer.set_fill_color(color);
        self.layer
            .use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - top), font);
    }

    fn text_right(
        &self,
        text: &str,
        size: f32,
        right: f32,
        top: f32,
        color: Color,
        font: &IndirectFontRef,
    ) {
        let x = right - text_width(text, size);
        self.text(text, size, x, top, color, font);
    }

    fn text_centered(&self, text: &str, size: f32, top: f32, color: Color, font: &IndirectFontRef) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        self.text(text, size, x, top, color, font);
    }

    fn fill_rect(&self, x: f32, top: f32, width: f32, height: f32, color: Color) {
        self.layer.set_fill_color(color);
        let rect = Rect::new(
            Mm(x),
            Mm(PAGE_HEIGHT - top - height),
            Mm(x + width),
            Mm(PAGE_HEIGHT - top),
        )
        .with_mode(PaintMode::Fill);
        self.layer.add_rect(rect);
    }

    fn rule(&self, top: f32, color: Color) {
        self.layer.set_outline_color(color);
        self.layer.set_outline_thickness(0.4);
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(PAGE_HEIGHT - top)), false),
                (
                    Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(PAGE_HEIGHT - top)),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }
}

fn header_band(
    page: &mut Page<'_>,
    payslip: &Payslip,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
) {
    page.fill_rect(0.0, 0.0, PAGE_WIDTH, 40.0, primary());
    page.text(
        &format!("{} - Payslip", payslip.company_name),
        22.0,
        MARGIN,
        25.0,
        white(),
        bold,
    );
    page.text(
        &format!(
            "Pay Period: {} to {}",
            payslip.pay_period_from, payslip.pay_period_to
        ),
        12.0,
        MARGIN,
        35.0,
        white(),
        regular,
    );
    page.y = 55.0;
}

fn employee_details(
    page: &mut Page<'_>,
    payslip: &Payslip,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
) {
    section_title(page, "Employee Details", bold);

    let rows = [
        ("Employee Name", payslip.employee_name.as_str()),
        ("Employee ID", payslip.employee_id.as_str()),
        ("Designation", payslip.designation.as_str()),
        ("Department", payslip.department.as_str()),
        ("Working Days", payslip.working_days_paid_for.as_str()),
        ("LOPs", payslip.no_of_lops.as_str()),
    ];
    // Two label/value pairs per printed row.
    for pair in rows.chunks(2) {
        page.ensure_room(6.0);
        let top = page.y;
        page.text(pair[0].0, 10.0, MARGIN, top, black(), bold);
        page.text(pair[0].1, 10.0, MARGIN + 40.0, top, black(), regular);
        if let Some((label, value)) = pair.get(1) {
            page.text(label, 10.0, MARGIN + 100.0, top, black(), bold);
            page.text(value, 10.0, MARGIN + 140.0, top, black(), regular);
        }
        page.y += 6.0;
    }
    page.y += 6.0;
}

fn section_title(page: &mut Page<'_>, title: &str, bold: &IndirectFontRef) {
    page.ensure_room(14.0);
    page.text(title, 12.0, MARGIN, page.y, black(), bold);
    page.rule(page.y + 2.0, secondary());
    page.y += 9.0;
}

fn amount_table(
    page: &mut Page<'_>,
    title: &str,
    items: &[LineItem],
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
) {
    section_title(page, title, bold);

    page.ensure_room(8.0);
    page.fill_rect(MARGIN, page.y - 5.5, PAGE_WIDTH - 2.0 * MARGIN, 8.0, primary());
    page.text("Description", 10.0, MARGIN + 2.0, page.y, white(), bold);
    page.text_right(
        "Amount",
        10.0,
        AMOUNT_COLUMN_RIGHT,
        page.y,
        white(),
        bold,
    );
    page.y += 8.0;

    for (idx, item) in items.iter().enumerate() {
        page.ensure_room(7.0);
        if idx % 2 == 1 {
            page.fill_rect(MARGIN, page.y - 5.0, PAGE_WIDTH - 2.0 * MARGIN, 7.0, stripe());
        }
        page.text(&item.name, 10.0, MARGIN + 2.0, page.y, black(), regular);
        page.text_right(
            &pdf_amount(&item.amount),
            10.0,
            AMOUNT_COLUMN_RIGHT,
            page.y,
            black(),
            regular,
        );
        page.y += 7.0;
    }
    page.y += 8.0;
}

fn net_pay_banner(
    page: &mut Page<'_>,
    payslip: &Payslip,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
) {
    page.ensure_room(25.0);
    page.fill_rect(MARGIN, page.y, PAGE_WIDTH - 2.0 * MARGIN, 22.0, stripe());
    page.text("Net Pay:", 14.0, MARGIN + 5.0, page.y + 10.0, black(), bold);
    page.text_right(
        &pdf_amount(&payslip.net_pay),
        16.0,
        PAGE_WIDTH - MARGIN - 5.0,
        page.y + 10.0,
        black(),
        bold,
    );
    page.text(
        &format!("Payment Method: {}", payslip.payment_method),
        10.0,
        MARGIN + 5.0,
        page.y + 17.0,
        black(),
        regular,
    );
    page.y += 25.0;
}

fn footer(page: &Page<'_>, regular: &IndirectFontRef) {
    page.text_centered(
        "This is a computer-generated payslip and does not require a signature.",
        8.0,
        PAGE_HEIGHT - 10.0,
        black(),
        regular,
    );
}
