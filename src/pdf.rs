use image::GrayImage;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::compose::ComposedLabel;
use crate::error::Error;
use crate::geometry::{LabelCell, LayoutPlan, SheetGeometry};

const CAPTION_FONT_SIZE: f32 = 12.0;

/// Placement cursor for one document run: which cell the last label went
/// into and how many pages have been started. Fresh per run.
struct PageState {
    plan_len: usize,
    next_pos: usize,
    page_number: usize,
}

impl PageState {
    fn new(plan_len: usize) -> Self {
        // start past the last position so the first placement opens a page
        Self {
            plan_len,
            next_pos: plan_len,
            page_number: 0,
        }
    }

    /// Move to the cell for the next placement. Returns the cell index and
    /// whether a filled page must be flushed before drawing; the flush is
    /// suppressed while no page has been started yet.
    fn advance(&mut self) -> (usize, bool) {
        if self.next_pos + 1 >= self.plan_len {
            let flush = self.page_number > 0;
            self.page_number += 1;
            self.next_pos = 0;
            (self.next_pos, flush)
        } else {
            self.next_pos += 1;
            (self.next_pos, false)
        }
    }
}

/// Compose the document: walk the composed labels, place each into the
/// next grid cell, and start a new page whenever the current one fills.
pub fn render<I>(geometry: &SheetGeometry, plan: &LayoutPlan, labels: I) -> Result<Vec<u8>, Error>
where
    I: IntoIterator<Item = Result<ComposedLabel, Error>>,
{
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    let font_id = alloc();
    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    // Phase 1: place labels, embedding each code raster as it arrives
    let mut state = PageState::new(plan.cells.len());
    let mut all_contents: Vec<Content> = Vec::new();
    let mut current_content = Content::new();
    let mut image_xobjects: Vec<(String, Ref)> = Vec::new();

    for composed in labels {
        let composed = composed?;

        let xobj_id = alloc();
        let pdf_name = format!("Im{}", image_xobjects.len() + 1);
        embed_code_image(&mut pdf, xobj_id, &composed.image);
        image_xobjects.push((pdf_name.clone(), xobj_id));

        let (pos, flush) = state.advance();
        if flush {
            all_contents.push(std::mem::replace(&mut current_content, Content::new()));
        }
        let cell = &plan.cells[pos];
        draw_bounding_box(&mut current_content, cell);
        place_label(
            &mut current_content,
            geometry,
            cell,
            &pdf_name,
            &composed.caption,
        );
    }

    // flush the last page unconditionally
    all_contents.push(current_content);

    // Phase 2: assemble the page tree
    let n = all_contents.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, c) in all_contents.into_iter().enumerate() {
        pdf.stream(content_ids[i], &c.finish());
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(
            0.0,
            0.0,
            geometry.page_size.x as f32,
            geometry.page_size.y as f32,
        ))
        .parent(pages_id)
        .contents(content_ids[i]);
        {
            let mut resources = page.resources();
            resources.fonts().pair(Name(b"F1"), font_id);
            if !image_xobjects.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, xobj_id) in &image_xobjects {
                    xobjects.pair(Name(name.as_bytes()), *xobj_id);
                }
            }
        }
    }

    Ok(pdf.finish())
}

/// Embed one QR raster as a DeviceGray image XObject.
fn embed_code_image(pdf: &mut Pdf, id: Ref, image: &GrayImage) {
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(image.as_raw(), 6);
    let mut xobj = pdf.image_xobject(id, &compressed);
    xobj.filter(Filter::FlateDecode);
    xobj.width(image.width() as i32);
    xobj.height(image.height() as i32);
    xobj.color_space().device_gray();
    xobj.bits_per_component(8);
}

/// Draw the four edges of a cell's bounding rectangle.
fn draw_bounding_box(content: &mut Content, cell: &LabelCell) {
    content
        .move_to(cell.upper_left.x as f32, cell.upper_left.y as f32)
        .line_to(cell.upper_right.x as f32, cell.upper_right.y as f32)
        .line_to(cell.lower_right.x as f32, cell.lower_right.y as f32)
        .line_to(cell.lower_left.x as f32, cell.lower_left.y as f32)
        .line_to(cell.upper_left.x as f32, cell.upper_left.y as f32)
        .stroke();
}

/// Place one code image and its caption into a cell. The image is scaled
/// to the label size; the caption sits centered above it.
fn place_label(
    content: &mut Content,
    geometry: &SheetGeometry,
    cell: &LabelCell,
    image_name: &str,
    caption: &str,
) {
    content.save_state();
    content.transform([
        geometry.label_size.x as f32,
        0.0,
        0.0,
        geometry.label_size.y as f32,
        cell.image_start.x as f32,
        cell.image_start.y as f32,
    ]);
    content.x_object(Name(image_name.as_bytes()));
    content.restore_state();

    let center_x = (cell.title_start.x + geometry.title_adjustment.x) as f32;
    let baseline_y = (cell.title_start.y + geometry.title_adjustment.y) as f32;
    let width = text_width(caption, CAPTION_FONT_SIZE);
    content
        .begin_text()
        .set_font(Name(b"F1"), CAPTION_FONT_SIZE)
        .next_line(center_x - width / 2.0, baseline_y)
        .show(Str(caption.as_bytes()))
        .end_text();
}

/// Approximate Helvetica-Bold widths at 1000 units/em for WinAnsi chars.
fn helvetica_bold_width(byte: u8) -> f32 {
    match byte {
        32 => 278.0,                          // space
        33..=47 => 333.0,                     // punctuation
        48..=57 => 556.0,                     // digits
        58..=64 => 333.0,                     // more punctuation
        73 => 278.0,                          // I (narrow)
        77 | 87 => 944.0,                     // M W (wide)
        65..=90 => 722.0,                     // uppercase A-Z (average)
        91..=96 => 333.0,                     // brackets etc.
        102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
        109 | 119 => 889.0,                   // m w (wide)
        97..=122 => 556.0,                    // lowercase a-z (average)
        _ => 556.0,
    }
}

fn text_width(text: &str, font_size: f32) -> f32 {
    text.bytes()
        .map(|b| helvetica_bold_width(b) * font_size / 1000.0)
        .sum()
}
