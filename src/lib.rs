mod allocate;
mod compose;
mod error;
mod geometry;
mod pdf;

pub use allocate::{BoxNumber, BoxNumberAllocator, LABEL_PREFIX, format_label};
pub use compose::{ComposedLabel, compose, qr_svg, strip_quotes, target_string};
pub use error::Error;
pub use geometry::{LabelCell, LayoutPlan, Point, SheetGeometry};

use std::path::Path;
use std::time::Instant;

/// Render a sheet of QR box labels and return the PDF bytes.
///
/// Unused box numbers are allocated upward from `start`, skipping any the
/// `exists` lookup reports as taken, until `count` labels are placed.
pub fn render_label_sheet<F>(
    url_prefix: &str,
    start: u32,
    count: usize,
    exists: F,
) -> Result<Vec<u8>, Error>
where
    F: FnMut(&str) -> bool,
{
    let prefix = strip_quotes(url_prefix);
    let geometry = SheetGeometry::letter();
    let plan = geometry.compute_layout();
    let labels = BoxNumberAllocator::new(start, count, exists)?
        .map(|number| number.and_then(|n| compose(n, prefix)));
    pdf::render(&geometry, &plan, labels)
}

/// Generate a sheet of QR box labels into a new file at `output`.
///
/// Refuses to overwrite an existing file. The document is rendered
/// entirely in memory and written in one shot, so a failed run leaves
/// no file behind.
pub fn generate_label_sheet<F>(
    url_prefix: &str,
    start: u32,
    count: usize,
    output: &Path,
    exists: F,
) -> Result<(), Error>
where
    F: FnMut(&str) -> bool,
{
    let t0 = Instant::now();

    allocate::check_range(start, count)?;
    if output.exists() {
        return Err(Error::AlreadyExists(output.to_path_buf()));
    }
    log::debug!(
        "Parameters validated: pfx: {url_prefix}, start: {start}, count: {count}, file: {}",
        output.display()
    );

    let bytes = render_label_sheet(url_prefix, start, count, exists)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
