use image::{GrayImage, Luma};
use qrcode::QrCode;
use qrcode::render::svg;

use crate::allocate::BoxNumber;
use crate::error::Error;

/// Pixels per QR module in the rendered raster.
const MODULE_PIXELS: u32 = 5;

/// One label ready for placement: the rendered code and its caption.
pub struct ComposedLabel {
    pub image: GrayImage,
    pub caption: String,
}

/// Strip surrounding quote characters from a prefix argument, as handed
/// over by a shell or settings layer.
pub fn strip_quotes(prefix: &str) -> &str {
    prefix.trim_matches(|c| c == '\'' || c == '"')
}

/// The payload encoded into a box code: url prefix plus the zero padded
/// numeric id.
pub fn target_string(url_prefix: &str, number: u32) -> String {
    format!("{url_prefix}{number:05}")
}

/// Render the QR code for one allocated box number.
///
/// The caption and the encoded target always carry the same numeric id.
pub fn compose(number: BoxNumber, url_prefix: &str) -> Result<ComposedLabel, Error> {
    let target = target_string(url_prefix, number.number);
    log::debug!("Encoding {target} for {}", number.label);
    let code = QrCode::new(target.as_bytes()).map_err(|e| Error::Qr(e.to_string()))?;
    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .build();
    Ok(ComposedLabel {
        image,
        caption: number.label,
    })
}

/// Render a QR symbol as an SVG string for inline embedding.
///
/// The XML declaration is dropped unless the caller asks for a standalone
/// document.
pub fn qr_svg(data: &str, include_xml_declaration: bool) -> Result<String, Error> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| Error::Qr(e.to_string()))?;
    let rendered = code.render::<svg::Color>().build();
    if include_xml_declaration {
        return Ok(rendered);
    }
    match rendered.find("?>") {
        Some(end) => Ok(rendered[end + 2..].trim_start().to_string()),
        None => Ok(rendered),
    }
}
