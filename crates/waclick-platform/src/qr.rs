use qrcode::render::unicode::Dense1x2;
use qrcode::{EcLevel, QrCode};
pub use waclick_core::domain::{QrErrorCorrection, QrOptions};

use crate::{PlatformError, Result};

fn ec_level(level: QrErrorCorrection) -> EcLevel {
    match level {
        QrErrorCorrection::L => EcLevel::L,
        QrErrorCorrection::M => EcLevel::M,
        QrErrorCorrection::Q => EcLevel::Q,
        QrErrorCorrection::H => EcLevel::H,
    }
}

/// Renders `data` with half-block characters, two modules per row, light
/// modules drawn as filled blocks so the code scans on dark terminals.
pub fn render_terminal(data: &str, options: &QrOptions) -> Result<String> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), ec_level(options.level))
        .map_err(|err| PlatformError::Qr(err.to_string()))?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(options.quiet_zone)
        .build())
}
