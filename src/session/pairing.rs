//! Pairing code rendering
//!
//! When no stored credentials exist the transport emits a one-time pairing
//! code; the operator scans it from the terminal to authenticate the new
//! session.

use log::warn;
use qrcode::QrCode;
use qrcode::render::unicode;

/// Renders the pairing code as a scannable QR block on stdout.
pub fn render_pairing_code(code: &str) {
    match QrCode::new(code.as_bytes()) {
        Ok(qr) => {
            let art = qr
                .render::<unicode::Dense1x2>()
                .quiet_zone(true)
                .build();
            println!("Scan this pairing code to link the session:\n{}", art);
        }
        Err(e) => {
            // Still give the operator something to work with.
            warn!("Could not render pairing code as QR: {}", e);
            println!("Pairing code: {}", code);
        }
    }
}
