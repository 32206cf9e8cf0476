//! QR code generator: payload templates and image options.

mod payload;
mod render;

pub use payload::{QrContent, QrField, QrForm, QrKind, WifiSecurity};
pub use render::{
    default_file_name, download_png, download_target, snap_size, ErrorCorrection, QrOptions,
    MARGIN_MAX, SIZE_RANGE, SIZE_STEP,
};
