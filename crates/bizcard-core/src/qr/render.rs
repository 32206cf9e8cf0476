//! Rendering options and the image-service request.
//!
//! QR images are produced by an external HTTP endpoint. This module
//! builds the request URL and downloads the resulting PNG.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::{CardError, CardResult};

pub const SIZE_RANGE: (u32, u32) = (200, 800);
pub const SIZE_STEP: u32 = 50;
pub const MARGIN_MAX: u32 = 20;

const DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub fn all() -> &'static [ErrorCorrection] {
        &[
            ErrorCorrection::L,
            ErrorCorrection::M,
            ErrorCorrection::Q,
            ErrorCorrection::H,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "qr.ecc.low",
            ErrorCorrection::M => "qr.ecc.medium",
            ErrorCorrection::Q => "qr.ecc.quartile",
            ErrorCorrection::H => "qr.ecc.high",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCorrection {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorCorrection::L),
            "M" => Ok(ErrorCorrection::M),
            "Q" => Ok(ErrorCorrection::Q),
            "H" => Ok(ErrorCorrection::H),
            other => Err(CardError::InvalidQrInput(format!("unknown error correction '{other}'"))),
        }
    }
}

/// Image options for the QR generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QrOptions {
    pub size: u32,
    pub error_correction: ErrorCorrection,
    pub foreground: String,
    pub background: String,
    pub margin: u32,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 300,
            error_correction: ErrorCorrection::M,
            foreground: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
            margin: 4,
        }
    }
}

/// Snap a size to the slider grid.
pub fn snap_size(size: u32) -> u32 {
    let clamped = size.clamp(SIZE_RANGE.0, SIZE_RANGE.1);
    let offset = clamped - SIZE_RANGE.0;
    SIZE_RANGE.0 + (offset + SIZE_STEP / 2) / SIZE_STEP * SIZE_STEP
}

fn strip_hash(color: &str) -> &str {
    color.trim().trim_start_matches('#')
}

impl QrOptions {
    pub fn set_size(&mut self, size: u32) {
        self.size = snap_size(size);
    }

    pub fn set_margin(&mut self, margin: u32) {
        self.margin = margin.min(MARGIN_MAX);
    }

    /// Request URL for `payload` on the image endpoint.
    pub fn render_url(&self, endpoint: &str, payload: &str) -> String {
        format!(
            "{endpoint}?size={s}x{s}&data={data}&color={fg}&bgcolor={bg}&margin={m}&ecc={ecc}",
            s = self.size,
            data = urlencoding::encode(payload),
            fg = strip_hash(&self.foreground),
            bg = strip_hash(&self.background),
            m = self.margin,
            ecc = self.error_correction,
        )
    }
}

/// `qr-code-<millis>.png`
pub fn default_file_name() -> String {
    format!("qr-code-{}.png", chrono::Utc::now().timestamp_millis())
}

/// Resolve the save target: a directory gets the default file name.
pub fn download_target(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(default_file_name())
    } else {
        path.to_path_buf()
    }
}

/// Fetch the rendered PNG and write it to `path`. Returns the written path.
pub async fn download_png(url: &str, path: &Path, cancel: &CancellationToken) -> CardResult<PathBuf> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build()
        .map_err(|e| CardError::Network(e.to_string()))?;

    let fetch = async {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| CardError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(CardError::Network(format!(
                "HTTP {} {}",
                response.status(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }
        response
            .bytes()
            .await
            .map_err(|e| CardError::Network(e.to_string()))
    };

    let bytes = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(CardError::Cancelled),
        result = fetch => result?,
    };

    let target = download_target(path);
    tokio::fs::write(&target, &bytes).await?;
    tracing::info!(path = %target.display(), bytes = bytes.len(), "QR image saved");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

    #[test]
    fn test_render_url_defaults() {
        let url = QrOptions::default().render_url(ENDPOINT, "https://a.b/c d");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=https%3A%2F%2Fa.b%2Fc%20d&color=000000&bgcolor=FFFFFF&margin=4&ecc=M"
        );
    }

    #[test]
    fn test_render_url_custom() {
        let opts = QrOptions {
            size: 500,
            error_correction: ErrorCorrection::H,
            foreground: "#112233".into(),
            background: "#abcdef".into(),
            margin: 0,
        };
        let url = opts.render_url(ENDPOINT, "x");
        assert!(url.contains("size=500x500"));
        assert!(url.ends_with("color=112233&bgcolor=abcdef&margin=0&ecc=H"));
    }

    #[test]
    fn test_size_and_margin_bounds() {
        let mut opts = QrOptions::default();
        opts.set_size(1000);
        assert_eq!(opts.size, 800);
        opts.set_size(10);
        assert_eq!(opts.size, 200);
        opts.set_size(337);
        assert_eq!(opts.size, 350);
        opts.set_margin(99);
        assert_eq!(opts.margin, 20);
    }

    #[test]
    fn test_default_file_name() {
        let name = default_file_name();
        assert!(name.starts_with("qr-code-") && name.ends_with(".png"));
    }

    #[test]
    fn test_download_target_for_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = download_target(dir.path());
        assert_eq!(target.parent(), Some(dir.path()));
        let file = dir.path().join("mine.png");
        assert_eq!(download_target(&file), file);
    }

    #[tokio::test]
    async fn test_download_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let err = download_png("http://127.0.0.1:9/none.png", dir.path(), &token)
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::Cancelled));
    }
}
