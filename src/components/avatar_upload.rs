//! Avatar Upload Component
//!
//! File picker with a centered square crop. The result is kept inline as
//! a PNG data URI on the draft.

use base64::Engine as _;
use bizcard_core::card::AvatarImage;
use dioxus::prelude::*;
use image::{DynamicImage, GenericImageView, ImageFormat};
use rfd::FileDialog;

use crate::context::use_translator;

/// Edge length of the stored avatar.
pub const AVATAR_SIZE: u32 = 256;

/// Crop the largest centered square and scale it to `AVATAR_SIZE`.
fn crop_to_square(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    let side = width.min(height);
    let x = (width - side) / 2;
    let y = (height - side) / 2;
    img.crop_imm(x, y, side, side)
        .resize_exact(AVATAR_SIZE, AVATAR_SIZE, image::imageops::FilterType::Lanczos3)
}

fn encode_data_uri(img: &DynamicImage) -> Result<String, image::ImageError> {
    let mut buffer = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&buffer)
    ))
}

fn load_avatar(path: &std::path::Path) -> Result<AvatarImage, image::ImageError> {
    let img = image::open(path)?;
    let data_uri = encode_data_uri(&crop_to_square(img))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar.png".to_string());
    Ok(AvatarImage { file_name, data_uri })
}

#[component]
pub fn AvatarUpload(
    current: Option<AvatarImage>,
    /// Shown when there is no picture.
    initials: String,
    on_change: EventHandler<Option<AvatarImage>>,
) -> Element {
    let t = use_translator();
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let failed_msg = t.t("basicInfo.avatarError");

    let pick = move |_| {
        loading.set(true);
        error.set(None);
        let failed_msg = failed_msg.clone();

        spawn(async move {
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .pick_file()
                    .map(|path| (path.clone(), load_avatar(&path)))
            })
            .await;

            match picked {
                Ok(Some((_, Ok(avatar)))) => {
                    tracing::debug!(file = %avatar.file_name, "Avatar loaded");
                    on_change.call(Some(avatar));
                }
                Ok(Some((path, Err(e)))) => {
                    tracing::warn!(path = %path.display(), "Failed to load avatar: {}", e);
                    error.set(Some(failed_msg));
                }
                // Cancelled
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("File picker task failed: {:?}", e);
                    error.set(Some(failed_msg));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "avatar-upload",
            div { class: "avatar avatar-lg",
                if let Some(avatar) = current.as_ref() {
                    img { src: "{avatar.data_uri}", alt: "{avatar.file_name}" }
                } else {
                    "{initials}"
                }
            }
            div { class: "avatar-upload-actions",
                button {
                    class: "btn btn-outlined",
                    r#type: "button",
                    disabled: loading(),
                    onclick: pick,
                    if loading() {
                        {t.t("common.loading")}
                    } else {
                        {t.t("basicInfo.uploadPhoto")}
                    }
                }
                if current.is_some() {
                    button {
                        class: "btn btn-text",
                        r#type: "button",
                        onclick: move |_| on_change.call(None),
                        {t.t("basicInfo.removePhoto")}
                    }
                }
                if let Some(err) = error() {
                    p { class: "field-message error", "{err}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_to_square_is_centered_and_resized() {
        let img = DynamicImage::new_rgb8(400, 200);
        let cropped = crop_to_square(img);
        assert_eq!(cropped.dimensions(), (AVATAR_SIZE, AVATAR_SIZE));
    }

    #[test]
    fn test_data_uri_prefix() {
        let img = DynamicImage::new_rgb8(4, 4);
        let uri = encode_data_uri(&img).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_load_avatar_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.png");
        DynamicImage::new_rgb8(300, 500).save(&path).unwrap();

        let avatar = load_avatar(&path).unwrap();
        assert_eq!(avatar.file_name, "me.png");
        assert!(avatar.data_uri.len() > "data:image/png;base64,".len());
    }
}
