//! QR Code - locally rendered SVG for a card link.
//!
//! The generator page uses the remote image endpoint; share dialogs and
//! the public card only need a small code and render it here.

use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

/// Render `data` as an SVG string. The width/height attributes are dropped
/// so CSS controls the displayed size through the viewBox.
pub fn render_svg(data: &str, size: u32, dark: &str) -> Option<String> {
    match QrCode::new(data.as_bytes()) {
        Ok(code) => {
            let svg_string = code
                .render()
                .min_dimensions(size, size)
                .dark_color(svg::Color(dark))
                .light_color(svg::Color("#ffffff"))
                .build();
            Some(strip_dimensions(&svg_string))
        }
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            None
        }
    }
}

fn strip_dimensions(svg: &str) -> String {
    let Some(start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let Some(end) = svg[start..].find('>').map(|i| start + i) else {
        return svg.to_string();
    };
    let tag: String = svg[start..end]
        .split(' ')
        .filter(|attr| !attr.starts_with("width=") && !attr.starts_with("height="))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}{}{}", &svg[..start], tag, &svg[end..])
}

#[component]
pub fn QrCodeView(
    data: String,
    #[props(default = 200)] size: u32,
    /// Module color.
    #[props(default = "#000000".to_string())]
    color: String,
) -> Element {
    let svg = render_svg(&data, size, &color);

    rsx! {
        if let Some(svg) = svg {
            div { class: "qr-code", dangerous_inner_html: "{svg}" }
        } else {
            div { class: "qr-error", "\u{26A0}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_svg_has_viewbox_without_fixed_size() {
        let svg = render_svg("https://bizcard.app/card/lina", 120, "#5D87FF").unwrap();
        let open_tag = &svg[svg.find("<svg").unwrap()..];
        let open_tag = &open_tag[..open_tag.find('>').unwrap()];
        assert!(open_tag.contains("viewBox"));
        assert!(!open_tag.contains(" width="));
        assert!(svg.contains("#5D87FF"));
    }

    #[test]
    fn test_strip_dimensions_leaves_other_markup() {
        let input = r#"<?xml version="1.0"?><svg width="10" height="10" viewBox="0 0 10 10"><rect/></svg>"#;
        assert_eq!(
            strip_dimensions(input),
            r#"<?xml version="1.0"?><svg viewBox="0 0 10 10"><rect/></svg>"#
        );
    }
}
