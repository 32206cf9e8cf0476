//! QR payload strings for each content type.
//!
//! Field values are interpolated verbatim. Percent-encoding of the whole
//! payload happens later, when the image URL is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Wi-Fi authentication scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WifiSecurity {
    #[default]
    Wpa,
    Wep,
    NoPass,
}

impl WifiSecurity {
    pub fn all() -> &'static [WifiSecurity] {
        &[WifiSecurity::Wpa, WifiSecurity::Wep, WifiSecurity::NoPass]
    }

    /// Tag used inside the `WIFI:` payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::NoPass => "nopass",
        }
    }
}

impl FromStr for WifiSecurity {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wpa" | "wpa2" => Ok(WifiSecurity::Wpa),
            "wep" => Ok(WifiSecurity::Wep),
            "nopass" | "none" | "open" => Ok(WifiSecurity::NoPass),
            other => Err(CardError::InvalidQrInput(format!("unknown wifi security '{other}'"))),
        }
    }
}

/// Selectable QR content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrKind {
    #[default]
    Url,
    Text,
    Email,
    Phone,
    Sms,
    Wifi,
    Location,
}

impl QrKind {
    pub fn all() -> &'static [QrKind] {
        &[
            QrKind::Url,
            QrKind::Text,
            QrKind::Email,
            QrKind::Phone,
            QrKind::Sms,
            QrKind::Wifi,
            QrKind::Location,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QrKind::Url => "url",
            QrKind::Text => "text",
            QrKind::Email => "email",
            QrKind::Phone => "phone",
            QrKind::Sms => "sms",
            QrKind::Wifi => "wifi",
            QrKind::Location => "location",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            QrKind::Url => "qr.types.url",
            QrKind::Text => "qr.types.text",
            QrKind::Email => "qr.types.email",
            QrKind::Phone => "qr.types.phone",
            QrKind::Sms => "qr.types.sms",
            QrKind::Wifi => "qr.types.wifi",
            QrKind::Location => "qr.types.location",
        }
    }

    /// Example input shown in the first field.
    pub fn placeholder(&self) -> &'static str {
        match self {
            QrKind::Url => "https://example.com",
            QrKind::Text => "",
            QrKind::Email => "example@domain.com",
            QrKind::Phone | QrKind::Sms => "+966501234567",
            QrKind::Wifi => "WiFi Network",
            QrKind::Location => "24.7136, 46.6753",
        }
    }

    /// Form fields that apply to this type.
    pub fn fields(&self) -> &'static [QrField] {
        match self {
            QrKind::Url => &[QrField::Url],
            QrKind::Text => &[QrField::Text],
            QrKind::Email => &[QrField::Email, QrField::Subject, QrField::Body],
            QrKind::Phone => &[QrField::Phone],
            QrKind::Sms => &[QrField::Phone, QrField::Message],
            QrKind::Wifi => &[QrField::Ssid, QrField::Password, QrField::Security],
            QrKind::Location => &[QrField::Latitude, QrField::Longitude],
        }
    }
}

impl fmt::Display for QrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QrKind {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QrKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| CardError::InvalidQrInput(format!("unknown QR type '{s}'")))
    }
}

/// One input on the QR form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QrField {
    Url,
    Text,
    Email,
    Subject,
    Body,
    Phone,
    Message,
    Ssid,
    Password,
    Security,
    Latitude,
    Longitude,
}

impl QrField {
    pub fn label_key(&self) -> &'static str {
        match self {
            QrField::Url => "qr.fields.url",
            QrField::Text => "qr.fields.text",
            QrField::Email => "qr.fields.email",
            QrField::Subject => "qr.fields.subject",
            QrField::Body => "qr.fields.body",
            QrField::Phone => "qr.fields.phone",
            QrField::Message => "qr.fields.message",
            QrField::Ssid => "qr.fields.ssid",
            QrField::Password => "qr.fields.password",
            QrField::Security => "qr.fields.security",
            QrField::Latitude => "qr.fields.latitude",
            QrField::Longitude => "qr.fields.longitude",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, QrField::Text | QrField::Body | QrField::Message)
    }
}

/// Content to encode, one variant per type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrContent {
    Url { url: String },
    Text { text: String },
    Email { email: String, subject: String, body: String },
    Phone { phone: String },
    Sms { phone: String, message: String },
    Wifi { ssid: String, password: String, security: WifiSecurity },
    Location { latitude: String, longitude: String },
}

impl QrContent {
    pub fn kind(&self) -> QrKind {
        match self {
            QrContent::Url { .. } => QrKind::Url,
            QrContent::Text { .. } => QrKind::Text,
            QrContent::Email { .. } => QrKind::Email,
            QrContent::Phone { .. } => QrKind::Phone,
            QrContent::Sms { .. } => QrKind::Sms,
            QrContent::Wifi { .. } => QrKind::Wifi,
            QrContent::Location { .. } => QrKind::Location,
        }
    }

    /// The string encoded into the QR image.
    pub fn payload(&self) -> String {
        match self {
            QrContent::Url { url } => url.clone(),
            QrContent::Text { text } => text.clone(),
            QrContent::Email { email, subject, body } => {
                format!("mailto:{email}?subject={subject}&body={body}")
            }
            QrContent::Phone { phone } => format!("tel:{phone}"),
            QrContent::Sms { phone, message } => format!("sms:{phone}?body={message}"),
            QrContent::Wifi { ssid, password, security } => {
                format!("WIFI:T:{};S:{ssid};P:{password};;", security.as_str())
            }
            QrContent::Location { latitude, longitude } => format!("geo:{latitude},{longitude}"),
        }
    }
}

impl fmt::Display for QrContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload())
    }
}

/// Form state of the QR generator. Values for every type are kept, so
/// switching types does not lose input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrForm {
    pub kind: QrKind,
    pub url: String,
    pub text: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub phone: String,
    pub message: String,
    pub ssid: String,
    pub password: String,
    pub security: WifiSecurity,
    pub latitude: String,
    pub longitude: String,
}

impl QrForm {
    pub fn new(kind: QrKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn value(&self, field: QrField) -> &str {
        match field {
            QrField::Url => &self.url,
            QrField::Text => &self.text,
            QrField::Email => &self.email,
            QrField::Subject => &self.subject,
            QrField::Body => &self.body,
            QrField::Phone => &self.phone,
            QrField::Message => &self.message,
            QrField::Ssid => &self.ssid,
            QrField::Password => &self.password,
            QrField::Security => self.security.as_str(),
            QrField::Latitude => &self.latitude,
            QrField::Longitude => &self.longitude,
        }
    }

    /// Set a field from text input.
    pub fn set(&mut self, field: QrField, value: impl Into<String>) -> Result<(), CardError> {
        let value = value.into();
        match field {
            QrField::Url => self.url = value,
            QrField::Text => self.text = value,
            QrField::Email => self.email = value,
            QrField::Subject => self.subject = value,
            QrField::Body => self.body = value,
            QrField::Phone => self.phone = value,
            QrField::Message => self.message = value,
            QrField::Ssid => self.ssid = value,
            QrField::Password => self.password = value,
            QrField::Security => self.security = value.parse()?,
            QrField::Latitude => self.latitude = value,
            QrField::Longitude => self.longitude = value,
        }
        Ok(())
    }

    /// Content for the selected type.
    pub fn content(&self) -> QrContent {
        match self.kind {
            QrKind::Url => QrContent::Url { url: self.url.clone() },
            QrKind::Text => QrContent::Text { text: self.text.clone() },
            QrKind::Email => QrContent::Email {
                email: self.email.clone(),
                subject: self.subject.clone(),
                body: self.body.clone(),
            },
            QrKind::Phone => QrContent::Phone { phone: self.phone.clone() },
            QrKind::Sms => QrContent::Sms {
                phone: self.phone.clone(),
                message: self.message.clone(),
            },
            QrKind::Wifi => QrContent::Wifi {
                ssid: self.ssid.clone(),
                password: self.password.clone(),
                security: self.security,
            },
            QrKind::Location => QrContent::Location {
                latitude: self.latitude.clone(),
                longitude: self.longitude.clone(),
            },
        }
    }

    pub fn payload(&self) -> String {
        self.content().payload()
    }

    /// Payload to render, or `None` when it is blank.
    pub fn renderable_payload(&self) -> Option<String> {
        let payload = self.payload();
        (!payload.trim().is_empty()).then_some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        let cases = [
            (QrContent::Url { url: "https://a.b".into() }, "https://a.b"),
            (QrContent::Text { text: "hi there".into() }, "hi there"),
            (
                QrContent::Email {
                    email: "a@b.co".into(),
                    subject: "Hi".into(),
                    body: "Yo".into(),
                },
                "mailto:a@b.co?subject=Hi&body=Yo",
            ),
            (QrContent::Phone { phone: "+1234567890".into() }, "tel:+1234567890"),
            (
                QrContent::Sms {
                    phone: "+1".into(),
                    message: "ok".into(),
                },
                "sms:+1?body=ok",
            ),
            (
                QrContent::Wifi {
                    ssid: "Home".into(),
                    password: "secret".into(),
                    security: WifiSecurity::Wpa,
                },
                "WIFI:T:WPA;S:Home;P:secret;;",
            ),
            (
                QrContent::Location {
                    latitude: "24.7136".into(),
                    longitude: "46.6753".into(),
                },
                "geo:24.7136,46.6753",
            ),
        ];
        for (content, expected) in cases {
            assert_eq!(content.payload(), expected);
        }
    }

    #[test]
    fn test_nopass_tag() {
        let content = QrContent::Wifi {
            ssid: "Cafe".into(),
            password: String::new(),
            security: WifiSecurity::NoPass,
        };
        assert_eq!(content.payload(), "WIFI:T:nopass;S:Cafe;P:;;");
    }

    #[test]
    fn test_form_keeps_values_across_kinds() {
        let mut form = QrForm::default();
        form.set(QrField::Url, "https://x.y").unwrap();
        form.kind = QrKind::Phone;
        form.set(QrField::Phone, "+100").unwrap();
        assert_eq!(form.payload(), "tel:+100");
        form.kind = QrKind::Url;
        assert_eq!(form.payload(), "https://x.y");
    }

    #[test]
    fn test_blank_payload_not_renderable() {
        let form = QrForm::new(QrKind::Text);
        assert!(form.renderable_payload().is_none());
        let mut form = QrForm::new(QrKind::Text);
        form.set(QrField::Text, "   ").unwrap();
        assert!(form.renderable_payload().is_none());
        // Templated kinds are never blank.
        assert!(QrForm::new(QrKind::Phone).renderable_payload().is_some());
    }

    #[test]
    fn test_security_parse() {
        let mut form = QrForm::new(QrKind::Wifi);
        form.set(QrField::Security, "WEP").unwrap();
        assert_eq!(form.security, WifiSecurity::Wep);
        assert!(form.set(QrField::Security, "wpa3-enterprise").is_err());
    }

    #[test]
    fn test_kind_fields() {
        assert_eq!(QrKind::Sms.fields(), &[QrField::Phone, QrField::Message]);
        assert_eq!("WIFI".parse::<QrKind>().unwrap(), QrKind::Wifi);
    }
}
