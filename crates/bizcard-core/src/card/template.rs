//! Card templates and font families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Visual template of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Minimal,
    Professional,
    Creative,
    Elegant,
    Bold,
}

/// Gallery category used by the templates page filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    Business,
    Creative,
    Minimal,
}

impl TemplateCategory {
    pub fn all() -> &'static [TemplateCategory] {
        &[
            TemplateCategory::Business,
            TemplateCategory::Creative,
            TemplateCategory::Minimal,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TemplateCategory::Business => "templates.categories.business",
            TemplateCategory::Creative => "templates.categories.creative",
            TemplateCategory::Minimal => "templates.categories.minimal",
        }
    }
}

impl TemplateId {
    pub fn all() -> &'static [TemplateId] {
        &[
            TemplateId::Modern,
            TemplateId::Minimal,
            TemplateId::Professional,
            TemplateId::Creative,
            TemplateId::Elegant,
            TemplateId::Bold,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
            TemplateId::Professional => "professional",
            TemplateId::Creative => "creative",
            TemplateId::Elegant => "elegant",
            TemplateId::Bold => "bold",
        }
    }

    pub fn name_key(&self) -> &'static str {
        match self {
            TemplateId::Modern => "createCard.design.templates.modern",
            TemplateId::Minimal => "createCard.design.templates.minimal",
            TemplateId::Professional => "createCard.design.templates.professional",
            TemplateId::Creative => "createCard.design.templates.creative",
            TemplateId::Elegant => "createCard.design.templates.elegant",
            TemplateId::Bold => "createCard.design.templates.bold",
        }
    }

    /// Thumbnail gradient for the template picker.
    pub fn gradient(&self) -> &'static str {
        match self {
            TemplateId::Modern => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            TemplateId::Minimal => "linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%)",
            TemplateId::Professional => "linear-gradient(135deg, #2c3e50 0%, #3498db 100%)",
            TemplateId::Creative => "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
            TemplateId::Elegant => "linear-gradient(135deg, #434343 0%, #000000 100%)",
            TemplateId::Bold => "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
        }
    }

    pub fn category(&self) -> TemplateCategory {
        match self {
            TemplateId::Modern | TemplateId::Professional | TemplateId::Elegant => {
                TemplateCategory::Business
            }
            TemplateId::Creative | TemplateId::Bold => TemplateCategory::Creative,
            TemplateId::Minimal => TemplateCategory::Minimal,
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, TemplateId::Elegant | TemplateId::Bold)
    }

    /// Mock usage count shown in the gallery.
    pub fn uses(&self) -> u32 {
        match self {
            TemplateId::Modern => 2_340,
            TemplateId::Minimal => 1_856,
            TemplateId::Professional => 3_120,
            TemplateId::Creative => 980,
            TemplateId::Elegant => 645,
            TemplateId::Bold => 512,
        }
    }

    /// Templates in a category, or all when `None`.
    pub fn filtered(category: Option<TemplateCategory>) -> Vec<TemplateId> {
        TemplateId::all()
            .iter()
            .copied()
            .filter(|t| category.map_or(true, |c| t.category() == c))
            .collect()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| CardError::validation("template", format!("unknown template '{s}'")))
    }
}

/// Font family used on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Roboto,
    Cairo,
    OpenSans,
    Lato,
    Montserrat,
    Poppins,
}

impl FontFamily {
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Roboto,
            FontFamily::Cairo,
            FontFamily::OpenSans,
            FontFamily::Lato,
            FontFamily::Montserrat,
            FontFamily::Poppins,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Roboto => "roboto",
            FontFamily::Cairo => "cairo",
            FontFamily::OpenSans => "opensans",
            FontFamily::Lato => "lato",
            FontFamily::Montserrat => "montserrat",
            FontFamily::Poppins => "poppins",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontFamily::Roboto => "Roboto",
            FontFamily::Cairo => "Cairo",
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Lato => "Lato",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Poppins => "Poppins",
        }
    }

    pub fn css(&self) -> String {
        format!("\"{}\", sans-serif", self.label())
    }
}

impl FromStr for FontFamily {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| CardError::validation("fontFamily", format!("unknown font '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parse_roundtrip() {
        for t in TemplateId::all() {
            assert_eq!(t.as_str().parse::<TemplateId>().unwrap(), *t);
        }
        assert!("neon".parse::<TemplateId>().is_err());
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(TemplateId::filtered(None).len(), 6);
        assert_eq!(
            TemplateId::filtered(Some(TemplateCategory::Minimal)),
            vec![TemplateId::Minimal]
        );
        assert!(TemplateId::filtered(Some(TemplateCategory::Business))
            .iter()
            .all(|t| t.category() == TemplateCategory::Business));
    }

    #[test]
    fn test_font_css() {
        assert_eq!(FontFamily::OpenSans.css(), "\"Open Sans\", sans-serif");
        assert_eq!("Cairo".parse::<FontFamily>().unwrap(), FontFamily::Cairo);
    }
}
