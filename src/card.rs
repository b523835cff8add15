//! Card assembly: template in, filled SVG markup out.

use crate::document::SvgDocument;
use crate::error::{Error, Result};
use crate::template::{update_field, NETWORK_NAME_ID, NETWORK_PASSWORD_ID};
use std::fs;
use std::path::Path;
use tracing::info;

/// The card template shipped with the binary.
pub const BUILTIN_TEMPLATE: &str = include_str!("../assets/wifi-card-template.svg");

/// A card template: SVG markup with the two fixed field slots.
#[derive(Debug, Clone)]
pub struct CardTemplate {
    markup: String,
}

impl CardTemplate {
    /// The bundled default template.
    pub fn bundled() -> Self {
        Self {
            markup: BUILTIN_TEMPLATE.to_string(),
        }
    }

    /// Loads a template from a file instead of the bundled one.
    pub fn from_file(path: &Path) -> Result<Self> {
        let markup = fs::read_to_string(path)
            .map_err(|e| Error::io("failed to read template", path, e))?;
        Ok(Self { markup })
    }

    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Fills both fields and returns the serialized card.
    ///
    /// Fields are updated in a fixed order, name then password; either one
    /// missing from the template fails the whole card.
    pub fn fill(&self, network_name: &str, password: &str) -> Result<String> {
        let mut document = SvgDocument::parse(&self.markup)?;
        update_field(&mut document, NETWORK_NAME_ID, network_name)?;
        update_field(&mut document, NETWORK_PASSWORD_ID, password)?;
        info!(network_name, "card filled");
        Ok(document.to_xml_string())
    }
}

/// Writes a serialized card to `path`.
pub fn write_card(svg: &str, path: &Path) -> Result<()> {
    fs::write(path, svg).map_err(|e| Error::io("failed to write card", path, e))?;
    info!(path = %path.display(), "card written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_template_fills_both_fields() {
        let svg = CardTemplate::bundled()
            .fill("MyHomeWiFi", "s3cr3t!")
            .unwrap();

        assert!(!svg.contains("NETWORK_NAME"));
        assert!(!svg.contains("PASSWORD_PLACEHOLDER"));

        let doc = SvgDocument::parse(&svg).unwrap();
        let name_span = &doc.find_by_id(NETWORK_NAME_ID).unwrap().children()[0];
        let password_span = &doc.find_by_id(NETWORK_PASSWORD_ID).unwrap().children()[0];
        assert_eq!(name_span.text(), "MyHomeWiFi");
        assert_eq!(password_span.text(), "s3cr3t!");

        let style = Style::parse(name_span.attr("style").unwrap());
        assert_eq!(style.get("stroke"), Some("none"));
        assert_eq!(style.get("stroke-width"), None);
    }

    #[test]
    fn password_with_markup_characters_survives_round_trip() {
        let svg = CardTemplate::bundled().fill("Cafe<&>", "a&b\"c").unwrap();
        let doc = SvgDocument::parse(&svg).unwrap();
        let name_span = &doc.find_by_id(NETWORK_NAME_ID).unwrap().children()[0];
        let password_span = &doc.find_by_id(NETWORK_PASSWORD_ID).unwrap().children()[0];
        assert_eq!(name_span.text(), "Cafe<&>");
        assert_eq!(password_span.text(), "a&b\"c");
    }

    #[test]
    fn template_without_field_fails() {
        let template = CardTemplate::from_markup("<svg><rect/></svg>");
        let result = template.fill("name", "password");
        assert!(matches!(result, Err(Error::FieldNotFound(_))));
    }

    #[test]
    fn missing_template_file_reports_path() {
        let result = CardTemplate::from_file(Path::new("/no/such/template.svg"));
        match result {
            Err(Error::Io { path, .. }) => {
                assert_eq!(path, Path::new("/no/such/template.svg"))
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
