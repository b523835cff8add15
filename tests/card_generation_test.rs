/// Integration tests for the card generation pipeline.
///
/// These tests exercise the complete path from template fill through
/// serialization to PDF/PNG export.
///
/// ## Running Tests
///
/// ```bash
/// # Unit tests
/// cargo test --lib
///
/// # Integration tests
/// cargo test --test card_generation_test
/// ```

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use wifi_card::{
        card::{write_card, CardTemplate},
        converter::{CardExporter, PNG_ZOOM},
        document::SvgDocument,
        output,
        style::Style,
        template::{NETWORK_NAME_ID, NETWORK_PASSWORD_ID},
    };

    /// Fill the bundled template and verify both fields end-to-end.
    #[test]
    fn test_fill_bundled_template() {
        let svg = CardTemplate::bundled()
            .fill("MyHomeWiFi", "correct horse battery staple")
            .unwrap();

        let doc = SvgDocument::parse(&svg).unwrap();

        for (id, expected) in [
            (NETWORK_NAME_ID, "MyHomeWiFi"),
            (NETWORK_PASSWORD_ID, "correct horse battery staple"),
        ] {
            let target = doc.find_by_id(id).unwrap();
            assert_eq!(target.text(), "", "parent text must stay empty");

            let span = &target.children()[0];
            assert_eq!(span.text(), expected);

            let style = Style::parse(span.attr("style").unwrap());
            assert_eq!(style.get("stroke"), Some("none"));
            assert_eq!(style.get("stroke-width"), None);
            assert_eq!(style.get("font-weight"), Some("bold"));
        }
    }

    /// Write the card into a directory tree resolved by the output module.
    #[test]
    fn test_write_card_to_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("output");

        let svg = CardTemplate::bundled().fill("GuestNet", "guest123").unwrap();
        let svg_path = output::resolve_in(
            &base,
            &output::ensure_extension(&dir.path().join("card"), "svg"),
        )
        .unwrap();
        write_card(&svg, &svg_path).unwrap();

        let written = std::fs::read_to_string(&svg_path).unwrap();
        assert_eq!(written, svg);
        assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }

    /// Full pipeline: fill, write, export PDF and PNG.
    #[test]
    fn test_export_filled_card() {
        let dir = tempfile::tempdir().unwrap();

        let svg = CardTemplate::bundled().fill("MyHomeWiFi", "s3cr3t!").unwrap();
        let exporter = CardExporter::new();

        let pdf_path = dir.path().join("card.pdf");
        exporter.to_pdf(&svg, &pdf_path).unwrap();
        let pdf_data = std::fs::read(&pdf_path).unwrap();
        assert!(pdf_data.starts_with(b"%PDF"));

        let png_path = dir.path().join("card.png");
        exporter.to_png(&svg, &png_path, PNG_ZOOM).unwrap();
        let png_data = std::fs::read(&png_path).unwrap();
        assert!(png_data.len() > 0);
    }

    /// A template file from disk behaves like the bundled one.
    #[test]
    fn test_template_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("template.svg");
        std::fs::write(&template_path, wifi_card::card::BUILTIN_TEMPLATE).unwrap();

        let svg = CardTemplate::from_file(&template_path)
            .unwrap()
            .fill("CafeNetz", "espresso")
            .unwrap();

        let doc = SvgDocument::parse(&svg).unwrap();
        let span = &doc.find_by_id(NETWORK_NAME_ID).unwrap().children()[0];
        assert_eq!(span.text(), "CafeNetz");
    }

    /// Conversion of a missing SVG file surfaces the path.
    #[test]
    fn test_missing_template_file() {
        let missing = Path::new("/no/such/dir/template.svg");
        let err = CardTemplate::from_file(missing).unwrap_err();
        assert!(err.to_string().contains("/no/such/dir/template.svg"));
    }
}
