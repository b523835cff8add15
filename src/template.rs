//! Template field substitution.
//!
//! The card template exposes two addressable text elements, one per field.
//! Each one either owns its text directly or delegates it to a styled
//! `tspan` child while the parent stays fully transparent. `update_field`
//! handles both shapes.

use crate::document::{Element, SvgDocument};
use crate::error::{Error, Result};
use crate::style::{is_stroke_property, Style};
use tracing::debug;

/// Identifier of the network name field in the card template.
pub const NETWORK_NAME_ID: &str = "WifiNetworkNameValue";

/// Identifier of the password field in the card template.
pub const NETWORK_PASSWORD_ID: &str = "WifiNetworkPasswordValue";

/// Replaces the visible text of the element identified by `element_id`,
/// preserving its styling.
///
/// When the element carries a `tspan` child, the span receives the new text
/// and keeps every style property except its stroke, which is disabled
/// outright; the parent's direct text is cleared so the span is the only
/// rendered content. Without a span the element's children are dropped and
/// the text is set on the element itself.
///
/// The operation is idempotent and performs no I/O. A missing identifier is
/// [`Error::FieldNotFound`] and leaves the document untouched.
pub fn update_field(
    document: &mut SvgDocument,
    element_id: &str,
    replacement_text: &str,
) -> Result<()> {
    let target = document
        .find_by_id_mut(element_id)
        .ok_or_else(|| Error::FieldNotFound(element_id.to_string()))?;

    match first_span_index(target) {
        Some(index) => {
            target.clear_text();
            let span = &mut target.children_mut()[index];
            span.set_text(replacement_text);
            disable_stroke(span);
            debug!(id = element_id, "updated span text");
        }
        None => {
            target.clear_children();
            target.set_text(replacement_text);
            debug!(id = element_id, "updated direct text");
        }
    }

    Ok(())
}

/// First `tspan` child, namespace prefix ignored. Additional spans are
/// out-of-contract input and are left as found.
fn first_span_index(element: &Element) -> Option<usize> {
    element
        .children()
        .iter()
        .position(|child| child.local_tag() == "tspan")
}

/// Drops every stroke property from the span and pins `stroke:none`.
///
/// The template's spans carry a stroke alongside their fill; rendered
/// through the vector-to-PDF path that stroke outlines every glyph and
/// fuses adjacent characters. The span must render with fill only.
fn disable_stroke(span: &mut Element) {
    span.retain_attrs(|name| !is_stroke_property(name));

    let mut style = Style::parse(span.attr("style").unwrap_or(""));
    style.remove_matching(is_stroke_property);
    style.set("stroke", "none");
    span.set_attr("style", &style.to_string());
}
