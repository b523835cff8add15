//! WiFi Card Generator Library
//!
//! This library fills a fixed SVG card template with a WiFi network name and
//! password and exports the result to print formats.
//!
//! ## Module Overview
//!
//! - `document`: mutable SVG document tree (parse, id lookup, serialize)
//! - `style`: inline `style` attribute declaration lists
//! - `template`: field substitution preserving span styling
//! - `card`: template loading and card assembly
//! - `converter`: SVG to PDF/PNG conversion via svg2pdf and resvg
//! - `output`: output directory and file extension policy
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wifi_card::card::{write_card, CardTemplate};
//! use wifi_card::converter::CardExporter;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let svg = CardTemplate::bundled().fill("MyHomeWiFi", "s3cr3t!")?;
//!     write_card(&svg, Path::new("output/card.svg"))?;
//!     CardExporter::new().to_pdf(&svg, Path::new("output/card.pdf"))?;
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod converter;
pub mod document;
pub mod error;
pub mod output;
pub mod style;
pub mod template;

pub use error::{Error, Result};
