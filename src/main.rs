//! WiFi Card Generator CLI
//!
//! Fills the card template with a network name and password, writes the SVG
//! into the `output/` directory and optionally exports PDF and PNG versions.
//!
//! ## Usage
//!
//! ```bash
//! # Fully specified
//! wifi-card -n MyHomeWiFi -p 's3cr3t!' -o card --pdf
//!
//! # Interactive mode: prompts for any missing value
//! wifi-card
//!
//! # Convert a previously generated SVG
//! wifi-card --pdf-only -o card
//! ```
//!
//! `RUST_LOG` controls log verbosity (default: info).

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wifi_card::card::{write_card, CardTemplate};
use wifi_card::converter::{CardExporter, PNG_ZOOM};
use wifi_card::output;

const HELP: &str = "\
wifi-card: fill a WiFi card SVG template and export print formats

USAGE:
  wifi-card [OPTIONS]

OPTIONS:
  -n, --name <NAME>          WiFi network name
  -p, --password <PASSWORD>  WiFi network password
  -o, --output <FILE>        Output file name (.svg appended when missing)
      --template <FILE>      Use a template file instead of the bundled one
      --pdf                  Also export a PDF version
      --png                  Also export a PNG preview
      --pdf-only             Only convert an existing SVG (requires -o)
  -h, --help                 Print help

Missing name, password or output switch the tool into interactive mode.
";

struct Args {
    name: Option<String>,
    password: Option<String>,
    output: Option<String>,
    template: Option<PathBuf>,
    pdf: bool,
    png: bool,
    pdf_only: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args().context("Could not parse arguments")?;

    if args.pdf_only {
        return convert_existing(&args);
    }

    let interactive = args.name.is_none() || args.password.is_none() || args.output.is_none();
    if interactive {
        println!("=== WiFi Card Generator ===");
    }

    let network_name = match args.name {
        Some(value) => value,
        None => prompt("Enter network name: ")?,
    };
    let password = match args.password {
        Some(value) => value,
        None => prompt("Enter network password: ")?,
    };
    let output_base = match args.output {
        Some(value) => value,
        None => prompt("Enter output file name (without extension): ")?,
    };
    let export_pdf = if args.pdf || !interactive {
        args.pdf
    } else {
        prompt("Generate PDF? (y/n): ")?
            .to_ascii_lowercase()
            .starts_with('y')
    };

    let template = match &args.template {
        Some(path) => CardTemplate::from_file(path)?,
        None => CardTemplate::bundled(),
    };
    let svg = template.fill(&network_name, &password)?;

    let svg_path = output::resolve_output_path(&output::ensure_extension(
        Path::new(&output_base),
        "svg",
    ))?;
    write_card(&svg, &svg_path)?;

    let exporter = CardExporter::new();
    if export_pdf {
        exporter.to_pdf(&svg, &output::sibling_with_extension(&svg_path, "pdf"))?;
    }
    if args.png {
        exporter.to_png(
            &svg,
            &output::sibling_with_extension(&svg_path, "png"),
            PNG_ZOOM,
        )?;
    }

    Ok(())
}

/// `--pdf-only`: convert a previously generated SVG without refilling it.
fn convert_existing(args: &Args) -> Result<()> {
    let output = args
        .output
        .as_deref()
        .ok_or_else(|| anyhow!("--pdf-only requires -o/--output to name the SVG file"))?;

    let svg_path =
        output::resolve_output_path(&output::ensure_extension(Path::new(output), "svg"))?;
    if !svg_path.exists() {
        bail!("SVG file '{}' not found", svg_path.display());
    }

    let svg_content = fs::read_to_string(&svg_path)
        .with_context(|| format!("Failed to read SVG from {}", svg_path.display()))?;

    CardExporter::new().to_pdf(
        &svg_content,
        &output::sibling_with_extension(&svg_path, "pdf"),
    )
}

fn parse_args() -> Result<Args> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = Args {
        name: pargs.opt_value_from_str(["-n", "--name"])?,
        password: pargs.opt_value_from_str(["-p", "--password"])?,
        output: pargs.opt_value_from_str(["-o", "--output"])?,
        template: pargs.opt_value_from_str("--template")?,
        pdf: pargs.contains("--pdf"),
        png: pargs.contains("--png"),
        pdf_only: pargs.contains("--pdf-only"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {:?}", remaining);
    }

    Ok(args)
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
