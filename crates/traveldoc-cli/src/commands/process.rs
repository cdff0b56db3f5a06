//! Process command - extract travel info from a single document file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use tracing::{debug, info};

use traveldoc_core::document::load_document_text;
use traveldoc_core::models::config::TraveldocConfig;
use traveldoc_core::models::TravelDocument;
use traveldoc_core::travel::{DestinationGroupKey, TravelInfoParser, TravelParser};

/// Sample boarding pass used by `--sample`, matching the original app's
/// demo upload.
const SAMPLE_TEXT: &str = "\
BOARDING PASS
THAI AIRWAYS TG315
Bangkok to Phuket
Passenger: John Smith
Date: 02/06/2025
Return: 10/06/2025
Confirmation: ABC123
";

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required_unless_present = "sample")]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,

    /// Parse the built-in sample boarding pass instead of a file
    #[arg(long)]
    sample: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        TraveldocConfig::from_file(Path::new(path))?
    } else {
        TraveldocConfig::default()
    };

    let (text, id, file_url) = if args.sample {
        (SAMPLE_TEXT.to_string(), "sample".to_string(), "sample".to_string())
    } else {
        let input = args.input.as_ref().expect("clap enforces input");
        if !input.exists() {
            anyhow::bail!("Input file not found: {}", input.display());
        }

        info!("Processing file: {}", input.display());
        let text = load_document_text(input, &config)?;

        let id = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document")
            .to_string();

        (text, id, input.display().to_string())
    };

    let parser = TravelInfoParser::from_config(&config.extraction);
    let result = parser.parse(&text)?;

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let document = TravelDocument::new(id, result.info, file_url, Local::now().date_naive());

    // Format output
    let output = format_document(&document, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_document(document: &TravelDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Csv => format_csv(document),
        OutputFormat::Text => Ok(format_text(document)),
    }
}

fn format_csv(document: &TravelDocument) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "type",
        "title",
        "destination",
        "start_date",
        "end_date",
        "airline",
        "flight_number",
        "hotel_name",
        "booking_reference",
        "status",
    ])?;

    let info = &document.info;
    let start_date = info.start_date.to_string();
    let end_date = info.end_date.to_string();
    let status = format!("{:?}", document.status).to_lowercase();

    wtr.write_record([
        document.id.as_str(),
        info.doc_type.label(),
        &info.title,
        &info.destination,
        &start_date,
        &end_date,
        info.details.airline.as_deref().unwrap_or_default(),
        info.details.flight_number.as_deref().unwrap_or_default(),
        info.details.hotel_name.as_deref().unwrap_or_default(),
        info.details.booking_reference.as_deref().unwrap_or_default(),
        &status,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn format_text(document: &TravelDocument) -> String {
    let info = &document.info;
    let mut output = String::new();

    output.push_str(&format!("Title: {}\n", info.title));
    output.push_str(&format!("Type: {}\n", info.doc_type.label()));
    output.push_str(&format!("Destination: {}\n", info.destination));
    output.push_str(&format!("Dates: {} to {}\n", info.start_date, info.end_date));

    if let Some(airline) = &info.details.airline {
        output.push_str(&format!("Airline: {}\n", airline));
    }
    if let Some(flight_number) = &info.details.flight_number {
        output.push_str(&format!("Flight: {}\n", flight_number));
    }
    if let Some(hotel_name) = &info.details.hotel_name {
        output.push_str(&format!("Hotel: {}\n", hotel_name));
    }
    if let Some(booking_reference) = &info.details.booking_reference {
        output.push_str(&format!("Booking reference: {}\n", booking_reference));
    }

    if let Some(group) = DestinationGroupKey::from_info(info) {
        output.push_str(&format!("Destination group: {}\n", group.path()));
    }

    output
}
