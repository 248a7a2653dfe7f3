//! Extract command - build a structured record from a single transcript.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use recibo_core::models::config::ReciboConfig;
use recibo_core::models::receipt::ReceiptRecord;
use recibo_core::ocr::OcrOutput;
use recibo_core::receipt::{ReceiptExtractor, ReceiptParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input transcript file (plain text as produced by the OCR backend)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// JSON file with OCR metadata (confidence, pages, processorId)
    #[arg(short, long)]
    metadata: Option<PathBuf>,

    /// Check arithmetic invariants on the produced record
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per line item)
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing transcript: {}", args.input.display());

    let record = extract_file(&args.input, args.metadata.as_deref(), &config)?;

    if args.validate {
        let issues = record.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    if record.receipt.items.is_empty() {
        eprintln!(
            "{} No items recognized in {}",
            style("!").yellow(),
            args.input.display()
        );
    }

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Record written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Load config from an explicit path or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ReciboConfig> {
    Ok(match config_path {
        Some(path) => ReciboConfig::from_file(std::path::Path::new(path))?,
        None => ReciboConfig::default(),
    })
}

/// Run one transcript file through the extraction engine.
pub fn extract_file(
    input: &std::path::Path,
    metadata: Option<&std::path::Path>,
    config: &ReciboConfig,
) -> anyhow::Result<ReceiptRecord> {
    let text = fs::read_to_string(input)?;

    let ocr = match metadata {
        Some(path) => {
            let mut output: OcrOutput = serde_json::from_str(&fs::read_to_string(path)?)?;
            output.text = text;
            output
        }
        None => OcrOutput::from_text(text),
    };

    let parser =
        ReceiptParser::new().with_default_currency(config.extraction.default_currency.clone());

    Ok(parser.extract(&ocr))
}

/// Render a record in the requested output format.
pub fn format_record(record: &ReceiptRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_record_csv(record),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

fn format_record_csv(record: &ReceiptRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["name", "quantity", "price", "subtotal", "currency"])?;

    for item in &record.receipt.items {
        wtr.write_record([
            item.name.as_str(),
            &item.quantity.to_string(),
            &item.price.to_string(),
            &item.subtotal.to_string(),
            &record.receipt.currency,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_record_text(record: &ReceiptRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Merchant: {}\n", record.receipt.merchant.name));
    output.push_str(&format!("Date: {}\n", record.receipt.date.to_rfc3339()));
    output.push('\n');

    output.push_str("Items:\n");
    for item in &record.receipt.items {
        output.push_str(&format!(
            "  {} x {} @ {} = {}\n",
            item.quantity, item.name, item.price, item.subtotal
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Total: {} {}\n",
        record.receipt.total, record.receipt.currency
    ));
    output.push_str(&format!(
        "Confidence: {:.2}\n",
        record.metadata.confidence
    ));

    output
}
