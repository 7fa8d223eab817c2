//! e1ap-dump: E1AP PDU inspection tool
//!
//! Decodes one E1AP PDU, prints it as JSON and checks that encoding the
//! decoded value gives back the input bytes.
//!
//! # Usage
//!
//! ```bash
//! e1ap-dump --hex "0003001d 000004 ..."
//! e1ap-dump --file capture.bin --lenient --log-level debug
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use e1ap::codec::{decode_e1ap_pdu_with, encode_e1ap_pdu_with};
use e1ap_common::{
    format_hex_dump, init_logging, load_codec_config, parse_hex, read_capture, CodecConfig, LogLevel,
    PerVariantSetting, UnknownIePolicySetting,
};
use e1ap_per::ToJson;

/// e1ap-dump - decode an E1AP PDU and print it as JSON
#[derive(Parser, Debug)]
#[command(name = "e1ap-dump")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// PDU as hex; whitespace, ':' separators and a 0x prefix are accepted
    #[arg(
        short = 'x',
        long = "hex",
        value_name = "HEX",
        conflicts_with = "file",
        required_unless_present = "file"
    )]
    hex: Option<String>,

    /// File holding the PDU as raw bytes or hex text
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Codec configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use UNALIGNED PER instead of ALIGNED
    #[arg(short = 'u', long = "unaligned")]
    unaligned: bool,

    /// Skip unknown IEs received with criticality ignore or notify
    #[arg(short = 'l', long = "lenient")]
    lenient: bool,

    /// Log level: trace, debug, info, warn or error
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

/// Result of decoding and re-encoding one PDU
#[derive(Debug)]
struct DumpReport {
    json: String,
    message_name: &'static str,
    procedure_code: u8,
    input: Vec<u8>,
    reencoded: Vec<u8>,
}

impl DumpReport {
    fn is_identical(&self) -> bool {
        self.input == self.reencoded
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&args)?;
    init_logging(config.log_level);

    let input = read_input(&args)?;
    debug!(len = input.len(), variant = ?config.variant, "Decoding input");

    let report = dump(input, &config)?;
    print_report(&report);
    Ok(())
}

/// Configuration file (or defaults) with the command line overrides applied.
fn build_config(args: &Args) -> Result<CodecConfig> {
    let mut config = match &args.config {
        Some(path) => load_codec_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => CodecConfig::default(),
    };

    if args.unaligned {
        config.variant = PerVariantSetting::Unaligned;
    }
    if args.lenient {
        config.unknown_ie_policy = UnknownIePolicySetting::Criticality;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    Ok(config)
}

fn read_input(args: &Args) -> Result<Vec<u8>> {
    let bytes = match (&args.hex, &args.file) {
        (Some(hex), _) => parse_hex(hex).context("Invalid hex input")?,
        (None, Some(path)) => {
            read_capture(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        (None, None) => bail!("Either --hex or --file is required"),
    };

    if bytes.is_empty() {
        bail!("Input is empty");
    }
    Ok(bytes)
}

fn dump(input: Vec<u8>, config: &CodecConfig) -> Result<DumpReport> {
    let pdu = decode_e1ap_pdu_with(&input, config).context("Failed to decode E1AP PDU")?;
    let json = pdu.to_json().context("Failed to render PDU as JSON")?;
    let reencoded =
        encode_e1ap_pdu_with(&pdu, config).context("Failed to re-encode decoded PDU")?;

    if reencoded != input {
        warn!(
            message = pdu.message_name(),
            input_len = input.len(),
            reencoded_len = reencoded.len(),
            "Re-encoding differs from input"
        );
    }

    Ok(DumpReport {
        json,
        message_name: pdu.message_name(),
        procedure_code: pdu.procedure_code(),
        input,
        reencoded,
    })
}

fn print_report(report: &DumpReport) {
    println!("{}", report.json);
    println!(
        "{} (procedure code {}), {} bytes",
        report.message_name,
        report.procedure_code,
        report.input.len()
    );

    if report.is_identical() {
        println!("Re-encoding: identical");
    } else {
        println!("Re-encoding: differs");
        println!("input:\n{}", format_hex_dump(&report.input));
        println!("re-encoded:\n{}", format_hex_dump(&report.reencoded));
    }
}
