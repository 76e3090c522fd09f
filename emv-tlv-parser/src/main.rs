//! EMV TLV parser command line tool
//! Decodes a hex-encoded TLV message and prints the tag tree

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, ValueEnum};
use emv_tlv_parser::report::{tag_entries, tag_listing, ErrorReport};
use emv_tlv_parser::{
    parse_tlv_with_config, DecoderConfig, RenderConfig, TlvError, TreeRenderer, DEFAULT_MAX_DEPTH,
};
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "emv_tlv_parser", version, about = "Parse EMV BER-TLV messages")]
struct Cli {
    /// Hex-encoded TLV message; read from stdin when omitted
    #[arg(short, long)]
    message: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum nesting depth of constructed tags
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Skip 0x00 / 0xFF padding bytes between elements
    #[arg(long)]
    skip_padding: bool,

    /// Print the tag dictionary and exit
    #[arg(long)]
    list_tags: bool,

    /// Omit tag names from text output
    #[arg(long)]
    no_names: bool,

    /// Omit the text rendering of alphanumeric values
    #[arg(long)]
    no_text: bool,

    /// Indentation per nesting level in text output
    #[arg(long, default_value = "\t")]
    indent: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::default()
            .with_max_depth(self.max_depth)
            .with_skip_padding(self.skip_padding)
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_indent(self.indent.clone())
            .with_names(!self.no_names)
            .with_text(!self.no_text)
    }

    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    let format_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();
}

/// Read one line from stdin, prompting when attached to a terminal
fn read_message() -> anyhow::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Enter TLV message (hex): ");
        io::stderr().flush().ok();
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read message from stdin")?;
    if line.trim().is_empty() {
        bail!("No message given (use --message or pipe hex on stdin)");
    }
    Ok(line)
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    if cli.list_tags {
        return match cli.format {
            OutputFormat::Text => Ok(tag_listing()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&tag_entries())? + "\n"),
        };
    }

    let message = match &cli.message {
        Some(message) => message.clone(),
        None => read_message()?,
    };
    tracing::debug!("Parsing {} hex characters", message.trim().len());

    let forest = parse_tlv_with_config(&message, &cli.decoder_config())?;
    tracing::debug!("Decoded {} top-level tags", forest.len());

    match cli.format {
        OutputFormat::Text => Ok(TreeRenderer::with_config(cli.render_config()).render(forest.nodes())),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&forest).context("Failed to serialize tree")?;
            Ok(json + "\n")
        }
    }
}

/// Where a failure report goes
#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorOutput {
    Stdout(String),
    Stderr(String),
}

/// Render a failure: decode errors as text or a JSON report, anything else as text
fn render_error(format: OutputFormat, error: &anyhow::Error) -> ErrorOutput {
    let Some(tlv_error) = error.downcast_ref::<TlvError>() else {
        return ErrorOutput::Stderr(format!("Error: {:#}", error));
    };

    let text = format!("Error parsing TLV: {}", tlv_error);
    match format {
        OutputFormat::Text => ErrorOutput::Stderr(text),
        OutputFormat::Json => match serde_json::to_string_pretty(&ErrorReport::from(tlv_error)) {
            Ok(json) => ErrorOutput::Stdout(json),
            Err(_) => ErrorOutput::Stderr(text),
        },
    }
}

fn report_error(cli: &Cli, error: &anyhow::Error) -> ExitCode {
    match render_error(cli.format, error) {
        ErrorOutput::Stdout(report) => println!("{}", report),
        ErrorOutput::Stderr(report) => eprintln!("{}", report),
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!("Parse failed: {:?}", error);
            report_error(&cli, &error)
        }
    }
}
