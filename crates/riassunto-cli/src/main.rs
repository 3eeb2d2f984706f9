use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use riassunto_core::{Config, DEFAULT_LENGTH, SummaryClient, config_file, extract_document};
use riassunto_pdf_mupdf::MupdfBackend;

mod output;

use output::ColorMode;

/// Riassunto - Summarize PDF documents with a chat-completion model
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the text of a PDF and summarize it
    Summarize {
        /// Path to the PDF file
        file_path: PathBuf,

        /// Summary length qualifier, passed verbatim to the prompt
        #[arg(short, long, default_value = DEFAULT_LENGTH)]
        length: String,

        /// Write the summary (or text, with --text-only) to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the extracted text and skip summarization
        #[arg(long)]
        text_only: bool,

        /// Override the chat-completions endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Override the model name
        #[arg(long)]
        model: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show the resolved configuration and where it is read from
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("riassunto=warn,riassunto_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Summarize {
            file_path,
            length,
            output,
            text_only,
            endpoint,
            model,
            no_color,
        } => {
            summarize(
                file_path, length, output, text_only, endpoint, model, no_color,
            )
            .await
        }
        Command::Config => show_config(),
    }
}

#[allow(clippy::too_many_arguments)]
async fn summarize(
    file_path: PathBuf,
    length: String,
    output: Option<PathBuf>,
    text_only: bool,
    endpoint: Option<String>,
    model: Option<String>,
    no_color: bool,
) -> anyhow::Result<()> {
    if !file_path.exists() {
        anyhow::bail!("PDF file not found: {}", file_path.display());
    }

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let mut config = Config::load();
    if let Some(endpoint) = endpoint {
        config.summarizer.endpoint = endpoint;
    }
    if let Some(model) = model {
        config.summarizer.model = model;
    }

    let use_color = !no_color && output.is_none() && std::io::stdout().is_terminal();
    let color = ColorMode(use_color);
    let err_color = ColorMode(!no_color && std::io::stderr().is_terminal());

    let pdf_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.display().to_string());

    let data = std::fs::read(&file_path)?;
    let doc = extract_document(&MupdfBackend::new(), &data)
        .map_err(|e| anyhow::anyhow!("{}: {}", pdf_name, e))?;

    let mut stderr = std::io::stderr();
    output::print_extraction_summary(&mut stderr, &pdf_name, &doc, err_color)?;

    if text_only {
        return write_output(output.as_deref(), |w| w.write_all(doc.text.as_bytes()));
    }

    if config.summarizer.api_key.is_none() {
        tracing::warn!("CEREBRAS_API_KEY is not set; the endpoint will likely reject the request");
    }

    let client = SummaryClient::new(&config.summarizer)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Summarizing {} ({})...", pdf_name, length));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.summarize(&doc.text, &length).await;
    spinner.finish_and_clear();

    // The output file is only touched once there is something to put in it.
    if !outcome.is_success() {
        output::print_failure(&mut stderr, &outcome, err_color)?;
        anyhow::bail!("could not summarize {}", pdf_name);
    }

    let summary = outcome.display_text();
    write_output(output.as_deref(), |w| {
        if color.enabled() {
            use owo_colors::OwoColorize;
            writeln!(w, "{}", summary.bold())
        } else {
            writeln!(w, "{}", summary)
        }
    })?;

    if let Some(ref output_path) = output {
        eprintln!("Summary written to {}", output_path.display());
    }

    Ok(())
}

/// Write to `path` (created or truncated) or to stdout when no path is given.
fn write_output(
    path: Option<&Path>,
    write: impl FnOnce(&mut dyn Write) -> std::io::Result<()>,
) -> anyhow::Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    write(writer.as_mut())?;
    writer.flush()?;
    Ok(())
}

fn show_config() -> anyhow::Result<()> {
    let config = Config::load();
    match config_file::config_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no platform config directory)"),
    }
    println!("Local override: .riassunto.toml");
    println!("{:#?}", config);
    Ok(())
}
