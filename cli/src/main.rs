//! strapi-richtext CLI - render rich-text block JSON to HTML

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use strapi_richtext::render::{to_html, to_html_with_stats};
use strapi_richtext::{parse_file, parse_reader, Document, RenderOptions};

#[derive(Parser)]
#[command(name = "strapi-richtext")]
#[command(version)]
#[command(about = "Render Strapi rich-text block JSON to HTML", long_about = None)]
struct Cli {
    /// Input JSON file ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render rich-text JSON to HTML
    Render {
        /// Input JSON file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,
    },

    /// Show document statistics
    Info {
        /// Input JSON file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            max_heading,
        }) => cmd_render(input.as_deref(), output.as_deref(), max_heading),
        Some(Commands::Info { input, json }) => cmd_info(input.as_deref(), json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_render(cli.input.as_deref(), cli.output.as_deref(), 6),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load a document from a file, or from stdin when no path (or "-") is given.
fn load_document(input: Option<&Path>) -> Result<Document, Box<dyn std::error::Error>> {
    match input {
        Some(path) if path != Path::new("-") => {
            log::debug!("Reading rich-text JSON from {}", path.display());
            Ok(parse_file(path)?)
        }
        _ => {
            log::debug!("Reading rich-text JSON from stdin");
            Ok(parse_reader(std::io::stdin().lock())?)
        }
    }
}

fn render_document(doc: &Document, max_heading: u8) -> String {
    let options = RenderOptions::new().with_max_heading(max_heading);
    to_html(doc, &options)
}

fn cmd_render(
    input: Option<&Path>,
    output: Option<&Path>,
    max_heading: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let html = render_document(&doc, max_heading);

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_info(input: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let result = to_html_with_stats(&doc, &RenderOptions::default());
    let stats = &result.stats;

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    match input {
        Some(path) if path != Path::new("-") => println!("{}: {}", "File".bold(), path.display()),
        _ => println!("{}: <stdin>", "File".bold()),
    }
    println!("{}: {}", "Top-level blocks".bold(), doc.len());
    println!("{}: {}", "Total nodes".bold(), stats.total_nodes());
    println!("{}: {} bytes", "HTML size".bold(), result.content_len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Lists".bold(), stats.list_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Text runs".bold(), stats.text_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.character_count);

    if stats.passthrough_count > 0 {
        println!(
            "{}: {}",
            "Unrecognized blocks".yellow().bold(),
            stats.passthrough_count
        );
    }

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "strapi-richtext".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Strapi rich-text to HTML renderer");
    println!();
    println!("License: MIT");
}
