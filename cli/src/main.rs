//! pagemark CLI - per-page Markdown annotation tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagemark::{FormatOptions, Formatter, PageInput};

#[derive(Parser)]
#[command(name = "pagemark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Annotate extracted document pages with Markdown structure", long_about = None)]
struct Cli {
    /// Input extraction-engine JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a page batch and write formatted JSON
    #[command(alias = "fmt")]
    Format {
        /// Input extraction-engine JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Keep inline image payloads in the output text
        #[arg(long)]
        keep_inline: bool,

        /// Process pages one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show per-page annotation statistics
    Info {
        /// Input extraction-engine JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Format {
            input,
            output,
            keep_inline,
            sequential,
            compact,
        }) => cmd_format(&input, output.as_deref(), keep_inline, sequential, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: format if input is provided
            if let Some(input) = cli.input {
                cmd_format(&input, cli.output.as_deref(), false, false, false)
            } else {
                println!("{}", "Usage: pagemark <FILE> [OUTPUT]".yellow());
                println!("       pagemark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Check that the input exists and is an extraction-engine JSON file.
fn check_input(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_file() {
        return Err(format!("input file does not exist: {}", input.display()).into());
    }
    let is_json = input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        return Err(format!("input file is not JSON: {}", input.display()).into());
    }
    Ok(())
}

fn read_batch(input: &Path) -> Result<Vec<PageInput>, Box<dyn std::error::Error>> {
    check_input(input)?;
    let json = fs::read_to_string(input)?;
    Ok(PageInput::batch_from_json(&json)?)
}

fn cmd_format(
    input: &Path,
    output: Option<&Path>,
    keep_inline: bool,
    sequential: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = read_batch(input)?;
    log::info!("formatting {} pages from {}", pages.len(), input.display());

    let mut options = FormatOptions::new();
    if keep_inline {
        options = options.keep_images_inline();
    }
    if sequential {
        options = options.sequential();
    }
    let formatter = Formatter::with_options(options)?;

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Annotating pages...");

    let formatted = if sequential {
        // Page-at-a-time keeps the bar honest in sequential mode.
        pagemark::validate_batch(&pages)?;
        let mut formatted = Vec::with_capacity(pages.len());
        for page in &pages {
            formatted.push(formatter.format_page(page)?);
            pb.inc(1);
        }
        formatted
    } else {
        let formatted = formatter.format_batch(&pages)?;
        pb.inc(pages.len() as u64);
        formatted
    };
    pb.finish_with_message("Done!");

    let json = if compact {
        serde_json::to_string(&formatted)?
    } else {
        serde_json::to_string_pretty(&formatted)?
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let pages = read_batch(input)?;
    let formatter = Formatter::new()?;
    let formatted = formatter.format_batch(&pages)?;

    println!("{}", "Batch Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), formatted.len());

    for page in &formatted {
        println!();
        println!(
            "{} {} {}",
            "Page".cyan().bold(),
            page.metadata.page_number,
            format!("of {}", page.metadata.page_count).dimmed()
        );
        println!("{}: {}", "Characters".bold(), page.metadata.text_length);
        println!("{}: {}", "Tokens".bold(), page.tokens);
        println!(
            "{}: {}",
            "Language".bold(),
            page.language.as_deref().unwrap_or("unknown")
        );
        println!("{}: {}", "Titles".bold(), page.elements.titles.len());
        println!("{}: {}", "Lists".bold(), page.elements.lists.len());
        println!("{}: {}", "Links".bold(), page.elements.links.len());
        println!(
            "{}: {} ({} with content)",
            "Tables".bold(),
            page.elements.tables.len(),
            page.elements.tables.iter().filter(|t| t.has_content()).count()
        );
        println!(
            "{}: {} ({} with payload)",
            "Images".bold(),
            page.elements.images.len(),
            page.elements.images.iter().filter(|i| i.has_payload()).count()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "pagemark".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
}
