use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use text_harvester::{extract_all, ExtractionResult};

/// Extract structured data (emails, URLs, phone numbers, ...) from text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to input file (reads stdin when omitted)
    #[arg(index = 1)]
    file_path: Option<PathBuf>,

    /// Show only specific categories (comma-separated)
    #[arg(short, long)]
    categories: Option<String>,

    /// Emit results as JSON instead of a report
    #[arg(short, long)]
    json: bool,
}

fn print_section(name: &str, items: &[String], selected: &Option<Vec<String>>) {
    if let Some(wanted) = selected {
        if !wanted.iter().any(|c| c == name) {
            return;
        }
    }
    println!("{}", name);
    println!("{}", "=".repeat(50));
    if items.is_empty() {
        println!("  (none)");
    }
    for item in items {
        println!("  - {}", item);
    }
    println!();
}

fn print_report(results: &ExtractionResult, selected: &Option<Vec<String>>) {
    print_section("emails", &results.emails, selected);
    print_section("urls", &results.urls, selected);
    print_section("phone_numbers", &results.phone_numbers, selected);
    print_section("credit_cards", &results.credit_cards, selected);
    print_section("time_24h", &results.times.format_24h, selected);
    print_section("time_12h", &results.times.format_12h, selected);
    print_section("html_tags", &results.html_tags, selected);
    print_section("hashtags", &results.hashtags, selected);
    print_section("currency", &results.currency, selected);
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let text = match &args.file_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let selected: Option<Vec<String>> = args
        .categories
        .as_ref()
        .map(|cats| cats.split(',').map(|s| s.trim().to_string()).collect());

    let results = extract_all(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_report(&results, &selected);
    }

    Ok(())
}
