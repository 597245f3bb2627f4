//! roadsigns - extract road sign and marking pages from likumi.lv

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use roadsigns::fetch::fetch_document;
use roadsigns::output::{write_manifest, write_pages};
use roadsigns::util::decode_text;
use roadsigns::{Config, SignEntry, extract_from_html};

#[derive(Parser)]
#[command(name = "roadsigns")]
#[command(version, about = "Extract road sign and road marking pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    roadsigns -o signs/               Fetch the regulations and write one page per sign
    roadsigns -i saved.html --list    List the entries of a saved copy of the page")]
struct Cli {
    /// Parse a saved copy of the page instead of fetching it
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory for the generated pages
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// URL of the regulations page (defaults to the base URL + document path)
    #[arg(long)]
    url: Option<String>,

    /// Origin that relative image paths are resolved against
    #[arg(long, default_value = roadsigns::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Also write a JSON manifest of all entries
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Print the entries instead of writing pages
    #[arg(short, long)]
    list: bool,

    /// Log progress at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> roadsigns::Result<()> {
    let config = Config::default()
        .with_base_url(&cli.base_url)
        .with_output_dir(&cli.output);

    let markup = match &cli.input {
        Some(path) => decode_text(&std::fs::read(path)?, None).into_owned(),
        None => {
            let url = cli.url.clone().unwrap_or_else(|| config.document_url());
            fetch_document(&url)?
        }
    };

    let entries = extract_from_html(&markup, &config)?;

    if cli.list {
        print_entries(&entries);
        return Ok(());
    }

    let written = write_pages(&entries, &config.output_dir, &config.base_url)?;
    if let Some(path) = &cli.manifest {
        write_manifest(&entries, path, &config.base_url)?;
    }

    if !cli.quiet {
        println!("Wrote {written} pages to {}", config.output_dir.display());
    }
    Ok(())
}

fn print_entries(entries: &[SignEntry]) {
    for entry in entries {
        println!("{}\t{}", entry.label, entry.images.len());
    }
}
