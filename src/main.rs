use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Generate printable PDF sheets of QR box labels.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// URL prefix encoded into each code, e.g. https://pantry.example/box/
    #[arg(long)]
    prefix: String,

    /// First box number to try
    #[arg(long)]
    start: u32,

    /// Number of labels to produce
    #[arg(long)]
    count: usize,

    /// Output file name, resolved against the scans directory
    #[arg(long)]
    output: String,

    /// Directory that receives generated sheets
    #[arg(long, default_value = "scans")]
    scans_dir: PathBuf,

    /// File of box labels already in use, one per line
    #[arg(long)]
    existing: Option<PathBuf>,
}

fn read_existing(path: &PathBuf) -> std::io::Result<HashSet<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let taken = match &args.existing {
        Some(path) => match read_existing(path) {
            Ok(labels) => labels,
            Err(e) => {
                eprintln!("error: cannot read {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => HashSet::new(),
    };

    if let Err(e) = std::fs::create_dir_all(&args.scans_dir) {
        eprintln!(
            "error: cannot create {}: {e}",
            args.scans_dir.display()
        );
        return ExitCode::FAILURE;
    }

    let output = args.scans_dir.join(&args.output);
    match boxlabel_pdf::generate_label_sheet(
        &args.prefix,
        args.start,
        args.count,
        &output,
        |label| taken.contains(label),
    ) {
        Ok(()) => {
            println!("Wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
