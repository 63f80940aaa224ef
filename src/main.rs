/// main.rs — massdecomp entry point
use clap::Parser;
use massdecomp::cli::{Cli, Command, MassArgs};
use massdecomp::decomposer::Decomposer;
use massdecomp::error::Result;
use massdecomp::weights::{self, Weights};
use massdecomp::alphabet;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Exist(args) => {
            let (decomposer, _labels) = build_decomposer(&args)?;
            println!("{}", decomposer.exist(args.mass));
        }
        Command::Decompose(args) => {
            let (decomposer, labels) = build_decomposer(&args)?;
            let one = decomposer.get_one(args.mass);
            if one.is_empty() {
                println!("no decomposition for mass {}", args.mass);
            } else {
                println!("{}", format_decomposition(&labels, &one));
            }
        }
        Command::Enumerate(args) => {
            let (decomposer, labels) = build_decomposer(&args)?;
            let all = decomposer.get_all(args.mass);
            if all.is_empty() {
                println!("no decompositions for mass {}", args.mass);
            } else {
                for d in &all {
                    println!("{}", format_decomposition(&labels, d));
                }
                eprintln!("{} total", all.len());
            }
        }
        Command::Count(args) => {
            let (decomposer, _labels) = build_decomposer(&args)?;
            println!("{}", decomposer.count(args.mass));
        }
    }

    Ok(())
}

/// Loads the alphabet file, builds the decomposer, and returns it
/// alongside per-weight display labels (element names sharing a weight
/// are joined with '/', e.g. "L/I" for Leucine and Isoleucine).
fn build_decomposer(args: &MassArgs) -> Result<(Decomposer, Vec<String>)> {
    let loaded = alphabet::parser::load_file(&args.alphabet, args.precision)?;

    let mut masses: Vec<weights::Mass> = loaded.iter().map(|e| e.mass).collect();
    masses.sort_unstable();
    masses.dedup();

    let labels: Vec<String> = masses
        .iter()
        .map(|&m| {
            let mut names: Vec<&str> = loaded
                .iter()
                .filter(|e| e.mass == m)
                .map(|e| e.name.as_str())
                .collect();
            names.sort_unstable();
            names.join("/")
        })
        .collect();

    let weights = Weights::new(masses)?;
    Ok((Decomposer::new(weights), labels))
}

fn format_decomposition(labels: &[String], decomposition: &[weights::Count]) -> String {
    decomposition
        .iter()
        .enumerate()
        .filter(|(_, &c)| c > 0)
        .map(|(i, &c)| format!("{}x{}", c, labels[i]))
        .collect::<Vec<_>>()
        .join(" + ")
}
