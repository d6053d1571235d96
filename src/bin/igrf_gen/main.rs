use clap::Parser;

mod generate;
mod parser;

use generate::render_tables;
use parser::parse_igrf_file;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "igrf-gen")]
#[command(about = "IGRF coefficient file to Rust array literal converter")]
#[command(version)]
struct Cli {
    /// IGRF coefficient file to convert
    #[arg(default_value = "IGRF.COF")]
    input: PathBuf,
}

fn run(input: &Path) -> Result<String, String> {
    let tables =
        parse_igrf_file(input).map_err(|e| format!("{}: {}", input.display(), e))?;
    Ok(render_tables(&tables))
}

fn main() {
    let cli = Cli::parse();

    match run(&cli.input) {
        Ok(literal) => print!("{}", literal),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
