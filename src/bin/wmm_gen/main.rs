use clap::Parser;

mod generate;
mod parser;

use generate::render_table;
use parser::parse_wmm_file;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wmm-gen")]
#[command(about = "WMM coefficient file to Rust array literal converter")]
#[command(version)]
struct Cli {
    /// WMM coefficient file to convert
    #[arg(default_value = "WMM.COF")]
    input: PathBuf,
}

fn run(input: &Path) -> Result<String, String> {
    let table =
        parse_wmm_file(input).map_err(|e| format!("{}: {}", input.display(), e))?;
    Ok(render_table("WMM_COEFFICIENTS", &table))
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_run_emits_declaration_and_literal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("WMM.COF");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "1  0  -29404.5       0.0        6.7        0.0").unwrap();
        writeln!(file, "1  1   -1450.7    4652.9        7.7      -25.1").unwrap();

        let out = run(&path).unwrap();
        assert!(out.starts_with("const WMM_COEFFICIENTS: [[f64; 4]; 2] =\n"));
        assert!(out.contains("[[-29404.5, 0.0, 6.7, 0.0], [-1450.7, 4652.9, 7.7, -25.1]];"));
    }

    #[test]
    fn test_run_missing_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("WMM.COF");

        let result = run(&path);
        assert!(result.is_err());
        let msg = result.unwrap_err();
        assert!(msg.contains("WMM.COF"));
        assert!(msg.contains("IO error"));
    }

    #[test]
    fn test_run_malformed_file_reports_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("WMM.COF");
        std::fs::write(&path, "1 0 1.0 2.0\n1 1 bogus 4.0\n").unwrap();

        let result = run(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("line 2"));
    }

    #[test]
    fn test_cli_default_input_name() {
        let cli = Cli::parse_from(["wmm-gen"]);
        assert_eq!(cli.input, PathBuf::from("WMM.COF"));
    }

    #[test]
    fn test_cli_explicit_input_path() {
        let cli = Cli::parse_from(["wmm-gen", "/tmp/other.cof"]);
        assert_eq!(cli.input, PathBuf::from("/tmp/other.cof"));
    }
}
