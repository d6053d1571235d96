use std::fmt;
use std::fs;
use std::path::Path;

/// Leading tokens on each WMM.COF line (degree and order indices).
const INDEX_COLUMNS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    pub rows: Vec<Vec<f64>>,
    pub width: usize,
}

impl CoefficientTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug)]
pub enum ParseError {
    IoError(std::io::Error),
    ShortLine(String),
    InvalidValue(String),
    RaggedRow(String),
    EmptyInput,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError(e) => write!(f, "IO error: {}", e),
            ParseError::ShortLine(s) => write!(f, "Line too short: {}", s),
            ParseError::InvalidValue(s) => write!(f, "Invalid value: {}", s),
            ParseError::RaggedRow(s) => write!(f, "Ragged row: {}", s),
            ParseError::EmptyInput => write!(f, "No coefficient rows in input"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::IoError(e)
    }
}

fn parse_values(tokens: &[&str], line_no: usize) -> Result<Vec<f64>, ParseError> {
    tokens
        .iter()
        .map(|t| {
            t.parse().map_err(|_| {
                ParseError::InvalidValue(format!("line {}: '{}'", line_no, t))
            })
        })
        .collect()
}

pub fn parse_wmm(content: &str) -> Result<CoefficientTable, ParseError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() <= INDEX_COLUMNS {
            return Err(ParseError::ShortLine(format!(
                "line {}: expected at least {} tokens, found {}",
                line_no,
                INDEX_COLUMNS + 1,
                tokens.len()
            )));
        }

        let row = parse_values(&tokens[INDEX_COLUMNS..], line_no)?;
        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(ParseError::RaggedRow(format!(
                    "line {}: expected {} values, found {}",
                    line_no,
                    w,
                    row.len()
                )));
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    let width = width.ok_or(ParseError::EmptyInput)?;
    Ok(CoefficientTable { rows, width })
}

pub fn parse_wmm_file(path: &Path) -> Result<CoefficientTable, ParseError> {
    let content = fs::read_to_string(path)?;
    parse_wmm(&content)
}
