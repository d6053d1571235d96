use std::fmt;
use std::fs;
use std::path::Path;

/// Tokens on a coefficient line ahead of the values: the `g`/`h` family tag
/// and the integer degree and order of the spherical-harmonic term.
const VALUE_COLUMN: usize = 3;

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

/// The `g` (cosine) and `h` (sine) coefficient families, reshaped to the
/// same dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct IgrfTables {
    pub g: CoefficientTable,
    pub h: CoefficientTable,
}

#[derive(Debug)]
pub enum ParseError {
    IoError(std::io::Error),
    ShortLine(String),
    InvalidIndex(String),
    InvalidValue(String),
    RaggedRow(String),
    EmptyInput,
    MissingZeroOrderPad,
    MisplacedPad(String),
    TableMismatch(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError(e) => write!(f, "IO error: {}", e),
            ParseError::ShortLine(s) => write!(f, "Line too short: {}", s),
            ParseError::InvalidIndex(s) => write!(f, "Invalid degree/order index: {}", s),
            ParseError::InvalidValue(s) => write!(f, "Invalid value: {}", s),
            ParseError::RaggedRow(s) => write!(f, "Ragged row: {}", s),
            ParseError::EmptyInput => write!(f, "No coefficient rows in input"),
            ParseError::MissingZeroOrderPad => {
                write!(f, "No h line with degree == order; nothing to relocate")
            }
            ParseError::MisplacedPad(s) => write!(f, "Misplaced zero-order pad: {}", s),
            ParseError::TableMismatch(s) => write!(f, "g/h table mismatch: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::IoError(e)
    }
}

/// An `h` term only exists for order >= 1 (the order-0 sine component is
/// identically zero), so a file's `h` block for each degree ends at
/// order == degree. That equality marks where the degree's zero pad goes.
fn is_zero_order(degree: u32, order: u32) -> bool {
    degree == order
}

fn parse_index(token: &str, line_no: usize) -> Result<u32, ParseError> {
    token.parse().map_err(|_| {
        ParseError::InvalidIndex(format!("line {}: '{}'", line_no, token))
    })
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

pub fn parse_igrf(content: &str) -> Result<IgrfTables, ParseError> {
    let mut g_rows: Vec<Vec<f64>> = Vec::new();
    let mut h_rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;
    let mut last_pad: Option<usize> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        // IGRF.COF opens with header lines; anything not tagged g/h is not
        // a coefficient line.
        let tag = match tokens.first() {
            Some(&"g") => 'g',
            Some(&"h") => 'h',
            _ => continue,
        };

        if tokens.len() <= VALUE_COLUMN {
            return Err(ParseError::ShortLine(format!(
                "line {}: expected at least {} tokens, found {}",
                line_no,
                VALUE_COLUMN + 1,
                tokens.len()
            )));
        }

        let degree = parse_index(tokens[1], line_no)?;
        let order = parse_index(tokens[2], line_no)?;
        let row = parse_values(&tokens[VALUE_COLUMN..], line_no)?;

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

        match tag {
            'g' => g_rows.push(row),
            _ => {
                let pad_width = row.len();
                h_rows.push(row);
                if is_zero_order(degree, order) {
                    // The pad stands in for the next degree's missing
                    // h(n, 0) row, keeping h index-aligned with g.
                    h_rows.push(vec![0.0; pad_width]);
                    last_pad = Some(h_rows.len() - 1);
                }
            }
        }
    }

    let width = width.ok_or(ParseError::EmptyInput)?;

    // The pad emitted after the final degree has no following degree to
    // serve; it belongs at the head, as the first degree's h(1, 0) entry.
    // One controlled move from the last padding position to index 0.
    let pad_index = last_pad.ok_or(ParseError::MissingZeroOrderPad)?;
    if pad_index != h_rows.len() - 1 {
        return Err(ParseError::MisplacedPad(format!(
            "last pad at row {} of {}",
            pad_index,
            h_rows.len()
        )));
    }
    let pad = h_rows.pop().ok_or(ParseError::MissingZeroOrderPad)?;
    h_rows.insert(0, pad);

    if g_rows.len() != h_rows.len() {
        return Err(ParseError::TableMismatch(format!(
            "{} g rows, {} h rows after reshape",
            g_rows.len(),
            h_rows.len()
        )));
    }

    Ok(IgrfTables {
        g: CoefficientTable {
            rows: g_rows,
            width,
        },
        h: CoefficientTable {
            rows: h_rows,
            width,
        },
    })
}

pub fn parse_igrf_file(path: &Path) -> Result<IgrfTables, ParseError> {
    let content = fs::read_to_string(path)?;
    parse_igrf(&content)
}
