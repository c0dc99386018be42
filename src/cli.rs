use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Generate foreign-table DDL from a delimited file's header and first row",
    long_about = None
)]
pub struct Cli {
    /// Input delimited file to inspect
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Foreign server the table is declared against
    #[arg(short = 's', long = "server")]
    pub server: String,
    /// Table name (defaults to the input file's base name)
    #[arg(short = 't', long = "table")]
    pub table: Option<String>,
    /// Schema to qualify the table name with
    #[arg(long)]
    pub schema: Option<String>,
    /// Format label recorded in the OPTIONS clause
    #[arg(long, default_value = "csv")]
    pub format: String,
    /// Field delimiter (supports ',', 'tab', '\t', ';', '|'; .tsv inputs default to tab)
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Detect integer columns
    #[arg(long)]
    pub integer: bool,
    /// Detect numeric (decimal) columns
    #[arg(long)]
    pub numeric: bool,
    /// Detect timestamp columns
    #[arg(long)]
    pub timestamp: bool,
    /// Declare detected integer columns as bigint
    #[arg(long = "big-integer")]
    pub big_integer: bool,
    /// Replace non-alphanumeric characters in column and table names with underscores
    #[arg(long = "clean-names")]
    pub clean_names: bool,
    /// Lowercase cleaned names (requires --clean-names to take effect)
    #[arg(long = "lowercase-names")]
    pub lowercase_names: bool,
    /// Emit DROP FOREIGN TABLE IF EXISTS before the CREATE statement
    #[arg(long = "drop-table")]
    pub drop_table: bool,
    /// Value the foreign table should read as SQL NULL
    #[arg(long = "null")]
    pub null_sentinel: Option<String>,
    /// Comma-separated columns (raw or cleaned names) to declare as text regardless of inference
    #[arg(long = "skip-columns", value_delimiter = ',')]
    pub skip_columns: Vec<String>,
    /// Output file for the statements (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "TAB" | "\t" | "\\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
