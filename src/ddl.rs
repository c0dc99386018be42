use std::fmt::Write as _;
use std::path::Path;

use crate::ident::{escape_literal, quote_identifier};
use crate::infer::ColumnType;

/// One column of the generated table, in header order.
#[derive(Debug, Clone)]
pub struct Column {
    pub source_name: String,
    pub identifier: String,
    pub column_type: ColumnType,
}

/// Statement-level settings for [`render_statements`].
#[derive(Debug)]
pub struct DdlOptions<'a> {
    pub schema: Option<&'a str>,
    pub table: &'a str,
    pub server: &'a str,
    pub filename: &'a str,
    pub format: &'a str,
    pub delimiter: u8,
    pub null_sentinel: Option<&'a str>,
    pub drop_first: bool,
}

/// Renders the optional DROP plus the CREATE FOREIGN TABLE statement.
/// Every identifier and literal is quoted/escaped here; callers pass raw
/// strings.
pub fn render_statements(columns: &[Column], options: &DdlOptions) -> String {
    let qualified = qualified_name(options.schema, options.table);
    let mut output = String::new();
    if options.drop_first {
        let _ = writeln!(output, "DROP FOREIGN TABLE IF EXISTS {qualified};");
    }
    let _ = writeln!(output, "CREATE FOREIGN TABLE {qualified} (");
    let body = columns
        .iter()
        .map(|column| {
            format!(
                "  {} {}",
                quote_identifier(&column.identifier),
                column.column_type.sql_keyword()
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");
    let _ = writeln!(output, "{body}");
    let _ = writeln!(output, ")");
    let _ = writeln!(output, "SERVER {}", quote_identifier(options.server));
    let delimiter = char::from(options.delimiter).to_string();
    let mut clauses = format!(
        "filename '{}', format '{}', delimiter '{}', header 'true'",
        escape_literal(options.filename),
        escape_literal(options.format),
        escape_literal(&delimiter),
    );
    if let Some(null) = options.null_sentinel {
        let _ = write!(clauses, ", null '{}'", escape_literal(null));
    }
    let _ = writeln!(output, "OPTIONS ({clauses});");
    output
}

fn qualified_name(schema: Option<&str>, table: &str) -> String {
    match schema {
        Some(schema) => format!("{}.{}", quote_identifier(schema), quote_identifier(table)),
        None => quote_identifier(table),
    }
}

/// Table name implied by the input file: base name minus the final
/// dot-delimited extension segment, interior dots preserved.
pub fn derive_table_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
    let segments: Vec<&str> = base.split('.').collect();
    if segments.len() > 1 {
        segments[..segments.len() - 1].join(".")
    } else {
        base
    }
}
