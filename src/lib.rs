pub mod cli;
pub mod ddl;
pub mod ident;
pub mod infer;
pub mod io_utils;

use std::{env, io::Write as _, sync::OnceLock};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::{
    cli::Cli,
    ddl::{Column, DdlOptions},
    ident::Sanitizer,
    infer::{ColumnType, InferenceOptions, TypeInference},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("csv_fdw", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    generate(&cli)
}

/// Reads the header and first data row, infers a type per column, and writes
/// the resulting statements to stdout or the configured output file.
pub fn generate(args: &Cli) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    info!(
        "Inspecting '{}' with delimiter '{}'",
        args.input.display(),
        printable_delimiter(delimiter)
    );

    let mut reader = io_utils::open_csv_reader_from_path(&args.input, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)?;
    let mut record = csv::ByteRecord::new();
    if !reader
        .read_byte_record(&mut record)
        .with_context(|| format!("Reading first data row from {:?}", args.input))?
    {
        bail!("Input {:?} has no data row after the header", args.input);
    }
    let values = io_utils::decode_record(&record, encoding)?;

    let mut sanitizer = Sanitizer::new(args.lowercase_names);
    let columns = build_columns(args, &mut sanitizer, &headers, &values);
    let table = resolve_table_name(args, &mut sanitizer);

    let statements = ddl::render_statements(
        &columns,
        &DdlOptions {
            schema: args.schema.as_deref(),
            table: &table,
            server: &args.server,
            filename: &args.input.to_string_lossy(),
            format: &args.format,
            delimiter,
            null_sentinel: args.null_sentinel.as_deref(),
            drop_first: args.drop_table,
        },
    );

    let mut writer = io_utils::open_text_writer(args.output.as_deref())?;
    writer
        .write_all(statements.as_bytes())
        .context("Writing DDL statements")?;
    writer.flush().context("Flushing DDL output")?;

    info!(
        "Generated foreign-table DDL for {} column(s) from '{}'",
        columns.len(),
        args.input.display()
    );
    Ok(())
}

fn build_columns(
    args: &Cli,
    sanitizer: &mut Sanitizer,
    headers: &[String],
    values: &[String],
) -> Vec<Column> {
    let inference = TypeInference::new(InferenceOptions {
        timestamps: args.timestamp,
        integers: args.integer,
        numerics: args.numeric,
        big_integers: args.big_integer,
    });
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let identifier = if args.clean_names {
                sanitizer.sanitize(header)
            } else {
                ident::raw_identifier(header)
            };
            let skipped = args
                .skip_columns
                .iter()
                .any(|skip| skip == header || skip == &identifier);
            let column_type = if skipped {
                ColumnType::Text
            } else {
                let value = values.get(idx).map(String::as_str).unwrap_or_default();
                inference.classify(value)
            };
            let column = Column {
                source_name: header.clone(),
                identifier,
                column_type,
            };
            debug!(
                "Column '{}' -> {} {}",
                column.source_name,
                column.identifier,
                column.column_type.sql_keyword()
            );
            column
        })
        .collect()
}

fn resolve_table_name(args: &Cli, sanitizer: &mut Sanitizer) -> String {
    match &args.table {
        Some(name) => name.clone(),
        None => {
            let derived = ddl::derive_table_name(&args.input);
            if args.clean_names {
                sanitizer.sanitize(&derived)
            } else {
                derived
            }
        }
    }
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b',' => ",".to_string(),
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        other => (other as char).to_string(),
    }
}
