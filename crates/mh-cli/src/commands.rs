use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use mh_cli::config::RunConfig;
use mh_cli::pipeline::{IngestResult, ingest, output, transform};
use mh_model::UNKNOWN_DATING;
use mh_transform::classifier::{EXCLUDE_KEYWORDS, INCLUDE_KEYWORDS};

use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_keywords() {
    let mut table = Table::new();
    table.set_header(vec!["Keyword", "Effect"]);
    apply_table_style(&mut table);
    for keyword in EXCLUDE_KEYWORDS {
        table.add_row(vec![*keyword, "exclude"]);
    }
    for keyword in INCLUDE_KEYWORDS {
        table.add_row(vec![*keyword, "include"]);
    }
    println!("{table}");
}

pub fn run_convert(config: &RunConfig) -> Result<RunResult> {
    let span = info_span!("convert", input = %config.input.display());
    let _guard = span.enter();

    let IngestResult {
        table,
        missing_columns,
    } = ingest(&config.input)?;

    println!("Detected columns:");
    println!("{:?}", table.headers.columns);

    let extraction = transform(&table);
    let written = output(&config.output, &extraction, config.dry_run)?;

    let undated_records = extraction
        .records
        .iter()
        .filter(|record| record.siecles == UNKNOWN_DATING)
        .count();

    Ok(RunResult {
        input: config.input.clone(),
        output: written,
        total_rows: extraction.total_rows,
        kept_rows: extraction.kept_rows(),
        excluded_rows: extraction.excluded_rows,
        unmatched_rows: extraction.unmatched_rows,
        undated_records,
        missing_columns,
    })
}
