use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::io::Read;

#[derive(Debug, Clone)]
pub struct CsvData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

pub fn read_csv<R: Read>(input: R) -> Result<CsvData> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.context("Failed to read CSV record")?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(anyhow!("CSV must contain at least one data row"));
    }

    Ok(CsvData { headers, rows })
}

pub fn parse_column_selector(input: &str) -> ColumnSelector {
    match input.parse::<usize>() {
        Ok(index) => ColumnSelector::Index(index),
        Err(_) => ColumnSelector::Name(input.to_string()),
    }
}

fn resolve_column(data: &CsvData, selector: ColumnSelector) -> Result<(usize, String)> {
    match selector {
        ColumnSelector::Index(idx) => {
            if idx >= data.headers.len() {
                return Err(anyhow!(
                    "Column index {} out of bounds (available columns: {})",
                    idx,
                    data.headers.len()
                ));
            }
            Ok((idx, data.headers[idx].clone()))
        }
        ColumnSelector::Name(name) => {
            let idx = data
                .headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(&name))
                .ok_or_else(|| {
                    anyhow!(
                        "Column '{}' not found. Available columns: {}",
                        name,
                        data.headers.join(", ")
                    )
                })?;
            Ok((idx, data.headers[idx].clone()))
        }
    }
}

/// Distinct, non-empty values of a column in first-seen order.
/// Values are trimmed; comparison is case-sensitive.
pub fn extract_group_names(data: &CsvData, selector: ColumnSelector) -> Result<(String, Vec<String>)> {
    let (column_index, column_name) = resolve_column(data, selector)?;

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for (row_idx, row) in data.rows.iter().enumerate() {
        let value = row.get(column_index).ok_or_else(|| {
            anyhow!(
                "Row {} has only {} columns, expected at least {}",
                row_idx + 1,
                row.len(),
                column_index + 1
            )
        })?;

        let value = value.trim();
        if !value.is_empty() && seen.insert(value.to_string()) {
            names.push(value.to_string());
        }
    }

    Ok((column_name, names))
}
