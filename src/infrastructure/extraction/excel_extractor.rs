use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use crate::application::ports::{ExtractionError, Extractor};
use crate::domain::construction_heuristics::has_construction_keyword;
use crate::domain::{ExtractedFragment, ExtractedSection};

/// Reads `.xlsx` and legacy `.xls` workbooks from memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExcelExtractor;

#[async_trait]
impl Extractor for ExcelExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: Bytes) -> Result<Vec<ExtractedSection>, ExtractionError> {
        let worksheets = tokio::task::spawn_blocking(move || read_worksheets(data))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))??;

        tracing::info!(worksheets = worksheets.len(), "Workbook parsed");

        Ok(render_workbook(&worksheets))
    }
}

/// A worksheet's cells, or the reason calamine could not read them.
pub type WorksheetRange = Result<Range<Data>, String>;

/// Only an unreadable workbook fails; an unreadable sheet is reported in place.
fn read_worksheets(data: Bytes) -> Result<Vec<(String, WorksheetRange)>, ExtractionError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| ExtractionError::Package(format!("not a readable workbook: {e}")))?;

    let worksheets = workbook
        .sheet_names()
        .into_iter()
        .map(|name| {
            let range = workbook.worksheet_range(&name).map_err(|e| {
                tracing::warn!(worksheet = %name, error = %e, "Worksheet could not be read");
                e.to_string()
            });
            (name, range)
        })
        .collect();

    Ok(worksheets)
}

/// Worksheet contents in workbook order, followed by every keyword-bearing cell.
pub fn render_workbook(worksheets: &[(String, WorksheetRange)]) -> Vec<ExtractedSection> {
    let mut content = ExtractedSection::new("EXCEL WORKBOOK CONTENT");
    let mut construction = ExtractedSection::new("CONSTRUCTION DATA");

    for (name, range) in worksheets {
        content.push(ExtractedFragment::separator(format!("Worksheet: {name}")));

        let range = match range {
            Ok(range) => range,
            Err(reason) => {
                content.push_line(format!("Used Range: unreadable ({reason})"));
                continue;
            }
        };

        let Some(((first_row, first_col), (last_row, last_col))) = range.start().zip(range.end())
        else {
            content.push_line("Used Range: Empty");
            continue;
        };

        content.push_line(format!(
            "Used Range: {}",
            range_address((first_row, first_col), (last_row, last_col))
        ));

        for row in range.rows() {
            let cells: Vec<String> = row.iter().map(|c| c.to_string().trim().to_string()).collect();
            if cells.iter().all(String::is_empty) {
                continue;
            }
            content.push_line(cells.join(" | "));
        }

        let mut found = Vec::new();
        for (row, col, value) in range.used_cells() {
            let raw = value.to_string();
            if has_construction_keyword(&raw) {
                let address = cell_address(first_row + row as u32, first_col + col as u32);
                found.push(format!("Found construction data at {address}: {raw}"));
            }
        }

        if !found.is_empty() {
            construction.push_line(format!("Worksheet: {name}"));
            for line in found {
                construction.push_line(line);
            }
        }
    }

    if construction.is_empty() {
        construction.push_line("No construction keywords detected.");
    }

    vec![content, construction]
}

/// Zero-based `(row, column)` to `A1` notation.
pub fn cell_address(row: u32, column: u32) -> String {
    format!("{}{}", column_letters(column), row + 1)
}

fn range_address(start: (u32, u32), end: (u32, u32)) -> String {
    if start == end {
        return cell_address(start.0, start.1);
    }
    format!(
        "{}:{}",
        cell_address(start.0, start.1),
        cell_address(end.0, end.1)
    )
}

fn column_letters(column: u32) -> String {
    let mut letters = Vec::new();
    let mut n = column + 1;

    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(char::from(b'A' + rem));
        n = (n - 1) / 26;
    }

    letters.iter().rev().collect()
}
