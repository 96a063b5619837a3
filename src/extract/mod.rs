use scraper::{Html, Selector};
use std::num::ParseIntError;
use thiserror::Error;

/// Number of cells a data row must have to be kept. The page mixes header,
/// footer and notice rows into its tables; cell count is the only thing
/// that tells the per-state rows apart.
const DATA_ROW_CELLS: usize = 5;

/// One per-state record scraped from the page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStat {
    pub serial: String,
    pub name: String,
    pub confirmed: u64,
    pub recovered: u64,
    pub deceased: u64,
}

/// Column sums over a table of stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub confirmed: u64,
    pub recovered: u64,
    pub deceased: u64,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("row {row} ({name}): column {column} has non-numeric value {value:?}")]
    BadCount {
        row: usize,
        name: String,
        column: &'static str,
        value: String,
        source: ParseIntError,
    },
}

/// Scan every `<tr>` on the page, keep the rows with exactly five `<td>`
/// cells, and coerce the three count columns to integers.
///
/// The scan is deliberately unscoped to any particular table, matching the
/// source page's layout; if the page ever grows an unrelated five-cell
/// table, those rows would be picked up too. Cell text has literal newlines
/// removed and is otherwise untouched; count cells tolerate surrounding
/// whitespace, but a placeholder like "-" fails the whole extraction.
pub fn extract_stats(html: &str) -> Result<Vec<RegionStat>, ExtractError> {
    let tr = Selector::parse("tr").expect("invalid tr selector");
    let td = Selector::parse("td").expect("invalid td selector");

    let doc = Html::parse_document(html);
    let mut stats = Vec::new();

    for row in doc.select(&tr) {
        let cells: Vec<String> = row
            .select(&td)
            .map(|cell| cell.text().collect::<String>().replace('\n', ""))
            .collect();
        if cells.len() != DATA_ROW_CELLS {
            continue;
        }

        let row_no = stats.len();
        let parse = |column: &'static str, value: &str| -> Result<u64, ExtractError> {
            // surrounding whitespace is fine, anything else is not
            value.trim().parse().map_err(|source| ExtractError::BadCount {
                row: row_no,
                name: cells[1].clone(),
                column,
                value: value.to_string(),
                source,
            })
        };

        stats.push(RegionStat {
            serial: cells[0].clone(),
            name: cells[1].clone(),
            confirmed: parse("Confirmed", &cells[2])?,
            recovered: parse("Recovered", &cells[3])?,
            deceased: parse("Deceased", &cells[4])?,
        });
    }

    Ok(stats)
}

/// Sum the three count columns. All zeros for an empty table.
pub fn totals(stats: &[RegionStat]) -> Totals {
    stats.iter().fold(Totals::default(), |acc, s| Totals {
        confirmed: acc.confirmed + s.confirmed,
        recovered: acc.recovered + s.recovered,
        deceased: acc.deceased + s.deceased,
    })
}
