//! Plain-text table output for command results.

use trendscope_core::Tabular;

/// Prints a [`Tabular`] as left-aligned columns.
pub(crate) fn print_table<T: Tabular + ?Sized>(table: &T) {
    print_rows(&table.headers(), &table.rows());
}

pub(crate) fn print_rows(headers: &[String], rows: &[Vec<String>]) {
    for line in render_lines(headers, rows) {
        println!("{line}");
    }
}

/// Header line (upper-cased) followed by one line per row, each column padded
/// to its widest cell plus two spaces.
fn render_lines(headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            rows.iter()
                .filter_map(|r| r.get(idx))
                .map(String::len)
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
                + 2
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<String>()
            .trim_end()
            .to_string()
    };

    let upper: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();
    std::iter::once(line(&upper))
        .chain(rows.iter().map(|r| line(r)))
        .collect()
}
