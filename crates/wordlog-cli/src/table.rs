//! Plain-text table rendering for query results.

use wordlog_core::{event::ReviewEvent, index::ReviewRow};

/// Print listing rows with the standard five columns.
pub fn print_rows(rows: &[ReviewRow]) {
  let header = ["No.", "Term", "Date", "Count", "State"];
  let cells: Vec<Vec<String>> = rows
    .iter()
    .enumerate()
    .map(|(i, row)| {
      vec![
        (i + 1).to_string(),
        row.term.clone(),
        row.timestamp.clone(),
        row.count.to_string(),
        row.outcome.label().to_owned(),
      ]
    })
    .collect();
  print!("{}", render(&header, &cells));
}

/// Print one term's full history, headed by the term itself.
pub fn print_history(term: &str, events: &[ReviewEvent]) {
  println!("{term}");
  let header = ["Date", "State"];
  let cells: Vec<Vec<String>> = events
    .iter()
    .map(|e| vec![e.timestamp.clone(), e.outcome.label().to_owned()])
    .collect();
  print!("{}", render(&header, &cells));
}

/// Lay out a header and rows as space-padded columns.
fn render(header: &[&str], rows: &[Vec<String>]) -> String {
  let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
  for row in rows {
    for (width, cell) in widths.iter_mut().zip(row) {
      *width = (*width).max(cell.chars().count());
    }
  }

  let mut out = String::new();
  render_line(&mut out, &widths, header.iter().copied());
  for row in rows {
    render_line(&mut out, &widths, row.iter().map(String::as_str));
  }
  out
}

fn render_line<'a>(
  out: &mut String,
  widths: &[usize],
  cells: impl Iterator<Item = &'a str>,
) {
  let mut parts = Vec::with_capacity(widths.len());
  for (cell, &width) in cells.zip(widths) {
    parts.push(format!("{cell:<width$}"));
  }
  out.push_str(parts.join("  ").trim_end());
  out.push('\n');
}
