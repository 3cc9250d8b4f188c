use crate::row_renderer::Cell;
use crate::row_renderer::Column;
use crate::row_renderer::DisplayRow;
use crate::row_renderer::Tone;
use itertools::Itertools;
use unicode_width::UnicodeWidthStr;
use yansi::Paint;

const PADDING: usize = 1;

/// Renders rows as a bordered box-drawing table.
pub struct TablePrinter {
    pub colored: bool,
}

impl TablePrinter {
    pub fn render(&self, columns: &[Column], rows: &[DisplayRow]) -> String {
        let header: Vec<_> = columns
            .iter()
            .map(|column| Cell::plain(column.to_string()))
            .collect();
        let widths: Vec<usize> = (0..columns.len())
            .map(|index| {
                std::iter::once(&header)
                    .chain(rows)
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.text.width())
                    .max()
                    .unwrap_or_default()
                    + PADDING * 2
            })
            .collect();

        let separator = border(&widths, '├', '┼', '┤');
        let mut lines = vec![border(&widths, '┌', '┬', '┐')];
        lines.push(self.render_line(&header, &widths, true));
        for row in rows {
            lines.push(separator.clone());
            lines.push(self.render_line(row, &widths, false));
        }
        lines.push(border(&widths, '└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_line(&self, cells: &[Cell], widths: &[usize], is_header: bool) -> String {
        let content = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let (text, tone) = cells
                    .get(index)
                    .map_or(("", Tone::Plain), |cell| (cell.text.as_str(), cell.tone));
                let fill = width - PADDING * 2 - text.width();
                format!(
                    "{pad}{}{}{pad}",
                    self.paint(text, tone, is_header),
                    " ".repeat(fill),
                    pad = " ".repeat(PADDING)
                )
            })
            .join("│");
        format!("│{}│", content)
    }

    fn paint(&self, text: &str, tone: Tone, is_header: bool) -> String {
        if !self.colored {
            return text.into();
        }
        match (is_header, tone) {
            (true, _) => Paint::yellow(text).to_string(),
            (false, Tone::Positive) => Paint::green(text).to_string(),
            (false, Tone::Negative) => Paint::red(text).to_string(),
            (false, Tone::Plain | Tone::NotAvailable) => text.into(),
        }
    }
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments = widths.iter().map(|width| "─".repeat(*width)).join(&middle.to_string());
    format!("{}{}{}", left, segments, right)
}
