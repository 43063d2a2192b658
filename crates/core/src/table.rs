//! Plain-text table rendering for command output.

use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Bordered grid.
    #[default]
    Default,
    /// No borders, columns separated by spaces.
    Compact,
}

/// Header plus rows of display strings. Cells may span several lines.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    style: TableStyle,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            style: TableStyle::Default,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self, columns: usize) -> Vec<usize> {
        (0..columns)
            .map(|column| {
                std::iter::once(&self.headers)
                    .chain(self.rows.iter())
                    .filter_map(|row| row.get(column))
                    .flat_map(|cell| cell.lines())
                    .map(|line| line.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    #[must_use]
    pub fn render(&self) -> String {
        let columns = self.column_count();
        if columns == 0 {
            return String::new();
        }

        let widths = self.column_widths(columns);
        let mut lines = Vec::new();
        let border = self.border(&widths);

        if let Some(border) = &border {
            lines.push(border.clone());
        }

        if !self.headers.is_empty() {
            lines.extend(self.render_row(&self.headers, &widths));
            match &border {
                Some(border) => lines.push(border.clone()),
                None => lines.push(widths.iter().map(|width| "-".repeat(*width)).join("  ")),
            }
        }

        for row in &self.rows {
            lines.extend(self.render_row(row, &widths));
        }

        if let Some(border) = border {
            if !self.rows.is_empty() || self.headers.is_empty() {
                lines.push(border);
            }
        }

        lines.join("\n")
    }

    fn border(&self, widths: &[usize]) -> Option<String> {
        match self.style {
            TableStyle::Default => Some(format!(
                "+{}+",
                widths.iter().map(|width| "-".repeat(width + 2)).join("+")
            )),
            TableStyle::Compact => None,
        }
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> Vec<String> {
        let cell_lines: Vec<Vec<&str>> = (0..widths.len())
            .map(|column| {
                row.get(column)
                    .map(|cell| cell.lines().collect())
                    .unwrap_or_default()
            })
            .collect();
        let height = cell_lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

        (0..height)
            .map(|line_index| {
                let mut cells = cell_lines.iter().zip(widths).map(|(lines, width)| {
                    let text = lines.get(line_index).copied().unwrap_or("");
                    let padding = width - text.chars().count();
                    format!("{text}{}", " ".repeat(padding))
                });

                match self.style {
                    TableStyle::Default => format!("| {} |", cells.join(" | ")),
                    TableStyle::Compact => cells.join("  ").trim_end().to_string(),
                }
            })
            .collect()
    }
}
