//! Grid table rendering and footnote wrapping.
//!
//! The grid itself comes from a [`GridFormatter`]. Footnotes are then wrapped
//! inside the grid's width: each line is padded to one character short of the
//! bottom border and closed with the formatter's right border character.
//!
//! ```text
//! +-------+-----+
//! | Name  | Age |
//! +=======+=====+
//! | Alice | 30  |
//! +-------+-----+
//! | - Ages as  |
//! |    of 2020 |
//! ```

use crate::error::{Error, Result};
use crate::model::Table;

/// Narrowest column content width produced by [`RstGridTable`].
const MIN_COLUMN_WIDTH: usize = 3;

/// Indentation of a grid inside a `.. table::` directive.
const DIRECTIVE_INDENT: &str = "    ";

/// Renders a header and rows as a fixed-width text grid.
pub trait GridFormatter {
    /// Render the grid. The last line must be the bottom border row; an empty
    /// result means there is nothing to draw.
    ///
    /// Footnotes can only be wrapped when the border row, excluding leading
    /// indentation, is at least 7 characters wide.
    fn format(&self, header: Option<&[String]>, rows: &[Vec<String>], title: Option<&str>)
        -> Vec<String>;

    /// Character opening a row on the left.
    fn left_border(&self) -> char;

    /// Character closing a row on the right.
    fn right_border(&self) -> char;
}

/// reStructuredText grid table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RstGridTable;

impl RstGridTable {
    fn border(widths: &[usize], fill: char) -> String {
        let mut line = String::from("+");
        for &width in widths {
            line.extend(std::iter::repeat(fill).take(width + 2));
            line.push('+');
        }
        line
    }

    fn row(widths: &[usize], cells: &[String]) -> String {
        let mut line = String::from("|");
        for (i, &width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(|c| cell_text(c)).unwrap_or_default();
            line.push(' ');
            line.push_str(&cell);
            line.extend(std::iter::repeat(' ').take(width - cell.chars().count()));
            line.push_str(" |");
        }
        line
    }
}

impl GridFormatter for RstGridTable {
    fn format(
        &self,
        header: Option<&[String]>,
        rows: &[Vec<String>],
        title: Option<&str>,
    ) -> Vec<String> {
        let header_cols = header.map(<[String]>::len).unwrap_or(0);
        let col_count = rows.iter().map(Vec::len).fold(header_cols, usize::max);
        if col_count == 0 {
            return Vec::new();
        }

        let mut widths = vec![MIN_COLUMN_WIDTH; col_count];
        for cells in header.into_iter().chain(rows.iter().map(Vec::as_slice)) {
            for (i, cell) in cells.iter().enumerate() {
                widths[i] = widths[i].max(cell_text(cell).chars().count());
            }
        }

        let mut grid = vec![Self::border(&widths, '-')];
        if let Some(header) = header {
            grid.push(Self::row(&widths, header));
            grid.push(Self::border(&widths, '='));
        }
        for cells in rows {
            grid.push(Self::row(&widths, cells));
            grid.push(Self::border(&widths, '-'));
        }

        match title {
            Some(title) if !title.is_empty() => {
                let mut lines = vec![format!(".. table:: {}", title), String::new()];
                lines.extend(grid.into_iter().map(|l| format!("{}{}", DIRECTIVE_INDENT, l)));
                lines
            }
            _ => grid,
        }
    }

    fn left_border(&self) -> char {
        '|'
    }

    fn right_border(&self) -> char {
        '|'
    }
}

/// Cells and footnotes are single-line.
fn cell_text(cell: &str) -> String {
    cell.replace(['\r', '\n'], " ")
}

/// A rendered table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBlock {
    /// Grid lines followed by footnote lines
    pub lines: Vec<String>,
    /// Number of trailing footnote lines
    pub footnote_lines: usize,
}

/// Render a table and its wrapped footnotes.
///
/// Fails with [`Error::Render`] when the grid is too narrow to hold footnotes.
pub fn render_table(table: &Table, formatter: &dyn GridFormatter) -> Result<TableBlock> {
    let mut lines = formatter.format(
        table.header.as_deref(),
        &table.rows,
        table.title.as_deref(),
    );

    let Some(border) = lines.last().cloned() else {
        if !table.footnotes.is_empty() {
            log::warn!(
                "Table has no header or rows; writing {} footnotes as a list",
                table.footnotes.len()
            );
        }
        let lines: Vec<String> = table
            .footnotes
            .iter()
            .map(|f| format!("- {}", cell_text(f)))
            .collect();
        let footnote_lines = lines.len();
        return Ok(TableBlock {
            lines,
            footnote_lines,
        });
    };

    let footnotes = wrap_footnotes(
        &border,
        &table.footnotes,
        formatter.left_border(),
        formatter.right_border(),
    )?;
    let footnote_lines = footnotes.len();
    lines.extend(footnotes);

    Ok(TableBlock {
        lines,
        footnote_lines,
    })
}

/// Wrap footnotes to fit inside `border`.
///
/// With border width `W`, every line is `W - 1` characters before `right` is
/// appended. The first line of a footnote starts with `left - `, continuation
/// lines with `left` and four spaces. Leading indentation of the border is
/// repeated on every line. Line breaks inside a footnote become spaces.
///
/// Fails with [`Error::Render`] when `border` leaves no room for footnote
/// text after the continuation prefix.
pub fn wrap_footnotes(
    border: &str,
    footnotes: &[String],
    left: char,
    right: char,
) -> Result<Vec<String>> {
    let indent: String = border.chars().take_while(|c| c.is_whitespace()).collect();
    let inner = border.chars().count().saturating_sub(1);

    let first_prefix = format!("{}{} - ", indent, left);
    let cont_prefix = format!("{}{}    ", indent, left);
    let first_width = inner.saturating_sub(first_prefix.chars().count());
    let cont_width = inner.saturating_sub(cont_prefix.chars().count());

    if cont_width == 0 && !footnotes.is_empty() {
        return Err(Error::Render(format!(
            "table border {:?} is too narrow for footnotes",
            border
        )));
    }

    let mut lines = Vec::new();
    for footnote in footnotes {
        let chars: Vec<char> = cell_text(footnote).chars().collect();
        let mut cursor = 0;
        let mut prefix = &first_prefix;
        let mut width = first_width;

        loop {
            let end = (cursor + width).min(chars.len());
            let mut line = prefix.clone();
            line.extend(&chars[cursor..end]);
            let len = line.chars().count();
            if len < inner {
                line.extend(std::iter::repeat(' ').take(inner - len));
            }
            line.push(right);
            lines.push(line);

            cursor = end;
            if cursor >= chars.len() {
                break;
            }
            prefix = &cont_prefix;
            width = cont_width;
        }
    }
    Ok(lines)
}
