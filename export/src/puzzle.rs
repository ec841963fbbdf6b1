//! Maps parsed puzzle data into the HTML fragments the template consumes.

use crate::ExportError;
use puz_parse::Puzzle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Block marker in the `.puz` cell state.
pub const BLOCK: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

/// A single clue with its starting coordinates on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u16,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
    pub text: String,
}

/// Clue fragments and grid labels folded out of a clue list.
#[derive(Debug, Default, Clone)]
pub struct ClueSheet {
    /// `<p>{number}. {text}</p>` fragments for across clues, in clue order.
    pub html_across: Vec<String>,
    /// Same for down clues.
    pub html_down: Vec<String>,
    /// `"{row},{col}"` of each clue's starting cell, mapped to its number.
    pub grid_indexes: HashMap<String, String>,
}

impl ClueSheet {
    /// Fold an ordered clue list into HTML fragments and grid labels.
    ///
    /// Fragments keep the input order, partitioned by direction. When an
    /// across and a down clue start on the same cell the later insert wins;
    /// the label is the shared clue number either way.
    pub fn from_clues(clues: &[Clue]) -> Self {
        let mut sheet = ClueSheet::default();
        for clue in clues {
            let fragment = format!("<p>{}. {}</p>", clue.number, clue.text);
            match clue.direction {
                Direction::Across => sheet.html_across.push(fragment),
                Direction::Down => sheet.html_down.push(fragment),
            }
            sheet
                .grid_indexes
                .insert(format!("{},{}", clue.row, clue.col), clue.number.to_string());
        }
        sheet
    }
}

/// Split the flat cell-state string into rows of `width` cells.
///
/// A length that is not an exact multiple of `width` means the source grid
/// data is broken, and downstream indexing would silently misalign, so it is
/// rejected here instead.
pub fn split_rows(state: &str, width: usize) -> Result<Vec<&str>, ExportError> {
    if width == 0 || state.len() % width != 0 {
        return Err(ExportError::GridShape {
            len: state.len(),
            width,
        });
    }
    Ok((0..state.len() / width)
        .map(|row| &state[row * width..(row + 1) * width])
        .collect())
}

/// Derive clue records from the parsed puzzle.
///
/// `.puz` stores clue text keyed by number but not where each clue starts,
/// so the standard numbering scan is replayed over the grid: cells are
/// visited row-major and numbered when they start an across or a down run,
/// then matched with the clue text stored under that number.
pub fn number_clues(puzzle: &Puzzle) -> Result<Vec<Clue>, ExportError> {
    let width = puzzle.info.width as usize;
    let state = puzzle.grid.blank.concat();
    let rows = split_rows(&state, width)?;
    let height = rows.len();
    let block = |row: usize, col: usize| rows[row].as_bytes()[col] == BLOCK as u8;

    let mut clues = Vec::new();
    let mut number: u16 = 0;
    for row in 0..height {
        for col in 0..width {
            if block(row, col) {
                continue;
            }
            let starts_across =
                (col == 0 || block(row, col - 1)) && col + 1 < width && !block(row, col + 1);
            let starts_down =
                (row == 0 || block(row - 1, col)) && row + 1 < height && !block(row + 1, col);
            if !starts_across && !starts_down {
                continue;
            }

            number += 1;
            if starts_across {
                if let Some(text) = puzzle.clues.across.get(&number) {
                    clues.push(Clue {
                        number,
                        direction: Direction::Across,
                        row,
                        col,
                        text: text.clone(),
                    });
                }
            }
            if starts_down {
                if let Some(text) = puzzle.clues.down.get(&number) {
                    clues.push(Clue {
                        number,
                        direction: Direction::Down,
                        row,
                        col,
                        text: text.clone(),
                    });
                }
            }
        }
    }

    Ok(clues)
}

/// Render the cell state as nested row/cell markup.
///
/// Blocks get the `grid__cell--fill` modifier; cells that start a clue carry
/// the clue number as their label.
pub fn grid_html(
    state: &str,
    width: usize,
    grid_indexes: &HashMap<String, String>,
) -> Result<String, ExportError> {
    let rows = split_rows(state, width)?;

    let mut out = String::from("<div class=\"grid\">");
    for (row, cells) in rows.iter().enumerate() {
        out.push_str("<div class=\"grid__row\">");
        for (col, cell) in cells.chars().enumerate() {
            let class = if cell == BLOCK {
                "grid__cell grid__cell--fill"
            } else {
                "grid__cell"
            };
            let label = grid_indexes
                .get(&format!("{row},{col}"))
                .map(String::as_str)
                .unwrap_or("");
            out.push_str(&format!("<div class=\"{class}\">{label}</div>"));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    Ok(out)
}

/// Build the full HTML document for one parsed puzzle.
pub fn compose_html(puzzle: &Puzzle) -> Result<String, ExportError> {
    let width = puzzle.info.width as usize;
    let state = puzzle.grid.blank.concat();
    let clues = number_clues(puzzle)?;
    let sheet = ClueSheet::from_clues(&clues);
    let grid = grid_html(&state, width, &sheet.grid_indexes)?;

    Ok(crate::template::fill(
        &puzzle.info.title,
        &sheet.html_across.concat(),
        &sheet.html_down.concat(),
        &grid,
    ))
}
