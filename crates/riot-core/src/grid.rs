// Rust guideline compliant 2026-02-06

//! Multi-agent grid.
//!
//! Every cell holds an ordered list of agent ids. The grid does not wrap around its
//! edges, so neighbourhoods near a border are clipped.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned to every agent by the model.
pub type AgentId = u64;

/// A grid position given as column and row.
///
/// Row 0 is the top of the map, where fans enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Column (x coordinate).
    pub col: usize,
    /// Row (y coordinate).
    pub row: usize,
}

impl Cell {
    /// Creates a new cell position.
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl FromStr for Cell {
    type Err = Error;

    /// Parses a `col,row` pair.
    fn from_str(s: &str) -> Result<Self> {
        let (col, row) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidConfig(format!("expected 'col,row', got '{}'", s)))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidConfig(format!("invalid coordinate '{}'", part)))
        };
        Ok(Self::new(parse(col)?, parse(row)?))
    }
}

/// Grid where several agents may share a cell.
#[derive(Debug, Clone)]
pub struct MultiGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<AgentId>>,
}

impl MultiGrid {
    /// Creates an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Vec::new(); width * height],
        }
    }

    /// Grid width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns whether the cell lies inside the grid.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    fn index(&self, cell: Cell) -> Result<usize> {
        if self.in_bounds(cell) {
            Ok(cell.row * self.width + cell.col)
        } else {
            Err(Error::OutOfBounds(cell))
        }
    }

    /// Places an agent on a cell.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the cell lies outside the grid.
    pub fn place_agent(&mut self, id: AgentId, cell: Cell) -> Result<()> {
        let idx = self.index(cell)?;
        self.cells[idx].push(id);
        Ok(())
    }

    /// Removes an agent from a cell.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a cell outside the grid and `AgentNotFound` if the
    /// agent is not on that cell.
    pub fn remove_agent(&mut self, id: AgentId, cell: Cell) -> Result<()> {
        let idx = self.index(cell)?;
        let slot = &mut self.cells[idx];
        let pos = slot
            .iter()
            .position(|other| *other == id)
            .ok_or(Error::AgentNotFound(id))?;
        slot.remove(pos);
        Ok(())
    }

    /// Moves an agent between two cells.
    ///
    /// # Errors
    ///
    /// Fails without modifying the grid when either cell is out of bounds or the agent
    /// is not on `from`.
    pub fn move_agent(&mut self, id: AgentId, from: Cell, to: Cell) -> Result<()> {
        self.index(to)?;
        self.remove_agent(id, from)?;
        self.place_agent(id, to)
    }

    /// Agents on a cell, in placement order. Empty for out-of-bounds cells.
    pub fn contents(&self, cell: Cell) -> &[AgentId] {
        match self.index(cell) {
            Ok(idx) => &self.cells[idx],
            Err(_) => &[],
        }
    }

    /// Number of agents on a cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.contents(cell).len()
    }

    /// Moore neighbourhood of a cell, clipped at the grid border.
    ///
    /// Cells are returned column by column, top to bottom inside each column.
    pub fn neighborhood(&self, cell: Cell, include_center: bool) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(9);
        let last_col = self.width.saturating_sub(1);
        let last_row = self.height.saturating_sub(1);
        for col in cell.col.saturating_sub(1)..=(cell.col + 1).min(last_col) {
            for row in cell.row.saturating_sub(1)..=(cell.row + 1).min(last_row) {
                let candidate = Cell::new(col, row);
                if candidate == cell && !include_center {
                    continue;
                }
                cells.push(candidate);
            }
        }
        cells
    }
}
