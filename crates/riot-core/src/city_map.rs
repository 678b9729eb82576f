// Rust guideline compliant 2026-02-06

//! City layout the fans walk through after leaving the stadium.
//!
//! The map is a boolean grid: walkable cells form an open exit space along the top rows
//! and a number of evenly spaced vertical streets running the full height. Everything
//! else is buildings.

use crate::grid::Cell;
use crate::{Error, Result};
use serde::Serialize;

/// Default height of the exit space in front of the stadium.
pub const DEFAULT_EXIT_SPACE_HEIGHT: usize = 10;

/// Walkability grid of a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityMap {
    width: usize,
    height: usize,
    n_streets: usize,
    street_width: usize,
    exit_space_height: usize,
    #[serde(skip)]
    cells: Vec<bool>,
}

impl CityMap {
    /// Builds a city with an exit space and vertical streets.
    ///
    /// # Arguments
    ///
    /// * `width` - Width of the grid
    /// * `height` - Height of the grid
    /// * `n_streets` - Number of vertical streets
    /// * `street_width` - Width of each street
    /// * `exit_space_height` - Rows at the top where agents can move freely
    ///
    /// # Errors
    ///
    /// Returns `InvalidMap` if:
    /// - width or height is zero
    /// - n_streets or street_width is zero
    /// - the streets together are wider than the grid
    /// - there is no room for at least one building column between streets
    pub fn new(
        width: usize,
        height: usize,
        n_streets: usize,
        street_width: usize,
        exit_space_height: usize,
    ) -> Result<Self> {
        let mut map = Self::blank(width, height, false)?;
        map.set_exit_space(exit_space_height);
        map.generate_vertical_streets(n_streets, street_width)?;
        Ok(map)
    }

    /// Builds a map where every cell is walkable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMap` if width or height is zero.
    pub fn open(width: usize, height: usize) -> Result<Self> {
        let mut map = Self::blank(width, height, true)?;
        map.exit_space_height = height;
        Ok(map)
    }

    fn blank(width: usize, height: usize, walkable: bool) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidMap(format!(
                "Map dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            n_streets: 0,
            street_width: 0,
            exit_space_height: 0,
            cells: vec![walkable; width * height],
        })
    }

    fn set_exit_space(&mut self, exit_space_height: usize) {
        let rows = exit_space_height.min(self.height);
        self.exit_space_height = rows;
        self.cells[..rows * self.width].fill(true);
    }

    fn generate_vertical_streets(&mut self, n_streets: usize, street_width: usize) -> Result<()> {
        if n_streets == 0 {
            return Err(Error::InvalidMap(format!(
                "Number of streets must be a positive integer. {} given.",
                n_streets
            )));
        }
        if street_width == 0 {
            return Err(Error::InvalidMap(format!(
                "Street width must be a positive integer. {} given.",
                street_width
            )));
        }

        let total_street_width = n_streets * street_width;
        if total_street_width > self.width {
            return Err(Error::InvalidMap(
                "Total width of streets exceeds grid width.".to_string(),
            ));
        }

        let building_width = (self.width - total_street_width) / (n_streets + 1);
        if building_width < 1 {
            return Err(Error::InvalidMap("Building width must be at least 1.".to_string()));
        }

        for i in 0..n_streets {
            let start_col = building_width * (i + 1) + i * street_width;
            for row in 0..self.height {
                let offset = row * self.width;
                self.cells[offset + start_col..offset + start_col + street_width].fill(true);
            }
        }

        self.n_streets = n_streets;
        self.street_width = street_width;
        Ok(())
    }

    /// Map width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of vertical streets (zero for an open map).
    pub fn n_streets(&self) -> usize {
        self.n_streets
    }

    /// Rows of open exit space at the top of the map.
    pub fn exit_space_height(&self) -> usize {
        self.exit_space_height
    }

    /// Returns whether agents may stand on the cell. Out-of-bounds cells are not walkable.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        cell.col < self.width
            && cell.row < self.height
            && self.cells[cell.row * self.width + cell.col]
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|walkable| **walkable).count()
    }

    /// Renders the map as text: `.` for walkable cells and `#` for buildings.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            output.extend(row.iter().map(|walkable| if *walkable { '.' } else { '#' }));
            output.push('\n');
        }
        output
    }
}
