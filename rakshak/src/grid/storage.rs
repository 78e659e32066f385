//! Maze grid storage.

use crate::core::{CellType, GridCoord};
use crate::error::MazeError;

/// Immutable-shape maze grid.
///
/// Cells are stored row-major. Shape and landmarks (entrance, initial occupant
/// location) are fixed at construction; only cell contents change, and only
/// through [`GridMap::set_cell`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    /// Cell types, row-major
    cells: Vec<CellType>,
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// The unique entrance, located once at construction
    entrance: GridCoord,
    /// Where the occupant was when the maze was loaded
    occupant_origin: Option<GridCoord>,
}

impl GridMap {
    /// Parse a maze from text.
    ///
    /// Leading and trailing blank lines are ignored. All remaining lines must
    /// have the same length. Exactly one `E` and at most one `@` are allowed.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let all_lines: Vec<&str> = text.lines().collect();
        let first = all_lines
            .iter()
            .position(|l| !l.trim().is_empty())
            .ok_or(MazeError::Empty)?;
        let last = all_lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .unwrap_or(first);
        let lines = &all_lines[first..=last];

        let cols = lines[0].chars().count();
        let rows = lines.len();
        let mut cells = Vec::with_capacity(rows * cols);
        let mut entrance: Option<GridCoord> = None;
        let mut occupant: Option<GridCoord> = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }

            for (col, c) in line.chars().enumerate() {
                let coord = GridCoord::new(row as i32, col as i32);
                let cell = CellType::from_char(c);
                match cell {
                    CellType::Entrance => {
                        if let Some(first) = entrance {
                            return Err(MazeError::MultipleEntrances {
                                first,
                                second: coord,
                            });
                        }
                        entrance = Some(coord);
                    }
                    CellType::Occupant => {
                        if let Some(first) = occupant {
                            return Err(MazeError::MultipleOccupants {
                                first,
                                second: coord,
                            });
                        }
                        occupant = Some(coord);
                    }
                    CellType::Free | CellType::Wall => {}
                }
                cells.push(cell);
            }
        }

        let entrance = entrance.ok_or(MazeError::MissingEntrance)?;

        Ok(Self {
            cells,
            rows,
            cols,
            entrance,
            occupant_origin: occupant,
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Coordinate of the unique entrance.
    #[inline]
    pub fn entrance(&self) -> GridCoord {
        self.entrance
    }

    /// Where the occupant was when the maze was loaded, if there was one.
    #[inline]
    pub fn occupant_origin(&self) -> Option<GridCoord> {
        self.occupant_origin
    }

    /// Is the coordinate inside `[0, rows) x [0, cols)`?
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    #[inline]
    fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.row as usize * self.cols + coord.col as usize)
        } else {
            None
        }
    }

    /// Cell type at a coordinate. Anything out of bounds is wall.
    #[inline]
    pub fn cell_at(&self, coord: GridCoord) -> CellType {
        self.coord_to_index(coord)
            .map_or(CellType::Wall, |idx| self.cells[idx])
    }

    /// Overwrite a cell.
    ///
    /// Callers are responsible for keeping the occupant/entrance invariants;
    /// writes outside the grid are ignored.
    pub fn set_cell(&mut self, coord: GridCoord, cell: CellType) {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = cell;
        }
    }

    /// Iterate over all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellType)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            (
                GridCoord::new((i / cols) as i32, (i % cols) as i32),
                cell,
            )
        })
    }

    /// Current location of the occupant token, if it is on the map.
    pub fn find_occupant(&self) -> Option<GridCoord> {
        self.iter()
            .find(|(_, cell)| *cell == CellType::Occupant)
            .map(|(coord, _)| coord)
    }
}

impl std::str::FromStr for GridMap {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
