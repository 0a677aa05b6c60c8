// Board state for one algorithm
//
// The search task writes through a BoardSurface while the renderer reads a
// snapshot every frame. The lock is taken per operation and never held
// across an await.

use crate::player::{Highlight, Readout, Surface};
use crate::search::Algorithm;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One array element on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: u32,
    pub current: bool,
    pub found: bool,
}

impl Cell {
    fn new(value: u32) -> Self {
        Self {
            value,
            current: false,
            found: false,
        }
    }

    /// Class to draw; `Found` wins over `Current`
    pub fn highlight(&self) -> Option<Highlight> {
        if self.found {
            Some(Highlight::Found)
        } else if self.current {
            Some(Highlight::Current)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    pub algorithm: Algorithm,
    pub cells: Vec<Cell>,
    pub steps_text: String,
    pub found_text: String,
}

impl Board {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            cells: Vec::new(),
            steps_text: Readout::StepsTaken.format(0),
            found_text: Readout::FoundAt.format("-"),
        }
    }

    /// Stable element id of the cell at `index`
    pub fn element_id(&self, index: usize) -> String {
        self.algorithm.element_id(index)
    }

    fn set(&mut self, index: usize, highlight: Highlight, on: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            match highlight {
                Highlight::Current => cell.current = on,
                Highlight::Found => cell.found = on,
            }
        }
    }
}

/// Board shared between the search task and the renderer
pub type SharedBoard = Arc<Mutex<Board>>;

pub fn shared(algorithm: Algorithm) -> SharedBoard {
    Arc::new(Mutex::new(Board::new(algorithm)))
}

/// Copy of the board for one frame
pub fn snapshot(board: &SharedBoard) -> Board {
    lock(board).clone()
}

fn lock(board: &SharedBoard) -> MutexGuard<'_, Board> {
    board.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Surface writing into a shared board
pub struct BoardSurface {
    board: SharedBoard,
}

impl BoardSurface {
    pub fn new(board: SharedBoard) -> Self {
        Self { board }
    }
}

impl Surface for BoardSurface {
    fn render_array(&mut self, values: &[u32]) {
        lock(&self.board).cells = values.iter().copied().map(Cell::new).collect();
    }

    fn add_highlight(&mut self, index: usize, highlight: Highlight) {
        lock(&self.board).set(index, highlight, true);
    }

    fn remove_highlight(&mut self, index: usize, highlight: Highlight) {
        lock(&self.board).set(index, highlight, false);
    }

    fn set_readout(&mut self, readout: Readout, text: String) {
        let mut board = lock(&self.board);
        match readout {
            Readout::StepsTaken => board.steps_text = text,
            Readout::FoundAt => board.found_text = text,
        }
    }
}
