use crate::ball::Ball;
use std::{fmt, iter::FusedIterator, ops::Range};


/// One entry of the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub idx: usize,
    pub x: u32,
    pub y: u32,
    pub value: u8,
}

/// Formats as a Verilog style assignment, `bs[<idx>] = 8'h<value>;`.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bs[{}] = 8'h{:02x};", self.idx, self.value)
    }
}

/// Cells of the top-left quadrant in row-major order, `y` outer and `x` inner.
///
/// The table index is the iteration position, `idx = y * half + x`.
#[derive(Debug, Clone)]
pub struct Cells {
    ball: Ball,
    half: usize,
    range: Range<usize>,
}

impl Cells {
    pub(crate) fn new(ball: Ball) -> Self {
        Self {
            ball,
            half: ball.half() as usize,
            range: 0..ball.entries(),
        }
    }

    fn cell(&self, idx: usize) -> Cell {
        let (x, y) = ((idx % self.half) as u32, (idx / self.half) as u32);

        Cell {
            idx,
            x,
            y,
            value: self.ball.value(x, y),
        }
    }
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.range.next()?;
        Some(self.cell(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let idx = self.range.nth(n)?;
        Some(self.cell(idx))
    }
}

impl DoubleEndedIterator for Cells {
    fn next_back(&mut self) -> Option<Self::Item> {
        let idx = self.range.next_back()?;
        Some(self.cell(idx))
    }
}

impl ExactSizeIterator for Cells {}
impl FusedIterator for Cells {}
