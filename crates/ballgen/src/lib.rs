pub use crate::{
    ball::{Ball, FLOOR_OFFSET},
    table::{Cell, Cells},
};

mod ball;
pub mod emit;
mod table;
