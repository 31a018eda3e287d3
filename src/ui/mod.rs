pub mod charts;
pub mod grid;
pub mod panels;
