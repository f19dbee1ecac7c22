//! Placement of marks and page regions.

pub(crate) mod grid;
pub(crate) mod page;

pub use grid::{
    HARD75_COLUMNS, LIFE_COLUMNS, LIFE_ROWS, MarkLayout, MarkSlot, YEAR_COLUMNS, layout_marks,
};
pub use page::{PageRegions, footer_height, header_height, solve_page};
