//! Sheet geometry.
//!
//! Cards are 72×52 mm and sit in a 2×4 grid centred on an A4 portrait page,
//! filled row by row. All values are millimetres measured from the top-left
//! corner of the page.

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;

pub const CARD_WIDTH: f64 = 72.0;
pub const CARD_HEIGHT: f64 = 52.0;

pub const COLUMNS: usize = 2;
pub const ROWS: usize = 4;
pub const CARDS_PER_PAGE: usize = COLUMNS * ROWS;

/// Gap between neighbouring cards.
pub const SPACING: f64 = 5.0;

/// Nominal page margin. Centring is derived from the grid size alone, so this
/// does not move anything on the page.
pub const MARGIN: f64 = 15.0;

pub const GRID_WIDTH: f64 = CARD_WIDTH * COLUMNS as f64 + SPACING * (COLUMNS - 1) as f64;
pub const GRID_HEIGHT: f64 = CARD_HEIGHT * ROWS as f64 + SPACING * (ROWS - 1) as f64;

pub const START_X: f64 = (PAGE_WIDTH - GRID_WIDTH) / 2.0;
pub const START_Y: f64 = (PAGE_HEIGHT - GRID_HEIGHT) / 2.0;

/// Where a single card lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// 0-based page number.
    pub page: usize,
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
}

/// Slot for the card at `index` (0-based) in list order.
pub fn slot_for(index: usize) -> Slot {
    let page = index / CARDS_PER_PAGE;
    let within = index % CARDS_PER_PAGE;
    let row = within / COLUMNS;
    let col = within % COLUMNS;
    Slot {
        page,
        row,
        col,
        x: START_X + col as f64 * (CARD_WIDTH + SPACING),
        y: START_Y + row as f64 * (CARD_HEIGHT + SPACING),
    }
}

pub fn layout_pages(count: usize) -> Vec<Slot> {
    (0..count).map(slot_for).collect()
}

pub fn page_count(count: usize) -> usize {
    count.div_ceil(CARDS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_centred() {
        assert_eq!(GRID_WIDTH, 149.0);
        assert_eq!(GRID_HEIGHT, 223.0);
        assert_eq!(START_X, 30.5);
        assert_eq!(START_Y, 37.0);
    }

    #[test]
    fn fills_rows_left_to_right() {
        let slots = layout_pages(8);
        let cells: Vec<_> = slots.iter().map(|s| (s.row, s.col)).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)]
        );
        assert!(slots.iter().all(|s| s.page == 0));
        assert_eq!(slots[1].x, 30.5 + 77.0);
        assert_eq!(slots[7].y, 37.0 + 3.0 * 57.0);
    }

    #[test]
    fn ninth_card_starts_new_page_at_origin() {
        let slots = layout_pages(9);
        assert_eq!(slots[7].page, 0);
        let ninth = slots[8];
        assert_eq!((ninth.page, ninth.row, ninth.col), (1, 0, 0));
        assert_eq!((ninth.x, ninth.y), (START_X, START_Y));
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(8), 1);
        assert_eq!(page_count(9), 2);
        assert_eq!(page_count(17), 3);
    }

    #[test]
    fn grid_fits_on_the_page() {
        let last = slot_for(CARDS_PER_PAGE - 1);
        assert!(last.x + CARD_WIDTH <= PAGE_WIDTH);
        assert!(last.y + CARD_HEIGHT <= PAGE_HEIGHT);
    }
}
