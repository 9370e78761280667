//! Selection and scroll management for card grids.
//!
//! The [`GridViewport`] tracks the selected card, the number of columns the
//! grid is laid out in, and which rows are scrolled into view.

use std::ops::Range;

/// Manages the visible rows and the selection of one card grid.
///
/// # Example
///
/// ```
/// use vernissage::ui::viewport::GridViewport;
///
/// let mut vp = GridViewport::new(3, 2, 10);
/// assert_eq!(vp.visible_items(), 0..6);
///
/// vp.select(9);
/// assert_eq!(vp.offset(), 2);
/// assert_eq!(vp.visible_items(), 6..10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewport {
    columns: usize,
    rows: usize,
    offset: usize,
    total_items: usize,
    selected: usize,
}

/// A selection movement inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

impl Default for GridViewport {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

impl GridViewport {
    /// Create a viewport.
    ///
    /// # Arguments
    ///
    /// * `columns` - Cards per row
    /// * `rows` - Card rows that fit on screen
    /// * `total_items` - Number of cards in the grid
    pub fn new(columns: usize, rows: usize, total_items: usize) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
            offset: 0,
            total_items,
            selected: 0,
        }
    }

    /// First visible row.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Card indices currently on screen.
    pub fn visible_items(&self) -> Range<usize> {
        let start = (self.offset * self.columns).min(self.total_items);
        let end = ((self.offset + self.rows) * self.columns).min(self.total_items);
        start..end
    }

    /// Scroll position as a percentage (0-100).
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
        }
    }

    /// Select a card and scroll it into view.
    pub fn select(&mut self, index: usize) {
        if self.total_items == 0 {
            self.selected = 0;
            self.offset = 0;
            return;
        }
        self.selected = index.min(self.total_items - 1);
        self.ensure_selected_visible();
    }

    /// Move the selection, clamping at the grid edges.
    pub fn move_selection(&mut self, movement: GridMove) {
        if self.total_items == 0 {
            return;
        }
        let last = self.total_items - 1;
        let target = match movement {
            GridMove::Left => self.selected.saturating_sub(1),
            GridMove::Right => (self.selected + 1).min(last),
            GridMove::Up => self.selected.saturating_sub(self.columns),
            GridMove::Down => {
                let below = self.selected + self.columns;
                if below <= last { below } else { self.selected }
            }
            GridMove::First => 0,
            GridMove::Last => last,
        };
        self.select(target);
    }

    /// Change the grid geometry, keeping the selection visible.
    pub fn resize(&mut self, columns: usize, rows: usize) {
        self.columns = columns.max(1);
        self.rows = rows.max(1);
        self.offset = self.offset.min(self.max_offset());
        self.ensure_selected_visible();
    }

    /// Update the number of cards (e.g. after a reload).
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.select(self.selected);
        self.offset = self.offset.min(self.max_offset());
    }

    fn ensure_selected_visible(&mut self) {
        let row = self.selected / self.columns;
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.rows {
            self.offset = row + 1 - self.rows;
        }
    }

    const fn total_rows(&self) -> usize {
        self.total_items.div_ceil(self.columns)
    }

    const fn max_offset(&self) -> usize {
        self.total_rows().saturating_sub(self.rows)
    }
}
