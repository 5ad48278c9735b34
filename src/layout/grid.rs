//! Near-square grid layout.
//!
//! The grid uses `columns = ceil(sqrt(n))` and `rows = ceil(n / columns)`,
//! so `columns * rows >= n` always holds and the last row may be partial.
//! Card size is the largest size with the configured aspect ratio that fits
//! the usable area, clamped per axis to the configured range. The block of
//! cards is centred in the viewport below the reserved HUD strip.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::core::config::{LayoutConfig, Viewport};

/// Result of laying out a round's cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub columns: usize,
    pub rows: usize,
    pub card_width: f32,
    pub card_height: f32,
    /// One rectangle per card, row-major.
    pub positions: Vec<Rect>,
}

/// Columns and rows for `card_count` cards. `(0, 0)` for an empty board.
///
/// ```
/// use mythic_match::layout::grid::grid_shape;
///
/// assert_eq!(grid_shape(16), (4, 4));
/// assert_eq!(grid_shape(10), (4, 3));
/// assert_eq!(grid_shape(2), (2, 1));
/// assert_eq!(grid_shape(0), (0, 0));
/// ```
#[must_use]
pub fn grid_shape(card_count: usize) -> (usize, usize) {
    if card_count == 0 {
        return (0, 0);
    }

    // Integer ceil(sqrt) so large counts don't suffer from float rounding.
    let mut columns = (card_count as f64).sqrt() as usize;
    while columns * columns < card_count {
        columns += 1;
    }
    while columns > 1 && (columns - 1) * (columns - 1) >= card_count {
        columns -= 1;
    }

    let rows = card_count.div_ceil(columns);
    (columns, rows)
}

/// Lay out `card_count` cards inside `viewport`.
#[must_use]
pub fn layout(card_count: usize, viewport: &Viewport, config: &LayoutConfig) -> BoardLayout {
    let (columns, rows) = grid_shape(card_count);
    if columns == 0 {
        return BoardLayout::default();
    }

    let aspect = if config.aspect > 0.0 { config.aspect } else { 5.0 / 7.0 };
    let cols_f = columns as f32;
    let rows_f = rows as f32;

    let usable_width = (viewport.width - 2.0 * config.margin - (cols_f - 1.0) * config.gap).max(0.0);
    let usable_height = (viewport.height
        - viewport.reserved_top
        - 2.0 * config.margin
        - (rows_f - 1.0) * config.gap)
        .max(0.0);

    let cell_width = usable_width / cols_f;
    let cell_height = usable_height / rows_f;

    let fitted_width = cell_width.min(cell_height * aspect);
    let fitted_height = fitted_width / aspect;

    // max-then-min instead of clamp: a misconfigured range must not panic.
    let card_width = fitted_width.max(config.min_card.0).min(config.max_card.0);
    let card_height = fitted_height.max(config.min_card.1).min(config.max_card.1);

    let block_width = cols_f * card_width + (cols_f - 1.0) * config.gap;
    let block_height = rows_f * card_height + (rows_f - 1.0) * config.gap;
    let origin_x = (viewport.width - block_width) / 2.0;
    let origin_y = viewport.reserved_top + (viewport.height - viewport.reserved_top - block_height) / 2.0;

    let positions = (0..card_count)
        .map(|i| {
            let column = (i % columns) as f32;
            let row = (i / columns) as f32;
            Rect::new(
                origin_x + column * (card_width + config.gap),
                origin_y + row * (card_height + config.gap),
                card_width,
                card_height,
            )
        })
        .collect();

    BoardLayout {
        columns,
        rows,
        card_width,
        card_height,
        positions,
    }
}
