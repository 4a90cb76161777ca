//! Dashboard Layout Geometry
//!
//! Pure move/resize math for the dashboard card editor. Pointer handling
//! lives in `components::layout_editor`; this module only computes the
//! rectangle that results from a drag delta, clamped to the minimum card
//! size and a non-negative origin.

use crate::models::DashboardCard;

/// Minimum card width in pixels
pub const MIN_CARD_W: f64 = 180.0;
/// Minimum card height in pixels
pub const MIN_CARD_H: f64 = 120.0;

/// What the active drag manipulates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
}

/// State captured at mousedown for the card being manipulated
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    pub card_id: u32,
    pub mode: DragMode,
    /// Pointer position at mousedown (client coordinates)
    pub pointer_x: i32,
    pub pointer_y: i32,
    /// Card rectangle at mousedown
    pub origin: DashboardCard,
}

/// Apply a pointer delta to the rectangle captured at drag start.
///
/// Move clamps the origin at (0, 0); resize clamps width/height at the
/// configured minimums. The untouched dimensions pass through unchanged.
pub fn apply_drag(origin: &DashboardCard, mode: DragMode, dx: f64, dy: f64) -> DashboardCard {
    let mut card = origin.clone();

    match mode {
        DragMode::Move => {
            card.x = (origin.x + dx).max(0.0);
            card.y = (origin.y + dy).max(0.0);
        }
        DragMode::Resize => {
            card.width = (origin.width + dx).max(MIN_CARD_W);
            card.height = (origin.height + dy).max(MIN_CARD_H);
        }
    }

    card
}

/// Height of the editor canvas needed to contain every card
pub fn canvas_height(cards: &[DashboardCard]) -> f64 {
    cards
        .iter()
        .map(|c| c.y + c.height)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WidgetKind;

    fn card(x: f64, y: f64, width: f64, height: f64) -> DashboardCard {
        DashboardCard {
            id: 1,
            title: "Spend".to_string(),
            widget: WidgetKind::SpendTotal,
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_move_applies_delta() {
        let moved = apply_drag(&card(10.0, 20.0, 300.0, 200.0), DragMode::Move, 15.0, -5.0);
        assert_eq!(moved.x, 25.0);
        assert_eq!(moved.y, 15.0);
        // Size untouched by a move
        assert_eq!(moved.width, 300.0);
        assert_eq!(moved.height, 200.0);
    }

    #[test]
    fn test_move_never_goes_negative() {
        let moved = apply_drag(&card(10.0, 20.0, 300.0, 200.0), DragMode::Move, -100.0, -100.0);
        assert_eq!(moved.x, 0.0);
        assert_eq!(moved.y, 0.0);
    }

    #[test]
    fn test_resize_applies_delta() {
        let resized = apply_drag(&card(0.0, 0.0, 300.0, 200.0), DragMode::Resize, 50.0, 30.0);
        assert_eq!(resized.width, 350.0);
        assert_eq!(resized.height, 230.0);
        // Origin untouched by a resize
        assert_eq!(resized.x, 0.0);
        assert_eq!(resized.y, 0.0);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let resized = apply_drag(
            &card(0.0, 0.0, 300.0, 200.0),
            DragMode::Resize,
            -1000.0,
            -1000.0,
        );
        assert_eq!(resized.width, MIN_CARD_W);
        assert_eq!(resized.height, MIN_CARD_H);
    }

    #[test]
    fn test_canvas_height_covers_lowest_card() {
        let cards = vec![card(0.0, 0.0, 200.0, 150.0), card(0.0, 400.0, 200.0, 180.0)];
        assert_eq!(canvas_height(&cards), 580.0);
    }

    #[test]
    fn test_canvas_height_empty() {
        assert_eq!(canvas_height(&[]), 0.0);
    }
}
