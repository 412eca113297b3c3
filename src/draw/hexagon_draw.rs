// src/draw/hexagon_draw.rs
//
// Draws a honeycomb frame with nannou. Frames come in screen coordinates
// (origin top-left, y down); nannou's origin is the window center, y up.

use nannou::prelude::*;

use crate::animation::{DrawCommand, HexagonFill};

/// Maps a screen-space point into the given window rect.
pub fn to_nannou(point: Point2, window: Rect) -> Point2 {
    pt2(window.left() + point.x, window.top() - point.y)
}

pub fn draw_honeycomb(draw: &Draw, commands: &[DrawCommand], window: Rect, background: Rgb<f32>) {
    for command in commands {
        // nothing to fill
        if command.outline.is_degenerate() {
            continue;
        }

        let color = match command.fill {
            HexagonFill::Own(color) => color,
            HexagonFill::Background => background,
        };

        let points = command
            .outline
            .vertices()
            .iter()
            .map(|p| to_nannou(*p, window));

        draw.polygon().color(color).points(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_corners_map_to_window_corners() {
        let window = Rect::from_w_h(240.0, 360.0);

        assert_eq!(to_nannou(pt2(0.0, 0.0), window), pt2(-120.0, 180.0));
        assert_eq!(to_nannou(pt2(240.0, 360.0), window), pt2(120.0, -180.0));
        assert_eq!(to_nannou(pt2(120.0, 180.0), window), pt2(0.0, 0.0));
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let window = Rect::from_w_h(100.0, 100.0);
        let upper = to_nannou(pt2(50.0, 10.0), window);
        let lower = to_nannou(pt2(50.0, 90.0), window);
        assert!(upper.y > lower.y);
    }
}
