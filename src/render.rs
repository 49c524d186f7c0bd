use crate::math::Point2;

/// Drawing surface that consumes snapshots of the engine's state.
///
/// Implementations own every pixel concern (scaling, colors, stroke widths).
/// The engine only ever hands out copies of its vertex sequences.
pub trait FlakeRenderer {
    /// Draws the current folded shape (closed outline, filled).
    fn draw_folded(&mut self, vertices: &[Point2]);

    /// Draws the in-progress cut as an open polyline. Not called when no
    /// cut has been started.
    fn draw_cut(&mut self, points: &[Point2]);

    /// Draws the unfolded snowflake, one closed polygon per section.
    fn draw_unfolded(&mut self, sections: &[Vec<Point2>]);
}
