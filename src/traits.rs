use std::collections::VecDeque;

use crate::types::{Direction, Point};

/// Display surface the game loop draws to once per tick. Calls are
/// side-effect only and must not block indefinitely.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_borders(&mut self, width: i32, height: i32);
    fn draw_snake(&mut self, body: &VecDeque<Point>, head: Point);
    fn draw_food(&mut self, position: Point);
    fn show_game_over(&mut self, score: u32, width: i32, height: i32);
}

/// Source of player input, polled once per tick.
pub trait InputSource {
    /// The most recent direction pressed since the last poll, if any.
    /// Non-blocking; keys that are not a direction yield `None`.
    fn poll_direction(&mut self) -> Option<Direction>;

    /// Whether the player asked to quit. Raw-mode terminals swallow
    /// Ctrl+C, so the concrete input layer surfaces it through here.
    fn quit_requested(&self) -> bool;
}
