use std::collections::VecDeque;

use crate::types::{Direction, Point};

/// The player's snake. Segments are ordered oldest-first: the tail sits
/// at the front of the deque and the head at the back, so a move is a
/// push at the back plus (unless growing) a pop at the front.
pub struct Snake {
    body: VecDeque<Point>,
    grow_pending: u32,
}

impl Snake {
    pub fn new(start: Point) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Snake { body, grow_pending: 0 }
    }

    pub fn head(&self) -> Point {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Advances one cell in the given direction and returns the new head.
    ///
    /// The new head is appended before the tail is touched: a pending
    /// growth keeps the tail (net length +1), otherwise the oldest
    /// segment is dropped and the length is unchanged.
    pub fn advance(&mut self, direction: Direction) -> Point {
        let new_head = self.head().step(direction);
        self.body.push_back(new_head);

        if self.grow_pending > 0 {
            self.grow_pending -= 1;
        } else {
            self.body.pop_front();
        }

        new_head
    }

    /// Queues one segment of growth; the body extends on the next
    /// `advance`, not immediately.
    pub fn grow(&mut self) {
        self.grow_pending += 1;
    }

    /// Whether the head occupies the same cell as any other segment.
    pub fn has_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().take(self.body.len() - 1).any(|&p| p == head)
    }

    /// Whether moving in `candidate` would step straight back onto the
    /// segment behind the head. A single-segment snake has nothing
    /// behind it, so it can never reverse into itself.
    pub fn is_opposite_direction(&self, candidate: Direction) -> bool {
        if self.body.len() < 2 {
            return false;
        }
        self.head().step(candidate) == self.body[self.body.len() - 2]
    }
}
