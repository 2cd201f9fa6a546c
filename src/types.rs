use Direction::*;

/// A cell on the game grid. Signed so that stepping off any edge is
/// representable; the game loop treats the border ring as lethal before
/// a coordinate can go negative.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// The neighboring cell one step in the given direction.
    pub fn step(self, direction: Direction) -> Point {
        match direction {
            Up => Point::new(self.x, self.y - 1),
            Down => Point::new(self.x, self.y + 1),
            Left => Point::new(self.x - 1, self.y),
            Right => Point::new(self.x + 1, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_offsets() {
        let p = Point::new(4, 7);
        assert_eq!(p.step(Up), Point::new(4, 6));
        assert_eq!(p.step(Down), Point::new(4, 8));
        assert_eq!(p.step(Left), Point::new(3, 7));
        assert_eq!(p.step(Right), Point::new(5, 7));
    }

    #[test]
    fn test_step_then_reverse_cancels() {
        let p = Point::new(10, 3);
        for (dir, reverse) in [(Up, Down), (Down, Up), (Left, Right), (Right, Left)] {
            assert_eq!(p.step(dir).step(reverse), p);
        }
    }
}
