use rand::Rng;

use crate::types::Point;

/// The single food item on the grid.
pub struct Food {
    position: Point,
}

impl Food {
    pub fn new(width: i32, height: i32) -> Self {
        let mut food = Food { position: Point::new(1, 1) };
        food.respawn(width, height);
        food
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the food to a uniformly random cell strictly inside the
    /// border ring. The snake's body is not excluded, so food may land
    /// under the snake.
    pub fn respawn(&mut self, width: i32, height: i32) {
        let mut rng = rand::thread_rng();
        let x = rng.gen_range(1..width - 1);
        let y = rng.gen_range(1..height - 1);
        self.position = Point::new(x, y);
        log::debug!("food spawned at ({}, {})", x, y);
    }

    #[cfg(test)]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
