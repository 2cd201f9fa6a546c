use std::thread::sleep;

use log::debug;

use crate::config::GameConfig;
use crate::food::Food;
use crate::snake::Snake;
use crate::traits::{InputSource, Renderer};
use crate::types::{Direction, Point};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver,
}

pub struct SnakeGame<R: Renderer, I: InputSource> {
    config: GameConfig,
    renderer: R,
    input: I,
    snake: Snake,
    food: Food,
    direction: Direction,
    score: u32,
    state: GameState,
}

impl<R: Renderer, I: InputSource> SnakeGame<R, I> {
    pub fn new(config: GameConfig, renderer: R, input: I) -> Self {
        let center = Point::new(config.width / 2, config.height / 2);
        let food = Food::new(config.width, config.height);

        SnakeGame {
            snake: Snake::new(center),
            food,
            direction: Direction::Right,
            score: config.initial_score,
            state: GameState::Running,
            config,
            renderer,
            input,
        }
    }

    /// Runs ticks at the configured interval until the snake dies or the
    /// player asks to quit. The game-over screen is shown exactly once.
    pub fn run(&mut self) {
        loop {
            self.tick();

            if self.input.quit_requested() {
                debug!("quit requested, score {}", self.score);
                return;
            }

            if self.state == GameState::GameOver {
                self.renderer
                    .show_game_over(self.score, self.config.width, self.config.height);
                return;
            }

            sleep(self.config.tick_interval());
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    ///////////////////////////////////////////////////////////////////////////

    fn tick(&mut self) {
        if let Some(dir) = self.input.poll_direction() {
            if !self.snake.is_opposite_direction(dir) {
                self.direction = dir;
            }
        }

        let head = self.snake.advance(self.direction);

        if self.on_border(head) {
            debug!("hit the wall at ({}, {})", head.x, head.y);
            self.state = GameState::GameOver;
        } else if self.snake.has_collision() {
            debug!("ran into itself at ({}, {})", head.x, head.y);
            self.state = GameState::GameOver;
        } else if head == self.food.position() {
            self.score += 1;
            self.snake.grow();
            self.food.respawn(self.config.width, self.config.height);
            debug!("ate food at ({}, {}), score {}", head.x, head.y, self.score);
        }

        // The frame showing the fatal position is still drawn once; the
        // game-over screen goes on top of it in run().
        self.renderer.clear();
        self.renderer.draw_borders(self.config.width, self.config.height);
        self.renderer.draw_food(self.food.position());
        self.renderer.draw_snake(self.snake.body(), self.snake.head());
    }

    fn on_border(&self, pos: Point) -> bool {
        pos.x == 0 || pos.x == self.config.width - 1 || pos.y == 0 || pos.y == self.config.height - 1
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::types::Direction::*;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: u32,
        game_over_scores: Vec<u32>,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self) {}

        fn draw_borders(&mut self, _width: i32, _height: i32) {}

        fn draw_snake(&mut self, _body: &VecDeque<Point>, _head: Point) {
            self.frames += 1;
        }

        fn draw_food(&mut self, _position: Point) {}

        fn show_game_over(&mut self, score: u32, _width: i32, _height: i32) {
            self.game_over_scores.push(score);
        }
    }

    struct ScriptedInput {
        directions: VecDeque<Direction>,
    }

    impl ScriptedInput {
        fn none() -> Self {
            ScriptedInput { directions: VecDeque::new() }
        }

        fn with(directions: &[Direction]) -> Self {
            ScriptedInput { directions: directions.iter().copied().collect() }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll_direction(&mut self) -> Option<Direction> {
            self.directions.pop_front()
        }

        fn quit_requested(&self) -> bool {
            false
        }
    }

    fn test_config() -> GameConfig {
        GameConfig { tick_interval_ms: 0, ..GameConfig::default() }
    }

    fn new_game(input: ScriptedInput) -> SnakeGame<RecordingRenderer, ScriptedInput> {
        SnakeGame::new(test_config(), RecordingRenderer::default(), input)
    }

    #[test]
    fn test_starts_centered_heading_right_with_initial_score() {
        let game = new_game(ScriptedInput::none());
        assert_eq!(game.snake.head(), Point::new(16, 8));
        assert_eq!(game.score(), 5);
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn test_four_ticks_without_input_drift_right() {
        let mut game = new_game(ScriptedInput::none());
        game.food.set_position(Point::new(1, 1)); // off the snake's path

        for _ in 0..4 {
            game.tick();
        }

        assert_eq!(game.snake.head(), Point::new(20, 8));
        assert_eq!(game.score(), 5);
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn test_eating_scores_and_grows_on_the_next_tick() {
        let mut game = new_game(ScriptedInput::none());
        game.food.set_position(Point::new(18, 8));

        game.tick(); // head (17, 8)
        assert_eq!(game.score(), 5);

        game.tick(); // head (18, 8), eats
        assert_eq!(game.score(), 6);
        assert_eq!(game.snake.len(), 1, "growth shows one tick after eating");

        let food = game.food.position();
        assert!(food.x >= 1 && food.x <= 30);
        assert!(food.y >= 1 && food.y <= 14);

        game.tick(); // head (19, 8)
        assert_eq!(game.snake.len(), 2);
    }

    #[test]
    fn test_input_changes_heading() {
        let mut game = new_game(ScriptedInput::with(&[Up]));
        game.food.set_position(Point::new(1, 1));

        game.tick();
        assert_eq!(game.snake.head(), Point::new(16, 7));

        game.tick();
        assert_eq!(game.snake.head(), Point::new(16, 6), "heading persists without input");
    }

    #[test]
    fn test_reversal_input_is_ignored() {
        let mut game = new_game(ScriptedInput::none());
        game.food.set_position(Point::new(17, 8));

        game.tick(); // eats at (17, 8)
        game.food.set_position(Point::new(1, 1));
        game.tick(); // head (18, 8), length 2

        game.input.directions.push_back(Left);
        game.tick(); // Left would step onto the neck, so it is dropped
        assert_eq!(game.snake.head(), Point::new(19, 8));
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn test_left_wall_ends_the_game_with_one_game_over_screen() {
        let mut game = new_game(ScriptedInput::with(&[Left]));
        game.food.set_position(Point::new(30, 14)); // away from the westward path

        game.run();

        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.renderer.game_over_scores, vec![5]);
        // 16 ticks from x=16 to x=0, every frame rendered, fatal one included.
        assert_eq!(game.renderer.frames, 16);
    }

    #[test]
    fn test_self_collision_ends_the_game() {
        let mut game = new_game(ScriptedInput::none());

        // Grow to length 5 by feeding the snake along its path, then curl
        // back into the body: Right, Down, Left, Up.
        for x in [17, 18, 19, 20] {
            game.food.set_position(Point::new(x, 8));
            game.tick();
        }
        game.food.set_position(Point::new(1, 1));
        game.tick(); // length catches up to 5
        assert_eq!(game.snake.len(), 5);

        game.input.directions.push_back(Down);
        game.tick();
        game.input.directions.push_back(Left);
        game.tick();
        game.input.directions.push_back(Up);
        game.tick();

        assert_eq!(game.state(), GameState::GameOver);
    }
}
