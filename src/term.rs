use std::collections::VecDeque;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::traits::{InputSource, Renderer};
use crate::types::{Direction, Point};

const BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const LONE_HEAD_CHAR: char = '@';

/// Draws the game onto the terminal with crossterm. Construction enters
/// the alternate screen and raw mode; dropping the renderer restores
/// the terminal, whatever path the game exited through.
pub struct TermRenderer {
    stdout: Stdout,
}

impl TermRenderer {
    pub fn new() -> Self {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error setting raw mode");
        execute!(stdout, cursor::Hide).expect("Error hiding cursor");

        TermRenderer { stdout }
    }

    /// Prints lines inside an empty box centered on the grid.
    pub fn show_message(&mut self, lines: &[&str], width: i32, height: i32) {
        let box_height = lines.len() as i32 + 2;
        let box_width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as i32 + 2;
        let top_left = Point::new(
            (width / 2 - box_width / 2).max(0),
            (height / 2 - box_height / 2).max(0),
        );

        for y in [top_left.y, top_left.y + box_height - 1] {
            for x_diff in 0..box_width {
                self.print_at(Point::new(top_left.x + x_diff, y), ' ');
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{: ^width$}", line, width = box_width as usize);
            let y = top_left.y + i as i32 + 1;
            for (x_diff, ch) in padded.char_indices() {
                self.print_at(Point::new(top_left.x + x_diff as i32, y), ch);
            }
        }

        self.flush();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: Point, ch: char) {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.x as u16, pos.y as u16),
            style::Print(ch)
        )
        .expect("Error printing");
    }

    fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing");
    }
}

impl Renderer for TermRenderer {
    fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing");
    }

    fn draw_borders(&mut self, width: i32, height: i32) {
        for x in 0..width {
            let ch = if x == 0 || x == width - 1 { '+' } else { '-' };
            self.print_at(Point::new(x, 0), ch);
            self.print_at(Point::new(x, height - 1), ch);
        }

        for y in 1..height - 1 {
            self.print_at(Point::new(0, y), '|');
            self.print_at(Point::new(width - 1, y), '|');
        }

        self.flush();
    }

    fn draw_snake(&mut self, body: &VecDeque<Point>, head: Point) {
        let head_ch = head_char(body, head);

        for &pos in body {
            let ch = if pos == head { head_ch } else { BODY_CHAR };
            self.print_at(pos, ch);
        }

        self.flush();
    }

    fn draw_food(&mut self, position: Point) {
        self.print_at(position, FOOD_CHAR);
        self.flush();
    }

    fn show_game_over(&mut self, score: u32, width: i32, height: i32) {
        self.show_message(
            &[
                "Game over!",
                &format!("Score: {}", score),
                "",
                "Press any key to exit",
            ],
            width,
            height,
        );
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        terminal::disable_raw_mode().expect("Error unsetting raw mode");
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
    }
}

/// Reads the key queue without blocking. Arrows and WASD steer, Ctrl+C
/// latches the quit flag, anything else is ignored.
pub struct TermInput {
    quit: bool,
}

impl TermInput {
    pub fn new() -> Self {
        TermInput { quit: false }
    }
}

impl InputSource for TermInput {
    fn poll_direction(&mut self) -> Option<Direction> {
        let mut direction = None;

        while poll(Duration::from_millis(1)).unwrap_or(false) {
            if let Ok(Event::Key(ev)) = read() {
                if is_ctrl_c(&ev) {
                    self.quit = true;
                    continue;
                }

                match ev.code {
                    KeyCode::Char('w') | KeyCode::Up => direction = Some(Direction::Up),
                    KeyCode::Char('a') | KeyCode::Left => direction = Some(Direction::Left),
                    KeyCode::Char('s') | KeyCode::Down => direction = Some(Direction::Down),
                    KeyCode::Char('d') | KeyCode::Right => direction = Some(Direction::Right),
                    _ => {}
                }
            }
        }

        direction
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

// The port hands positions only, so the head glyph is derived from the
// head's offset to the segment behind it, as the snake renders `^ v < >`
// depending on travel direction.
fn head_char(body: &VecDeque<Point>, head: Point) -> char {
    if body.len() < 2 {
        return LONE_HEAD_CHAR;
    }

    let neck = body[body.len() - 2];
    if head.x > neck.x {
        '>'
    } else if head.x < neck.x {
        '<'
    } else if head.y > neck.y {
        'v'
    } else {
        '^'
    }
}

pub fn wait_for_any_key() -> KeyEvent {
    loop {
        if let Ok(Event::Key(ev)) = read() {
            return ev;
        }
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
