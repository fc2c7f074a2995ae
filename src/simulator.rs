//! Interactive console session for the ball simulator.
//!
//! The session asks how many balls to create, reads each ball's size and
//! color, then loops over a numbered menu until the user exits or the input
//! ends. It is generic over its reader and writer so it can be driven by
//! stdin/stdout or by in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::SimulatorError;
use crate::models::{Ball, Color};

/// A ball simulator session.
///
/// # Example
///
/// ```
/// use campus_model::simulator::BallSimulator;
///
/// let input = "1\n5\n255\n0\n0\n1\n1\n3\n4\n";
/// let mut output = Vec::new();
/// let balls = BallSimulator::new(input.as_bytes(), &mut output).run().unwrap();
///
/// assert_eq!(balls[0].throw_count(), 1);
/// assert!(String::from_utf8(output).unwrap().contains("Ball #1: Thrown 1 times"));
/// ```
pub struct BallSimulator<R, W> {
    input: R,
    output: W,
    balls: Vec<Ball>,
}

/// Outcome of handling one menu choice.
enum Step {
    Continue,
    Exit,
}

impl<R: BufRead, W: Write> BallSimulator<R, W> {
    /// Creates a session with no balls.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            balls: Vec::new(),
        }
    }

    /// Runs the session to completion and returns the final balls.
    ///
    /// Fails when a number cannot be parsed or the console fails. Reaching
    /// the end of input ends the session normally.
    pub fn run(mut self) -> Result<Vec<Ball>, SimulatorError> {
        writeln!(self.output, "🎯 Welcome to the Ball Simulator!")?;
        if !self.create_balls()? {
            return Ok(self.balls);
        }

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            if let Step::Exit = self.handle_choice(choice.trim())? {
                break;
            }
        }

        debug!(balls = self.balls.len(), "Ball simulator session ended");
        Ok(self.balls)
    }

    /// Reads the ball definitions. Returns false if input ended early.
    fn create_balls(&mut self) -> Result<bool, SimulatorError> {
        let Some(count) = self.prompt_number("How many balls do you want to create? ", "ball count")?
        else {
            return Ok(false);
        };

        for n in 1..=count.max(0) {
            writeln!(self.output, "\nCreating Ball #{}", n)?;
            let Some(size) = self.prompt_number("Enter size: ", "size")? else {
                return Ok(false);
            };
            let Some(red) = self.prompt_channel("Enter Red (0-255): ", "red")? else {
                return Ok(false);
            };
            let Some(green) = self.prompt_channel("Enter Green (0-255): ", "green")? else {
                return Ok(false);
            };
            let Some(blue) = self.prompt_channel("Enter Blue (0-255): ", "blue")? else {
                return Ok(false);
            };

            self.balls.push(Ball::new(size, Color::new(red, green, blue)));
            debug!(ball = n, size, red, green, blue, "Created ball");
        }

        Ok(true)
    }

    fn print_menu(&mut self) -> Result<(), SimulatorError> {
        writeln!(self.output, "\n⚙️ What would you like to do?")?;
        writeln!(self.output, "1. Throw a ball")?;
        writeln!(self.output, "2. Pop a ball")?;
        writeln!(self.output, "3. View ball throw counts")?;
        writeln!(self.output, "4. Exit")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn handle_choice(&mut self, choice: &str) -> Result<Step, SimulatorError> {
        match choice {
            "1" => {
                let Some(ball) = self.prompt_ball("Which ball to throw (1 to N)? ")? else {
                    return Ok(Step::Exit);
                };
                if let Some(ball) = ball {
                    self.balls[ball].throw();
                    debug!(ball = ball + 1, throws = self.balls[ball].throw_count(), "Ball thrown");
                    writeln!(self.output, "Ball thrown!")?;
                }
            }
            "2" => {
                let Some(ball) = self.prompt_ball("Which ball to pop (1 to N)? ")? else {
                    return Ok(Step::Exit);
                };
                if let Some(ball) = ball {
                    self.balls[ball].pop();
                    debug!(ball = ball + 1, "Ball popped");
                    writeln!(self.output, "Ball popped.")?;
                }
            }
            "3" => {
                for (i, ball) in self.balls.iter().enumerate() {
                    writeln!(
                        self.output,
                        "Ball #{}: Thrown {} times",
                        i + 1,
                        ball.throw_count()
                    )?;
                }
            }
            "4" => return Ok(Step::Exit),
            _ => writeln!(self.output, "Invalid option.")?,
        }
        Ok(Step::Continue)
    }

    /// Asks for a 1-based ball number.
    ///
    /// The outer `None` means input ended; the inner `None` means the number
    /// was out of range and has already been reported.
    fn prompt_ball(&mut self, prompt: &str) -> Result<Option<Option<usize>>, SimulatorError> {
        let Some(number) = self.prompt_number(prompt, "ball number")? else {
            return Ok(None);
        };

        let index = usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|i| *i < self.balls.len());
        if index.is_none() {
            writeln!(self.output, "Invalid ball number.")?;
        }
        Ok(Some(index))
    }

    /// Asks for a color channel until the value fits in 0-255.
    fn prompt_channel(&mut self, prompt: &str, label: &str) -> Result<Option<u8>, SimulatorError> {
        loop {
            let Some(value) = self.prompt_number(prompt, label)? else {
                return Ok(None);
            };
            match u8::try_from(value) {
                Ok(channel) => return Ok(Some(channel)),
                Err(_) => {
                    debug!(channel = label, value, "Color channel out of range");
                    writeln!(self.output, "Color values must be between 0 and 255.")?;
                }
            }
        }
    }

    fn prompt_number(&mut self, prompt: &str, label: &str) -> Result<Option<i32>, SimulatorError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        trimmed
            .parse()
            .map(Some)
            .map_err(|_| SimulatorError::InvalidNumber {
                prompt: label.to_string(),
                input: trimmed.to_string(),
            })
    }

    /// Reads one line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SimulatorError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> (Result<Vec<Ball>, SimulatorError>, String) {
        let mut output = Vec::new();
        let result = BallSimulator::new(input.as_bytes(), &mut output).run();
        (result, String::from_utf8(output).unwrap())
    }

    const TWO_BALLS: &str = "2\n5\n255\n0\n0\n3\n0\n128\n255\n";

    #[test]
    fn test_creates_balls_with_colors() {
        let (result, output) = run_session(&format!("{}4\n", TWO_BALLS));
        let balls = result.unwrap();

        assert_eq!(balls.len(), 2);
        assert_eq!(balls[0].size(), 5);
        assert_eq!(balls[0].color(), Color::new(255, 0, 0));
        assert_eq!(balls[1].color(), Color::with_alpha(0, 128, 255, 255));
        assert!(output.contains("Creating Ball #2"));
    }

    #[test]
    fn test_throw_then_list_counts() {
        let (result, output) = run_session(&format!("{}1\n1\n1\n1\n1\n2\n3\n4\n", TWO_BALLS));
        let balls = result.unwrap();

        assert_eq!(balls[0].throw_count(), 2);
        assert_eq!(balls[1].throw_count(), 1);
        assert!(output.contains("Ball #1: Thrown 2 times"));
        assert!(output.contains("Ball #2: Thrown 1 times"));
    }

    #[test]
    fn test_popped_ball_stops_counting() {
        let (result, output) = run_session(&format!("{}1\n1\n2\n1\n1\n1\n1\n1\n4\n", TWO_BALLS));
        let balls = result.unwrap();

        assert_eq!(balls[0].throw_count(), 1);
        assert_eq!(balls[0].size(), 0);
        assert!(output.contains("Ball popped."));
    }

    #[test]
    fn test_out_of_range_ball_is_reported_and_loop_continues() {
        let (result, output) = run_session(&format!("{}1\n0\n2\n9\n1\n-3\n1\n2\n4\n", TWO_BALLS));
        let balls = result.unwrap();

        assert_eq!(output.matches("Invalid ball number.").count(), 3);
        assert_eq!(balls[1].throw_count(), 1);
    }

    #[test]
    fn test_unknown_option_is_reported() {
        let (result, output) = run_session(&format!("{}7\nthrow\n4\n", TWO_BALLS));
        assert!(result.is_ok());
        assert_eq!(output.matches("Invalid option.").count(), 2);
    }

    #[test]
    fn test_malformed_number_ends_session_with_error() {
        let (result, _) = run_session("two\n");
        match result {
            Err(SimulatorError::InvalidNumber { prompt, input }) => {
                assert_eq!(prompt, "ball count");
                assert_eq!(input, "two");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_color_channel_out_of_range_is_asked_again() {
        let (result, output) = run_session("1\n5\n300\n0\n-1\n0\n0\n3\n4\n");
        let balls = result.unwrap();

        assert_eq!(output.matches("Color values must be between 0 and 255.").count(), 2);
        assert_eq!(output.matches("Enter Red (0-255): ").count(), 2);
        assert_eq!(output.matches("Enter Green (0-255): ").count(), 2);
        assert_eq!(balls.len(), 1);
        assert_eq!(balls[0].color(), Color::new(0, 0, 0));
        assert!(output.contains("Ball #1: Thrown 0 times"));
    }

    #[test]
    fn test_color_channel_that_is_not_a_number_ends_session() {
        let (result, _) = run_session("1\n5\nred\n");
        match result {
            Err(SimulatorError::InvalidNumber { prompt, input }) => {
                assert_eq!(prompt, "red");
                assert_eq!(input, "red");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (result, output) = run_session(&format!("{}1\n1\n", TWO_BALLS));
        let balls = result.unwrap();
        assert_eq!(balls[0].throw_count(), 1);
        assert!(output.ends_with("Enter choice: "));
    }

    #[test]
    fn test_end_of_input_during_setup() {
        let (result, _) = run_session("3\n5\n");
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_negative_ball_count_creates_none() {
        let (result, output) = run_session("-2\n3\n4\n");
        assert!(result.unwrap().is_empty());
        assert!(!output.contains("Ball #1"));
    }
}
