//! Ball and color value objects used by the ball simulator.

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel, 255 is opaque.
    pub alpha: u8,
}

impl Color {
    /// Creates an opaque color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::with_alpha(red, green, blue, 255)
    }

    /// Creates a color with an explicit alpha.
    pub const fn with_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Integer mean of the red, green and blue channels.
    pub fn grayscale(&self) -> u8 {
        let sum = u16::from(self.red) + u16::from(self.green) + u16::from(self.blue);
        (sum / 3) as u8
    }
}

/// A ball that can be thrown until it is popped.
///
/// # Example
///
/// ```
/// use campus_model::models::{Ball, Color};
///
/// let mut ball = Ball::new(5, Color::new(255, 0, 0));
/// ball.throw();
/// ball.pop();
/// ball.throw();
/// assert_eq!(ball.throw_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    size: i32,
    color: Color,
    throw_count: u32,
}

impl Ball {
    /// Creates a ball that has never been thrown.
    pub fn new(size: i32, color: Color) -> Self {
        Self {
            size,
            color,
            throw_count: 0,
        }
    }

    /// Current size; 0 once popped.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The ball's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Counts a throw if the ball still has a positive size.
    pub fn throw(&mut self) {
        if self.size > 0 {
            self.throw_count += 1;
        }
    }

    /// Deflates the ball; later throws are not counted.
    pub fn pop(&mut self) {
        self.size = 0;
    }

    /// Number of counted throws.
    pub fn throw_count(&self) -> u32 {
        self.throw_count
    }
}
