use trirast_math::Color;

/// A row-major grid of colors.
///
/// Pixel `(x, y)` lives at index `x + y * width`. Row `y = 0` is the bottom
/// of the image; the PPM writer emits rows top-down starting at
/// `y = height - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    buffer: Vec<Color>,
}

impl Frame {
    /// Creates a frame with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            buffer: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} frame",
            x,
            y,
            self.width,
            self.height
        );
        x as usize + y as usize * self.width as usize
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.buffer[i] = color;
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.buffer[self.index(x, y)]
    }

    /// Resets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    pub fn pixels(&self) -> &[Color] {
        self.buffer.as_slice()
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        self.buffer.as_mut_slice()
    }
}
