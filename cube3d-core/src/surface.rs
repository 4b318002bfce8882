/// Drawing interface the render loop needs from a windowing backend
///
/// A frame buffer the scene can draw into and present.
pub trait Surface {
    type Error;

    /// Logical size in pixels
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, color: Color);

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color);

    /// Draw `text` with its top-left corner at pixel `at`
    fn draw_text(&mut self, text: &str, at: (i32, i32), color: Color);

    /// Push the completed frame to the display
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A point in screen space (pixels, y down)
pub type ScreenPoint = (f64, f64);
