/// Status text drawn over each frame
use crate::view::ViewState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    /// Top-left pixel position
    pub position: (i32, i32),
}

impl StatusLine {
    fn new(text: String, x: i32, y: i32) -> Self {
        Self {
            text,
            position: (x, y),
        }
    }
}

/// The six status lines: controls along the top, angle totals along the bottom
pub fn status_lines(view: &ViewState) -> [StatusLine; 6] {
    [
        StatusLine::new(
            format!("Rotation Speed: {} (Use + or - to control)", view.speed),
            10,
            10,
        ),
        StatusLine::new(
            format!(
                "View Distance: {} (Use left and right arrows to control)",
                view.view_dist
            ),
            10,
            30,
        ),
        StatusLine::new(format!("FOV: {} (Use scroll to control)", view.fov), 10, 50),
        StatusLine::new(format!("X Total: {}", view.rotation.x), 10, 410),
        StatusLine::new(format!("Y Total: {}", view.rotation.y), 10, 435),
        StatusLine::new(format!("Z Total: {}", view.rotation.z), 10, 460),
    ]
}
