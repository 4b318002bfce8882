/// Adjustable view parameters and their input handling
use crate::config::Config;
use crate::input::{Action, Control};
use crate::projection::Camera;
use crate::transform::RotationState;

/// Step applied to `fov` per scroll notch
pub const FOV_STEP: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub fov: i64,
    pub view_dist: i64,
    /// Degrees added to every axis per drawn frame
    pub speed: i64,
    pub rotation: RotationState,
}

impl ViewState {
    pub fn new(fov: i64, view_dist: i64, speed: i64) -> Self {
        Self {
            fov,
            view_dist,
            speed,
            rotation: RotationState::zero(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.fov, config.view_dist, config.speed)
    }

    pub fn apply(&mut self, action: Action) -> Control {
        match action {
            Action::Quit => return Control::Quit,
            Action::ScrollUp => self.fov = self.fov.saturating_add(FOV_STEP),
            Action::ScrollDown => self.fov = self.fov.saturating_sub(FOV_STEP),
            Action::ViewCloser => self.view_dist = self.view_dist.saturating_sub(1),
            Action::ViewFarther => self.view_dist = self.view_dist.saturating_add(1),
            Action::SpeedUp => self.speed = self.speed.saturating_add(1),
            Action::SpeedDown => self.speed = self.speed.saturating_sub(1),
        }
        Control::Continue
    }

    /// Advance the rotation by the current speed
    pub fn advance(&mut self) {
        self.rotation.advance(self.speed);
    }

    pub fn camera(&self, width: u32, height: u32) -> Camera {
        Camera::new(width, height, self.fov, self.view_dist)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
