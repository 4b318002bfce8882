/// Per-frame render pipeline
use crate::config::Config;
use crate::error::TransformError;
use crate::geometry::{Vertex, Wireframe};
use crate::input::{Action, Control};
use crate::overlay::status_lines;
use crate::surface::{Color, Surface};
use crate::transform::Transform;
use crate::view::ViewState;

/// Color of the wireframe edges
pub const LINE_COLOR: Color = Color::WHITE;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const BACKGROUND: Color = Color::BLACK;

/// Result of rendering a single frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Edges drawn and rotation advanced
    Drawn,
    /// Transform failed; only the overlay was drawn
    Skipped(TransformError),
}

/// The wireframe model plus the view state driving it
#[derive(Debug, Clone)]
pub struct Scene {
    model: Wireframe,
    view: ViewState,
}

impl Scene {
    pub fn new(model: Wireframe, view: ViewState) -> Self {
        Self { model, view }
    }

    /// The unit cube with the configured initial view
    pub fn from_config(config: &Config) -> Self {
        Self::new(Wireframe::cube(), ViewState::from_config(config))
    }

    pub fn model(&self) -> &Wireframe {
        &self.model
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn handle(&mut self, action: Action) -> Control {
        self.view.apply(action)
    }

    /// Rotate and project every model vertex for a `width` x `height` screen
    pub fn transform(&self, width: u32, height: u32) -> Result<Vec<Vertex>, TransformError> {
        let camera = self.view.camera(width, height);
        Transform::apply_all(self.model.vertices(), &self.view.rotation, &camera)
    }

    /// Clear, draw the wireframe, advance the rotation, draw the overlay, present.
    ///
    /// A transform failure skips drawing and advancing for this frame only.
    /// Errors from the surface itself are returned to the caller.
    pub fn render_frame<S: Surface>(&mut self, surface: &mut S) -> Result<FrameOutcome, S::Error> {
        surface.clear(BACKGROUND);

        let (width, height) = surface.size();
        let outcome = match self.transform(width, height) {
            Ok(points) => {
                for (from, to) in self.model.edges() {
                    surface.draw_line(
                        (points[from].x(), points[from].y()),
                        (points[to].x(), points[to].y()),
                        LINE_COLOR,
                    );
                }
                self.view.advance();
                FrameOutcome::Drawn
            }
            Err(err) => {
                log::debug!("Skipping frame: {}", err);
                FrameOutcome::Skipped(err)
            }
        };

        for line in status_lines(&self.view) {
            surface.draw_text(&line.text, line.position, TEXT_COLOR);
        }

        surface.present()?;
        Ok(outcome)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ScreenPoint;
    use crate::transform::RotationState;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Color),
        Line(ScreenPoint, ScreenPoint, Color),
        Text(String, (i32, i32)),
        Present,
    }

    /// Records every drawing call instead of rasterizing
    struct RecordingSurface {
        width: u32,
        height: u32,
        calls: Vec<Call>,
    }

    impl RecordingSurface {
        fn new() -> Self {
            Self {
                width: 640,
                height: 480,
                calls: Vec::new(),
            }
        }

        fn lines(&self) -> Vec<(ScreenPoint, ScreenPoint)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Line(from, to, _) => Some((*from, *to)),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Text(text, _) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        type Error = std::convert::Infallible;

        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn clear(&mut self, color: Color) {
            self.calls.push(Call::Clear(color));
        }

        fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
            self.calls.push(Call::Line(from, to, color));
        }

        fn draw_text(&mut self, text: &str, at: (i32, i32), _color: Color) {
            self.calls.push(Call::Text(text.to_string(), at));
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    fn render(scene: &mut Scene) -> (FrameOutcome, RecordingSurface) {
        let mut surface = RecordingSurface::new();
        let outcome = match scene.render_frame(&mut surface) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        };
        (outcome, surface)
    }

    #[test]
    fn test_first_frame_from_initial_state() {
        let mut scene = Scene::default();
        let (outcome, surface) = render(&mut scene);

        assert_eq!(outcome, FrameOutcome::Drawn);
        assert_eq!(scene.view().rotation, RotationState::new(1, 1, 1));

        // First frame draws at angle 0; the advance happens afterwards
        let camera = ViewState::default().camera(640, 480);
        let expected: Vec<Vertex> = Wireframe::cube()
            .vertices()
            .iter()
            .map(|v| camera.project(&v.rotate_x(0.0).rotate_y(0.0).rotate_z(0.0)))
            .collect();

        let lines = surface.lines();
        assert_eq!(lines.len(), 24);
        for ((from, to), (a, b)) in lines.iter().zip(Wireframe::cube().edges()) {
            assert_eq!(*from, (expected[a].x(), expected[a].y()));
            assert_eq!(*to, (expected[b].x(), expected[b].y()));
        }
    }

    #[test]
    fn test_second_frame_uses_one_degree() {
        let mut scene = Scene::default();
        render(&mut scene);
        let (_, surface) = render(&mut scene);

        let camera = ViewState::default().camera(640, 480);
        let expected: Vec<Vertex> = Wireframe::cube()
            .vertices()
            .iter()
            .map(|v| camera.project(&v.rotate_x(1.0).rotate_y(1.0).rotate_z(1.0)))
            .collect();

        let (from, to) = surface.lines()[0];
        assert_eq!(from, (expected[0].x(), expected[0].y()));
        assert_eq!(to, (expected[1].x(), expected[1].y()));
        assert_eq!(scene.view().rotation, RotationState::new(2, 2, 2));
    }

    #[test]
    fn test_frame_call_order() {
        let mut scene = Scene::default();
        let (_, surface) = render(&mut scene);

        assert_eq!(surface.calls.first(), Some(&Call::Clear(BACKGROUND)));
        assert_eq!(surface.calls.last(), Some(&Call::Present));
        assert!(surface.calls[1..25]
            .iter()
            .all(|call| matches!(call, Call::Line(_, _, LINE_COLOR))));
        assert!(surface.calls[25..31]
            .iter()
            .all(|call| matches!(call, Call::Text(..))));
    }

    #[test]
    fn test_overlay_reflects_advanced_angles() {
        let mut scene = Scene::default();
        let (_, surface) = render(&mut scene);
        let texts = surface.texts();

        assert_eq!(texts.len(), 6);
        assert_eq!(texts[3], "X Total: 1");
        assert_eq!(texts[4], "Y Total: 1");
        assert_eq!(texts[5], "Z Total: 1");
    }

    #[test]
    fn test_zero_speed_is_stable() {
        let mut scene = Scene::default();
        scene.handle(Action::SpeedDown);
        assert_eq!(scene.view().speed, 0);

        let first = scene.transform(640, 480).unwrap();
        let (_, surface_a) = render(&mut scene);
        let (_, surface_b) = render(&mut scene);
        let second = scene.transform(640, 480).unwrap();

        assert_eq!(first, second);
        assert_eq!(surface_a.lines(), surface_b.lines());
        assert_eq!(scene.view().rotation, RotationState::zero());
    }

    #[test]
    fn test_scroll_across_frames() {
        let mut scene = Scene::default();
        for i in 0..10 {
            scene.handle(Action::ScrollDown);
            if i % 3 == 0 {
                render(&mut scene);
            }
        }
        assert_eq!(scene.view().fov, 156);
    }

    #[test]
    fn test_non_finite_vertex_skips_frame() {
        let model = Wireframe::from_parts(
            vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(f64::INFINITY, 0.0, 0.0),
                Vertex::new(1.0, 1.0, 1.0),
                Vertex::new(1.0, 0.0, 1.0),
            ],
            vec![[0, 1, 2, 3]],
        );
        let mut scene = Scene::new(model, ViewState::default());

        let (outcome, surface) = render(&mut scene);

        assert!(matches!(
            outcome,
            FrameOutcome::Skipped(TransformError::NonFinite { index: 1, .. })
        ));
        assert!(surface.lines().is_empty());
        assert_eq!(surface.texts().len(), 6);
        assert_eq!(surface.calls.last(), Some(&Call::Present));
        assert_eq!(scene.view().rotation, RotationState::zero());
    }

    #[test]
    fn test_degenerate_projection_still_draws() {
        let mut scene = Scene::default();
        // view_dist 1 puts the z = -1 face on the eye plane
        for _ in 0..3 {
            scene.handle(Action::ViewCloser);
        }
        scene.handle(Action::SpeedDown);

        let (outcome, surface) = render(&mut scene);
        assert_eq!(outcome, FrameOutcome::Drawn);

        // Vertex 0 (-1, 1, -1) is passed through unprojected
        let (from, _) = surface.lines()[0];
        assert_eq!(from, (-1.0, 1.0));
    }

    #[test]
    fn test_extreme_view_values_keep_rendering() {
        let mut scene = Scene::new(Wireframe::cube(), ViewState::new(i64::MAX, 4, i64::MAX));
        scene.handle(Action::ScrollUp);
        scene.handle(Action::SpeedUp);

        render(&mut scene);
        render(&mut scene);
        let (_, surface) = render(&mut scene);

        assert_eq!(scene.view().rotation, RotationState::new(i64::MAX, i64::MAX, i64::MAX));
        assert_eq!(surface.texts()[0], format!("Rotation Speed: {} (Use + or - to control)", i64::MAX));
    }
}
