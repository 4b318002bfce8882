/// Backend-independent input actions
///
/// Backends translate their own key and button codes into these at the
/// polling boundary; the scene never sees raw codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Window close or equivalent
    Quit,
    /// Mouse wheel up: raise fov (zoom in)
    ScrollUp,
    /// Mouse wheel down: lower fov (zoom out)
    ScrollDown,
    /// Left arrow: move the viewpoint closer
    ViewCloser,
    /// Right arrow: move the viewpoint farther
    ViewFarther,
    /// `+` key
    SpeedUp,
    /// `-` key
    SpeedDown,
}

/// What the loop should do after handling an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}
