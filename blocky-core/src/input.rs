/// Pointer input: pixel to clip-space conversion and drag tracking
///
/// Placement of the drawing surface in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Client pixel coordinates to normalized device coordinates, y up.
    pub fn to_ndc(&self, client_x: f32, client_y: f32) -> [f32; 2] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let x = ((client_x - self.left) - half_w) / half_w;
        let y = (half_h - (client_y - self.top)) / half_h;
        [x, y]
    }
}

/// Platform-neutral pointer events, already in NDC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32, primary_held: bool },
    Up,
}

/// Turns pointer events into drag deltas.
#[derive(Debug, Default, Clone)]
pub struct DragTracker {
    last: Option<[f32; 2]>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delta since the previous held position, if dragging.
    ///
    /// A press without movement yields a zero delta.
    pub fn handle(&mut self, event: PointerEvent) -> Option<[f32; 2]> {
        match event {
            PointerEvent::Down { x, y } => {
                self.last = Some([x, y]);
                Some([0.0, 0.0])
            }
            PointerEvent::Move {
                x,
                y,
                primary_held: true,
            } => {
                let delta = match self.last {
                    Some([lx, ly]) => [x - lx, y - ly],
                    None => [0.0, 0.0],
                };
                self.last = Some([x, y]);
                Some(delta)
            }
            PointerEvent::Move {
                primary_held: false,
                ..
            }
            | PointerEvent::Up => {
                self.last = None;
                None
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
