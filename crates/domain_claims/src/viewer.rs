//! System-flow diagram viewer state
//!
//! The viewer is a pure reducer: [`ViewerState::apply`] takes one input and
//! returns the effect the host should perform, if any. Zoom is always kept
//! within [`MIN_ZOOM`, `MAX_ZOOM`].

use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 5.0;
/// Factor applied by the zoom buttons and keys
pub const ZOOM_STEP: f64 = 1.2;
const WHEEL_OUT: f64 = 0.9;
const WHEEL_IN: f64 = 1.1;

pub const DIAGRAM_HREF: &str = "/systemflow.png";
pub const DIAGRAM_FILENAME: &str = "system-flow-diagram.png";

/// Screen-space point in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return 1.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewerState {
    pub open: bool,
    pub zoom: f64,
    pub position: Point,
    pub dragging: bool,
    pub last_pointer: Point,
    pub fullscreen: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            open: false,
            zoom: 1.0,
            position: Point::default(),
            dragging: false,
            last_pointer: Point::default(),
            fullscreen: false,
        }
    }
}

#[derive(Deserialize)]
struct RawViewerState {
    open: bool,
    zoom: f64,
    position: Point,
    dragging: bool,
    last_pointer: Point,
    fullscreen: bool,
}

/// States sent by a client are brought back into the zoom range
impl<'de> Deserialize<'de> for ViewerState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawViewerState::deserialize(deserializer)?;
        Ok(Self {
            open: raw.open,
            zoom: clamp_zoom(raw.zoom),
            position: raw.position,
            dragging: raw.dragging,
            last_pointer: raw.last_pointer,
            fullscreen: raw.fullscreen,
        })
    }
}

/// User interaction with the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewerInput {
    Open,
    Close,
    Wheel { delta_y: f64 },
    ZoomIn,
    ZoomOut,
    /// Slider value, clamped like every other zoom change
    SetZoom { zoom: f64 },
    PointerDown { button: u8, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Reset,
    ToggleFullscreen,
    Download,
    Key { key: String },
}

/// Side effect the host performs after an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewerEffect {
    Close,
    Download { href: String, filename: String },
    EnterFullscreen,
    ExitFullscreen,
}

impl ViewerState {
    /// An open viewer at the default view
    pub fn opened() -> Self {
        Self { open: true, ..Self::default() }
    }

    /// Zoom as a whole percentage for the toolbar readout
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Applies one input; everything except `Open` is ignored while closed
    pub fn apply(&mut self, input: ViewerInput) -> Option<ViewerEffect> {
        self.zoom = clamp_zoom(self.zoom);
        if !self.open {
            if matches!(input, ViewerInput::Open) {
                *self = Self::opened();
            }
            return None;
        }

        match input {
            ViewerInput::Open => None,
            ViewerInput::Close => self.close(),
            ViewerInput::Wheel { delta_y } => {
                let factor = if delta_y > 0.0 { WHEEL_OUT } else { WHEEL_IN };
                self.zoom = clamp_zoom(self.zoom * factor);
                None
            }
            ViewerInput::ZoomIn => {
                self.zoom_in();
                None
            }
            ViewerInput::ZoomOut => {
                self.zoom_out();
                None
            }
            ViewerInput::SetZoom { zoom } => {
                self.zoom = clamp_zoom(zoom);
                None
            }
            ViewerInput::PointerDown { button, x, y } => {
                // primary button only
                if button == 0 {
                    self.dragging = true;
                    self.last_pointer = Point::new(x, y);
                }
                None
            }
            ViewerInput::PointerMove { x, y } => {
                if self.dragging {
                    self.position.x += x - self.last_pointer.x;
                    self.position.y += y - self.last_pointer.y;
                    self.last_pointer = Point::new(x, y);
                }
                None
            }
            ViewerInput::PointerUp => {
                self.dragging = false;
                None
            }
            ViewerInput::Reset => {
                self.reset();
                None
            }
            ViewerInput::ToggleFullscreen => Some(self.toggle_fullscreen()),
            ViewerInput::Download => Some(ViewerEffect::Download {
                href: DIAGRAM_HREF.to_string(),
                filename: DIAGRAM_FILENAME.to_string(),
            }),
            ViewerInput::Key { key } => self.key(&key),
        }
    }

    fn key(&mut self, key: &str) -> Option<ViewerEffect> {
        match key {
            "Escape" => self.close(),
            "=" | "+" => {
                self.zoom_in();
                None
            }
            "-" => {
                self.zoom_out();
                None
            }
            "0" => {
                self.reset();
                None
            }
            "f" => Some(self.toggle_fullscreen()),
            _ => None,
        }
    }

    fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom * ZOOM_STEP);
    }

    fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom / ZOOM_STEP);
    }

    fn reset(&mut self) {
        self.zoom = 1.0;
        self.position = Point::default();
    }

    fn toggle_fullscreen(&mut self) -> ViewerEffect {
        self.fullscreen = !self.fullscreen;
        if self.fullscreen {
            ViewerEffect::EnterFullscreen
        } else {
            ViewerEffect::ExitFullscreen
        }
    }

    fn close(&mut self) -> Option<ViewerEffect> {
        self.open = false;
        self.dragging = false;
        Some(ViewerEffect::Close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> ViewerInput {
        ViewerInput::Key { key: k.to_string() }
    }

    #[test]
    fn test_wheel_direction() {
        let mut v = ViewerState::opened();
        v.apply(ViewerInput::Wheel { delta_y: 120.0 });
        assert!((v.zoom - 0.9).abs() < 1e-9);

        let mut v = ViewerState::opened();
        v.apply(ViewerInput::Wheel { delta_y: -120.0 });
        assert!((v.zoom - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_in_clamps_at_max() {
        let mut v = ViewerState::opened();
        for _ in 0..50 {
            v.apply(ViewerInput::ZoomIn);
        }
        assert_eq!(v.zoom, MAX_ZOOM);
        assert_eq!(v.zoom_percent(), 500);
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut v = ViewerState::opened();
        v.apply(ViewerInput::SetZoom { zoom: 0.01 });
        assert_eq!(v.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_drag_pans_by_pointer_delta() {
        let mut v = ViewerState::opened();
        v.apply(ViewerInput::PointerDown { button: 0, x: 10.0, y: 10.0 });
        v.apply(ViewerInput::PointerMove { x: 25.0, y: 5.0 });
        v.apply(ViewerInput::PointerMove { x: 30.0, y: 0.0 });
        assert_eq!(v.position, Point::new(20.0, -10.0));

        v.apply(ViewerInput::PointerUp);
        v.apply(ViewerInput::PointerMove { x: 100.0, y: 100.0 });
        assert_eq!(v.position, Point::new(20.0, -10.0));
    }

    #[test]
    fn test_secondary_button_does_not_drag() {
        let mut v = ViewerState::opened();
        v.apply(ViewerInput::PointerDown { button: 2, x: 0.0, y: 0.0 });
        assert!(!v.dragging);
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let mut v = ViewerState::opened();
        v.apply(key("+"));
        v.apply(key("="));
        assert!((v.zoom - 1.44).abs() < 1e-9);
        v.apply(key("0"));
        assert_eq!(v.zoom, 1.0);
        assert_eq!(v.apply(key("f")), Some(ViewerEffect::EnterFullscreen));
        assert_eq!(v.apply(key("f")), Some(ViewerEffect::ExitFullscreen));
        assert_eq!(v.apply(key("Escape")), Some(ViewerEffect::Close));
        assert!(!v.open);
    }

    #[test]
    fn test_closed_viewer_ignores_keys() {
        let mut v = ViewerState::default();
        assert_eq!(v.apply(key("+")), None);
        assert_eq!(v.zoom, 1.0);
        v.apply(ViewerInput::Open);
        assert!(v.open);
    }

    #[test]
    fn test_out_of_range_state_is_clamped_on_apply() {
        let mut v = ViewerState { zoom: 50.0, ..ViewerState::opened() };
        v.apply(ViewerInput::PointerUp);
        v.apply(key("x"));
        assert_eq!(v.zoom, MAX_ZOOM);
        assert_eq!(v.zoom_percent(), 500);

        let mut closed = ViewerState { zoom: 0.001, ..ViewerState::default() };
        closed.apply(key("+"));
        assert_eq!(closed.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_deserialized_zoom_is_clamped() {
        let json = r#"{
            "open": true,
            "zoom": 50.0,
            "position": { "x": 0.0, "y": 0.0 },
            "dragging": false,
            "last_pointer": { "x": 0.0, "y": 0.0 },
            "fullscreen": false
        }"#;
        let v: ViewerState = serde_json::from_str(json).unwrap();
        assert_eq!(v.zoom, MAX_ZOOM);
        assert!(v.open);
    }

    #[test]
    fn test_download_effect() {
        let mut v = ViewerState::opened();
        assert_eq!(
            v.apply(ViewerInput::Download),
            Some(ViewerEffect::Download {
                href: "/systemflow.png".to_string(),
                filename: "system-flow-diagram.png".to_string(),
            })
        );
    }
}
