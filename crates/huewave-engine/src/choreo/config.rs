use crate::paint::{ColorStop, Rgba8};

/// Colors one stop cycles through: entrance color, midpoint, far end.
pub type StopPalette = [Rgba8; 3];

/// Palette of the two animated stops.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Palette {
    pub stop1: StopPalette,
    pub stop2: StopPalette,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stop1: [
                Rgba8::from_argb(255, 251, 218, 97),
                Rgba8::from_argb(255, 65, 88, 208),
                Rgba8::from_argb(255, 43, 210, 255),
            ],
            stop2: [
                Rgba8::from_argb(255, 255, 90, 205),
                Rgba8::from_argb(255, 200, 80, 192),
                Rgba8::from_argb(255, 43, 255, 136),
            ],
        }
    }
}

/// Choreography timing and colors.
///
/// Durations are seconds per pass and independent of each other. They are
/// validated when the choreographer builds its tracks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChoreoConfig {
    /// One-shot end-point sweep.
    pub entrance_secs: f64,
    /// One direction of the alternating color cycle.
    pub color_cycle_secs: f64,
    /// One full revolution.
    pub rotation_secs: f64,
    pub palette: Palette,
}

impl Default for ChoreoConfig {
    fn default() -> Self {
        Self {
            entrance_secs: 3.0,
            color_cycle_secs: 10.0,
            rotation_secs: 15.0,
            palette: Palette::default(),
        }
    }
}

impl ChoreoConfig {
    /// Initial stops: stop 1 at offset 0, stop 2 at offset 1, each in its entrance color.
    pub fn initial_stops(&self) -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, self.palette.stop1[0]),
            ColorStop::new(1.0, self.palette.stop2[0]),
        ]
    }
}
