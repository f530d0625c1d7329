//! Arrow-key nudging of the element being edited
//!
//! Step sizes are multiples of the element's spatium. Control picks the
//! medium step, Alt the large one. An active raster never lets a step fall
//! below one raster cell.

use serde::{Deserialize, Serialize};

use crate::models::{Key, Modifiers, Point, TargetKind};

/// Small / medium / large nudge steps in spatium units
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NudgeSteps {
    pub step: f64,
    pub step10: f64,
    pub step50: f64,
}

impl Default for NudgeSteps {
    fn default() -> Self {
        Self {
            step: 1.0,
            step10: 10.0,
            step50: 50.0,
        }
    }
}

/// Beams move in much finer increments than other elements
pub const BEAM_STEPS: NudgeSteps = NudgeSteps {
    step: 0.25,
    step10: 1.0,
    step50: 4.0,
};

impl NudgeSteps {
    /// Step in spatium units for the held modifiers
    pub fn pick(&self, modifiers: Modifiers) -> f64 {
        if modifiers.contains(Modifiers::CONTROL) {
            self.step10
        } else if modifiers.contains(Modifiers::ALT) {
            self.step50
        } else {
            self.step
        }
    }
}

/// Snapping grid as divisions per spatium. `None` (or zero) is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Raster {
    pub horizontal: Option<u32>,
    pub vertical: Option<u32>,
}

impl Raster {
    pub fn horizontal_enabled(&self) -> bool {
        matches!(self.horizontal, Some(d) if d > 0)
    }

    pub fn vertical_enabled(&self) -> bool {
        matches!(self.vertical, Some(d) if d > 0)
    }
}

/// Raise `step` to one raster cell if the grid is coarser than the step
pub fn snap_to_raster(step: f64, spatium: f64, divisions: Option<u32>) -> f64 {
    match divisions {
        Some(d) if d > 0 => {
            let cell = spatium / d as f64;
            if step < cell {
                cell
            } else {
                step
            }
        }
        _ => step,
    }
}

/// Horizontal and vertical step lengths for a target
pub fn step_size(kind: TargetKind, modifiers: Modifiers, spatium: f64, steps: &NudgeSteps, raster: &Raster) -> (f64, f64) {
    let table = if kind.is_beam() { &BEAM_STEPS } else { steps };
    let step = table.pick(modifiers) * spatium;

    let x = snap_to_raster(step, spatium, raster.horizontal);
    let y = snap_to_raster(step, spatium, raster.vertical);
    (x, y)
}

/// Offset for an arrow key, or None if the key does not nudge
pub fn nudge_delta(key: Key, (x, y): (f64, f64)) -> Option<Point> {
    match key {
        Key::Left => Some(Point::new(-x, 0.0)),
        Key::Right => Some(Point::new(x, 0.0)),
        Key::Up => Some(Point::new(0.0, -y)),
        Key::Down => Some(Point::new(0.0, y)),
        _ => None,
    }
}
