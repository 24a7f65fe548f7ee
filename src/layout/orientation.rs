//! Orientation handling: which screen axis carries depth, and with which
//! sign.
//!
//! The coordinate engine always works in (depth, rank) space. Only at
//! emission time are coordinates mapped to screen (x, y): `Left`/`Right`
//! put depth on the x-axis, `Top`/`Bottom` transpose. [AxisSigns] holds the
//! per-axis direction flips as an explicit two-field struct, so downstream
//! axis configuration never has to look signs up by axis name.

use serde::{Deserialize, Serialize};

/// Direction in which the tree grows away from its root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Root at the bottom, leaves at the top
    Top,
    /// Root at the right margin, leaves growing rightward toward it
    #[default]
    Right,
    /// Root at the top, leaves at the bottom
    Bottom,
    /// Root at the left margin
    Left,
}

/// Per-axis direction signs (`+1.0` or `-1.0`) computed once from the
/// orientation.
///
/// `depth` multiplies the depth coordinate, `rank` the rank coordinate,
/// before the transposition step. The figure-assembly collaborator needs
/// these to mirror tick positions consistently with the primitives.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSigns {
    /// Sign applied to depth values
    pub depth: f64,
    /// Sign applied to rank values
    pub rank: f64,
}

impl Orientation {
    /// Returns the direction signs for this orientation.
    ///
    /// `Right` and `Bottom` negate depth so the root sits at the far margin
    /// with the tree growing toward it; the transposed orientations also
    /// negate rank to mirror the label axis.
    pub fn signs(self) -> AxisSigns {
        match self {
            Orientation::Right => AxisSigns { depth: -1.0, rank: 1.0 },
            Orientation::Left => AxisSigns { depth: 1.0, rank: 1.0 },
            Orientation::Bottom => AxisSigns { depth: -1.0, rank: -1.0 },
            Orientation::Top => AxisSigns { depth: 1.0, rank: -1.0 },
        }
    }

    /// Returns `true` if depth maps to the screen y-axis (`Top`/`Bottom`).
    pub fn is_transposed(self) -> bool {
        matches!(self, Orientation::Top | Orientation::Bottom)
    }

    /// Maps a (depth, rank) position to screen (x, y) for this orientation.
    pub fn project(self, depth: f64, rank: f64) -> (f64, f64) {
        let signs = self.signs();
        let d = signs.depth * depth;
        let r = signs.rank * rank;
        if self.is_transposed() { (r, d) } else { (d, r) }
    }
}
