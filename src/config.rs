//! Per-grid carousel settings.
//!
//! Every grid on the page shares one controller implementation; the only
//! things that differ between them are whether a release snaps to the nearest
//! item and how far an arrow button scrolls. The drag sensitivity is fixed
//! (see [`crate::state::drag::DRAG_SENSITIVITY`]).

use serde::{Deserialize, Serialize};

use crate::model::GridKind;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Animate to the nearest item boundary when a drag ends.
    pub snap: bool,
    /// Pixels scrolled per arrow-button click.
    pub button_step: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            snap: true,
            button_step: 240.0,
        }
    }
}

impl CarouselConfig {
    pub fn for_grid(kind: GridKind) -> Self {
        match kind {
            GridKind::Team => Self {
                snap: false,
                button_step: 220.0,
            },
            GridKind::Portfolio => Self {
                snap: false,
                button_step: 300.0,
            },
            GridKind::Services => Self {
                button_step: 300.0,
                ..Default::default()
            },
            GridKind::Reviews | GridKind::Certifications | GridKind::Recognition => {
                Self::default()
            }
        }
    }
}
