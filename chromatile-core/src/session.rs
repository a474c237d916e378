//! The coordinator: one shared color record and the current model's
//! descriptor set.
//!
//! Every user interaction funnels through [`Session::apply`] or
//! [`Session::switch`]; tiles only ever see the record those return.
//! There is no other path between tiles.

use crate::color::{ColorPatch, ColorRecord};
use crate::convert::convert_record;
use crate::space::{space, Mode, SpaceDescriptor};

/// The color every tile starts from.
pub fn initial_color() -> ColorRecord {
    ColorRecord::new(Mode::Oklch, [0.64, 0.12, 0.0])
}

/// Shared explorer state: the single color record plus the active model's
/// tile descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    color: ColorRecord,
    space: SpaceDescriptor,
}

impl Session {
    pub fn new(color: ColorRecord) -> Self {
        let space = space(color.mode());
        Self { color, space }
    }

    pub fn color(&self) -> ColorRecord {
        self.color
    }

    pub fn mode(&self) -> Mode {
        self.color.mode()
    }

    pub fn space(&self) -> &SpaceDescriptor {
        &self.space
    }

    /// Merge a tile-originated partial update into the shared record and
    /// return the post-update record for fan-out.
    pub fn apply(&mut self, patch: &ColorPatch) -> ColorRecord {
        self.color = self.color.merge(patch);
        self.color
    }

    /// Switch to another model: convert the shared color through the
    /// conversion library and rebuild the descriptor set. Callers drop
    /// their tiles and rebuild from the new [`space`](Self::space).
    pub fn switch(&mut self, mode: Mode) -> ColorRecord {
        self.color = convert_record(&self.color, mode);
        self.space = space(mode);
        self.color
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(initial_color())
    }
}
