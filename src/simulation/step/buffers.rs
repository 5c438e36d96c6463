//! Double-buffered field storage.
//!
//! Two grid slots and an index naming the committed ("front") one. A pass
//! reads the front slot, writes the other, then the index flips. The
//! scratch grid holds the state at the start of a tick so a failed tick can
//! be undone.

use crate::core::grid::Grid;
use crate::error::FireResult;

pub(crate) struct FieldBuffers {
    slots: [Grid; 2],
    front: usize,
    scratch: Grid,
}

impl FieldBuffers {
    pub(crate) fn new(width: u32, height: u32) -> FireResult<Self> {
        Ok(Self {
            slots: [Grid::new(width, height)?, Grid::new(width, height)?],
            front: 0,
            scratch: Grid::new(width, height)?,
        })
    }

    #[inline]
    pub(crate) fn front(&self) -> &Grid {
        &self.slots[self.front]
    }

    pub(crate) fn front_mut(&mut self) -> &mut Grid {
        &mut self.slots[self.front]
    }

    /// Run one pass front -> back and commit its output.
    pub(crate) fn apply<F>(&mut self, pass: F)
    where
        F: FnOnce(&Grid, &mut Grid),
    {
        let (first, second) = self.slots.split_at_mut(1);
        let (front, back) = if self.front == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        };
        pass(front, back);
        self.front ^= 1;
    }

    pub(crate) fn checkpoint(&mut self) {
        self.scratch.copy_from(&self.slots[self.front]);
    }

    /// Restore the last checkpoint as the committed grid
    pub(crate) fn rollback(&mut self) {
        self.slots[self.front].copy_from(&self.scratch);
    }

    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.clear();
        }
        self.scratch.clear();
    }

    pub(crate) fn memory_bytes(&self) -> usize {
        self.scratch.byte_len() * 3
    }
}
