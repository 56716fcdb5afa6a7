use crate::canvas::Canvas;
use crate::element::ItemRecord;

/// Most snapshots kept for undo
pub const MAX_UNDO_DEPTH: usize = 50;

/// Detached copy of a canvas' serialized state
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot(Vec<ItemRecord>);

impl Snapshot {
    pub fn capture(canvas: &Canvas) -> Self {
        Self(canvas.serialize())
    }

    pub fn records(&self) -> &[ItemRecord] {
        &self.0
    }

    fn restore_into(&self, canvas: &mut Canvas) {
        canvas.deserialize(&self.0);
    }
}

/// Whole-canvas undo/redo stacks
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Canvas states to go back to, most recent last
    undo_stack: Vec<Snapshot>,
    /// Canvas states undone since the last edit, most recent last
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the canvas as it is before an edit gesture starts.
    ///
    /// Call once per gesture (press, fill click, clear), not per drag sample.
    /// Drops the oldest snapshot beyond `MAX_UNDO_DEPTH` and forgets all redo
    /// states.
    pub fn snapshot_before_action(&mut self, canvas: &Canvas) {
        self.undo_stack.push(Snapshot::capture(canvas));
        if self.undo_stack.len() > MAX_UNDO_DEPTH {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        log::debug!("Snapshot pushed, undo depth {}", self.undo_stack.len());
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(Snapshot::capture(canvas));
        snapshot.restore_into(canvas);
        log::debug!(
            "Undo: {} undo / {} redo left",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Re-apply the last undone snapshot. Returns false when there is nothing to redo.
    ///
    /// Unlike `snapshot_before_action` this does not trim the undo stack.
    /// Every redo follows an undo that popped, so the depth still stays
    /// within `MAX_UNDO_DEPTH`.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(Snapshot::capture(canvas));
        snapshot.restore_into(canvas);
        log::debug!(
            "Redo: {} undo / {} redo left",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Snapshot] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Snapshot] {
        &self.redo_stack
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
