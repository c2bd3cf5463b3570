//! Host contract: change notifications out, props back in.
//!
//! The engine never owns durable shape state. Every edit leaves as a
//! `ShapeUpdate`, and the host persists it and re-supplies the shape on its
//! next render. `Board` is a minimal in-memory host that does exactly that.

use sb_core::id::ShapeId;
use sb_core::model::Shape;
use serde::Serialize;

/// A fire-and-forget change notification for one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShapeUpdate {
    Position { id: ShapeId, x: f32, y: f32 },
    Size { id: ShapeId, width: f32, height: f32 },
    Color { id: ShapeId, color: String },
    Remove { id: ShapeId },
}

impl ShapeUpdate {
    /// Deliver this update to the matching host callback.
    pub fn dispatch(&self, host: &mut dyn ShapeHost) {
        match self {
            Self::Position { id, x, y } => host.on_position_change(*id, *x, *y),
            Self::Size { id, width, height } => host.on_size_change(*id, *width, *height),
            Self::Color { id, color } => host.on_color_change(*id, color),
            Self::Remove { id } => host.on_remove(*id),
        }
    }
}

/// The four callbacks a host provides.
pub trait ShapeHost {
    fn on_position_change(&mut self, id: ShapeId, x: f32, y: f32);
    fn on_size_change(&mut self, id: ShapeId, width: f32, height: f32);
    fn on_remove(&mut self, id: ShapeId);
    fn on_color_change(&mut self, id: ShapeId, color: &str);
}

/// Deliver a batch of updates in order.
pub fn dispatch<'a>(updates: impl IntoIterator<Item = &'a ShapeUpdate>, host: &mut dyn ShapeHost) {
    for update in updates {
        update.dispatch(host);
    }
}

// ─── Board ───────────────────────────────────────────────────────────────

/// An in-memory host: a flat, ordered list of shapes.
///
/// Later shapes are drawn on top. Updates for unknown ids are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    shapes: Vec<Shape>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Replace the shape with the same id, or append it.
    pub fn upsert(&mut self, shape: Shape) {
        match self.get_mut(shape.id) {
            Some(existing) => *existing = shape,
            None => self.shapes.push(shape),
        }
    }

    /// Remove a shape, returning it if it existed.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let idx = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn apply(&mut self, update: &ShapeUpdate) {
        update.dispatch(self);
    }
}

impl ShapeHost for Board {
    fn on_position_change(&mut self, id: ShapeId, x: f32, y: f32) {
        if let Some(shape) = self.get_mut(id) {
            shape.x = x;
            shape.y = y;
        }
    }

    fn on_size_change(&mut self, id: ShapeId, width: f32, height: f32) {
        if let Some(shape) = self.get_mut(id) {
            shape.width = width;
            shape.height = height;
        }
    }

    fn on_remove(&mut self, id: ShapeId) {
        if self.remove(id).is_none() {
            log::debug!("remove for unknown shape {id}");
        }
    }

    fn on_color_change(&mut self, id: ShapeId, color: &str) {
        if let Some(shape) = self.get_mut(id) {
            shape.color = color.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sb_core::model::ShapeKind;

    fn board() -> Board {
        Board::from_shapes(vec![
            Shape::new(ShapeId::intern("host_a"), ShapeKind::Star, 0.0, 0.0, 100.0, 100.0),
            Shape::new(ShapeId::intern("host_b"), ShapeKind::Circle, 50.0, 50.0, 100.0, 100.0),
        ])
    }

    #[test]
    fn updates_reach_the_board() {
        let mut board = board();
        let a = ShapeId::intern("host_a");
        let updates = [
            ShapeUpdate::Position { id: a, x: 10.0, y: 20.0 },
            ShapeUpdate::Size {
                id: a,
                width: 60.0,
                height: 70.0,
            },
            ShapeUpdate::Color {
                id: a,
                color: "hotpink".into(),
            },
        ];
        dispatch(&updates, &mut board);

        let shape = board.get(a).unwrap();
        assert_eq!((shape.x, shape.y, shape.width, shape.height), (10.0, 20.0, 60.0, 70.0));
        assert_eq!(shape.color, "hotpink");
    }

    #[test]
    fn remove_and_unknown_ids() {
        let mut board = board();
        board.apply(&ShapeUpdate::Remove {
            id: ShapeId::intern("host_a"),
        });
        assert_eq!(board.len(), 1);

        // Unknown ids are ignored.
        board.apply(&ShapeUpdate::Position {
            id: ShapeId::intern("host_missing"),
            x: 1.0,
            y: 1.0,
        });
        board.apply(&ShapeUpdate::Remove {
            id: ShapeId::intern("host_missing"),
        });
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut board = board();
        let a = ShapeId::intern("host_a");
        board.upsert(Shape::new(a, ShapeKind::Moon, 5.0, 5.0, 80.0, 80.0));
        assert_eq!(board.len(), 2);
        assert_eq!(board.shapes()[0].kind, ShapeKind::Moon);
    }

    #[test]
    fn updates_serialize_with_kind_tag() {
        let update = ShapeUpdate::Position {
            id: ShapeId::intern("host_json"),
            x: 1.5,
            y: 2.0,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"kind":"position","id":"host_json","x":1.5,"y":2.0}"#
        );
    }
}
