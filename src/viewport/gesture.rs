use super::surface::ClientPoint;
use super::view_box::ViewBox;
use crate::flow::Position;

pub type PointerId = i64;

/// The gesture in progress, with everything snapshotted when it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// One pointer dragging the view.
    Pan {
        start_view: ViewBox,
        start_client: ClientPoint,
    },
    /// Two pointers zooming around the graph point under their midpoint.
    Pinch {
        start_view: ViewBox,
        start_client: ClientPoint,
        start_dist: f64,
        anchor: Position,
    },
}

/// Pointers currently pressed, in the order they went down.
///
/// Pinch gestures track the *first two* pointers, so insertion order matters.
#[derive(Debug, Clone, Default)]
pub struct ActivePointers {
    pointers: Vec<(PointerId, ClientPoint)>,
}

impl ActivePointers {
    /// Registers a pointer, or updates it if it is already down.
    pub fn insert(&mut self, id: PointerId, client: ClientPoint) {
        match self.pointers.iter_mut().find(|(pid, _)| *pid == id) {
            Some(entry) => entry.1 = client,
            None => self.pointers.push((id, client)),
        }
    }

    /// Updates a tracked pointer. Returns `false` for pointers that are not down.
    pub fn update(&mut self, id: PointerId, client: ClientPoint) -> bool {
        match self.pointers.iter_mut().find(|(pid, _)| *pid == id) {
            Some(entry) => {
                entry.1 = client;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: PointerId) {
        self.pointers.retain(|(pid, _)| *pid != id);
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// The first two pointers that went down and are still active.
    pub fn first_pair(&self) -> Option<(ClientPoint, ClientPoint)> {
        match self.pointers.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.pointers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pair_follows_press_order() {
        let mut pointers = ActivePointers::default();
        pointers.insert(7, ClientPoint::new(1.0, 1.0));
        assert!(pointers.first_pair().is_none());

        pointers.insert(3, ClientPoint::new(2.0, 2.0));
        pointers.insert(9, ClientPoint::new(3.0, 3.0));
        let (a, b) = pointers.first_pair().unwrap();
        assert_eq!((a.x, b.x), (1.0, 2.0));

        pointers.remove(7);
        let (a, b) = pointers.first_pair().unwrap();
        assert_eq!((a.x, b.x), (2.0, 3.0));
    }

    #[test]
    fn update_ignores_unknown_pointer() {
        let mut pointers = ActivePointers::default();
        assert!(!pointers.update(1, ClientPoint::default()));
        assert!(pointers.is_empty());
    }
}
