//! Warehouse priority ordering.
//!
//! Keeps an ordered working list of warehouses and recomputes the 1-based
//! `order` field after every mutation. Drag-and-drop is modeled as an
//! explicit state machine (`Idle` -> `Dragging` -> drop) so the move
//! computation stays independent of any browser drag API.

use super::aggregate::Warehouse;

/// Drag interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A row grabbed at `source` is being dragged.
    Dragging { source: usize },
}

/// Ordered working list of warehouses.
///
/// Invariant: after construction and after every mutation,
/// `items[i].order == i as u32 + 1` for all `i`.
#[derive(Debug, Clone, Default)]
pub struct PriorityOrderer {
    items: Vec<Warehouse>,
    drag: DragState,
}

impl PriorityOrderer {
    /// Build the working list from a backend fetch: sort ascending by the
    /// stored `order`, then renumber so the sequence is contiguous even if
    /// the backend held gaps or duplicates.
    pub fn from_fetched(mut warehouses: Vec<Warehouse>) -> Self {
        warehouses.sort_by_key(|w| w.order);
        let mut orderer = Self {
            items: warehouses,
            drag: DragState::Idle,
        };
        orderer.renumber();
        orderer
    }

    pub fn items(&self) -> &[Warehouse] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Swap the row at `index` with the one above it. No-op at the top
    /// boundary or for an out-of-range index.
    pub fn move_up(&mut self, index: usize) {
        if index == 0 || index >= self.items.len() {
            return;
        }
        self.items.swap(index - 1, index);
        self.renumber();
    }

    /// Swap the row at `index` with the one below it. No-op at the bottom
    /// boundary or for an out-of-range index.
    pub fn move_down(&mut self, index: usize) {
        if self.items.len() < 2 || index >= self.items.len() - 1 {
            return;
        }
        self.items.swap(index, index + 1);
        self.renumber();
    }

    /// Grab the row at `source`. Out-of-range grabs leave the state idle.
    pub fn begin_drag(&mut self, source: usize) {
        if source < self.items.len() {
            self.drag = DragState::Dragging { source };
        }
    }

    /// Drop the grabbed row onto `target`: remove at the source position,
    /// reinsert at `target` (single-element relocation, not a swap).
    /// Self-drops and drops without an active drag are no-ops. Returns
    /// whether the list changed.
    pub fn drop_on(&mut self, target: usize) -> bool {
        let DragState::Dragging { source } = self.drag else {
            return false;
        };
        self.drag = DragState::Idle;
        if source == target || source >= self.items.len() || target >= self.items.len() {
            return false;
        }
        let item = self.items.remove(source);
        self.items.insert(target, item);
        self.renumber();
        true
    }

    /// Abandon an in-flight drag (pointer left the list, Escape, ...).
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    fn renumber(&mut self) {
        for (position, item) in self.items.iter_mut().enumerate() {
            item.order = position as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warehouse(id: &str, order: u32) -> Warehouse {
        Warehouse {
            id: id.to_string(),
            name: format!("Warehouse {id}"),
            country: "SA".to_string(),
            city: "Riyadh".to_string(),
            is_active: true,
            order,
        }
    }

    fn ids(orderer: &PriorityOrderer) -> Vec<&str> {
        orderer.items().iter().map(|w| w.id.as_str()).collect()
    }

    fn assert_contiguous(orderer: &PriorityOrderer) {
        for (i, item) in orderer.items().iter().enumerate() {
            assert_eq!(item.order, i as u32 + 1, "order must equal index + 1");
        }
    }

    #[test]
    fn from_fetched_sorts_by_order_and_renumbers_gaps() {
        let orderer = PriorityOrderer::from_fetched(vec![
            warehouse("c", 7),
            warehouse("a", 1),
            warehouse("b", 3),
        ]);
        assert_eq!(ids(&orderer), vec!["a", "b", "c"]);
        assert_contiguous(&orderer);
    }

    #[test]
    fn move_up_swaps_neighbors() {
        let mut orderer = PriorityOrderer::from_fetched(vec![
            warehouse("a", 1),
            warehouse("b", 2),
            warehouse("c", 3),
        ]);
        orderer.move_up(2);
        assert_eq!(ids(&orderer), vec!["a", "c", "b"]);
        assert_contiguous(&orderer);
    }

    #[test]
    fn move_down_swaps_neighbors() {
        let mut orderer = PriorityOrderer::from_fetched(vec![
            warehouse("a", 1),
            warehouse("b", 2),
            warehouse("c", 3),
        ]);
        orderer.move_down(0);
        assert_eq!(ids(&orderer), vec!["b", "a", "c"]);
        assert_contiguous(&orderer);
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let initial = vec![warehouse("a", 1), warehouse("b", 2), warehouse("c", 3)];
        let mut orderer = PriorityOrderer::from_fetched(initial.clone());
        orderer.move_up(0);
        orderer.move_down(2);
        orderer.move_down(99);
        assert_eq!(orderer.items(), &initial[..]);
    }

    #[test]
    fn drag_drop_relocates_instead_of_swapping() {
        // [A,B,C,D], drag A to index 2 => [B,C,A,D]
        let mut orderer = PriorityOrderer::from_fetched(vec![
            warehouse("a", 1),
            warehouse("b", 2),
            warehouse("c", 3),
            warehouse("d", 4),
        ]);
        orderer.begin_drag(0);
        assert!(orderer.drop_on(2));
        assert_eq!(ids(&orderer), vec!["b", "c", "a", "d"]);
        assert_contiguous(&orderer);
        assert_eq!(orderer.drag_state(), DragState::Idle);
    }

    #[test]
    fn drag_drop_moves_backwards() {
        let mut orderer = PriorityOrderer::from_fetched(vec![
            warehouse("a", 1),
            warehouse("b", 2),
            warehouse("c", 3),
            warehouse("d", 4),
        ]);
        orderer.begin_drag(3);
        assert!(orderer.drop_on(1));
        assert_eq!(ids(&orderer), vec!["a", "d", "b", "c"]);
        assert_contiguous(&orderer);
    }

    #[test]
    fn self_drop_and_idle_drop_are_no_ops() {
        let mut orderer =
            PriorityOrderer::from_fetched(vec![warehouse("a", 1), warehouse("b", 2)]);
        assert!(!orderer.drop_on(1), "drop without begin_drag must not move");
        orderer.begin_drag(1);
        assert!(!orderer.drop_on(1), "self-drop must not move");
        assert_eq!(ids(&orderer), vec!["a", "b"]);
        assert_contiguous(&orderer);
    }

    #[test]
    fn cancel_drag_resets_state() {
        let mut orderer =
            PriorityOrderer::from_fetched(vec![warehouse("a", 1), warehouse("b", 2)]);
        orderer.begin_drag(0);
        orderer.cancel_drag();
        assert_eq!(orderer.drag_state(), DragState::Idle);
        assert!(!orderer.drop_on(1));
    }

    #[test]
    fn orders_stay_contiguous_across_mixed_mutations() {
        let mut orderer = PriorityOrderer::from_fetched(
            (0..6).map(|i| warehouse(&format!("w{i}"), 6 - i as u32)).collect(),
        );
        orderer.move_down(1);
        orderer.begin_drag(4);
        orderer.drop_on(0);
        orderer.move_up(3);
        assert_contiguous(&orderer);
        assert_eq!(orderer.len(), 6);
    }
}
