//! Shelf module - the live item set and occlusion rules
//!
//! Items sit on shelves in slot stacks; within a stack only the frontmost
//! (highest layer) item is selectable. Blocking is recomputed against the
//! current live set on every query, because removing a front item unblocks
//! the one beneath it. Grid sizes are tens of items, so O(n) scans are fine.

use crate::types::{Item, Spot};

/// Whether `target` is covered by another live item in the same slot stack
/// at a strictly greater layer. Pure function over the current item list.
pub fn is_covered(target: &Item, items: &[Item]) -> bool {
    items.iter().any(|other| {
        other.id != target.id
            && other.spot.same_stack(&target.spot)
            && other.spot.layer > target.spot.layer
    })
}

/// The set of items still sitting on shelves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    items: Vec<Item>,
}

impl Shelf {
    /// Create a shelf holding the given generated items
    pub fn new(items: Vec<Item>) -> Self {
        debug_assert!(Self::spots_unique(&items));
        Self { items }
    }

    fn spots_unique(items: &[Item]) -> bool {
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                if a.spot == b.spot {
                    return false;
                }
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the item with this id is currently blocked.
    /// Unknown ids report blocked (they are not selectable either way).
    pub fn is_blocked(&self, id: u32) -> bool {
        match self.get(id) {
            Some(item) => is_covered(item, &self.items),
            None => true,
        }
    }

    /// Remove and return an item by id
    pub fn remove(&mut self, id: u32) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Iterate over currently selectable (unblocked) items
    pub fn unblocked(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| !is_covered(item, &self.items))
    }

    /// The item occupying a spot, if any
    pub fn at(&self, spot: Spot) -> Option<&Item> {
        self.items.iter().find(|item| item.spot == spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;

    fn item(id: u32, kind: ItemKind, shelf: u8, slot: u8, layer: u8) -> Item {
        Item {
            id,
            kind,
            spot: Spot::new(shelf, slot, layer),
        }
    }

    fn stacked_triple() -> Shelf {
        Shelf::new(vec![
            item(1, ItemKind::Apple, 0, 0, 0),
            item(2, ItemKind::Apple, 0, 0, 1),
            item(3, ItemKind::Apple, 0, 0, 2),
        ])
    }

    #[test]
    fn test_only_top_of_stack_unblocked() {
        let shelf = stacked_triple();

        assert!(shelf.is_blocked(1));
        assert!(shelf.is_blocked(2));
        assert!(!shelf.is_blocked(3));
    }

    #[test]
    fn test_removal_unblocks_next_layer() {
        let mut shelf = stacked_triple();

        shelf.remove(3);
        assert!(!shelf.is_blocked(2));
        assert!(shelf.is_blocked(1));

        shelf.remove(2);
        assert!(!shelf.is_blocked(1));
    }

    #[test]
    fn test_different_stacks_do_not_block() {
        let shelf = Shelf::new(vec![
            item(1, ItemKind::Banana, 0, 0, 0),
            item(2, ItemKind::Cheese, 0, 1, 1),
            item(3, ItemKind::Fish, 1, 0, 2),
        ]);

        // Each is alone in its stack, so all three are selectable
        assert!(!shelf.is_blocked(1));
        assert!(!shelf.is_blocked(2));
        assert!(!shelf.is_blocked(3));
    }

    #[test]
    fn test_gap_in_layers_still_blocks() {
        // Layer 0 with an item at layer 2 above it; layer 1 missing
        let shelf = Shelf::new(vec![
            item(1, ItemKind::Grape, 0, 0, 0),
            item(2, ItemKind::Grape, 0, 0, 2),
        ]);

        assert!(shelf.is_blocked(1));
        assert!(!shelf.is_blocked(2));
    }

    #[test]
    fn test_unknown_id_is_blocked() {
        let shelf = stacked_triple();

        assert!(shelf.is_blocked(99));
        assert!(shelf.get(99).is_none());
    }

    #[test]
    fn test_remove_returns_item() {
        let mut shelf = stacked_triple();

        let removed = shelf.remove(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(shelf.len(), 2);

        assert!(shelf.remove(2).is_none());
    }

    #[test]
    fn test_unblocked_iterator_matches_predicate() {
        let shelf = Shelf::new(vec![
            item(1, ItemKind::Apple, 0, 0, 0),
            item(2, ItemKind::Apple, 0, 0, 1),
            item(3, ItemKind::Lemon, 0, 1, 0),
        ]);

        let ids: Vec<u32> = shelf.unblocked().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_at_spot_lookup() {
        let shelf = stacked_triple();

        assert_eq!(shelf.at(Spot::new(0, 0, 1)).map(|i| i.id), Some(2));
        assert!(shelf.at(Spot::new(1, 0, 0)).is_none());
    }

    #[test]
    fn test_is_covered_pure_function() {
        let items = vec![
            item(1, ItemKind::Corn, 2, 3, 0),
            item(2, ItemKind::Corn, 2, 3, 4),
        ];

        assert!(is_covered(&items[0], &items));
        assert!(!is_covered(&items[1], &items));
    }
}
