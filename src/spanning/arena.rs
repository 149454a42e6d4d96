//! Vertex slots for the contraction steps of [`edmonds`](super::edmonds::edmonds).
//!
//! Original vertices are interned once. Every contracted cycle borrows an
//! extra slot for its super vertex and hands it back when its recursion level
//! is expanded; a returned slot is reused under a new generation, so keys held
//! from before can be told apart from the new occupant.

use std::hash::Hash;

use ahash::AHashMap;

crate::define_indexed_vec!(
    /// Position of a slot in the arena.
    pub struct SlotId;

    pub struct SlotVec;
);

/// A slot together with the generation it was handed out under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey {
    pub slot: SlotId,
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SlotState<V> {
    Original(V),
    /// Super vertex standing for a cycle contracted at recursion `level`.
    Super { level: usize },
    Free,
}

#[derive(Debug, Clone)]
struct Slot<V> {
    generation: u32,
    state: SlotState<V>,
}

#[derive(Debug, Clone)]
pub struct VertexArena<V> {
    slots: SlotVec<Slot<V>>,
    free: Vec<SlotId>,
    keys: AHashMap<V, VertexKey>,
}

impl<V: Clone + Eq + Hash> Default for VertexArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> VertexArena<V> {
    pub fn new() -> Self {
        VertexArena {
            slots: SlotVec::new(),
            free: Vec::new(),
            keys: AHashMap::new(),
        }
    }

    /// Key of an original vertex, allocating its slot on first sight.
    pub fn intern(&mut self, v: V) -> VertexKey {
        if let Some(&key) = self.keys.get(&v) {
            return key;
        }
        let key = self.occupy(SlotState::Original(v.clone()));
        self.keys.insert(v, key);
        key
    }

    pub fn key_of(&self, v: &V) -> Option<VertexKey> {
        self.keys.get(v).copied()
    }

    pub fn alloc_super(&mut self, level: usize) -> VertexKey {
        self.occupy(SlotState::Super { level })
    }

    fn occupy(&mut self, state: SlotState<V>) -> VertexKey {
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot];
            entry.state = state;
            return VertexKey {
                slot,
                generation: entry.generation,
            };
        }
        let slot = self.slots.push(Slot {
            generation: 0,
            state,
        });
        VertexKey {
            slot,
            generation: 0,
        }
    }

    /// Returns a super vertex's slot. Stale keys and original vertices are
    /// left alone.
    pub fn release(&mut self, key: VertexKey) {
        if self.level(key).is_none() {
            return;
        }
        let entry = &mut self.slots[key.slot];
        entry.state = SlotState::Free;
        entry.generation += 1;
        self.free.push(key.slot);
    }

    pub fn original(&self, key: VertexKey) -> Option<&V> {
        match &self.live(key)?.state {
            SlotState::Original(v) => Some(v),
            _ => None,
        }
    }

    /// Recursion level of a live super vertex.
    pub fn level(&self, key: VertexKey) -> Option<usize> {
        match self.live(key)?.state {
            SlotState::Super { level } => Some(level),
            _ => None,
        }
    }

    fn live(&self, key: VertexKey) -> Option<&Slot<V>> {
        self.slots
            .get(key.slot)
            .filter(|s| s.generation == key.generation && s.state != SlotState::Free)
    }

    /// Number of slots ever allocated; every [`SlotId`] is below it.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
