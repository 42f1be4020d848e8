// crates/lab_ecs/src/storage.rs
use crate::entity::Entity;

// Lets the world treat different component storages generically.
pub trait Storage {
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
    fn remove_entity(&mut self, entity: Entity);
    fn clear(&mut self);
}

/// Dense component storage.
///
/// Iteration follows insertion order until the first removal; a removal moves
/// the last element into the freed slot.
pub struct SparseSet<T> {
    dense: Vec<T>,
    entities: Vec<Entity>,
    sparse: Vec<Option<usize>>, // Entity index -> dense index
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self {
            dense: Vec::new(),
            entities: Vec::new(),
            sparse: Vec::new(),
        }
    }
}

impl<T: 'static> SparseSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: Entity, value: T) {
        let index = entity.index();

        if index >= self.sparse.len() {
            self.sparse.resize(index + 1, None);
        }

        // Same slot already populated: overwrite, even across generations.
        if let Some(dense_index) = self.sparse[index] {
            self.dense[dense_index] = value;
            self.entities[dense_index] = entity;
        } else {
            let dense_index = self.dense.len();
            self.dense.push(value);
            self.entities.push(entity);
            self.sparse[index] = Some(dense_index);
        }
    }

    fn dense_index(&self, entity: Entity) -> Option<usize> {
        let dense_index = (*self.sparse.get(entity.index())?)?;
        // Generation check rejects stale handles to a reused slot.
        (self.entities[dense_index].generation() == entity.generation()).then_some(dense_index)
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.dense_index(entity).map(|i| &self.dense[i])
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.dense_index(entity).map(move |i| &mut self.dense[i])
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.dense_index(entity).is_some()
    }

    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let dense_index = self.dense_index(entity)?;
        self.sparse[entity.index()] = None;

        let value = self.dense.swap_remove(dense_index);
        self.entities.swap_remove(dense_index);

        if let Some(moved) = self.entities.get(dense_index) {
            self.sparse[moved.index()] = Some(dense_index);
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Entity, &T)> {
        self.entities.iter().zip(self.dense.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Entity, &mut T)> {
        self.entities.iter().zip(self.dense.iter_mut())
    }
}

impl<T: 'static> Storage for SparseSet<T> {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn clear(&mut self) {
        self.dense.clear();
        self.entities.clear();
        self.sparse.clear();
    }
}
