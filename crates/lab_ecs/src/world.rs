// crates/lab_ecs/src/world.rs

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::entity::Entity;
use crate::storage::{SparseSet, Storage};

/// Generational arena of entities plus one sparse set per component type.
#[derive(Default)]
pub struct World {
    entities: Vec<Entity>,
    // Map Component Type -> Storage
    components: HashMap<TypeId, Box<dyn Storage>>,
    free_indices: Vec<u32>,
    generations: Vec<u32>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component type with the world.
    /// This MUST be called exactly once per component type.
    pub fn register_component<T: 'static>(&mut self) {
        let type_id = TypeId::of::<T>();

        if self.components.contains_key(&type_id) {
            panic!(
                "Component {} registered twice. \
                 Ensure you only call world.register_component::<{}>() once.",
                type_name::<T>(),
                type_name::<T>(),
            );
        }

        self.components
            .insert(type_id, Box::new(SparseSet::<T>::new()));
    }

    pub fn spawn(&mut self) -> Entity {
        let index = if let Some(idx) = self.free_indices.pop() {
            idx
        } else {
            self.generations.push(0);
            (self.generations.len() - 1) as u32
        };

        let generation = self.generations[index as usize];
        let entity = Entity::new(index, generation);
        self.entities.push(entity);
        entity
    }

    /// Frees the slot and drops every component attached to it.
    /// Returns false for handles that are already dead.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        for storage in self.components.values_mut() {
            storage.remove_entity(entity);
        }

        self.entities.retain(|e| *e != entity);
        let slot = entity.index();
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free_indices.push(slot as u32);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations
            .get(entity.index())
            .is_some_and(|g| *g == entity.generation())
            && self.entities.contains(&entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Despawns everything but keeps component registrations.
    /// Freed slots are reused lowest index first.
    pub fn clear(&mut self) {
        for entity in self.entities.drain(..) {
            let slot = entity.index();
            self.generations[slot] = self.generations[slot].wrapping_add(1);
        }
        for storage in self.components.values_mut() {
            storage.clear();
        }
        self.free_indices = (0..self.generations.len() as u32).rev().collect();
    }

    /// STRICT MODE: adding a component to an unregistered type is a hard error.
    pub fn add_component<T: 'static>(&mut self, entity: Entity, component: T) {
        use std::collections::hash_map::Entry;

        let type_id = TypeId::of::<T>();

        match self.components.entry(type_id) {
            Entry::Occupied(mut occ) => {
                let sparse_set = occ
                    .get_mut()
                    .as_any_mut()
                    .downcast_mut::<SparseSet<T>>()
                    .unwrap_or_else(|| {
                        panic!(
                            "Component storage type mismatch for {}.",
                            type_name::<T>(),
                        )
                    });

                sparse_set.insert(entity, component);
            }
            Entry::Vacant(_) => {
                panic!(
                    "Component {} was not registered! \
                     Call world.register_component::<{}>() before spawning.",
                    type_name::<T>(),
                    type_name::<T>(),
                );
            }
        }
    }

    pub fn remove_component<T: 'static>(&mut self, entity: Entity) -> Option<T> {
        self.query_mut::<T>()?.remove(entity)
    }

    /// Returns a shared reference to the component `T` for `entity`, or `None` if not present.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        self.query::<T>()?.get(entity)
    }

    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        self.query_mut::<T>()?.get_mut(entity)
    }

    /// Read-only access to the full storage of a component type.
    pub fn query<T: 'static>(&self) -> Option<&SparseSet<T>> {
        let type_id = TypeId::of::<T>();
        self.components
            .get(&type_id)
            .and_then(|boxed| boxed.as_any().downcast_ref::<SparseSet<T>>())
    }

    /// Mutable access to the full storage of a component type.
    pub fn query_mut<T: 'static>(&mut self) -> Option<&mut SparseSet<T>> {
        let type_id = TypeId::of::<T>();
        self.components
            .get_mut(&type_id)
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<SparseSet<T>>())
    }
}
