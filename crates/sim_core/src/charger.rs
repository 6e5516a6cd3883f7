//! Capacity-bounded charger pool with FIFO waiting-queue promotion.
//!
//! The pool tracks membership only; charge progression lives in
//! [`crate::systems::charging::charging_system`], which charges the active
//! set and hands the finished vehicles back via
//! [`ChargerPool::release_finished`]. A vehicle appears in at most one of
//! {active, waiting} and stays in the tracking set from its first request
//! until it finishes charging, which makes repeated requests harmless.

use std::collections::{HashSet, VecDeque};

use bevy_ecs::prelude::{Entity, Resource};

#[derive(Debug, Resource)]
pub struct ChargerPool {
    capacity: usize,
    active: Vec<Entity>,
    waiting: VecDeque<Entity>,
    known: HashSet<Entity>,
}

impl ChargerPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            active: Vec::with_capacity(capacity),
            waiting: VecDeque::new(),
            known: HashSet::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_available(&self) -> bool {
        self.active.len() < self.capacity
    }

    /// Admits a vehicle into a free slot, or queues it at the tail.
    /// A vehicle that is already tracked keeps its slot or queue position.
    pub fn request_charge(&mut self, vehicle: Entity) {
        if !self.known.insert(vehicle) {
            return;
        }
        if self.is_available() {
            self.active.push(vehicle);
        } else {
            self.waiting.push_back(vehicle);
        }
    }

    /// Removes finished vehicles from the active set and the tracking set,
    /// then promotes waiters into the freed slots in arrival order. Promotion
    /// runs after all removals, so a slot freed this tick is refilled this
    /// tick.
    pub fn release_finished(&mut self, finished: &[Entity]) {
        if !finished.is_empty() {
            self.active.retain(|vehicle| !finished.contains(vehicle));
            for vehicle in finished {
                self.known.remove(vehicle);
            }
        }
        while self.is_available() {
            match self.waiting.pop_front() {
                Some(next) => self.active.push(next),
                None => break,
            }
        }
    }

    /// Vehicles currently occupying a charger, in admission order.
    pub fn active(&self) -> &[Entity] {
        &self.active
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn queued_len(&self) -> usize {
        self.waiting.len()
    }

    /// True while the vehicle is queued or charging.
    pub fn is_tracked(&self, vehicle: Entity) -> bool {
        self.known.contains(&vehicle)
    }

    /// Clears all state for a fresh run.
    pub fn reset(&mut self) {
        self.active.clear();
        self.waiting.clear();
        self.known.clear();
    }
}

impl Default for ChargerPool {
    /// The production pool has three chargers.
    fn default() -> Self {
        Self::new(3)
    }
}
