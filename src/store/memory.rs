//! In-memory citizen store
//!
//! Iteration order is registration order, which makes rankings with tied
//! totals deterministic.

use std::collections::HashMap;

use crate::aggregate::{Aggregate, Citizen};

use super::CitizenStore;

#[derive(Debug, Default)]
pub struct InMemoryCitizenStore {
    citizens: Vec<Citizen>,
    index: HashMap<String, usize>,
}

impl InMemoryCitizenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CitizenStore for InMemoryCitizenStore {
    fn insert(&mut self, citizen: Citizen) -> Option<Citizen> {
        let existing = self.index.get(citizen.id()).copied();
        match existing {
            Some(position) => Some(std::mem::replace(&mut self.citizens[position], citizen)),
            None => {
                self.index.insert(citizen.id().to_string(), self.citizens.len());
                self.citizens.push(citizen);
                None
            }
        }
    }

    fn get(&self, id: &str) -> Option<&Citizen> {
        self.index.get(id).map(|&position| &self.citizens[position])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Citizen> {
        let position = *self.index.get(id)?;
        self.citizens.get_mut(position)
    }

    fn list(&self) -> Vec<&Citizen> {
        self.citizens.iter().collect()
    }

    fn count(&self) -> usize {
        self.citizens.len()
    }
}
