//! Jar Accumulator
//!
//! The user's multiset of selected fruits. A `Jar` is a plain value: clones
//! are independent, and every operation is total (unknown ids are no-ops).

use crate::fruit::Fruit;

/// One fruit in the jar with its quantity (always >= 1)
#[derive(Debug, Clone, PartialEq)]
pub struct JarEntry {
    pub fruit: Fruit,
    pub quantity: u32,
}

impl JarEntry {
    pub fn id(&self) -> u32 {
        self.fruit.id
    }
}

/// Ordered collection of entries, at most one per fruit id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Jar {
    entries: Vec<JarEntry>,
}

impl Jar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JarEntry] {
        &self.entries
    }

    /// Number of distinct fruits
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity held for `fruit_id`, zero when absent
    pub fn quantity_of(&self, fruit_id: u32) -> u32 {
        self.position(fruit_id)
            .map(|idx| self.entries[idx].quantity)
            .unwrap_or(0)
    }

    fn position(&self, fruit_id: u32) -> Option<usize> {
        self.entries.iter().position(|e| e.fruit.id == fruit_id)
    }

    /// Increment an existing entry or append a new one with quantity 1
    pub fn add_one(&mut self, fruit: &Fruit) {
        match self.position(fruit.id) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.quantity = entry.quantity.saturating_add(1);
            }
            None => self.entries.push(JarEntry {
                fruit: fruit.clone(),
                quantity: 1,
            }),
        }
    }

    /// `add_one` for each fruit in order; duplicates in the batch count twice
    pub fn add_many<'a, I>(&mut self, fruits: I)
    where
        I: IntoIterator<Item = &'a Fruit>,
    {
        for fruit in fruits {
            self.add_one(fruit);
        }
    }

    pub fn remove(&mut self, fruit_id: u32) {
        self.entries.retain(|e| e.fruit.id != fruit_id);
    }

    /// Replace the quantity of an existing entry
    ///
    /// A quantity of zero or less removes the entry. Ids not in the jar are
    /// ignored: there is no fruit to create an entry from.
    pub fn set_quantity(&mut self, fruit_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(fruit_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.position(fruit_id) {
            Some(idx) => self.entries[idx].quantity = quantity,
            None => log::debug!("set_quantity ignored for fruit {} not in jar", fruit_id),
        }
    }

    /// Decrement by one, removing the entry when it reaches zero
    pub fn remove_one(&mut self, fruit_id: u32) {
        let current = i64::from(self.quantity_of(fruit_id));
        self.set_quantity(fruit_id, current - 1);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
