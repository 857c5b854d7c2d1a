//! Storage for the contacts found by the narrow-phase.

use crate::query::ContactInfo;
use slab::Slab;

/// The handle of a contact stored in a [`ContactPool`].
///
/// A handle is stamped with the generation of the insertion that created it. Once its contact
/// is removed, the handle never resolves again, even after the slot is reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactId {
    index: usize,
    generation: u32,
}

impl ContactId {
    /// The slot of the pool this handle points to.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    /// The generation of the insertion that created this handle.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// An arena of contacts.
///
/// The narrow-phase only allocates slots here when it actually finds a contact. Freeing them
/// is up to the caller: a contact stays alive until it is removed or the pool is cleared.
/// Slots are reused, but handles of removed contacts are rejected.
#[derive(Clone, Debug, Default)]
pub struct ContactPool {
    contacts: Slab<(u32, ContactInfo)>,
    generation: u32,
}

impl ContactPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pool able to store `capacity` contacts without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Slab::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Stores a contact and returns its handle.
    pub fn insert(&mut self, contact: ContactInfo) -> ContactId {
        // Generations wrap after 2^32 insertions.
        self.generation = self.generation.wrapping_add(1);
        let index = self.contacts.insert((self.generation, contact));

        ContactId {
            index,
            generation: self.generation,
        }
    }

    /// The contact with the given handle, if it is still alive.
    pub fn get(&self, id: ContactId) -> Option<&ContactInfo> {
        match self.contacts.get(id.index) {
            Some((generation, contact)) if *generation == id.generation => Some(contact),
            _ => None,
        }
    }

    /// The contact with the given handle, if it is still alive.
    pub fn get_mut(&mut self, id: ContactId) -> Option<&mut ContactInfo> {
        match self.contacts.get_mut(id.index) {
            Some((generation, contact)) if *generation == id.generation => Some(contact),
            _ => None,
        }
    }

    /// Removes a contact from this pool.
    ///
    /// Its slot may be reused by the next insertion, under a new handle.
    pub fn remove(&mut self, id: ContactId) -> Option<ContactInfo> {
        let _ = self.get(id)?;
        self.contacts.try_remove(id.index).map(|(_, contact)| contact)
    }

    /// Removes all the contacts from this pool.
    ///
    /// All the handles given so far become invalid.
    pub fn clear(&mut self) {
        self.contacts.clear()
    }

    /// The number of contacts in this pool.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Is this pool empty?
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterates through all the contacts of this pool, with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (ContactId, &ContactInfo)> {
        self.contacts.iter().map(|(index, (generation, contact))| {
            (
                ContactId {
                    index,
                    generation: *generation,
                },
                contact,
            )
        })
    }
}
