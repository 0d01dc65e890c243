// src/atoms.rs
//
// Interned atom storage. Types and traits are name-keyed atoms with stable
// identity inside one TypeContext; handles are Copy u32 newtypes so equality
// and hashing never touch the names.

use std::hash::BuildHasher;

use hashbrown::hash_map::RawEntryMut;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

/// Handle to an interned type atom.
///
/// Only meaningful for the context that produced it; two contexts intern
/// independently and their handles must not be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(u32);

impl TypeId {
    pub(crate) fn new(index: u32) -> Self {
        TypeId(index)
    }

    /// Raw index, for debugging and host-side tables.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Handle to an interned trait atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraitId(u32);

impl TraitId {
    pub(crate) fn new(index: u32) -> Self {
        TraitId(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

/// A named atom owned by an `AtomTable`.
pub(crate) trait Atom {
    fn with_name(name: String) -> Self;
    fn name(&self) -> &str;
}

/// A machine type: a name plus the opaque trait tags attached to it.
/// The kernel never interprets traits; they ride along for the caller.
#[derive(Debug)]
pub(crate) struct TypeAtom {
    pub name: String,
    pub traits: SmallVec<[TraitId; 4]>,
}

impl Atom for TypeAtom {
    fn with_name(name: String) -> Self {
        TypeAtom {
            name,
            traits: SmallVec::new(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
pub(crate) struct TraitAtom {
    pub name: String,
}

impl Atom for TraitAtom {
    fn with_name(name: String) -> Self {
        TraitAtom { name }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Name-keyed atom pool. `get` interns on miss; the index it returns is
/// stable for the table's lifetime.
#[derive(Debug)]
pub(crate) struct AtomTable<A> {
    map: hashbrown::HashMap<String, u32, FxBuildHasher>,
    atoms: Vec<A>,
}

impl<A: Atom> AtomTable<A> {
    pub fn new() -> Self {
        AtomTable {
            map: hashbrown::HashMap::with_hasher(FxBuildHasher),
            atoms: Vec::new(),
        }
    }

    /// Fetch the atom named `name`, interning it if absent.
    pub fn get(&mut self, name: &str) -> u32 {
        // Hash once, reuse for both lookup and insert.
        let hash = self.map.hasher().hash_one(name);

        match self.map.raw_entry_mut().from_hash(hash, |k| k == name) {
            RawEntryMut::Occupied(e) => *e.get(),
            RawEntryMut::Vacant(e) => {
                let index = self.atoms.len() as u32;
                self.atoms.push(A::with_name(name.to_string()));
                e.insert_hashed_nocheck(hash, name.to_string(), index);
                index
            }
        }
    }

    /// Read-only probe; never interns.
    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.map.get(name).copied()
    }

    pub fn name(&self, index: u32) -> &str {
        self.atoms[index as usize].name()
    }

    pub fn atom(&self, index: u32) -> &A {
        &self.atoms[index as usize]
    }

    pub fn atom_mut(&mut self, index: u32) -> &mut A {
        &mut self.atoms[index as usize]
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }
}
