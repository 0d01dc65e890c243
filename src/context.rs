// src/context.rs
//
// The TypeContext owns every atom and all compatibility state.

use rustc_hash::FxHashMap;

use crate::atoms::{AtomTable, TraitAtom, TraitId, TypeAtom, TypeId};
use crate::cast::Tcc;
use crate::overload::RatingOrder;

/// Owner of the type lattice: both atom pools, the pairwise compatibility
/// table, and the rank list that orients promotion.
///
/// Every mutator takes `&mut self` and every resolution API takes `&self`,
/// so a fully seeded context can be shared across threads by ordinary
/// immutable borrows. Note that `get_type` and `get_trait` are mutators:
/// they intern on miss. Use `lookup_type` for read-only name probes.
pub struct TypeContext {
    types: AtomTable<TypeAtom>,
    traits: AtomTable<TraitAtom>,
    cast_rules: FxHashMap<(TypeId, TypeId), Tcc>,
    ranking: FxHashMap<TypeId, i32>,
    rating_order: RatingOrder,
}

impl TypeContext {
    pub fn new() -> Self {
        TypeContext {
            types: AtomTable::new(),
            traits: AtomTable::new(),
            cast_rules: FxHashMap::default(),
            ranking: FxHashMap::default(),
            rating_order: RatingOrder::default(),
        }
    }

    /// A context pre-seeded with the machine-type lattice.
    pub fn seeded() -> Self {
        let mut ctx = Self::new();
        crate::machine::fill_machine_types(&mut ctx);
        ctx
    }

    /// Fetch the type named `name`, interning it if absent. The returned
    /// handle is stable for the context's lifetime.
    pub fn get_type(&mut self, name: &str) -> TypeId {
        TypeId::new(self.types.get(name))
    }

    /// Read-only name probe; never interns.
    pub fn lookup_type(&self, name: &str) -> Option<TypeId> {
        self.types.lookup(name).map(TypeId::new)
    }

    pub fn type_name(&self, ty: TypeId) -> &str {
        self.types.name(ty.index())
    }

    pub fn get_trait(&mut self, name: &str) -> TraitId {
        TraitId::new(self.traits.get(name))
    }

    pub fn trait_name(&self, tr: TraitId) -> &str {
        self.traits.name(tr.index())
    }

    /// Attach an opaque trait tag to a type. Idempotent.
    pub fn add_trait(&mut self, ty: TypeId, tr: TraitId) {
        let atom = self.types.atom_mut(ty.index());
        if !atom.traits.contains(&tr) {
            atom.traits.push(tr);
        }
    }

    pub fn has_trait(&self, ty: TypeId, tr: TraitId) -> bool {
        self.types.atom(ty.index()).traits.contains(&tr)
    }

    /// Upsert the compatibility code for the ordered pair `(from, to)`.
    pub fn set_compatibility(&mut self, from: TypeId, to: TypeId, tcc: Tcc) {
        self.cast_rules.insert((from, to), tcc);
    }

    /// Stored code for `(from, to)`; a missing entry reads as `False`.
    pub fn get_compatibility(&self, from: TypeId, to: TypeId) -> Tcc {
        self.cast_rules
            .get(&(from, to))
            .copied()
            .unwrap_or(Tcc::False)
    }

    /// Append a type to the rank list; its rank is the list size at the
    /// time of the call. Appending an already-ranked type keeps the first
    /// rank: re-ranking would skew every stored convert distance.
    pub fn append_rank(&mut self, ty: TypeId) {
        let next = self.ranking.len() as i32;
        if self.ranking.contains_key(&ty) {
            tracing::warn!(name = self.type_name(ty), "type already ranked; keeping first rank");
            return;
        }
        self.ranking.insert(ty, next);
    }

    /// Stored rank, or 0 for unranked types. Only ranked machine types are
    /// expected to take part in convert-distance math.
    pub fn get_rank(&self, ty: TypeId) -> i32 {
        self.ranking.get(&ty).copied().unwrap_or(0)
    }

    /// How overload ratings are compared; see `RatingOrder`.
    pub fn rating_order(&self) -> RatingOrder {
        self.rating_order
    }

    pub fn set_rating_order(&mut self, order: RatingOrder) {
        self.rating_order = order;
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}
