//! Catalogue of every sub-shape of the registered combinations.
//!
//! Registering a combination cuts it into all of its non-empty sub-shapes.
//! Each shape is filed under its canonical key together with what remains of
//! the combination, so a later query can ask "which named combinations could
//! this piece of my hand belong to, and how much would be missing?".

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cards::{CardSet, ShapeKey};
use crate::core::error::Result;

use super::prototype::{NamedComplement, Prototype};
use super::sub_shapes::SubShapes;

/// Store of prototypes keyed by canonical shape.
///
/// Prototypes keep the order in which their shape was first seen, which makes
/// every query over the catalogue reproducible.
///
/// ## Example
///
/// ```
/// use rules_card::{CardSet, Catalogue, ShapeKey};
///
/// let mut catalogue = Catalogue::new();
/// let triple = CardSet::from_counts([("A", 3)]).unwrap();
/// catalogue.register_card_set("Triple", &triple).unwrap();
///
/// // {A:1}, {A:2}, {A:3}
/// assert_eq!(catalogue.len(), 3);
///
/// let pair = CardSet::from_counts([("A", 2)]).unwrap();
/// let prototype = catalogue.get(&ShapeKey::of(&pair)).unwrap();
/// assert_eq!(prototype.bucket(1)[0].name, "Triple");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    prototypes: Vec<Prototype>,
    index: FxHashMap<ShapeKey, usize>,
    names: Vec<String>,
}

impl Catalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named combination, filing every non-empty sub-shape.
    ///
    /// Registering the same name twice files its complements twice; names are
    /// never deduplicated.
    pub fn register_card_set(&mut self, name: impl Into<String>, combo: &CardSet) -> Result<()> {
        let name = name.into();
        let mut shapes = 0usize;

        for shape in SubShapes::of(combo) {
            let shape = shape?;
            if shape.is_empty() {
                continue;
            }

            let complement = combo.subtract(&shape)?;
            self.get_or_insert(shape)
                .push(NamedComplement::new(name.clone(), complement));
            shapes += 1;
        }

        debug!(
            name = %name,
            combo = %combo,
            shapes,
            prototypes = self.prototypes.len(),
            "catalogue.register"
        );

        self.names.push(name);
        Ok(())
    }

    fn get_or_insert(&mut self, shape: CardSet) -> &mut Prototype {
        let key = ShapeKey::of(&shape);
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.prototypes.len();
                self.index.insert(key.clone(), position);
                self.prototypes.push(Prototype::with_key(shape, key));
                position
            }
        };
        &mut self.prototypes[position]
    }

    /// Look up the prototype for a shape key.
    #[must_use]
    pub fn get(&self, key: &ShapeKey) -> Option<&Prototype> {
        self.index.get(key).map(|&position| &self.prototypes[position])
    }

    /// All prototypes, in first-seen order.
    pub fn prototypes(&self) -> impl Iterator<Item = &Prototype> + '_ {
        self.prototypes.iter()
    }

    /// Names registered so far, in registration order.
    #[must_use]
    pub fn registered_names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Check if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}
