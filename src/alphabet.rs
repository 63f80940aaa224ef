/// alphabet.rs — name <-> weight container, the decomposer's Weights
/// provider
///
/// Holds an indexed list of named elements (e.g. amino acid residues),
/// sorted ascending by mass so it can be converted directly into the
/// `Weights` view the decomposer core consumes. Mirrors `ims::Alphabet`
/// from the original source: O(1) access by index, O(k) lookup by
/// name. The core never sees element names — that mapping lives here,
/// one layer above it, per spec.md §6.
pub mod parser;

use crate::error::{Error, Result};
use crate::weights::{Mass, Weights};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub mass: Mass,
}

#[derive(Debug, Clone, Default)]
pub struct Alphabet {
    elements: Vec<Element>,
}

impl Alphabet {
    pub fn new() -> Self {
        Alphabet { elements: Vec::new() }
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn element(&self, index: usize) -> &Element {
        &self.elements[index]
    }

    pub fn mass(&self, index: usize) -> Mass {
        self.elements[index].mass
    }

    pub fn name(&self, index: usize) -> &str {
        &self.elements[index].name
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.elements.iter().any(|e| e.name == name)
    }

    /// Looks up an element's mass by name. O(k).
    pub fn mass_of(&self, name: &str) -> Result<Mass> {
        self.elements
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.mass)
            .ok_or_else(|| Error::UnknownElement { name: name.to_string() })
    }

    pub fn push(&mut self, name: impl Into<String>, mass: Mass) {
        self.elements.push(Element { name: name.into(), mass });
    }

    /// Sorts elements by ascending mass — the order the decomposer core
    /// requires, and the order `load` always produces.
    pub fn sort_by_mass(&mut self) {
        self.elements.sort_by_key(|e| e.mass);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}

impl TryFrom<&Alphabet> for Weights {
    type Error = Error;

    /// Converts a (mass-sorted) `Alphabet` into the `Weights` view the
    /// decomposer core consumes. Duplicate masses (e.g. Leucine and
    /// Isoleucine both round to 113) are collapsed to one weight, since
    /// `Weights` requires strictly ascending entries — the decomposer
    /// does not need to know which name produced a given weight.
    fn try_from(alphabet: &Alphabet) -> Result<Weights> {
        let mut masses: Vec<Mass> = alphabet.iter().map(|e| e.mass).collect();
        masses.sort_unstable();
        masses.dedup();
        Weights::new(masses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_looks_up() {
        let mut a = Alphabet::new();
        a.push("G", 57);
        a.push("A", 71);
        assert_eq!(a.size(), 2);
        assert_eq!(a.mass_of("A").unwrap(), 71);
        assert!(a.mass_of("Z").is_err());
    }

    #[test]
    fn sorts_by_mass() {
        let mut a = Alphabet::new();
        a.push("A", 71);
        a.push("G", 57);
        a.sort_by_mass();
        assert_eq!(a.name(0), "G");
        assert_eq!(a.name(1), "A");
    }

    #[test]
    fn converts_to_weights_deduplicating_masses() {
        let mut a = Alphabet::new();
        a.push("G", 57);
        a.push("L", 113);
        a.push("I", 113);
        a.push("A", 71);
        let weights: Weights = (&a).try_into().unwrap();
        assert_eq!(weights.size(), 3);
        assert_eq!(weights.weight(0), 57);
        assert_eq!(weights.weight(1), 71);
        assert_eq!(weights.weight(2), 113);
    }
}
