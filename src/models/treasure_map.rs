//! The treasure map
//!
//! Four quadrant fragments, indexed positionally in the order the island's
//! encounters reveal them. Completeness is derived on demand rather than
//! cached, so the maintenance operations cannot leave a stale flag behind.

use super::fragment::MapFragment;
use crate::io::OutputWriter;

/// Descriptions in positional order: north, south, east, west.
const FRAGMENT_DESCRIPTIONS: [&str; 4] = [
    "the northern part of the island",
    "the southern part of the island",
    "the eastern part of the island",
    "the western part of the island",
];

pub struct TreasureMap {
    fragments: Vec<MapFragment>,
}

impl TreasureMap {
    /// A fresh map with all four quadrant fragments hidden.
    pub fn new() -> Self {
        let fragments = FRAGMENT_DESCRIPTIONS
            .iter()
            .copied()
            .enumerate()
            .map(|(i, description)| MapFragment::new(i as u8 + 1, description))
            .collect();
        TreasureMap { fragments }
    }

    pub fn fragments(&self) -> &[MapFragment] {
        &self.fragments
    }

    /// Positional access, the reward path used by encounters.
    pub fn fragment_at(&self, index: usize) -> Option<&MapFragment> {
        self.fragments.get(index)
    }

    pub fn fragment_at_mut(&mut self, index: usize) -> Option<&mut MapFragment> {
        self.fragments.get_mut(index)
    }

    /// Linear lookup by fragment identity. Tooling path; a miss is `None`,
    /// never an error.
    pub fn find_fragment(&self, id: u8) -> Option<&MapFragment> {
        self.fragments.iter().find(|f| f.id() == id)
    }

    /// Maintenance operation; `is_complete` stays correct because it is
    /// recomputed from the fragment list.
    pub fn add_fragment(&mut self, fragment: MapFragment) {
        self.fragments.push(fragment);
    }

    /// Maintenance operation; removes and returns the fragment with the
    /// given id, if present.
    pub fn remove_fragment(&mut self, id: u8) -> Option<MapFragment> {
        let index = self.fragments.iter().position(|f| f.id() == id)?;
        Some(self.fragments.remove(index))
    }

    pub fn found_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_found()).count()
    }

    /// True iff every fragment has been found. Monotonic in normal play.
    pub fn is_complete(&self) -> bool {
        self.fragments.iter().all(|f| f.is_found())
    }

    /// Explicit check-and-announce. Does not gate the treasure site by
    /// itself; the island loop gates on `is_complete`.
    pub fn assemble(&self, output: &mut dyn OutputWriter) -> bool {
        if self.is_complete() {
            output.writeln("You piece the fragments together. The full map shows a hollow at the heart of the island.");
            true
        } else {
            let missing = self.fragments.len() - self.found_count();
            output.writeln(&format!(
                "The map is still incomplete; {} fragment(s) are missing.",
                missing
            ));
            false
        }
    }
}

impl Default for TreasureMap {
    fn default() -> Self {
        Self::new()
    }
}
