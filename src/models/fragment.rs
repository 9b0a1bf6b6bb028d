use super::constants::FRAGMENT_VALUE;
use super::item::Item;
use crate::io::OutputWriter;

/// One quarter of the treasure map. Starts hidden; `find` is one-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFragment {
    id: u8,
    description: &'static str,
    found: bool,
}

impl MapFragment {
    pub fn new(id: u8, description: &'static str) -> Self {
        MapFragment {
            id,
            description,
            found: false,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Mark the fragment as found, announcing the result.
    /// Returns true only on the first call; re-finding is a no-op notice.
    pub fn find(&mut self, output: &mut dyn OutputWriter) -> bool {
        if self.found {
            output.writeln("You have already found this map fragment.");
            return false;
        }
        self.found = true;
        output.writeln(&format!(
            "You found a map fragment! It shows {}.",
            self.description
        ));
        true
    }

    /// The inventory item handed to the player when the fragment is found.
    /// The map keeps the fragment itself.
    pub fn as_item(&self) -> Item {
        Item::new(format!("map fragment {}", self.id), FRAGMENT_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;

    #[test]
    fn fragment_starts_hidden() {
        let fragment = MapFragment::new(1, "the northern part of the island");
        assert!(!fragment.is_found());
    }

    #[test]
    fn find_marks_fragment_found() {
        let mut fragment = MapFragment::new(2, "the southern part of the island");
        let mut output = MockOutput::new();

        assert!(fragment.find(&mut output));
        assert!(fragment.is_found());
    }

    #[test]
    fn second_find_is_a_noop_notice() {
        let mut fragment = MapFragment::new(3, "the eastern part of the island");
        let mut output = MockOutput::new();

        assert!(fragment.find(&mut output));
        assert!(!fragment.find(&mut output));
        assert!(fragment.is_found());

        let last = output.messages.last().unwrap();
        assert!(last.contains("already found"), "got: {}", last);
    }

    #[test]
    fn fragment_item_carries_id_and_value() {
        let fragment = MapFragment::new(4, "the western part of the island");
        let item = fragment.as_item();
        assert_eq!(item.name, "map fragment 4");
        assert_eq!(item.value, FRAGMENT_VALUE);
    }
}
