/// A named, valued object the player can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub value: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Item {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_keeps_name_and_value() {
        let item = Item::new("rusted cutlass", 15);
        assert_eq!(item.name, "rusted cutlass");
        assert_eq!(item.value, 15);
    }
}
