/// Ordered collection of form entries with index-aligned per-entry error
/// flags.
///
/// The values and their flags are always the same length: `remove` deletes
/// both at the same index atomically, and `add` appends a blank value with a
/// cleared flag. An out-of-range index is a programming error and panics; it
/// is never a user-facing condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repeatable<T> {
    entries: Vec<T>,
    errors: Vec<bool>,
}

impl<T> Repeatable<T> {
    pub fn new() -> Self {
        Repeatable {
            entries: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Append a blank entry and return its index (the entry the user
    /// continues typing into).
    pub fn add(&mut self) -> usize
    where
        T: Default,
    {
        self.entries.push(T::default());
        self.errors.push(false);
        self.entries.len() - 1
    }

    /// Replace the value at `index`, leaving all other entries untouched.
    pub fn update(&mut self, index: usize, value: T) {
        self.entries[index] = value;
    }

    /// Mutate one field of the entry at `index` in place. Used for paired
    /// entries (step header/body) where one half changes at a time.
    pub fn update_with(&mut self, index: usize, f: impl FnOnce(&mut T)) {
        f(&mut self.entries[index]);
    }

    /// Delete the value and its paired error flag at `index`, shifting
    /// subsequent entries down by one.
    pub fn remove(&mut self, index: usize) -> T {
        self.errors.remove(index);
        self.entries.remove(index)
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.entries.len(), self.errors.len());
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn values(&self) -> &[T] {
        &self.entries
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.entries
    }

    pub fn flags(&self) -> &[bool] {
        &self.errors
    }

    pub fn is_flagged(&self, index: usize) -> bool {
        self.errors[index]
    }

    pub fn set_flag(&mut self, index: usize, flagged: bool) {
        self.errors[index] = flagged;
    }

    pub fn clear_flags(&mut self) {
        self.errors.iter_mut().for_each(|e| *e = false);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T> FromIterator<T> for Repeatable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let entries: Vec<T> = iter.into_iter().collect();
        let errors = vec![false; entries.len()];
        Repeatable { entries, errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_blank_entry_with_cleared_flag() {
        let mut field: Repeatable<String> = Repeatable::new();
        let index = field.add();
        assert_eq!(index, 0);
        assert_eq!(field.len(), 1);
        assert_eq!(field.get(0), Some(&String::new()));
        assert!(!field.is_flagged(0));

        field.update(0, "beef".to_string());
        let index = field.add();
        assert_eq!(index, 1);
        assert_eq!(field.get(0), Some(&"beef".to_string()));
    }

    #[test]
    fn test_remove_deletes_value_and_flag_preserving_order() {
        let mut field: Repeatable<String> =
            ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        field.set_flag(1, true);
        field.set_flag(2, true);

        field.remove(1);

        assert_eq!(field.values(), &["a".to_string(), "c".to_string()]);
        assert_eq!(field.flags(), &[false, true]);
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn test_update_leaves_other_entries_untouched() {
        let mut field: Repeatable<String> =
            ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        field.update(1, "B".to_string());
        assert_eq!(
            field.values(),
            &["a".to_string(), "B".to_string(), "c".to_string()]
        );
    }

    #[test]
    #[should_panic]
    fn test_update_out_of_range_panics() {
        let mut field: Repeatable<String> = Repeatable::new();
        field.update(0, "x".to_string());
    }

    #[test]
    fn test_flags_always_same_length_as_values() {
        let mut field: Repeatable<String> = Repeatable::new();
        for _ in 0..5 {
            field.add();
            assert_eq!(field.values().len(), field.flags().len());
        }
        for _ in 0..5 {
            field.remove(0);
            assert_eq!(field.values().len(), field.flags().len());
        }
    }
}
