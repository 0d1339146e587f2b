//! Selected ingredient set.

use mealdb_api_client::Ingredient;

/// Ingredients picked for a search, unique by name.
///
/// Iteration follows insertion order, so the first ingredient toggled on is
/// the one whose lookup seeds the search and orders its results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedIngredients {
    items: Vec<Ingredient>,
}

impl SelectedIngredients {
    /// Empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `ingredient` if absent, remove it if present.
    ///
    /// Returns whether it is selected afterwards.
    pub fn toggle(&mut self, ingredient: Ingredient) -> bool {
        if let Some(pos) = self.items.iter().position(|i| *i == ingredient) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(ingredient);
            true
        }
    }

    /// Whether `ingredient` is selected
    #[must_use]
    pub fn contains(&self, ingredient: &Ingredient) -> bool {
        self.items.contains(ingredient)
    }

    /// Number of selected ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected ingredients in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Ingredient> {
        self.items.iter()
    }

    /// Selected names in insertion order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a SelectedIngredients {
    type Item = &'a Ingredient;
    type IntoIter = std::slice::Iter<'a, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Ingredient> for SelectedIngredients {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        let mut selection = Self::new();
        for ingredient in iter {
            if !selection.contains(&ingredient) {
                selection.toggle(ingredient);
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectedIngredients::new();

        assert!(selection.toggle(Ingredient::named("Garlic")));
        assert!(selection.contains(&Ingredient::named("Garlic")));

        assert!(!selection.toggle(Ingredient::named("Garlic")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_distinct_toggles_grow_selection() {
        let mut selection = SelectedIngredients::new();
        let names = ["Chicken", "Garlic", "Lemon", "Thyme"];

        for name in names {
            selection.toggle(Ingredient::named(name));
        }

        assert_eq!(selection.len(), names.len());
        assert_eq!(selection.names(), names);
    }

    #[test]
    fn test_removal_keeps_order_of_the_rest() {
        let mut selection: SelectedIngredients = ["Chicken", "Garlic", "Lemon"]
            .into_iter()
            .map(Ingredient::named)
            .collect();

        selection.toggle(Ingredient::named("Chicken"));
        assert_eq!(selection.names(), ["Garlic", "Lemon"]);
    }

    #[test]
    fn test_from_iter_ignores_duplicates() {
        let selection: SelectedIngredients = ["Garlic", "Garlic", "Lemon"]
            .into_iter()
            .map(Ingredient::named)
            .collect();
        assert_eq!(selection.len(), 2);
    }
}
