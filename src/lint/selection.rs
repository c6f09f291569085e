//! Rule category selection.
//!
//! A [`Selection`] is what the caller asks the engine to run: either every
//! category (`all`) or an explicit set. The order the caller lists names
//! in never matters; categories always run in registry order.

use std::collections::BTreeSet;

use super::rule::Category;
use crate::error::Result;

/// The sentinel name that selects every category.
pub const ALL_SENTINEL: &str = "all";

/// The set of categories to lint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every category, in registry order.
    #[default]
    All,
    /// Only the listed categories.
    Only(BTreeSet<Category>),
}

impl Selection {
    /// Select exactly the given categories.
    pub fn only(categories: impl IntoIterator<Item = Category>) -> Self {
        Self::Only(categories.into_iter().collect())
    }

    /// Build a selection from section names.
    ///
    /// Every name is validated before anything is selected. `all` anywhere
    /// in the list selects everything, as does an empty list.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` for the first name outside the category
    /// enumeration.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all = false;
        let mut categories = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            if name == ALL_SENTINEL {
                all = true;
            } else {
                categories.insert(name.parse::<Category>()?);
            }
        }

        if all || categories.is_empty() {
            Ok(Self::All)
        } else {
            Ok(Self::Only(categories))
        }
    }

    /// Whether `category` is selected.
    pub fn contains(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(categories) => categories.contains(&category),
        }
    }

    /// The selected categories, in registry order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HyperionError;

    #[test]
    fn all_sentinel_selects_everything() {
        let selection = Selection::from_names(["all"]).unwrap();

        assert_eq!(selection, Selection::All);
        assert_eq!(selection.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn empty_list_selects_everything() {
        let selection = Selection::from_names(Vec::<String>::new()).unwrap();

        assert_eq!(selection, Selection::All);
    }

    #[test]
    fn all_wins_over_explicit_names() {
        let selection = Selection::from_names(["naming", "all"]).unwrap();

        assert_eq!(selection, Selection::All);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = Selection::from_names(["paths", "naming"]).unwrap();
        let b = Selection::from_names(["naming", "paths"]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.categories(), vec![Category::Paths, Category::Naming]);
    }

    #[test]
    fn duplicates_collapse() {
        let selection = Selection::from_names(["dates", "dates"]).unwrap();

        assert_eq!(selection.categories(), vec![Category::Dates]);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let result = Selection::from_names(["paths", "colours"]);

        assert!(matches!(
            result,
            Err(HyperionError::UnknownCategory { ref name, .. }) if name == "colours"
        ));
    }

    #[test]
    fn unknown_name_is_rejected_even_with_all() {
        assert!(Selection::from_names(["all", "bogus"]).is_err());
    }

    #[test]
    fn contains_respects_selection() {
        let selection = Selection::only([Category::StatusCodes]);

        assert!(selection.contains(Category::StatusCodes));
        assert!(!selection.contains(Category::Paths));
    }
}
