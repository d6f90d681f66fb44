//! Category selection for one run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An address category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Non-loopback addresses on interfaces named like `e*`.
    Ethernet,
    /// Addresses on interfaces named like `l*`, loopback included.
    Loopback,
    /// The address external services see.
    Public,
}

impl Category {
    /// All categories in the order they are displayed.
    pub const ALL: [Self; 3] = [Self::Ethernet, Self::Loopback, Self::Public];

    /// Returns the label used in text output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ethernet => "Ethernet",
            Self::Loopback => "Loopback",
            Self::Public => "Public",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which categories to query.
///
/// Built once from parsed flags and passed by value; never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct QueryRequest {
    /// Query the ethernet category.
    pub ethernet: bool,
    /// Query the loopback category.
    pub loopback: bool,
    /// Query the public category.
    pub public: bool,
}

impl QueryRequest {
    /// A request for every category.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            ethernet: true,
            loopback: true,
            public: true,
        }
    }

    /// Builds a request from raw flags.
    ///
    /// `all` expands to every category, and no flag at all also means every
    /// category.
    #[must_use]
    pub const fn from_flags(all: bool, ethernet: bool, loopback: bool, public: bool) -> Self {
        if all || !(ethernet || loopback || public) {
            return Self::all();
        }
        Self {
            ethernet,
            loopback,
            public,
        }
    }

    /// Returns true if `category` is selected.
    #[must_use]
    pub const fn includes(&self, category: Category) -> bool {
        match category {
            Category::Ethernet => self.ethernet,
            Category::Loopback => self.loopback,
            Category::Public => self.public,
        }
    }

    /// Returns true if no category is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.ethernet || self.loopback || self.public)
    }

    /// Iterates the selected categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.includes(*c))
    }
}

impl fmt::Display for QueryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.categories().map(Category::label).collect();
        f.write_str(&names.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_all() {
        assert_eq!(
            QueryRequest::from_flags(false, false, false, false),
            QueryRequest::all()
        );
    }

    #[test]
    fn all_flag_overrides_individual_flags() {
        assert_eq!(
            QueryRequest::from_flags(true, true, false, false),
            QueryRequest::all()
        );
    }

    #[test]
    fn individual_flags_select_only_those() {
        let request = QueryRequest::from_flags(false, true, false, true);

        assert!(request.ethernet);
        assert!(!request.loopback);
        assert!(request.public);
        assert_eq!(
            request.categories().collect::<Vec<_>>(),
            vec![Category::Ethernet, Category::Public]
        );
    }

    #[test]
    fn default_request_is_empty() {
        assert!(QueryRequest::default().is_empty());
        assert!(!QueryRequest::all().is_empty());
    }

    #[test]
    fn display_lists_selected_categories() {
        assert_eq!(QueryRequest::all().to_string(), "Ethernet+Loopback+Public");
        assert_eq!(QueryRequest::default().to_string(), "none");
    }

    #[test]
    fn categories_are_ordered_for_display() {
        let mut shuffled = vec![Category::Public, Category::Ethernet, Category::Loopback];
        shuffled.sort();
        assert_eq!(shuffled, Category::ALL.to_vec());
    }
}
