//! Collected results of one run and their text/JSON rendering.

use serde::Serialize;

use super::Category;
use crate::network::IpFamily;
use crate::result::AddressResult;

/// One optional [`AddressResult`] per category.
///
/// A category is `None` when it was not requested. Requested categories
/// that found nothing hold an empty result and are skipped when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Ethernet category result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<AddressResult>,
    /// Loopback category result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loopback: Option<AddressResult>,
    /// Public category result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<AddressResult>,
}

impl Report {
    /// Returns the result for a category, if it was requested.
    #[must_use]
    pub const fn get(&self, category: Category) -> Option<&AddressResult> {
        match category {
            Category::Ethernet => self.ethernet.as_ref(),
            Category::Loopback => self.loopback.as_ref(),
            Category::Public => self.public.as_ref(),
        }
    }

    /// Stores the result for a category.
    pub fn set(&mut self, category: Category, result: AddressResult) {
        let slot = match category {
            Category::Ethernet => &mut self.ethernet,
            Category::Loopback => &mut self.loopback,
            Category::Public => &mut self.public,
        };
        *slot = Some(result);
    }

    /// Iterates requested categories in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &AddressResult)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(|category| self.get(category).map(|result| (category, result)))
    }

    /// Returns one `Label (Family): addresses` line per non-empty family.
    ///
    /// Lines follow category display order, IPv4 before IPv6.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .flat_map(|(category, result)| {
                IpFamily::ALL.into_iter().filter_map(move |family| {
                    let addresses = result.get(family);
                    (!addresses.is_empty())
                        .then(|| format!("{} ({family}): {addresses}", category.label()))
                })
            })
            .collect()
    }

    /// Returns true if there is nothing to print.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().all(|(_, result)| result.is_empty())
    }

    /// Renders the text output: a blank line, the label lines, a blank line.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::from("\n");
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// Renders the report as a pretty-printed JSON object.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; not expected for this plain data.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
