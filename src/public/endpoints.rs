//! Ordered lookup endpoints per address family.

use url::Url;

use crate::network::IpFamily;

/// An ordered, non-empty list of "what is my IP" services for one family.
///
/// The resolver tries the URLs front to back and stops at the first success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackEndpoints {
    family: IpFamily,
    urls: Vec<Url>,
}

impl FallbackEndpoints {
    /// Creates an endpoint list. Returns `None` when `urls` is empty.
    #[must_use]
    pub fn new(family: IpFamily, urls: impl IntoIterator<Item = Url>) -> Option<Self> {
        let urls: Vec<Url> = urls.into_iter().collect();
        if urls.is_empty() {
            None
        } else {
            Some(Self { family, urls })
        }
    }

    /// Parses an endpoint list from URL strings.
    ///
    /// # Errors
    ///
    /// Returns the first URL that failed to parse together with the parse error.
    /// An empty input yields `Ok(None)`.
    pub fn parse<'a>(
        family: IpFamily,
        urls: impl IntoIterator<Item = &'a str>,
    ) -> Result<Option<Self>, (String, url::ParseError)> {
        let parsed = urls
            .into_iter()
            .map(|raw| Url::parse(raw).map_err(|e| (raw.to_string(), e)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(family, parsed))
    }

    /// Returns the family these endpoints report.
    #[must_use]
    pub const fn family(&self) -> IpFamily {
        self.family
    }

    /// Returns the URLs in the order they are tried.
    #[must_use]
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }
}
