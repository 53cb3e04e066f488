//! BCP-47 locale fallback matching.

use std::iter;

use crate::types::Vocabulary;

/// How [`find_vocabulary`] matches the requested locale against candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocaleMatcher {
    /// Only an exact locale match is accepted.
    #[default]
    Exact,
    /// Progressively drop the most specific subtag until a candidate matches.
    Lookup,
}

/// Options for vocabulary lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub locale_matcher: LocaleMatcher,
}

impl LookupOptions {
    /// Options enabling progressive subtag fallback.
    pub fn lookup() -> Self {
        Self {
            locale_matcher: LocaleMatcher::Lookup,
        }
    }
}

/// The requested tag followed by each generalization of it, most specific first.
///
/// Each step removes the subtag after the last `-`, so the chain has exactly
/// one entry per subtag.
///
/// ```
/// use vocab::fallback_chain;
///
/// let chain: Vec<&str> = fallback_chain("en-us-x").collect();
/// assert_eq!(chain, ["en-us-x", "en-us", "en"]);
/// ```
pub fn fallback_chain(tag: &str) -> impl Iterator<Item = &str> {
    let mut next = Some(tag);
    iter::from_fn(move || {
        let current = next?;
        next = current.rfind('-').map(|index| &current[..index]);
        Some(current)
    })
}

/// Select the candidate vocabulary for `requested_locale`.
///
/// With [`LocaleMatcher::Exact`] a single exact comparison is made. With
/// [`LocaleMatcher::Lookup`] the locale is generalized along
/// [`fallback_chain`] until a candidate matches or no subtags remain.
/// Comparison is case-sensitive; callers lowercase the requested locale.
pub fn find_vocabulary<'a>(
    requested_locale: &str,
    candidates: &[&'a Vocabulary],
    options: LookupOptions,
) -> Option<&'a Vocabulary> {
    for locale in fallback_chain(requested_locale) {
        if let Some(found) = candidates.iter().find(|v| v.locale() == locale) {
            return Some(*found);
        }
        if options.locale_matcher != LocaleMatcher::Lookup {
            return None;
        }
        tracing::trace!(locale, "no vocabulary for locale, generalizing");
    }
    None
}
