use indexmap::IndexMap;
use serde::Serialize;

use crate::util::fold_case;

/// Name of the section holding assignments that appear before any `[section]` header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Key/value pairs of a single section, in the order keys were first assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
    entries: IndexMap<String, String>,
}

impl Section {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

/// The decoded result: section name to [`Section`], ordered by first assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Shorthand for `section(section)` followed by `get(key)`.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Section> {
        self.sections
    }

    /// Writes `key = value` into `section`, creating the section on first use.
    ///
    /// With `ignore_case`, both names are lower-cased before lookup so `[Foo] Bar` and
    /// `[foo] bar` land on the same entry. A later write to an existing key replaces it.
    pub(crate) fn set(&mut self, section: &str, key: &str, value: String, ignore_case: bool) {
        let section = fold_case(section, ignore_case);
        let key = fold_case(key, ignore_case).into_owned();

        if let Some(existing) = self.sections.get_mut(section.as_ref()) {
            existing.insert(key, value);
        } else {
            let mut created = Section::default();
            created.insert(key, value);
            self.sections.insert(section.into_owned(), created);
        }
    }
}
