use crate::foundation::error::{HtmlpressError, HtmlpressResult};
use crate::options::value::OptionValue;

/// An insertion-ordered option mapping with a fixed key set.
///
/// The recognized names are decided once, at construction, by the renderer
/// kind's schema; they can never be added or removed afterwards, only
/// re-valued. Iteration order is the construction order and is preserved
/// through [`OptionSet::merged`], so command serialization is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionSet {
    entries: Vec<(String, OptionValue)>,
}

impl OptionSet {
    /// Build a set recognizing exactly `names`, all initially unset.
    ///
    /// Duplicate names collapse onto the first occurrence.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, OptionValue)> = Vec::new();
        for name in names {
            let name = name.into();
            if !entries.iter().any(|(n, _)| *n == name) {
                entries.push((name, OptionValue::Unset));
            }
        }
        Self { entries }
    }

    /// Number of recognized options, set or unset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no option names are recognized at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` is a recognized option.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Current value of `name`, or `None` when the name is not recognized.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Overwrite the value of a recognized option.
    ///
    /// Setting [`OptionValue::Unset`] is the unset operation; the name stays
    /// recognized. Unrecognized names fail with
    /// [`HtmlpressError::InvalidOption`] and never extend the set.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> HtmlpressResult<()> {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(HtmlpressError::invalid_option(name)),
        }
    }

    /// Apply `set` for each pair in order, aborting on the first
    /// unrecognized name. Entries applied before the failure stay applied;
    /// there is no rollback.
    pub fn set_many<I, S, V>(&mut self, pairs: I) -> HtmlpressResult<()>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<OptionValue>,
    {
        for (name, value) in pairs {
            self.set(name.as_ref(), value)?;
        }
        Ok(())
    }

    /// Return a new set equal to this one with `overrides` applied on top.
    ///
    /// Pure: `self` is never mutated, even when an override is rejected.
    pub fn merged<I, S, V>(&self, overrides: I) -> HtmlpressResult<OptionSet>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<OptionValue>,
    {
        let mut merged = self.clone();
        merged.set_many(overrides)?;
        Ok(merged)
    }

    /// Iterate over `(name, value)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/set.rs"]
mod tests;
