use crate::{MapError, registry};

/// The states the user is currently considering.
///
/// Codes are unique and kept in insertion order, which drives the order of
/// the summary lists. Only registry codes can get in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    codes: Vec<&'static str>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registry state, in table order.
    pub fn all() -> Self {
        Self {
            codes: registry::all_codes().collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|selected| *selected == code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codes.iter().copied()
    }

    /// Append `code`. Fails for unknown or already selected codes.
    pub fn insert(&mut self, code: &str) -> Result<&'static str, MapError> {
        let region =
            registry::lookup(code).ok_or_else(|| MapError::InvalidRegion(code.to_string()))?;
        if self.contains(region.code) {
            return Err(MapError::AlreadySelected(region.code));
        }
        self.codes.push(region.code);
        Ok(region.code)
    }

    /// Remove `code`, returning whether it was selected.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.codes.len();
        self.codes.retain(|selected| *selected != code);
        self.codes.len() != before
    }

    /// Remove `code` if selected, append it otherwise. Returns the new membership.
    pub fn toggle(&mut self, code: &str) -> Result<bool, MapError> {
        if self.remove(code) {
            return Ok(false);
        }
        self.insert(code).map(|_| true)
    }

    pub fn select_all(&mut self) {
        *self = Self::all();
    }

    pub fn clear(&mut self) {
        self.codes.clear();
    }

    /// Add a state typed by the user as a name or abbreviation.
    ///
    /// Blank input is a no-op and yields `Ok(None)`.
    pub fn add_from_input(&mut self, input: &str) -> Result<Option<&'static str>, MapError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let region =
            registry::resolve(trimmed).ok_or_else(|| MapError::UnknownState(trimmed.to_string()))?;
        self.insert(region.code).map(Some)
    }
}
