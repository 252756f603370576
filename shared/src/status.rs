use crate::forms::{FilingStatus, FormType};
use crate::selection::SelectionSet;
use crate::{MapError, registry};

/// Map classification of one state for the active form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Unselected,
    Required,
    Conditional,
    NotRequired,
}

impl From<FilingStatus> for Status {
    fn from(status: FilingStatus) -> Self {
        match status {
            FilingStatus::Required => Self::Required,
            FilingStatus::Conditional => Self::Conditional,
            FilingStatus::NotRequired => Self::NotRequired,
        }
    }
}

/// Classify `code` under `form` given the current selection.
pub fn classify(code: &str, form: FormType, selection: &SelectionSet) -> Result<Status, MapError> {
    let region = registry::lookup(code).ok_or_else(|| MapError::InvalidRegion(code.to_string()))?;
    if !selection.contains(region.code) {
        return Ok(Status::Unselected);
    }
    Ok(region.forms.get(form).into())
}
