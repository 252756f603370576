use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MapError;

/// Federal return category the user is filing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FormType {
    #[default]
    #[serde(rename = "1120S")]
    SCorp,
    #[serde(rename = "1065")]
    Partnership,
    #[serde(rename = "1120")]
    CCorp,
    #[serde(rename = "1040")]
    Individual,
}

impl FormType {
    /// Display order used by the selector and by tooltip status rows.
    pub const ALL: [FormType; 4] = [
        FormType::SCorp,
        FormType::Partnership,
        FormType::CCorp,
        FormType::Individual,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::SCorp => "1120S",
            Self::Partnership => "1065",
            Self::CCorp => "1120",
            Self::Individual => "1040",
        }
    }

    /// Row label inside the tooltip, e.g. "S Corporation (1120S)".
    pub fn row_label(self) -> &'static str {
        match self {
            Self::SCorp => "S Corporation (1120S)",
            Self::Partnership => "Partnership (1065)",
            Self::CCorp => "C Corporation (1120)",
            Self::Individual => "Individual (1040)",
        }
    }

    /// Radio button label, e.g. "1120S - S Corporation".
    pub fn option_label(self) -> &'static str {
        match self {
            Self::SCorp => "1120S - S Corporation",
            Self::Partnership => "1065 - Partnership",
            Self::CCorp => "1120 - C Corporation",
            Self::Individual => "1040 - Individual",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormType {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|form| form.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MapError::UnknownFormType(s.to_string()))
    }
}

/// Filing obligation of one state for one form type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilingStatus {
    Required,
    Conditional,
    NotRequired,
}

impl FilingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::Conditional => "Conditional",
            Self::NotRequired => "Not Required",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Required => "status-required",
            Self::Conditional => "status-conditional",
            Self::NotRequired => "status-not-required",
        }
    }
}

/// Per-form statuses of a single state, one slot per [`FormType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStatuses {
    pub s_corp: FilingStatus,
    pub partnership: FilingStatus,
    pub c_corp: FilingStatus,
    pub individual: FilingStatus,
}

impl FormStatuses {
    pub const fn get(&self, form: FormType) -> FilingStatus {
        match form {
            FormType::SCorp => self.s_corp,
            FormType::Partnership => self.partnership,
            FormType::CCorp => self.c_corp,
            FormType::Individual => self.individual,
        }
    }

    /// Statuses in [`FormType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FormType, FilingStatus)> + '_ {
        FormType::ALL.into_iter().map(|form| (form, self.get(form)))
    }

    pub fn any_conditional(&self) -> bool {
        self.iter()
            .any(|(_, status)| status == FilingStatus::Conditional)
    }
}
