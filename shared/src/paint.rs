//! Fill and label colours for every map shape.
//!
//! The map is a projection of `(shapes, selection, form)`: every shape is
//! reset to the neutral fill, then only selected states are recoloured. No
//! state is carried between calls, so painting twice gives the same result.

use std::collections::HashMap;

use crate::forms::FormType;
use crate::selection::SelectionSet;
use crate::status::{Status, classify};
use crate::MapError;

pub const NEUTRAL_FILL: &str = "#f9fafb";
pub const REQUIRED_FILL: &str = "#8dd39e";
pub const CONDITIONAL_FILL: &str = "#ffe58a";
pub const NOT_REQUIRED_FILL: &str = "#b0bec5";

pub const DARK_TEXT: &str = "#000000";
pub const LIGHT_TEXT: &str = "#ffffff";

impl Status {
    pub fn fill(self) -> &'static str {
        match self {
            Self::Unselected => NEUTRAL_FILL,
            Self::Required => REQUIRED_FILL,
            Self::Conditional => CONDITIONAL_FILL,
            Self::NotRequired => NOT_REQUIRED_FILL,
        }
    }

    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Unselected => None,
            Self::Required => Some("filing-required"),
            Self::Conditional => Some("conditional-filing"),
            Self::NotRequired => Some("no-filing"),
        }
    }
}

/// Label text colour that stays readable on `fill`.
pub fn label_color_for_fill(fill: &str) -> &'static str {
    if fill.eq_ignore_ascii_case(REQUIRED_FILL) {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPaint {
    pub status: Status,
    pub fill: &'static str,
    pub label_color: &'static str,
}

impl RegionPaint {
    pub fn for_status(status: Status) -> Self {
        let fill = status.fill();
        Self {
            status,
            fill,
            label_color: label_color_for_fill(fill),
        }
    }
}

const NEUTRAL: RegionPaint = RegionPaint {
    status: Status::Unselected,
    fill: NEUTRAL_FILL,
    label_color: DARK_TEXT,
};

/// Paint for one render of the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapPaint {
    regions: HashMap<String, RegionPaint>,
    /// Shape ids that could not be classified. They keep the neutral paint.
    pub skipped: Vec<MapError>,
}

impl MapPaint {
    /// Paint for `code`; shapes that were never painted read as neutral.
    pub fn get(&self, code: &str) -> RegionPaint {
        self.regions.get(code).copied().unwrap_or(NEUTRAL)
    }

    pub fn status(&self, code: &str) -> Status {
        self.get(code).status
    }
}

/// Reset every shape to neutral, then recolour the selected ones.
pub fn paint<'a, I>(shapes: I, selection: &SelectionSet, form: FormType) -> MapPaint
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = MapPaint::default();
    for code in shapes {
        out.regions.insert(code.to_string(), NEUTRAL);
    }

    let codes: Vec<String> = out.regions.keys().cloned().collect();
    for code in codes {
        match classify(&code, form, selection) {
            Ok(Status::Unselected) => {}
            Ok(status) => {
                out.regions.insert(code, RegionPaint::for_status(status));
            }
            Err(e) => out.skipped.push(e),
        }
    }
    out.skipped.sort_by_key(|e| e.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn selection(codes: &[&str]) -> SelectionSet {
        let mut set = SelectionSet::new();
        for code in codes {
            set.insert(code).unwrap();
        }
        set
    }

    #[test]
    fn only_selected_regions_are_coloured() {
        let painted = paint(registry::all_codes(), &selection(&["CA"]), FormType::SCorp);
        assert_eq!(painted.status("CA"), Status::Required);
        assert_eq!(painted.get("CA").fill, REQUIRED_FILL);
        for code in registry::all_codes().filter(|code| *code != "CA") {
            assert_eq!(painted.get(code), NEUTRAL, "{code}");
        }
    }

    #[test]
    fn form_switch_recolours_only_affected_region() {
        let set = selection(&["AK"]);
        let s_corp = paint(registry::all_codes(), &set, FormType::SCorp);
        let c_corp = paint(registry::all_codes(), &set, FormType::CCorp);
        assert_eq!(s_corp.status("AK"), Status::NotRequired);
        assert_eq!(c_corp.status("AK"), Status::Required);
        for code in registry::all_codes().filter(|code| *code != "AK") {
            assert_eq!(s_corp.status(code), c_corp.status(code));
        }
    }

    #[test]
    fn repainting_is_idempotent() {
        let set = selection(&["LA", "TX", "WA"]);
        let first = paint(registry::all_codes(), &set, FormType::Individual);
        let second = paint(registry::all_codes(), &set, FormType::Individual);
        assert_eq!(first, second);
    }

    #[test]
    fn deselected_region_returns_to_neutral() {
        let mut set = selection(&["NV"]);
        let before = paint(registry::all_codes(), &set, FormType::CCorp);
        assert_eq!(before.status("NV"), Status::Required);
        set.remove("NV");
        let after = paint(registry::all_codes(), &set, FormType::CCorp);
        assert_eq!(after.get("NV"), NEUTRAL);
    }

    #[test]
    fn label_colour_tracks_fill() {
        let set = selection(&["CA", "LA", "AK"]);
        let painted = paint(registry::all_codes(), &set, FormType::SCorp);
        assert_eq!(painted.get("CA").label_color, LIGHT_TEXT);
        assert_eq!(painted.get("LA").fill, CONDITIONAL_FILL);
        assert_eq!(painted.get("LA").label_color, DARK_TEXT);
        assert_eq!(painted.get("AK").fill, NOT_REQUIRED_FILL);
        assert_eq!(painted.get("AK").label_color, DARK_TEXT);
        assert_eq!(painted.get("OR").label_color, DARK_TEXT);
    }

    #[test]
    fn unknown_shapes_are_skipped_without_stopping() {
        let shapes = ["PR", "CA", "GU", "TX"];
        let painted = paint(shapes, &selection(&["CA", "TX"]), FormType::SCorp);
        assert_eq!(painted.status("CA"), Status::Required);
        assert_eq!(painted.status("TX"), Status::Required);
        assert_eq!(painted.get("PR"), NEUTRAL);
        assert_eq!(
            painted.skipped,
            vec![
                MapError::InvalidRegion("GU".into()),
                MapError::InvalidRegion("PR".into()),
            ]
        );
    }
}
