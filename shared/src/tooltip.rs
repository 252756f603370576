use crate::forms::{FilingStatus, FormType};
use crate::geometry::{Point, Size};
use crate::registry::{self, CityReturns, Region};

/// Horizontal and vertical gap between the pointer and the tooltip.
pub const POINTER_OFFSET: f64 = 15.0;
/// Minimum distance kept from the right and bottom viewport edges.
pub const EDGE_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityWarning {
    AllCities,
    Specific(Vec<&'static str>),
}

impl CityWarning {
    fn for_region(region: &Region) -> Option<Self> {
        match region.city_returns? {
            CityReturns::All => Some(Self::AllCities),
            CityReturns::Specific([]) => None,
            CityReturns::Specific(cities) => Some(Self::Specific(cities.to_vec())),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Self::AllCities => "All Cities Must File".to_string(),
            Self::Specific(cities) => format!("City Returns: {}", cities.join(", ")),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::AllCities => "city-returns-warning",
            Self::Specific(_) => "city-returns-advisory",
        }
    }
}

/// How the warning block is laid out above the status rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteLayout {
    None,
    Stacked,
    /// City warning and conditional note share the row at equal width.
    SideBySide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRow {
    pub form: FormType,
    pub status: FilingStatus,
}

impl StatusRow {
    pub fn label(&self) -> &'static str {
        self.form.row_label()
    }
}

/// Structured tooltip content for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBlock {
    pub code: &'static str,
    pub header: String,
    pub city_warning: Option<CityWarning>,
    pub conditional_note: Option<&'static str>,
    pub rows: Vec<StatusRow>,
}

impl DisplayBlock {
    pub fn layout(&self) -> NoteLayout {
        match (&self.city_warning, self.conditional_note) {
            (Some(_), Some(_)) => NoteLayout::SideBySide,
            (None, None) => NoteLayout::None,
            _ => NoteLayout::Stacked,
        }
    }

    pub fn conditional_text(&self) -> Option<String> {
        self.conditional_note
            .map(|note| format!("Conditional: {note}"))
    }
}

pub fn compose(region: &Region) -> DisplayBlock {
    let conditional_note = region
        .forms
        .any_conditional()
        .then(|| registry::conditional_criteria(region.code));
    DisplayBlock {
        code: region.code,
        header: format!("{} ({})", region.name, region.code),
        city_warning: CityWarning::for_region(region),
        conditional_note,
        rows: region
            .forms
            .iter()
            .map(|(form, status)| StatusRow { form, status })
            .collect(),
    }
}

/// Screen position of the tooltip's top-left corner.
///
/// Anchored right of and above the pointer, flipped to the other side of the
/// pointer on an axis where the block would run into the viewport margin.
pub fn position(pointer: Point, block: Size, viewport: Size) -> Point {
    let mut x = pointer.x + POINTER_OFFSET;
    let mut y = pointer.y - POINTER_OFFSET;
    if x + block.width > viewport.width - EDGE_MARGIN {
        x = pointer.x - block.width - POINTER_OFFSET;
    }
    if y + block.height > viewport.height - EDGE_MARGIN {
        y = pointer.y - block.height - POINTER_OFFSET;
    }
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_for(code: &str) -> DisplayBlock {
        compose(registry::lookup(code).expect("known region"))
    }

    #[test]
    fn maryland_warns_all_cities_without_conditional_note() {
        let block = block_for("MD");
        assert_eq!(block.header, "Maryland (MD)");
        assert_eq!(block.city_warning, Some(CityWarning::AllCities));
        assert_eq!(block.city_warning.as_ref().unwrap().text(), "All Cities Must File");
        assert_eq!(block.conditional_note, None);
        assert_eq!(block.layout(), NoteLayout::Stacked);
    }

    #[test]
    fn louisiana_carries_conditional_note() {
        let block = block_for("LA");
        assert_eq!(block.conditional_note, Some("If partners are non-residents"));
        assert_eq!(
            block.conditional_text().as_deref(),
            Some("Conditional: If partners are non-residents")
        );
        assert_eq!(block.city_warning, None);
        assert_eq!(block.layout(), NoteLayout::Stacked);
    }

    #[test]
    fn ohio_lays_warning_and_note_side_by_side() {
        let block = block_for("OH");
        assert_eq!(block.city_warning, Some(CityWarning::AllCities));
        assert!(block.conditional_note.is_some());
        assert_eq!(block.layout(), NoteLayout::SideBySide);
    }

    #[test]
    fn specific_cities_are_comma_joined() {
        let block = block_for("KY");
        assert_eq!(
            block.city_warning.map(|w| w.text()).as_deref(),
            Some("City Returns: Lexington, Louisville")
        );
    }

    #[test]
    fn plain_state_has_no_notes() {
        let block = block_for("CO");
        assert_eq!(block.layout(), NoteLayout::None);
    }

    #[test]
    fn rows_follow_fixed_form_order() {
        let block = block_for("TX");
        let rows: Vec<_> = block
            .rows
            .iter()
            .map(|row| (row.label(), row.status.label()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("S Corporation (1120S)", "Required"),
                ("Partnership (1065)", "Required"),
                ("C Corporation (1120)", "Required"),
                ("Individual (1040)", "Not Required"),
            ]
        );
    }

    #[test]
    fn position_defaults_to_offset_anchor() {
        let pos = position(
            Point::new(100.0, 300.0),
            Size::new(450.0, 200.0),
            Size::new(1280.0, 800.0),
        );
        assert_eq!(pos, Point::new(115.0, 285.0));
    }

    #[test]
    fn position_flips_left_on_right_overflow() {
        let pos = position(
            Point::new(1000.0, 300.0),
            Size::new(450.0, 200.0),
            Size::new(1280.0, 800.0),
        );
        assert_eq!(pos, Point::new(535.0, 285.0));
    }

    #[test]
    fn position_flips_up_on_bottom_overflow() {
        let pos = position(
            Point::new(100.0, 700.0),
            Size::new(450.0, 200.0),
            Size::new(1280.0, 800.0),
        );
        assert_eq!(pos, Point::new(115.0, 485.0));
    }

    #[test]
    fn position_never_overflows_when_flip_fits() {
        let block = Size::new(300.0, 180.0);
        let viewport = Size::new(1024.0, 768.0);
        for px in (320..=1000).step_by(40) {
            for py in (200..=740).step_by(30) {
                let pos = position(Point::new(px as f64, py as f64), block, viewport);
                assert!(pos.x + block.width <= viewport.width - EDGE_MARGIN);
                assert!(pos.y + block.height <= viewport.height - EDGE_MARGIN);
            }
        }
    }
}
