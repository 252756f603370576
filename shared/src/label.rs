//! Placement of the two-letter state labels drawn on top of the map.
//!
//! Centroid placement breaks down on this projection for concave, sliver and
//! tiny states, so placement runs through a fixed rule chain:
//!
//! 1. hard exclusions (never labelled),
//! 2. hand-tuned per-state offsets,
//! 3. a size/shape suitability filter,
//! 4. the bounding-box centre, behind a looser size check.
//!
//! The override table is tied to the shipped map asset. Re-tune it if the
//! asset's projection changes.

use std::collections::HashMap;

use crate::geometry::{BBox, Point};
use crate::{MapError, registry};

/// States whose shapes are too small or too close to their neighbours.
pub const HARD_EXCLUSIONS: [&str; 3] = ["HI", "MD", "MA"];

const MIN_SIDE: f64 = 30.0;
const MIN_ASPECT: f64 = 0.3;
const MAX_ASPECT: f64 = 3.5;
const MIN_AREA: f64 = 500.0;
const FALLBACK_MIN_WIDTH: f64 = 28.0;
const FALLBACK_MIN_HEIGHT: f64 = 20.0;

/// Hand-tuned label anchor for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelOverride {
    /// Label at `(fx, fy)` of the bounding box.
    Offset { fx: f64, fy: f64 },
    /// Same as `Offset`, then pulled at least `margin` inside every edge.
    Clamped { fx: f64, fy: f64, margin: f64 },
}

const OVERRIDES: &[(&str, LabelOverride)] = &[
    ("FL", LabelOverride::Offset { fx: 0.78, fy: 0.45 }),
    ("LA", LabelOverride::Offset { fx: 0.35, fy: 0.6 }),
    ("WV", LabelOverride::Offset { fx: 0.45, fy: 0.55 }),
    ("MI", LabelOverride::Offset { fx: 0.7, fy: 0.7 }),
    ("MN", LabelOverride::Offset { fx: 0.45, fy: 0.6 }),
    ("KY", LabelOverride::Offset { fx: 0.55, fy: 0.5 }),
    ("CA", LabelOverride::Offset { fx: 0.5, fy: 0.6 }),
    ("WA", LabelOverride::Offset { fx: 0.6, fy: 0.5 }),
    ("ID", LabelOverride::Offset { fx: 0.5, fy: 0.7 }),
    ("WI", LabelOverride::Offset { fx: 0.5, fy: 0.55 }),
    ("TN", LabelOverride::Offset { fx: 0.5, fy: 0.55 }),
    // Alaska's landmass is non-convex; a plain offset can land in open water.
    (
        "AK",
        LabelOverride::Clamped {
            fx: 0.7,
            fy: 0.44,
            margin: 30.0,
        },
    ),
];

pub fn label_override(code: &str) -> Option<LabelOverride> {
    OVERRIDES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, rule)| *rule)
}

impl LabelOverride {
    fn apply(self, bbox: &BBox) -> Option<Point> {
        match self {
            Self::Offset { fx, fy } => Some(bbox.at_fraction(fx, fy)),
            Self::Clamped { fx, fy, margin } => {
                let min_x = bbox.left() + margin;
                let max_x = bbox.right() - margin;
                let min_y = bbox.top() + margin;
                let max_y = bbox.bottom() - margin;
                if min_x > max_x || min_y > max_y {
                    return None;
                }
                let raw = bbox.at_fraction(fx, fy);
                Some(Point::new(
                    raw.x.clamp(min_x, max_x),
                    raw.y.clamp(min_y, max_y),
                ))
            }
        }
    }
}

/// Whether a shape is large and compact enough for centred text.
pub fn is_suitable_for_text(bbox: &BBox) -> bool {
    if bbox.width < MIN_SIDE || bbox.height < MIN_SIDE {
        return false;
    }
    let aspect = bbox.aspect_ratio();
    if !(MIN_ASPECT..=MAX_ASPECT).contains(&aspect) {
        return false;
    }
    bbox.area() >= MIN_AREA
}

/// Decide where (and whether) to draw the label for `code`.
pub fn place_label(code: &str, bbox: &BBox) -> Option<Point> {
    if HARD_EXCLUSIONS.contains(&code) {
        return None;
    }
    if let Some(rule) = label_override(code) {
        return rule.apply(bbox);
    }
    if !is_suitable_for_text(bbox) {
        return None;
    }
    if bbox.width < FALLBACK_MIN_WIDTH || bbox.height < FALLBACK_MIN_HEIGHT {
        return None;
    }
    Some(bbox.center())
}

/// Label positions for one mounted map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSet {
    positions: HashMap<&'static str, Point>,
    /// Shapes whose id is not a registry code. They are never labelled.
    pub skipped: Vec<MapError>,
}

impl LabelSet {
    pub fn get(&self, code: &str) -> Option<Point> {
        self.positions.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Place labels for every measured shape, skipping ids outside the registry.
pub fn place_labels<'a, I>(shapes: I) -> LabelSet
where
    I: IntoIterator<Item = (&'a str, BBox)>,
{
    let mut set = LabelSet::default();
    for (code, bbox) in shapes {
        let Some(region) = registry::lookup(code) else {
            set.skipped.push(MapError::InvalidRegion(code.to_string()));
            continue;
        };
        if let Some(point) = place_label(region.code, &bbox) {
            set.positions.insert(region.code, point);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOMY: BBox = BBox::new(100.0, 200.0, 120.0, 80.0);

    fn assert_point(actual: Option<Point>, x: f64, y: f64) {
        let point = actual.expect("expected a label position");
        assert!(
            (point.x - x).abs() < 1e-9 && (point.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got ({}, {})",
            point.x,
            point.y
        );
    }

    #[test]
    fn hard_exclusions_never_get_labels() {
        let huge = BBox::new(0.0, 0.0, 500.0, 400.0);
        for code in HARD_EXCLUSIONS {
            assert_eq!(place_label(code, &huge), None);
            assert_eq!(place_label(code, &ROOMY), None);
        }
    }

    #[test]
    fn default_rule_uses_bbox_center() {
        assert_point(place_label("CO", &ROOMY), 160.0, 240.0);
    }

    #[test]
    fn suitability_filter_rejects_small_and_sliver_shapes() {
        let cases = [
            BBox::new(0.0, 0.0, 29.9, 80.0),
            BBox::new(0.0, 0.0, 80.0, 29.9),
            BBox::new(0.0, 0.0, 30.0, 120.0),
            BBox::new(0.0, 0.0, 140.0, 30.0),
        ];
        for bbox in cases {
            assert_eq!(place_label("CO", &bbox), None, "{bbox:?}");
            assert!(!is_suitable_for_text(&bbox));
        }
    }

    #[test]
    fn suitability_filter_bounds_are_inclusive() {
        assert!(is_suitable_for_text(&BBox::new(0.0, 0.0, 30.0, 30.0)));
        assert!(is_suitable_for_text(&BBox::new(0.0, 0.0, 105.0, 30.0)));
        assert!(is_suitable_for_text(&BBox::new(0.0, 0.0, 30.0, 100.0)));
        assert_point(place_label("NE", &BBox::new(0.0, 0.0, 30.0, 30.0)), 15.0, 15.0);
    }

    #[test]
    fn overrides_use_fractional_offsets() {
        let bbox = BBox::new(0.0, 0.0, 200.0, 100.0);
        assert_point(place_label("FL", &bbox), 156.0, 45.0);
        assert_point(place_label("MI", &bbox), 140.0, 70.0);
        assert_point(place_label("CA", &bbox), 100.0, 60.0);
    }

    #[test]
    fn overrides_bypass_suitability_filter() {
        let sliver = BBox::new(0.0, 0.0, 200.0, 20.0);
        assert!(!is_suitable_for_text(&sliver));
        assert!(place_label("TN", &sliver).is_some());
        assert_eq!(place_label("OK", &sliver), None);
    }

    #[test]
    fn alaska_offset_is_clamped_inside_bbox() {
        let bbox = BBox::new(10.0, 400.0, 400.0, 300.0);
        assert_point(place_label("AK", &bbox), 290.0, 532.0);

        // Narrow enough that the raw 70% point sits within 30 units of the right edge.
        let narrow = BBox::new(0.0, 0.0, 80.0, 70.0);
        assert_point(place_label("AK", &narrow), 50.0, 30.8);
    }

    #[test]
    fn alaska_position_always_respects_margin() {
        let boxes = [
            BBox::new(0.0, 0.0, 60.0, 60.0),
            BBox::new(-50.0, 12.0, 61.0, 500.0),
            BBox::new(3.0, 3.0, 900.0, 61.0),
            BBox::new(100.0, 100.0, 75.0, 90.0),
        ];
        for bbox in boxes {
            let point = place_label("AK", &bbox).expect("room for a clamped label");
            assert!(bbox.left() + 30.0 <= point.x && point.x <= bbox.right() - 30.0);
            assert!(bbox.top() + 30.0 <= point.y && point.y <= bbox.bottom() - 30.0);
        }
    }

    #[test]
    fn alaska_too_small_to_clamp_has_no_label() {
        assert_eq!(place_label("AK", &BBox::new(0.0, 0.0, 59.0, 200.0)), None);
        assert_eq!(place_label("AK", &BBox::new(0.0, 0.0, 200.0, 40.0)), None);
    }

    #[test]
    fn place_labels_skips_unknown_shapes() {
        let set = place_labels([
            ("CO", ROOMY),
            ("HI", ROOMY),
            ("PR", ROOMY),
            ("RI", BBox::new(0.0, 0.0, 8.0, 10.0)),
        ]);
        assert_eq!(set.len(), 1);
        assert_point(set.get("CO"), 160.0, 240.0);
        assert_eq!(set.get("HI"), None);
        assert_eq!(set.get("RI"), None);
        assert_eq!(set.skipped, vec![MapError::InvalidRegion("PR".into())]);
    }
}
