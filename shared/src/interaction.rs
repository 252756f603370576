//! Pointer interaction over the region shapes.
//!
//! Each shape is either idle or hovered; click is an edge-triggered action
//! available from both. The map owns a single [`Interaction`] value, which
//! holds at most one emphasised shape and at most one tooltip.

use crate::geometry::{Point, Size};
use crate::tooltip;
use crate::{MapError, registry};

/// The one tooltip alive on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipState {
    pub code: &'static str,
    pub pointer: Point,
    pub position: Point,
}

/// Transient hover styling on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub code: &'static str,
    /// Cleared by a click while the scale and shadow stay until pointer-leave.
    pub stroke: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeState {
    Idle,
    Hovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interaction {
    emphasis: Option<Emphasis>,
    tooltip: Option<TooltipState>,
}

impl Interaction {
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    pub fn emphasis(&self, code: &str) -> Option<Emphasis> {
        self.emphasis.filter(|emphasis| emphasis.code == code)
    }

    pub fn shape_state(&self, code: &str) -> ShapeState {
        if self.emphasis(code).is_some() {
            ShapeState::Hovered
        } else {
            ShapeState::Idle
        }
    }

    /// Pointer entered `code`: tear down whatever was shown, then emphasise
    /// the shape and open its tooltip. Unknown shapes are left untouched.
    pub fn pointer_enter(
        &mut self,
        code: &str,
        pointer: Point,
        block: Size,
        viewport: Size,
    ) -> Result<(), MapError> {
        let region =
            registry::lookup(code).ok_or_else(|| MapError::InvalidRegion(code.to_string()))?;
        self.tooltip = None;
        self.emphasis = Some(Emphasis {
            code: region.code,
            stroke: true,
        });
        self.tooltip = Some(TooltipState {
            code: region.code,
            pointer,
            position: tooltip::position(pointer, block, viewport),
        });
        Ok(())
    }

    /// Pointer moved inside `code`. Only the tooltip position changes.
    pub fn pointer_move(&mut self, code: &str, pointer: Point, block: Size, viewport: Size) {
        if let Some(tip) = self.tooltip.as_mut().filter(|tip| tip.code == code) {
            tip.pointer = pointer;
            tip.position = tooltip::position(pointer, block, viewport);
        }
    }

    /// Recompute the tooltip position after its rendered size became known.
    pub fn reposition(&mut self, block: Size, viewport: Size) {
        if let Some(tip) = self.tooltip.as_mut() {
            tip.position = tooltip::position(tip.pointer, block, viewport);
        }
    }

    /// Pointer left `code`: drop its emphasis and its tooltip.
    pub fn pointer_leave(&mut self, code: &str) {
        if self.emphasis(code).is_some() {
            self.emphasis = None;
        }
        if self.tooltip.is_some_and(|tip| tip.code == code) {
            self.tooltip = None;
        }
    }

    /// `code` was clicked. The tooltip goes away and the stroke emphasis is
    /// cleared; the returned code is what the caller should toggle.
    pub fn click(&mut self, code: &str) -> Result<&'static str, MapError> {
        self.tooltip = None;
        if let Some(emphasis) = self.emphasis.as_mut() {
            emphasis.stroke = false;
        }
        registry::lookup(code)
            .map(|region| region.code)
            .ok_or_else(|| MapError::InvalidRegion(code.to_string()))
    }

    /// Drop everything, e.g. when the map unmounts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: Size = Size::new(450.0, 220.0);
    const VIEWPORT: Size = Size::new(1440.0, 900.0);

    fn hovering(code: &str) -> Interaction {
        let mut interaction = Interaction::default();
        interaction
            .pointer_enter(code, Point::new(200.0, 300.0), BLOCK, VIEWPORT)
            .unwrap();
        interaction
    }

    #[test]
    fn enter_emphasises_and_opens_tooltip() {
        let interaction = hovering("CA");
        assert_eq!(interaction.shape_state("CA"), ShapeState::Hovered);
        assert_eq!(
            interaction.emphasis("CA"),
            Some(Emphasis {
                code: "CA",
                stroke: true
            })
        );
        let tip = interaction.tooltip().expect("tooltip after enter");
        assert_eq!(tip.code, "CA");
        assert_eq!(tip.position, Point::new(215.0, 285.0));
    }

    #[test]
    fn entering_another_region_replaces_the_tooltip() {
        let mut interaction = hovering("NV");
        interaction
            .pointer_enter("UT", Point::new(260.0, 310.0), BLOCK, VIEWPORT)
            .unwrap();
        assert_eq!(interaction.tooltip().map(|tip| tip.code), Some("UT"));
        assert_eq!(interaction.shape_state("NV"), ShapeState::Idle);
        assert_eq!(interaction.shape_state("UT"), ShapeState::Hovered);
    }

    #[test]
    fn move_updates_position_only() {
        let mut interaction = hovering("TX");
        interaction.pointer_move("TX", Point::new(1300.0, 880.0), BLOCK, VIEWPORT);
        let tip = interaction.tooltip().unwrap();
        assert_eq!(tip.pointer, Point::new(1300.0, 880.0));
        assert_eq!(tip.position, Point::new(835.0, 645.0));
        assert_eq!(interaction.shape_state("TX"), ShapeState::Hovered);
    }

    #[test]
    fn move_over_other_region_is_ignored() {
        let mut interaction = hovering("TX");
        let before = interaction;
        interaction.pointer_move("OK", Point::new(10.0, 10.0), BLOCK, VIEWPORT);
        assert_eq!(interaction, before);
    }

    #[test]
    fn leave_returns_to_idle() {
        let mut interaction = hovering("WA");
        interaction.pointer_leave("WA");
        assert_eq!(interaction, Interaction::default());
    }

    #[test]
    fn stale_leave_does_not_close_newer_tooltip() {
        let mut interaction = hovering("OR");
        interaction
            .pointer_enter("ID", Point::new(220.0, 280.0), BLOCK, VIEWPORT)
            .unwrap();
        interaction.pointer_leave("OR");
        assert_eq!(interaction.tooltip().map(|tip| tip.code), Some("ID"));
    }

    #[test]
    fn click_closes_tooltip_and_clears_stroke() {
        let mut interaction = hovering("FL");
        assert_eq!(interaction.click("FL"), Ok("FL"));
        assert!(interaction.tooltip().is_none());
        assert_eq!(
            interaction.emphasis("FL"),
            Some(Emphasis {
                code: "FL",
                stroke: false
            })
        );

        // Still over the shape: moving does not resurrect the tooltip.
        interaction.pointer_move("FL", Point::new(210.0, 305.0), BLOCK, VIEWPORT);
        assert!(interaction.tooltip().is_none());
    }

    #[test]
    fn click_from_idle_still_reports_code() {
        let mut interaction = Interaction::default();
        assert_eq!(interaction.click("GA"), Ok("GA"));
        assert_eq!(interaction, Interaction::default());
    }

    #[test]
    fn unknown_shapes_are_rejected() {
        let mut interaction = hovering("NM");
        assert_eq!(
            interaction.pointer_enter("PR", Point::default(), BLOCK, VIEWPORT),
            Err(MapError::InvalidRegion("PR".into()))
        );
        assert_eq!(interaction.tooltip().map(|tip| tip.code), Some("NM"));
        assert_eq!(
            interaction.click("PR"),
            Err(MapError::InvalidRegion("PR".into()))
        );
        assert!(interaction.tooltip().is_none());
    }

    #[test]
    fn reposition_uses_measured_block() {
        let mut interaction = hovering("MT");
        interaction.reposition(Size::new(1300.0, 100.0), VIEWPORT);
        let tip = interaction.tooltip().unwrap();
        assert_eq!(tip.position, Point::new(-1115.0, 285.0));
    }
}
