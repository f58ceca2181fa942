// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Help overlay: annotation cards pointing at parts of the page.
//!
//! Card positions are computed from the target element's bounding box in
//! viewport coordinates and kept inside the viewport with a fixed margin.
//! The page recomputes them on open, resize and scroll.

use crate::markup::ids;
use crate::messages::Messages;

/// Space between a card and its target, in CSS pixels
pub const CARD_GAP: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// Hidden elements report an empty box. A box collapsed along
    /// either axis counts as empty.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Preferred side of the target a card sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
    Left,
    Right,
}

impl Placement {
    pub fn opposite(self) -> Self {
        match self {
            Placement::Above => Placement::Below,
            Placement::Below => Placement::Above,
            Placement::Left => Placement::Right,
            Placement::Right => Placement::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Above => "above",
            Placement::Below => "below",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

/// Top-left corner for a card of size `card` next to `target`.
///
/// The card goes on the preferred side, or the opposite side when only
/// that one fits, and is then clamped into the viewport minus `margin`.
/// A card larger than the viewport is pinned to the margin.
pub fn place_card(
    target: &Rect,
    card: Size,
    viewport: Size,
    placement: Placement,
    margin: f64,
) -> Point {
    let preferred = anchor(target, card, placement);
    let chosen = if fits(preferred, card, viewport, placement, margin) {
        preferred
    } else {
        let flipped = anchor(target, card, placement.opposite());
        if fits(flipped, card, viewport, placement.opposite(), margin) {
            flipped
        } else {
            preferred
        }
    };

    Point {
        x: clamp_axis(chosen.x, card.width, viewport.width, margin),
        y: clamp_axis(chosen.y, card.height, viewport.height, margin),
    }
}

fn anchor(target: &Rect, card: Size, placement: Placement) -> Point {
    let center = target.center();
    match placement {
        Placement::Below => Point {
            x: center.x - card.width / 2.0,
            y: target.bottom() + CARD_GAP,
        },
        Placement::Above => Point {
            x: center.x - card.width / 2.0,
            y: target.top - CARD_GAP - card.height,
        },
        Placement::Right => Point {
            x: target.right() + CARD_GAP,
            y: center.y - card.height / 2.0,
        },
        Placement::Left => Point {
            x: target.left - CARD_GAP - card.width,
            y: center.y - card.height / 2.0,
        },
    }
}

// Only the axis the card is pushed along decides whether a side fits.
fn fits(at: Point, card: Size, viewport: Size, placement: Placement, margin: f64) -> bool {
    match placement {
        Placement::Above => at.y >= margin,
        Placement::Below => at.y + card.height <= viewport.height - margin,
        Placement::Left => at.x >= margin,
        Placement::Right => at.x + card.width <= viewport.width - margin,
    }
}

fn clamp_axis(position: f64, length: f64, extent: f64, margin: f64) -> f64 {
    let max = extent - length - margin;
    if max < margin {
        margin
    } else {
        position.clamp(margin, max)
    }
}

/// An annotation card
#[derive(Debug, Clone, PartialEq)]
pub struct HelpCard {
    /// Id of the element the card points at
    pub target: &'static str,
    pub placement: Placement,
    pub title: &'static str,
    pub body: &'static str,
}

pub fn default_cards(messages: &Messages) -> Vec<HelpCard> {
    vec![
        HelpCard {
            target: ids::DROP_ZONE,
            placement: Placement::Below,
            title: messages.help_files_title,
            body: messages.help_files_body,
        },
        HelpCard {
            target: ids::VIEWER,
            placement: Placement::Above,
            title: messages.help_viewer_title,
            body: messages.help_viewer_body,
        },
        HelpCard {
            target: ids::DOWNLOAD_BUTTON,
            placement: Placement::Below,
            title: messages.help_download_title,
            body: messages.help_download_body,
        },
        HelpCard {
            target: ids::RESET_BUTTON,
            placement: Placement::Left,
            title: messages.help_reset_title,
            body: messages.help_reset_body,
        },
    ]
}

/// Computed position of one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPosition {
    pub index: usize,
    pub position: Point,
}

#[derive(Debug, Clone)]
pub struct HelpOverlay {
    cards: Vec<HelpCard>,
    open: bool,
}

impl HelpOverlay {
    pub fn new(cards: Vec<HelpCard>) -> Self {
        Self { cards, open: false }
    }

    pub fn cards(&self) -> &[HelpCard] {
        &self.cards
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Positions for every card whose target is visible.
    ///
    /// `measure` gets each card with its index and returns the target's
    /// bounding box and the card's own size, or `None` when either is not
    /// on the page.
    pub fn layout<M>(&self, viewport: Size, margin: f64, mut measure: M) -> Vec<CardPosition>
    where
        M: FnMut(usize, &HelpCard) -> Option<(Rect, Size)>,
    {
        if !self.open {
            return Vec::new();
        }

        self.cards
            .iter()
            .enumerate()
            .filter_map(|(index, card)| {
                let (target, size) = measure(index, card)?;
                if target.is_empty() {
                    return None;
                }
                Some(CardPosition {
                    index,
                    position: place_card(&target, size, viewport, card.placement, margin),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::DUTCH;

    const VIEWPORT: Size = Size {
        width: 800.0,
        height: 600.0,
    };
    const CARD: Size = Size {
        width: 200.0,
        height: 80.0,
    };

    #[test]
    fn test_preferred_side() {
        let target = Rect::new(300.0, 100.0, 200.0, 40.0);
        let at = place_card(&target, CARD, VIEWPORT, Placement::Below, 12.0);
        assert_eq!(at, Point { x: 300.0, y: 150.0 });
    }

    #[test]
    fn test_flips_when_no_room() {
        let target = Rect::new(300.0, 540.0, 200.0, 40.0);
        let at = place_card(&target, CARD, VIEWPORT, Placement::Below, 12.0);
        assert_eq!(at.y, 540.0 - CARD_GAP - CARD.height);

        let target = Rect::new(20.0, 200.0, 60.0, 30.0);
        let at = place_card(&target, CARD, VIEWPORT, Placement::Left, 12.0);
        assert_eq!(at.x, 80.0 + CARD_GAP);
    }

    #[test]
    fn test_clamped_to_viewport() {
        // Centered under a target at the right edge would overflow horizontally
        let target = Rect::new(760.0, 10.0, 40.0, 20.0);
        let at = place_card(&target, CARD, VIEWPORT, Placement::Below, 12.0);
        assert_eq!(at.x, 800.0 - 200.0 - 12.0);
        assert_eq!(at.y, 40.0);

        // Neither side fits: keep the preferred side and clamp
        let tall = Size {
            width: 200.0,
            height: 590.0,
        };
        let target = Rect::new(300.0, 280.0, 100.0, 40.0);
        let at = place_card(&target, tall, VIEWPORT, Placement::Above, 12.0);
        assert_eq!(at.y, 12.0);
    }

    #[test]
    fn test_card_larger_than_viewport() {
        let huge = Size {
            width: 900.0,
            height: 700.0,
        };
        let target = Rect::new(100.0, 100.0, 50.0, 50.0);
        let at = place_card(&target, huge, VIEWPORT, Placement::Right, 12.0);
        assert_eq!(at, Point { x: 12.0, y: 12.0 });
    }

    #[test]
    fn test_collapsed_rect_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(10.0, 10.0, 0.0, 30.0).is_empty());
        assert!(Rect::new(10.0, 10.0, 30.0, 0.0).is_empty());
        assert!(!Rect::new(10.0, 10.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_layout_skips_hidden_targets() {
        let mut overlay = HelpOverlay::new(default_cards(&DUTCH));
        let measure = |_index: usize, card: &HelpCard| match card.target {
            ids::DROP_ZONE => Some((Rect::new(40.0, 200.0, 300.0, 120.0), CARD)),
            ids::VIEWER => Some((Rect::default(), CARD)),
            ids::DOWNLOAD_BUTTON => Some((Rect::new(600.0, 20.0, 0.0, 36.0), CARD)),
            _ => None,
        };

        assert!(overlay.layout(VIEWPORT, 12.0, measure).is_empty());

        overlay.open();
        let positions = overlay.layout(VIEWPORT, 12.0, measure);
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].index, 0);
        assert_eq!(positions[0].position, Point { x: 90.0, y: 330.0 });

        assert!(!overlay.toggle());
    }
}
