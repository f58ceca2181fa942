// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Help overlay on the page: shows the cards and keeps them next to
//! their targets.

use crate::dom::optional;
use ifc_lab_core::markup::ids;
use ifc_lab_core::{HelpCard, HelpOverlay, Rect, Size};
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, EventTarget, HtmlButtonElement, HtmlElement, Window};

const HIDDEN_CLASS: &str = "hidden";

pub struct HelpLayer {
    overlay: RefCell<HelpOverlay>,
    root: HtmlElement,
    button: Option<HtmlButtonElement>,
    window: Window,
    document: Document,
    margin: f64,
}

impl HelpLayer {
    pub fn new(
        cards: Vec<HelpCard>,
        root: HtmlElement,
        button: Option<HtmlButtonElement>,
        window: Window,
        document: Document,
        margin: f64,
    ) -> Self {
        Self {
            overlay: RefCell::new(HelpOverlay::new(cards)),
            root,
            button,
            window,
            document,
            margin,
        }
    }

    pub fn is_open(&self) -> bool {
        self.overlay.borrow().is_open()
    }

    /// Returns whether the overlay is open afterwards.
    pub fn toggle(&self) -> bool {
        let open = self.overlay.borrow_mut().toggle();
        self.show(open);
        open
    }

    pub fn close(&self) {
        if !self.is_open() {
            return;
        }
        self.overlay.borrow_mut().close();
        self.show(false);
    }

    fn show(&self, open: bool) {
        let _ = self.root.class_list().toggle_with_force(HIDDEN_CLASS, !open);
        if let Some(button) = &self.button {
            let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
        if open {
            self.reposition();
        }
    }

    /// Move every card next to its target. Cards whose target is not
    /// visible stay hidden.
    pub fn reposition(&self) {
        let overlay = self.overlay.borrow();
        if !overlay.is_open() {
            return;
        }

        let cards: Vec<Option<HtmlElement>> = (0..overlay.cards().len())
            .map(|index| optional(&self.document, &ids::help_card(index)))
            .collect();
        for card in cards.iter().flatten() {
            let _ = card.style().set_property("visibility", "hidden");
        }

        let positions = overlay.layout(self.viewport(), self.margin, |index, card| {
            let element = cards.get(index)?.as_ref()?;
            let target: Element = self.document.get_element_by_id(card.target)?;
            let size = Size {
                width: f64::from(element.offset_width()),
                height: f64::from(element.offset_height()),
            };
            Some((bounding_rect(&target), size))
        });

        for placed in positions {
            let Some(element) = cards.get(placed.index).and_then(Option::as_ref) else {
                continue;
            };
            let style = element.style();
            let _ = style.set_property("left", &format!("{}px", placed.position.x));
            let _ = style.set_property("top", &format!("{}px", placed.position.y));
            let _ = style.set_property("visibility", "visible");
        }
    }

    fn viewport(&self) -> Size {
        let extent = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Size {
            width: extent(self.window.inner_width()),
            height: extent(self.window.inner_height()),
        }
    }

    /// Whether `target` is the dimmed backdrop itself rather than a card.
    pub fn is_backdrop(&self, target: Option<EventTarget>) -> bool {
        target.is_some_and(|t| {
            AsRef::<JsValue>::as_ref(&t) == AsRef::<JsValue>::as_ref(&self.root)
        })
    }
}

fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}
