// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::{Engine, EngineHandle};
use crate::dom::{DomView, Elements};
use crate::events;
use crate::fullscreen::DomFullscreenHost;
use crate::help::HelpLayer;
use ifc_lab_core::{default_cards, markup, FullscreenController, Viewer, ViewerConfig};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub type PageViewer = Viewer<EngineHandle, EngineHandle, EngineHandle, DomView>;

/// Everything a mounted viewer owns. Lives as long as the page.
pub struct App {
    pub viewer: PageViewer,
    pub fullscreen: Option<FullscreenController<DomFullscreenHost>>,
    pub help: Option<HelpLayer>,
    pub elements: Rc<Elements>,
    pub window: Window,
    pub document: Document,
}

impl App {
    /// Render the page into the element matching `selector`, build the
    /// 3D world and wire the event listeners.
    pub async fn mount(selector: &str, config: ViewerConfig) -> Result<Rc<App>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let root: HtmlElement = document
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("No element matches {selector}")))?
            .dyn_into()?;

        let messages = config.locale.messages();
        let cards = default_cards(messages);
        root.set_inner_html(&markup::render(
            messages,
            &config.features,
            config.auto_convert,
            &cards,
        ));
        let elements = Rc::new(Elements::query(&document)?);

        let engine = Engine::bootstrap(&elements.viewer, &config).await?;

        let fullscreen = config.features.fullscreen.then(|| {
            FullscreenController::new(DomFullscreenHost::new(
                document.clone(),
                elements.viewer_wrap.clone(),
                engine.clone(),
            ))
        });

        let help = if config.features.help {
            elements.help_overlay.clone().map(|overlay| {
                HelpLayer::new(
                    cards,
                    overlay,
                    elements.help_button.clone(),
                    window.clone(),
                    document.clone(),
                    config.help_margin,
                )
            })
        } else {
            None
        };

        let view = DomView::new(elements.clone(), document.clone(), config.auto_convert);
        let viewer = Viewer::new(engine.clone(), engine.clone(), engine, view, config);
        viewer.start();

        let app = Rc::new(App {
            viewer,
            fullscreen,
            help,
            elements,
            window,
            document,
        });
        events::wire(&app)?;

        tracing::info!(selector, "viewer mounted");
        Ok(app)
    }

    pub async fn toggle_fullscreen(&self) -> bool {
        match &self.fullscreen {
            Some(controller) => controller.toggle().await,
            None => false,
        }
    }

    pub fn toggle_help(&self) -> bool {
        self.help.as_ref().is_some_and(HelpLayer::toggle)
    }
}
