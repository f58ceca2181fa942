// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::EngineHandle;
use crate::utils::library_error;
use ifc_lab_core::{FullscreenHost, Result};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement};

/// Fullscreen through the Fullscreen API on the viewer container
pub struct DomFullscreenHost {
    document: Document,
    container: HtmlElement,
    engine: EngineHandle,
}

impl DomFullscreenHost {
    pub fn new(document: Document, container: HtmlElement, engine: EngineHandle) -> Self {
        Self {
            document,
            container,
            engine,
        }
    }

    pub fn native_active(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }
}

// web-sys drops the promise these methods return; call them through
// Reflect so a rejection reaches us.
async fn call_promise_method(target: &JsValue, name: &str) -> std::result::Result<(), JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let returned = method.call0(target)?;
    if let Ok(promise) = returned.dyn_into::<Promise>() {
        JsFuture::from(promise).await?;
    }
    Ok(())
}

impl FullscreenHost for DomFullscreenHost {
    fn native_available(&self) -> bool {
        self.document.fullscreen_enabled()
            && Reflect::get(&self.container, &JsValue::from_str("requestFullscreen"))
                .map(|method| method.is_function())
                .unwrap_or(false)
    }

    async fn request_native(&self) -> Result<()> {
        call_promise_method(&self.container, "requestFullscreen")
            .await
            .map_err(library_error)
    }

    async fn exit_native(&self) -> Result<()> {
        if !self.native_active() {
            return Ok(());
        }
        call_promise_method(&self.document, "exitFullscreen")
            .await
            .map_err(library_error)
    }

    fn set_class(&self, class: &str, on: bool) {
        let _ = self.container.class_list().toggle_with_force(class, on);
    }

    fn resize_renderer(&self) {
        self.engine.resize();
    }
}
