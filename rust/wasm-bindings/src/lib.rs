// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC Lab WebAssembly Bindings
//!
//! Browser shell for the IFC Lab viewer built with wasm-bindgen. The 3D
//! world and the IFC parser come from `@thatopen/components`; the load
//! orchestration lives in `ifc-lab-core`.
//!
//! ```javascript
//! import init, { mount } from "ifc-lab-wasm";
//!
//! await init();
//! const viewer = await mount("#app", { basePath: "/", locale: "nl" });
//! viewer.resetView();
//! ```

use ifc_lab_core::ViewerConfig;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod app;
mod backend;
mod dom;
mod events;
mod file;
mod fullscreen;
mod help;
mod obc;
mod utils;

use app::App;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
    utils::init_logging();
}

/// Get the version of IFC Lab
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Mount the viewer into the element matching `selector`.
///
/// `config` may be omitted, a JSON string, or a plain object; missing
/// fields take their defaults.
#[wasm_bindgen]
pub async fn mount(selector: String, config: JsValue) -> Result<ViewerHandle, JsError> {
    let config = parse_config(config)?;
    let app = App::mount(&selector, config)
        .await
        .map_err(|e| JsError::new(&utils::js_error_message(&e)))?;
    Ok(ViewerHandle { app })
}

fn parse_config(config: JsValue) -> Result<ViewerConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(ViewerConfig::default());
    }
    if let Some(json) = config.as_string() {
        return ViewerConfig::from_json(&json).map_err(|e| JsError::new(&e.to_string()));
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid viewer config: {e}")))
}

/// A mounted viewer
#[wasm_bindgen]
pub struct ViewerHandle {
    app: Rc<App>,
}

#[wasm_bindgen]
impl ViewerHandle {
    /// Save the current fragments. Returns false when there is nothing to save.
    pub fn download(&self) -> bool {
        self.app.viewer.download()
    }

    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&self) {
        self.app.viewer.reset_view();
    }

    /// Resolves to whether the viewer is fullscreen afterwards.
    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&self) -> js_sys::Promise {
        let app = self.app.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            Ok(JsValue::from_bool(app.toggle_fullscreen().await))
        })
    }

    #[wasm_bindgen(js_name = toggleHelp)]
    pub fn toggle_help(&self) -> bool {
        self.app.toggle_help()
    }

    /// Remove every model. Resolves to false while a load is running.
    pub fn clear(&self) -> js_sys::Promise {
        let app = self.app.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            app.viewer
                .clear()
                .await
                .map(JsValue::from_bool)
                .map_err(|e| JsError::new(&e.to_string()).into())
        })
    }

    #[wasm_bindgen(getter, js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.app.viewer.is_loading()
    }

    /// File name the next download is saved under.
    #[wasm_bindgen(getter, js_name = downloadName)]
    pub fn download_name(&self) -> String {
        self.app.viewer.session().download_name().to_string()
    }
}
