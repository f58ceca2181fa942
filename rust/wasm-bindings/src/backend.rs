// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The rendering world and the library traits on top of it.

use crate::obc::{
    Components, FragmentsManager, FragmentsModel, FragmentsModels, IfcLoaderComponent,
    OrthoPerspectiveCamera, SimpleRenderer, SimpleScene, Worlds, FRAGMENTS_MANAGER_CLASS,
    IFC_LOADER_CLASS, WORLDS_CLASS,
};
use crate::utils::{library_error, set_js_prop};
use gloo_timers::future::TimeoutFuture;
use ifc_lab_core::{
    CameraControls, CameraPose, FragmentBuffer, FragmentsRuntime, IfcLoader, IfcModel, ModelId,
    Result, ViewerConfig, WasmLocation,
};
use js_sys::Uint8Array;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Settings object for `IfcLoader.setup`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IfcLoaderSettings<'a> {
    auto_set_wasm: bool,
    wasm: &'a WasmLocation,
}

/// Scene, camera, renderer and the fragments runtime.
pub struct Engine {
    _components: Components,
    scene: SimpleScene,
    renderer: SimpleRenderer,
    camera: OrthoPerspectiveCamera,
    fragments: FragmentsManager,
    ifc_loader: IfcLoaderComponent,
    /// Scene objects of attached models, by model id
    attached: Rc<RefCell<FxHashMap<String, JsValue>>>,
    _on_rest: Closure<dyn FnMut()>,
    _on_item_set: Closure<dyn FnMut(JsValue)>,
}

/// Shared handle implementing the library traits.
#[derive(Clone)]
pub struct EngineHandle(Rc<Engine>);

impl Engine {
    /// Build the world inside `container` and start the fragments worker.
    pub async fn bootstrap(
        container: &web_sys::HtmlElement,
        config: &ViewerConfig,
    ) -> std::result::Result<EngineHandle, JsValue> {
        let components = Components::new();
        let worlds: Worlds = components.get(&WORLDS_CLASS.with(JsValue::clone)).unchecked_into();
        let world = worlds.create();

        let scene = SimpleScene::new(&components);
        scene.setup();
        world.set_scene(&scene);

        let renderer = SimpleRenderer::new(&components, container);
        world.set_renderer(&renderer);

        let camera = OrthoPerspectiveCamera::new(&components);
        world.set_camera(&camera);
        JsFuture::from(look_at(&camera, &config.home, false)).await?;

        components.init();

        let fragments: FragmentsManager = components
            .get(&FRAGMENTS_MANAGER_CLASS.with(JsValue::clone))
            .unchecked_into();
        let worker_url = config.worker_url();
        fragments.init(&worker_url);
        tracing::debug!(%worker_url, "fragments runtime initialized");

        let ifc_loader: IfcLoaderComponent = components
            .get(&IFC_LOADER_CLASS.with(JsValue::clone))
            .unchecked_into();

        // Refresh level of detail once the camera stops moving
        let models = fragments.core();
        let on_rest = Closure::<dyn FnMut()>::new(move || {
            refresh_models(&models);
        });
        camera
            .controls()
            .add_event_listener("rest", on_rest.as_ref().unchecked_ref());

        // Every model the runtime registers goes into the scene
        let attached = Rc::new(RefCell::new(FxHashMap::default()));
        let on_item_set = {
            let attached = attached.clone();
            let scene_root = scene.three();
            let camera_three = camera.three();
            let models = fragments.core();
            Closure::<dyn FnMut(JsValue)>::new(move |item: JsValue| {
                let Ok(value) = js_sys::Reflect::get(&item, &JsValue::from_str("value")) else {
                    return;
                };
                let model: FragmentsModel = value.unchecked_into();
                model.use_camera(&camera_three);
                let object = model.object();
                scene_root.add(&object);
                attached.borrow_mut().insert(model.model_id(), object);
                refresh_models(&models);
            })
        };
        fragments
            .list()
            .on_item_set()
            .add(on_item_set.as_ref().unchecked_ref());

        Ok(EngineHandle(Rc::new(Engine {
            _components: components,
            scene,
            renderer,
            camera,
            fragments,
            ifc_loader,
            attached,
            _on_rest: on_rest,
            _on_item_set: on_item_set,
        })))
    }
}

impl EngineHandle {
    pub fn resize(&self) {
        self.0.renderer.resize();
    }
}

/// Await a library call nobody waits on, logging a rejection.
/// Returns whether the call succeeded.
async fn watch<T, E: fmt::Display>(
    what: &'static str,
    call: impl Future<Output = std::result::Result<T, E>>,
) -> bool {
    match call.await {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(error = %err, "{what} failed");
            false
        }
    }
}

fn spawn_watched(what: &'static str, promise: js_sys::Promise) {
    let call = JsFuture::from(promise);
    spawn_local(async move {
        watch(what, async move { call.await.map_err(library_error) }).await;
    });
}

/// Refresh level of detail for every loaded model.
fn refresh_models(models: &FragmentsModels) {
    spawn_watched("fragments update", models.update(true));
}

fn look_at(camera: &OrthoPerspectiveCamera, pose: &CameraPose, animate: bool) -> js_sys::Promise {
    let [ex, ey, ez] = pose.eye;
    let [tx, ty, tz] = pose.target;
    camera
        .controls()
        .set_look_at(ex, ey, ez, tx, ty, tz, animate)
}

impl FragmentsRuntime for EngineHandle {
    async fn load(&self, buffer: &FragmentBuffer, id: &ModelId) -> Result<()> {
        // Let the busy overlay paint before the worker takes over
        TimeoutFuture::new(0).await;

        let options = js_sys::Object::new();
        set_js_prop(&options, "modelId", &JsValue::from_str(id.as_str()));
        set_js_prop(&options, "camera", &self.0.camera.three());

        let data = Uint8Array::from(buffer.as_bytes());
        JsFuture::from(self.0.fragments.core().load(&data.buffer(), &options))
            .await
            .map_err(library_error)?;
        Ok(())
    }

    fn resident(&self) -> Vec<ModelId> {
        self.0
            .fragments
            .list()
            .keys()
            .into_iter()
            .filter_map(|key| key.ok()?.as_string())
            .map(ModelId::new)
            .collect()
    }

    fn detach(&self, id: &ModelId) {
        let object = self.0.attached.borrow_mut().remove(id.as_str());
        if let Some(object) = object {
            self.0.scene.three().remove(&object);
        }
    }

    async fn dispose(&self, id: &ModelId) -> Result<()> {
        self.0.attached.borrow_mut().remove(id.as_str());
        JsFuture::from(self.0.fragments.core().dispose_model(id.as_str()))
            .await
            .map_err(library_error)?;
        Ok(())
    }
}

/// A model parsed by the IFC loader, still in its original form.
pub struct LoadedIfc {
    id: ModelId,
    model: FragmentsModel,
}

impl IfcLoader for EngineHandle {
    type Model = LoadedIfc;

    async fn configure(&self, wasm: &WasmLocation) -> Result<()> {
        let settings = serde_wasm_bindgen::to_value(&IfcLoaderSettings {
            auto_set_wasm: false,
            wasm,
        })
        .map_err(|e| ifc_lab_core::Error::Library(e.to_string()))?;

        JsFuture::from(self.0.ifc_loader.setup(&settings))
            .await
            .map_err(library_error)?;
        tracing::debug!(path = %wasm.path, "IFC loader configured");
        Ok(())
    }

    async fn load(&self, bytes: &[u8], id: &ModelId) -> Result<LoadedIfc> {
        TimeoutFuture::new(0).await;

        let data = Uint8Array::from(bytes);
        let model = JsFuture::from(self.0.ifc_loader.load(&data, true, id.as_str()))
            .await
            .map_err(library_error)?;
        Ok(LoadedIfc {
            id: id.clone(),
            model: model.unchecked_into(),
        })
    }
}

impl IfcModel for LoadedIfc {
    fn id(&self) -> &ModelId {
        &self.id
    }

    async fn fragment_buffer(&self) -> Result<FragmentBuffer> {
        let buffer = JsFuture::from(self.model.get_buffer())
            .await
            .map_err(library_error)?;
        Ok(FragmentBuffer::from(Uint8Array::new(&buffer).to_vec()))
    }
}

impl CameraControls for EngineHandle {
    fn look_at(&self, pose: &CameraPose, animate: bool) {
        spawn_watched("camera move", look_at(&self.0.camera, pose, animate));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ifc_loader_settings_shape() {
        let wasm = ViewerConfig::default().wasm_location();
        let settings = IfcLoaderSettings {
            auto_set_wasm: false,
            wasm: &wasm,
        };
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            serde_json::json!({
                "autoSetWasm": false,
                "wasm": { "path": "/wasm/", "absolute": true }
            })
        );
    }

    #[tokio::test]
    async fn test_watch_reports_rejection() {
        let rejected = watch("fragments update", async {
            Err::<(), _>(ifc_lab_core::Error::Library("worker terminated".into()))
        })
        .await;
        assert!(!rejected);

        let resolved = watch("camera move", async { Ok::<_, ifc_lab_core::Error>(()) }).await;
        assert!(resolved);
    }
}
