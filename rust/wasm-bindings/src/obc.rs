// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Imports from `@thatopen/components`.
//!
//! Only the members the viewer touches are declared. Three.js objects
//! (scene graph nodes, cameras) stay opaque `JsValue`s.

use js_sys::{Function, Map, Promise};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "@thatopen/components")]
extern "C" {
    // Component classes, passed to `Components::get`
    #[wasm_bindgen(thread_local_v2, js_name = Worlds)]
    pub static WORLDS_CLASS: JsValue;

    #[wasm_bindgen(thread_local_v2, js_name = FragmentsManager)]
    pub static FRAGMENTS_MANAGER_CLASS: JsValue;

    #[wasm_bindgen(thread_local_v2, js_name = IfcLoader)]
    pub static IFC_LOADER_CLASS: JsValue;

    pub type Components;

    #[wasm_bindgen(constructor)]
    pub fn new() -> Components;

    #[wasm_bindgen(method)]
    pub fn get(this: &Components, class: &JsValue) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn init(this: &Components);

    pub type Worlds;

    #[wasm_bindgen(method)]
    pub fn create(this: &Worlds) -> World;

    pub type World;

    #[wasm_bindgen(method, setter)]
    pub fn set_scene(this: &World, scene: &SimpleScene);

    #[wasm_bindgen(method, setter)]
    pub fn set_renderer(this: &World, renderer: &SimpleRenderer);

    #[wasm_bindgen(method, setter)]
    pub fn set_camera(this: &World, camera: &OrthoPerspectiveCamera);

    pub type SimpleScene;

    #[wasm_bindgen(constructor)]
    pub fn new(components: &Components) -> SimpleScene;

    #[wasm_bindgen(method)]
    pub fn setup(this: &SimpleScene);

    #[wasm_bindgen(method, getter)]
    pub fn three(this: &SimpleScene) -> ThreeGroup;

    pub type SimpleRenderer;

    #[wasm_bindgen(constructor)]
    pub fn new(components: &Components, container: &web_sys::HtmlElement) -> SimpleRenderer;

    #[wasm_bindgen(method)]
    pub fn resize(this: &SimpleRenderer);

    pub type OrthoPerspectiveCamera;

    #[wasm_bindgen(constructor)]
    pub fn new(components: &Components) -> OrthoPerspectiveCamera;

    #[wasm_bindgen(method, getter)]
    pub fn controls(this: &OrthoPerspectiveCamera) -> CameraControlsJs;

    #[wasm_bindgen(method, getter)]
    pub fn three(this: &OrthoPerspectiveCamera) -> JsValue;

    pub type CameraControlsJs;

    #[wasm_bindgen(method, js_name = setLookAt)]
    #[allow(clippy::too_many_arguments)]
    pub fn set_look_at(
        this: &CameraControlsJs,
        eye_x: f64,
        eye_y: f64,
        eye_z: f64,
        target_x: f64,
        target_y: f64,
        target_z: f64,
        transition: bool,
    ) -> Promise;

    #[wasm_bindgen(method, js_name = addEventListener)]
    pub fn add_event_listener(this: &CameraControlsJs, event: &str, listener: &Function);

    pub type FragmentsManager;

    #[wasm_bindgen(method)]
    pub fn init(this: &FragmentsManager, worker_url: &str);

    #[wasm_bindgen(method, getter)]
    pub fn core(this: &FragmentsManager) -> FragmentsModels;

    #[wasm_bindgen(method, getter)]
    pub fn list(this: &FragmentsManager) -> ModelList;

    /// `DataMap<string, FragmentsModel>`
    #[wasm_bindgen(extends = Map)]
    pub type ModelList;

    #[wasm_bindgen(method, getter, js_name = onItemSet)]
    pub fn on_item_set(this: &ModelList) -> ItemSetEvent;

    pub type ItemSetEvent;

    #[wasm_bindgen(method)]
    pub fn add(this: &ItemSetEvent, handler: &Function);

    pub type FragmentsModels;

    #[wasm_bindgen(method)]
    pub fn load(this: &FragmentsModels, buffer: &JsValue, options: &JsValue) -> Promise;

    #[wasm_bindgen(method, js_name = disposeModel)]
    pub fn dispose_model(this: &FragmentsModels, model_id: &str) -> Promise;

    #[wasm_bindgen(method)]
    pub fn update(this: &FragmentsModels, force: bool) -> Promise;

    pub type FragmentsModel;

    #[wasm_bindgen(method, getter, js_name = modelId)]
    pub fn model_id(this: &FragmentsModel) -> String;

    #[wasm_bindgen(method, getter)]
    pub fn object(this: &FragmentsModel) -> JsValue;

    #[wasm_bindgen(method, js_name = useCamera)]
    pub fn use_camera(this: &FragmentsModel, camera: &JsValue);

    #[wasm_bindgen(method, js_name = getBuffer)]
    pub fn get_buffer(this: &FragmentsModel) -> Promise;

    pub type IfcLoaderComponent;

    #[wasm_bindgen(method)]
    pub fn setup(this: &IfcLoaderComponent, settings: &JsValue) -> Promise;

    #[wasm_bindgen(method)]
    pub fn load(
        this: &IfcLoaderComponent,
        data: &js_sys::Uint8Array,
        coordinate: bool,
        name: &str,
    ) -> Promise;

    /// A three.js `Object3D` that holds the loaded models
    pub type ThreeGroup;

    #[wasm_bindgen(method)]
    pub fn add(this: &ThreeGroup, object: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &ThreeGroup, object: &JsValue);
}
