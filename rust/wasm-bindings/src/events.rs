// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Page event listeners. They stay registered for the lifetime of the
//! page, so their closures are leaked on purpose.

use crate::app::App;
use crate::file::{browser_files, BrowserFile};
use ifc_lab_core::{FullscreenMode, ViewerEvent};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Event, EventTarget, KeyboardEvent};

const DRAGGING_CLASS: &str = "dragging";

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn dispatch(app: &Rc<App>, event: ViewerEvent<BrowserFile>) {
    let app = app.clone();
    spawn_local(async move {
        if let Some(outcome) = app.viewer.dispatch(event).await {
            tracing::debug!(?outcome, "selection handled");
        }
    });
}

pub fn wire(app: &Rc<App>) -> Result<(), JsValue> {
    wire_files(app)?;
    wire_actions(app)?;
    wire_fullscreen(app)?;
    wire_help(app)?;
    wire_escape(app)
}

fn wire_files(app: &Rc<App>) -> Result<(), JsValue> {
    let elements = &app.elements;

    {
        let app = app.clone();
        listen(&elements.file_input, "change", move |_| {
            let input = &app.elements.file_input;
            let files = browser_files(input.files());
            // Picking the same file again must fire `change` again
            input.set_value("");
            dispatch(&app, ViewerEvent::FilesSelected(files));
        })?;
    }

    let Some(zone) = &elements.drop_zone else {
        return Ok(());
    };

    {
        let zone_el = zone.clone();
        listen(zone, "dragover", move |event| {
            event.prevent_default();
            let _ = zone_el.class_list().add_1(DRAGGING_CLASS);
        })?;
    }
    {
        let zone_el = zone.clone();
        listen(zone, "dragleave", move |_| {
            let _ = zone_el.class_list().remove_1(DRAGGING_CLASS);
        })?;
    }
    {
        let app = app.clone();
        let zone_el = zone.clone();
        listen(zone, "drop", move |event| {
            event.prevent_default();
            let _ = zone_el.class_list().remove_1(DRAGGING_CLASS);
            let files = event
                .dyn_into::<DragEvent>()
                .ok()
                .and_then(|drag| drag.data_transfer())
                .map(|transfer| browser_files(transfer.files()))
                .unwrap_or_default();
            dispatch(&app, ViewerEvent::FilesSelected(files));
        })?;
    }
    Ok(())
}

fn wire_actions(app: &Rc<App>) -> Result<(), JsValue> {
    {
        let app_ref = app.clone();
        listen(&app.elements.download_button, "click", move |_| {
            dispatch(&app_ref, ViewerEvent::DownloadRequested);
        })?;
    }
    {
        let app_ref = app.clone();
        listen(&app.elements.reset_button, "click", move |_| {
            dispatch(&app_ref, ViewerEvent::ResetRequested);
        })?;
    }
    Ok(())
}

fn wire_fullscreen(app: &Rc<App>) -> Result<(), JsValue> {
    if app.fullscreen.is_none() {
        return Ok(());
    }

    if let Some(button) = &app.elements.fullscreen_button {
        let app_ref = app.clone();
        listen(button, "click", move |_| {
            let app = app_ref.clone();
            spawn_local(async move {
                app.toggle_fullscreen().await;
            });
        })?;
    }
    if let Some(button) = &app.elements.fullscreen_close_button {
        let app_ref = app.clone();
        listen(button, "click", move |_| {
            let app = app_ref.clone();
            spawn_local(async move {
                if let Some(controller) = &app.fullscreen {
                    controller.exit().await;
                }
            });
        })?;
    }

    let app_ref = app.clone();
    listen(&app.document, "fullscreenchange", move |_| {
        if let Some(controller) = &app_ref.fullscreen {
            controller.on_native_change(controller.host().native_active());
        }
    })
}

fn wire_escape(app: &Rc<App>) -> Result<(), JsValue> {
    // Escape leaves the CSS fallback; the native mode handles it itself
    let app_ref = app.clone();
    listen(&app.document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if !is_escape {
            return;
        }
        if let Some(help) = &app_ref.help {
            help.close();
        }
        let app = app_ref.clone();
        spawn_local(async move {
            if let Some(controller) = &app.fullscreen {
                if controller.mode() == Some(FullscreenMode::Fallback) {
                    controller.exit().await;
                }
            }
        });
    })
}

fn wire_help(app: &Rc<App>) -> Result<(), JsValue> {
    if app.help.is_none() {
        return Ok(());
    }

    if let Some(button) = &app.elements.help_button {
        let app_ref = app.clone();
        listen(button, "click", move |_| {
            app_ref.toggle_help();
        })?;
    }
    if let Some(button) = &app.elements.help_close_button {
        let app_ref = app.clone();
        listen(button, "click", move |_| {
            if let Some(help) = &app_ref.help {
                help.close();
            }
        })?;
    }
    if let Some(overlay) = &app.elements.help_overlay {
        let app_ref = app.clone();
        listen(overlay, "click", move |event| {
            if let Some(help) = &app_ref.help {
                if help.is_backdrop(event.target()) {
                    help.close();
                }
            }
        })?;
    }

    for event in ["resize", "scroll"] {
        let app_ref = app.clone();
        listen(&app.window, event, move |_| {
            if let Some(help) = &app_ref.help {
                help.reposition();
            }
        })?;
    }
    Ok(())
}
