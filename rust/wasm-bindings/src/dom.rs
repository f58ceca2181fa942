// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element handles and the DOM side of the viewer's presentation.

use crate::utils::js_error_message;
use ifc_lab_core::markup::ids;
use ifc_lab_core::{Error, Overlay, Result, Stats, View};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlButtonElement, HtmlElement,
    HtmlInputElement, Url,
};

const HIDDEN_CLASS: &str = "hidden";
const FRAGMENT_MIME: &str = "application/octet-stream";

/// Handles to the rendered page. Optional members belong to features that
/// may be switched off.
pub struct Elements {
    pub file_input: HtmlInputElement,
    pub drop_zone: Option<HtmlElement>,
    pub status_text: HtmlElement,
    pub source_name: HtmlElement,
    pub source_type: HtmlElement,
    pub frag_status: HtmlElement,
    pub frag_hint: HtmlElement,
    pub download_button: HtmlButtonElement,
    pub reset_button: HtmlButtonElement,
    pub auto_convert: Option<HtmlInputElement>,
    pub viewer_wrap: HtmlElement,
    pub viewer: HtmlElement,
    pub overlay: HtmlElement,
    pub overlay_text: HtmlElement,
    pub fullscreen_button: Option<HtmlButtonElement>,
    pub fullscreen_close_button: Option<HtmlButtonElement>,
    pub help_button: Option<HtmlButtonElement>,
    pub help_overlay: Option<HtmlElement>,
    pub help_close_button: Option<HtmlButtonElement>,
}

impl Elements {
    pub fn query(document: &Document) -> std::result::Result<Self, JsValue> {
        Ok(Self {
            file_input: required(document, ids::FILE_INPUT)?,
            drop_zone: optional(document, ids::DROP_ZONE),
            status_text: required(document, ids::STATUS_TEXT)?,
            source_name: required(document, ids::SOURCE_NAME)?,
            source_type: required(document, ids::SOURCE_TYPE)?,
            frag_status: required(document, ids::FRAG_STATUS)?,
            frag_hint: required(document, ids::FRAG_HINT)?,
            download_button: required(document, ids::DOWNLOAD_BUTTON)?,
            reset_button: required(document, ids::RESET_BUTTON)?,
            auto_convert: optional(document, ids::AUTO_CONVERT),
            viewer_wrap: required(document, ids::VIEWER_WRAP)?,
            viewer: required(document, ids::VIEWER)?,
            overlay: required(document, ids::OVERLAY)?,
            overlay_text: required(document, ids::OVERLAY_TEXT)?,
            fullscreen_button: optional(document, ids::FULLSCREEN_BUTTON),
            fullscreen_close_button: optional(document, ids::FULLSCREEN_CLOSE_BUTTON),
            help_button: optional(document, ids::HELP_BUTTON),
            help_overlay: optional(document, ids::HELP_OVERLAY),
            help_close_button: optional(document, ids::HELP_CLOSE_BUTTON),
        })
    }
}

pub fn required<T: JsCast>(document: &Document, id: &str) -> std::result::Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{id} has an unexpected type")))
}

pub fn optional<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// `View` backed by the page elements.
pub struct DomView {
    elements: Rc<Elements>,
    document: Document,
    /// Used when the page has no auto-convert checkbox
    auto_convert_default: bool,
}

impl DomView {
    pub fn new(elements: Rc<Elements>, document: Document, auto_convert_default: bool) -> Self {
        Self {
            elements,
            document,
            auto_convert_default,
        }
    }
}

impl View for DomView {
    fn show_overlay(&self, overlay: &Overlay) {
        let elements = &self.elements;
        elements.overlay_text.set_text_content(Some(&overlay.text));
        let _ = elements
            .overlay
            .class_list()
            .toggle_with_force(HIDDEN_CLASS, !overlay.busy);
    }

    fn show_status(&self, text: &str) {
        self.elements.status_text.set_text_content(Some(text));
    }

    fn show_stats(&self, stats: &Stats) {
        let elements = &self.elements;
        elements.source_name.set_text_content(Some(&stats.source_name));
        elements.source_type.set_text_content(Some(&stats.source_type));
        elements.frag_status.set_text_content(Some(&stats.fragment_status));
        elements.frag_hint.set_text_content(Some(&stats.fragment_hint));
        elements.download_button.set_disabled(!stats.download_enabled);
    }

    fn auto_convert_enabled(&self) -> bool {
        self.elements
            .auto_convert
            .as_ref()
            .map_or(self.auto_convert_default, HtmlInputElement::checked)
    }

    fn save_file(&self, name: &str, bytes: &[u8]) -> Result<()> {
        save_bytes(&self.document, name, bytes).map_err(|e| Error::Save(js_error_message(&e)))
    }
}

/// Offer `bytes` as a download through a temporary object URL.
fn save_bytes(document: &Document, name: &str, bytes: &[u8]) -> std::result::Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(FRAGMENT_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let result = click_download_link(document, &url, name);
    Url::revoke_object_url(&url)?;
    result
}

fn click_download_link(document: &Document, url: &str, name: &str) -> std::result::Result<(), JsValue> {
    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(url);
    link.set_download(name);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;
    body.append_child(&link)?;
    link.click();
    link.remove();
    Ok(())
}
