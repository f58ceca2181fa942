// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::utils::js_error_message;
use ifc_lab_core::{Error, Result, SourceFile};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

/// A file picked or dropped by the user
pub struct BrowserFile(File);

impl SourceFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read(&self) -> Result<Vec<u8>> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| Error::FileRead(js_error_message(&e)))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Files of a picker or drop selection, in order
pub fn browser_files(list: Option<FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(BrowserFile)
        .collect()
}
