use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use queryquill_core::AttachedFile;

use crate::local_store::js_error_text;

pub(crate) fn describe(file: &File) -> AttachedFile {
    AttachedFile::new(file.name(), file.type_())
}

pub(crate) async fn read_text(file: File) -> Result<String, String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|err| js_error_text(&err))?;
    value
        .as_string()
        .ok_or_else(|| "file text was not a string".to_string())
}

pub(crate) fn first_file(files: Option<web_sys::FileList>) -> Option<File> {
    files?.get(0)
}
