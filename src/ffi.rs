//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API so presentation layers written in
//! other languages can render rich-text JSON without linking a JSON parser of
//! their own.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use crate::render::RenderOptions;
use crate::{parse_str, render, Error};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct StrapiRichTextResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The rendered HTML (null if failed). Must be freed with `strapi_richtext_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `strapi_richtext_free_result`.
    pub error: *mut c_char,
}

impl StrapiRichTextResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(data) => Self {
                success: true,
                data: data.into_raw(),
                error: ptr::null_mut(),
            },
            Err(e) => Self::error(format!("Rendered HTML is not a C string: {}", e)),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

/// Read a C string argument as UTF-8.
///
/// # Safety
///
/// `ptr` must be null or a valid null-terminated string.
unsafe fn read_arg<'a>(ptr: *const c_char, name: &str) -> crate::Result<&'a str> {
    if ptr.is_null() {
        return Err(Error::Render(format!("{} cannot be null", name)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| Error::Render(format!("Invalid UTF-8 {}", name.to_lowercase())))
}

/// Render a rich-text JSON string to HTML.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `strapi_richtext_free_result`.
#[no_mangle]
pub unsafe extern "C" fn strapi_richtext_render_json(json: *const c_char) -> StrapiRichTextResult {
    let json = match read_arg(json, "JSON") {
        Ok(s) => s,
        Err(e) => return StrapiRichTextResult::error(e.to_string()),
    };

    match parse_str(json) {
        Ok(doc) => StrapiRichTextResult::success(render::to_html(&doc, &RenderOptions::default())),
        Err(e) => StrapiRichTextResult::error(e.to_string()),
    }
}

/// Render a rich-text JSON file to HTML.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `strapi_richtext_free_result`.
#[no_mangle]
pub unsafe extern "C" fn strapi_richtext_render_file(path: *const c_char) -> StrapiRichTextResult {
    let path = match read_arg(path, "Path") {
        Ok(s) => s,
        Err(e) => return StrapiRichTextResult::error(e.to_string()),
    };

    match crate::to_html(Path::new(path)) {
        Ok(html) => StrapiRichTextResult::success(html),
        Err(e) => StrapiRichTextResult::error(e.to_string()),
    }
}

/// Free a result returned by any strapi-richtext function.
///
/// # Safety
///
/// The `result` must have been returned by a strapi-richtext function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn strapi_richtext_free_result(result: StrapiRichTextResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by strapi-richtext.
///
/// # Safety
///
/// The `ptr` must have been allocated by strapi-richtext.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn strapi_richtext_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the strapi-richtext library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn strapi_richtext_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
