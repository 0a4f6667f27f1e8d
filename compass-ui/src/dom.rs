//! Browser interop for the native `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap and the `::backdrop`
//! pseudo-element. It throws if the dialog is already open, so every call
//! checks the `open` attribute first and the sync is idempotent.
//!
//! Web and desktop renderers both provide a window through the `-x` crates.
//! Renderers without one (SSR) get `NoWindow`, which callers only trace.

use wasm_bindgen_x::JsCast;

/// Errors talking to the dialog element
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogDomError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dialog element #{0} not found")]
    NotFound(String),
    #[error("dialog.{method}() failed: {message}")]
    Js {
        method: &'static str,
        message: String,
    },
}

/// What a sync did to the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogSync {
    Opened,
    Closed,
    Unchanged,
}

/// Method to call on the dialog, given its current `open` attribute and the
/// requested state. `None` when it is already in that state.
pub fn dialog_method(currently_open: bool, want_open: bool) -> Option<&'static str> {
    match (currently_open, want_open) {
        (false, true) => Some("showModal"),
        (true, false) => Some("close"),
        _ => None,
    }
}

/// Bring the `<dialog id=...>` element in line with `want_open`
pub fn sync_dialog(id: &str, want_open: bool) -> Result<DialogSync, DialogDomError> {
    sync_dialog_in(web_sys_x::window(), id, want_open)
}

/// `sync_dialog` against a given window, `None` when the renderer has none
pub fn sync_dialog_in(
    window: Option<web_sys_x::Window>,
    id: &str,
    want_open: bool,
) -> Result<DialogSync, DialogDomError> {
    let window = window.ok_or(DialogDomError::NoWindow)?;
    let document = window.document().ok_or(DialogDomError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| DialogDomError::NotFound(id.to_string()))?;

    let Some(method) = dialog_method(element.has_attribute("open"), want_open) else {
        return Ok(DialogSync::Unchanged);
    };

    let js_error = |message: String| DialogDomError::Js { method, message };
    let func = js_sys_x::Reflect::get(&element, &method.into())
        .map_err(|e| js_error(format!("{e:?}")))?;
    let func = func
        .dyn_ref::<js_sys_x::Function>()
        .ok_or_else(|| js_error("not a function".to_string()))?;
    func.call0(&element).map_err(|e| js_error(format!("{e:?}")))?;

    Ok(if want_open {
        DialogSync::Opened
    } else {
        DialogSync::Closed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_method_only_on_change() {
        assert_eq!(dialog_method(false, true), Some("showModal"));
        assert_eq!(dialog_method(true, false), Some("close"));
        assert_eq!(dialog_method(true, true), None);
        assert_eq!(dialog_method(false, false), None);
    }

    #[test]
    fn test_sync_without_window_reports_no_window() {
        assert_eq!(
            sync_dialog_in(None, "modal-0", true),
            Err(DialogDomError::NoWindow)
        );
        assert_eq!(
            sync_dialog_in(None, "modal-0", false),
            Err(DialogDomError::NoWindow)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DialogDomError::NotFound("modal-3".into()).to_string(),
            "dialog element #modal-3 not found"
        );
        let err = DialogDomError::Js {
            method: "showModal",
            message: "InvalidStateError".into(),
        };
        assert_eq!(err.to_string(), "dialog.showModal() failed: InvalidStateError");
    }
}
