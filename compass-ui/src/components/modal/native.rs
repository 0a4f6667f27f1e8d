//! Default toolkit built on the native HTML `<dialog>` element
//!
//! The dialog is opened with `showModal()` (see `crate::dom`), which gives
//! top-layer rendering, a focus trap, Escape-to-cancel and `::backdrop`.
//!
//! The native element handles its own visibility (display: none when closed).
//! Do NOT add display-related classes (flex, block, grid) to the `<dialog>`
//! itself, they override that. Layout lives on the inner fixed container.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use tracing::{debug, trace, warn};

use super::actions::ModalAction;
use super::toolkit::{
    ActionButtonProps, ActionRowProps, ContainerProps, ModalToolkit, SurfaceProps,
    TransitionProps,
};
use crate::components::{Button, ButtonVariant};
use crate::dom::{self, DialogDomError, DialogSync};
use crate::theme::{SlideDirection, SurfaceStyle};

/// Counter for generating dialog IDs when the caller gives none
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Element the dialog's `aria-describedby` points at
pub const DIALOG_DESCRIPTION_ID: &str = "alert-dialog-slide-description";

/// Stylesheet for the slide transition and backdrop. Include once per page.
pub const MODAL_CSS: &str = r#"
dialog.compass-modal { padding: 0; border: none; background: transparent; max-width: none; max-height: none; }
dialog.compass-modal::backdrop { background-color: rgba(0, 0, 0, 0.5); }
.compass-slide[data-state="open"] { animation-duration: 225ms; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
.compass-slide-up[data-state="open"] { animation-name: compass-slide-up; }
.compass-slide-down[data-state="open"] { animation-name: compass-slide-down; }
.compass-slide-left[data-state="open"] { animation-name: compass-slide-left; }
.compass-slide-right[data-state="open"] { animation-name: compass-slide-right; }
@keyframes compass-slide-up { from { transform: translateY(100vh); } to { transform: none; } }
@keyframes compass-slide-down { from { transform: translateY(-100vh); } to { transform: none; } }
@keyframes compass-slide-left { from { transform: translateX(100vw); } to { transform: none; } }
@keyframes compass-slide-right { from { transform: translateX(-100vw); } to { transform: none; } }
"#;

/// Toolkit rendering native `<dialog>` markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeToolkit;

impl ModalToolkit for NativeToolkit {
    fn container(&self, props: ContainerProps) -> Element {
        rsx! {
            NativeDialog {
                is_open: props.is_open,
                class: props.class,
                id: props.id,
                on_close: props.on_close,
                keep_mounted: props.keep_mounted,
                {props.children}
            }
        }
    }

    fn transition(&self, props: TransitionProps) -> Element {
        rsx! {
            SlideTransition { is_open: props.is_open, direction: props.direction, {props.children} }
        }
    }

    fn surface(&self, props: SurfaceProps) -> Element {
        rsx! {
            PaperSurface { style: props.style, {props.children} }
        }
    }

    fn action_row(&self, props: ActionRowProps) -> Element {
        rsx! {
            div { class: "flex items-center justify-end gap-2 p-2", {props.children} }
        }
    }

    fn action_button(&self, props: ActionButtonProps) -> Element {
        let on_click = props.on_click;
        let action = props.action;
        rsx! {
            Button {
                variant: ButtonVariant::Text,
                onclick: move |_| press_action(on_click, action),
                "{props.label}"
            }
        }
    }
}

/// How the user asked a native dialog to go away
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Escape,
    Backdrop,
}

/// Forward a dismissal to the caller. Visibility only changes if the caller flips `is_open`.
pub fn request_close(on_close: Option<EventHandler<()>>, reason: Dismissal) {
    debug!("Modal dismissed by {:?}", reason);
    if let Some(handler) = on_close {
        handler.call(());
    }
}

/// Forward an action-button click to the chained action handler
pub fn press_action(on_click: EventHandler<()>, action: ModalAction) {
    trace!("Modal button {:?} pressed", action);
    on_click.call(());
}

#[component]
fn NativeDialog(
    is_open: ReadSignal<bool>,
    class: String,
    id: String,
    on_close: Option<EventHandler<()>>,
    keep_mounted: bool,
    children: Element,
) -> Element {
    // showModal() needs an id to find the element; the generated one is only
    // used while the caller gives none.
    let generated_id = use_hook(|| {
        let n = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", n)
    });
    let dialog_id = if id.is_empty() { generated_id } else { id };

    use_effect(use_reactive(&dialog_id, move |dialog_id: String| {
        let want_open = is_open();
        match dom::sync_dialog(&dialog_id, want_open) {
            Ok(DialogSync::Unchanged) => {}
            Ok(change) => debug!("Modal {} {:?}", dialog_id, change),
            Err(DialogDomError::NoWindow) => {
                trace!("No window, skipping dialog sync for {}", dialog_id)
            }
            Err(e) => warn!("Failed to sync modal {}: {}", dialog_id, e),
        }
    }));

    let state = if is_open() { "open" } else { "closed" };
    // The caller's class is appended after our own
    let dialog_class = if class.is_empty() {
        "compass-modal".to_string()
    } else {
        format!("compass-modal {class}")
    };

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "{dialog_class}",
            role: "dialog",
            aria_modal: "true",
            aria_describedby: DIALOG_DESCRIPTION_ID,
            "data-state": state,
            // Escape fires 'cancel'; the caller owns visibility, so stop the native close
            oncancel: move |evt| {
                evt.prevent_default();
                request_close(on_close, Dismissal::Escape);
            },
            if is_open() || keep_mounted {
                // Fixed container for backdrop clicks and centering
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| request_close(on_close, Dismissal::Backdrop),
                    // Content clicks must not reach the backdrop
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}

#[component]
fn SlideTransition(
    is_open: ReadSignal<bool>,
    direction: SlideDirection,
    children: Element,
) -> Element {
    let state = if is_open() { "open" } else { "closed" };
    let direction = direction.as_str();

    rsx! {
        div {
            class: "compass-slide compass-slide-{direction}",
            "data-state": state,
            {children}
        }
    }
}

#[component]
fn PaperSurface(style: SurfaceStyle, children: Element) -> Element {
    let css = style.to_css();
    rsx! {
        div { class: "compass-modal-paper flex flex-col overflow-hidden", style: "{css}", {children} }
    }
}
