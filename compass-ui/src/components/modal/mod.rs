//! Caller-controlled modal dialog
//!
//! The caller owns visibility through `is_open`. When `on_confirm` or
//! `on_cancel` is given, an action row is rendered; each control calls its
//! callback and then `on_close`, always in that order. The body stays mounted
//! while closed unless `keep_mounted` is turned off.

mod actions;
mod native;
mod toolkit;

use dioxus::prelude::*;
use tracing::debug;

pub use actions::{run_then_close, ActionPlan, ModalAction};
pub use native::{
    press_action, request_close, Dismissal, NativeToolkit, DIALOG_DESCRIPTION_ID, MODAL_CSS,
};
pub use toolkit::{
    use_toolkit, ActionButtonProps, ActionRowProps, ContainerProps, ModalToolkit, SurfaceProps,
    Toolkit, ToolkitProvider, TransitionProps,
};

use crate::theme::{SlideDirection, SurfaceStyle};

/// Modal dialog sliding up into a styled surface, with an optional Cancel/Confirm row
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    /// Dialog body
    children: Element,
    /// Passed through verbatim to the dialog element's class
    #[props(default)]
    dialog_class_name: String,
    /// Passed through verbatim to the dialog element's id
    #[props(default)]
    dialog_id: String,
    /// Called after either action, and on backdrop click or Escape
    #[props(default)]
    on_close: Option<EventHandler<()>>,
    /// Adds a Confirm control; runs before `on_close`
    #[props(default)]
    on_confirm: Option<EventHandler<()>>,
    /// Adds a Cancel control; runs before `on_close`
    #[props(default)]
    on_cancel: Option<EventHandler<()>>,
    /// Label of the Confirm control
    #[props(default = ModalAction::Confirm.default_label().to_string())]
    confirm_label: String,
    /// Label of the Cancel control
    #[props(default = ModalAction::Cancel.default_label().to_string())]
    cancel_label: String,
    /// Keep the body mounted (and hidden) while closed, so its state survives reopening
    #[props(default = true)]
    keep_mounted: bool,
    /// Paper styling of the dialog surface
    #[props(default)]
    surface_style: SurfaceStyle,
    /// Edge the dialog slides in from
    #[props(default)]
    slide_direction: SlideDirection,
) -> Element {
    let toolkit = use_toolkit();
    let plan = ActionPlan::new(on_confirm.is_some(), on_cancel.is_some());

    let action_row = if plan.has_actions() {
        let buttons = plan.actions().filter_map(|action| {
            let (handler, label) = match action {
                ModalAction::Cancel => (on_cancel?, cancel_label.clone()),
                ModalAction::Confirm => (on_confirm?, confirm_label.clone()),
            };
            let on_click = EventHandler::new(move |_: ()| {
                debug!("Modal action {:?}", action);
                run_then_close(
                    || handler.call(()),
                    || {
                        if let Some(close) = on_close {
                            close.call(());
                        }
                    },
                );
            });
            Some(toolkit.action_button(ActionButtonProps {
                action,
                label,
                on_click,
            }))
        });
        let buttons: Vec<Element> = buttons.collect();
        toolkit.action_row(ActionRowProps {
            children: rsx! {
                for button in buttons {
                    {button}
                }
            },
        })
    } else {
        VNode::empty()
    };

    let surface = toolkit.surface(SurfaceProps {
        style: surface_style,
        children: rsx! {
            {children}
            {action_row}
        },
    });

    let transition = toolkit.transition(TransitionProps {
        is_open,
        direction: slide_direction,
        children: surface,
    });

    toolkit.container(ContainerProps {
        is_open,
        class: dialog_class_name,
        id: dialog_id,
        on_close,
        keep_mounted,
        children: transition,
    })
}
