//! Boundary between the modal and the primitives it is drawn with
//!
//! `Modal` never renders markup of its own. It hands plain props structs to a
//! `ModalToolkit` and nests what comes back. Swapping the toolkit (through
//! `ToolkitProvider`) swaps every primitive without touching the modal.

use std::rc::Rc;

use dioxus::prelude::*;

use super::actions::ModalAction;
use super::native::NativeToolkit;
use crate::theme::{SlideDirection, SurfaceStyle};

/// Dialog container: modal presentation, backdrop, open/closed rendering
pub struct ContainerProps {
    pub is_open: ReadSignal<bool>,
    pub class: String,
    pub id: String,
    /// Backdrop click and Escape request this
    pub on_close: Option<EventHandler<()>>,
    /// Keep children mounted while closed
    pub keep_mounted: bool,
    pub children: Element,
}

/// Entrance transition wrapping the surface
pub struct TransitionProps {
    pub is_open: ReadSignal<bool>,
    pub direction: SlideDirection,
    pub children: Element,
}

pub struct SurfaceProps {
    pub style: SurfaceStyle,
    pub children: Element,
}

pub struct ActionRowProps {
    pub children: Element,
}

pub struct ActionButtonProps {
    pub action: ModalAction,
    pub label: String,
    /// Already chained: action callback, then close
    pub on_click: EventHandler<()>,
}

/// The primitives a modal is composed from
pub trait ModalToolkit {
    fn container(&self, props: ContainerProps) -> Element;
    fn transition(&self, props: TransitionProps) -> Element;
    fn surface(&self, props: SurfaceProps) -> Element;
    fn action_row(&self, props: ActionRowProps) -> Element;
    fn action_button(&self, props: ActionButtonProps) -> Element;
}

/// Shared handle to a toolkit. Two handles are equal when they point at the same toolkit.
#[derive(Clone)]
pub struct Toolkit(Rc<dyn ModalToolkit>);

impl Toolkit {
    pub fn new(toolkit: impl ModalToolkit + 'static) -> Self {
        Self(Rc::new(toolkit))
    }
}

impl std::ops::Deref for Toolkit {
    type Target = dyn ModalToolkit;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for Toolkit {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Toolkit::new(NativeToolkit)
    }
}

/// Toolkit from context, or the native one when no provider is mounted
pub fn use_toolkit() -> Toolkit {
    let from_context = try_use_context::<Toolkit>();
    use_hook(move || from_context.unwrap_or_default())
}

/// Makes `toolkit` the one every `Modal` below renders with
#[component]
pub fn ToolkitProvider(toolkit: Toolkit, children: Element) -> Element {
    use_context_provider(|| toolkit.clone());
    rsx! {
        {children}
    }
}
