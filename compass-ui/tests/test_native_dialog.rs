mod support;
use crate::support::{mount, use_open};
use compass_ui::{
    press_action, request_close, ActionButtonProps, ActionRowProps, ContainerProps, Dismissal,
    Modal, ModalAction, ModalToolkit, NativeToolkit, SurfaceProps, Toolkit, ToolkitProvider,
    TransitionProps,
};
use dioxus::prelude::*;
use std::cell::RefCell;

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    static CLICKS: RefCell<Vec<(ModalAction, EventHandler<()>)>> = const { RefCell::new(Vec::new()) };
    static CLOSE: RefCell<Option<EventHandler<()>>> = const { RefCell::new(None) };
}

fn record(call: &'static str) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

fn take_calls() -> Vec<&'static str> {
    CALLS.with(|calls| calls.borrow_mut().drain(..).collect())
}

/// Modal whose `on_close` is kept so dismissals can be driven by hand
fn dismissal_app() -> Element {
    let is_open = use_open(true);
    let on_close = use_hook(|| EventHandler::new(|_: ()| record("close")));
    CLOSE.with(|close| *close.borrow_mut() = Some(on_close));
    rsx! {
        Modal { is_open, on_close, "Hello" }
    }
}

fn take_close() -> EventHandler<()> {
    CLOSE
        .with(|close| close.borrow_mut().take())
        .expect("app stored its close handler")
}

#[test]
fn test_escape_requests_close() {
    let dom = mount(dismissal_app);
    let on_close = take_close();

    dom.in_runtime(|| request_close(Some(on_close), Dismissal::Escape));
    assert_eq!(take_calls(), vec!["close"]);
}

#[test]
fn test_backdrop_click_requests_close() {
    let dom = mount(dismissal_app);
    let on_close = take_close();

    dom.in_runtime(|| request_close(Some(on_close), Dismissal::Backdrop));
    assert_eq!(take_calls(), vec!["close"]);

    // Still open: only the caller flips visibility
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"data-state="open""#));
}

#[test]
fn test_dismissal_without_close_callback_is_ignored() {
    let dom = mount(dismissal_app);
    dom.in_runtime(|| {
        request_close(None, Dismissal::Escape);
        request_close(None, Dismissal::Backdrop);
    });
    assert!(take_calls().is_empty());
}

/// Renders through `NativeToolkit`, keeping each action's click handler
struct SpyingToolkit;

impl ModalToolkit for SpyingToolkit {
    fn container(&self, props: ContainerProps) -> Element {
        NativeToolkit.container(props)
    }

    fn transition(&self, props: TransitionProps) -> Element {
        NativeToolkit.transition(props)
    }

    fn surface(&self, props: SurfaceProps) -> Element {
        NativeToolkit.surface(props)
    }

    fn action_row(&self, props: ActionRowProps) -> Element {
        NativeToolkit.action_row(props)
    }

    fn action_button(&self, props: ActionButtonProps) -> Element {
        CLICKS.with(|clicks| clicks.borrow_mut().push((props.action, props.on_click)));
        NativeToolkit.action_button(props)
    }
}

#[test]
fn test_native_action_buttons_chain_to_close() {
    fn app() -> Element {
        let is_open = use_open(true);
        rsx! {
            ToolkitProvider { toolkit: Toolkit::new(SpyingToolkit),
                Modal {
                    is_open,
                    on_confirm: |_| record("confirm"),
                    on_cancel: |_| record("cancel"),
                    on_close: |_| record("close"),
                    "Hello"
                }
            }
        }
    }

    let dom = mount(app);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("<dialog"));
    assert_eq!(html.matches(r#"type="button""#).count(), 2);

    let clicks: Vec<_> = CLICKS.with(|clicks| clicks.borrow_mut().drain(..).collect());
    let actions: Vec<_> = clicks.iter().map(|(action, _)| *action).collect();
    assert_eq!(actions, vec![ModalAction::Cancel, ModalAction::Confirm]);

    for (action, on_click) in clicks {
        dom.in_runtime(|| press_action(on_click, action));
    }
    assert_eq!(take_calls(), vec!["cancel", "close", "confirm", "close"]);
}
