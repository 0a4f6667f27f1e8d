//! Modal mock component

use super::url_state::{presets, ModalMockState};
use crate::ui::Checkbox;
use crate::Route;
use compass_ui::{
    Button, ButtonSize, ButtonVariant, Modal, SlideDirection, DIALOG_DESCRIPTION_ID,
};
use dioxus::prelude::*;
use tracing::info;

fn push_event(mut events: Signal<Vec<String>>, entry: &str) {
    info!("Modal mock: {}", entry);
    events.write().push(entry.to_string());
}

#[component]
pub fn ModalMock(initial_state: Option<String>) -> Element {
    let mut state = use_signal(|| ModalMockState::from_query(initial_state.as_deref()));
    let mut open = use_signal(|| state.peek().is_open);
    let mut events = use_signal(Vec::<String>::new);
    let mut is_mounted = use_signal(|| false);

    // Mirror the controls into the URL, skipping the initial render
    use_effect(move || {
        let mut snapshot = state();
        snapshot.is_open = open();
        let encoded = snapshot.encode();

        if !*is_mounted.peek() {
            is_mounted.set(true);
            return;
        }

        navigator().replace(Route::MockModal { state: encoded });
    });

    let current = state();
    let is_open: ReadSignal<bool> = open.into();
    let (surface_style, surface_error) = current.surface_style();

    let on_confirm = current
        .with_confirm
        .then(|| EventHandler::new(move |_: ()| push_event(events, "confirm")));
    let on_cancel = current
        .with_cancel
        .then(|| EventHandler::new(move |_: ()| push_event(events, "cancel")));
    let on_close = current.with_close.then(|| {
        EventHandler::new(move |_: ()| {
            push_event(events, "close");
            open.set(false);
        })
    });

    rsx! {
        div { class: "p-8 min-h-full flex gap-8",
            // Controls
            div { class: "w-72 space-y-3",
                h2 { class: "text-lg font-semibold", "Modal" }
                div { class: "flex flex-wrap gap-2",
                    for (name , preset) in presets() {
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Small,
                            onclick: move |_| {
                                open.set(preset.is_open);
                                state.set(preset.clone());
                            },
                            "{name}"
                        }
                    }
                }
                Checkbox {
                    checked: open(),
                    onchange: move |v| open.set(v),
                    label: "Open",
                }
                Checkbox {
                    checked: current.with_confirm,
                    onchange: move |v| state.write().with_confirm = v,
                    label: "onConfirm",
                }
                Checkbox {
                    checked: current.with_cancel,
                    onchange: move |v| state.write().with_cancel = v,
                    label: "onCancel",
                }
                Checkbox {
                    checked: current.with_close,
                    onchange: move |v| state.write().with_close = v,
                    label: "onClose",
                }
                Checkbox {
                    checked: current.keep_mounted,
                    onchange: move |v| state.write().keep_mounted = v,
                    label: "Keep mounted",
                }
                label { class: "block text-sm",
                    "Slide direction"
                    select {
                        class: "block w-full border rounded px-2 py-1",
                        onchange: move |e| {
                            let direction = match e.value().as_str() {
                                "down" => SlideDirection::Down,
                                "left" => SlideDirection::Left,
                                "right" => SlideDirection::Right,
                                _ => SlideDirection::Up,
                            };
                            state.write().slide_direction = direction;
                        },
                        for direction in [
                            SlideDirection::Up,
                            SlideDirection::Down,
                            SlideDirection::Left,
                            SlideDirection::Right,
                        ]
                        {
                            option {
                                value: direction.as_str(),
                                selected: direction == current.slide_direction,
                                "{direction.as_str()}"
                            }
                        }
                    }
                }
                label { class: "block text-sm",
                    "Surface style (JSON)"
                    textarea {
                        class: "block w-full border rounded px-2 py-1 font-mono text-xs",
                        rows: "4",
                        placeholder: r#"{{"min_width_px": 420}}"#,
                        value: "{current.surface_json}",
                        oninput: move |e| state.write().surface_json = e.value(),
                    }
                    if let Some(error) = &surface_error {
                        p { class: "text-red-600 text-xs", "{error}" }
                    }
                }
                label { class: "block text-sm",
                    "Dialog class"
                    input {
                        class: "block w-full border rounded px-2 py-1",
                        value: "{current.dialog_class}",
                        oninput: move |e| state.write().dialog_class = e.value(),
                    }
                }
                label { class: "block text-sm",
                    "Body"
                    input {
                        class: "block w-full border rounded px-2 py-1",
                        value: "{current.body}",
                        oninput: move |e| state.write().body = e.value(),
                    }
                }
            }

            // Stage and event log
            div { class: "flex-1 space-y-4",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        push_event(events, "open");
                        open.set(true);
                    },
                    "Open modal"
                }
                div {
                    div { class: "flex items-center gap-4",
                        h3 { class: "text-sm font-semibold", "Callbacks" }
                        Button {
                            variant: ButtonVariant::Text,
                            size: ButtonSize::Small,
                            onclick: move |_| events.write().clear(),
                            "Clear"
                        }
                    }
                    ol { class: "font-mono text-sm",
                        for (i , entry) in events.read().iter().enumerate() {
                            li { key: "{i}", "{entry}" }
                        }
                    }
                }
            }

            Modal {
                is_open,
                dialog_class_name: current.dialog_class.clone(),
                dialog_id: "mock-modal".to_string(),
                keep_mounted: current.keep_mounted,
                slide_direction: current.slide_direction,
                surface_style,
                on_confirm,
                on_cancel,
                on_close,
                div { id: DIALOG_DESCRIPTION_ID, class: "p-6", "{current.body}" }
            }
        }
    }
}
