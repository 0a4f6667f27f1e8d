//! Mock pages with URL state persistence

use crate::mocks::ModalMock;
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen p-8",
            h1 { class: "text-2xl font-bold mb-6", "compass mocks" }
            div { class: "space-y-2",
                LinkCard {
                    to: Route::MockModal { state: None },
                    title: "Modal",
                    description: "Slide-up dialog with optional Cancel/Confirm actions",
                }
            }
        }
    }
}

#[component]
pub fn MockModal(state: Option<String>) -> Element {
    rsx! {
        ModalMock { initial_state: state }
    }
}
