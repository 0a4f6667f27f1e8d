//! compass mocks - interactive pages for the compass-ui components
//!
//! Each mock page renders a component with toggleable props and keeps its
//! control state in the URL so a configuration can be shared or reloaded.

mod mocks;
mod pages;
mod ui;

use compass_ui::MODAL_CSS;
use dioxus::prelude::*;
use pages::{MockIndex, MockModal};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/modal?:state")]
    MockModal { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { {MODAL_CSS} }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
