use dioxus::prelude::*;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Build a dom for `app` and run its first render
#[allow(dead_code)]
pub fn mount(app: fn() -> Element) -> VirtualDom {
    tracing_init();
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom
}

/// Apply pending signal writes and re-render every dirty scope
#[allow(dead_code)]
pub fn rerender(dom: &mut VirtualDom) {
    dom.mark_dirty(ScopeId::APP);
    let _ = dom.render_immediate_to_vec();
}

/// Render `app` to an HTML string
#[allow(dead_code)]
pub fn render(app: fn() -> Element) -> String {
    let dom = mount(app);
    dioxus_ssr::render(&dom)
}

/// Caller-owned visibility flag, as a host component would hold it
#[allow(dead_code)]
pub fn use_open(open: bool) -> ReadSignal<bool> {
    let signal = use_signal(|| open);
    signal.into()
}
