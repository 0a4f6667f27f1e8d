//! Button primitives used by the modal action row

use dioxus::prelude::*;

/// Unstyled button carrying the accessibility attributes and disabled gating.
/// `Button` layers the visual variants on top of it.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            id: id.as_deref(),
            disabled: is_disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Accent-colored label, no background. Dialog actions use this.
    #[default]
    Text,
    /// Filled accent background
    Primary,
    /// Outlined, muted
    Secondary,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Text => {
                "text-[var(--button-bg)] hover:bg-[rgba(var(--button-bg-rgb),0.08)] disabled:opacity-50"
            }
            ButtonVariant::Primary => {
                "bg-[var(--button-bg)] text-[var(--button-color)] hover:opacity-90 disabled:opacity-50"
            }
            ButtonVariant::Secondary => {
                "border border-[rgba(var(--button-bg-rgb),0.24)] text-[var(--button-bg)] disabled:opacity-50"
            }
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1 text-xs",
            ButtonSize::Medium => "px-4 py-2 text-sm",
        }
    }
}

/// Styled button
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 rounded font-semibold transition-colors";
    let variant_class = variant.class();
    let size_class = size.class();

    let computed_class = match &class {
        Some(extra) => format!("{base} {size_class} {variant_class} {extra}"),
        None => format!("{base} {size_class} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            id,
            disabled,
            loading,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
