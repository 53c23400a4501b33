//! Button with an inline spinner.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outlined,
}

impl ButtonVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outlined => "btn btn-outlined",
        }
    }
}

/// Shows a spinner while `loading` is set.
///
/// Only `disabled` blocks clicks; a loading button still forwards them.
#[component]
pub fn LoadingButton(
    label: String,
    loading: bool,
    #[props(default)] disabled: bool,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] wide: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let width = if wide { "btn-wide" } else { "btn-narrow" };
    let state = if loading { "btn-loading" } else { "" };

    rsx! {
        button {
            class: "{variant.css_class()} {width} {state}",
            disabled,
            "aria-busy": "{loading}",
            onclick: move |evt| onclick.call(evt),
            if loading {
                span { class: "btn-spinner" }
            } else {
                "{label}"
            }
        }
    }
}
