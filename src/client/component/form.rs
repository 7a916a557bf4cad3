use dioxus::prelude::*;

/// Labelled form control with an optional per-field error message.
#[component]
pub fn FormField(
    label: &'static str,
    required: Option<bool>,
    error: Option<String>,
    children: Element,
) -> Element {
    rsx!(
        fieldset {
            class: "fieldset w-full",
            legend {
                class: "fieldset-legend",
                "{label}"
                if required.unwrap_or_default() {
                    span { class: "text-error", " *" }
                }
            }
            {children}
            if let Some(error) = error {
                p { class: "text-error text-sm", "{error}" }
            }
        }
    )
}

#[component]
pub fn SubmitButton(is_submitting: bool, label: &'static str, submitting_label: &'static str) -> Element {
    rsx!(
        button {
            r#type: "submit",
            class: "btn btn-primary",
            disabled: is_submitting,
            if is_submitting {
                span { class: "loading loading-spinner loading-sm mr-2" }
                "{submitting_label}"
            } else {
                "{label}"
            }
        }
    )
}
