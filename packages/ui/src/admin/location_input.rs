//! Location field with city suggestions.

use admin_core::Autocomplete;
use dioxus::prelude::*;

use crate::sleep_ms;

/// Grace period letting a suggestion click land before the list closes.
const BLUR_CLOSE_MS: u32 = 100;

/// Props for LocationInput component.
#[derive(Props, Clone, PartialEq)]
pub struct LocationInputProps {
    pub value: String,
    pub on_change: EventHandler<String>,
}

/// Text input suggesting known cities as the admin types.
#[component]
pub fn LocationInput(props: LocationInputProps) -> Element {
    let mut autocomplete = use_signal(Autocomplete::new);
    let on_change = props.on_change;

    rsx! {
        div { class: "autocomplete",
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Start typing a city",
                value: "{props.value}",
                oninput: move |evt| {
                    let value = evt.value();
                    autocomplete.write().input(&value);
                    on_change.call(value);
                },
                onfocus: move |_| autocomplete.write().focus(),
                onblur: move |_| {
                    spawn(async move {
                        sleep_ms(BLUR_CLOSE_MS).await;
                        autocomplete.write().close();
                    });
                },
            }
            if !autocomplete.read().visible().is_empty() {
                ul { class: "autocomplete-list",
                    for location in autocomplete.read().visible().iter().copied() {
                        li {
                            key: "{location.city}-{location.state}",
                            class: "autocomplete-item",
                            onmousedown: move |evt| {
                                evt.prevent_default();
                                let label = autocomplete.write().select(location);
                                on_change.call(label);
                            },
                            "{location.label()}"
                        }
                    }
                }
            }
        }
    }
}
