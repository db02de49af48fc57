//! WYSIWYG field for job descriptions.

use dioxus::prelude::*;
use rich_editor::{DescriptionEditor, ToolbarCommand};

use crate::prompt;

#[cfg(target_arch = "wasm32")]
type Surface = rich_editor::dom::DomSurface;
#[cfg(not(target_arch = "wasm32"))]
type Surface = rich_editor::MemorySurface;

/// Props for RichTextEditor component.
#[derive(Props, Clone, PartialEq)]
pub struct RichTextEditorProps {
    /// Current description HTML.
    pub value: String,
    /// Receives sanitized HTML after each edit.
    pub on_change: EventHandler<String>,
}

/// Rich-text editor bound to a description field.
#[component]
pub fn RichTextEditor(props: RichTextEditorProps) -> Element {
    let on_change = props.on_change;
    let initial = props.value.clone();
    let editor = use_hook(move || {
        DescriptionEditor::<Surface>::new(initial, move |html| on_change.call(html))
    });

    {
        let editor = editor.clone();
        use_effect(use_reactive((&props.value,), move |(value,)| {
            editor.set_value(&value);
        }));
    }

    {
        let editor = editor.clone();
        use_drop(move || editor.unmount());
    }

    let on_mounted = {
        let editor = editor.clone();
        move |evt: MountedEvent| {
            #[cfg(target_arch = "wasm32")]
            let make_surface = || match evt.data().downcast::<web_sys::Element>() {
                Some(element) => Surface::new(element.clone()),
                None => Err(rich_editor::EditorError::SurfaceUnavailable),
            };
            #[cfg(not(target_arch = "wasm32"))]
            let make_surface = || {
                let _ = &evt;
                Ok(Surface::new())
            };
            editor.mount(make_surface);
        }
    };

    let on_input = {
        let editor = editor.clone();
        move |_: FormEvent| editor.input()
    };

    let on_link = {
        let editor = editor.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            if let Some(url) = prompt("Enter the link URL") {
                editor.exec(&ToolbarCommand::Link(url));
            }
        }
    };

    rsx! {
        div { class: "rich-editor",
            div { class: "rich-editor-toolbar",
                for command in ToolbarCommand::SIMPLE {
                    {
                        let editor = editor.clone();
                        let label = command.label();
                        rsx! {
                            button {
                                key: "{label}",
                                r#type: "button",
                                class: "toolbar-button",
                                onmousedown: move |evt| {
                                    evt.prevent_default();
                                    editor.exec(&command);
                                },
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "toolbar-button",
                    onmousedown: on_link,
                    "Link"
                }
            }
            div {
                class: "rich-editor-surface",
                onmounted: on_mounted,
                oninput: on_input,
            }
        }
    }
}
