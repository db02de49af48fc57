//! Prev / numbered / Next page controls.

use admin_core::Pagination;
use dioxus::prelude::*;

/// Props for PaginationControls component.
#[derive(Props, Clone, PartialEq)]
pub struct PaginationControlsProps {
    pub pagination: Pagination,
    /// Called with the requested page number.
    pub on_page: EventHandler<u32>,
}

/// Page navigation for a paginated table.
#[component]
pub fn PaginationControls(props: PaginationControlsProps) -> Element {
    let pagination = props.pagination;
    let current = pagination.current();

    rsx! {
        div { class: "pagination",
            button {
                class: "btn btn-small",
                disabled: !pagination.has_prev(),
                onclick: move |_| props.on_page.call(pagination.prev()),
                "Prev"
            }
            for page in pagination.pages() {
                button {
                    key: "{page}",
                    class: if page == current { "btn btn-small btn-page active" } else { "btn btn-small btn-page" },
                    onclick: move |_| props.on_page.call(page),
                    "{page}"
                }
            }
            button {
                class: "btn btn-small",
                disabled: !pagination.has_next(),
                onclick: move |_| props.on_page.call(pagination.next()),
                "Next"
            }
        }
    }
}
