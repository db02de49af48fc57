//! Hook binding a paginated endpoint to view state.

use std::future::Future;

use admin_core::{Paged, PagedList};
use api::{AdminClient, ApiError};
use dioxus::prelude::*;

/// Rows and position of a paginated list view.
pub struct PagedView<T: 'static> {
    pub list: Signal<PagedList<T>>,
    page: Signal<u32>,
}

impl<T: 'static> Clone for PagedView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PagedView<T> {}

impl<T: 'static> PagedView<T> {
    /// Fetch `page` if it lies within the known range; ignore it otherwise.
    pub fn go_to(mut self, page: u32) {
        let accepted = self.list.peek().request(page);
        if let Some(page) = accepted {
            self.page.set(page);
        }
    }
}

/// Fetch page 1 on mount and again whenever [`PagedView::go_to`] accepts a
/// page. Failures become `fallback` unless the backend sent a message.
pub fn use_paged_list<T, F, Fut>(fallback: &'static str, fetch: F) -> PagedView<T>
where
    T: 'static,
    F: Fn(AdminClient, u32) -> Fut + 'static,
    Fut: Future<Output = Result<Paged<T>, ApiError>> + 'static,
{
    let client = use_context::<AdminClient>();
    let mut list = use_signal(PagedList::<T>::new);
    let page = use_signal(|| 1u32);

    let _ = use_resource(move || {
        let request = fetch(client.clone(), page());
        async move {
            list.write().begin();
            let result = request.await.map_err(|e| e.message_or(fallback));
            list.write().apply(result);
        }
    });

    PagedView { list, page }
}
