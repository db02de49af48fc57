//! Rich-text editor for job descriptions.
//!
//! [`DescriptionEditor`] binds one [`EditorSurface`] to a string field:
//! - surface edits are sanitized and reported through `on_change` only when
//!   they differ from the field's last known value
//! - field updates from elsewhere are sanitized and written into the surface
//!   with the change listener detached, so they never echo back
//!
//! The browser surface lives in [`dom`] and only exists on `wasm32`.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub mod dom;
mod sanitize;
mod surface;

pub use sanitize::sanitize;
pub use surface::{ChangeListener, EditorSurface, MemorySurface, ToolbarCommand};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editing surface is not available")]
    SurfaceUnavailable,
    #[error("failed to load content into the editor: {0}")]
    Inject(String),
    #[error("browser call failed: {0}")]
    Dom(String),
}

/// Last known field value plus the callback that updates it.
struct Field {
    last: RefCell<String>,
    on_change: Box<dyn Fn(String)>,
}

impl Field {
    /// Sanitize surface output and pass it on if the field differs.
    fn report(&self, html: &str) {
        let clean = sanitize(html);
        if *self.last.borrow() == clean {
            return;
        }
        self.last.replace(clean.clone());
        (self.on_change)(clean);
    }
}

/// Controller owning one editing surface and its change listener.
///
/// Clones share the same surface and field state.
pub struct DescriptionEditor<S> {
    surface: Rc<RefCell<Option<S>>>,
    field: Rc<Field>,
}

impl<S> Clone for DescriptionEditor<S> {
    fn clone(&self) -> Self {
        Self {
            surface: Rc::clone(&self.surface),
            field: Rc::clone(&self.field),
        }
    }
}

impl<S> PartialEq for DescriptionEditor<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.surface, &other.surface)
    }
}

impl<S: EditorSurface + 'static> DescriptionEditor<S> {
    /// Create an unmounted editor for a field currently holding `initial`.
    pub fn new(initial: impl Into<String>, on_change: impl Fn(String) + 'static) -> Self {
        Self {
            surface: Rc::new(RefCell::new(None)),
            field: Rc::new(Field {
                last: RefCell::new(initial.into()),
                on_change: Box::new(on_change),
            }),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.borrow().is_some()
    }

    /// The field's last known value.
    pub fn value(&self) -> String {
        self.field.last.borrow().clone()
    }

    /// Bind a surface built by `make_surface`, unless one is already bound.
    ///
    /// The current field value is seeded into the surface before the change
    /// listener is attached. Returns whether a new instance was created.
    pub fn mount(&self, make_surface: impl FnOnce() -> Result<S, EditorError>) -> bool {
        if self.is_mounted() {
            return false;
        }
        let mut surface = match make_surface() {
            Ok(surface) => surface,
            Err(e) => {
                tracing::error!("Failed to initialize description editor: {e}");
                return false;
            }
        };

        let seed = self.value();
        if let Err(e) = Self::seed(&mut surface, &seed) {
            tracing::error!("Failed to load description into editor: {e}");
        }
        if let Err(e) = surface.attach(self.listener()) {
            tracing::error!("Failed to attach editor listener: {e}");
        }
        *self.surface.borrow_mut() = Some(surface);
        true
    }

    fn seed(surface: &mut S, seed: &str) -> Result<(), EditorError> {
        surface.set_direction_ltr()?;
        if !seed.is_empty() {
            surface.insert_html(&sanitize(seed))?;
            surface.set_direction_ltr()?;
        }
        Ok(())
    }

    /// Release the surface and its listener.
    pub fn unmount(&self) {
        if let Some(mut surface) = self.surface.borrow_mut().take() {
            surface.detach();
        }
    }

    /// Push a field value that did not come from the surface.
    pub fn set_value(&self, value: &str) {
        if *self.field.last.borrow() == value {
            return;
        }
        self.field.last.replace(value.to_string());

        let mut guard = self.surface.borrow_mut();
        let Some(surface) = guard.as_mut() else {
            return;
        };
        let clean = sanitize(value);
        if sanitize(&surface.html()) == clean {
            return;
        }
        if let Err(e) = self.resync(surface, &clean) {
            tracing::error!("Failed to sync description into editor: {e}");
        }
    }

    /// Replace the surface content with already sanitized `value`.
    fn resync(&self, surface: &mut S, value: &str) -> Result<(), EditorError> {
        surface.detach();
        let written = surface
            .clear()
            .and_then(|()| surface.insert_html(value))
            .and_then(|()| surface.set_direction_ltr());
        surface.attach(self.listener())?;
        written
    }

    /// Forward an edit the surface saw on its own, such as a browser `input`
    /// event.
    pub fn input(&self) {
        // Busy while a toolbar command runs; `exec` reports that edit itself.
        if let Ok(guard) = self.surface.try_borrow()
            && let Some(surface) = guard.as_ref()
        {
            surface.input();
        }
    }

    /// Apply a toolbar command as if the user performed it.
    pub fn exec(&self, command: &ToolbarCommand) {
        let html = {
            let mut guard = self.surface.borrow_mut();
            let Some(surface) = guard.as_mut() else {
                tracing::warn!("Toolbar command {command:?} ignored, editor not mounted");
                return;
            };
            if let Err(e) = surface.exec(command) {
                tracing::warn!("Toolbar command {command:?} failed: {e}");
                return;
            }
            surface.html()
        };
        self.field.report(&html);
    }

    /// Run `f` against the bound surface, if any.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.surface.borrow_mut().as_mut().map(f)
    }

    fn listener(&self) -> ChangeListener {
        let field = Rc::clone(&self.field);
        Rc::new(move |html: &str| field.report(html))
    }
}
