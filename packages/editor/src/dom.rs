//! Browser `contenteditable` surface.
//!
//! Input events are not subscribed here: the hosting component forwards them
//! through [`DescriptionEditor::input`](crate::DescriptionEditor::input), so
//! callbacks run inside the UI runtime.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlElement};

use crate::{ChangeListener, EditorError, EditorSurface, ToolbarCommand};

fn js_error(err: wasm_bindgen::JsValue) -> EditorError {
    EditorError::Dom(format!("{err:?}"))
}

/// A `contenteditable` element driven through the DOM.
pub struct DomSurface {
    element: HtmlElement,
    listener: Option<ChangeListener>,
}

impl DomSurface {
    /// Turn `element` into an editing surface.
    pub fn new(element: Element) -> Result<Self, EditorError> {
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| EditorError::SurfaceUnavailable)?;
        element
            .set_attribute("contenteditable", "true")
            .map_err(js_error)?;
        Ok(Self {
            element,
            listener: None,
        })
    }

    fn document() -> Result<HtmlDocument, EditorError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or(EditorError::SurfaceUnavailable)
    }
}

impl EditorSurface for DomSurface {
    fn html(&self) -> String {
        self.element.inner_html()
    }

    fn clear(&mut self) -> Result<(), EditorError> {
        self.element.set_inner_html("");
        Ok(())
    }

    fn insert_html(&mut self, html: &str) -> Result<(), EditorError> {
        self.element
            .insert_adjacent_html("beforeend", html)
            .map_err(|e| EditorError::Inject(format!("{e:?}")))
    }

    fn set_direction_ltr(&mut self) -> Result<(), EditorError> {
        self.element.set_attribute("dir", "ltr").map_err(js_error)?;
        let children = self.element.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                child.set_attribute("dir", "ltr").map_err(js_error)?;
            }
        }
        Ok(())
    }

    fn exec(&mut self, command: &ToolbarCommand) -> Result<(), EditorError> {
        self.element.focus().map_err(js_error)?;
        let (name, value) = command.exec_args();
        Self::document()?
            .exec_command_with_show_ui_and_value(name, false, value)
            .map_err(js_error)?;
        Ok(())
    }

    fn attach(&mut self, listener: ChangeListener) -> Result<(), EditorError> {
        self.listener = Some(listener);
        Ok(())
    }

    fn detach(&mut self) {
        self.listener = None;
    }

    fn input(&self) {
        if let Some(listener) = &self.listener {
            listener(&self.element.inner_html());
        }
    }
}
