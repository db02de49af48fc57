//! The editing surface abstraction and its in-memory implementation.

use std::rc::Rc;

use crate::EditorError;

/// Called with the surface's serialized content after every edit.
pub type ChangeListener = Rc<dyn Fn(&str)>;

/// Formatting actions offered by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarCommand {
    Heading1,
    Heading2,
    OrderedList,
    BulletList,
    Bold,
    Italic,
    Underline,
    Strike,
    Link(String),
    Indent,
    Outdent,
    ClearFormatting,
}

impl ToolbarCommand {
    /// Every command that needs no argument, in toolbar order.
    pub const SIMPLE: [ToolbarCommand; 11] = [
        ToolbarCommand::Heading1,
        ToolbarCommand::Heading2,
        ToolbarCommand::OrderedList,
        ToolbarCommand::BulletList,
        ToolbarCommand::Bold,
        ToolbarCommand::Italic,
        ToolbarCommand::Underline,
        ToolbarCommand::Strike,
        ToolbarCommand::Indent,
        ToolbarCommand::Outdent,
        ToolbarCommand::ClearFormatting,
    ];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            ToolbarCommand::Heading1 => "H1",
            ToolbarCommand::Heading2 => "H2",
            ToolbarCommand::OrderedList => "1.",
            ToolbarCommand::BulletList => "•",
            ToolbarCommand::Bold => "B",
            ToolbarCommand::Italic => "I",
            ToolbarCommand::Underline => "U",
            ToolbarCommand::Strike => "S",
            ToolbarCommand::Link(_) => "Link",
            ToolbarCommand::Indent => "→",
            ToolbarCommand::Outdent => "←",
            ToolbarCommand::ClearFormatting => "Clear",
        }
    }

    /// `(command, value)` pair for the browser's `execCommand`.
    pub fn exec_args(&self) -> (&'static str, &str) {
        match self {
            ToolbarCommand::Heading1 => ("formatBlock", "<h1>"),
            ToolbarCommand::Heading2 => ("formatBlock", "<h2>"),
            ToolbarCommand::OrderedList => ("insertOrderedList", ""),
            ToolbarCommand::BulletList => ("insertUnorderedList", ""),
            ToolbarCommand::Bold => ("bold", ""),
            ToolbarCommand::Italic => ("italic", ""),
            ToolbarCommand::Underline => ("underline", ""),
            ToolbarCommand::Strike => ("strikeThrough", ""),
            ToolbarCommand::Link(url) => ("createLink", url.as_str()),
            ToolbarCommand::Indent => ("indent", ""),
            ToolbarCommand::Outdent => ("outdent", ""),
            ToolbarCommand::ClearFormatting => ("removeFormat", ""),
        }
    }
}

/// A WYSIWYG editing area the controller can read, rewrite and listen to.
///
/// While a listener is attached, every content change must reach it, either
/// directly or through [`EditorSurface::input`].
pub trait EditorSurface {
    /// Serialized HTML content.
    fn html(&self) -> String;

    fn clear(&mut self) -> Result<(), EditorError>;

    /// Append `html` at the end of the content.
    fn insert_html(&mut self, html: &str) -> Result<(), EditorError>;

    /// Force left-to-right direction over the whole content.
    fn set_direction_ltr(&mut self) -> Result<(), EditorError>;

    fn exec(&mut self, command: &ToolbarCommand) -> Result<(), EditorError>;

    fn attach(&mut self, listener: ChangeListener) -> Result<(), EditorError>;

    fn detach(&mut self);

    /// Report an edit observed outside the controller, such as a browser
    /// `input` event. No-op while detached.
    fn input(&self);
}

/// Surface kept entirely in memory.
#[derive(Default)]
pub struct MemorySurface {
    content: String,
    ltr_len: Option<usize>,
    listener: Option<ChangeListener>,
    fail_inserts: bool,
}

impl std::fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySurface")
            .field("content", &self.content)
            .field("attached", &self.listener.is_some())
            .finish()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `insert_html` fail.
    pub fn with_failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Length of content covered by the last direction pass.
    pub fn ltr_len(&self) -> Option<usize> {
        self.ltr_len
    }

    /// Replace the content as a user would by typing or pasting.
    pub fn type_html(&mut self, html: &str) {
        self.content = html.to_string();
        self.changed();
    }

    fn changed(&self) {
        if let Some(listener) = &self.listener {
            listener(&self.content);
        }
    }

    fn wrap(&mut self, open: &str, close: &str) {
        self.content = format!("{open}{}{close}", self.content);
    }
}

impl EditorSurface for MemorySurface {
    fn html(&self) -> String {
        self.content.clone()
    }

    fn clear(&mut self) -> Result<(), EditorError> {
        self.content.clear();
        self.ltr_len = None;
        self.changed();
        Ok(())
    }

    fn insert_html(&mut self, html: &str) -> Result<(), EditorError> {
        if self.fail_inserts {
            return Err(EditorError::Inject("surface rejected content".to_string()));
        }
        self.content.push_str(html);
        self.changed();
        Ok(())
    }

    fn set_direction_ltr(&mut self) -> Result<(), EditorError> {
        self.ltr_len = Some(self.content.len());
        Ok(())
    }

    fn exec(&mut self, command: &ToolbarCommand) -> Result<(), EditorError> {
        match command {
            ToolbarCommand::Heading1 => self.wrap("<h1>", "</h1>"),
            ToolbarCommand::Heading2 => self.wrap("<h2>", "</h2>"),
            ToolbarCommand::OrderedList => self.wrap("<ol><li>", "</li></ol>"),
            ToolbarCommand::BulletList => self.wrap("<ul><li>", "</li></ul>"),
            ToolbarCommand::Bold => self.wrap("<b>", "</b>"),
            ToolbarCommand::Italic => self.wrap("<i>", "</i>"),
            ToolbarCommand::Underline => self.wrap("<u>", "</u>"),
            ToolbarCommand::Strike => self.wrap("<strike>", "</strike>"),
            ToolbarCommand::Link(url) => self.wrap(&format!(r#"<a href="{url}">"#), "</a>"),
            ToolbarCommand::Indent => self.wrap("<blockquote>", "</blockquote>"),
            ToolbarCommand::Outdent | ToolbarCommand::ClearFormatting => {}
        }
        self.changed();
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
        self.changed();
    }
}
