// Board document: title, sharing flag and an ordered list of widgets
use crate::domain::widget::Widget;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    pub title: String,
    /// Prevents edits through the web UI once set.
    pub read_only: bool,
    pub widgets: Vec<Widget>,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            read_only: false,
            widgets: Vec::new(),
        }
    }

    /// Append a widget; widgets render in the order they were added.
    pub fn add_widget(&mut self, widget: impl Into<Widget>) {
        self.widgets.push(widget.into());
    }

    pub fn with_widget(mut self, widget: impl Into<Widget>) -> Self {
        self.add_widget(widget);
        self
    }
}
