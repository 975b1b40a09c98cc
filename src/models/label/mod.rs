//! Label palette for color-coding and filtering events.
//!
//! Events carry a label name chosen from a small fixed palette. The set of
//! labels shown in the sidebar is derived from the stored events (see
//! `services::label`), so only the palette itself lives here.

/// A palette entry: label name plus display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelClass {
    pub name: &'static str,
    pub color: &'static str,
}

/// Labels offered when creating or editing an event.
pub const LABEL_CLASSES: [LabelClass; 3] = [
    LabelClass {
        name: "Red Event",
        color: "hsl(0, 75%, 60%)",
    },
    LabelClass {
        name: "Blue Event",
        color: "hsl(200, 80%, 50%)",
    },
    LabelClass {
        name: "Green Event",
        color: "hsl(150, 80%, 30%)",
    },
];

/// Color used for label names outside the palette.
pub const FALLBACK_COLOR: &str = "hsl(0, 0%, 90%)";

/// Label preselected for new events.
pub fn default_label() -> &'static LabelClass {
    &LABEL_CLASSES[0]
}

pub fn find_label_class(name: &str) -> Option<&'static LabelClass> {
    LABEL_CLASSES.iter().find(|class| class.name == name)
}

/// Palette entry named `key`, or whose color is `key`.
///
/// Snapshots from the first web release stored the label's color string
/// rather than its name.
pub fn resolve_label_class(key: &str) -> Option<&'static LabelClass> {
    find_label_class(key).or_else(|| LABEL_CLASSES.iter().find(|class| class.color == key))
}

pub fn label_color(name: &str) -> &'static str {
    find_label_class(name)
        .map(|class| class.color)
        .unwrap_or(FALLBACK_COLOR)
}

/// A label currently present in the store, with its visibility toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub color: &'static str,
    /// Whether events with this label are shown. Not persisted.
    pub checked: bool,
}

impl Label {
    /// A newly seen label, visible by default.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let color = label_color(&name);
        Self {
            name,
            color,
            checked: true,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}
