use std::fmt;

/// Opaque identifier of a selectable item (a project id). Never validated here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Detail(ItemId),
}

impl ViewMode {
    pub fn is_list(&self) -> bool {
        matches!(self, ViewMode::List)
    }

    pub fn selected(&self) -> Option<&ItemId> {
        match self {
            ViewMode::List => None,
            ViewMode::Detail(id) => Some(id),
        }
    }
}

/// Two-state List / Detail machine. Every transition reports whether the
/// state actually changed so callers can skip side effects on no-ops.
#[derive(Debug, Default)]
pub struct ViewController {
    mode: ViewMode,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn select(&mut self, item: ItemId) -> bool {
        if self.mode.selected() == Some(&item) {
            return false;
        }
        self.mode = ViewMode::Detail(item);
        true
    }

    pub fn back(&mut self) -> bool {
        if self.mode.is_list() {
            return false;
        }
        self.mode = ViewMode::List;
        true
    }

    /// Leave Detail on behalf of a section navigation.
    pub fn leave(&mut self) -> bool {
        self.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_list() {
        let view = ViewController::new();
        assert_eq!(view.mode(), &ViewMode::List);
        assert!(view.mode().selected().is_none());
    }

    #[test]
    fn test_select_then_reselect_is_noop() {
        let mut view = ViewController::new();
        assert!(view.select("proj-1".into()));
        assert!(!view.select("proj-1".into()));
        assert_eq!(view.mode(), &ViewMode::Detail(ItemId::new("proj-1")));
    }

    #[test]
    fn test_select_other_item_while_in_detail() {
        let mut view = ViewController::new();
        view.select("a".into());
        assert!(view.select("b".into()));
        assert_eq!(view.mode().selected().map(ItemId::as_str), Some("b"));
    }

    #[test]
    fn test_back_in_list_is_noop() {
        let mut view = ViewController::new();
        assert!(!view.back());
        view.select("x".into());
        assert!(view.back());
        assert!(view.mode().is_list());
        assert!(!view.leave());
    }
}
