/// Whether the composer creates a new item or rewrites an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum EditSession {
    #[default]
    Idle,
    Editing(String),
}

impl EditSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditSession::Editing(id) => Some(id),
            EditSession::Idle => None,
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let s = EditSession::default();
        assert!(s.is_idle());
        assert!(s.editing_id().is_none());
    }

    #[test]
    fn test_editing_reports_id() {
        let s = EditSession::Editing("item-1".to_string());
        assert!(!s.is_idle());
        assert!(s.is_editing("item-1"));
        assert!(!s.is_editing("item-2"));
    }
}
