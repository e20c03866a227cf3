//! Load lifecycle of a client grid

/// Where a client stands in fetching its sheet
///
/// A grid starts out `Loading`, and the first fetch moves it to `Ready` or
/// `Failed`. Edits are only allowed while `Ready`; `Failed` is final for that
/// load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    /// Check if edits are allowed
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// Failure message, if the load failed
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state() {
        assert_eq!(LoadState::default(), LoadState::Loading);
        assert!(!LoadState::Loading.is_ready());
        assert!(LoadState::Ready.is_ready());

        let failed = LoadState::Failed("Failed to load sheet data".into());
        assert!(!failed.is_ready());
        assert_eq!(failed.error(), Some("Failed to load sheet data"));
    }
}
