/// What the grid body shows for one render.
///
/// Derived fresh from the flags and row count every time; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Error,
    Empty,
    Populated,
}

impl RenderState {
    /// Priority is Loading > Error > Empty > Populated.
    pub const fn resolve(loading: bool, error: bool, row_count: usize) -> Self {
        if loading {
            Self::Loading
        } else if error {
            Self::Error
        } else if row_count == 0 {
            Self::Empty
        } else {
            Self::Populated
        }
    }

    pub const fn is_populated(self) -> bool {
        matches!(self, Self::Populated)
    }
}

/// Single full-width row shown instead of data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub state: RenderState,
    pub text: String,
    /// Always the number of columns, so the table keeps its shape.
    pub col_span: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_wins_over_everything() {
        assert_eq!(RenderState::resolve(true, true, 0), RenderState::Loading);
        assert_eq!(RenderState::resolve(true, false, 12), RenderState::Loading);
    }

    #[test]
    fn test_error_wins_over_empty() {
        assert_eq!(RenderState::resolve(false, true, 0), RenderState::Error);
        assert_eq!(RenderState::resolve(false, true, 3), RenderState::Error);
    }

    #[test]
    fn test_empty_and_populated() {
        assert_eq!(RenderState::resolve(false, false, 0), RenderState::Empty);
        assert_eq!(RenderState::resolve(false, false, 1), RenderState::Populated);
    }
}
