/// Lifecycle of one asynchronously loaded view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(ErrorInfo),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ViewState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ErrorInfo> {
        match self {
            ViewState::Failure(info) => Some(info),
            _ => None,
        }
    }
}

/// User-facing failure. Raw transport detail never lands here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: FailureKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn transport(message: &str) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            kind: FailureKind::NotFound,
            message: MODEL_NOT_FOUND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    NotFound,
}

pub const SEARCH_FAILED: &str = "Error searching models. Please try again.";
pub const DETAIL_FAILED: &str = "Error loading model details. Please try again.";
pub const MODEL_NOT_FOUND: &str = "Model not found";
