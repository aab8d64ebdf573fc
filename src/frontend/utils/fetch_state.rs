use crate::{
    common::article::KeyedArticle,
    frontend::utils::errors::{FrontendError, FrontendResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    Ready,
}

/// Per-mount state of the article list. Starts as `Loading` and is resolved exactly once,
/// into `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Ready(Vec<KeyedArticle>),
    Failed(FrontendError),
}

impl FetchState {
    pub fn resolve(result: FrontendResult<Vec<KeyedArticle>>) -> Self {
        match result {
            Ok(articles) => FetchState::Ready(articles),
            Err(e) => FetchState::Failed(e),
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        match self {
            FetchState::Loading => LoadingPhase::Loading,
            FetchState::Ready(_) | FetchState::Failed(_) => LoadingPhase::Ready,
        }
    }

    pub fn articles(&self) -> &[KeyedArticle] {
        match self {
            FetchState::Ready(articles) => articles,
            FetchState::Loading | FetchState::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&FrontendError> {
        match self {
            FetchState::Failed(e) => Some(e),
            FetchState::Loading | FetchState::Ready(_) => None,
        }
    }
}

/// A resource which has not resolved yet is still loading.
impl From<Option<FrontendResult<Vec<KeyedArticle>>>> for FetchState {
    fn from(value: Option<FrontendResult<Vec<KeyedArticle>>>) -> Self {
        value.map(FetchState::resolve).unwrap_or_default()
    }
}
