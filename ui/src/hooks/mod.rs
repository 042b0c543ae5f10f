pub mod use_communities;
pub mod use_fetch;

pub use use_communities::use_communities;
pub use use_fetch::{FetchHookReturn, use_fetch};

/// Whether data has been fetched at least once.
///
/// Distinguishes "not fetched yet" from "fetched and empty", so views can
/// show an empty-state instead of a loading state.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FetchState;

    #[test]
    fn fetched_empty_is_distinct_from_not_fetched() {
        let not_fetched = FetchState::<Vec<u8>>::NotFetched;
        assert!(!not_fetched.is_fetched());
        assert!(not_fetched.as_ref().is_none());

        let fetched_empty = FetchState::Fetched(Vec::<u8>::new());
        assert!(fetched_empty.is_fetched());
        assert_eq!(fetched_empty.as_ref(), Some(&vec![]));
    }
}
