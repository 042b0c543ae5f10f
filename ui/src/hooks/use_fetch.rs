use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    /// True while a fetch or refetch is in flight.
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

/// Generic fetch hook composer.
///
/// Issues exactly one fetch when the component mounts (and again if the
/// deps change), and provides refetch capability. Re-entry is guarded by
/// the hook's own loading state rather than a free-floating flag. The
/// fetch function captures its dependencies from the closure; the deps
/// parameter is used only for dependency tracking in use_callback and
/// use_effect_with.
///
/// If the component unmounts while a fetch is pending, the completion
/// lands on dropped state handles and is discarded.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_communities() -> FetchHookReturn<Vec<responses::Community>> {
///     use_fetch((), || async move {
///         let api_client = get_api_client();
///         api_client
///             .get_communities()
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_fn().await {
                    Ok(result) => {
                        data.set(FetchState::Fetched(result));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        let is_loading_clone = is_loading.clone();

        use_effect_with(deps, move |_| {
            if !*is_loading_clone {
                refetch.emit(());
            }
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
