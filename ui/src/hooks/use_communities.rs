use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// Hook for the current user's community list.
///
/// The list is replaced wholesale on every (re)fetch; nothing is cached
/// between mounts.
#[hook]
pub fn use_communities() -> FetchHookReturn<Vec<responses::Community>> {
    use_fetch((), || async move {
        let api_client = get_api_client();
        api_client
            .get_communities()
            .await
            .map_err(|e| e.to_string())
    })
}
