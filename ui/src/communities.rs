use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{CommunityCard, Modal, NoCommunities};
use crate::get_api_client;
use crate::hooks::use_communities;

/// Shown when the mount-time list fetch fails.
const FETCH_ERROR_MESSAGE: &str =
    "There was an error fetching your Communities.";

/// Uncommitted form values held until submission.
#[derive(Default, Clone, PartialEq)]
pub struct CommunityDraft {
    pub name: String,
    pub description: String,
}

impl CommunityDraft {
    /// The create control stays disabled only while both fields are
    /// empty; a description-only submission is permitted.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.description.trim().is_empty()
    }

    fn into_request(self) -> requests::CreateCommunity {
        requests::CreateCommunity {
            name: self.name,
            description: self.description,
        }
    }
}

/// Typed input payload: the platform binding extracts the value before it
/// reaches view logic.
fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

#[function_component]
pub fn CommunitiesPage() -> Html {
    let communities_hook = use_communities();
    let show_create_modal = use_state(|| false);
    let draft = use_state(CommunityDraft::default);
    let create_error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let open_modal = {
        let show_create_modal = show_create_modal.clone();
        Callback::from(move |_: ()| show_create_modal.set(true))
    };

    // Closing discards nothing: the drafts survive until a successful
    // submit clears them.
    let close_modal = {
        let show_create_modal = show_create_modal.clone();
        let create_error = create_error.clone();
        Callback::from(move |_: ()| {
            show_create_modal.set(false);
            create_error.set(None);
        })
    };

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.name = input_value(e);
            draft.set(next);
        })
    };

    let on_description_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.description = input_value(e);
            draft.set(next);
        })
    };

    let on_create = {
        let draft = draft.clone();
        let create_error = create_error.clone();
        let is_submitting = is_submitting.clone();
        let show_create_modal = show_create_modal.clone();
        let refetch = communities_hook.refetch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let details = (*draft).clone().into_request();

            if let Some(message) =
                requests::validate_community_name(&details.name)
                    .error_message()
            {
                create_error.set(Some(message.to_string()));
                return;
            }
            let draft = draft.clone();
            let create_error = create_error.clone();
            let is_submitting = is_submitting.clone();
            let show_create_modal = show_create_modal.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                create_error.set(None);

                let api_client = get_api_client();
                match api_client.create_community(&details).await {
                    Ok(id) => {
                        tracing::debug!("created community {id}");
                        draft.set(CommunityDraft::default());
                        refetch.emit(());
                        show_create_modal.set(false);
                    }
                    Err(e) => {
                        tracing::error!("failed to create community: {e}");
                        create_error.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    // The modal surfaces the create error if there is one, otherwise the
    // fetch error (which is also shown in the list area).
    let modal_error = (*create_error).clone().or_else(|| {
        communities_hook
            .error
            .as_ref()
            .map(|_| FETCH_ERROR_MESSAGE.to_string())
    });

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"My Communities"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Communities you belong to"}
                </p>
            </div>

            if !communities_hook.data.is_fetched()
                && communities_hook.error.is_none()
            {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading communities..."}
                    </p>
                </div>
            } else if communities_hook.error.is_some() {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p data-testid="communities-error" class="text-sm text-red-700 dark:text-red-400">
                        {FETCH_ERROR_MESSAGE}
                    </p>
                </div>
            } else if let Some(communities) = communities_hook.data.as_ref() {
                if communities.is_empty() {
                    <NoCommunities on_add={open_modal.clone()} />
                } else {
                    <div>
                        if communities_hook.is_loading {
                            <p class="text-sm text-neutral-500 dark:text-neutral-400 mb-2">
                                {"Refreshing..."}
                            </p>
                        }
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {communities.iter().map(|community| {
                                html! {
                                    <CommunityCard
                                        key={community.id.to_string()}
                                        community={community.clone()}
                                    />
                                }
                            }).collect::<Html>()}
                        </div>

                        <button
                            data-testid="open-community-modal"
                            onclick={open_modal.reform(|_: MouseEvent| ())}
                            class="mt-5 rounded-sm border border-neutral-300 dark:border-neutral-600 py-1 px-6 text-sm font-medium text-neutral-900 dark:text-neutral-100 hover:bg-neutral-100 dark:hover:bg-neutral-700 transition-colors"
                        >
                            <span class="text-lg">{"+"}</span>{" Add"}
                        </button>
                    </div>
                }
            }

            if *show_create_modal {
                <Modal
                    title="Create a Community"
                    on_close={close_modal.clone()}
                >
                    <div class="flex flex-col">
                        if let Some(message) = &modal_error {
                            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 mb-4">
                                <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
                            </div>
                        }

                        <form onsubmit={on_create} class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                    {"Community Name"}
                                </label>
                                <input
                                    data-testid="community-name-input"
                                    type="text"
                                    value={draft.name.clone()}
                                    oninput={on_name_input}
                                    disabled={*is_submitting}
                                    placeholder="Community name"
                                    class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                                           rounded-md shadow-sm bg-white dark:bg-neutral-700
                                           text-neutral-900 dark:text-neutral-100
                                           focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                                           disabled:opacity-50 disabled:cursor-not-allowed"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                    {"Community Description"}
                                </label>
                                <input
                                    data-testid="community-description-input"
                                    type="text"
                                    value={draft.description.clone()}
                                    oninput={on_description_input}
                                    disabled={*is_submitting}
                                    placeholder="Community Description"
                                    class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                                           rounded-md shadow-sm bg-white dark:bg-neutral-700
                                           text-neutral-900 dark:text-neutral-100
                                           focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                                           disabled:opacity-50 disabled:cursor-not-allowed"
                                />
                            </div>

                            <div class="flex w-full justify-end pt-4">
                                <button
                                    type="submit"
                                    data-testid="create-button"
                                    disabled={draft.is_empty() || *is_submitting}
                                    class="py-2 px-4 border border-transparent
                                           rounded-md shadow-sm text-sm font-medium text-white
                                           bg-neutral-900 hover:bg-neutral-800
                                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                           disabled:opacity-25 disabled:cursor-not-allowed
                                           transition-colors duration-200"
                                >
                                    {if *is_submitting { "Creating..." } else { "Create" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </Modal>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::CommunityDraft;

    #[test]
    fn submit_disabled_only_when_both_fields_empty() {
        assert!(CommunityDraft::default().is_empty());

        let name_only = CommunityDraft {
            name: "Eng".into(),
            description: String::new(),
        };
        assert!(!name_only.is_empty());

        let description_only = CommunityDraft {
            name: String::new(),
            description: "Team chat".into(),
        };
        assert!(!description_only.is_empty());
    }

    #[test]
    fn whitespace_only_drafts_count_as_empty() {
        let draft = CommunityDraft {
            name: "  ".into(),
            description: "\t".into(),
        };
        assert!(draft.is_empty());
    }

    #[test]
    fn request_carries_both_draft_fields() {
        let draft = CommunityDraft {
            name: "Eng".into(),
            description: "Team chat".into(),
        };
        let request = draft.into_request();
        assert_eq!(request.name, "Eng");
        assert_eq!(request.description, "Team chat");
    }
}
