use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Invoked when the user asks to create their first community.
    pub on_add: Callback<()>,
}

/// Empty-state prompt shown when the user belongs to no communities.
#[function_component]
pub fn NoCommunities(props: &Props) -> Html {
    let onclick = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <div class="text-center py-12">
            <p class="text-neutral-600 dark:text-neutral-400 mb-4">
                {"You're not a member of any communities yet."}
            </p>
            <button
                data-testid="no-communities-add"
                {onclick}
                class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
            >
                {"Create Your First Community"}
            </button>
        </div>
    }
}
