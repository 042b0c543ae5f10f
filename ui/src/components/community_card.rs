use payloads::responses;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub community: responses::Community,
}

/// Pure display of one community entry.
#[function_component]
pub fn CommunityCard(props: &Props) -> Html {
    let community = &props.community;

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <div class="space-y-4">
                <div>
                    <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                        {&community.name}
                    </h3>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {&community.description}
                    </p>
                </div>

                <div class="text-sm text-neutral-600 dark:text-neutral-400">
                    <p>{"Created: "}{community.created_at.to_zoned(jiff::tz::TimeZone::system()).strftime("%B %d, %Y").to_string()}</p>
                </div>
            </div>
        </div>
    }
}
