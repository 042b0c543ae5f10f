use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A generic modal dialog shell: title bar with a close control, backdrop
/// click to dismiss, content passed as children.
///
/// The page decides when to mount it; dismissing never submits anything.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Heading shown in the title bar
    pub title: AttrValue,
    /// Modal content (passed as children)
    pub children: Html,
    /// Called when user clicks the backdrop or the close control
    pub on_close: Callback<()>,
    /// Whether to allow closing by clicking backdrop (default: true)
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }

            // Only close if clicking the backdrop itself, not its children
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl
                        w-full max-w-md p-6">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {props.title.clone()}
                    </h3>
                    <button
                        data-testid="close-community-modal"
                        onclick={on_close_click}
                        class="text-neutral-500 hover:text-neutral-700 dark:text-neutral-400 dark:hover:text-neutral-200 text-2xl leading-none p-1"
                        title="Close"
                    >
                        {"\u{d7}"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
