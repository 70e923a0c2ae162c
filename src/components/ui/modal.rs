use icons::X;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {ModalBody, div, "flex max-h-[65vh] flex-col gap-4 overflow-y-auto"}
    clx! {ModalHeader, div, "flex flex-col gap-2 text-left"}
    clx! {ModalTitle, h3, "text-lg leading-none font-semibold"}
    clx! {ModalFooter, footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}
}

pub use components::*;

/// Signal-driven modal: rendered while `open` is true, closed by the X button or the backdrop.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "fixed top-[50%] left-[50%] z-50 flex w-full max-w-lg translate-x-[-50%] translate-y-[-50%] flex-col gap-4 rounded-2xl border bg-background p-6 shadow-lg",
        class
    );
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                data-name="ModalBackdrop"
                class="fixed inset-0 z-40 bg-black/50"
                on:click=move |_| open.set(false)
            />
            <div data-name="ModalContent" role="dialog" class=merged_class.clone()>
                <button
                    type="button"
                    class="absolute top-4 right-4 rounded-sm p-1 opacity-70 hover:opacity-100"
                    aria-label="Close"
                    on:click=move |_| open.set(false)
                >
                    <X class="size-4" />
                </button>
                {children.with_value(|c| c())}
            </div>
        </Show>
    }
}
