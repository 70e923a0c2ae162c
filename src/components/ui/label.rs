use leptos::prelude::*;
use tw_merge::*;

/// Field label. `shrink` keeps it small and above the control, as dialog fields render it.
#[component]
pub fn Label(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] html_for: String,
    #[prop(optional)] shrink: bool,
    children: Children,
) -> impl IntoView {
    let size = if shrink {
        "text-xs text-muted-foreground"
    } else {
        "text-sm"
    };

    let class = tw_merge!(
        "flex items-center gap-2 leading-none font-medium select-none peer-disabled:cursor-not-allowed peer-disabled:opacity-50",
        size,
        class
    );

    view! {
        <label class=class r#for=html_for>
            {children()}
        </label>
    }
}
