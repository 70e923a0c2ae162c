use icons::Info;
use leptos::prelude::*;
use tw_merge::tw_merge;

pub(crate) const MIN_COLUMNS: u32 = 1;
pub(crate) const MAX_COLUMNS: u32 = 20;

/// Column count used for the grid template; out-of-range values are clamped.
pub(crate) fn board_columns(columns: u32) -> u32 {
    columns.clamp(MIN_COLUMNS, MAX_COLUMNS)
}

pub(crate) fn grid_style(columns: u32) -> String {
    format!(
        "display: grid; grid-gap: 20px; grid-template-columns: repeat({}, 1fr); grid-auto-rows: 0.5fr;",
        board_columns(columns)
    )
}

/// Grid holding a board's widgets.
#[component]
pub fn BoardGrid(
    #[prop(into)] columns: Signal<u32>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div data-name="BoardGrid" class=class style=move || grid_style(columns.get())>
            {children()}
        </div>
    }
}

/// Full-area overlay shared by the "no data" placeholders.
#[component]
fn NoDataOverlay(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = tw_merge!(
        "absolute inset-0 flex items-center justify-center [&>div]:px-4 [&>div]:text-center",
        class
    );

    view! {
        <div class=class>
            <div>{children()}</div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <NoDataOverlay class="z-[2000] bg-[#211f39] text-white">
            <h2 class="text-xl font-semibold">"Board not found"</h2>
            <p class="mt-2 text-sm opacity-80">"Check the address or pick another board."</p>
        </NoDataOverlay>
    }
}

#[component]
pub fn NoBoards() -> impl IntoView {
    view! {
        <NoDataOverlay class="text-muted-foreground">
            <h2 class="text-xl font-semibold">"There are no boards yet"</h2>
            <p class="mt-2 text-sm">"Create a board in the backend configuration to get started."</p>
        </NoDataOverlay>
    }
}

/// Inline "nothing to show" message inside a widget.
#[component]
pub fn NoItemsInfo(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex h-full flex-col items-center justify-center gap-2 text-muted-foreground">
            <Info class="size-8" />
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_columns_clamped() {
        assert_eq!(board_columns(0), 1);
        assert_eq!(board_columns(4), 4);
        assert_eq!(board_columns(99), 20);
    }

    #[test]
    fn test_grid_style_uses_columns() {
        let style = grid_style(6);
        assert!(style.contains("grid-template-columns: repeat(6, 1fr)"));
        assert!(style.contains("grid-gap: 20px"));
        assert!(style.contains("grid-auto-rows: 0.5fr"));
    }
}
