use crate::components::board::{BoardGrid, NoBoards, NotFound};
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Spinner,
};
use crate::models::{Board, WidgetFormValues};
use crate::state::{load_dashboard, AppContext};
use crate::storage::{load_last_board, write_last_board};
use crate::widgets::{WidgetBody, WidgetDialog, WidgetKind};
use icons::Pencil;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::params::Params;

pub(crate) fn board_path(board_id: &str) -> String {
    format!("/board/{}", urlencoding::encode(board_id))
}

/// Board opened at `/`: the last visited one if it still exists, else the first.
pub(crate) fn pick_start_board(boards: &[Board], last: Option<&str>) -> Option<String> {
    last.and_then(|id| boards.iter().find(|b| b.id == id))
        .or_else(|| boards.first())
        .map(|b| b.id.clone())
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct BoardRouteParams {
    pub board_id: Option<String>,
}

/// Navigation bar, load status and config errors shared by every page.
#[component]
fn DashboardShell(children: Children) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let boards = app_state.0.boards;
    let loading = app_state.0.config_loading;
    let error = app_state.0.config_error;
    let retry_state = app_state.clone();

    view! {
        <div class="flex min-h-screen flex-col bg-background text-foreground">
            <header class="flex items-center gap-4 border-b px-4 py-2">
                <a href="/" class="font-semibold">"Cogboard"</a>
                <nav class="flex flex-1 items-center gap-3 overflow-x-auto text-sm">
                    {move || {
                        boards
                            .get()
                            .into_iter()
                            .map(|b| {
                                view! {
                                    <a href=board_path(&b.id) class="hover:underline">
                                        {b.title}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
                <Show when=move || loading.get() fallback=|| ().into_view()>
                    <Spinner />
                </Show>
            </header>

            {move || {
                error.get().map(|e| {
                    let retry_state = retry_state.clone();
                    view! {
                        <Alert class="m-4 w-auto border-destructive/30">
                            <AlertTitle class="text-destructive">"Dashboard unavailable"</AlertTitle>
                            <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                            <Button
                                class="mt-2"
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                on:click=move |_| load_dashboard(&retry_state)
                            >
                                "Retry"
                            </Button>
                        </Alert>
                    }
                })
            }}

            <main class="relative flex-1 p-4">{children()}</main>
        </div>
    }
}

#[component]
pub fn RootPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());
    let boards = app_state.0.boards;
    let loaded = app_state.0.config_loaded;

    Effect::new(move |_| {
        if !loaded.get() {
            return;
        }
        let last = load_last_board();
        let target = boards.with(|b| pick_start_board(b, last.as_deref()));
        if let Some(board_id) = target {
            navigate.with_value(|nav| {
                nav(
                    &board_path(&board_id),
                    leptos_router::NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                )
            });
        }
    });

    view! {
        <DashboardShell>
            <Show when=move || loaded.get() && boards.with(|b| b.is_empty()) fallback=|| ().into_view()>
                <NoBoards />
            </Show>
        </DashboardShell>
    }
}

#[component]
fn WidgetCard(widget_id: String) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let open: RwSignal<bool> = RwSignal::new(false);

    let id = widget_id.clone();
    let values = Signal::derive(move || {
        app_state
            .0
            .widgets
            .with(|w| w.get(&id).cloned())
            .unwrap_or_else(|| WidgetFormValues {
                id: id.clone(),
                ..Default::default()
            })
    });

    let kind = move || values.with(|v| WidgetKind::from_type(&v.widget_type));
    let title = move || {
        values.with(|v| {
            if v.title.trim().is_empty() {
                WidgetKind::from_type(&v.widget_type).display_name().to_string()
            } else {
                v.title.clone()
            }
        })
    };

    view! {
        <Card attr:data-widget-id=widget_id.clone()>
            <CardHeader>
                <div class="flex min-w-0 flex-col gap-1">
                    <CardTitle>{title}</CardTitle>
                    <CardDescription>{move || kind().display_name()}</CardDescription>
                </div>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:aria-label="Edit widget"
                    attr:data-cy="edit-widget"
                    on:click=move |_| open.set(true)
                >
                    <Pencil />
                </Button>
            </CardHeader>
            <CardContent>
                <WidgetBody values=values />
            </CardContent>
        </Card>
        <WidgetDialog widget_id=widget_id open=open />
    }
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = leptos_router::hooks::use_params::<BoardRouteParams>();
    let loaded = app_state.0.config_loaded;

    let board_id = move || params.get().ok().and_then(|p| p.board_id).unwrap_or_default();

    let board_state = app_state.clone();
    let board = Memo::new(move |_| board_state.0.board(&board_id()));

    Effect::new(move |_| {
        if let Some(b) = board.get() {
            write_last_board(&b.id);
        }
    });

    view! {
        <DashboardShell>
            {move || match board.get() {
                Some(b) => {
                    let columns = Signal::stored(b.columns);
                    view! {
                        <BoardGrid columns=columns>
                            {b
                                .widgets
                                .into_iter()
                                .map(|widget_id| view! { <WidgetCard widget_id=widget_id /> })
                                .collect_view()}
                        </BoardGrid>
                    }
                    .into_any()
                }
                None if loaded.get() => view! { <NotFound /> }.into_any(),
                None => ().into_any(),
            }}
        </DashboardShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(id: &str) -> Board {
        Board {
            id: id.to_string(),
            title: id.to_uppercase(),
            columns: 4,
            widgets: vec![],
        }
    }

    #[test]
    fn test_board_path_is_encoded() {
        assert_eq!(board_path("board-1"), "/board/board-1");
        assert_eq!(board_path("a b/c"), "/board/a%20b%2Fc");
    }

    #[test]
    fn test_pick_start_board_prefers_last_visited() {
        let boards = vec![board("a"), board("b")];
        assert_eq!(pick_start_board(&boards, Some("b")), Some("b".to_string()));
    }

    #[test]
    fn test_pick_start_board_falls_back_to_first() {
        let boards = vec![board("a"), board("b")];
        assert_eq!(pick_start_board(&boards, Some("gone")), Some("a".to_string()));
        assert_eq!(pick_start_board(&boards, None), Some("a".to_string()));
    }

    #[test]
    fn test_pick_start_board_without_boards() {
        assert_eq!(pick_start_board(&[], Some("a")), None);
    }
}
