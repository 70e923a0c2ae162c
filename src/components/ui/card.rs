use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground relative flex h-full flex-col gap-3 overflow-hidden rounded-xl border py-4 shadow-sm"}
    clx! {CardHeader, div, "flex items-start justify-between gap-2 px-4"}
    clx! {CardTitle, h2, "truncate leading-none font-semibold"}
    clx! {CardDescription, p, "text-muted-foreground text-xs"}
    clx! {CardContent, div, "min-h-0 flex-1 overflow-auto px-4"}
}

pub use components::*;
