use crate::components::board::NotFound;
use crate::pages::{BoardPage, RootPage};
use crate::state::{load_dashboard, AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let app_state = AppContext(AppState::new());
    provide_context(app_state.clone());

    leptos::logging::log!(
        "[Board] api url: {}",
        app_state.0.api_client.with_untracked(|c| c.base_url.clone())
    );
    load_dashboard(&app_state);

    // Router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("board/:board_id") view=BoardPage />
                <Route path=path!("") view=RootPage />
            </Routes>
        </Router>
    }
}
