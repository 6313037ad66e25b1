//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use floorplan::booking::BookingForm;
use floorplan::engine::EditorCore;

use crate::pages::floor_editor::FloorEditorPage;
use crate::state::canvas_view::CanvasViewState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the editor core, the booking form, the session, and canvas telemetry as contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(EditorCore::new()));
    provide_context(RwSignal::new(BookingForm::default()));
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(CanvasViewState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/club-console.css"/>
        <Title text="Floor Editor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("floors"), ParamSegment("id")) view=FloorEditorPage/>
            </Routes>
        </Router>
    }
}
