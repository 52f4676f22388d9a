//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{administration::AdministrationPage, dataprep::DataPrepPage};
use crate::state::{dataprep::DataPrepState, namespace::NamespaceState, services::SystemServicesState};

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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let system = RwSignal::new(SystemServicesState::default());
    let dataprep = RwSignal::new(DataPrepState::default());
    let namespace = RwSignal::new(NamespaceState::default());

    provide_context(system);
    provide_context(dataprep);
    provide_context(namespace);

    view! {
        <Stylesheet id="leptos" href="/pkg/fabric-console.css"/>
        <Title text="Fabric Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AdministrationPage/>
                <Route path=(StaticSegment("dataprep"), ParamSegment("workspace")) view=DataPrepPage/>
            </Routes>
        </Router>
    }
}
