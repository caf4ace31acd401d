use crate::domain::a001_form_record::ui::intake::IntakeForm;
use crate::domain::a001_form_record::ui::list::RecordsBrowser;
use crate::layout::Header;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="app-main">
                <Routes fallback=|| view! { <div class="empty-state">"Page not found"</div> }>
                    <Route path=path!("/") view=IntakeForm />
                    <Route path=path!("/view") view=RecordsBrowser />
                </Routes>
            </main>
        </Router>
    }
}
