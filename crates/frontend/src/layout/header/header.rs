use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"VFS Intake"</span>
                <nav class="header__nav">
                    <A href="/" attr:class="header__link">
                        {icon("user")}
                        " New Entry"
                    </A>
                    <A href="/view" attr:class="header__link">
                        {icon("users")}
                        " Users"
                    </A>
                </nav>
            </div>
        </header>
    }
}
