use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // API base URL for every page, resolved once at startup
    let config = ApiConfig::from_build_env();
    log::info!("Using API at {}", config.base_url());
    provide_context(config);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
