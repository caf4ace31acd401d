pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod request_tokens;
