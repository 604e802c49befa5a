pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod list_view;
pub mod remote_sync;
