use std::sync::Arc;

use contracts::domain::user::{NewUser, Status, User};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, api_url};
use crate::shared::remote_sync::{LogSink, RemoteSync};

fn sync() -> RemoteSync {
    RemoteSync::new(&api_base(), "users", Arc::new(LogSink))
}

/// Fetch all users. Read failures surface to the caller, unlike
/// writes, which are best-effort.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    let response = Request::get(&api_url("/users"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch users: {}", response.status()));
    }

    response
        .json::<Vec<User>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a user; the server assigns the id. The signup form surfaces
/// a failed create.
pub async fn create_user(new_user: &NewUser) -> Result<(), String> {
    sync().create(new_user).await
}

/// Full replacement of one user after an edit.
pub async fn update_user(user: &User) {
    sync().update(&user.id, user).await
}

/// Activate/deactivate via a single-field PATCH.
pub async fn patch_user_status(id: &str, status: Status) {
    sync()
        .patch_field(id, "status", serde_json::json!(status))
        .await
}
