use std::sync::Arc;

use contracts::domain::document::{Document, NewDocument};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, api_url};
use crate::shared::remote_sync::{LogSink, RemoteSync};

fn sync() -> RemoteSync {
    RemoteSync::new(&api_base(), "documents", Arc::new(LogSink))
}

/// Fetch all documents. Read failures surface to the caller.
pub async fn fetch_documents() -> Result<Vec<Document>, String> {
    let response = Request::get(&api_url("/documents"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch documents: {}", response.status()));
    }

    response
        .json::<Vec<Document>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a document record; the server assigns the id. The upload
/// form surfaces a failed create.
pub async fn create_document(new_document: &NewDocument) -> Result<(), String> {
    sync().create(new_document).await
}

/// Full replacement of one document after an edit.
pub async fn update_document(document: &Document) {
    sync().update(&document.id, document).await
}

pub async fn delete_document(id: &str) {
    sync().delete(id).await
}

/// Bulk delete: one DELETE per id, failing independently.
pub async fn delete_documents(ids: &[String]) {
    sync().delete_many(ids).await
}
