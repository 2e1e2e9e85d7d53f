//! Concurrent per-session requests
//!
//! Each request runs as its own tokio task. Results are collected in the
//! order the session keys were given, one [`Branch`] per key, and only then
//! merged. Any failed branch fails the merge; there is no partial success.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::api::ApiError;
use crate::model::SessionKey;

/// Outcome of one request in a fan-out
pub type Branch<T> = Result<Vec<T>, ApiError>;

/// Run `request` once per session key concurrently and collect the branches
/// positionally
pub async fn fan_out<T, F, Fut>(session_keys: &[SessionKey], request: F) -> Vec<Branch<T>>
where
    T: Send + 'static,
    F: Fn(SessionKey) -> Fut,
    Fut: Future<Output = Branch<T>> + Send + 'static,
{
    let handles: Vec<JoinHandle<Branch<T>>> = session_keys
        .iter()
        .map(|&key| tokio::spawn(request(key)))
        .collect();

    join_positionally(handles).await
}

/// Await spawned tasks in order; a panicked task becomes a failed branch
pub async fn join_positionally<T>(
    handles: Vec<JoinHandle<Result<T, ApiError>>>,
) -> Vec<Result<T, ApiError>> {
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(ApiError::TaskFailed(e.to_string())),
        };
        results.push(result);
    }
    results
}

/// Concatenate successful branches
///
/// Fails with the first branch error, or with [`ApiError::Empty`] when every
/// branch succeeded but no records came back.
pub fn concat_branches<T>(branches: Vec<Branch<T>>, what: &str) -> Result<Vec<T>, ApiError> {
    let mut all = Vec::new();
    for branch in branches {
        all.extend(branch?);
    }

    if all.is_empty() {
        return Err(ApiError::empty(what));
    }
    Ok(all)
}
