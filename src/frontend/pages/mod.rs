use crate::{
    common::article::KeyedArticle,
    frontend::{
        api::ApiClient,
        utils::{
            errors::{FrontendError, FrontendResult},
            mount_guard::MountGuard,
        },
    },
};
use leptos::prelude::*;
use log::{debug, error};

pub mod article;
pub mod dashboard;

/// Loads the article listing once for the calling view.
fn articles_resource() -> Resource<FrontendResult<Vec<KeyedArticle>>> {
    let client = ApiClient::current();
    let guard = MountGuard::scoped();
    Resource::new(
        move || (),
        move |_| {
            let client = client.clone();
            let guard = guard.clone();
            async move { fetch_articles(&client, &guard).await }
        },
    )
}

/// Fetches the listing and logs the outcome. A response which arrives after the guard was
/// unmounted resolves to [FrontendError::Cancelled] instead.
pub async fn fetch_articles(
    client: &ApiClient,
    guard: &MountGuard,
) -> FrontendResult<Vec<KeyedArticle>> {
    let res = client.list_articles().await;
    if !guard.is_mounted() {
        debug!("Article list is gone, discarding response");
        return Err(FrontendError::Cancelled);
    }
    match &res {
        Ok(articles) => debug!("Fetched {} articles", articles.len()),
        Err(e) => error!("Error fetching articles: {e}"),
    }
    res
}
