use crate::{
    common::article::KeyedArticle,
    frontend::{
        pages::articles_resource,
        utils::{
            fetch_state::{FetchState, LoadingPhase},
            formatting::{body_excerpt, metadata_line},
        },
    },
};
use leptos::prelude::*;

#[component]
pub fn ArticleList() -> impl IntoView {
    let articles = articles_resource();

    view! {
        <Suspense fallback=|| fetch_state_view(FetchState::Loading)>
            {move || Suspend::new(async move {
                fetch_state_view(FetchState::from(Some(articles.await)))
            })}
        </Suspense>
    }
}

/// Only the placeholder while loading, the list once the fetch is resolved either way.
pub fn fetch_state_view(state: FetchState) -> AnyView {
    match state.phase() {
        LoadingPhase::Loading => view! { <p>"Loading articles..."</p> }.into_any(),
        LoadingPhase::Ready => articles_view(state).into_any(),
    }
}

/// Renders a resolved fetch. A failed fetch shows an empty list below an error notice.
pub fn articles_view(state: FetchState) -> impl IntoView {
    let error = state.error().map(|e| {
        view! { <p class="articles-error">"Could not load articles: "{e.notice()}</p> }
    });
    let articles = state.articles().to_vec();

    view! {
        <div class="articles-container">
            <h2>"Articles"</h2>
            {error}
            <ul>
                <For each=move || articles.clone() key=|a: &KeyedArticle| a.key children=article_card />
            </ul>
        </div>
    }
}

pub fn article_card(entry: KeyedArticle) -> impl IntoView {
    let article = entry.article;
    let excerpt = body_excerpt(article.body.as_deref());
    let metadata = metadata_line(&article);

    view! {
        <li class="article-card">
            <h3>{article.title}</h3>
            <p>{excerpt}</p>
            <a href=article.url target="_blank" rel="noopener noreferrer">
                "Read More"
            </a>
            <p class="article-meta">{metadata}</p>
        </li>
    }
}
