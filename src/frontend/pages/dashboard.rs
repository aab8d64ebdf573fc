use crate::frontend::pages::article::list::ArticleList;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <Title text="Dashboard" />
        <section>
            <h1>"Dashboard"</h1>
            <ArticleList />
        </section>
    }
}
