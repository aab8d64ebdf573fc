use crate::{
    common::DEFAULT_ARTICLE_SOURCE,
    frontend::utils::errors::{FrontendError, FrontendResult},
};
use http::{Method, StatusCode};
use log::info;
use serde::Deserialize;
use std::sync::LazyLock;
use url::Url;

pub mod article;

/// Client for the compiled-in article source. The server provides its configured client
/// through context, see [ApiClient::current].
pub static CLIENT: LazyLock<ApiClient> = LazyLock::new(|| {
    let article_source =
        option_env!("INSIGHTBOT_ARTICLE_SOURCE").unwrap_or(DEFAULT_ARTICLE_SOURCE);
    #[cfg(feature = "ssr")]
    {
        ApiClient::new(reqwest::Client::new(), article_source)
    }
    #[cfg(not(feature = "ssr"))]
    {
        ApiClient::new(article_source)
    }
});

#[derive(Clone, Debug)]
pub struct ApiClient {
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
    /// Base url of the article source, endpoint paths replace its path.
    pub article_source: String,
}

impl ApiClient {
    #[cfg(feature = "ssr")]
    pub fn new(client: reqwest::Client, article_source: impl Into<String>) -> Self {
        Self {
            client,
            article_source: article_source.into(),
        }
    }

    #[cfg(not(feature = "ssr"))]
    pub fn new(article_source: impl Into<String>) -> Self {
        Self {
            article_source: article_source.into(),
        }
    }

    /// Client provided by the surrounding app, or the compiled-in default.
    pub fn current() -> Self {
        leptos::prelude::use_context::<ApiClient>().unwrap_or_else(|| CLIENT.clone())
    }

    async fn get<T>(&self, endpoint: &str) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.send(Method::GET, endpoint).await
    }

    #[cfg(feature = "ssr")]
    async fn send<T>(&self, method: Method, path: &str) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.request_endpoint(path)?;
        let res = self.client.request(method, url).send().await?;
        let status = res.status();
        let url = res.url().to_string();
        let text = res.text().await?;
        Self::response(status.into(), text, &url)
    }

    #[cfg(not(feature = "ssr"))]
    fn send<'a, T>(
        &'a self,
        method: Method,
        path: &'a str,
    ) -> impl std::future::Future<Output = FrontendResult<T>> + Send + 'a
    where
        T: for<'de> Deserialize<'de>,
    {
        use gloo_net::http::RequestBuilder;
        use leptos::prelude::on_cleanup;
        use send_wrapper::SendWrapper;

        SendWrapper::new(async move {
            let abort_controller = SendWrapper::new(web_sys::AbortController::new().ok());
            let abort_signal = abort_controller.as_ref().map(|a| a.signal());

            // abort in-flight requests if the view which sent them is cleaned up
            on_cleanup(move || {
                if let Some(abort_controller) = abort_controller.take() {
                    abort_controller.abort()
                }
            });

            let url = self.request_endpoint(path)?;
            let req = RequestBuilder::new(url.as_str())
                .method(method)
                .abort_signal(abort_signal.as_ref())
                .build()?;
            let res = req.send().await?;
            let status = res.status();
            let text = res.text().await?;
            Self::response(status, text, &res.url())
        })
    }

    fn response<T>(status: u16, text: String, url: &str) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let success = StatusCode::from_u16(status)
            .map(|s| s.is_success())
            .unwrap_or(false);
        if !success {
            info!("API error: {text} on {url} status {status}");
            return Err(FrontendError::HttpStatus { status, body: text });
        }
        serde_json::from_str(&text).map_err(|e| {
            info!("Failed to deserialize api response: {e} from {text} on {url}");
            FrontendError::from(e)
        })
    }

    fn request_endpoint(&self, path: &str) -> FrontendResult<Url> {
        Ok(Url::parse(&self.article_source)?.join(path)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::ARTICLES_ENDPOINT;
    use pretty_assertions::assert_eq;

    #[cfg(feature = "ssr")]
    fn client(article_source: &str) -> ApiClient {
        ApiClient::new(reqwest::Client::new(), article_source)
    }

    #[cfg(not(feature = "ssr"))]
    fn client(article_source: &str) -> ApiClient {
        ApiClient::new(article_source)
    }

    #[test]
    fn test_request_endpoint() -> FrontendResult<()> {
        assert_eq!(
            "http://127.0.0.1:5000/api/articles/",
            client(DEFAULT_ARTICLE_SOURCE)
                .request_endpoint(ARTICLES_ENDPOINT)?
                .as_str()
        );
        assert_eq!(
            "https://news.example/api/articles/",
            client("https://news.example/ignored/path")
                .request_endpoint(ARTICLES_ENDPOINT)?
                .as_str()
        );
        assert!(matches!(
            client("not a url").request_endpoint(ARTICLES_ENDPOINT),
            Err(FrontendError::Transport(_))
        ));
        Ok(())
    }

    #[test]
    fn test_response_status_checked_before_payload() {
        let res = ApiClient::response::<Vec<u32>>(404, "not found".to_string(), "u");
        assert_eq!(
            Err(FrontendError::HttpStatus {
                status: 404,
                body: "not found".to_string()
            }),
            res
        );
        let res = ApiClient::response::<Vec<u32>>(500, "[1]".to_string(), "u");
        assert!(matches!(res, Err(FrontendError::HttpStatus { status: 500, .. })));
    }

    #[test]
    fn test_response_accepts_any_success_status() {
        assert_eq!(
            Ok(vec![1, 2]),
            ApiClient::response::<Vec<u32>>(200, "[1,2]".to_string(), "u")
        );
        assert_eq!(
            Ok(vec![]),
            ApiClient::response::<Vec<u32>>(203, "[]".to_string(), "u")
        );
        assert!(matches!(
            ApiClient::response::<Vec<u32>>(200, "{\"a\":1}".to_string(), "u"),
            Err(FrontendError::Payload(_))
        ));
    }
}
