use crate::backend::utils::error::BackendResult;
use config::Config;
use doku::Document;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct InsightConfig {
    /// Address and port where the dashboard is served
    #[default("127.0.0.1:3000")]
    #[doku(example = "127.0.0.1:3000")]
    pub bind: String,
    /// Base url of the service which provides the article listing under `/api/articles/`
    #[default("http://127.0.0.1:5000")]
    #[doku(example = "http://127.0.0.1:5000")]
    pub article_source: String,
}

impl InsightConfig {
    /// Reads `config.toml` if present, then environment variables like `INSIGHTBOT__BIND`.
    pub fn read() -> BackendResult<Self> {
        let config = Config::builder()
            .add_source(config::File::with_name("config.toml").required(false))
            // Cant use _ as separator due to https://github.com/mehcode/config-rs/issues/391
            .add_source(config::Environment::with_prefix("INSIGHTBOT").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.bind()?;
        config.article_source()?;
        Ok(config)
    }

    pub fn bind(&self) -> BackendResult<SocketAddr> {
        Ok(self.bind.parse()?)
    }

    pub fn article_source(&self) -> BackendResult<Url> {
        Ok(Url::parse(&self.article_source)?)
    }
}
