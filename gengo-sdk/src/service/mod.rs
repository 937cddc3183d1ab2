//! 支持的语言、语言对和价格，以及提交前的报价

mod types;
pub use types::*;

use crate::client::Client;
use crate::credentials::Auth;
use crate::request::Request;
use crate::types::keyed_jobs;
use gengo_sdk_common::Error;

pub struct ServiceApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn service(&self) -> ServiceApi<'_> {
        ServiceApi { client: self }
    }
}

impl<'a> ServiceApi<'a> {
    /// 只需要`api_key`，不需要签名
    pub async fn languages(&self) -> Result<Vec<Language>, Error> {
        let req = Request::get("translate/service/languages").auth(Auth::ApiKey);
        self.client.send_or_default(req).await
    }

    /// `lc_src`为空时返回所有语言对
    pub async fn language_pairs(&self, lc_src: Option<&str>) -> Result<Vec<LanguagePair>, Error> {
        let req = Request::get("translate/service/language_pairs")
            .auth(Auth::ApiKey)
            .maybe_param("lc_src", lc_src.filter(|s| !s.trim().is_empty()));
        self.client.send_or_default(req).await
    }

    pub fn quote(&self) -> GetQuoteBuilder<'a> {
        GetQuote::builder(self.client)
    }
}

impl GetQuote<'_> {
    pub async fn send(&self) -> Result<Quote, Error> {
        let payload = QuotePayload {
            jobs: keyed_jobs(&self.jobs, &self.files)?,
        };
        let data = serde_json::to_value(&payload)?;
        let path = if self.files.is_empty() {
            "translate/service/quote"
        } else {
            "translate/service/quote/file"
        };
        let req = Request::post(path).json(data, self.files.clone());
        self.client.send_as(req).await
    }
}
