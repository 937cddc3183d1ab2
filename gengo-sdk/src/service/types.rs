use crate::client::Client;
use crate::request::Attachment;
use crate::types::NewJob;
use bon::Builder;
use gengo_sdk_common::de::{opt_string_or_number, string_or_number};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use std::collections::BTreeMap;

//region languages
#[derive(Deserialize, Debug, Clone)]
pub struct Language {
    pub language: String,
    #[serde(default)]
    pub localized_name: String,
    pub lc: String,
    /// `word`或`character`
    #[serde(default)]
    pub unit_type: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LanguagePair {
    pub lc_src: String,
    pub lc_tgt: String,
    pub tier: String,
    #[serde(deserialize_with = "string_or_number")]
    pub unit_price: String,
    #[serde(default)]
    pub currency: String,
}
//endregion

//region quote
#[derive(Builder)]
pub struct GetQuote<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    #[builder(field)]
    pub(crate) jobs: Vec<NewJob>,
    #[builder(field)]
    pub(crate) files: Vec<Attachment>,
}

impl<'a, S: get_quote_builder::State> GetQuoteBuilder<'a, S> {
    pub fn job(mut self, job: NewJob) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn jobs(mut self, jobs: impl IntoIterator<Item = NewJob>) -> Self {
        self.jobs.extend(jobs);
        self
    }

    /// 有文件时改为请求`quote/file`
    pub fn file(mut self, file: Attachment) -> Self {
        self.files.push(file);
        self
    }
}

#[derive(Serialize)]
pub(crate) struct QuotePayload<'a> {
    pub(crate) jobs: BTreeMap<String, &'a NewJob>,
}

/// key和提交时的`job_1`、`job_2`...对应
#[derive(Deserialize, Debug, Clone)]
pub struct Quote {
    #[serde(default)]
    pub jobs: BTreeMap<String, QuotedJob>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct QuotedJob {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub credits: Option<String>,
    /// 预计完成时间（秒）
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub eta: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub unit_count: Option<u64>,
    pub currency: Option<String>,
    pub lc_src_detected: Option<String>,
    /// 文件报价返回，提交file任务时作为`identifier`
    pub identifier: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}
//endregion
