use crate::client::Client;
use crate::request::Attachment;
use crate::types::{Job, JobStatus, NewJob};
use crate::utils::serialize_bool_as_int;
use bon::Builder;
use gengo_sdk_common::de::string_or_number;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use std::collections::BTreeMap;

//region submit
#[derive(Builder)]
pub struct SubmitJobs<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    // 注意#[builder(field)]需要放在start_fn之后
    #[builder(field)]
    pub(crate) jobs: Vec<NewJob>,
    #[builder(field)]
    pub(crate) files: Vec<Attachment>,
    /// 所有任务交给同一个译者
    #[builder(default)]
    pub(crate) as_group: bool,
    /// 整个订单的说明
    pub(crate) comment: Option<&'a str>,
}

impl<'a, S: submit_jobs_builder::State> SubmitJobsBuilder<'a, S> {
    pub fn job(mut self, job: NewJob) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn jobs(mut self, jobs: impl IntoIterator<Item = NewJob>) -> Self {
        self.jobs.extend(jobs);
        self
    }

    pub fn file(mut self, file: Attachment) -> Self {
        self.files.push(file);
        self
    }
}

#[derive(Serialize)]
pub(crate) struct SubmitPayload<'a> {
    pub(crate) jobs: BTreeMap<String, &'a NewJob>,
    #[serde(serialize_with = "serialize_bool_as_int")]
    pub(crate) as_group: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) comment: Option<&'a str>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct OrderSummary {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub order_id: u64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub job_count: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub credits_used: String,
    #[serde(default)]
    pub currency: String,
}
//endregion

//region list
#[derive(Builder)]
pub struct ListJobs<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    pub(crate) status: Option<JobStatus>,
    /// Unix秒，只返回这之后创建的任务
    pub(crate) timestamp_after: Option<i64>,
    /// 最多返回多少条
    pub(crate) count: Option<u32>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct JobSummary {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub job_id: u64,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub ctime: Option<i64>,
}
//endregion

#[derive(Deserialize, Default)]
pub(crate) struct JobsResp {
    #[serde(default)]
    pub(crate) jobs: Vec<Job>,
}
