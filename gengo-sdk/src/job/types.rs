use crate::client::Client;
use crate::types::Job;
use crate::utils::serialize_bool_as_int;
use bon::Builder;
use gengo_sdk_common::de::opt_string_or_number;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

//region response
#[derive(Deserialize)]
pub(crate) struct JobResp {
    pub(crate) job: Job,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Feedback {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub rating: Option<String>,
    pub for_translator: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct FeedbackResp {
    pub(crate) feedback: Feedback,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct RevisionSummary {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub rev_id: u64,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub ctime: Option<i64>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Revisions {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub job_id: u64,
    #[serde(default)]
    pub revisions: Vec<RevisionSummary>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Revision {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub ctime: Option<i64>,
    pub body_tgt: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RevisionResp {
    pub(crate) revision: Revision,
}
//endregion

//region action
/// PUT请求的`data`：`{"action": "...", ...参数}`
#[derive(Serialize)]
pub(crate) struct Action<'a, T: Serialize> {
    pub(crate) action: &'a str,
    #[serde(flatten)]
    pub(crate) params: &'a T,
}

#[derive(Serialize)]
pub(crate) struct ReviseParams<'a> {
    pub(crate) comment: &'a str,
}

#[derive(Builder, Serialize)]
pub struct Approve<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) job_id: u64,
    /// 1-5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    for_translator: Option<&'a str>,
    /// 给Gengo的反馈
    #[serde(rename = "for_mygengo", skip_serializing_if = "Option::is_none")]
    for_gengo: Option<&'a str>,
    /// 是否允许公开反馈
    #[builder(default)]
    #[serde(serialize_with = "serialize_bool_as_int")]
    public: bool,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RejectReason {
    #[default]
    Quality,
    Incomplete,
    Other,
}

/// 拒绝后任务的去向
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FollowUp {
    #[default]
    Requeue,
    Cancel,
}

#[derive(Builder, Serialize)]
pub struct Reject<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) job_id: u64,
    #[builder(default)]
    reason: RejectReason,
    pub(crate) comment: &'a str,
    /// 任务预览图里的验证码
    pub(crate) captcha: &'a str,
    #[builder(default)]
    follow_up: FollowUp,
}
//endregion
