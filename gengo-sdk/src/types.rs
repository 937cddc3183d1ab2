//! Payloads shared by several resource groups.

use crate::utils::serialize_bool_as_int;
use bon::Builder;
use gengo_sdk_common::de::opt_string_or_number;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
#[cfg(any(feature = "jobs", feature = "service"))]
use {crate::request::Attachment, gengo_sdk_common::Error, std::collections::BTreeMap};

//region job
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Available,
    Pending,
    Reviewable,
    Approved,
    Revising,
    Rejected,
    Canceled,
    Held,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Available => "available",
            JobStatus::Pending => "pending",
            JobStatus::Reviewable => "reviewable",
            JobStatus::Approved => "approved",
            JobStatus::Revising => "revising",
            JobStatus::Rejected => "rejected",
            JobStatus::Canceled => "canceled",
            JobStatus::Held => "held",
            JobStatus::Unknown => "unknown",
        }
    }
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Job {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub job_id: u64,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub order_id: Option<u64>,
    pub status: JobStatus,
    pub slug: Option<String>,
    pub body_src: Option<String>,
    pub body_tgt: Option<String>,
    #[serde(default)]
    pub lc_src: String,
    #[serde(default)]
    pub lc_tgt: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub unit_count: Option<u64>,
    pub tier: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub credits: Option<String>,
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub eta: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub ctime: Option<i64>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub auto_approve: Option<String>,
    pub custom_data: Option<String>,
    pub file_url_src: Option<String>,
    pub file_url_tgt: Option<String>,
    pub preview_url: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub position: Option<u64>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Comment {
    pub body: String,
    #[serde(default)]
    pub author: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub ctime: Option<i64>,
}

#[cfg(any(feature = "job", feature = "order"))]
#[derive(Deserialize, Default)]
pub(crate) struct ThreadResp {
    #[serde(default)]
    pub(crate) thread: Vec<Comment>,
}
//endregion

//region new job
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Standard,
    Pro,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    #[default]
    Text,
    File,
}

/// 提交或报价时的单个任务
///
/// text类型需要`body_src`；file类型需要`file_key`（对应上传的[`Attachment`](crate::Attachment)字段名）
/// 或者`identifier`（文件报价时返回的）
#[derive(Builder, Serialize, Debug, Clone)]
pub struct NewJob {
    #[builder(default)]
    #[serde(rename = "type")]
    job_type: JobType,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    body_src: Option<String>,
    #[builder(into)]
    lc_src: String,
    #[builder(into)]
    lc_tgt: String,
    #[builder(default)]
    tier: Tier,
    #[builder(default)]
    #[serde(serialize_with = "serialize_bool_as_int")]
    auto_approve: bool,
    /// 给译者的说明
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<String>,
    /// 相同内容重复提交时也创建新任务
    #[builder(default)]
    #[serde(serialize_with = "serialize_bool_as_int")]
    force: bool,
    #[builder(default)]
    #[serde(serialize_with = "serialize_bool_as_int")]
    use_preferred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<u32>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_chars: Option<u32>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    file_key: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
}

#[cfg(any(feature = "jobs", feature = "service"))]
impl NewJob {
    fn validate(&self, key: &str, files: &[Attachment]) -> Result<(), Error> {
        if self.lc_src.trim().is_empty() || self.lc_tgt.trim().is_empty() {
            return Err(Error::InvalidArgument(format!(
                "{key}: lc_src and lc_tgt cannot be empty"
            )));
        }
        match self.job_type {
            JobType::Text => {
                if self.body_src.as_deref().is_none_or(|s| s.trim().is_empty()) {
                    return Err(Error::InvalidArgument(format!(
                        "{key}: body_src cannot be empty for a text job"
                    )));
                }
            }
            JobType::File => match (&self.file_key, &self.identifier) {
                (Some(file_key), _) => {
                    if !files.iter().any(|f| &f.field == file_key) {
                        return Err(Error::InvalidArgument(format!(
                            "{key}: no attachment named {file_key}"
                        )));
                    }
                }
                (None, Some(_)) => {}
                (None, None) => {
                    return Err(Error::InvalidArgument(format!(
                        "{key}: a file job needs file_key or identifier"
                    )));
                }
            },
        }
        Ok(())
    }
}

/// 校验并编号为`job_1`、`job_2`...
#[cfg(any(feature = "jobs", feature = "service"))]
pub(crate) fn keyed_jobs<'a>(
    jobs: &'a [NewJob],
    files: &[Attachment],
) -> Result<BTreeMap<String, &'a NewJob>, Error> {
    if jobs.is_empty() {
        return Err(Error::InvalidArgument("jobs cannot be empty".to_owned()));
    }

    let mut keyed = BTreeMap::new();
    for (i, job) in jobs.iter().enumerate() {
        let key = format!("job_{}", i + 1);
        job.validate(&key, files)?;
        keyed.insert(key, job);
    }
    Ok(keyed)
}
//endregion
