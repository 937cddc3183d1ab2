//! 批量提交任务、列出最近的任务、按id批量查询

mod types;
pub use types::*;

use crate::client::Client;
use crate::request::Request;
use crate::types::{Job, keyed_jobs};
use gengo_sdk_common::Error;

pub struct JobsApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn jobs(&self) -> JobsApi<'_> {
        JobsApi { client: self }
    }
}

impl<'a> JobsApi<'a> {
    pub fn submit(&self) -> SubmitJobsBuilder<'a> {
        SubmitJobs::builder(self.client)
    }

    pub fn list(&self) -> ListJobsBuilder<'a> {
        ListJobs::builder(self.client)
    }

    pub async fn get_many(&self, job_ids: &[u64]) -> Result<Vec<Job>, Error> {
        if job_ids.is_empty() {
            return Err(Error::InvalidArgument("job_ids cannot be empty".to_owned()));
        }
        let ids = job_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let req = Request::get(format!("translate/jobs/{ids}"));
        let res: JobsResp = self.client.send_or_default(req).await?;
        Ok(res.jobs)
    }
}

impl SubmitJobs<'_> {
    pub async fn send(&self) -> Result<OrderSummary, Error> {
        let payload = SubmitPayload {
            jobs: keyed_jobs(&self.jobs, &self.files)?,
            as_group: self.as_group,
            comment: self.comment,
        };
        let data = serde_json::to_value(&payload)?;
        let req = Request::post("translate/jobs").json(data, self.files.clone());
        self.client.send_as(req).await
    }
}

impl ListJobs<'_> {
    pub async fn send(&self) -> Result<Vec<JobSummary>, Error> {
        let req = Request::get("translate/jobs")
            .maybe_param("status", self.status.map(|s| s.as_str()))
            .maybe_param("timestamp_after", self.timestamp_after)
            .maybe_param("count", self.count);
        self.client.send_or_default(req).await
    }
}
