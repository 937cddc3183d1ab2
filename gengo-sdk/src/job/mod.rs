//! 单个任务：查询、评论、修订记录、审核（approve/revise/reject）和取消

mod types;
pub use types::*;

use crate::client::Client;
use crate::request::Request;
use crate::types::{Comment, Job, ThreadResp};
use crate::utils::require_text;
use gengo_sdk_common::Error;

pub struct JobApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn job(&self) -> JobApi<'_> {
        JobApi { client: self }
    }
}

impl<'a> JobApi<'a> {
    pub async fn get(&self, job_id: u64) -> Result<Job, Error> {
        let req = Request::get(format!("translate/job/{job_id}"));
        let res: JobResp = self.client.send_as(req).await?;
        Ok(res.job)
    }

    pub async fn feedback(&self, job_id: u64) -> Result<Feedback, Error> {
        let req = Request::get(format!("translate/job/{job_id}/feedback"));
        let res: FeedbackResp = self.client.send_as(req).await?;
        Ok(res.feedback)
    }

    pub async fn revisions(&self, job_id: u64) -> Result<Revisions, Error> {
        let req = Request::get(format!("translate/job/{job_id}/revisions"));
        self.client.send_as(req).await
    }

    pub async fn revision(&self, job_id: u64, rev_id: u64) -> Result<Revision, Error> {
        let req = Request::get(format!("translate/job/{job_id}/revision/{rev_id}"));
        let res: RevisionResp = self.client.send_as(req).await?;
        Ok(res.revision)
    }

    pub async fn comments(&self, job_id: u64) -> Result<Vec<Comment>, Error> {
        let req = Request::get(format!("translate/job/{job_id}/comments"));
        let res: ThreadResp = self.client.send_or_default(req).await?;
        Ok(res.thread)
    }

    pub async fn add_comment(&self, job_id: u64, body: &str) -> Result<(), Error> {
        let body = require_text("body", body)?;
        let data = serde_json::json!({ "body": body });
        let req = Request::post(format!("translate/job/{job_id}/comment"))
            .form(vec![("data".to_owned(), data.to_string())]);
        self.client.send(req).await?;
        Ok(())
    }

    /// 退回给译者修改，`comment`必填
    pub async fn revise(&self, job_id: u64, comment: &str) -> Result<(), Error> {
        let comment = require_text("comment", comment)?;
        put_action(self.client, job_id, "revise", &ReviseParams { comment }).await
    }

    pub fn approve(&self, job_id: u64) -> ApproveBuilder<'a> {
        Approve::builder(self.client, job_id)
    }

    pub fn reject(&self, job_id: u64) -> RejectBuilder<'a> {
        Reject::builder(self.client, job_id)
    }

    /// 只有还没被译者领取的任务可以取消
    pub async fn cancel(&self, job_id: u64) -> Result<(), Error> {
        let req = Request::delete(format!("translate/job/{job_id}"));
        self.client.send(req).await?;
        Ok(())
    }
}

async fn put_action<T: serde::Serialize>(
    client: &Client,
    job_id: u64,
    action: &str,
    params: &T,
) -> Result<(), Error> {
    let data = serde_json::to_value(Action { action, params })?;
    let req = Request::put(format!("translate/job/{job_id}")).json(data, Vec::new());
    client.send(req).await?;
    Ok(())
}

impl Approve<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        if let Some(rating) = self.rating
            && !(1..=5).contains(&rating)
        {
            return Err(Error::InvalidArgument(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }
        put_action(self.client, self.job_id, "approve", self).await
    }
}

impl Reject<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        require_text("comment", self.comment)?;
        require_text("captcha", self.captcha)?;
        put_action(self.client, self.job_id, "reject", self).await
    }
}
