#![doc = include_str!("../README.md")]

mod client;
pub mod credentials;
mod request;
mod types;
mod utils;

pub use client::{Client, Endpoint};
pub use gengo_sdk_common::Error;
pub use request::Attachment;
pub use types::{Comment, Job, JobStatus, JobType, NewJob, NewJobBuilder, Tier};

#[cfg(feature = "account")]
pub mod account;
#[cfg(feature = "job")]
pub mod job;
#[cfg(feature = "jobs")]
pub mod jobs;
#[cfg(feature = "order")]
pub mod order;
#[cfg(feature = "service")]
pub mod service;
