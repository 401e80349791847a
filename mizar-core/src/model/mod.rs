mod job_model;
mod resource;

pub use job_model::{JobModel, JobStatus};
pub use resource::ProtectedResource;
