//! Working demo DTOs

use serde::Deserialize;
use validator::Validate;

use domain_claims::{DemoSubmission, UploadedFile};

#[derive(Debug, Deserialize, Validate)]
pub struct UploadedFileRequest {
    #[validate(length(min = 1, message = "File name is required"))]
    pub name: String,
    #[serde(default)]
    pub content_type: String,
}

/// Body of `POST /demo/submissions`
#[derive(Debug, Deserialize, Validate)]
pub struct DemoSubmissionRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub from_email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
    #[serde(default)]
    #[validate(nested)]
    pub attachments: Vec<UploadedFileRequest>,
}

impl From<DemoSubmissionRequest> for DemoSubmission {
    fn from(request: DemoSubmissionRequest) -> Self {
        DemoSubmission {
            from_email: request.from_email.trim().to_string(),
            subject: request.subject,
            body: request.body,
            attachments: request
                .attachments
                .into_iter()
                .map(|f| UploadedFile::new(f.name, f.content_type))
                .collect(),
        }
    }
}
