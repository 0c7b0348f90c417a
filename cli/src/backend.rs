//! `reqwest` transport for the backend's `/ask` and `/upload` endpoints.

use reqwest::multipart::{Form, Part};
use transcript::endpoint::{FILE_FIELD, QUESTION_FIELD};
use transcript::{AskReply, TransportError, UploadReply, ask_url, normalize_base_url, upload_url};

pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

impl Backend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `question` as the `question` multipart field.
    pub async fn ask(&self, question: &str) -> Result<AskReply, TransportError> {
        let form = Form::new().text(QUESTION_FIELD, question.to_owned());
        let body = self.post_form(ask_url(&self.base_url), form).await?;
        AskReply::decode(&body)
    }

    /// POST the document bytes as the `file` multipart field.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadReply, TransportError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str("application/pdf")
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);
        let body = self.post_form(upload_url(&self.base_url), form).await?;
        UploadReply::decode(&body)
    }

    async fn post_form(&self, url: String, form: Form) -> Result<String, TransportError> {
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
