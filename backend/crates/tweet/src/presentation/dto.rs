//! Form DTOs

use serde::Deserialize;

use crate::application::CreateTweetInput;

/// Create tweet form; missing fields are empty
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTweetForm {
    pub content: String,
    pub gif: String,
}

impl From<CreateTweetForm> for CreateTweetInput {
    fn from(form: CreateTweetForm) -> Self {
        Self {
            content: form.content,
            gif: form.gif,
        }
    }
}
