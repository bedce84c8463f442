use hookrelay_chat_interface::ChatError;

/// HTTP chat driver error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum HttpChatError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Unexpected status {status} while posting to '{channel}': {body}")]
    UnexpectedStatus {
        channel: String,
        status: u16,
        body: String,
    },
}

impl From<reqwest::Error> for HttpChatError {
    fn from(e: reqwest::Error) -> Self {
        HttpChatError::HttpError { source: e }
    }
}

impl From<HttpChatError> for ChatError {
    fn from(e: HttpChatError) -> Self {
        match e {
            HttpChatError::UnexpectedStatus {
                channel,
                status,
                body,
            } => ChatError::Rejected {
                channel,
                reason: format!("status {status}: {body}"),
            },
            e => ChatError::ImplementationError { source: e.into() },
        }
    }
}
