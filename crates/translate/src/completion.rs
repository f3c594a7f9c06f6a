//! OpenAI-compatible chat completion call

use crate::prompt::SYSTEM_CONTRACT;
use crate::transport::HttpTransport;
use polyrun_core::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// `{base_url}/chat/completions`, ignoring trailing slashes on `base_url`
pub fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Send one completion request and return the reply text.
///
/// Non-2xx responses carry the body verbatim. A 2xx response that cannot be
/// decoded or has no content in its first choice is also a translation error.
/// There is no retry.
pub async fn request_completion<T>(
    transport: &T,
    model: &str,
    credential: &str,
    base_url: &str,
    prompt: &str,
) -> Result<String>
where
    T: HttpTransport + ?Sized,
{
    let url = completions_url(base_url);
    let request = ChatRequest {
        model,
        temperature: 0.0,
        messages: [
            ChatMessage {
                role: "system",
                content: SYSTEM_CONTRACT,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
    };
    let payload = serde_json::to_value(&request).map_err(|e| Error::Json {
        message: "failed to encode completion request".to_string(),
        source: e,
    })?;

    tracing::debug!(url = %url, model = %model, "sending completion request");
    let response = transport.post_json(&url, credential, &payload).await?;

    if !response.is_success() {
        return Err(Error::translation(Some(response.status), response.body));
    }

    let decoded: ChatResponse = serde_json::from_str(&response.body).map_err(|e| {
        Error::translation(
            Some(response.status),
            format!("undecodable completion response ({e}): {}", response.body),
        )
    })?;

    decoded
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| {
            Error::translation(
                Some(response.status),
                format!("completion response had no content: {}", response.body),
            )
        })
}
