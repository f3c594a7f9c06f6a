//! Translation of arbitrary source text into JavaScript
//!
//! A [`TranslationService`] builds a prompt from a [`polyrun_core::SourceUnit`],
//! sends one chat-completion request through an [`HttpTransport`], and pulls
//! the JavaScript out of the reply.

pub mod completion;
pub mod extract;
pub mod prompt;
pub mod service;
pub mod transport;

pub use completion::request_completion;
pub use extract::extract_code;
pub use prompt::{build_prompt, SYSTEM_CONTRACT};
pub use service::TranslationService;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
