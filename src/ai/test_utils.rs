//! Scripted model client for analyzer tests.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use super::{AiClient, AiClientMetadata};

/// Model client that plays back canned replies.
///
/// Each call pops the next reply; an empty script answers with an error,
/// which the analyzer treats like any other failed request. Calls are
/// logged so a test can inspect what the analyzer sent after handing the
/// client over.
pub(crate) struct ScriptedClient {
    replies: Arc<Mutex<VecDeque<Result<String>>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedClient {
    /// Scripts the replies for successive calls.
    pub(crate) fn new(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            calls: Arc::default(),
        }
    }

    /// Returns a view onto the calls this client receives.
    pub(crate) fn log(&self) -> CallLog {
        CallLog {
            calls: Arc::clone(&self.calls),
        }
    }
}

/// Calls received by a [`ScriptedClient`], as `(system, user)` prompt pairs.
pub(crate) struct CallLog {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl CallLog {
    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl AiClient for ScriptedClient {
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_prompt.to_string()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("script exhausted")))
        })
    }

    fn get_metadata(&self) -> AiClientMetadata {
        AiClientMetadata {
            provider: "Scripted".to_string(),
            model: "scripted-model".to_string(),
            max_response_length: super::DEFAULT_MAX_TOKENS as usize,
        }
    }
}
