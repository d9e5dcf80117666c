//! Scripted completion backend for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionError, CompletionService};

/// A single scripted reply for [`MockCompletion`].
#[derive(Clone, Debug)]
pub enum MockReply {
    /// Return this text payload.
    Text(String),
    /// Simulate a provider fault with this message.
    Failure(String),
}

/// One recorded `complete()` invocation.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
    pub json_output: bool,
}

/// A hand-rolled [`CompletionService`] for tests.
///
/// Replies are consumed in order; every call is recorded so tests can assert
/// call counts and inspect the prompts that were actually sent.
pub struct MockCompletion {
    /// Reversed at construction so replies pop() in submission order.
    replies: Mutex<Vec<MockReply>>,
    calls: Mutex<Vec<RecordedCall>>,
    call_count: AtomicUsize,
}

impl MockCompletion {
    pub fn with_replies(mut replies: Vec<MockReply>) -> Self {
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `complete()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        json_output: bool,
    ) -> Result<String, CompletionError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
            json_output,
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop()
            .expect("mock reply queue exhausted");

        match reply {
            MockReply::Text(text) => Ok(text),
            MockReply::Failure(message) => Err(CompletionError::Api {
                status: 503,
                message,
            }),
        }
    }
}
