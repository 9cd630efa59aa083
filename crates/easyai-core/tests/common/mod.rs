use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use easyai_core::{
    models::EmailReceipt, EmailSender, ItineraryError, PlanSource, Result, SendEmail,
};
use tokio::sync::Notify;

/// Plan source returning a canned answer and recording the questions it saw.
#[derive(Clone, Default)]
pub struct FakePlanSource {
    answer: Option<String>,
    pub questions: Arc<Mutex<Vec<String>>>,
}

impl FakePlanSource {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            questions: Arc::default(),
        }
    }

    /// A source whose API always fails with a 500.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

#[async_trait]
impl PlanSource for FakePlanSource {
    async fn fetch_answer(&self, question: &str) -> Result<String> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer
            .clone()
            .ok_or_else(|| ItineraryError::api(500, "model overloaded"))
    }
}

/// Email sender that blocks until released and can be told to fail.
#[derive(Clone)]
pub struct GatedEmailSender {
    pub gate: Arc<Notify>,
    pub sent: Arc<AtomicUsize>,
    fail: bool,
}

impl GatedEmailSender {
    pub fn new() -> Self {
        Self {
            gate: Arc::new(Notify::new()),
            sent: Arc::default(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for GatedEmailSender {
    async fn send(&self, _email: &SendEmail) -> Result<EmailReceipt> {
        self.gate.notified().await;
        self.sent.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ItineraryError::api(503, ""));
        }
        Ok(EmailReceipt {
            message: "queued".to_string(),
        })
    }
}
