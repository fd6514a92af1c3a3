use crate::domain::AppError;
use crate::ports::{ApiKey, GenerationRequest, TextGenerator};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum Reply {
    Text(String),
    Upstream(String),
}

/// Scripted text generator that records every request it receives.
#[derive(Clone)]
pub struct FakeTextGenerator {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    reply: Arc<Mutex<Reply>>,
    gate: Option<Gate>,
}

#[derive(Clone)]
struct Gate {
    started: Sender<()>,
    release: Arc<Mutex<Receiver<()>>>,
}

/// Test-side handle for a gated fake: observe the call starting, then let it finish.
pub struct GateHandle {
    started: Receiver<()>,
    release: Sender<()>,
}

impl GateHandle {
    pub fn wait_until_started(&self) {
        self.started.recv().unwrap();
    }

    pub fn release(&self) {
        self.release.send(()).unwrap();
    }
}

impl FakeTextGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            reply: Arc::new(Mutex::new(Reply::Text(text.into()))),
            gate: None,
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            reply: Arc::new(Mutex::new(Reply::Upstream(reason.into()))),
            gate: None,
        }
    }

    /// Block each call until the returned handle releases it.
    pub fn gated(mut self) -> (Self, GateHandle) {
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        self.gate = Some(Gate { started: started_tx, release: Arc::new(Mutex::new(release_rx)) });
        (self, GateHandle { started: started_rx, release: release_tx })
    }

    /// Change the reply for subsequent calls, including calls through clones.
    pub fn respond_with(&self, text: impl Into<String>) {
        *self.reply.lock().unwrap() = Reply::Text(text.into());
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl TextGenerator for FakeTextGenerator {
    fn generate(&self, _api_key: &ApiKey, request: &GenerationRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.started.send(()).unwrap();
            gate.release.lock().unwrap().recv().unwrap();
        }

        match &*self.reply.lock().unwrap() {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Upstream(reason) => Err(AppError::upstream(reason.clone())),
        }
    }
}
