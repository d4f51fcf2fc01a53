use crate::domain::model::HttpResponse;
use crate::domain::ports::HttpFetcher;
use crate::utils::error::{IssError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Reply {
    Response(HttpResponse),
    Transport(String),
}

impl Reply {
    pub fn ok(status: u16, body: &str) -> Self {
        Reply::Response(HttpResponse::new(status, body))
    }

    pub fn transport(message: &str) -> Self {
        Reply::Transport(message.to_string())
    }
}

/// Answers requests from a fixed queue and records every URL asked for.
pub struct ScriptedFetcher {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetcher for ScriptedFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Transport(message)) => Err(IssError::transport(
                url,
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message),
            )),
            None => Err(IssError::transport(
                url,
                std::io::Error::new(std::io::ErrorKind::Other, "no scripted reply left"),
            )),
        }
    }
}
