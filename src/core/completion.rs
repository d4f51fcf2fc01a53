use crate::domain::model::PassTime;
use crate::utils::error::{IssError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

/// Hands a run's outcome to a two-argument completion function.
///
/// Exactly one of the two arguments is `Some`.
pub fn deliver<F>(result: Result<Vec<PassTime>>, callback: F)
where
    F: FnOnce(Option<IssError>, Option<Vec<PassTime>>),
{
    match result {
        Ok(passes) => callback(None, Some(passes)),
        Err(e) => callback(Some(e), None),
    }
}

/// An already-started lookup that resolves once with its outcome.
///
/// Dropping the promise does not stop the run.
#[derive(Debug)]
pub struct PassTimesPromise {
    handle: JoinHandle<Result<Vec<PassTime>>>,
}

impl PassTimesPromise {
    pub fn spawn<Fut>(run: Fut) -> Self
    where
        Fut: Future<Output = Result<Vec<PassTime>>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(run),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Future for PassTimesPromise {
    type Output = Result<Vec<PassTime>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(join_error)) => Poll::Ready(Err(IssError::TaskError {
                message: join_error.to_string(),
            })),
        }
    }
}
