use crate::{ClassificationResult, Classifier, PipelineError, StillCamera};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinHandle, spawn_blocking};

type Outcome = Result<ClassificationResult, PipelineError>;

struct Request {
    data: Vec<u8>,
    reply: oneshot::Sender<Outcome>,
}

/// Runs a [`Classifier`] on one dedicated blocking worker.
///
/// Requests are queued and served in order, so at most one classification
/// touches the engine at a time. Dropping the pipeline cancels everything
/// still queued; a classification already running finishes first.
pub struct ClassificationPipeline {
    sender: Option<mpsc::UnboundedSender<Request>>,
    cancel: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
    unknown_label: String,
}

impl ClassificationPipeline {
    /// Move `classifier` onto a new worker. Must be called inside a tokio runtime.
    pub fn start(classifier: Classifier) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let unknown_label = classifier.unknown_label().to_string();

        let join_handle = spawn_blocking({
            let cancel = Arc::clone(&cancel);
            move || run_worker(classifier, receiver, cancel)
        });

        Self {
            sender: Some(sender),
            cancel,
            join_handle: Some(join_handle),
            unknown_label,
        }
    }

    /// Queue one frame. Returns immediately; await the handle for the result.
    pub fn classify(&self, data: Vec<u8>) -> ClassifyHandle {
        let (reply, receiver) = oneshot::channel();
        if let Some(sender) = &self.sender {
            // on failure the request is dropped and the handle resolves to Closed
            let _ = sender.send(Request { data, reply });
        }
        ClassifyHandle { receiver }
    }

    /// Capture a still with `camera` and classify it.
    pub async fn capture_and_classify(&self, camera: &mut impl StillCamera) -> Outcome {
        let data = camera.capture().await?;
        self.classify(data).await
    }

    pub fn unknown_label(&self) -> &str {
        &self.unknown_label
    }

    /// Cancel queued work and wait for the worker to release the engine.
    pub async fn shutdown(mut self) -> Result<(), PipelineError> {
        self.close();
        match self.join_handle.take() {
            Some(handle) => handle
                .await
                .map_err(|e| PipelineError::Worker(e.to_string())),
            None => Ok(()),
        }
    }

    fn close(&mut self) {
        self.cancel.store(true, Ordering::Release);
        self.sender.take();
    }
}

impl Drop for ClassificationPipeline {
    fn drop(&mut self) {
        self.close();
    }
}

fn run_worker(
    mut classifier: Classifier,
    mut receiver: mpsc::UnboundedReceiver<Request>,
    cancel: Arc<AtomicBool>,
) {
    log::info!("classification worker started");
    while let Some(Request { data, reply }) = receiver.blocking_recv() {
        if cancel.load(Ordering::Acquire) {
            let _ = reply.send(Err(PipelineError::Closed));
            continue;
        }
        if reply.is_closed() {
            log::debug!("dropping request whose caller went away");
            continue;
        }
        let outcome = classifier.classify(&data);
        if let Err(err) = &outcome {
            log::warn!("classification failed at {} stage: {err}", err.stage());
        }
        let _ = reply.send(outcome);
    }
    log::info!("classification worker stopped");
}

/// Resolves to the result of one [`ClassificationPipeline::classify`] call.
pub struct ClassifyHandle {
    receiver: oneshot::Receiver<Outcome>,
}

impl Future for ClassifyHandle {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(PipelineError::Closed)))
    }
}
