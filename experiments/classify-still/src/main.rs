use cambio_base::log;
use cambio_classify::{
    CaptureError, ClassificationPipeline, Classifier, ClassifierConfig, LogAnnouncer, StillCamera,
    announce,
};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Replays image files from disk, one per capture.
struct FileCamera {
    paths: VecDeque<PathBuf>,
}

impl StillCamera for FileCamera {
    async fn capture(&mut self) -> Result<Vec<u8>, CaptureError> {
        let path = self
            .paths
            .pop_front()
            .ok_or_else(|| CaptureError::Device("no more images".to_string()))?;
        log::info!("capturing {}", path.display());
        Ok(tokio::fs::read(&path).await?)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cambio_base::init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <config.json> <image>...", args[0]);
        std::process::exit(1);
    }

    let config = ClassifierConfig::from_file(&args[1])?;
    log::info!(
        "model {} ({} backend on {}), labels {}",
        config.model().display(),
        config.backend(),
        config.device()?,
        config.labels().display()
    );
    let classifier = Classifier::load(&config)?;
    log::info!("loaded {} labels", classifier.labels().len());

    let pipeline = ClassificationPipeline::start(classifier);
    let mut camera = FileCamera {
        paths: args[2..].iter().map(PathBuf::from).collect(),
    };
    let mut announcer = LogAnnouncer::new();

    for _ in 2..args.len() {
        let outcome = pipeline.capture_and_classify(&mut camera).await;
        let text = announce(&outcome, &mut announcer, pipeline.unknown_label());
        println!("{text}");
    }

    pipeline.shutdown().await?;
    Ok(())
}
