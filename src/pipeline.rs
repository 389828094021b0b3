use crate::content_type::file_extension;
use crate::error::{CatScraperError, Result};
use crate::models::{DownloadJob, DownloadOutcome};
use crate::traits::{FileSystem, HttpGetter};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

/// Upper bound on concurrent downloads.
pub const MAX_WORKERS: usize = 5;

/// Downloads a list of image URLs into numbered files using a fixed pool of workers.
///
/// Every job is queued before the workers start pulling. Each worker reports
/// one outcome per job on a channel sized to the job count, so neither side
/// ever waits on the other. Files are named after the job index, so the
/// result on disk does not depend on completion order.
#[derive(Clone)]
pub struct DownloadPipeline {
    getter: Arc<dyn HttpGetter>,
    file_system: Arc<dyn FileSystem>,
    show_progress: bool,
}

impl DownloadPipeline {
    pub fn new(getter: Arc<dyn HttpGetter>, file_system: Arc<dyn FileSystem>) -> Self {
        Self {
            getter,
            file_system,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Downloads `urls` into `base_path/{1..N}.{ext}`, returning the written
    /// paths in input order.
    ///
    /// The first failure seen while draining outcomes is returned. Jobs that
    /// are already queued keep running in the background and their files
    /// stay on disk.
    pub async fn download(
        &self,
        urls: &[String],
        base_path: &Path,
        workers: usize,
    ) -> Result<Vec<PathBuf>> {
        if workers == 0 {
            return Err(CatScraperError::InvalidWorkerCount(workers));
        }
        let workers = if workers > MAX_WORKERS {
            warn!(
                "Requested {} workers, limiting to {}",
                workers, MAX_WORKERS
            );
            MAX_WORKERS
        } else {
            workers
        };

        self.file_system
            .create_dir_all(base_path)
            .await
            .map_err(|source| CatScraperError::CreateDir {
                path: base_path.to_path_buf(),
                source,
            })?;

        let num_jobs = urls.len();
        if num_jobs == 0 {
            info!("No images to download");
            return Ok(Vec::new());
        }

        let jobs: VecDeque<DownloadJob> = urls
            .iter()
            .enumerate()
            // Number files from 1
            .map(|(i, url)| DownloadJob::new(i + 1, url.clone(), base_path))
            .collect();
        let jobs = Arc::new(Mutex::new(jobs));
        let (outcome_tx, mut outcome_rx) = mpsc::channel(num_jobs);

        for id in 1..=workers.min(num_jobs) {
            let worker = Worker {
                id,
                getter: Arc::clone(&self.getter),
                file_system: Arc::clone(&self.file_system),
                jobs: Arc::clone(&jobs),
                outcomes: outcome_tx.clone(),
            };
            tokio::spawn(worker.run());
        }
        drop(outcome_tx);

        let progress = self.progress_bar(num_jobs);
        let mut written: Vec<Option<PathBuf>> = vec![None; num_jobs];

        for received in 0..num_jobs {
            let outcome = outcome_rx.recv().await.ok_or(CatScraperError::WorkersGone {
                expected: num_jobs,
                received,
            })?;
            progress.inc(1);

            match outcome.result {
                Ok(path) => written[outcome.index - 1] = Some(path),
                Err(e) => {
                    progress.abandon_with_message("Download failed");
                    return Err(e);
                }
            }
        }

        progress.finish_with_message("Download completed");
        info!("Downloaded {} images to {:?}", num_jobs, base_path);

        Ok(written.into_iter().flatten().collect())
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());

        let pb = ProgressBar::new(len as u64);
        pb.set_style(style);
        pb
    }
}

struct Worker {
    id: usize,
    getter: Arc<dyn HttpGetter>,
    file_system: Arc<dyn FileSystem>,
    jobs: Arc<Mutex<VecDeque<DownloadJob>>>,
    outcomes: mpsc::Sender<DownloadOutcome>,
}

impl Worker {
    async fn run(self) {
        loop {
            let job = self.jobs.lock().await.pop_front();
            let Some(job) = job else {
                break;
            };

            debug!("[WORKER {}] Downloading image {}: {}", self.id, job.index, job.url);

            let result = self
                .download(&job)
                .await
                .map_err(|e| CatScraperError::image_download(&job.url, e));

            let outcome = DownloadOutcome {
                index: job.index,
                result,
            };
            if self.outcomes.send(outcome).await.is_err() {
                debug!(
                    "[WORKER {}] Outcome for image {} dropped, download already failed",
                    self.id, job.index
                );
            }
        }
    }

    async fn download(&self, job: &DownloadJob) -> Result<PathBuf> {
        let mut response = self
            .getter
            .get(&job.url)
            .await
            .map_err(|e| CatScraperError::Get(Box::new(e)))?;

        let status = response.status();
        if status != 200 {
            return Err(CatScraperError::UnexpectedStatus(status));
        }

        let body = response
            .read_body()
            .await
            .map_err(|e| CatScraperError::ReadBody(Box::new(e)))?;

        let extension = file_extension(&response.content_type().unwrap_or_default())?;
        let destination = job.destination(extension);

        self.file_system
            .write_file(&destination, &body)
            .await
            .map_err(CatScraperError::Save)?;

        debug!("[WORKER {}] Saved {:?}", self.id, destination);
        Ok(destination)
    }
}
