use bytes::Bytes;
use pdfium_render::prelude::Pdfium;
use snafu::ResultExt;
use tokio::{
    sync::{
        mpsc::{self, Receiver, Sender},
        oneshot,
    },
    task,
};
use tracing::*;
use uuid::Uuid;

use crate::{consts::*, error::*};

use super::{
    Task,
    tasks::{ExtractConfig, ExtractTask, SyllabusData},
};

/// extract queue
///
/// Owns the pdfium binding on a dedicated blocking worker thread; callers
/// submit documents over a bounded channel and await the result of each
/// extraction through its own oneshot. Concurrent submissions are
/// independent and share no mutable state.
pub struct ExtractQueue {
    extract_queue: Sender<ExtractTask>,
    config: ExtractConfig,
}

impl ExtractQueue {
    pub async fn new() -> Result<Self, SyllexError> {
        Self::with_config(ExtractConfig::default()).await
    }

    pub async fn with_config(config: ExtractConfig) -> Result<Self, SyllexError> {
        let (extract_sender, extract_rx) =
            mpsc::channel::<ExtractTask>(MAX_PENDING_EXTRACTIONS);

        task::spawn_blocking(move || {
            pdf_extract(extract_rx).map_err(|err| {
                error!("init pdfium error: {}", err);
            })
        });

        Ok(Self {
            extract_queue: extract_sender,
            config,
        })
    }

    /// Extracts the syllabus fields from one in-memory PDF document.
    ///
    /// The buffer must hold a complete PDF file; enforcing a maximum size
    /// and MIME type is the caller's responsibility. Dropping the returned
    /// future before completion abandons the extraction with nothing to
    /// clean up.
    pub async fn extract(&self, document: Bytes) -> Result<SyllabusData, SyllexError> {
        self.extract_with_password(document, None).await
    }

    pub async fn extract_with_password(
        &self,
        document: Bytes,
        password: Option<String>,
    ) -> Result<SyllabusData, SyllexError> {
        let (sender, receiver) = oneshot::channel();

        let task = ExtractTask {
            document,
            task_id: Uuid::new_v4(),
            password,
            config: self.config.clone(),
            sender,
            span: Span::current(),
        };

        self.extract_queue
            .send(task)
            .await
            .map_err(|_| SyllexError::WorkerGone {
                stage: "enqueue".to_string(),
            })?;

        receiver.await.map_err(|_| SyllexError::WorkerGone {
            stage: "await-result".to_string(),
        })?
    }
}

fn pdf_extract(mut extract_rx: Receiver<ExtractTask>) -> Result<(), SyllexError> {
    let pdfium_lib_path = std::env::var(PDFIUM_LIB_PATH_ENV_NAME).context(EnvNotFoundSnafu {
        name: PDFIUM_LIB_PATH_ENV_NAME,
    })?;
    let pdfium = Pdfium::new(
        Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
            &pdfium_lib_path,
        ))
        .context(PdfiumSnafu {
            stage: "load-dyn-lib",
        })?,
    );

    while let Some(extract_task) = extract_rx.blocking_recv() {
        let result = extract_task.run(&pdfium);
        if let Err(err) = &result {
            error!("extract task {} failed: {}", extract_task.task_id, err);
        }

        let ExtractTask {
            sender, task_id, ..
        } = extract_task;
        if sender.send(result).is_err() {
            // Caller dropped the pending extraction; nothing to clean up.
            debug!("extract task {task_id} result dropped by caller");
        }
    }

    Ok(())
}
