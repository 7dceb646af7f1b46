use bytes::Bytes;
use glam::Vec2;
use pdfium_render::prelude::{PdfDocument, Pdfium};
use serde::Serialize;
use snafu::ResultExt;
use tokio::sync::oneshot;
use tracing::*;
use uuid::Uuid;

use crate::{
    analysis::reading_order,
    error::{DecodeSnafu, PageAccessSnafu, SyllexError},
    layout::fragment::TextFragment,
};

use super::{Task, course, period};

/// Structured record extracted from the first page of a syllabus.
///
/// Both fields carry documented "not found" sentinels instead of erroring:
/// a course code of `0` and an absent academic code are valid outcomes that
/// the caller must handle explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusData {
    pub course_code: u32,
    pub academic_code: Option<String>,
}

/// Extraction options.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Drop control characters from fragment text before reconstruction.
    pub trim_control_chars: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            trim_control_chars: true,
        }
    }
}

pub struct ExtractTask {
    pub document: Bytes,
    pub task_id: Uuid,
    pub password: Option<String>,
    pub config: ExtractConfig,
    pub sender: oneshot::Sender<Result<SyllabusData, SyllexError>>,
    pub span: Span,
}

impl<'a> Task<'a> for ExtractTask {
    type Output = SyllabusData;
    type Extra = &'a Pdfium;

    fn run(&self, pdfium: Self::Extra) -> Result<Self::Output, SyllexError> {
        let _guard = self.span.enter();

        let task_id = self.task_id.to_string();
        info!("start extract task for pdf {task_id}.");

        let document = pdfium
            .load_pdf_from_byte_slice(&self.document, self.password.as_deref())
            .context(DecodeSnafu { stage: "load-pdf" })?;

        let fragments = first_page_fragments(&document, &self.config)?;
        info!(
            "pdf {task_id} page 0 holds {} text fragments.",
            fragments.len()
        );

        let page_text = reading_order::reconstruct(fragments);
        let data = extract_fields(&page_text);

        info!(
            "extracted pdf {task_id}: course {}, period {:?}.",
            data.course_code, data.academic_code
        );

        Ok(data)
    }
}

/// Reads the storage-ordered text fragments of the document's first page.
///
/// Only page index 0 is consulted. A document without pages fails with
/// [`SyllexError::PageAccess`]; decoding an image-heavy first page may be
/// memory-intensive, which is acceptable since only its text layer is used.
pub fn first_page_fragments(
    document: &PdfDocument<'_>,
    config: &ExtractConfig,
) -> Result<Vec<TextFragment>, SyllexError> {
    let pages = document.pages();
    if pages.len() == 0 {
        return PageAccessSnafu { page: 0u16 }.fail();
    }

    let page = pages.get(0).context(DecodeSnafu { stage: "get-page" })?;
    let text = page.text().context(DecodeSnafu { stage: "text" })?;

    let fragments = text
        .segments()
        .iter()
        .map(|segment| {
            let bounds = segment.bounds();
            let mut content = segment.text();
            if config.trim_control_chars {
                content.retain(|c| !c.is_control());
            }

            TextFragment::new(content, Vec2::new(bounds.left.value, bounds.bottom.value))
        })
        .collect();

    Ok(fragments)
}

/// Runs both field chains over the reconstructed page text and packages the
/// result.
///
/// The chains are evaluated independently and do not influence each other's
/// outcome; no validation is applied beyond what each chain already
/// guarantees.
pub fn extract_fields(page_text: &str) -> SyllabusData {
    SyllabusData {
        course_code: course::extract_course_code(page_text),
        academic_code: period::extract_academic_code(page_text),
    }
}
