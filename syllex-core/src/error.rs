use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SyllexError {
    #[snafu(display("Decode pdf at `{}` error: {}", stage, source))]
    Decode {
        source: pdfium_render::prelude::PdfiumError,
        stage: String,
    },
    #[snafu(display("Page access error: document has no page {}", page))]
    PageAccess { page: u16 },
    #[snafu(display("Pdfium `{}` error {}", stage, source))]
    Pdfium {
        source: pdfium_render::prelude::PdfiumError,
        stage: String,
    },
    #[snafu(display("Environment `{}` Not Found, error {}", name, source))]
    EnvNotFound {
        source: std::env::VarError,
        name: String,
    },
    #[snafu(display("Extraction worker gone at `{}`", stage))]
    WorkerGone { stage: String },
}
