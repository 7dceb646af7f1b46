/// Vertical tolerance, in PDF layout units, for grouping fragments on a line.
///
/// A PDF content stream may emit the fragments of one printed line in
/// arbitrary order, and lines are only separated by vertical displacement.
/// Two fragments whose vertical positions differ by no more than this value
/// are treated as belonging to the same printed line, and are ordered by
/// their horizontal position instead.
///
/// The value is part of the extraction contract: changing it changes which
/// fragments merge into a line, and therefore the reconstructed text that
/// the field strategies match against.
pub const LINE_TOLERANCE: f32 = 5.0;

/// Sentinel course code returned when no extraction strategy matches.
///
/// This is a documented "not found" value, not an error. Callers must treat
/// it as "extraction incomplete" and prompt for manual correction rather
/// than assuming success.
pub const COURSE_CODE_NOT_FOUND: u32 = 0;

/// Length, in ASCII digits, of a well-formed academic-period code.
///
/// The code is conventionally `YYYY` + a 1-digit semester marker + one
/// trailing digit (e.g. `202510` for the first semester of 2025). Every
/// strategy in the period chain either produces exactly this many digits or
/// produces nothing.
pub const ACADEMIC_CODE_LEN: usize = 6;

/// Number of characters scanned after a period label match.
///
/// The label-anchored fallback strategy takes this many characters following
/// the matched label and searches their digit content for a period code.
/// Larger windows risk picking up unrelated numbers further down the page;
/// smaller ones miss codes separated from their label by filler text.
pub const PERIOD_SCAN_WINDOW: usize = 50;

/// Capacity of the extraction task channel.
///
/// Submissions beyond this many pending tasks apply backpressure on the
/// caller until the worker catches up.
pub const MAX_PENDING_EXTRACTIONS: usize = 32;

/// Environment variable holding the directory of the pdfium dynamic library.
pub const PDFIUM_LIB_PATH_ENV_NAME: &str = "PDFIUM_DYNAMIC_LIB_PATH";
