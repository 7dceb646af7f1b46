use glam::Vec2;
use serde::Serialize;

/// One positioned run of text as stored in a page content stream.
///
/// The position is the fragment's bottom-left corner in PDF user space,
/// where y grows upward. Fragments arrive in storage order, which has no
/// relation to the order a human would read them in.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub pos: Vec2,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, pos: Vec2) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}
