use crate::error::SyllexError;

pub mod course;
pub mod period;
pub mod queue;
pub mod strategy;
pub mod tasks;

pub trait Task<'a> {
    type Output;
    type Extra: 'a;

    fn run(&self, extra: Self::Extra) -> Result<Self::Output, SyllexError>;
}
