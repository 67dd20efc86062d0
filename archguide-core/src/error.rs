//! Errors from the checked entry points of the view state machine.

use thiserror::Error;

use crate::section::SectionId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown section '{0}'")]
    UnknownSection(String),
    #[error("security layer {index} out of range (have {len})")]
    LayerOutOfRange { index: usize, len: usize },
    #[error("layers can only be toggled in the security section (current: {0})")]
    LayerOutsideSecurity(SectionId),
}
