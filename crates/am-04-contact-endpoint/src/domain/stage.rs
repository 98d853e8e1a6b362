//! Per-request pipeline stages.

use std::fmt;

/// Last stage a request reached. Logged with every failure.
///
/// `received → validated → bot-checked → mail-dispatched → responded`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    Validated,
    BotChecked,
    MailDispatched,
    Responded,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Received => "received",
            PipelineStage::Validated => "validated",
            PipelineStage::BotChecked => "bot-checked",
            PipelineStage::MailDispatched => "mail-dispatched",
            PipelineStage::Responded => "responded",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
