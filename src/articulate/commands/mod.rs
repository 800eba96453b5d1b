use crate::config::ArticulateConfig;
use crate::model::Card;
use crate::render::CardView;
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod config;
pub mod export;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub pages: usize,
    pub cards: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Card>,
    pub listed_cards: Vec<CardView>,
    pub export: Option<ExportSummary>,
    pub config: Option<ArticulateConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Card>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<CardView>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_config(mut self, config: ArticulateConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is an error, which the CLI turns into a failing
    /// exit status.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
