use crate::config::DeskConfig;
use crate::index::DisplayRecord;
use crate::model::{FacultyMember, GalleryItem};
use std::path::PathBuf;

pub mod config;
pub mod dashboard;
pub mod faculty;
pub mod gallery;
pub mod helpers;
pub mod init;

pub use crate::notify::{CmdMessage, MessageLevel};
pub use dashboard::Summary;

#[derive(Debug, Clone)]
pub struct DeskPaths {
    /// Holds `config.json`.
    pub data_dir: PathBuf,
    /// Holds one file per storage key.
    pub store_dir: PathBuf,
}

impl DeskPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        let store_dir = data_dir.join("store");
        Self {
            data_dir,
            store_dir,
        }
    }
}

/// Asks the person at the keyboard a yes/no question.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_gallery: Vec<GalleryItem>,
    pub affected_faculty: Vec<FacultyMember>,
    pub listed_gallery: Vec<DisplayRecord<GalleryItem>>,
    pub listed_faculty: Vec<DisplayRecord<FacultyMember>>,
    pub summary: Option<Summary>,
    pub config: Option<DeskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_gallery(mut self, items: Vec<DisplayRecord<GalleryItem>>) -> Self {
        self.listed_gallery = items;
        self
    }

    pub fn with_listed_faculty(mut self, members: Vec<DisplayRecord<FacultyMember>>) -> Self {
        self.listed_faculty = members;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: DeskConfig) -> Self {
        self.config = Some(config);
        self
    }
}
