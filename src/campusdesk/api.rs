//! # API Facade
//!
//! [`DeskApi`] is the composition root of the desk. It owns everything the
//! commands need and nothing is global:
//!
//! - both record stores, sharing one durable store handle
//! - the uploader
//! - the log that collects notices from the durable cells
//! - the configuration and paths
//! - the current [`View`], which is session state and never persisted
//!
//! Each method dispatches to a function in `commands/`, normalizing inputs
//! (selector strings become [`Selector`]s) and folding pending notices into
//! the returned [`CmdResult`]. No business logic lives here.
//!
//! ## Generic over the store and the uploader
//!
//! - Production: `DeskApi<FileStore, MockUploader>`
//! - Testing: `DeskApi<InMemoryStore, MockUploader>` with no upload delay

use crate::commands::{self, Confirm};
use crate::config::DeskConfig;
use crate::error::{DeskError, Result};
use crate::index::Selector;
use crate::model::{FacultyMember, GalleryItem};
use crate::notify::MessageLog;
use crate::records::RecordStore;
use crate::store::KeyValueStore;
use crate::upload::Uploader;
use std::rc::Rc;
use std::str::FromStr;

/// The three screens of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Gallery,
    Faculty,
}

impl FromStr for View {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" | "home" => Ok(View::Dashboard),
            "gallery" => Ok(View::Gallery),
            "faculty" => Ok(View::Faculty),
            other => Err(DeskError::Api(format!("Unknown view: {}", other))),
        }
    }
}

pub struct DeskApi<S: KeyValueStore, U: Uploader> {
    gallery: RecordStore<GalleryItem, S>,
    faculty: RecordStore<FacultyMember, S>,
    uploader: U,
    notices: Rc<MessageLog>,
    paths: commands::DeskPaths,
    config: DeskConfig,
    view: View,
}

impl<S: KeyValueStore, U: Uploader> DeskApi<S, U> {
    pub fn new(
        store: Rc<S>,
        uploader: U,
        paths: commands::DeskPaths,
        config: DeskConfig,
    ) -> Self {
        let notices = Rc::new(MessageLog::new());
        let gallery = RecordStore::open(store.clone(), notices.clone());
        let faculty = RecordStore::open(store, notices.clone());
        Self {
            gallery,
            faculty,
            uploader,
            notices,
            paths,
            config,
            view: View::default(),
        }
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    /// Switches screens and returns what the new screen shows.
    pub fn navigate(&mut self, view: View) -> CmdResult {
        self.view = view;
        self.show()
    }

    pub fn show(&self) -> CmdResult {
        let result = match self.view {
            View::Dashboard => commands::dashboard::run(&self.gallery, &self.faculty),
            View::Gallery => commands::gallery::list(&self.gallery),
            View::Faculty => commands::faculty::list(&self.faculty),
        };
        self.with_notices(result)
    }

    pub async fn add_gallery_item(&mut self, form: GalleryForm) -> Result<CmdResult> {
        let timeout = self.config.upload_timeout();
        let result =
            commands::gallery::add(&mut self.gallery, &self.uploader, form, timeout).await?;
        Ok(self.with_notices(result))
    }

    pub fn delete_gallery_item(
        &mut self,
        selector: &str,
        confirm: &dyn Confirm,
    ) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        let result = commands::gallery::delete(&mut self.gallery, &selector, confirm)?;
        Ok(self.with_notices(result))
    }

    pub async fn add_faculty_member(&mut self, form: FacultyForm) -> Result<CmdResult> {
        let timeout = self.config.upload_timeout();
        let result =
            commands::faculty::add(&mut self.faculty, &self.uploader, form, timeout).await?;
        Ok(self.with_notices(result))
    }

    pub fn delete_faculty_member(
        &mut self,
        selector: &str,
        confirm: &dyn Confirm,
    ) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        let result = commands::faculty::delete(&mut self.faculty, &selector, confirm)?;
        Ok(self.with_notices(result))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::DeskPaths {
        &self.paths
    }

    /// Notices reported since the last command, for callers whose command
    /// failed before they could be attached to a result.
    pub fn take_notices(&self) -> Vec<CmdMessage> {
        self.notices.drain()
    }

    fn with_notices(&self, mut result: CmdResult) -> CmdResult {
        let mut messages = self.notices.drain();
        messages.append(&mut result.messages);
        result.messages = messages;
        result
    }
}

fn parse_selector(input: &str) -> Result<Selector> {
    Selector::from_str(input).map_err(DeskError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::faculty::FacultyForm;
pub use crate::commands::gallery::GalleryForm;
pub use crate::commands::{CmdResult, DeskPaths, Summary};
pub use crate::notify::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::upload::{MockUploader, SelectedFile};
    use std::path::PathBuf;
    use std::time::Duration;

    type TestApi = DeskApi<InMemoryStore, MockUploader>;

    fn api_with(store: InMemoryStore) -> (Rc<InMemoryStore>, TestApi) {
        let store = Rc::new(store);
        let api = DeskApi::new(
            store.clone(),
            MockUploader::new(Duration::ZERO),
            DeskPaths::new(PathBuf::from("/nonexistent/campusdesk")),
            DeskConfig::default(),
        );
        (store, api)
    }

    fn picture(name: &str) -> GalleryForm {
        GalleryForm {
            name: name.to_string(),
            description: String::new(),
            file: Some(SelectedFile::new("p.png", "image/png", vec![0])),
        }
    }

    #[test]
    fn starts_on_the_dashboard() {
        let (_, api) = api_with(InMemoryStore::new());
        assert_eq!(api.current_view(), View::Dashboard);
        assert!(api.show().summary.is_some());
    }

    #[test]
    fn navigate_switches_what_show_returns() {
        let (_, mut api) = api_with(InMemoryStore::new());

        let gallery = api.navigate(View::Gallery);
        assert!(gallery.summary.is_none());
        assert_eq!(api.current_view(), View::Gallery);

        api.navigate(View::Faculty);
        assert_eq!(api.current_view(), View::Faculty);
    }

    #[test]
    fn parses_view_names() {
        assert_eq!("Gallery".parse::<View>().unwrap(), View::Gallery);
        assert_eq!("home".parse::<View>().unwrap(), View::Dashboard);
        assert!("settings".parse::<View>().is_err());
    }

    #[tokio::test]
    async fn add_and_delete_dispatch_to_the_gallery() {
        let (store, mut api) = api_with(InMemoryStore::new());
        api.add_gallery_item(picture("Quad")).await.unwrap();
        assert!(store.raw("gallery-items").unwrap().contains("Quad"));

        let result = api.delete_gallery_item("1", &|_: &str| true).unwrap();
        assert_eq!(result.affected_gallery[0].name, "Quad");
        assert_eq!(api.show().summary.unwrap().gallery_count, 0);
    }

    #[tokio::test]
    async fn add_dispatches_to_the_faculty() {
        let (store, mut api) = api_with(InMemoryStore::new());
        let form = FacultyForm {
            name: "Dr. Lee".into(),
            email: "lee@x.edu".into(),
            department: "Mathematics".into(),
            ..Default::default()
        };
        api.add_faculty_member(form).await.unwrap();
        assert!(store.raw("faculty-members").unwrap().contains("Dr. Lee"));
        assert_eq!(api.show().summary.unwrap().faculty_count, 1);
    }

    #[test]
    fn invalid_selector_is_an_api_error() {
        let (_, mut api) = api_with(InMemoryStore::new());
        let err = api.delete_faculty_member("0", &|_: &str| true).unwrap_err();
        assert!(matches!(err, DeskError::Api(_)));
    }

    #[test]
    fn corrupt_collection_is_reported_on_first_result() {
        let (_, api) = api_with(InMemoryStore::new().with_raw("gallery-items", "not json"));

        let first = api.show();
        assert_eq!(first.messages.len(), 1);
        assert_eq!(first.messages[0].level, MessageLevel::Warning);
        assert_eq!(first.summary.unwrap().gallery_count, 0);

        assert!(api.show().messages.is_empty());
    }

    #[tokio::test]
    async fn failed_write_surfaces_as_error_notice() {
        let (store, mut api) = api_with(InMemoryStore::new());
        store.set_simulate_write_error(true);

        let result = api.add_gallery_item(picture("Unsaved")).await.unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[1].level, MessageLevel::Success);
        assert_eq!(api.show().summary.unwrap().gallery_count, 1);
        assert!(store.raw("gallery-items").is_none());
    }
}
