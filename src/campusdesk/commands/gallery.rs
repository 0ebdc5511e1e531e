use crate::commands::helpers::{confirm_and_delete, ensure_image, upload_image};
use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::{DeskError, Result};
use crate::index::{index_records, Selector};
use crate::model::{GalleryItem, NewGalleryItem};
use crate::records::RecordStore;
use crate::store::KeyValueStore;
use crate::upload::{AssetFolder, SelectedFile, Uploader};
use std::time::Duration;

/// What the user typed into the "add image" form.
#[derive(Debug, Clone, Default)]
pub struct GalleryForm {
    pub name: String,
    pub description: String,
    pub file: Option<SelectedFile>,
}

impl GalleryForm {
    /// True when a typed field `add` requires is blank. The file is not
    /// considered, so callers can check before reading it.
    pub fn missing_required(&self) -> bool {
        self.name.trim().is_empty()
    }
}

pub fn list<S: KeyValueStore>(items: &RecordStore<GalleryItem, S>) -> CmdResult {
    CmdResult::default().with_listed_gallery(index_records(items.list()))
}

/// Validates the form, uploads the image and records the new item.
///
/// Nothing is stored unless the upload succeeds.
pub async fn add<S, U>(
    items: &mut RecordStore<GalleryItem, S>,
    uploader: &U,
    form: GalleryForm,
    timeout: Duration,
) -> Result<CmdResult>
where
    S: KeyValueStore,
    U: Uploader + ?Sized,
{
    let missing_name = form.missing_required();
    let name = form.name.trim();
    let file = match form.file {
        Some(file) if !missing_name => file,
        _ => {
            return Err(DeskError::Validation(
                "Please provide a name and select an image.".to_string(),
            ))
        }
    };
    ensure_image(&file)?;

    let asset = upload_image(uploader, &file, AssetFolder::Gallery, timeout).await?;
    let item = items.add(NewGalleryItem {
        name: name.to_string(),
        description: form.description.trim().to_string(),
        image_url: asset.url,
        cloudinary_id: asset.external_id,
    });

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Image uploaded to gallery successfully.",
    ));
    result.affected_gallery.push(item);
    Ok(result)
}

pub fn delete<S: KeyValueStore>(
    items: &mut RecordStore<GalleryItem, S>,
    selector: &Selector,
    confirm: &dyn Confirm,
) -> Result<CmdResult> {
    let (removed, message) = confirm_and_delete(
        items,
        selector,
        confirm,
        |name| format!("Are you sure you want to delete \"{}\"?", name),
        "Gallery item removed successfully.",
    )?;

    let mut result = CmdResult::default();
    result.affected_gallery.extend(removed);
    result.messages.extend(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MessageLog;
    use crate::store::memory::InMemoryStore;
    use crate::upload::{MockUploader, UploadedAsset};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TIMEOUT: Duration = Duration::from_secs(5);

    struct FailingUploader;

    #[async_trait(?Send)]
    impl Uploader for FailingUploader {
        async fn upload(&self, _: &SelectedFile, _: AssetFolder) -> Result<UploadedAsset> {
            Err(DeskError::Store("asset host unreachable".to_string()))
        }
    }

    fn setup() -> (Rc<InMemoryStore>, RecordStore<GalleryItem, InMemoryStore>) {
        let store = Rc::new(InMemoryStore::new());
        let items = RecordStore::open(store.clone(), Rc::new(MessageLog::new()));
        (store, items)
    }

    fn form(name: &str) -> GalleryForm {
        GalleryForm {
            name: name.to_string(),
            description: "  Main quad at dawn  ".to_string(),
            file: Some(SelectedFile::new("quad.png", "image/png", vec![1, 2, 3])),
        }
    }

    fn uploader() -> MockUploader {
        MockUploader::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn add_uploads_then_records() {
        let (_, mut items) = setup();
        let result = add(&mut items, &uploader(), form("  Quad  "), TIMEOUT)
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        let item = &result.affected_gallery[0];
        assert_eq!(item.name, "Quad");
        assert_eq!(item.description, "Main quad at dawn");
        assert_eq!(item.image_url, "data:image/png;base64,AQID");
        assert!(item.cloudinary_id.starts_with("mock_"));
        assert_eq!(result.messages[0].content, "Image uploaded to gallery successfully.");
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_writing() {
        let (store, mut items) = setup();
        let err = add(&mut items, &uploader(), form("   "), TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(err, DeskError::Validation(_)));
        assert!(items.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn missing_file_is_rejected() {
        let (_, mut items) = setup();
        let mut no_file = form("Quad");
        no_file.file = None;
        let err = add(&mut items, &uploader(), no_file, TIMEOUT)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please provide a name and select an image.");
    }

    #[tokio::test]
    async fn failed_upload_creates_nothing() {
        let (store, mut items) = setup();
        let err = add(&mut items, &FailingUploader, form("Quad"), TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(err, DeskError::Upload(_)));
        assert!(items.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn delete_by_index_after_confirmation() {
        let (_, mut items) = setup();
        add(&mut items, &uploader(), form("First"), TIMEOUT).await.unwrap();
        add(&mut items, &uploader(), form("Second"), TIMEOUT).await.unwrap();

        let asked = RefCell::new(Vec::new());
        let confirm = |prompt: &str| {
            asked.borrow_mut().push(prompt.to_string());
            true
        };
        let result = delete(&mut items, &Selector::Index(1), &confirm).unwrap();

        assert_eq!(
            asked.borrow().as_slice(),
            &["Are you sure you want to delete \"Second\"?"]
        );
        assert_eq!(result.affected_gallery[0].name, "Second");
        assert_eq!(items.len(), 1);
        assert_eq!(items.list()[0].name, "First");
    }

    #[tokio::test]
    async fn declined_confirmation_keeps_the_item() {
        let (store, mut items) = setup();
        add(&mut items, &uploader(), form("Keep"), TIMEOUT).await.unwrap();
        let writes = store.writes();

        let result = delete(&mut items, &Selector::Index(1), &|_: &str| false).unwrap();

        assert_eq!(items.len(), 1);
        assert!(result.affected_gallery.is_empty());
        assert_eq!(result.messages[0].content, "Deletion cancelled.");
        assert_eq!(store.writes(), writes);
    }

    #[tokio::test]
    async fn unknown_id_is_silently_ignored() {
        let (_, mut items) = setup();
        add(&mut items, &uploader(), form("Keep"), TIMEOUT).await.unwrap();

        let result = delete(
            &mut items,
            &Selector::Id("gallery_0_nothing".to_string()),
            &|_: &str| -> bool { panic!("should not ask") },
        )
        .unwrap();

        assert!(result.messages.is_empty());
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn only_the_name_is_required_before_reading_a_file() {
        let blank = GalleryForm {
            name: "  ".into(),
            ..Default::default()
        };
        assert!(blank.missing_required());

        let named = GalleryForm {
            name: "Quad".into(),
            ..Default::default()
        };
        assert!(!named.missing_required());
    }

    #[test]
    fn list_numbers_newest_first() {
        let (_, mut items) = setup();
        for name in ["a", "b"] {
            items.add(NewGalleryItem {
                name: name.into(),
                ..Default::default()
            });
        }
        let result = list(&items);
        assert_eq!(result.listed_gallery[0].index, 1);
        assert_eq!(result.listed_gallery[0].record.name, "b");
        assert_eq!(result.listed_gallery[1].record.name, "a");
    }
}
