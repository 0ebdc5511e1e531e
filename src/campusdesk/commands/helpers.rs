use crate::commands::{CmdMessage, Confirm};
use crate::error::{DeskError, Result};
use crate::index::Selector;
use crate::model::Record;
use crate::records::RecordStore;
use crate::store::KeyValueStore;
use crate::upload::{upload_with_timeout, AssetFolder, SelectedFile, UploadedAsset, Uploader};
use std::time::Duration;

/// Finds the record a selector points at.
///
/// An index past the end of the listing is an error. An id that matches
/// nothing is not: it resolves to `None`.
pub fn resolve<'a, R: Record>(records: &'a [R], selector: &Selector) -> Result<Option<&'a R>> {
    match selector {
        Selector::Index(n) => records
            .get(n.saturating_sub(1))
            .map(Some)
            .ok_or_else(|| DeskError::Api(format!("Index {} not found", n))),
        Selector::Id(id) => Ok(records.iter().find(|r| r.id() == id)),
    }
}

pub fn ensure_image(file: &SelectedFile) -> Result<()> {
    if file.is_image() {
        Ok(())
    } else {
        Err(DeskError::Validation(format!(
            "{} is not an image ({}).",
            file.name, file.mime
        )))
    }
}

/// Uploads an image, folding every failure into [`DeskError::Upload`].
pub async fn upload_image<U: Uploader + ?Sized>(
    uploader: &U,
    file: &SelectedFile,
    folder: AssetFolder,
    timeout: Duration,
) -> Result<UploadedAsset> {
    upload_with_timeout(uploader, file, folder, timeout)
        .await
        .map_err(|e| match e {
            DeskError::Upload(_) => e,
            other => DeskError::Upload(other.to_string()),
        })
}

/// Confirms and deletes one record. Returns the removed record, if any, plus
/// the message to show.
pub fn confirm_and_delete<R, S, Q>(
    store: &mut RecordStore<R, S>,
    selector: &Selector,
    confirm: &dyn Confirm,
    question: Q,
    done: &str,
) -> Result<(Option<R>, Option<CmdMessage>)>
where
    R: Record,
    S: KeyValueStore,
    Q: FnOnce(&str) -> String,
{
    let (id, name) = match resolve(store.list(), selector)? {
        Some(record) => (record.id().to_string(), record.name().to_string()),
        None => return Ok((None, None)),
    };

    if !confirm.confirm(&question(&name)) {
        return Ok((None, Some(CmdMessage::info("Deletion cancelled."))));
    }

    let removed = store.delete(&id);
    let message = removed.as_ref().map(|_| CmdMessage::success(done));
    Ok((removed, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GalleryItem, NewGalleryItem};
    use crate::notify::MessageLog;
    use crate::store::memory::InMemoryStore;
    use std::rc::Rc;

    fn two_items() -> RecordStore<GalleryItem, InMemoryStore> {
        let mut store =
            RecordStore::open(Rc::new(InMemoryStore::new()), Rc::new(MessageLog::new()));
        for name in ["older", "newer"] {
            store.add(NewGalleryItem {
                name: name.into(),
                ..Default::default()
            });
        }
        store
    }

    #[test]
    fn resolve_by_index_is_one_based() {
        let store = two_items();
        let first = resolve(store.list(), &Selector::Index(1)).unwrap().unwrap();
        assert_eq!(first.name, "newer");
    }

    #[test]
    fn resolve_out_of_range_index_fails() {
        let store = two_items();
        assert!(resolve(store.list(), &Selector::Index(3)).is_err());
    }

    #[test]
    fn resolve_unknown_id_is_none() {
        let store = two_items();
        let found = resolve(store.list(), &Selector::Id("gallery_0_x".into())).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn non_images_are_rejected() {
        let file = SelectedFile::new("cv.pdf", "application/pdf", vec![]);
        assert!(matches!(ensure_image(&file), Err(DeskError::Validation(_))));
    }
}
