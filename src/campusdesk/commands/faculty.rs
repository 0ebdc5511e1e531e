use crate::commands::helpers::{confirm_and_delete, ensure_image, upload_image};
use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::{DeskError, Result};
use crate::index::{index_records, Selector};
use crate::model::{FacultyMember, NewFacultyMember};
use crate::records::RecordStore;
use crate::store::KeyValueStore;
use crate::upload::{AssetFolder, SelectedFile, Uploader};
use std::time::Duration;

/// What the user typed into the "add faculty member" form.
#[derive(Debug, Clone, Default)]
pub struct FacultyForm {
    pub name: String,
    pub position: String,
    pub qualification: String,
    pub experience: String,
    pub specializations: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub photo: Option<SelectedFile>,
}

impl FacultyForm {
    /// True when name, email or department is blank. The photo is optional
    /// and not considered.
    pub fn missing_required(&self) -> bool {
        [&self.name, &self.email, &self.department]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

pub fn list<S: KeyValueStore>(members: &RecordStore<FacultyMember, S>) -> CmdResult {
    CmdResult::default().with_listed_faculty(index_records(members.list()))
}

/// Validates the form, uploads the photo if one was picked, and records the
/// new member. Name, email and department are required; the photo is not.
pub async fn add<S, U>(
    members: &mut RecordStore<FacultyMember, S>,
    uploader: &U,
    form: FacultyForm,
    timeout: Duration,
) -> Result<CmdResult>
where
    S: KeyValueStore,
    U: Uploader + ?Sized,
{
    if form.missing_required() {
        return Err(DeskError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }
    if let Some(photo) = &form.photo {
        ensure_image(photo)?;
    }

    let (photo_url, cloudinary_id) = match &form.photo {
        Some(photo) => {
            let asset = upload_image(uploader, photo, AssetFolder::Faculty, timeout).await?;
            (asset.url, asset.external_id)
        }
        None => (String::new(), String::new()),
    };

    let member = members.add(NewFacultyMember {
        name: form.name,
        position: form.position,
        qualification: form.qualification,
        experience: form.experience,
        specializations: form.specializations,
        email: form.email,
        phone: form.phone,
        department: form.department,
        photo_url,
        cloudinary_id,
    });

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Faculty member added successfully."));
    result.affected_faculty.push(member);
    Ok(result)
}

pub fn delete<S: KeyValueStore>(
    members: &mut RecordStore<FacultyMember, S>,
    selector: &Selector,
    confirm: &dyn Confirm,
) -> Result<CmdResult> {
    let (removed, message) = confirm_and_delete(
        members,
        selector,
        confirm,
        |name| format!("Are you sure you want to remove {} from the faculty list?", name),
        "Faculty member removed successfully.",
    )?;

    let mut result = CmdResult::default();
    result.affected_faculty.extend(removed);
    result.messages.extend(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MessageLog;
    use crate::store::memory::InMemoryStore;
    use crate::upload::MockUploader;
    use std::rc::Rc;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn setup() -> (Rc<InMemoryStore>, RecordStore<FacultyMember, InMemoryStore>) {
        let store = Rc::new(InMemoryStore::new());
        let members = RecordStore::open(store.clone(), Rc::new(MessageLog::new()));
        (store, members)
    }

    fn form(name: &str, email: &str, department: &str) -> FacultyForm {
        FacultyForm {
            name: name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            ..Default::default()
        }
    }

    fn uploader() -> MockUploader {
        MockUploader::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn add_without_photo_leaves_photo_fields_empty() {
        let (_, mut members) = setup();
        let result = add(
            &mut members,
            &uploader(),
            form("Dr. Lee", "lee@x.edu", "Mathematics"),
            TIMEOUT,
        )
        .await
        .unwrap();

        let lee = &result.affected_faculty[0];
        assert!(lee.id.starts_with("faculty_"));
        assert_eq!(lee.department, "Mathematics");
        assert_eq!(lee.photo_url, "");
        assert_eq!(lee.cloudinary_id, "");
        assert_eq!(members.len(), 1);
    }

    #[tokio::test]
    async fn add_with_photo_uploads_it() {
        let (_, mut members) = setup();
        let mut with_photo = form("Dr. Ng", "ng@x.edu", "Physics");
        with_photo.photo = Some(SelectedFile::new("ng.jpg", "image/jpeg", vec![0xff, 0xd8]));

        let result = add(&mut members, &uploader(), with_photo, TIMEOUT)
            .await
            .unwrap();
        let ng = &result.affected_faculty[0];
        assert_eq!(ng.photo_url, "data:image/jpeg;base64,/9g=");
        assert!(ng.cloudinary_id.starts_with("faculty_"));
    }

    #[tokio::test]
    async fn each_required_field_is_enforced() {
        let (store, mut members) = setup();
        for incomplete in [
            form("", "lee@x.edu", "Mathematics"),
            form("Dr. Lee", " ", "Mathematics"),
            form("Dr. Lee", "lee@x.edu", ""),
        ] {
            let err = add(&mut members, &uploader(), incomplete, TIMEOUT)
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Please fill in all required fields.");
        }
        assert!(members.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn non_image_photo_is_rejected_before_upload() {
        let (store, mut members) = setup();
        let mut bad = form("Dr. Lee", "lee@x.edu", "Mathematics");
        bad.photo = Some(SelectedFile::new("cv.pdf", "application/pdf", vec![1]));

        let err = add(&mut members, &uploader(), bad, TIMEOUT).await.unwrap_err();
        assert!(matches!(err, DeskError::Validation(_)));
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn lee_then_ng_then_delete_lee() {
        let (_, mut members) = setup();
        let lee = add(
            &mut members,
            &uploader(),
            form("Dr. Lee", "lee@x.edu", "Mathematics"),
            TIMEOUT,
        )
        .await
        .unwrap()
        .affected_faculty
        .remove(0);
        let ng = add(
            &mut members,
            &uploader(),
            form("Dr. Ng", "ng@x.edu", "Physics"),
            TIMEOUT,
        )
        .await
        .unwrap()
        .affected_faculty
        .remove(0);

        assert_eq!(members.list()[0].id, ng.id);
        assert_eq!(members.list()[1].id, lee.id);

        let result = delete(&mut members, &Selector::Id(lee.id.clone()), &|prompt: &str| {
            prompt == "Are you sure you want to remove Dr. Lee from the faculty list?"
        })
        .unwrap();

        assert_eq!(result.messages[0].content, "Faculty member removed successfully.");
        assert_eq!(members.list(), &[ng]);
    }
}
