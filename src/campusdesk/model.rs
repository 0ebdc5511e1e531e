use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Engineering",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Literature",
    "History",
    "Psychology",
    "Business Administration",
];

pub const POSITIONS: &[&str] = &[
    "Professor",
    "Associate Professor",
    "Assistant Professor",
    "Lecturer",
    "Senior Lecturer",
    "Department Head",
    "Dean",
];

/// A record kept in one of the durable collections.
///
/// Records are only ever built from their `Draft` by
/// [`RecordStore::add`](crate::records::RecordStore::add), which is the one
/// place ids and creation times are assigned.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Every field except `id` and `created_at`.
    type Draft;

    /// Key of the durable slot holding the whole collection.
    const STORAGE_KEY: &'static str;

    /// Leading segment of generated ids (`gallery_...`, `faculty_...`).
    const ID_PREFIX: &'static str;

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub cloudinary_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGalleryItem {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub cloudinary_id: String,
}

impl Record for GalleryItem {
    type Draft = NewGalleryItem;

    const STORAGE_KEY: &'static str = "gallery-items";
    const ID_PREFIX: &'static str = "gallery";

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewGalleryItem) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            image_url: draft.image_url,
            cloudinary_id: draft.cloudinary_id,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub qualification: String,
    pub experience: String,
    pub specializations: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub photo_url: String,
    pub cloudinary_id: String,
    pub created_at: DateTime<Utc>,
}

impl FacultyMember {
    /// Splits the comma-separated `specializations` field into trimmed entries.
    pub fn specialization_list(&self) -> Vec<&str> {
        self.specializations
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFacultyMember {
    pub name: String,
    pub position: String,
    pub qualification: String,
    pub experience: String,
    pub specializations: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub photo_url: String,
    pub cloudinary_id: String,
}

impl Record for FacultyMember {
    type Draft = NewFacultyMember;

    const STORAGE_KEY: &'static str = "faculty-members";
    const ID_PREFIX: &'static str = "faculty";

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewFacultyMember) -> Self {
        Self {
            id,
            name: draft.name,
            position: draft.position,
            qualification: draft.qualification,
            experience: draft.experience,
            specializations: draft.specializations,
            email: draft.email,
            phone: draft.phone,
            department: draft.department,
            photo_url: draft.photo_url,
            cloudinary_id: draft.cloudinary_id,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_item_uses_camel_case_on_disk() {
        let item = GalleryItem::from_draft(
            "gallery_1_a".into(),
            Utc::now(),
            NewGalleryItem {
                name: "Quad".into(),
                image_url: "data:image/png;base64,AA==".into(),
                cloudinary_id: "mock_1".into(),
                ..Default::default()
            },
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["imageUrl"], "data:image/png;base64,AA==");
        assert_eq!(json["cloudinaryId"], "mock_1");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn faculty_member_reads_browser_layout() {
        let raw = r#"{
            "id": "faculty_1700000000000_k3j9x2abc",
            "name": "Dr. Lee",
            "position": "",
            "qualification": "",
            "experience": "",
            "specializations": "Algebra, Topology ,",
            "email": "lee@x.edu",
            "phone": "",
            "department": "Mathematics",
            "photoUrl": "",
            "cloudinaryId": "",
            "createdAt": "2024-03-01T12:30:00.000Z"
        }"#;
        let member: FacultyMember = serde_json::from_str(raw).unwrap();
        assert_eq!(member.department, "Mathematics");
        assert_eq!(member.specialization_list(), vec!["Algebra", "Topology"]);
    }
}
