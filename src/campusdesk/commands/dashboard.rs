use crate::commands::CmdResult;
use crate::model::{FacultyMember, GalleryItem};
use crate::records::RecordStore;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub gallery_count: usize,
    pub faculty_count: usize,
}

pub fn run<S: KeyValueStore>(
    gallery: &RecordStore<GalleryItem, S>,
    faculty: &RecordStore<FacultyMember, S>,
) -> CmdResult {
    CmdResult::default().with_summary(Summary {
        gallery_count: gallery.len(),
        faculty_count: faculty.len(),
    })
}
