//! Grid grouping and detail-page navigation.
//!
//! Pure functions over the sorted photo list — no I/O, fully testable.

use serde::Serialize;

use crate::collect::Photo;

/// One gallery grid row: `{"pics": [...]}` in the page variables.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub pics: Vec<Photo>,
}

/// Partition the ordered photo list into consecutive rows of `columns`
/// photos each; the last row may be shorter. `columns` must be positive
/// (callers gate on the template config).
pub fn group_rows(photos: &[Photo], columns: u32) -> Vec<Row> {
    photos
        .chunks(columns as usize)
        .map(|chunk| Row {
            pics: chunk.to_vec(),
        })
        .collect()
}

/// Attach previous/next detail-page links to each photo.
///
/// Photo at ordinal i gets `prev` from ordinal i-1 and `next` (plus the
/// neighbor's image name for preloading) from ordinal i+1. The first
/// photo has no `prev`; the last has no `next`.
pub fn link_neighbors(photos: &mut [Photo]) {
    let details: Vec<String> = photos.iter().map(|p| p.detail_path.clone()).collect();
    let images: Vec<String> = photos.iter().map(|p| p.img_path.clone()).collect();

    let count = photos.len();
    for (index, photo) in photos.iter_mut().enumerate() {
        if index > 0 {
            photo.prev = Some(details[index - 1].clone());
        }
        if index + 1 < count {
            photo.next = Some(details[index + 1].clone());
            photo.next_img = Some(images[index + 1].clone());
        }
    }
}
