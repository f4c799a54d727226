//! Story Context - Errors

use thiserror::Error;

use super::{ChapterId, WorkId};

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Duplicate work id: {0}")]
    DuplicateWork(WorkId),

    #[error("Duplicate chapter id {chapter_id} in work {work_id}")]
    DuplicateChapter { work_id: WorkId, chapter_id: ChapterId },
}
