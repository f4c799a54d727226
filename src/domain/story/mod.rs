//! Story Context - 作品限界上下文
//!
//! 职责:
//! - 作品聚合（连载 / 单篇）
//! - 章节实体
//! - 备选字段的规范化解析
//! - 只读作品目录

mod aggregate;
mod catalog;
mod entities;
mod errors;
mod normalizer;
mod value_objects;

pub use aggregate::{Work, WorkBody};
pub use catalog::Catalog;
pub use entities::Chapter;
pub use errors::StoryError;
pub use normalizer::{resolve_author, resolve_description, resolve_title, UNTITLED};
pub use value_objects::{AlternateField, ChapterId, WorkId, WorkKind};
