//! Domain Layer - 领域层
//!
//! - Story Context: 作品、章节、目录与字段规范化
//! - text: 正文段落切分

pub mod story;
pub mod text;

pub use text::split_paragraphs;
