//! Story Context - Aggregate Root

use std::collections::{BTreeMap, HashSet};

use super::value_objects::non_empty;
use super::{AlternateField, Chapter, ChapterId, StoryError, WorkId, WorkKind};

/// 作品正文：连载的章节序列或单篇的内嵌正文，二者只有一个生效
#[derive(Debug, Clone, PartialEq)]
pub enum WorkBody {
    /// 有序章节序列（保持源顺序）
    Chapters(Vec<Chapter>),
    /// 单篇正文
    Inline(Option<String>),
}

/// Work 聚合根
///
/// 不变量:
/// - 章节序列保持源文档顺序
/// - 章节 id 在序列内唯一
/// - 由 `kind` 决定章节序列与内嵌正文哪个生效
#[derive(Debug, Clone, PartialEq)]
pub struct Work {
    id: WorkId,
    title: AlternateField,
    author: AlternateField,
    description: AlternateField,
    genre: Option<String>,
    status: Option<String>,
    publish_date: Option<String>,
    declared_chapters: Option<u32>,
    body: WorkBody,
    /// 未解释的附加字段
    extra: BTreeMap<String, serde_json::Value>,
}

impl Work {
    /// 创建连载作品
    pub fn series(
        id: impl Into<WorkId>,
        title: AlternateField,
        chapters: Vec<Chapter>,
    ) -> Result<Self, StoryError> {
        let id = id.into();
        let mut seen = HashSet::with_capacity(chapters.len());
        for chapter in &chapters {
            if !seen.insert(chapter.id()) {
                return Err(StoryError::DuplicateChapter {
                    work_id: id,
                    chapter_id: chapter.id().clone(),
                });
            }
        }
        Ok(Self::with_body(id, title, WorkBody::Chapters(chapters)))
    }

    /// 创建单篇作品
    pub fn standalone(id: impl Into<WorkId>, title: AlternateField, content: Option<String>) -> Self {
        Self::with_body(id.into(), title, WorkBody::Inline(content))
    }

    fn with_body(id: WorkId, title: AlternateField, body: WorkBody) -> Self {
        Self {
            id,
            title,
            author: AlternateField::default(),
            description: AlternateField::default(),
            genre: None,
            status: None,
            publish_date: None,
            declared_chapters: None,
            body,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_author(mut self, author: AlternateField) -> Self {
        self.author = author;
        self
    }

    pub fn with_description(mut self, description: AlternateField) -> Self {
        self.description = description;
        self
    }

    pub fn with_genre(mut self, genre: Option<String>) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }

    pub fn with_publish_date(mut self, publish_date: Option<String>) -> Self {
        self.publish_date = publish_date;
        self
    }

    pub fn with_declared_chapters(mut self, declared: Option<u32>) -> Self {
        self.declared_chapters = declared;
        self
    }

    pub fn with_extra(mut self, extra: BTreeMap<String, serde_json::Value>) -> Self {
        self.extra = extra;
        self
    }

    // Getters
    pub fn id(&self) -> &WorkId {
        &self.id
    }

    pub fn kind(&self) -> WorkKind {
        match self.body {
            WorkBody::Chapters(_) => WorkKind::Series,
            WorkBody::Inline(_) => WorkKind::Standalone,
        }
    }

    pub fn title_field(&self) -> &AlternateField {
        &self.title
    }

    pub fn author_field(&self) -> &AlternateField {
        &self.author
    }

    pub fn description_field(&self) -> &AlternateField {
        &self.description
    }

    pub fn genre(&self) -> Option<&str> {
        non_empty(self.genre.as_deref())
    }

    pub fn status(&self) -> Option<&str> {
        non_empty(self.status.as_deref())
    }

    /// 状态是否为连载中
    pub fn is_ongoing(&self) -> bool {
        self.status() == Some("ongoing")
    }

    pub fn publish_date(&self) -> Option<&str> {
        non_empty(self.publish_date.as_deref())
    }

    /// 源文档声明的章节总数（只用于展示，不与实际章节数校验）
    pub fn declared_chapters(&self) -> Option<u32> {
        self.declared_chapters
    }

    pub fn body(&self) -> &WorkBody {
        &self.body
    }

    /// 章节序列，单篇作品返回空切片
    pub fn chapters(&self) -> &[Chapter] {
        match &self.body {
            WorkBody::Chapters(chapters) => chapters,
            WorkBody::Inline(_) => &[],
        }
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters().len()
    }

    /// 单篇正文，连载作品返回 None
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            WorkBody::Inline(content) => content.as_deref(),
            WorkBody::Chapters(_) => None,
        }
    }

    pub fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }

    /// 按 id 线性查找章节在序列中的位置
    pub fn position_of(&self, chapter_id: &ChapterId) -> Option<usize> {
        self.chapters().iter().position(|c| c.id() == chapter_id)
    }

    pub fn chapter_at(&self, position: usize) -> Option<&Chapter> {
        self.chapters().get(position)
    }

    pub fn find_chapter(&self, chapter_id: &ChapterId) -> Option<&Chapter> {
        self.chapters().iter().find(|c| c.id() == chapter_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chapter_series() -> Work {
        Work::series(
            1,
            AlternateField::secondary("Test"),
            vec![
                Chapter::new("c1", 1, "Start", "A"),
                Chapter::new("c2", 2, "Next", "B"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_series_positions_follow_source_order() {
        let work = two_chapter_series();
        assert_eq!(work.kind(), WorkKind::Series);
        assert_eq!(work.position_of(&ChapterId::from("c2")), Some(1));
        assert_eq!(work.position_of(&ChapterId::from("missing")), None);
        assert_eq!(work.chapter_at(0).map(|c| c.title()), Some("Start"));
        assert_eq!(work.content(), None);
    }

    #[test]
    fn test_series_rejects_duplicate_chapter_ids() {
        let result = Work::series(
            7,
            AlternateField::default(),
            vec![Chapter::new("c1", 1, "A", ""), Chapter::new("c1", 2, "B", "")],
        );
        assert!(matches!(result, Err(StoryError::DuplicateChapter { .. })));
    }

    #[test]
    fn test_standalone_has_no_chapters() {
        let work = Work::standalone(2, AlternateField::default(), Some("Hello".to_string()));
        assert_eq!(work.kind(), WorkKind::Standalone);
        assert!(work.chapters().is_empty());
        assert_eq!(work.content(), Some("Hello"));
    }

    #[test]
    fn test_status_and_empty_tags() {
        let work = Work::standalone(3, AlternateField::default(), None)
            .with_status(Some("ongoing".to_string()))
            .with_genre(Some(String::new()));
        assert!(work.is_ongoing());
        assert_eq!(work.genre(), None);
    }
}
