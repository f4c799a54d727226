//! Story Context - Entities

use super::value_objects::non_empty;
use super::ChapterId;

/// 章节 - 连载作品的有序子单元
///
/// 不变量:
/// - id 在所属作品的章节序列内唯一
/// - number 只用于展示，不保证与序列位置一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    id: ChapterId,
    number: i64,
    title: String,
    subtitle: Option<String>,
    publish_date: Option<String>,
    content: String,
}

impl Chapter {
    pub fn new(
        id: impl Into<ChapterId>,
        number: i64,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            title: title.into(),
            subtitle: None,
            publish_date: None,
            content: content.into(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn with_publish_date(mut self, publish_date: Option<String>) -> Self {
        self.publish_date = publish_date;
        self
    }

    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        non_empty(self.subtitle.as_deref())
    }

    /// 发布日期（原样展示，不做解析）
    pub fn publish_date(&self) -> Option<&str> {
        non_empty(self.publish_date.as_deref())
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
