//! Catalog Document - 目录文档的线上格式
//!
//! ```json
//! {"stories": [{"id": 1, "name": "...", "type": "series", "chapters": [...]}]}
//! ```
//!
//! 任一作品解码失败即视为整个文档格式错误。
//! `chapters` 只对连载作品解码，单篇作品上的残留章节数据不参与校验。

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::application::ports::CatalogError;
use crate::domain::story::{
    AlternateField, Catalog, Chapter, ChapterId, StoryError, Work, WorkId, WorkKind,
};

/// 目录文档
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    pub stories: Vec<WorkDto>,
}

/// 作品记录
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDto {
    pub id: WorkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    /// 任意 JSON 值，只有 "series" 表示连载
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub total_chapters: Option<u32>,
    /// 仅在 `type` 为 "series" 时解码为 [`ChapterDto`]
    #[serde(default)]
    pub chapters: Option<Value>,
    #[serde(default)]
    pub content: Option<String>,
    /// 未识别的附加字段
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// 章节记录
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDto {
    pub id: ChapterId,
    pub chapter_number: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    /// 缺失或为 null 时视为空正文
    #[serde(default)]
    pub content: Option<String>,
}

impl CatalogDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        serde_json::from_slice(bytes).map_err(|e| CatalogError::Malformed(e.to_string()))
    }

    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        serde_json::from_value(value).map_err(|e| CatalogError::Malformed(e.to_string()))
    }

    /// 转换为领域目录
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let works = self
            .stories
            .into_iter()
            .map(WorkDto::into_work)
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(works).map_err(malformed)
    }
}

fn malformed(err: StoryError) -> CatalogError {
    CatalogError::Malformed(err.to_string())
}

impl From<ChapterDto> for Chapter {
    fn from(dto: ChapterDto) -> Self {
        let content = dto.content.unwrap_or_default();
        Chapter::new(dto.id, dto.chapter_number, dto.title, content)
            .with_subtitle(dto.subtitle)
            .with_publish_date(dto.publish_date)
    }
}

impl WorkDto {
    pub fn into_work(self) -> Result<Work, CatalogError> {
        let WorkDto {
            id,
            title,
            name,
            author,
            creator,
            description,
            summary,
            genre,
            status,
            publish_date,
            kind,
            total_chapters,
            chapters,
            content,
            extra,
        } = self;

        let title = AlternateField::new(title, name);
        let work = match WorkKind::from_type_tag(kind.as_ref()) {
            WorkKind::Series => {
                let chapters: Vec<Chapter> = match chapters {
                    Some(value) => serde_json::from_value::<Vec<ChapterDto>>(value)
                        .map_err(|e| {
                            CatalogError::Malformed(format!("work {}: {}", id, e))
                        })?
                        .into_iter()
                        .map(Chapter::from)
                        .collect(),
                    None => Vec::new(),
                };
                if let Some(declared) = total_chapters {
                    if declared as usize != chapters.len() {
                        // 只用于展示，不做校验
                        tracing::debug!(
                            work_id = %id,
                            declared,
                            actual = chapters.len(),
                            "Declared chapter count differs from chapter list"
                        );
                    }
                }
                Work::series(id, title, chapters).map_err(malformed)?
            }
            WorkKind::Standalone => Work::standalone(id, title, content),
        };

        Ok(work
            .with_author(AlternateField::new(author, creator))
            .with_description(AlternateField::new(description, summary))
            .with_genre(genre)
            .with_status(status)
            .with_publish_date(publish_date)
            .with_declared_chapters(total_chapters)
            .with_extra(extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::{resolve_title, WorkBody};
    use serde_json::json;

    #[test]
    fn test_decode_series_document() {
        let doc = CatalogDocument::from_value(json!({
            "stories": [{
                "id": 1, "name": "Test", "type": "series", "totalChapters": 2,
                "chapters": [
                    {"id": "c1", "chapterNumber": 1, "title": "Start", "content": "A"},
                    {"id": "c2", "chapterNumber": 2, "title": "Next", "subtitle": "Two",
                     "publishDate": "2024-01-02", "content": "B"}
                ]
            }]
        }))
        .unwrap();
        let catalog = doc.into_catalog().unwrap();
        let work = &catalog.works()[0];

        assert_eq!(work.kind(), WorkKind::Series);
        assert_eq!(resolve_title(work), "Test");
        assert_eq!(work.declared_chapters(), Some(2));
        assert_eq!(work.chapters()[1].subtitle(), Some("Two"));
        assert_eq!(work.chapters()[1].publish_date(), Some("2024-01-02"));
    }

    #[test]
    fn test_untyped_work_is_standalone() {
        let doc = CatalogDocument::from_value(json!({
            "stories": [{"id": 2, "title": "Solo", "content": "Hello",
                         "chapters": [{"id": "x", "chapterNumber": 1, "title": "Ignored"}]}]
        }))
        .unwrap();
        let catalog = doc.into_catalog().unwrap();
        let work = &catalog.works()[0];

        assert_eq!(work.kind(), WorkKind::Standalone);
        assert_eq!(work.body(), &WorkBody::Inline(Some("Hello".to_string())));
        assert!(work.chapters().is_empty());
    }

    #[test]
    fn test_stray_chapters_on_standalone_do_not_break_catalog() {
        let doc = CatalogDocument::from_value(json!({
            "stories": [
                {"id": 1, "title": "A", "type": "series", "chapters": [
                    {"id": "c1", "chapterNumber": 1, "title": "Start", "content": "A"}
                ]},
                {"id": 2, "title": "B", "chapters": [{"id": "c1"}]},
                {"id": 3, "title": "C", "chapters": "not a list"}
            ]
        }))
        .unwrap();
        let catalog = doc.into_catalog().unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.works()[1].kind(), WorkKind::Standalone);
        assert!(catalog.works()[1].chapters().is_empty());
    }

    #[test]
    fn test_null_chapter_content_is_empty() {
        let doc = CatalogDocument::from_value(json!({
            "stories": [{"id": 1, "title": "A", "type": "series", "chapters": [
                {"id": "c1", "chapterNumber": 1, "title": "Start", "content": null},
                {"id": "c2", "chapterNumber": 2, "title": "Next"}
            ]}]
        }))
        .unwrap();
        let catalog = doc.into_catalog().unwrap();
        let chapters = catalog.works()[0].chapters();

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].content(), "");
        assert_eq!(chapters[1].content(), "");
    }

    #[test]
    fn test_broken_series_chapter_is_malformed() {
        let doc = CatalogDocument::from_value(json!({
            "stories": [{"id": 1, "type": "series", "chapters": [{"id": "c1"}]}]
        }))
        .unwrap();
        assert!(matches!(doc.into_catalog(), Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_extra_fields_are_preserved() {
        let doc = CatalogDocument::from_value(json!({
            "stories": [{"id": 3, "title": "T", "rating": 4.5, "tags": ["a", "b"]}]
        }))
        .unwrap();
        let catalog = doc.into_catalog().unwrap();
        let extra = catalog.works()[0].extra();

        assert_eq!(extra.get("rating"), Some(&json!(4.5)));
        assert_eq!(extra.get("tags"), Some(&json!(["a", "b"])));
        assert!(!extra.contains_key("title"));
    }

    #[test]
    fn test_series_without_chapters_field() {
        let doc = CatalogDocument::from_value(json!({
            "stories": [{"id": 4, "title": "Empty", "type": "series"}]
        }))
        .unwrap();
        let catalog = doc.into_catalog().unwrap();
        assert_eq!(catalog.works()[0].kind(), WorkKind::Series);
        assert!(catalog.works()[0].chapters().is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            CatalogDocument::from_slice(b"not json"),
            Err(CatalogError::Malformed(_))
        ));
        assert!(CatalogDocument::from_value(json!({"works": []})).is_err());
        assert!(CatalogDocument::from_value(json!({"stories": [{"title": "no id"}]})).is_err());
        assert!(CatalogDocument::from_value(json!({
            "stories": [{"id": 1, "totalChapters": "many"}]
        }))
        .is_err());
    }

    #[test]
    fn test_duplicate_ids_make_document_malformed() {
        let doc = CatalogDocument::from_value(json!({
            "stories": [{"id": 1}, {"id": "1"}]
        }))
        .unwrap();
        assert!(matches!(doc.into_catalog(), Err(CatalogError::Malformed(_))));
    }
}
