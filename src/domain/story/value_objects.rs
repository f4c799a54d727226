//! Story Context - Value Objects

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 源文档中的标识符既可能是数字也可能是字符串
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Integer(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Integer(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// 作品唯一标识
///
/// 统一保存为字符串形式，数字 `1` 与字符串 `"1"` 视为同一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WorkId(String);

impl WorkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for WorkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

impl From<&str> for WorkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

macro_rules! work_id_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for WorkId {
                fn from(id: $ty) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

work_id_from_integer!(i32, i64, u32, u64);

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 章节标识（在所属作品内唯一）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ChapterId(String);

impl ChapterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ChapterId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

impl From<&str> for ChapterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作品类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkKind {
    /// 连载（多章节）
    Series,
    /// 单篇（正文内嵌）
    Standalone,
}

impl WorkKind {
    /// 源文档中表示连载的 `type` 取值
    pub const SERIES_TAG: &'static str = "series";

    /// 从 `type` 字段解析，只有字符串 "series" 表示连载
    pub fn from_type_tag(tag: Option<&serde_json::Value>) -> Self {
        match tag.and_then(|v| v.as_str()) {
            Some(Self::SERIES_TAG) => WorkKind::Series,
            _ => WorkKind::Standalone,
        }
    }

    pub fn is_series(&self) -> bool {
        matches!(self, WorkKind::Series)
    }

    /// 徽章文字
    pub fn badge(&self) -> &'static str {
        match self {
            WorkKind::Series => "Series",
            WorkKind::Standalone => "Story",
        }
    }

    /// 目录卡片上的操作按钮文字
    pub fn action_label(&self) -> &'static str {
        match self {
            WorkKind::Series => "View Series",
            WorkKind::Standalone => "Read Story",
        }
    }
}

/// 带备选拼写的字段（如 title|name）
///
/// 不变量: 空字符串视为缺失，主字段优先
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlternateField {
    primary: Option<String>,
    secondary: Option<String>,
}

impl AlternateField {
    pub fn new(primary: Option<String>, secondary: Option<String>) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(value: impl Into<String>) -> Self {
        Self::new(Some(value.into()), None)
    }

    pub fn secondary(value: impl Into<String>) -> Self {
        Self::new(None, Some(value.into()))
    }

    /// 按优先级解析出规范值
    pub fn resolve(&self) -> Option<&str> {
        non_empty(self.primary.as_deref()).or_else(|| non_empty(self.secondary.as_deref()))
    }
}

/// 空字符串按缺失处理
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_accept_numbers_and_strings() {
        let numeric: WorkId = serde_json::from_value(json!(1)).unwrap();
        let textual: WorkId = serde_json::from_value(json!("1")).unwrap();
        assert_eq!(numeric, textual);
        assert_eq!(numeric.as_str(), "1");

        let chapter: ChapterId = serde_json::from_value(json!("c1")).unwrap();
        assert_eq!(chapter, ChapterId::from("c1"));
    }

    #[test]
    fn test_id_rejects_other_json_types() {
        assert!(serde_json::from_value::<WorkId>(json!({"id": 1})).is_err());
        assert!(serde_json::from_value::<ChapterId>(json!(null)).is_err());
    }

    #[test]
    fn test_kind_only_series_string_selects_series() {
        assert_eq!(WorkKind::from_type_tag(Some(&json!("series"))), WorkKind::Series);
        assert_eq!(WorkKind::from_type_tag(Some(&json!("standalone"))), WorkKind::Standalone);
        assert_eq!(WorkKind::from_type_tag(Some(&json!("Series"))), WorkKind::Standalone);
        assert_eq!(WorkKind::from_type_tag(Some(&json!(true))), WorkKind::Standalone);
        assert_eq!(WorkKind::from_type_tag(None), WorkKind::Standalone);
    }

    #[test]
    fn test_alternate_field_precedence() {
        let both = AlternateField::new(Some("A".into()), Some("B".into()));
        assert_eq!(both.resolve(), Some("A"));

        let empty_primary = AlternateField::new(Some(String::new()), Some("B".into()));
        assert_eq!(empty_primary.resolve(), Some("B"));

        let both_empty = AlternateField::new(Some(String::new()), Some(String::new()));
        assert_eq!(both_empty.resolve(), None);

        assert_eq!(AlternateField::default().resolve(), None);
    }
}
