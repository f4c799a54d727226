//! Field Normalizer - 规范展示值解析
//!
//! 纯函数，不修改输入，重复调用结果一致

use super::Work;

/// 标题缺失时的固定回退值
pub const UNTITLED: &str = "Untitled Story";

/// title，其次 name，都缺失时返回 [`UNTITLED`]
pub fn resolve_title(work: &Work) -> &str {
    work.title_field().resolve().unwrap_or(UNTITLED)
}

/// author，其次 creator；都缺失时返回 None（调用方应省略该 UI 元素）
pub fn resolve_author(work: &Work) -> Option<&str> {
    work.author_field().resolve()
}

/// description，其次 summary；规则同 [`resolve_author`]
pub fn resolve_description(work: &Work) -> Option<&str> {
    work.description_field().resolve()
}
