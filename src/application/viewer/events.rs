//! 视图事件 - 状态机接受的全部用户操作

use crate::domain::story::{ChapterId, WorkId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// 目录中选择作品
    SelectWork(WorkId),
    /// 章节列表中选择章节
    SelectChapter(ChapterId),
    /// 返回目录
    BackToCatalog,
    /// 返回章节列表
    BackToChapters,
    /// 下一章
    NextChapter,
    /// 上一章
    PreviousChapter,
}
