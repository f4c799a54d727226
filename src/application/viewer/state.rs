//! 视图状态
//!
//! 每个变体携带自身所需的数据，不存在"单篇作品却选中了章节"之类的非法组合

use std::sync::Arc;

use crate::domain::story::{ChapterId, Work};

/// 当前视图状态（同一时刻只有一个）
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// 目录加载中
    Loading,
    /// 作品目录
    Catalog,
    /// 连载详情与章节列表
    SeriesDetail { work: Arc<Work> },
    /// 单篇详情与正文
    StandaloneDetail { work: Arc<Work> },
    /// 阅读某一章节
    Reader { work: Arc<Work>, chapter: ChapterId },
}

impl ViewState {
    pub fn mode(&self) -> ViewMode {
        match self {
            ViewState::Loading => ViewMode::Loading,
            ViewState::Catalog => ViewMode::Catalog,
            ViewState::SeriesDetail { .. } => ViewMode::SeriesDetail,
            ViewState::StandaloneDetail { .. } => ViewMode::StandaloneDetail,
            ViewState::Reader { .. } => ViewMode::Reader,
        }
    }

    /// 当前选中的作品
    pub fn work(&self) -> Option<&Arc<Work>> {
        match self {
            ViewState::SeriesDetail { work }
            | ViewState::StandaloneDetail { work }
            | ViewState::Reader { work, .. } => Some(work),
            ViewState::Loading | ViewState::Catalog => None,
        }
    }
}

/// 不带数据的视图模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Loading,
    Catalog,
    SeriesDetail,
    StandaloneDetail,
    Reader,
}

/// 上一章 / 下一章按钮是否可用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationFlags {
    pub has_previous: bool,
    pub has_next: bool,
}

impl NavigationFlags {
    /// 根据序列位置和章节总数计算
    pub fn at(position: usize, len: usize) -> Self {
        Self {
            has_previous: position > 0,
            has_next: position + 1 < len,
        }
    }
}
