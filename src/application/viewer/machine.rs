//! View-State Machine - 视图状态机
//!
//! 持有只读目录与当前视图状态；所有转换同步完成，
//! 状态整体替换，不原地修改。
//!
//! 每个事件方法返回状态是否改变。当前状态下无效的事件、
//! 未知 id、边界处的翻页都是空操作。

use std::sync::Arc;

use crate::domain::story::{Catalog, Chapter, ChapterId, Work, WorkId, WorkKind};

use super::{NavigationFlags, ViewEvent, ViewMode, ViewState};

#[derive(Debug, Clone, Copy)]
enum Direction {
    Previous,
    Next,
}

/// 视图状态机
#[derive(Debug, Clone)]
pub struct ViewStateMachine {
    catalog: Catalog,
    state: ViewState,
}

impl Default for ViewStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateMachine {
    /// 初始处于 Loading 状态
    pub fn new() -> Self {
        Self {
            catalog: Catalog::empty(),
            state: ViewState::Loading,
        }
    }

    /// 以已加载的目录创建（直接进入 Catalog 状态）
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ViewState::Catalog,
        }
    }

    /// 目录加载完成；只在 Loading 状态下生效一次
    pub fn catalog_loaded(&mut self, catalog: Catalog) -> bool {
        if !self.is_loading() {
            tracing::warn!("Catalog already installed, ignoring second load");
            return false;
        }
        tracing::debug!(works = catalog.len(), "Catalog installed");
        self.catalog = catalog;
        self.state = ViewState::Catalog;
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode()
    }

    pub fn selected_work(&self) -> Option<&Arc<Work>> {
        self.state.work()
    }

    /// 阅读中的章节
    pub fn current_chapter(&self) -> Option<&Chapter> {
        match &self.state {
            ViewState::Reader { work, chapter } => work.find_chapter(chapter),
            _ => None,
        }
    }

    /// 阅读中章节在序列中的位置
    pub fn current_position(&self) -> Option<usize> {
        match &self.state {
            ViewState::Reader { work, chapter } => work.position_of(chapter),
            _ => None,
        }
    }

    /// 翻页按钮可用性，只在 Reader 状态下有值
    ///
    /// 找不到当前章节时两个方向都不可用
    pub fn navigation(&self) -> Option<NavigationFlags> {
        match &self.state {
            ViewState::Reader { work, chapter } => Some(
                work.position_of(chapter)
                    .map(|position| NavigationFlags::at(position, work.chapter_count()))
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn dispatch(&mut self, event: ViewEvent) -> bool {
        match event {
            ViewEvent::SelectWork(id) => self.select_work(&id),
            ViewEvent::SelectChapter(id) => self.select_chapter(&id),
            ViewEvent::BackToCatalog => self.go_back_to_catalog(),
            ViewEvent::BackToChapters => self.go_back_to_chapters(),
            ViewEvent::NextChapter => self.next_chapter(),
            ViewEvent::PreviousChapter => self.previous_chapter(),
        }
    }

    /// Catalog -> SeriesDetail / StandaloneDetail，按作品类型分支
    pub fn select_work(&mut self, id: &WorkId) -> bool {
        if !matches!(self.state, ViewState::Catalog) {
            tracing::debug!(work_id = %id, mode = ?self.mode(), "Select work ignored");
            return false;
        }
        let Some(work) = self.catalog.find(id) else {
            tracing::debug!(work_id = %id, "Unknown work");
            return false;
        };

        let work = Arc::clone(work);
        self.state = match work.kind() {
            WorkKind::Series => ViewState::SeriesDetail { work },
            WorkKind::Standalone => ViewState::StandaloneDetail { work },
        };
        tracing::debug!(work_id = %id, mode = ?self.mode(), "Work selected");
        true
    }

    /// SeriesDetail -> Reader，章节必须属于当前作品
    pub fn select_chapter(&mut self, id: &ChapterId) -> bool {
        let ViewState::SeriesDetail { work } = &self.state else {
            tracing::debug!(chapter_id = %id, mode = ?self.mode(), "Select chapter ignored");
            return false;
        };
        let Some(chapter) = work.find_chapter(id) else {
            tracing::debug!(chapter_id = %id, work_id = %work.id(), "Unknown chapter");
            return false;
        };

        let next = ViewState::Reader {
            work: Arc::clone(work),
            chapter: chapter.id().clone(),
        };
        self.state = next;
        tracing::debug!(chapter_id = %id, "Chapter selected");
        true
    }

    /// Detail -> Catalog，清除选中的作品
    ///
    /// 阅读器只能先回到章节列表
    pub fn go_back_to_catalog(&mut self) -> bool {
        match self.state {
            ViewState::SeriesDetail { .. } | ViewState::StandaloneDetail { .. } => {
                self.state = ViewState::Catalog;
                true
            }
            ViewState::Loading | ViewState::Catalog | ViewState::Reader { .. } => {
                tracing::debug!(mode = ?self.mode(), "Back to catalog ignored");
                false
            }
        }
    }

    /// Reader -> SeriesDetail，只清除章节，保留作品
    pub fn go_back_to_chapters(&mut self) -> bool {
        let ViewState::Reader { work, .. } = &self.state else {
            return false;
        };
        let next = ViewState::SeriesDetail {
            work: Arc::clone(work),
        };
        self.state = next;
        true
    }

    pub fn next_chapter(&mut self) -> bool {
        self.step(Direction::Next)
    }

    pub fn previous_chapter(&mut self) -> bool {
        self.step(Direction::Previous)
    }

    fn step(&mut self, direction: Direction) -> bool {
        let ViewState::Reader { work, chapter } = &self.state else {
            return false;
        };
        let Some(position) = work.position_of(chapter) else {
            tracing::debug!(chapter_id = %chapter, "Current chapter not in sequence");
            return false;
        };

        let target = match direction {
            Direction::Next => position.checked_add(1),
            Direction::Previous => position.checked_sub(1),
        };
        let Some(target) = target.and_then(|p| work.chapter_at(p)) else {
            tracing::debug!(position, ?direction, "Chapter navigation at boundary");
            return false;
        };

        let next = ViewState::Reader {
            work: Arc::clone(work),
            chapter: target.id().clone(),
        };
        self.state = next;
        true
    }
}
