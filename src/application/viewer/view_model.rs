//! View Models - 各状态的渲染数据快照
//!
//! 由状态机派生，只含展示所需的规范值，交给外部渲染器

use crate::domain::split_paragraphs;
use crate::domain::story::{
    resolve_author, resolve_description, resolve_title, Chapter, Work, WorkKind,
};

use super::{NavigationFlags, ViewState, ViewStateMachine};

/// 目录页标题
pub const APP_HEADING: &str = "Story Haven";
/// 目录页副标题
pub const APP_TAGLINE: &str =
    "Discover captivating tales and immerse yourself in worlds of imagination";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    Loading,
    Catalog(CatalogView),
    SeriesDetail(SeriesDetailView),
    StandaloneDetail(StandaloneDetailView),
    Reader(ReaderView),
}

/// 目录页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub cards: Vec<WorkCard>,
}

/// 状态徽章
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub is_ongoing: bool,
}

/// 目录中的作品卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCard {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub kind: WorkKind,
    pub status: Option<StatusBadge>,
    pub description: Option<String>,
    /// 只对连载且声明了非零章节数时有值
    pub declared_chapters: Option<u32>,
    pub publish_date: Option<String>,
    pub action_label: &'static str,
}

/// 章节列表条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub id: String,
    pub number: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub publish_date: Option<String>,
}

/// 连载详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesDetailView {
    pub title: String,
    pub author: Option<String>,
    pub status: Option<StatusBadge>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub declared_chapters: Option<u32>,
    pub chapters: Vec<ChapterEntry>,
}

/// 单篇详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneDetailView {
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub publish_date: Option<String>,
    pub description: Option<String>,
    pub paragraphs: Vec<String>,
}

/// 阅读页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderView {
    /// 所属作品标题（页眉）
    pub work_title: String,
    pub chapter_number: i64,
    /// 声明的章节总数，缺失时取实际章节数
    pub total_chapters: u64,
    pub title: String,
    pub subtitle: Option<String>,
    pub publish_date: Option<String>,
    pub paragraphs: Vec<String>,
    pub navigation: NavigationFlags,
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn paragraphs(text: &str) -> Vec<String> {
    split_paragraphs(text).into_iter().map(str::to_string).collect()
}

fn status_badge(work: &Work) -> Option<StatusBadge> {
    work.status().map(|label| StatusBadge {
        label: label.to_string(),
        is_ongoing: work.is_ongoing(),
    })
}

impl WorkCard {
    pub fn from_work(work: &Work) -> Self {
        let kind = work.kind();
        Self {
            id: work.id().to_string(),
            title: resolve_title(work).to_string(),
            author: owned(resolve_author(work)),
            genre: owned(work.genre()),
            kind,
            status: status_badge(work),
            description: owned(resolve_description(work)),
            declared_chapters: work
                .declared_chapters()
                .filter(|n| kind.is_series() && *n > 0),
            publish_date: owned(work.publish_date()),
            action_label: kind.action_label(),
        }
    }
}

impl ChapterEntry {
    pub fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id().to_string(),
            number: chapter.number(),
            title: chapter.title().to_string(),
            subtitle: owned(chapter.subtitle()),
            publish_date: owned(chapter.publish_date()),
        }
    }
}

impl SeriesDetailView {
    pub fn from_work(work: &Work) -> Self {
        Self {
            title: resolve_title(work).to_string(),
            author: owned(resolve_author(work)),
            status: status_badge(work),
            genre: owned(work.genre()),
            description: owned(resolve_description(work)),
            declared_chapters: work.declared_chapters(),
            chapters: work.chapters().iter().map(ChapterEntry::from_chapter).collect(),
        }
    }
}

impl StandaloneDetailView {
    pub fn from_work(work: &Work) -> Self {
        Self {
            title: resolve_title(work).to_string(),
            author: owned(resolve_author(work)),
            genre: owned(work.genre()),
            publish_date: owned(work.publish_date()),
            description: owned(resolve_description(work)),
            paragraphs: work.content().map(paragraphs).unwrap_or_default(),
        }
    }
}

impl ReaderView {
    pub fn new(work: &Work, chapter: &Chapter, navigation: NavigationFlags) -> Self {
        let total_chapters = work
            .declared_chapters()
            .map(u64::from)
            .unwrap_or(work.chapter_count() as u64);
        Self {
            work_title: resolve_title(work).to_string(),
            chapter_number: chapter.number(),
            total_chapters,
            title: chapter.title().to_string(),
            subtitle: owned(chapter.subtitle()),
            publish_date: owned(chapter.publish_date()),
            paragraphs: paragraphs(chapter.content()),
            navigation,
        }
    }
}

impl ViewModel {
    /// 从状态机当前状态派生
    pub fn from_machine(machine: &ViewStateMachine) -> Self {
        match machine.state() {
            ViewState::Loading => ViewModel::Loading,
            ViewState::Catalog => ViewModel::Catalog(CatalogView {
                heading: APP_HEADING,
                tagline: APP_TAGLINE,
                cards: machine
                    .catalog()
                    .works()
                    .iter()
                    .map(|w| WorkCard::from_work(w))
                    .collect(),
            }),
            ViewState::SeriesDetail { work } => {
                ViewModel::SeriesDetail(SeriesDetailView::from_work(work))
            }
            ViewState::StandaloneDetail { work } => {
                ViewModel::StandaloneDetail(StandaloneDetailView::from_work(work))
            }
            ViewState::Reader { work, .. } => match machine.current_chapter() {
                Some(chapter) => ViewModel::Reader(ReaderView::new(
                    work,
                    chapter,
                    machine.navigation().unwrap_or_default(),
                )),
                // 状态机保证章节属于作品，这里只做降级
                None => ViewModel::SeriesDetail(SeriesDetailView::from_work(work)),
            },
        }
    }
}
