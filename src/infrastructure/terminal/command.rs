//! 终端命令解析
//!
//! 一行输入对应一个命令；是否能转换为视图事件取决于当前视图模式

use crate::application::viewer::{ViewEvent, ViewMode};
use crate::domain::story::{ChapterId, WorkId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 裸 id：目录中选作品，章节列表中选章节
    Select(String),
    Open(String),
    Read(String),
    Next,
    Previous,
    /// 阅读页回章节列表，详情页回目录
    Back,
    Catalog,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Command::Empty;
        };
        let arg = words.next();
        let extra = words.next();

        match (head.to_lowercase().as_str(), arg, extra) {
            ("open" | "o", Some(id), None) => Command::Open(id.to_string()),
            ("read" | "r", Some(id), None) => Command::Read(id.to_string()),
            ("next" | "n", None, _) => Command::Next,
            ("prev" | "previous" | "p", None, _) => Command::Previous,
            ("back" | "b", None, _) => Command::Back,
            ("catalog" | "home" | "c", None, _) => Command::Catalog,
            ("help" | "h" | "?", None, _) => Command::Help,
            ("quit" | "exit" | "q", None, _) => Command::Quit,
            (_, None, _) => Command::Select(head.to_string()),
            _ => Command::Unknown(line.trim().to_string()),
        }
    }

    /// 在给定视图模式下转换为事件
    pub fn to_event(&self, mode: ViewMode) -> Option<ViewEvent> {
        match self {
            Command::Open(id) => Some(ViewEvent::SelectWork(WorkId::from(id.as_str()))),
            Command::Read(id) => Some(ViewEvent::SelectChapter(ChapterId::from(id.as_str()))),
            Command::Select(id) => match mode {
                ViewMode::Catalog => Some(ViewEvent::SelectWork(WorkId::from(id.as_str()))),
                ViewMode::SeriesDetail => {
                    Some(ViewEvent::SelectChapter(ChapterId::from(id.as_str())))
                }
                _ => None,
            },
            Command::Next => Some(ViewEvent::NextChapter),
            Command::Previous => Some(ViewEvent::PreviousChapter),
            Command::Back => match mode {
                ViewMode::Reader => Some(ViewEvent::BackToChapters),
                ViewMode::SeriesDetail | ViewMode::StandaloneDetail => {
                    Some(ViewEvent::BackToCatalog)
                }
                _ => None,
            },
            Command::Catalog => Some(ViewEvent::BackToCatalog),
            Command::Help | Command::Quit | Command::Empty | Command::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  "), Command::Empty);
        assert_eq!(Command::parse("open 1"), Command::Open("1".into()));
        assert_eq!(Command::parse("READ c2"), Command::Read("c2".into()));
        assert_eq!(Command::parse("n"), Command::Next);
        assert_eq!(Command::parse("prev"), Command::Previous);
        assert_eq!(Command::parse("b"), Command::Back);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("c1"), Command::Select("c1".into()));
        assert_eq!(Command::parse("open"), Command::Select("open".into()));
        assert_eq!(Command::parse("open 1 2"), Command::Unknown("open 1 2".into()));
    }

    #[test]
    fn test_bare_id_depends_on_mode() {
        let select = Command::Select("7".into());
        assert_eq!(
            select.to_event(ViewMode::Catalog),
            Some(ViewEvent::SelectWork(WorkId::from(7)))
        );
        assert_eq!(
            select.to_event(ViewMode::SeriesDetail),
            Some(ViewEvent::SelectChapter(ChapterId::from("7")))
        );
        assert_eq!(select.to_event(ViewMode::Reader), None);
    }

    #[test]
    fn test_back_depends_on_mode() {
        assert_eq!(Command::Back.to_event(ViewMode::Reader), Some(ViewEvent::BackToChapters));
        assert_eq!(
            Command::Back.to_event(ViewMode::StandaloneDetail),
            Some(ViewEvent::BackToCatalog)
        );
        assert_eq!(Command::Back.to_event(ViewMode::Catalog), None);
    }
}
