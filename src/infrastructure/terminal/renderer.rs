//! Text Renderer - 将视图数据渲染为纯文本

use std::fmt::{self, Write};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::viewer::{
    CatalogView, NavigationFlags, ReaderView, SeriesDetailView, StandaloneDetailView,
    StatusBadge, ViewModel, WorkCard,
};

const RULE: &str = "------------------------------------------------------------";

/// 纯文本渲染器
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// 折行宽度，0 表示不折行
    wrap_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(80)
    }
}

impl TextRenderer {
    pub fn new(wrap_width: usize) -> Self {
        Self { wrap_width }
    }

    pub fn render(&self, view: &ViewModel) -> String {
        let mut out = String::new();
        // 写入 String 不会失败
        let _ = self.write_view(&mut out, view);
        out
    }

    /// 将视图写入任意文本输出
    pub fn write_view(&self, out: &mut impl Write, view: &ViewModel) -> fmt::Result {
        match view {
            ViewModel::Loading => writeln!(out, "Loading stories..."),
            ViewModel::Catalog(catalog) => self.catalog(out, catalog),
            ViewModel::SeriesDetail(detail) => self.series_detail(out, detail),
            ViewModel::StandaloneDetail(detail) => self.standalone_detail(out, detail),
            ViewModel::Reader(reader) => self.reader(out, reader),
        }
    }

    /// 当前视图可用命令
    pub fn help(&self, view: &ViewModel) -> &'static str {
        match view {
            ViewModel::Loading => "Waiting for the catalog. Commands: quit",
            ViewModel::Catalog(_) => "Commands: <story id> | open <id> | help | quit",
            ViewModel::SeriesDetail(_) => {
                "Commands: <chapter id> | read <id> | back (to stories) | help | quit"
            }
            ViewModel::StandaloneDetail(_) => "Commands: back (to stories) | help | quit",
            ViewModel::Reader(_) => {
                "Commands: next | prev | back (to chapters) | help | quit"
            }
        }
    }

    fn catalog(&self, out: &mut impl Write, view: &CatalogView) -> fmt::Result {
        writeln!(out, "{}", view.heading)?;
        self.paragraph(out, view.tagline, "")?;
        writeln!(out, "{}", RULE)?;

        if view.cards.is_empty() {
            writeln!(out, "No stories available.")?;
            return Ok(());
        }

        for card in &view.cards {
            self.card(out, card)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn card(&self, out: &mut impl Write, card: &WorkCard) -> fmt::Result {
        writeln!(out, "[{}] {}", card.id, card.title)?;

        let mut byline = Vec::new();
        if let Some(author) = &card.author {
            byline.push(format!("by {}", author));
        }
        if let Some(genre) = &card.genre {
            byline.push(genre.clone());
        }
        if !byline.is_empty() {
            writeln!(out, "    {}", byline.join(" | "))?;
        }

        let mut badges = vec![format!("[{}]", card.kind.badge())];
        if let Some(status) = &card.status {
            badges.push(status_badge(status));
        }
        writeln!(out, "    {}", badges.join(" "))?;

        if let Some(description) = &card.description {
            self.paragraph(out, description, "    ")?;
        }

        let mut facts = Vec::new();
        if let Some(count) = card.declared_chapters {
            facts.push(format!("# {} chapters", count));
        }
        if let Some(date) = &card.publish_date {
            facts.push(date.clone());
        }
        if !facts.is_empty() {
            writeln!(out, "    {}", facts.join(" | "))?;
        }
        writeln!(out, "    > {}", card.action_label)?;
        Ok(())
    }

    fn series_detail(&self, out: &mut impl Write, view: &SeriesDetailView) -> fmt::Result {
        writeln!(out, "{}", view.title)?;
        if let Some(author) = &view.author {
            writeln!(out, "by {}", author)?;
        }

        let mut badges = vec!["[Series]".to_string()];
        if let Some(status) = &view.status {
            badges.push(status_badge(status));
        }
        if let Some(genre) = &view.genre {
            badges.push(format!("[{}]", genre));
        }
        writeln!(out, "{}", badges.join(" "))?;

        if let Some(description) = &view.description {
            writeln!(out)?;
            self.paragraph(out, description, "")?;
        }
        if let Some(count) = view.declared_chapters {
            writeln!(out, "\n# {} chapters", count)?;
        }

        writeln!(out, "{}", RULE)?;
        writeln!(out, "Chapters")?;
        for chapter in &view.chapters {
            write!(out, "  [{}] Chapter {}: {}", chapter.id, chapter.number, chapter.title)?;
            if let Some(date) = &chapter.publish_date {
                write!(out, "  ({})", date)?;
            }
            writeln!(out)?;
            if let Some(subtitle) = &chapter.subtitle {
                writeln!(out, "      {}", subtitle)?;
            }
        }
        Ok(())
    }

    fn standalone_detail(
        &self,
        out: &mut impl Write,
        view: &StandaloneDetailView,
    ) -> fmt::Result {
        writeln!(out, "{}", view.title)?;

        let mut meta = Vec::new();
        if let Some(author) = &view.author {
            meta.push(format!("by {}", author));
        }
        if let Some(genre) = &view.genre {
            meta.push(format!("[{}]", genre));
        }
        if let Some(date) = &view.publish_date {
            meta.push(date.clone());
        }
        if !meta.is_empty() {
            writeln!(out, "{}", meta.join(" | "))?;
        }
        if let Some(description) = &view.description {
            self.paragraph(out, description, "")?;
        }

        writeln!(out, "{}", RULE)?;
        self.body(out, &view.paragraphs)?;
        Ok(())
    }

    fn reader(&self, out: &mut impl Write, view: &ReaderView) -> fmt::Result {
        writeln!(
            out,
            "{}  Chapter {} of {}  {}",
            nav_control("prev", view.navigation.has_previous),
            view.chapter_number,
            view.total_chapters,
            nav_control("next", view.navigation.has_next),
        )?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", view.work_title)?;
        writeln!(out, "{}", view.title)?;
        if let Some(subtitle) = &view.subtitle {
            writeln!(out, "{}", subtitle)?;
        }
        if let Some(date) = &view.publish_date {
            writeln!(out, "Published: {}", date)?;
        }
        writeln!(out, "{}", RULE)?;
        self.body(out, &view.paragraphs)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", nav_bar(view.navigation))?;
        Ok(())
    }

    fn body(&self, out: &mut impl Write, paragraphs: &[String]) -> fmt::Result {
        for paragraph in paragraphs {
            self.paragraph(out, paragraph, "")?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn paragraph(&self, out: &mut impl Write, text: &str, indent: &str) -> fmt::Result {
        for line in wrap(text, self.wrap_width.saturating_sub(indent.width())) {
            writeln!(out, "{}{}", indent, line)?;
        }
        Ok(())
    }
}

fn status_badge(status: &StatusBadge) -> String {
    if status.is_ongoing {
        format!("<{}>", status.label)
    } else {
        format!("[{}]", status.label)
    }
}

/// 不可用的按钮仍然显示，只是样式不同
fn nav_control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!("( {} )", label)
    }
}

fn nav_bar(flags: NavigationFlags) -> String {
    format!(
        "{}  {}",
        nav_control("prev", flags.has_previous),
        nav_control("next", flags.has_next)
    )
}

/// 按单词折行，宽度按终端显示列计算（CJK 字符占两列）
///
/// width 为 0 时不折行；超过一行宽度的单词按字符拆分
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.width() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::viewer::{ViewStateMachine, APP_HEADING};
    use crate::domain::story::{AlternateField, Catalog, Chapter, ChapterId, Work, WorkId};

    fn machine() -> ViewStateMachine {
        let series = Work::series(
            1,
            AlternateField::secondary("Test"),
            vec![
                Chapter::new("c1", 1, "Start", "A")
                    .with_publish_date(Some("2024-03-01".into())),
                Chapter::new("c2", 2, "Next", "B"),
            ],
        )
        .unwrap()
        .with_status(Some("ongoing".into()));
        let solo = Work::standalone(2, AlternateField::primary("Solo"), Some("Hello".into()))
            .with_author(AlternateField::secondary("Ann"));
        ViewStateMachine::with_catalog(Catalog::new(vec![series, solo]).unwrap())
    }

    fn render(machine: &ViewStateMachine) -> String {
        TextRenderer::default().render(&ViewModel::from_machine(machine))
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("short", 10), vec!["short"]);
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("one two three", 0), vec!["one two three"]);
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_measures_cjk_by_display_width() {
        assert_eq!(
            wrap("天地玄黄宇宙洪荒日月盈昃辰宿列张寒来暑往", 10),
            vec!["天地玄黄宇", "宙洪荒日月", "盈昃辰宿列", "张寒来暑往"]
        );
        assert_eq!(wrap("天地玄黄 宇宙洪荒", 10), vec!["天地玄黄", "宇宙洪荒"]);
        assert_eq!(wrap("天地 ab", 7), vec!["天地 ab"]);
        for line in wrap("第一章 风起云涌，少年踏上了漫长的旅途。", 12) {
            assert!(line.width() <= 12, "{} is too wide", line);
        }
    }

    #[test]
    fn test_render_catalog() {
        let text = render(&machine());
        assert!(text.starts_with(APP_HEADING));
        assert!(text.contains("[1] Test"));
        assert!(text.contains("[Series] <ongoing>"));
        assert!(text.contains("by Ann"));
        assert!(text.contains("> Read Story"));
    }

    #[test]
    fn test_write_view_matches_render() {
        let machine = machine();
        let view = ViewModel::from_machine(&machine);
        let renderer = TextRenderer::default();

        let mut out = String::new();
        renderer.write_view(&mut out, &view).unwrap();
        assert_eq!(out, renderer.render(&view));
    }

    #[test]
    fn test_render_empty_catalog() {
        let machine = ViewStateMachine::with_catalog(Catalog::empty());
        assert!(render(&machine).contains("No stories available."));
    }

    #[test]
    fn test_render_series_detail() {
        let mut machine = machine();
        machine.select_work(&WorkId::from(1));
        let text = render(&machine);
        assert!(text.contains("[c1] Chapter 1: Start  (2024-03-01)"));
        assert!(text.contains("[c2] Chapter 2: Next"));
    }

    #[test]
    fn test_render_standalone_has_no_chapter_controls() {
        let mut machine = machine();
        machine.select_work(&WorkId::from(2));
        let text = render(&machine);
        assert!(text.contains("Hello"));
        assert!(!text.contains("prev"));
        assert!(!text.contains("next"));
    }

    #[test]
    fn test_render_reader_disabled_controls_stay_visible() {
        let mut machine = machine();
        machine.select_work(&WorkId::from(1));
        machine.select_chapter(&ChapterId::from("c1"));
        let text = render(&machine);
        assert!(text.contains("( prev )  Chapter 1 of 2  [next]"));
        assert!(text.contains("Published: 2024-03-01"));
    }
}
