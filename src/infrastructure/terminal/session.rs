//! Terminal Session - 交互式阅读循环
//!
//! 在同一个任务里复用两类事件：用户输入的行与目录加载完成。
//! 循环结束时丢弃未完成的加载句柄，迟到的结果被忽略。

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{Command, TextRenderer};
use crate::application::catalog::PendingCatalog;
use crate::application::error::ApplicationError;
use crate::application::viewer::{ViewEvent, ViewMode, ViewModel, ViewStateMachine};

/// 处理一行输入后的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 终端会话
pub struct TerminalSession<W: Write> {
    machine: ViewStateMachine,
    renderer: TextRenderer,
    out: W,
}

impl<W: Write> TerminalSession<W> {
    pub fn new(renderer: TextRenderer, out: W) -> Self {
        Self {
            machine: ViewStateMachine::new(),
            renderer,
            out,
        }
    }

    pub fn machine(&self) -> &ViewStateMachine {
        &self.machine
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// 运行直到 quit 或输入结束
    pub async fn run<R>(&mut self, input: R, pending: PendingCatalog) -> Result<(), ApplicationError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut pending = pending;

        self.draw()?;

        loop {
            tokio::select! {
                biased;

                catalog = &mut pending, if self.machine.is_loading() => {
                    self.machine.catalog_loaded(catalog);
                    self.draw()?;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::debug!("Input closed");
                        break;
                    };
                    if self.handle_line(&line)? == Flow::Quit {
                        break;
                    }
                }
            }
        }

        tracing::info!("Session ended");
        Ok(())
    }

    /// 处理一行输入
    pub fn handle_line(&mut self, line: &str) -> Result<Flow, ApplicationError> {
        let command = Command::parse(line);
        match &command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => return Ok(Flow::Continue),
            Command::Help => {
                let view = ViewModel::from_machine(&self.machine);
                writeln!(self.out, "{}", self.renderer.help(&view))?;
                self.out.flush()?;
                return Ok(Flow::Continue);
            }
            Command::Unknown(text) => {
                self.notice(&format!("Unknown command: {}. Type 'help' for commands.", text))?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        if self.machine.is_loading() {
            self.notice("Still loading stories...")?;
            return Ok(Flow::Continue);
        }

        let Some(event) = command.to_event(self.machine.mode()) else {
            self.notice("Not available here. Type 'help' for commands.")?;
            return Ok(Flow::Continue);
        };

        let mode = self.machine.mode();
        if self.machine.dispatch(event.clone()) {
            self.draw()?;
        } else {
            self.notice(&rejection_message(&event, mode))?;
        }
        Ok(Flow::Continue)
    }

    fn draw(&mut self) -> Result<(), ApplicationError> {
        let view = ViewModel::from_machine(&self.machine);
        write!(self.out, "\n{}", self.renderer.render(&view))?;
        writeln!(self.out, "{}", self.renderer.help(&view))?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<(), ApplicationError> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }
}

fn rejection_message(event: &ViewEvent, mode: ViewMode) -> String {
    match (event, mode) {
        (ViewEvent::SelectWork(id), ViewMode::Catalog) => format!("No story with id {}.", id),
        (ViewEvent::SelectChapter(id), ViewMode::SeriesDetail) => {
            format!("No chapter with id {}.", id)
        }
        (ViewEvent::NextChapter, ViewMode::Reader) => "Already at the last chapter.".to_string(),
        (ViewEvent::PreviousChapter, ViewMode::Reader) => {
            "Already at the first chapter.".to_string()
        }
        (ViewEvent::BackToCatalog, ViewMode::Reader) => {
            "Go back to the chapter list first.".to_string()
        }
        _ => "Not available here.".to_string(),
    }
}
