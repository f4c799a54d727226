//! Story Context - Catalog
//!
//! 一次加载、之后只读的作品集合

use std::collections::HashSet;
use std::sync::Arc;

use super::{StoryError, Work, WorkId};

/// 作品目录（不可变快照，克隆代价低）
#[derive(Debug, Clone)]
pub struct Catalog {
    works: Arc<[Arc<Work>]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            works: Arc::from(Vec::new()),
        }
    }
}

impl Catalog {
    /// 创建目录，作品 id 必须唯一
    pub fn new(works: Vec<Work>) -> Result<Self, StoryError> {
        let mut seen = HashSet::with_capacity(works.len());
        for work in &works {
            if !seen.insert(work.id()) {
                return Err(StoryError::DuplicateWork(work.id().clone()));
            }
        }
        Ok(Self {
            works: works.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn works(&self) -> &[Arc<Work>] {
        &self.works
    }

    pub fn find(&self, id: &WorkId) -> Option<&Arc<Work>> {
        self.works.iter().find(|w| w.id() == id)
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }
}
