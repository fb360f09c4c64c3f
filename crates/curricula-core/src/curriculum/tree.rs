//! Curriculum tree and its typed mutations
//!
//! ## Logging Ownership
//!
//! The methods here own lifecycle logging for curriculum edits and call the
//! node-level engine directly, so each edit emits one start/end pair.

use std::time::Instant;

use super::data::{ChapterData, CurriculumData, CurriculumKind, LessonData};
use super::ids::{ChapterId, LessonId, TopicId};
use super::nodes::{ChapterNode, LessonNode, SubtopicNode, TextbookNode, TopicNode};
use super::validation::validate_curriculum;
use crate::errors::{Result, TreeError};
use crate::model::{Tree, TreeNode};
use crate::ops::node_ops;
use crate::queries::find_by_id;
use crate::{log_op_end, log_op_error, log_op_start};

/// A [`Tree`] of [`CurriculumData`] rooted at a textbook
#[derive(Debug, Clone, PartialEq)]
pub struct CurriculumTree {
    tree: Tree<CurriculumData>,
}

impl CurriculumTree {
    pub fn new(textbook: TextbookNode) -> Self {
        Self {
            tree: Tree::new(textbook.into_node()),
        }
    }

    /// Adopt a tree built elsewhere, typically deserialized
    ///
    /// # Errors
    /// Any [`validate_curriculum`] finding
    pub fn from_tree(tree: Tree<CurriculumData>) -> Result<Self> {
        validate_curriculum(&tree)?;
        Ok(Self { tree })
    }

    /// Shape-checked, validated load from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_tree(Tree::from_json(json)?)
    }

    pub fn tree(&self) -> &Tree<CurriculumData> {
        &self.tree
    }

    pub fn into_tree(self) -> Tree<CurriculumData> {
        self.tree
    }

    pub fn root(&self) -> &TreeNode<CurriculumData> {
        self.tree.root()
    }

    pub fn title(&self) -> &str {
        self.root().data.title()
    }

    /// Node with `id`, provided it is of `kind`
    pub(crate) fn node_of_kind(&self, id: &str, kind: CurriculumKind) -> Option<&TreeNode<CurriculumData>> {
        find_by_id(self.root(), id).filter(|node| node.data.kind() == kind)
    }

    fn next(&self, root: TreeNode<CurriculumData>) -> Self {
        Self {
            tree: self.tree.rebuilt(root),
        }
    }

    /// Append a chapter to the textbook
    pub fn add_chapter(&self, chapter: ChapterNode) -> Result<Self> {
        let root_id = self.root().id.clone();
        match self.attach("add_chapter", &root_id, CurriculumKind::Textbook, chapter.into_node())? {
            Some(tree) => Ok(tree),
            None => Err(TreeError::Internal {
                message: format!("textbook root {} not found", root_id),
            }),
        }
    }

    /// Append a lesson to a chapter; `None` when there is no such chapter
    pub fn add_lesson(&self, chapter_id: &ChapterId, lesson: LessonNode) -> Result<Option<Self>> {
        self.attach("add_lesson", chapter_id.as_str(), CurriculumKind::Chapter, lesson.into_node())
    }

    pub fn add_topic(&self, lesson_id: &LessonId, topic: TopicNode) -> Result<Option<Self>> {
        self.attach("add_topic", lesson_id.as_str(), CurriculumKind::Lesson, topic.into_node())
    }

    pub fn add_subtopic(&self, topic_id: &TopicId, subtopic: SubtopicNode) -> Result<Option<Self>> {
        self.attach("add_subtopic", topic_id.as_str(), CurriculumKind::Topic, subtopic.into_node())
    }

    fn attach(
        &self,
        op: &'static str,
        parent_id: &str,
        parent_kind: CurriculumKind,
        node: TreeNode<CurriculumData>,
    ) -> Result<Option<Self>> {
        log_op_start!(op, parent_id = parent_id, node_id = %node.id);
        let start = Instant::now();

        if self.node_of_kind(parent_id, parent_kind).is_none() {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64, found = false);
            return Ok(None);
        }

        let new_root = node_ops::insert_node(self.root(), parent_id, node).map_err(|e| {
            log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
            e
        })?;

        let tree = new_root.map(|root| self.next(root));
        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            found = tree.is_some()
        );
        Ok(tree)
    }

    /// Remove any non-root node and its subtree; unknown ids leave the
    /// content unchanged
    pub fn remove(&self, id: &str) -> Self {
        log_op_start!("remove", node_id = id);
        let start = Instant::now();

        let tree = self.next(node_ops::remove_node(self.root(), id));
        log_op_end!(
            "remove",
            duration_ms = start.elapsed().as_millis() as u64,
            total_nodes = tree.tree.total_nodes()
        );
        tree
    }

    /// Replace a chapter's data
    ///
    /// The data id stays pinned to the node id whatever `transform` returns.
    /// `metadata.index` is not re-derived from a changed `chapter_number`.
    pub fn update_chapter<F>(&self, chapter_id: &ChapterId, transform: F) -> Option<Self>
    where
        F: FnOnce(&ChapterData) -> ChapterData,
    {
        self.update("update_chapter", chapter_id.as_str(), CurriculumKind::Chapter, |data| match data {
            CurriculumData::Chapter(chapter) => CurriculumData::Chapter(ChapterData {
                id: chapter.id.clone(),
                ..transform(chapter)
            }),
            other => other.clone(),
        })
    }

    /// Replace a lesson's data; the id is pinned as in [`Self::update_chapter`]
    pub fn update_lesson<F>(&self, lesson_id: &LessonId, transform: F) -> Option<Self>
    where
        F: FnOnce(&LessonData) -> LessonData,
    {
        self.update("update_lesson", lesson_id.as_str(), CurriculumKind::Lesson, |data| match data {
            CurriculumData::Lesson(lesson) => CurriculumData::Lesson(LessonData {
                id: lesson.id.clone(),
                ..transform(lesson)
            }),
            other => other.clone(),
        })
    }

    fn update<F>(&self, op: &'static str, id: &str, kind: CurriculumKind, transform: F) -> Option<Self>
    where
        F: FnOnce(&CurriculumData) -> CurriculumData,
    {
        log_op_start!(op, node_id = id);
        let start = Instant::now();

        let tree = self
            .node_of_kind(id, kind)
            .and_then(|_| node_ops::update_node(self.root(), id, transform))
            .map(|root| self.next(root));

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            found = tree.is_some()
        );
        tree
    }

    /// Reattach a lesson under another chapter
    pub fn move_lesson(&self, lesson_id: &LessonId, chapter_id: &ChapterId) -> Result<Option<Self>> {
        self.relocate(
            "move_lesson",
            (lesson_id.as_str(), CurriculumKind::Lesson),
            (chapter_id.as_str(), CurriculumKind::Chapter),
        )
    }

    /// Reattach a topic under another lesson
    pub fn move_topic(&self, topic_id: &TopicId, lesson_id: &LessonId) -> Result<Option<Self>> {
        self.relocate(
            "move_topic",
            (topic_id.as_str(), CurriculumKind::Topic),
            (lesson_id.as_str(), CurriculumKind::Lesson),
        )
    }

    fn relocate(
        &self,
        op: &'static str,
        (node_id, node_kind): (&str, CurriculumKind),
        (parent_id, parent_kind): (&str, CurriculumKind),
    ) -> Result<Option<Self>> {
        log_op_start!(op, node_id = node_id, new_parent_id = parent_id);
        let start = Instant::now();

        let endpoints_ok = self.node_of_kind(node_id, node_kind).is_some()
            && self.node_of_kind(parent_id, parent_kind).is_some();
        if !endpoints_ok {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64, found = false);
            return Ok(None);
        }

        let new_root = node_ops::move_node(self.root(), node_id, parent_id).map_err(|e| {
            log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
            e
        })?;

        let tree = new_root.map(|root| self.next(root));
        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            found = tree.is_some()
        );
        Ok(tree)
    }
}
