//! Typed curriculum nodes and their factories
//!
//! Each wrapper can only be produced by its factory, and each factory only
//! accepts children of the next kind down, so a well-formed five-level shape
//! is guaranteed at compile time. Factories pin `depth` to the kind's level
//! and derive `index` from the domain number (`number - 1`).

use std::sync::Arc;

use super::data::{
    ChapterData, CurriculumData, CurriculumKind, LessonData, SubtopicData, TextbookData, TopicData,
};
use crate::construction::create_tree_node;
use crate::model::{NodeMetadataOverrides, TreeNode};

macro_rules! typed_node {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(TreeNode<CurriculumData>);

        impl $name {
            pub fn id(&self) -> &str {
                &self.0.id
            }

            pub fn as_node(&self) -> &TreeNode<CurriculumData> {
                &self.0
            }

            pub fn into_node(self) -> TreeNode<CurriculumData> {
                self.0
            }
        }

        impl From<$name> for Arc<TreeNode<CurriculumData>> {
            fn from(node: $name) -> Self {
                Arc::new(node.0)
            }
        }
    };
}

typed_node!(
    /// Root of a curriculum
    TextbookNode
);
typed_node!(ChapterNode);
typed_node!(LessonNode);
typed_node!(TopicNode);
typed_node!(
    /// Always a leaf
    SubtopicNode
);

fn build<C>(data: CurriculumData, number: u32, children: Vec<C>) -> TreeNode<CurriculumData>
where
    C: Into<Arc<TreeNode<CurriculumData>>>,
{
    let kind: CurriculumKind = data.kind();
    let id = data.id().to_string();
    let index = number.saturating_sub(1) as usize;
    create_tree_node(
        id,
        data,
        children,
        Some(NodeMetadataOverrides::at(kind.depth(), index)),
    )
}

pub fn create_textbook_node(data: TextbookData, chapters: Vec<ChapterNode>) -> TextbookNode {
    TextbookNode(build(CurriculumData::Textbook(data), 1, chapters))
}

pub fn create_chapter_node(data: ChapterData, lessons: Vec<LessonNode>) -> ChapterNode {
    let number = data.chapter_number;
    ChapterNode(build(CurriculumData::Chapter(data), number, lessons))
}

pub fn create_lesson_node(data: LessonData, topics: Vec<TopicNode>) -> LessonNode {
    let number = data.lesson_number;
    LessonNode(build(CurriculumData::Lesson(data), number, topics))
}

pub fn create_topic_node(data: TopicData, subtopics: Vec<SubtopicNode>) -> TopicNode {
    let number = data.topic_number;
    TopicNode(build(CurriculumData::Topic(data), number, subtopics))
}

pub fn create_subtopic_node(data: SubtopicData) -> SubtopicNode {
    let number = data.subtopic_number;
    SubtopicNode(build(
        CurriculumData::Subtopic(data),
        number,
        Vec::<SubtopicNode>::new(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::ids::{ChapterId, LessonId, SubtopicId, TopicId};

    #[test]
    fn test_factories_pin_depth_and_index() {
        let subtopic = create_subtopic_node(SubtopicData {
            id: SubtopicId::new("s-3"),
            subtopic_number: 3,
            title: "Edge cases".to_string(),
            content: None,
            keywords: vec![],
        });
        let topic = create_topic_node(
            TopicData {
                id: TopicId::new("t-1"),
                topic_number: 1,
                title: "Basics".to_string(),
                description: None,
                keywords: vec![],
            },
            vec![subtopic],
        );
        let lesson = create_lesson_node(
            LessonData {
                id: LessonId::new("l-2"),
                lesson_number: 2,
                title: "Warm-up".to_string(),
                description: None,
                objectives: vec![],
                duration_minutes: Some(30),
            },
            vec![topic],
        );
        let chapter = create_chapter_node(
            ChapterData {
                id: ChapterId::new("ch-1"),
                chapter_number: 1,
                title: "Numbers".to_string(),
                description: None,
                topics: vec![],
                start_page: None,
                end_page: None,
            },
            vec![lesson],
        );

        let node = chapter.as_node();
        assert_eq!(node.id, "ch-1");
        assert_eq!(node.metadata.depth, 1);
        assert_eq!(node.metadata.index, 0);

        let lesson = &node.children[0];
        assert_eq!(lesson.metadata.depth, 2);
        assert_eq!(lesson.metadata.index, 1);

        let subtopic = &lesson.children[0].children[0];
        assert_eq!(subtopic.metadata.depth, 4);
        assert_eq!(subtopic.metadata.index, 2);
        assert!(subtopic.is_leaf());
    }

    #[test]
    fn test_zero_number_saturates_to_first_index() {
        let chapter = create_chapter_node(
            ChapterData {
                id: ChapterId::new("ch-0"),
                chapter_number: 0,
                title: "Preface".to_string(),
                description: None,
                topics: vec![],
                start_page: None,
                end_page: None,
            },
            vec![],
        );
        assert_eq!(chapter.as_node().metadata.index, 0);
    }
}
