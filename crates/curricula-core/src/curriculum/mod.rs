//! Curriculum specialization: textbook → chapter → lesson → topic → subtopic
//!
//! The generic engine with five closed node kinds. Typed factories build
//! well-formed trees, [`CurriculumTree`] offers domain queries and typed
//! edits, and [`validate_curriculum`] checks documents loaded from outside.

pub mod data;
pub mod ids;
pub mod nodes;
pub mod queries;
pub mod tree;
pub mod validation;

pub use data::{
    ChapterData, CurriculumData, CurriculumKind, LessonData, SubtopicData, TextbookData, TopicData,
};
pub use ids::{ChapterId, LessonId, SubtopicId, TextbookId, TopicId};
pub use nodes::{
    create_chapter_node, create_lesson_node, create_subtopic_node, create_textbook_node,
    create_topic_node, ChapterNode, LessonNode, SubtopicNode, TextbookNode, TopicNode,
};
pub use queries::{Breadcrumb, CurriculumStats, SearchHit};
pub use tree::CurriculumTree;
pub use validation::validate_curriculum;
