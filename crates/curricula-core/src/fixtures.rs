//! Shared unit-test trees

use crate::construction::{create_leaf_node, create_tree_node};
use crate::model::{NodeMetadataOverrides, TreeNode};

fn at(depth: usize, index: usize) -> Option<NodeMetadataOverrides> {
    Some(NodeMetadataOverrides::at(depth, index))
}

pub(crate) fn leaf(id: &str, depth: usize, index: usize) -> TreeNode<String> {
    create_leaf_node(id, id.to_uppercase(), at(depth, index))
}

//      root
//     /    \
// child1  child2
//    |       |
//  leaf1   leaf2
pub(crate) fn sample() -> TreeNode<String> {
    let child1 = create_tree_node("child1", "CHILD1".to_string(), vec![leaf("leaf1", 2, 0)], at(1, 0));
    let child2 = create_tree_node("child2", "CHILD2".to_string(), vec![leaf("leaf2", 2, 0)], at(1, 1));
    create_tree_node("root", "ROOT".to_string(), vec![child1, child2], at(0, 0))
}

/// A single chain of `len` nodes `n0 -> n1 -> ...`, rooted at depth 0
pub(crate) fn chain(len: usize) -> TreeNode<String> {
    let mut node = leaf(&format!("n{}", len - 1), len - 1, 0);
    for depth in (0..len - 1).rev() {
        let id = format!("n{}", depth);
        node = create_tree_node(id.clone(), id.to_uppercase(), vec![node], at(depth, 0));
    }
    node
}

pub(crate) mod curriculum {
    use crate::curriculum::*;

    pub(crate) fn chapter(n: u32, title: &str, lessons: Vec<LessonNode>) -> ChapterNode {
        create_chapter_node(
            ChapterData {
                id: ChapterId::new(format!("ch-{}", n)),
                chapter_number: n,
                title: title.to_string(),
                description: None,
                topics: vec![],
                start_page: None,
                end_page: None,
            },
            lessons,
        )
    }

    pub(crate) fn lesson(id: &str, n: u32, title: &str, minutes: Option<u32>, topics: Vec<TopicNode>) -> LessonNode {
        create_lesson_node(
            LessonData {
                id: LessonId::new(id),
                lesson_number: n,
                title: title.to_string(),
                description: None,
                objectives: vec![],
                duration_minutes: minutes,
            },
            topics,
        )
    }

    pub(crate) fn topic(id: &str, n: u32, title: &str, keywords: &[&str], subtopics: Vec<SubtopicNode>) -> TopicNode {
        create_topic_node(
            TopicData {
                id: TopicId::new(id),
                topic_number: n,
                title: title.to_string(),
                description: None,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            },
            subtopics,
        )
    }

    pub(crate) fn subtopic(id: &str, n: u32, title: &str) -> SubtopicNode {
        create_subtopic_node(SubtopicData {
            id: SubtopicId::new(id),
            subtopic_number: n,
            title: title.to_string(),
            content: None,
            keywords: vec![],
        })
    }

    /// Algebra
    /// - Chapter 1: Expressions
    ///   - Lesson 1 (l-1-1, 40 min): Variables
    ///     - 1. Symbols [letters] - Greek letters
    ///   - Lesson 2 (l-1-2, 35 min): Simplifying
    /// - Chapter 2: Equations
    ///   - Lesson 1 (l-2-1): Balancing
    ///     - 1. Inverse operations
    pub(crate) fn sample_curriculum() -> CurriculumTree {
        let ch1 = chapter(
            1,
            "Expressions",
            vec![
                lesson(
                    "l-1-1",
                    1,
                    "Variables",
                    Some(40),
                    vec![topic("t-1-1-1", 1, "Symbols", &["letters"], vec![subtopic("s-1", 1, "Greek letters")])],
                ),
                lesson("l-1-2", 2, "Simplifying", Some(35), vec![]),
            ],
        );
        let ch2 = chapter(
            2,
            "Equations",
            vec![lesson(
                "l-2-1",
                1,
                "Balancing",
                None,
                vec![topic("t-2-1-1", 1, "Inverse operations", &[], vec![])],
            )],
        );
        let textbook = create_textbook_node(
            TextbookData {
                id: TextbookId::new("tb-algebra"),
                title: "Algebra".to_string(),
                subject: "Mathematics".to_string(),
                grade: Some(8),
                file_name: None,
                total_pages: None,
                description: None,
            },
            vec![ch1, ch2],
        );
        CurriculumTree::new(textbook)
    }
}
