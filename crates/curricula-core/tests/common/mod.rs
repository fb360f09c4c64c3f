use curricula_core::construction::{create_leaf_node, create_tree_node};
use curricula_core::curriculum::*;
use curricula_core::model::{NodeMetadataOverrides, TreeNode};

fn at(depth: usize, index: usize) -> Option<NodeMetadataOverrides> {
    Some(NodeMetadataOverrides::at(depth, index))
}

/// Leaf whose data is its upper-cased id
#[allow(dead_code)]
pub fn leaf(id: &str, depth: usize) -> TreeNode<String> {
    create_leaf_node(id, id.to_uppercase(), at(depth, 0))
}

/// root → [child1 → [leaf1], child2 → [leaf2]]
#[allow(dead_code)]
pub fn sample_tree() -> TreeNode<String> {
    let child1 = create_tree_node("child1", "CHILD1".to_string(), vec![leaf("leaf1", 2)], at(1, 0));
    let child2 = create_tree_node("child2", "CHILD2".to_string(), vec![leaf("leaf2", 2)], at(1, 1));
    create_tree_node("root", "ROOT".to_string(), vec![child1, child2], None)
}

/// `{prefix}0 → {prefix}1 → …` with `len` nodes, rooted at depth 0
#[allow(dead_code)]
pub fn chain(prefix: &str, len: usize) -> TreeNode<String> {
    let mut node = leaf(&format!("{}{}", prefix, len - 1), len - 1);
    for depth in (0..len - 1).rev() {
        let id = format!("{}{}", prefix, depth);
        node = create_tree_node(id.clone(), id.to_uppercase(), vec![node], at(depth, 0));
    }
    node
}

#[allow(dead_code)]
pub fn lesson(id: &str, n: u32, title: &str, minutes: Option<u32>, topics: Vec<TopicNode>) -> LessonNode {
    create_lesson_node(
        LessonData {
            id: LessonId::new(id),
            lesson_number: n,
            title: title.to_string(),
            description: None,
            objectives: vec![format!("Understand {}", title.to_lowercase())],
            duration_minutes: minutes,
        },
        topics,
    )
}

#[allow(dead_code)]
pub fn chapter(n: u32, title: &str, lessons: Vec<LessonNode>) -> ChapterNode {
    create_chapter_node(
        ChapterData {
            id: ChapterId::new(format!("ch-{}", n)),
            chapter_number: n,
            title: title.to_string(),
            description: Some(format!("All about {}", title.to_lowercase())),
            topics: vec![],
            start_page: Some(n * 10),
            end_page: Some(n * 10 + 9),
        },
        lessons,
    )
}

/// Cells and Life (grade 6)
/// - Chapter 1: Cells
///   - Lesson 1 (l-1-1, 45 min): Cell structure
///     - 1. Membranes [lipids]
///       - 1. Phospholipid bilayer
///     - 2. Organelles [mitochondria, nucleus]
///   - Lesson 2 (l-1-2, 30 min): Cell division
/// - Chapter 2: Ecosystems
///   - Lesson 1 (l-2-1): Food webs
#[allow(dead_code)]
pub fn sample_curriculum() -> CurriculumTree {
    let membranes = create_topic_node(
        TopicData {
            id: TopicId::new("t-1-1-1"),
            topic_number: 1,
            title: "Membranes".to_string(),
            description: None,
            keywords: vec!["lipids".to_string()],
        },
        vec![create_subtopic_node(SubtopicData {
            id: SubtopicId::new("s-1-1-1-1"),
            subtopic_number: 1,
            title: "Phospholipid bilayer".to_string(),
            content: Some("Two layers of lipids with hydrophobic tails".to_string()),
            keywords: vec![],
        })],
    );
    let organelles = create_topic_node(
        TopicData {
            id: TopicId::new("t-1-1-2"),
            topic_number: 2,
            title: "Organelles".to_string(),
            description: None,
            keywords: vec!["mitochondria".to_string(), "nucleus".to_string()],
        },
        vec![],
    );

    let cells = chapter(
        1,
        "Cells",
        vec![
            lesson("l-1-1", 1, "Cell structure", Some(45), vec![membranes, organelles]),
            lesson("l-1-2", 2, "Cell division", Some(30), vec![]),
        ],
    );
    let ecosystems = chapter(2, "Ecosystems", vec![lesson("l-2-1", 1, "Food webs", None, vec![])]);

    let textbook = create_textbook_node(
        TextbookData {
            id: TextbookId::new("tb-bio"),
            title: "Cells and Life".to_string(),
            subject: "Biology".to_string(),
            grade: Some(6),
            file_name: Some("cells_and_life.pdf".to_string()),
            total_pages: Some(120),
            description: None,
        },
        vec![cells, ecosystems],
    );
    CurriculumTree::new(textbook)
}

#[allow(dead_code)]
pub fn ids<T>(nodes: &[&TreeNode<T>]) -> Vec<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}
