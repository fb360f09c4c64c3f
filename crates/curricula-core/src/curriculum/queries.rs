//! Domain queries over the fixed five-level shape
//!
//! These are plain child scans rather than generic traversals: the shape is
//! known, so each level is reached by flat-mapping the one above.

use serde::Serialize;

use super::data::{ChapterData, CurriculumData, CurriculumKind, LessonData, SubtopicData, TopicData};
use super::tree::CurriculumTree;
use crate::model::TreeNode;

type Node = TreeNode<CurriculumData>;

/// One keyword match, in outline order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub kind: CurriculumKind,
    pub title: String,
    /// Titles from the textbook down to the match, inclusive
    pub path: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumStats {
    pub chapters: usize,
    pub lessons: usize,
    pub topics: usize,
    pub subtopics: usize,
    /// Includes the textbook itself
    pub total_nodes: usize,
    /// Sum over lessons that state a duration, widened so it cannot overflow
    pub total_duration_minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breadcrumb {
    pub id: String,
    pub kind: CurriculumKind,
    pub title: String,
}

fn children_of_kind(node: &Node, kind: CurriculumKind) -> impl Iterator<Item = &Node> {
    node.child_nodes().filter(move |child| child.data.kind() == kind)
}

impl CurriculumTree {
    fn chapter_nodes(&self) -> impl Iterator<Item = &Node> {
        children_of_kind(self.root(), CurriculumKind::Chapter)
    }

    fn lesson_nodes(&self) -> impl Iterator<Item = &Node> {
        self.chapter_nodes()
            .flat_map(|chapter| children_of_kind(chapter, CurriculumKind::Lesson))
    }

    fn topic_nodes(&self) -> impl Iterator<Item = &Node> {
        self.lesson_nodes()
            .flat_map(|lesson| children_of_kind(lesson, CurriculumKind::Topic))
    }

    fn subtopic_nodes(&self) -> impl Iterator<Item = &Node> {
        self.topic_nodes()
            .flat_map(|topic| children_of_kind(topic, CurriculumKind::Subtopic))
    }

    pub fn get_all_chapters(&self) -> Vec<&ChapterData> {
        self.chapter_nodes().filter_map(|n| n.data.as_chapter()).collect()
    }

    /// First chapter, in sibling order, carrying `chapter_number`
    pub fn find_chapter_by_number(&self, chapter_number: u32) -> Option<&ChapterData> {
        self.chapter_nodes()
            .filter_map(|n| n.data.as_chapter())
            .find(|chapter| chapter.chapter_number == chapter_number)
    }

    pub fn get_all_lessons(&self) -> Vec<&LessonData> {
        self.lesson_nodes().filter_map(|n| n.data.as_lesson()).collect()
    }

    pub fn get_all_topics(&self) -> Vec<&TopicData> {
        self.topic_nodes().filter_map(|n| n.data.as_topic()).collect()
    }

    pub fn get_all_subtopics(&self) -> Vec<&SubtopicData> {
        self.subtopic_nodes().filter_map(|n| n.data.as_subtopic()).collect()
    }

    /// Case-insensitive keyword search; see [`Self::search_with`]
    pub fn search_curriculum_by_keyword(&self, keyword: &str) -> Vec<SearchHit> {
        self.search_with(keyword, false)
    }

    /// Nodes whose title, description, content, chapter topics, lesson
    /// objectives or keywords contain `keyword`
    ///
    /// A blank keyword matches nothing.
    pub fn search_with(&self, keyword: &str, case_sensitive: bool) -> Vec<SearchHit> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Vec::new();
        }
        let needle = if case_sensitive {
            keyword.to_string()
        } else {
            keyword.to_lowercase()
        };
        let matches = |node: &Node| {
            node.data.searchable_text().into_iter().any(|text| {
                if case_sensitive {
                    text.contains(needle.as_str())
                } else {
                    text.to_lowercase().contains(needle.as_str())
                }
            })
        };

        let mut hits = Vec::new();
        let mut trail = Vec::new();
        collect_hits(self.root(), &mut trail, &matches, &mut hits);
        tracing::debug!(keyword, hits = hits.len(), "curriculum search");
        hits
    }

    pub fn get_curriculum_stats(&self) -> CurriculumStats {
        let lessons = self.get_all_lessons();
        let total_duration_minutes: u64 = lessons
            .iter()
            .filter_map(|l| l.duration_minutes)
            .map(u64::from)
            .sum();
        CurriculumStats {
            chapters: self.chapter_nodes().count(),
            lessons: lessons.len(),
            topics: self.topic_nodes().count(),
            subtopics: self.subtopic_nodes().count(),
            total_nodes: self.tree().total_nodes(),
            total_duration_minutes,
        }
    }

    /// Breadcrumbs from the textbook down to `id`, inclusive
    pub fn get_curriculum_path(&self, id: &str) -> Option<Vec<Breadcrumb>> {
        let mut trail = Vec::new();
        if breadcrumbs_to(self.root(), id, &mut trail) {
            Some(trail)
        } else {
            None
        }
    }
}

fn breadcrumb(node: &Node) -> Breadcrumb {
    Breadcrumb {
        id: node.id.clone(),
        kind: node.data.kind(),
        title: node.data.title().to_string(),
    }
}

fn collect_hits<F>(node: &Node, trail: &mut Vec<String>, matches: &F, hits: &mut Vec<SearchHit>)
where
    F: Fn(&Node) -> bool,
{
    trail.push(node.data.title().to_string());
    if matches(node) {
        hits.push(SearchHit {
            id: node.id.clone(),
            kind: node.data.kind(),
            title: node.data.title().to_string(),
            path: trail.clone(),
        });
    }
    for child in node.child_nodes() {
        collect_hits(child, trail, matches, hits);
    }
    trail.pop();
}

fn breadcrumbs_to(node: &Node, id: &str, trail: &mut Vec<Breadcrumb>) -> bool {
    trail.push(breadcrumb(node));
    if node.id == id || node.child_nodes().any(|child| breadcrumbs_to(child, id, trail)) {
        return true;
    }
    trail.pop();
    false
}
