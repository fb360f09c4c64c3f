//! Payloads carried by curriculum nodes

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ChapterId, LessonId, SubtopicId, TextbookId, TopicId};

/// The five node kinds, each pinned to one depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurriculumKind {
    Textbook,
    Chapter,
    Lesson,
    Topic,
    Subtopic,
}

impl CurriculumKind {
    pub fn depth(self) -> usize {
        match self {
            CurriculumKind::Textbook => 0,
            CurriculumKind::Chapter => 1,
            CurriculumKind::Lesson => 2,
            CurriculumKind::Topic => 3,
            CurriculumKind::Subtopic => 4,
        }
    }

    /// Kind of the children this kind accepts; `None` for subtopics
    pub fn child_kind(self) -> Option<CurriculumKind> {
        match self {
            CurriculumKind::Textbook => Some(CurriculumKind::Chapter),
            CurriculumKind::Chapter => Some(CurriculumKind::Lesson),
            CurriculumKind::Lesson => Some(CurriculumKind::Topic),
            CurriculumKind::Topic => Some(CurriculumKind::Subtopic),
            CurriculumKind::Subtopic => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CurriculumKind::Textbook => "textbook",
            CurriculumKind::Chapter => "chapter",
            CurriculumKind::Lesson => "lesson",
            CurriculumKind::Topic => "topic",
            CurriculumKind::Subtopic => "subtopic",
        }
    }
}

impl fmt::Display for CurriculumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextbookData {
    pub id: TextbookId,
    pub title: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u32>,
    /// Source document the textbook was extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterData {
    pub id: ChapterId,
    /// 1-based
    pub chapter_number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Topic headings as printed in the book's table of contents
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonData {
    pub id: LessonId,
    pub lesson_number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicData {
    pub id: TopicId,
    pub topic_number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicData {
    pub id: SubtopicId,
    pub subtopic_number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Data of any curriculum node, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CurriculumData {
    Textbook(TextbookData),
    Chapter(ChapterData),
    Lesson(LessonData),
    Topic(TopicData),
    Subtopic(SubtopicData),
}

impl CurriculumData {
    pub fn kind(&self) -> CurriculumKind {
        match self {
            CurriculumData::Textbook(_) => CurriculumKind::Textbook,
            CurriculumData::Chapter(_) => CurriculumKind::Chapter,
            CurriculumData::Lesson(_) => CurriculumKind::Lesson,
            CurriculumData::Topic(_) => CurriculumKind::Topic,
            CurriculumData::Subtopic(_) => CurriculumKind::Subtopic,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CurriculumData::Textbook(d) => d.id.as_str(),
            CurriculumData::Chapter(d) => d.id.as_str(),
            CurriculumData::Lesson(d) => d.id.as_str(),
            CurriculumData::Topic(d) => d.id.as_str(),
            CurriculumData::Subtopic(d) => d.id.as_str(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CurriculumData::Textbook(d) => &d.title,
            CurriculumData::Chapter(d) => &d.title,
            CurriculumData::Lesson(d) => &d.title,
            CurriculumData::Topic(d) => &d.title,
            CurriculumData::Subtopic(d) => &d.title,
        }
    }

    /// Position among siblings as numbered by the book; textbooks have none
    pub fn number(&self) -> Option<u32> {
        match self {
            CurriculumData::Textbook(_) => None,
            CurriculumData::Chapter(d) => Some(d.chapter_number),
            CurriculumData::Lesson(d) => Some(d.lesson_number),
            CurriculumData::Topic(d) => Some(d.topic_number),
            CurriculumData::Subtopic(d) => Some(d.subtopic_number),
        }
    }

    /// Description, or a subtopic's content
    pub fn summary(&self) -> Option<&str> {
        match self {
            CurriculumData::Textbook(d) => d.description.as_deref(),
            CurriculumData::Chapter(d) => d.description.as_deref(),
            CurriculumData::Lesson(d) => d.description.as_deref(),
            CurriculumData::Topic(d) => d.description.as_deref(),
            CurriculumData::Subtopic(d) => d.content.as_deref(),
        }
    }

    /// Every piece of free text a keyword search looks at
    pub fn searchable_text(&self) -> Vec<&str> {
        let mut text = vec![self.title()];
        text.extend(self.summary());
        let extra: &[String] = match self {
            CurriculumData::Textbook(_) => &[],
            CurriculumData::Chapter(d) => &d.topics,
            CurriculumData::Lesson(d) => &d.objectives,
            CurriculumData::Topic(d) => &d.keywords,
            CurriculumData::Subtopic(d) => &d.keywords,
        };
        text.extend(extra.iter().map(String::as_str));
        text
    }

    pub fn as_chapter(&self) -> Option<&ChapterData> {
        match self {
            CurriculumData::Chapter(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_lesson(&self) -> Option<&LessonData> {
        match self {
            CurriculumData::Lesson(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_topic(&self) -> Option<&TopicData> {
        match self {
            CurriculumData::Topic(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_subtopic(&self) -> Option<&SubtopicData> {
        match self {
            CurriculumData::Subtopic(d) => Some(d),
            _ => None,
        }
    }
}

/// Heading label, e.g. `Chapter 2: Fractions`
impl fmt::Display for CurriculumData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurriculumData::Textbook(d) => write!(f, "{}", d.title),
            CurriculumData::Chapter(d) => write!(f, "Chapter {}: {}", d.chapter_number, d.title),
            CurriculumData::Lesson(d) => write!(f, "Lesson {}: {}", d.lesson_number, d.title),
            CurriculumData::Topic(d) => write!(f, "{}. {}", d.topic_number, d.title),
            CurriculumData::Subtopic(d) => write!(f, "{}", d.title),
        }
    }
}
