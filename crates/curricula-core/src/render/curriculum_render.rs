use crate::curriculum::{CurriculumData, CurriculumTree};
use crate::model::TreeNode;

/// Render a curriculum to Markdown
///
/// Generates one heading per node, `#` for the textbook down to `#####` for
/// subtopics, in outline order, followed by whatever detail the node carries:
/// - Subject and grade under the textbook title
/// - Page range and table-of-contents topics for chapters
/// - Duration and objectives for lessons
/// - Keywords for topics and subtopics
/// - Descriptions and subtopic content as paragraphs
pub fn render_curriculum(tree: &CurriculumTree) -> String {
    let mut output = String::new();
    render_node(tree.root(), 1, &mut output);
    output
}

fn render_node(node: &TreeNode<CurriculumData>, level: usize, output: &mut String) {
    output.push_str(&format!("{} {}\n\n", "#".repeat(level.min(6)), node.data));

    match &node.data {
        CurriculumData::Textbook(textbook) => {
            let mut line = textbook.subject.clone();
            if let Some(grade) = textbook.grade {
                line.push_str(&format!(", grade {}", grade));
            }
            output.push_str(&format!("*{}*\n\n", line));
        }
        CurriculumData::Chapter(chapter) => {
            if let (Some(start), Some(end)) = (chapter.start_page, chapter.end_page) {
                output.push_str(&format!("**Pages**: {}-{}\n\n", start, end));
            }
            push_list(output, "Topics", &chapter.topics);
        }
        CurriculumData::Lesson(lesson) => {
            if let Some(minutes) = lesson.duration_minutes {
                output.push_str(&format!("**Duration**: {} min\n\n", minutes));
            }
            push_list(output, "Objectives", &lesson.objectives);
        }
        CurriculumData::Topic(topic) => push_keywords(output, &topic.keywords),
        CurriculumData::Subtopic(subtopic) => push_keywords(output, &subtopic.keywords),
    }

    if let Some(summary) = node.data.summary() {
        output.push_str(&format!("{}\n\n", summary));
    }

    for child in node.child_nodes() {
        render_node(child, level + 1, output);
    }
}

fn push_list(output: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("**{}**:\n\n", label));
    for item in items {
        output.push_str(&format!("- {}\n", item));
    }
    output.push('\n');
}

fn push_keywords(output: &mut String, keywords: &[String]) {
    if !keywords.is_empty() {
        output.push_str(&format!("**Keywords**: {}\n\n", keywords.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::curriculum::sample_curriculum;

    #[test]
    fn test_render_curriculum_headings() {
        let rendered = render_curriculum(&sample_curriculum());

        assert!(rendered.starts_with("# Algebra\n\n*Mathematics, grade 8*\n\n"));
        assert!(rendered.contains("## Chapter 1: Expressions\n"));
        assert!(rendered.contains("### Lesson 1: Variables\n\n**Duration**: 40 min\n"));
        assert!(rendered.contains("#### 1. Symbols\n\n**Keywords**: letters\n"));
        assert!(rendered.contains("##### Greek letters\n"));

        let ch1 = rendered.find("## Chapter 1").unwrap();
        let ch2 = rendered.find("## Chapter 2").unwrap();
        let greek = rendered.find("Greek letters").unwrap();
        assert!(ch1 < greek && greek < ch2);
    }
}
