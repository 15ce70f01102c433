//! Server-rendered admin dashboard.
//!
//! One page listing the knowledge base and the learned patterns in the same
//! order as the JSON endpoints, built from [`crate::components`].

use chatbot_admin_core::models::{KnowledgeEntry, LearningPattern};

use crate::components::{escape_html, Container, Render, Section};

fn table(headers: &[&str], rows: Vec<Vec<String>>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("<p class=\"text-muted-foreground\">{}</p>", escape_html(empty));
    }

    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    let body: String = rows
        .into_iter()
        .map(|cells| {
            let cells: String = cells
                .iter()
                .map(|c| format!("<td>{}</td>", escape_html(c)))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    format!(
        "<table class=\"w-full text-sm\"><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        head, body
    )
}

fn knowledge_table(entries: &[KnowledgeEntry]) -> String {
    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.question.clone(),
                e.answer.clone(),
                e.category.clone().unwrap_or_default(),
                e.usage_count.to_string(),
                e.created_at.to_rfc3339(),
            ]
        })
        .collect();
    table(
        &["Question", "Answer", "Category", "Uses", "Created"],
        rows,
        "No knowledge entries yet.",
    )
}

fn patterns_table(patterns: &[LearningPattern]) -> String {
    let rows = patterns
        .iter()
        .map(|p| {
            vec![
                p.pattern.clone(),
                p.intent.clone(),
                p.response.clone().unwrap_or_default(),
                p.success_count.to_string(),
                p.created_at.to_rfc3339(),
            ]
        })
        .collect();
    table(
        &["Pattern", "Intent", "Response", "Successes", "Created"],
        rows,
        "No learned patterns yet.",
    )
}

/// Render the full HTML document.
pub fn render_dashboard(knowledge: &[KnowledgeEntry], patterns: &[LearningPattern]) -> String {
    let body = Container::new()
        .class_name("admin-chatbot")
        .child(
            Section::new()
                .id("knowledge")
                .title("Knowledge base")
                .description(format!("{} entries, most used first", knowledge.len()))
                .child(knowledge_table(knowledge)),
        )
        .child(
            Section::new()
                .id("patterns")
                .title("Learning patterns")
                .description(format!("{} patterns, most successful first", patterns.len()))
                .child(patterns_table(patterns)),
        )
        .render();

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Chatbot admin</title></head><body>{}</body></html>",
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_dashboard() {
        let html = render_dashboard(&[], &[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("No knowledge entries yet."));
        assert!(html.contains("No learned patterns yet."));
        assert!(html.contains("0 entries, most used first"));
    }

    #[test]
    fn test_rows_keep_given_order_and_are_escaped() {
        let created_at = Utc.timestamp_opt(0, 0).unwrap();
        let knowledge = vec![
            KnowledgeEntry {
                id: "1".to_string(),
                question: "How do I <reset>?".to_string(),
                answer: "Ask".to_string(),
                category: None,
                usage_count: 9,
                created_at,
            },
            KnowledgeEntry {
                id: "2".to_string(),
                question: "Second question".to_string(),
                answer: "Later".to_string(),
                category: Some("faq".to_string()),
                usage_count: 2,
                created_at,
            },
        ];
        let html = render_dashboard(&knowledge, &[]);
        assert!(html.contains("How do I &lt;reset&gt;?"));
        assert!(html.find("How do I").unwrap() < html.find("Second question").unwrap());
        assert!(html.contains("<td>faq</td>"));
    }
}
