#![allow(dead_code)]

use serde_json::{Value, json};
use vitae::ResumeData;
use vitae::dom::{Document, Node};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A complete, valid resume record. Contains a third job entry on purpose:
/// the template must ignore everything but `job1` and `job2`.
pub fn sample_resume_value() -> Value {
    json!({
        "title": "Jane Doe",
        "summary": "Systems engineer with a focus on reliable infrastructure.",
        "address": "123 Main St, Springfield",
        "email": "jane@example.com",
        "phone": "555-0100",
        "jobs": {
            "job1": {
                "employer": "Acme Corp",
                "jobTitle": "Senior Engineer",
                "timeWithMonth": "Jan 2020 - Present",
                "bullets": [
                    "Shipped the flagship product to production",
                    "Cut infrastructure spend by a third"
                ]
            },
            "job2": {
                "employer": "Globex Corporation",
                "jobTitle": "Engineer",
                "timeWithMonth": "Jun 2016 - Dec 2019",
                "bullets": ["Built the internal deployment tooling"]
            },
            "job3": {
                "employer": "Initech",
                "jobTitle": "Intern",
                "timeWithMonth": "Summer 2015",
                "bullets": ["Fixed the printer"]
            }
        },
        "skills": {
            "tech": ["Rust", "TypeScript"],
            "otherTech": ["Docker", "Postgres"]
        },
        "portfolio": { "github": { "title": "github.com/janedoe" } },
        "education": {
            "name": "State University",
            "degree": "BSc",
            "major": "Computer Science"
        },
        "pdfFilename": "out.pdf"
    })
}

pub fn sample_resume() -> ResumeData {
    serde_json::from_value(sample_resume_value()).expect("sample fixture must parse")
}

/// All paragraph text in the tree, in document order.
pub fn document_text(document: &Document) -> Vec<String> {
    let mut out = Vec::new();
    for child in &document.children {
        collect_text(child, &mut out);
    }
    out
}

fn collect_text(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Paragraph { content, .. } => out.push(content.clone()),
        Node::Block { children, .. } | Node::Flex { children, .. } => {
            for child in children {
                collect_text(child, out);
            }
        }
        Node::Image { .. } | Node::Rule { .. } => {}
    }
}

/// All image sources in the tree, in document order.
pub fn document_images(document: &Document) -> Vec<String> {
    let mut out = Vec::new();
    for child in &document.children {
        collect_images(child, &mut out);
    }
    out
}

fn collect_images(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Image { src, .. } => out.push(src.clone()),
        Node::Block { children, .. } | Node::Flex { children, .. } => {
            for child in children {
                collect_images(child, out);
            }
        }
        Node::Paragraph { .. } | Node::Rule { .. } => {}
    }
}

/// Position of the first occurrence of `needle` in the text sequence.
pub fn text_position(texts: &[String], needle: &str) -> Option<usize> {
    texts.iter().position(|t| t == needle)
}
