//! The layout builder: maps a `ResumeData` record onto the fixed resume
//! page structure.
//!
//! The mapping is deliberately not a template engine. The visual structure
//! and every style constant are fixed in code; the data only fills in the
//! text. Exactly two job entries are rendered, taken from the literal
//! `job1` and `job2` keys of the `jobs` map regardless of what else the
//! map contains.

use crate::data::{Education, ResumeData};
use crate::dom::{Document, Node};
use crate::render::{EngineConfig, FontSpec};
use crate::stylesheet::{
    AlignItems, Color, Dimension, ElementStyle, FlexDirection, FontWeight, JustifyContent,
    Margins, PageLayout, PageSize,
};
use std::path::Path;
use thiserror::Error;

pub const HEADING_FAMILY: &str = "Figtree";
pub const BODY_FAMILY: &str = "Lato";
pub const HEADING_FONT_ASSET: &str = "assets/fonts/Figtree-Bold.ttf";
pub const BODY_FONT_ASSET: &str = "assets/fonts/Lato-Regular.ttf";

const LOCATION_ICON: &str = "assets/icons/map-pin.png";
const MAIL_ICON: &str = "assets/icons/mail.png";
const PHONE_ICON: &str = "assets/icons/phone.png";

const HEADING_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 9.0;
const TITLE_SIZE: f32 = 32.0;
const SECTION_TITLE_SIZE: f32 = 12.0;
const PAGE_MARGIN: f32 = 12.0;
const BANNER_HEIGHT: f32 = 12.0;
const RULE_HEIGHT: f32 = 1.5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("resume data has no '{0}' entry in 'jobs'")]
    MissingJob(&'static str),
}

/// The engine initialization object for this template: the two font
/// families it uses, resolved against the asset root, with hyphenation
/// disabled so long words are never broken mid-word.
pub fn engine_config(asset_root: &Path) -> EngineConfig {
    EngineConfig::new(vec![
        FontSpec {
            family: HEADING_FAMILY.to_string(),
            source: asset_root.join(HEADING_FONT_ASSET),
        },
        FontSpec {
            family: BODY_FAMILY.to_string(),
            source: asset_root.join(BODY_FONT_ASSET),
        },
    ])
}

/// Builds the visual document tree for one resume. Pure; the only failure
/// is a missing `job1`/`job2` entry.
pub fn build_document(data: &ResumeData) -> Result<Document, TemplateError> {
    Ok(Document {
        title: data.title.clone(),
        page: PageLayout {
            size: PageSize::Letter,
            margins: Margins::all(PAGE_MARGIN),
        },
        children: vec![banner(), header(data), body(data)?],
    })
}

fn heading_font(size: f32) -> ElementStyle {
    ElementStyle {
        font_family: Some(HEADING_FAMILY.to_string()),
        font_size: Some(size),
        ..Default::default()
    }
}

fn body_font(size: f32) -> ElementStyle {
    ElementStyle {
        font_family: Some(BODY_FAMILY.to_string()),
        font_size: Some(size),
        ..Default::default()
    }
}

fn banner() -> Node {
    Node::Rule {
        style: ElementStyle {
            height: Some(Dimension::Pt(BANNER_HEIGHT)),
            background_color: Some(Color::BLACK),
            ..Default::default()
        },
    }
}

fn header(data: &ResumeData) -> Node {
    Node::Flex {
        style: ElementStyle {
            padding: Some(Margins {
                top: 16.0,
                right: 12.0,
                bottom: 8.0,
                left: 12.0,
            }),
            ..Default::default()
        },
        children: vec![
            Node::Block {
                style: ElementStyle {
                    flex_grow: Some(2.0),
                    ..Default::default()
                },
                children: vec![
                    Node::Paragraph {
                        style: ElementStyle {
                            font_weight: Some(FontWeight::Bold),
                            ..heading_font(TITLE_SIZE)
                        },
                        content: data.title.clone(),
                    },
                    Node::Paragraph {
                        style: ElementStyle {
                            margin: Some(Margins {
                                top: 8.0,
                                ..Default::default()
                            }),
                            ..body_font(HEADING_SIZE)
                        },
                        content: data.summary.clone(),
                    },
                ],
            },
            Node::Flex {
                style: ElementStyle {
                    flex_grow: Some(1.0),
                    flex_direction: Some(FlexDirection::Column),
                    align_items: Some(AlignItems::FlexEnd),
                    padding: Some(Margins {
                        top: 8.0,
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                children: vec![
                    header_detail(LOCATION_ICON, &data.address),
                    header_detail(MAIL_ICON, &data.email),
                    header_detail(PHONE_ICON, &data.phone),
                ],
            },
        ],
    }
}

fn header_detail(icon: &str, text: &str) -> Node {
    Node::Flex {
        style: ElementStyle {
            align_items: Some(AlignItems::Center),
            ..Default::default()
        },
        children: vec![
            Node::Image {
                style: ElementStyle {
                    width: Some(Dimension::Pt(HEADING_SIZE)),
                    height: Some(Dimension::Pt(HEADING_SIZE)),
                    margin: Some(Margins {
                        right: 6.0,
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                src: icon.to_string(),
            },
            Node::Paragraph {
                style: ElementStyle {
                    margin: Some(Margins::y(1.0)),
                    ..body_font(HEADING_SIZE)
                },
                content: text.to_string(),
            },
        ],
    }
}

fn body(data: &ResumeData) -> Result<Node, TemplateError> {
    Ok(Node::Flex {
        style: ElementStyle::default(),
        children: vec![
            Node::Block {
                style: ElementStyle {
                    width: Some(Dimension::Percent(70.0)),
                    ..Default::default()
                },
                children: vec![section(
                    "professional experience",
                    vec![job_entry(data, "job1")?, job_entry(data, "job2")?],
                )],
            },
            Node::Block {
                style: ElementStyle {
                    width: Some(Dimension::Percent(30.0)),
                    ..Default::default()
                },
                children: vec![
                    section(
                        "Skills",
                        vec![
                            skill_category("Tech", &data.skills.tech),
                            skill_category("Other Tech", &data.skills.other_tech),
                        ],
                    ),
                    section("Portfolio", vec![portfolio_row(&data.portfolio.github.title)]),
                    section("Education", vec![education_block(&data.education)]),
                ],
            },
        ],
    })
}

/// A titled section: uppercased heading, a thin rule, then the content.
fn section(title: &str, children: Vec<Node>) -> Node {
    Node::Block {
        style: ElementStyle {
            padding: Some(Margins {
                top: 12.0,
                ..Default::default()
            }),
            ..Default::default()
        },
        children: vec![Node::Block {
            style: ElementStyle {
                margin: Some(Margins::x(16.0)),
                ..Default::default()
            },
            children: vec![
                Node::Paragraph {
                    style: heading_font(SECTION_TITLE_SIZE),
                    content: title.to_uppercase(),
                },
                Node::Rule {
                    style: ElementStyle {
                        height: Some(Dimension::Pt(RULE_HEIGHT)),
                        background_color: Some(Color::BLACK),
                        margin: Some(Margins {
                            top: 2.0,
                            bottom: 4.0,
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                },
                Node::Block {
                    style: ElementStyle {
                        margin: Some(Margins {
                            top: 4.0,
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                    children,
                },
            ],
        }],
    }
}

fn job_entry(data: &ResumeData, key: &'static str) -> Result<Node, TemplateError> {
    let job = data.jobs.get(key).ok_or(TemplateError::MissingJob(key))?;
    Ok(Node::Block {
        style: ElementStyle {
            margin: Some(Margins {
                bottom: 16.0,
                ..Default::default()
            }),
            ..Default::default()
        },
        children: vec![
            entry_header(&job.employer, &job.job_title, &job.time_with_month),
            Node::Block {
                style: ElementStyle {
                    margin: Some(Margins {
                        left: 4.0,
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                children: job.bullets.iter().map(|bullet| bullet_row(bullet)).collect(),
            },
        ],
    })
}

/// `label | sublabel` on the left, `(time)` pinned to the right edge.
fn entry_header(label: &str, sublabel: &str, time: &str) -> Node {
    Node::Flex {
        style: ElementStyle {
            justify_content: Some(JustifyContent::SpaceBetween),
            margin: Some(Margins {
                bottom: 8.0,
                ..Default::default()
            }),
            ..Default::default()
        },
        children: vec![
            Node::Flex {
                style: ElementStyle::default(),
                children: vec![
                    Node::Paragraph {
                        style: ElementStyle {
                            margin: Some(Margins {
                                right: 4.0,
                                ..Default::default()
                            }),
                            ..heading_font(HEADING_SIZE)
                        },
                        content: label.to_string(),
                    },
                    Node::Paragraph {
                        style: heading_font(HEADING_SIZE),
                        content: "|".to_string(),
                    },
                    Node::Paragraph {
                        style: ElementStyle {
                            margin: Some(Margins {
                                left: 4.0,
                                ..Default::default()
                            }),
                            ..body_font(HEADING_SIZE)
                        },
                        content: sublabel.to_string(),
                    },
                ],
            },
            Node::Paragraph {
                style: body_font(HEADING_SIZE),
                content: format!("({})", time),
            },
        ],
    }
}

fn bullet_row(text: &str) -> Node {
    Node::Flex {
        style: ElementStyle::default(),
        children: vec![
            Node::Paragraph {
                style: ElementStyle {
                    margin: Some(Margins::x(4.0)),
                    ..body_font(BODY_SIZE)
                },
                content: "\u{2022}".to_string(),
            },
            Node::Paragraph {
                style: ElementStyle {
                    margin: Some(Margins {
                        bottom: 4.0,
                        ..Default::default()
                    }),
                    flex_grow: Some(1.0),
                    ..body_font(BODY_SIZE)
                },
                content: text.to_string(),
            },
        ],
    }
}

fn skill_category(title: &str, skills: &[String]) -> Node {
    Node::Block {
        style: ElementStyle {
            margin: Some(Margins {
                bottom: 12.0,
                ..Default::default()
            }),
            ..Default::default()
        },
        children: vec![
            Node::Paragraph {
                style: ElementStyle {
                    margin: Some(Margins {
                        bottom: 4.0,
                        ..Default::default()
                    }),
                    ..heading_font(HEADING_SIZE)
                },
                content: title.to_string(),
            },
            Node::Paragraph {
                style: body_font(BODY_SIZE),
                content: skills.join(", "),
            },
        ],
    }
}

fn portfolio_row(title: &str) -> Node {
    Node::Flex {
        style: ElementStyle {
            margin: Some(Margins {
                bottom: 8.0,
                ..Default::default()
            }),
            ..Default::default()
        },
        children: vec![
            Node::Paragraph {
                style: ElementStyle {
                    margin: Some(Margins {
                        right: 4.0,
                        ..Default::default()
                    }),
                    ..heading_font(HEADING_SIZE)
                },
                content: "Github".to_string(),
            },
            Node::Paragraph {
                style: heading_font(HEADING_SIZE),
                content: "|".to_string(),
            },
            Node::Paragraph {
                style: ElementStyle {
                    margin: Some(Margins {
                        left: 4.0,
                        ..Default::default()
                    }),
                    ..body_font(HEADING_SIZE)
                },
                content: title.to_string(),
            },
        ],
    }
}

fn education_block(education: &Education) -> Node {
    Node::Block {
        style: ElementStyle {
            margin: Some(Margins {
                bottom: 4.0,
                ..Default::default()
            }),
            ..Default::default()
        },
        children: vec![
            Node::Paragraph {
                style: ElementStyle {
                    margin: Some(Margins {
                        bottom: 4.0,
                        ..Default::default()
                    }),
                    ..heading_font(BODY_SIZE)
                },
                content: education.name.clone(),
            },
            Node::Paragraph {
                style: body_font(BODY_SIZE),
                content: format!("{} in {}", education.degree, education.major),
            },
        ],
    }
}
