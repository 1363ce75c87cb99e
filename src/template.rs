//! Template composition: `DocumentRecord` → declarative layout tree.
//!
//! One fixed visual design, top to bottom:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ ◼ Wordmark                    [section badge] │  header row
//! │                                              │
//! │ Page Title, one or two lines                 │  title (two-tier size)
//! │ ▬▬▬▬                                         │  accent divider
//! │ Page description, wrapped and truncated      │  description
//! │                                              │
//! │ tagline                        docs.site.com │  footer row
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The tree is a pure function of the record plus the fixed design constants.
//! Overflow is prevented up front: title and description are truncated to
//! fixed character budgets before the tree is built, never by runtime layout
//! negotiation, so the rendered height cannot exceed the canvas for any
//! input.
//!
//! The node model is a closed tagged variant ([`LayoutNode`]) with an
//! explicit style vocabulary, giving the renderer a shape it can match
//! exhaustively.

use crate::types::DocumentRecord;

/// Output canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1200;
/// Output canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 630;

/// Character budget for the title, ellipsis included.
pub const TITLE_MAX: usize = 70;
/// Character budget for the description, ellipsis included.
pub const DESC_MAX: usize = 140;
/// Titles longer than this drop to the smaller font size.
pub const TITLE_SIZE_THRESHOLD: usize = 40;

const TITLE_SIZE_LARGE: f32 = 64.0;
const TITLE_SIZE_SMALL: f32 = 52.0;
const CANVAS_PADDING: f32 = 64.0;

/// Brand color palette. One instance describes the whole design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub accent: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#0e1116",
            surface: "#1c2433",
            accent: "#4f8cff",
            foreground: "#f5f7fa",
            muted: "#9aa7b8",
        }
    }
}

/// Site identity rendered into every card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    /// Wordmark shown next to the glyph in the header.
    pub wordmark: String,
    /// Footer tagline, left-aligned.
    pub tagline: String,
    /// Footer destination identifier, right-aligned.
    pub site: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            wordmark: "Docs".to_string(),
            tagline: "Read the docs".to_string(),
            site: "docs.example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

/// Main-axis distribution of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    SpaceBetween,
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// CSS numeric value used in the vector markup.
    pub fn css_value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Background fill for a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: &'static str,
    pub radius: f32,
}

/// A box with styled children.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub direction: Direction,
    pub justify: Justify,
    pub align: Align,
    pub gap: f32,
    pub padding: f32,
    /// Fixed width; `None` sizes from context (see the renderer's rules).
    pub width: Option<f32>,
    /// Fixed height; `None` sizes to content.
    pub height: Option<f32>,
    pub fill: Option<Fill>,
    pub children: Vec<LayoutNode>,
}

impl Container {
    fn row() -> Self {
        Self {
            direction: Direction::Row,
            justify: Justify::Start,
            align: Align::Center,
            gap: 0.0,
            padding: 0.0,
            width: None,
            height: None,
            fill: None,
            children: Vec::new(),
        }
    }

    fn column() -> Self {
        Self {
            direction: Direction::Column,
            justify: Justify::Start,
            align: Align::Start,
            gap: 0.0,
            padding: 0.0,
            width: None,
            height: None,
            fill: None,
            children: Vec::new(),
        }
    }
}

/// A run of styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLeaf {
    pub content: String,
    pub size: f32,
    pub weight: FontWeight,
    pub color: &'static str,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

/// The declarative, renderer-agnostic description of one card.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Container(Container),
    Text(TextLeaf),
}

fn text(content: impl Into<String>, size: f32, weight: FontWeight, color: &'static str) -> LayoutNode {
    LayoutNode::Text(TextLeaf {
        content: content.into(),
        size,
        weight,
        color,
        line_height: 1.3,
    })
}

/// Truncate `text` to at most `max` characters.
///
/// Over-budget input keeps the first `max - 3` characters and appends `...`,
/// so the result is always exactly `max` characters; input at or under the
/// budget passes through unchanged. Counts are `char`s, not bytes.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Build the layout tree for one document. Pure and total: every well-formed
/// record produces a tree.
pub fn compose(record: &DocumentRecord, palette: &Palette, brand: &Brand) -> LayoutNode {
    let title = truncate(&record.title, TITLE_MAX);
    let title_size = if title.chars().count() > TITLE_SIZE_THRESHOLD {
        TITLE_SIZE_SMALL
    } else {
        TITLE_SIZE_LARGE
    };
    let description = truncate(&record.description, DESC_MAX);

    let mut header = Container::row();
    header.justify = Justify::SpaceBetween;
    header.children.push(brand_mark(palette, brand));
    if let Some(section) = record.section.as_deref() {
        header.children.push(badge(section, palette));
    }

    let mut main = Container::column();
    main.gap = 28.0;
    main.children.push(LayoutNode::Text(TextLeaf {
        content: title,
        size: title_size,
        weight: FontWeight::Bold,
        color: palette.foreground,
        line_height: 1.15,
    }));
    main.children.push(divider(palette));
    main.children.push(LayoutNode::Text(TextLeaf {
        content: description,
        size: 28.0,
        weight: FontWeight::Regular,
        color: palette.muted,
        line_height: 1.45,
    }));

    let mut footer = Container::row();
    footer.justify = Justify::SpaceBetween;
    footer
        .children
        .push(text(brand.tagline.clone(), 24.0, FontWeight::Regular, palette.muted));
    footer
        .children
        .push(text(brand.site.clone(), 24.0, FontWeight::SemiBold, palette.accent));

    let mut root = Container::column();
    root.justify = Justify::SpaceBetween;
    root.padding = CANVAS_PADDING;
    root.width = Some(CANVAS_WIDTH as f32);
    root.height = Some(CANVAS_HEIGHT as f32);
    root.fill = Some(Fill {
        color: palette.background,
        radius: 0.0,
    });
    root.children = vec![
        LayoutNode::Container(header),
        LayoutNode::Container(main),
        LayoutNode::Container(footer),
    ];
    LayoutNode::Container(root)
}

/// Fixed glyph box plus wordmark, left side of the header.
fn brand_mark(palette: &Palette, brand: &Brand) -> LayoutNode {
    let initial: String = brand
        .wordmark
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "D".to_string());

    let mut glyph = Container::row();
    glyph.justify = Justify::Center;
    glyph.width = Some(44.0);
    glyph.height = Some(44.0);
    glyph.fill = Some(Fill {
        color: palette.accent,
        radius: 10.0,
    });
    glyph
        .children
        .push(text(initial, 24.0, FontWeight::Bold, palette.background));

    let mut mark = Container::row();
    mark.gap = 16.0;
    mark.children.push(LayoutNode::Container(glyph));
    mark.children.push(text(
        brand.wordmark.clone(),
        28.0,
        FontWeight::SemiBold,
        palette.foreground,
    ));
    LayoutNode::Container(mark)
}

/// Section pill, right side of the header. Only built for nested pages.
fn badge(section: &str, palette: &Palette) -> LayoutNode {
    let mut pill = Container::row();
    pill.padding = 14.0;
    pill.fill = Some(Fill {
        color: palette.surface,
        radius: 26.0,
    });
    pill.children
        .push(text(section, 22.0, FontWeight::SemiBold, palette.accent));
    LayoutNode::Container(pill)
}

/// Decorative accent bar between title and description, constant across all
/// documents.
fn divider(palette: &Palette) -> LayoutNode {
    let mut bar = Container::row();
    bar.width = Some(120.0);
    bar.height = Some(6.0);
    bar.fill = Some(Fill {
        color: palette.accent,
        radius: 3.0,
    });
    LayoutNode::Container(bar)
}
