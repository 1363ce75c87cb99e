//! Vector rendering: layout tree → SVG markup.
//!
//! Walks a [`LayoutNode`] tree and emits SVG sized exactly to the target
//! canvas. The design is fixed, so a small box model is enough: columns
//! stack, rows distribute (start / center / space-between), and text wraps
//! greedily against the available width using per-weight average glyph-width
//! estimates. Character budgets upstream are chosen so the estimate error
//! cannot overflow the canvas.
//!
//! The renderer performs no I/O and never fails: it is a deterministic
//! string transform. Text shaping against real font data happens later, when
//! usvg resolves the emitted `<text>` elements against the batch font
//! database.

use crate::template::{Align, Container, Direction, FontWeight, Justify, LayoutNode, TextLeaf};

/// Baseline offset below the vertical center of a line box, as a fraction of
/// the font size. Roughly half a cap height.
const BASELINE_CENTER_SHIFT: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Size {
    w: f32,
    h: f32,
}

/// Render the tree to SVG markup with the given canvas dimensions.
pub fn render_markup(root: &LayoutNode, font_family: &str, width: u32, height: u32) -> String {
    let mut renderer = Renderer {
        out: String::with_capacity(4096),
        family: escape_xml(font_family),
    };
    renderer.out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    ));
    renderer.place(root, 0.0, 0.0, width as f32);
    renderer.out.push_str("</svg>");
    renderer.out
}

/// Average advance width per character, as a fraction of the font size.
fn width_factor(weight: FontWeight) -> f32 {
    match weight {
        FontWeight::Regular => 0.50,
        FontWeight::SemiBold => 0.52,
        FontWeight::Bold => 0.54,
    }
}

fn estimate_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    text.chars().count() as f32 * size * width_factor(weight)
}

/// Greedy word wrap against a pixel budget. A single word wider than the
/// budget gets a line of its own rather than being split mid-word.
fn wrap_lines(text: &str, size: f32, weight: FontWeight, budget: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if current.is_empty() || estimate_width(&candidate, size, weight) <= budget {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

struct Renderer {
    out: String,
    family: String,
}

impl Renderer {
    fn measure(&self, node: &LayoutNode, avail_w: f32) -> Size {
        match node {
            LayoutNode::Text(leaf) => {
                let lines = wrap_lines(&leaf.content, leaf.size, leaf.weight, avail_w);
                let w = lines
                    .iter()
                    .map(|l| estimate_width(l, leaf.size, leaf.weight))
                    .fold(0.0, f32::max);
                let h = lines.len() as f32 * leaf.size * leaf.line_height;
                Size { w, h }
            }
            LayoutNode::Container(c) => self.measure_container(c, avail_w),
        }
    }

    fn measure_container(&self, c: &Container, avail_w: f32) -> Size {
        let child_avail = c.width.unwrap_or(avail_w) - 2.0 * c.padding;
        let sizes: Vec<Size> = c
            .children
            .iter()
            .map(|child| self.measure(child, child_avail))
            .collect();
        let gaps = c.gap * sizes.len().saturating_sub(1) as f32;
        let (content_w, content_h) = match c.direction {
            Direction::Row => (
                sizes.iter().map(|s| s.w).sum::<f32>() + gaps,
                sizes.iter().map(|s| s.h).fold(0.0, f32::max),
            ),
            Direction::Column => (
                sizes.iter().map(|s| s.w).fold(0.0, f32::max),
                sizes.iter().map(|s| s.h).sum::<f32>() + gaps,
            ),
        };
        // Rows shrink to their content unless they distribute it; columns are
        // block-like and span the available width.
        let w = c.width.unwrap_or(match (c.direction, c.justify) {
            (Direction::Row, Justify::Start) | (Direction::Row, Justify::Center) => {
                content_w + 2.0 * c.padding
            }
            _ => avail_w,
        });
        let h = c.height.unwrap_or(content_h + 2.0 * c.padding);
        Size { w, h }
    }

    fn place(&mut self, node: &LayoutNode, x: f32, y: f32, avail_w: f32) {
        match node {
            LayoutNode::Text(leaf) => self.place_text(leaf, x, y, avail_w),
            LayoutNode::Container(c) => self.place_container(c, x, y, avail_w),
        }
    }

    fn place_container(&mut self, c: &Container, x: f32, y: f32, avail_w: f32) {
        let size = self.measure_container(c, avail_w);
        if let Some(fill) = &c.fill {
            self.push_rect(x, y, size.w, size.h, fill.color, fill.radius);
        }

        let inner_x = x + c.padding;
        let inner_y = y + c.padding;
        let inner_w = size.w - 2.0 * c.padding;
        let inner_h = size.h - 2.0 * c.padding;
        let child_avail = c.width.unwrap_or(avail_w) - 2.0 * c.padding;

        let sizes: Vec<Size> = c
            .children
            .iter()
            .map(|child| self.measure(child, child_avail))
            .collect();
        let count = sizes.len();

        match c.direction {
            Direction::Row => {
                let sum_w: f32 = sizes.iter().map(|s| s.w).sum();
                let gap = match c.justify {
                    Justify::SpaceBetween if count > 1 => {
                        ((inner_w - sum_w) / (count - 1) as f32).max(c.gap)
                    }
                    _ => c.gap,
                };
                let content_w = sum_w + c.gap * count.saturating_sub(1) as f32;
                let mut cursor = match c.justify {
                    Justify::Center => inner_x + (inner_w - content_w) / 2.0,
                    _ => inner_x,
                };
                for (child, s) in c.children.iter().zip(&sizes) {
                    let child_y = match c.align {
                        Align::Start => inner_y,
                        Align::Center => inner_y + (inner_h - s.h) / 2.0,
                    };
                    self.place(child, cursor, child_y, child_avail);
                    cursor += s.w + gap;
                }
            }
            Direction::Column => {
                let sum_h: f32 = sizes.iter().map(|s| s.h).sum();
                let gap = match c.justify {
                    Justify::SpaceBetween if count > 1 => {
                        ((inner_h - sum_h) / (count - 1) as f32).max(c.gap)
                    }
                    _ => c.gap,
                };
                let content_h = sum_h + c.gap * count.saturating_sub(1) as f32;
                let mut cursor = match c.justify {
                    Justify::Center => inner_y + (inner_h - content_h) / 2.0,
                    _ => inner_y,
                };
                for (child, s) in c.children.iter().zip(&sizes) {
                    let child_x = match c.align {
                        Align::Start => inner_x,
                        Align::Center => inner_x + (inner_w - s.w) / 2.0,
                    };
                    self.place(child, child_x, cursor, child_avail);
                    cursor += s.h + gap;
                }
            }
        }
    }

    fn place_text(&mut self, leaf: &TextLeaf, x: f32, y: f32, avail_w: f32) {
        let lines = wrap_lines(&leaf.content, leaf.size, leaf.weight, avail_w);
        let line_box = leaf.size * leaf.line_height;
        for (i, line) in lines.iter().enumerate() {
            let baseline =
                y + line_box * i as f32 + line_box / 2.0 + leaf.size * BASELINE_CENTER_SHIFT;
            self.out.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{baseline:.1}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\">{}</text>",
                self.family,
                leaf.size,
                leaf.weight.css_value(),
                leaf.color,
                escape_xml(line),
            ));
        }
    }

    fn push_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str, radius: f32) {
        self.out.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" rx=\"{radius:.1}\" fill=\"{color}\"/>"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Brand, Palette, compose};
    use crate::types::DocumentRecord;
    use std::path::PathBuf;

    fn sample_markup() -> String {
        let record = DocumentRecord::new(
            PathBuf::from("/docs/getting-started/quick-start.md"),
            "getting-started/quick-start".to_string(),
            "Quick Start".to_string(),
            "Create your first schema in 5 minutes".to_string(),
        );
        let tree = compose(&record, &Palette::default(), &Brand::default());
        render_markup(&tree, "Fira Sans", 1200, 630)
    }

    #[test]
    fn markup_declares_canvas_dimensions() {
        let svg = sample_markup();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("width=\"1200\" height=\"630\" viewBox=\"0 0 1200 630\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn markup_contains_title_and_badge_text() {
        let svg = sample_markup();
        assert!(svg.contains(">Quick Start</text>"));
        assert!(svg.contains(">getting started</text>"));
        assert!(svg.contains("Create your first schema in 5 minutes"));
    }

    #[test]
    fn markup_is_deterministic() {
        assert_eq!(sample_markup(), sample_markup());
    }

    #[test]
    fn text_content_is_escaped() {
        let record = DocumentRecord::new(
            PathBuf::from("/docs/a.md"),
            "a".to_string(),
            "<Fish & Chips>".to_string(),
            "\"quoted\"".to_string(),
        );
        let tree = compose(&record, &Palette::default(), &Brand::default());
        let svg = render_markup(&tree, "Fira Sans", 1200, 630);
        assert!(svg.contains("&lt;Fish &amp; Chips&gt;"));
        assert!(svg.contains("&quot;quoted&quot;"));
        assert!(!svg.contains("<Fish"));
    }

    // =========================================================================
    // Wrapping and measurement
    // =========================================================================

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_lines("Quick Start", 64.0, FontWeight::Bold, 1072.0);
        assert_eq!(lines, vec!["Quick Start"]);
    }

    #[test]
    fn long_text_wraps_at_word_boundaries() {
        let lines = wrap_lines(
            "one two three four five six seven eight",
            28.0,
            FontWeight::Regular,
            200.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(estimate_width(line, 28.0, FontWeight::Regular) <= 200.0);
        }
        assert_eq!(lines.join(" "), "one two three four five six seven eight");
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_lines("hi aaaaaaaaaaaaaaaaaaaaaaaaaaaaa", 28.0, FontWeight::Regular, 100.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "hi");
    }

    #[test]
    fn empty_text_produces_no_lines() {
        assert!(wrap_lines("", 28.0, FontWeight::Regular, 100.0).is_empty());
    }

    #[test]
    fn space_between_pins_last_child_to_right_edge() {
        use crate::template::{Container, Direction, Justify, LayoutNode, TextLeaf};
        let leaf = |content: &str| {
            LayoutNode::Text(TextLeaf {
                content: content.to_string(),
                size: 10.0,
                weight: FontWeight::Regular,
                color: "#fff",
                line_height: 1.3,
            })
        };
        let row = LayoutNode::Container(Container {
            direction: Direction::Row,
            justify: Justify::SpaceBetween,
            align: Align::Start,
            gap: 0.0,
            padding: 0.0,
            width: Some(1000.0),
            height: None,
            fill: None,
            children: vec![leaf("a"), leaf("b")],
        });
        let svg = render_markup(&row, "Fira Sans", 1000, 100);
        // Each glyph estimates to 5px; the second starts at 1000 - 5.
        assert!(svg.contains("x=\"0.0\""));
        assert!(svg.contains("x=\"995.0\""));
    }
}
