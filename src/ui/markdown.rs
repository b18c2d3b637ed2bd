// Markdown rendering for the response panel
// Parses model output into blocks, then draws them with egui widgets

use eframe::egui;

/// One block of rendered markdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#` to `######` heading
    Heading { level: u8, text: String },
    /// Fenced code block, language tag if given
    Code { lang: Option<String>, code: String },
    /// `-`, `*` or `+` list item
    Bullet(String),
    /// `1.` style list item
    Numbered { number: String, text: String },
    /// Horizontal rule
    Rule,
    /// Run of text lines joined with spaces
    Paragraph(String),
}

/// Inline span inside a text block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub code: bool,
}

/// Parse markdown into blocks
///
/// An unterminated fence runs to the end of the input.
pub fn parse_markdown(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim();

        if let Some(info) = trimmed.strip_prefix("```") {
            flush_paragraph(&mut paragraph, &mut blocks);
            let lang = Some(info.trim().to_string()).filter(|l| !l.is_empty());
            let mut code = Vec::new();
            for code_line in lines.by_ref() {
                if code_line.trim_start().starts_with("```") {
                    break;
                }
                code.push(code_line);
            }
            blocks.push(Block::Code {
                lang,
                code: code.join("\n"),
            });
            continue;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some(block) = parse_line(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(block);
        } else {
            paragraph.push(trimmed);
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(paragraph.join(" ")));
        paragraph.clear();
    }
}

fn parse_line(line: &str) -> Option<Block> {
    if matches!(line, "---" | "***" | "___") {
        return Some(Block::Rule);
    }

    let hashes = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&hashes) {
        if let Some(text) = line[hashes..].strip_prefix(' ') {
            return Some(Block::Heading {
                level: hashes as u8,
                text: text.trim().to_string(),
            });
        }
    }

    for marker in ["- ", "* ", "+ "] {
        if let Some(text) = line.strip_prefix(marker) {
            return Some(Block::Bullet(text.trim().to_string()));
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(text) = line[digits..].strip_prefix(". ") {
            return Some(Block::Numbered {
                number: line[..digits].to_string(),
                text: text.trim().to_string(),
            });
        }
    }

    None
}

/// Split text on `**bold**` and `` `code` `` markers
///
/// Unbalanced markers are kept as literal text.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let bold_at = rest.find("**");
        let code_at = rest.find('`');
        let (start, marker, code) = match (bold_at, code_at) {
            (Some(b), Some(c)) if c < b => (c, "`", true),
            (Some(b), _) => (b, "**", false),
            (None, Some(c)) => (c, "`", true),
            (None, None) => break,
        };

        let after = &rest[start + marker.len()..];
        let Some(end) = after.find(marker) else {
            break;
        };

        if start > 0 {
            push_plain(&mut spans, &rest[..start]);
        }
        spans.push(Span {
            text: after[..end].to_string(),
            bold: !code,
            code,
        });
        rest = &after[end + marker.len()..];
    }

    if !rest.is_empty() {
        push_plain(&mut spans, rest);
    }
    spans
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    spans.push(Span {
        text: text.to_string(),
        bold: false,
        code: false,
    });
}

/// Draw parsed markdown into `ui`
pub fn render_markdown(ui: &mut egui::Ui, markdown: &str) {
    for block in parse_markdown(markdown) {
        match block {
            Block::Heading { level, text } => {
                let size = match level {
                    1 => 22.0,
                    2 => 19.0,
                    3 => 17.0,
                    _ => 15.0,
                };
                ui.add_space(6.0);
                ui.label(egui::RichText::new(text).strong().size(size));
                ui.add_space(2.0);
            }
            Block::Code { lang, code } => {
                ui.add_space(4.0);
                egui::Frame::group(ui.style())
                    .fill(ui.visuals().extreme_bg_color)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        if let Some(lang) = lang {
                            ui.label(egui::RichText::new(lang).weak().small());
                        }
                        ui.label(egui::RichText::new(code).monospace());
                    });
                ui.add_space(4.0);
            }
            Block::Bullet(text) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label("•");
                    render_inline(ui, &text);
                });
            }
            Block::Numbered { number, text } => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(format!("{}.", number));
                    render_inline(ui, &text);
                });
            }
            Block::Rule => {
                ui.separator();
            }
            Block::Paragraph(text) => {
                ui.add_space(2.0);
                ui.horizontal_wrapped(|ui| render_inline(ui, &text));
                ui.add_space(2.0);
            }
        }
    }
}

fn render_inline(ui: &mut egui::Ui, text: &str) {
    ui.spacing_mut().item_spacing.x = 0.0;
    for span in parse_inline(text) {
        let mut rich = egui::RichText::new(span.text);
        if span.bold {
            rich = rich.strong();
        }
        if span.code {
            rich = rich.code();
        }
        ui.label(rich);
    }
}
