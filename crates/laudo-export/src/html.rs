//! A small reader for the report HTML the drafting service and the editor
//! produce: block paragraphs, line breaks, bold runs and alignment. Anything
//! else is reduced to its text.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

/// One paragraph. `lines` are separated by `<br>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub align: Align,
    pub lines: Vec<Vec<Segment>>,
}

impl Block {
    fn new(align: Align) -> Self {
        Self {
            align,
            lines: vec![Vec::new()],
        }
    }

    fn has_text(&self) -> bool {
        self.lines.iter().flatten().any(|s| !s.text.trim().is_empty())
    }

    /// Plain text of the paragraph, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const BLOCK_TAGS: &[&str] = &["p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li"];
const BOLD_TAGS: &[&str] = &["strong", "b"];

struct Reader {
    blocks: Vec<Block>,
    current: Block,
    aligns: Vec<Align>,
    bold: usize,
}

impl Reader {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            current: Block::new(Align::Left),
            aligns: Vec::new(),
            bold: 0,
        }
    }

    fn inherited_align(&self) -> Align {
        self.aligns.last().copied().unwrap_or_default()
    }

    fn flush(&mut self) {
        let next = Block::new(self.inherited_align());
        let mut block = std::mem::replace(&mut self.current, next);
        if !block.has_text() {
            return;
        }
        for line in &mut block.lines {
            while let Some(last) = line.last_mut() {
                let kept = last.text.trim_end_matches(|c: char| c.is_ascii_whitespace()).len();
                last.text.truncate(kept);
                if !last.text.is_empty() {
                    break;
                }
                line.pop();
            }
        }
        while block.lines.first().is_some_and(|l| l.is_empty()) {
            block.lines.remove(0);
        }
        while block.lines.last().is_some_and(|l| l.is_empty()) {
            block.lines.pop();
        }
        self.blocks.push(block);
    }

    fn tag(&mut self, raw: &str) {
        let closing = raw.starts_with('/');
        let body = raw.trim_start_matches('/');
        let name: String = body
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        if BLOCK_TAGS.contains(&name.as_str()) {
            self.flush();
            if closing {
                self.aligns.pop();
            } else {
                let align = attribute_align(body).unwrap_or_else(|| self.inherited_align());
                self.aligns.push(align);
            }
            self.current = Block::new(self.inherited_align());
        } else if name == "br" {
            self.current.lines.push(Vec::new());
        } else if BOLD_TAGS.contains(&name.as_str()) {
            if closing {
                self.bold = self.bold.saturating_sub(1);
            } else {
                self.bold += 1;
            }
        }
    }

    fn text(&mut self, raw: &str) {
        let mut collapsed = String::with_capacity(raw.len());
        let mut in_space = false;
        for c in raw.chars() {
            if c.is_ascii_whitespace() {
                if !in_space {
                    collapsed.push(' ');
                }
                in_space = true;
            } else {
                collapsed.push(c);
                in_space = false;
            }
        }

        let mut text = decode_entities(&collapsed);
        let line = self.current.lines.last_mut();
        let Some(line) = line else { return };

        let at_line_start = line
            .last()
            .is_none_or(|s| s.text.ends_with(|c: char| c.is_ascii_whitespace()));
        if at_line_start {
            text = text.trim_start_matches(' ').to_string();
        }
        if text.is_empty() {
            return;
        }

        let bold = self.bold > 0;
        match line.last_mut() {
            Some(last) if last.bold == bold => last.text.push_str(&text),
            _ => line.push(Segment { text, bold }),
        }
    }
}

fn attribute_align(attributes: &str) -> Option<Align> {
    let attributes = attributes.to_ascii_lowercase();
    if let Some(start) = attributes.find("text-align") {
        let value = attributes[start + "text-align".len()..]
            .trim_start_matches(|c: char| c == ':' || c.is_ascii_whitespace());
        if value.starts_with("center") {
            return Some(Align::Center);
        }
        if value.starts_with("right") {
            return Some(Align::Right);
        }
        if value.starts_with("left") {
            return Some(Align::Left);
        }
    }
    if attributes.contains("signature") {
        return Some(Align::Right);
    }
    None
}

/// Decode the entities a report can contain.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest.find(';').filter(|&end| end <= 10).and_then(|end| {
            let entity = &rest[1..end];
            let c = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            c.map(|c| (c, end))
        });
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Split report HTML into paragraphs.
pub fn parse_blocks(html: &str) -> Vec<Block> {
    let mut reader = Reader::new();
    let mut rest = html;
    while !rest.is_empty() {
        match rest.find('<') {
            Some(0) => match rest.find('>') {
                Some(end) => {
                    reader.tag(&rest[1..end]);
                    rest = &rest[end + 1..];
                }
                None => {
                    reader.text(rest);
                    break;
                }
            },
            Some(start) => {
                reader.text(&rest[..start]);
                rest = &rest[start..];
            }
            None => {
                reader.text(rest);
                break;
            }
        }
    }
    reader.flush();
    reader.blocks
}
