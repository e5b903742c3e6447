//! Element scanner – locates elements in raw HTML text without building a
//! DOM tree.
//!
//! The rewriting passes ([`crate::flex`], [`crate::compose`]) need the exact
//! byte spans of elements so surrounding markup can be copied through
//! verbatim, including regions a strict parser would reject. We use a
//! hand-written scanner with a tag-depth counter: nested same-named tags
//! inside an element are balanced correctly, and an element with no matching
//! close tag is simply reported as unmatched so callers can leave it alone.

// ---------------------------------------------------------------------------
// Located tags and elements
// ---------------------------------------------------------------------------

/// An opening tag located in the source text.
///
/// `name` is lowercased; attribute names are lowercased too, values are kept
/// as written (minus quotes). Offsets are byte positions into the scanned
/// string.
#[derive(Debug, Clone)]
pub struct OpenTag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Offset of the `<`.
    pub start: usize,
    /// Offset just past the `>`.
    pub end: usize,
    /// The tag ended with `/>`.
    pub self_closing: bool,
}

impl OpenTag {
    /// Value of the first attribute with the given (lowercase) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn classes(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether the `class` attribute contains `name` as a token,
    /// case-insensitively.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes().iter().any(|c| c.eq_ignore_ascii_case(name))
    }

    /// This tag never takes a closing counterpart.
    pub fn is_void(&self) -> bool {
        is_void_tag(&self.name)
    }
}

/// A complete element: opening tag, inner span, and end offset past the
/// closing tag. For void or self-closed tags the inner span is empty and
/// `end == tag.end`.
#[derive(Debug, Clone)]
pub struct ElementSpan {
    pub tag: OpenTag,
    pub inner_start: usize,
    pub inner_end: usize,
    pub end: usize,
}

impl ElementSpan {
    /// The element's inner HTML, verbatim.
    pub fn inner<'a>(&self, html: &'a str) -> &'a str {
        &html[self.inner_start..self.inner_end]
    }

    /// The full matched span including both tags.
    pub fn outer<'a>(&self, html: &'a str) -> &'a str {
        &html[self.tag.start..self.end]
    }
}

/// HTML void elements – no closing tag exists for these.
pub fn is_void_tag(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Block-level elements for the purposes of layout rewriting. Unknown tags
/// are treated as block, matching how rich-text editors emit custom wrappers.
pub fn is_block_tag(name: &str) -> bool {
    !matches!(
        name,
        "span"
            | "a"
            | "b"
            | "i"
            | "u"
            | "em"
            | "strong"
            | "small"
            | "sub"
            | "sup"
            | "code"
            | "label"
    ) && !is_void_tag(name)
}

// ---------------------------------------------------------------------------
// Scanning functions
// ---------------------------------------------------------------------------

/// Find the next well-formed opening tag at or after `from`.
///
/// Comments, doctypes, processing instructions, closing tags, and stray `<`
/// characters are skipped. Returns `None` when no further opening tag exists.
pub fn next_open_tag(html: &str, from: usize) -> Option<OpenTag> {
    let mut scanner = Scanner::new(html, from);
    scanner.next_open_tag()
}

/// Locate the closing tag matching `tag` and return the full element span.
///
/// Nested same-named tags are counted so `<div><div>…</div></div>` resolves
/// to the outermost close. Returns `None` when the element is never closed –
/// callers treat that as pass-through rather than an error.
pub fn close_element(html: &str, tag: &OpenTag) -> Option<ElementSpan> {
    if tag.self_closing || tag.is_void() {
        return Some(ElementSpan {
            tag: tag.clone(),
            inner_start: tag.end,
            inner_end: tag.end,
            end: tag.end,
        });
    }

    let mut scanner = Scanner::new(html, tag.end);
    let mut depth = 1usize;

    loop {
        scanner.seek_to('<')?;
        let at = scanner.pos;

        if scanner.starts_with("<!--") {
            scanner.skip_comment();
            continue;
        }
        if scanner.starts_with("</") {
            let (name, close_end) = scanner.parse_close_tag()?;
            if name == tag.name {
                depth -= 1;
                if depth == 0 {
                    return Some(ElementSpan {
                        tag: tag.clone(),
                        inner_start: tag.end,
                        inner_end: at,
                        end: close_end,
                    });
                }
            }
            continue;
        }

        // Parse any opening tag properly so quoted attribute values cannot
        // masquerade as markup.
        match scanner.next_open_tag_here() {
            Some(open) => {
                if open.name == tag.name && !open.self_closing && !open.is_void() {
                    depth += 1;
                }
            }
            None => {
                if scanner.pos == at {
                    scanner.advance(1);
                }
            }
        }
    }
}

/// Find the next element at or after `from` whose opening tag satisfies
/// `pred`, skipping candidates that are never closed.
pub fn find_element<F>(html: &str, from: usize, pred: F) -> Option<ElementSpan>
where
    F: Fn(&OpenTag) -> bool,
{
    let mut pos = from;
    while let Some(tag) = next_open_tag(html, pos) {
        pos = tag.end;
        if !pred(&tag) {
            continue;
        }
        if let Some(span) = close_element(html, &tag) {
            return Some(span);
        }
        // Unclosed candidate: leave it alone and keep scanning.
    }
    None
}

/// Enumerate the immediate child elements of the span `inner_start..inner_end`.
///
/// Returns `Some` only when the span is a whitespace-separated sequence of
/// well-formed elements: any bare text or unclosed child yields `None`.
pub fn child_elements(html: &str, inner_start: usize, inner_end: usize) -> Option<Vec<ElementSpan>> {
    let mut children = Vec::new();
    let mut pos = inner_start;

    loop {
        // Skip whitespace between children.
        while pos < inner_end {
            let c = html[pos..].chars().next()?;
            if !c.is_whitespace() {
                break;
            }
            pos += c.len_utf8();
        }
        if pos >= inner_end {
            return Some(children);
        }

        let mut scanner = Scanner::new(html, pos);
        if scanner.starts_with("<!--") {
            scanner.skip_comment();
            pos = scanner.pos;
            continue;
        }
        if !scanner.starts_with("<") || scanner.starts_with("</") {
            // Bare text (or a stray close tag) – not an element sequence.
            return None;
        }
        let tag = scanner.next_open_tag_here()?;
        if tag.start != pos {
            return None;
        }
        let span = close_element(html, &tag)?;
        if span.end > inner_end {
            return None;
        }
        pos = span.end;
        children.push(span);
    }
}

// ---------------------------------------------------------------------------
// Scanner – cursor over the source text
// ---------------------------------------------------------------------------

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, pos: usize) -> Self {
        Self { input, pos }
    }

    /// Advance to the next occurrence of `c`; `None` at EOF.
    fn seek_to(&mut self, c: char) -> Option<()> {
        match self.input[self.pos..].find(c) {
            Some(off) => {
                self.pos += off;
                Some(())
            }
            None => {
                self.pos = self.input.len();
                None
            }
        }
    }

    /// Scan forward for the next opening tag, skipping everything else.
    fn next_open_tag(&mut self) -> Option<OpenTag> {
        loop {
            self.seek_to('<')?;
            if self.starts_with("<!--") {
                self.skip_comment();
                continue;
            }
            if self.starts_with("<!") || self.starts_with("<?") {
                self.seek_to('>')?;
                self.advance(1);
                continue;
            }
            if self.starts_with("</") {
                let _ = self.parse_close_tag();
                continue;
            }
            let saved = self.pos;
            if let Some(tag) = self.next_open_tag_here() {
                return Some(tag);
            }
            // Literal `<` that opens no tag.
            self.pos = saved;
            self.advance(1);
        }
    }

    /// Parse an opening tag starting exactly at the current position.
    /// On failure the position is left wherever parsing stopped.
    fn next_open_tag_here(&mut self) -> Option<OpenTag> {
        let start = self.pos;
        if !self.starts_with("<") {
            return None;
        }
        self.advance(1);

        let name = self.parse_name();
        if name.is_empty() {
            return None;
        }

        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            if self.eof() {
                return None;
            }
            if self.starts_with(">") || self.starts_with("/>") {
                break;
            }
            let key = self.parse_name();
            if key.is_empty() {
                // Unexpected character inside the tag; skip it so scanning
                // always makes progress.
                self.advance(1);
                continue;
            }
            self.skip_whitespace();
            let value = if self.starts_with("=") {
                self.advance(1);
                self.skip_whitespace();
                self.parse_attr_value()
            } else {
                String::new()
            };
            attributes.push((key, value));
        }

        let self_closing = self.starts_with("/>");
        self.advance(if self_closing { 2 } else { 1 });

        Some(OpenTag {
            name,
            attributes,
            start,
            end: self.pos,
            self_closing,
        })
    }

    /// Parse a closing tag at the current position; returns the lowercased
    /// name and the offset past the `>`.
    fn parse_close_tag(&mut self) -> Option<(String, usize)> {
        self.advance(2); // </
        let name = self.parse_name();
        self.seek_to('>')?;
        self.advance(1);
        Some((name, self.pos))
    }

    fn parse_name(&mut self) -> String {
        let start = self.pos;
        while !self.eof() {
            let c = self.current_char();
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ':' {
                self.advance(1);
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_ascii_lowercase()
    }

    fn parse_attr_value(&mut self) -> String {
        for quote in ['"', '\''] {
            if self.starts_with_char(quote) {
                self.advance(1);
                let start = self.pos;
                while !self.eof() && !self.starts_with_char(quote) {
                    self.advance(1);
                }
                let val = self.input[start..self.pos].to_string();
                if !self.eof() {
                    self.advance(1);
                }
                return val;
            }
        }
        let start = self.pos;
        while !self.eof() {
            let c = self.current_char();
            if c.is_whitespace() || c == '>' || c == '/' {
                break;
            }
            self.advance(1);
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_comment(&mut self) {
        self.advance(4); // <!--
        match self.input[self.pos..].find("-->") {
            Some(off) => self.pos += off + 3,
            None => self.pos = self.input.len(),
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.eof() && self.current_char().is_whitespace() {
            self.advance(1);
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        self.input[self.pos..].starts_with(s)
    }

    fn starts_with_char(&self, c: char) -> bool {
        self.input[self.pos..].starts_with(c)
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn current_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap()
    }

    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            if let Some(c) = self.input[self.pos..].chars().next() {
                self.pos += c.len_utf8();
            }
        }
    }
}
