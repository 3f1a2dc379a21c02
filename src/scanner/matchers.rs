//! Lexical Matchers
//!
//! Pattern-based scanning over raw markup. Nothing here builds a tree:
//! every matcher is a single forward pass over the text, and anything it
//! does not recognise is skipped rather than reported.

use regex::Regex;
use std::sync::LazyLock;

/// Any start tag: name, then optional attribute text up to the first `>`
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<([a-z][a-z0-9-]*)((?:\s|/)[^>]*)?>").expect("valid open tag regex")
});

/// Any closing tag
static CLOSE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</([a-z][a-z0-9-]*)\s*>").expect("valid close tag regex"));

/// A tag name following `<`, whether or not the tag is ever closed
static TAG_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<([a-z][a-z0-9-]*)(?:[\s/>]|$)").expect("valid tag mention regex")
});

/// One `name`, `name=value`, `name="value"` or `name='value'` pair
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attribute regex")
});

/// A fixed set of element names, compared case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSet(pub &'static [&'static str]);

impl TagSet {
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|tag| tag.eq_ignore_ascii_case(name))
    }
}

/// A start tag found in the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Element name as written
    pub name: &'a str,
    /// Everything between the name and the closing `>`
    pub attrs: &'a str,
    /// The whole tag, `<` through `>`
    pub raw: &'a str,
    /// Byte offset of `<`
    pub start: usize,
    /// Byte offset just past `>`
    pub end: usize,
}

impl<'a> Tag<'a> {
    /// Whether this tag is the named element
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn attributes(&self) -> Attributes<'a> {
        Attributes::new(self.attrs)
    }
}

/// Scan `markup` for start tags whose name is in `tags`, in document order
pub fn open_tags(markup: &str, tags: TagSet) -> impl Iterator<Item = Tag<'_>> {
    OPEN_TAG.captures_iter(markup).filter_map(move |caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?.as_str();
        if !tags.contains(name) {
            return None;
        }
        Some(Tag {
            name,
            attrs: caps.get(2).map_or("", |m| m.as_str()),
            raw: whole.as_str(),
            start: whole.start(),
            end: whole.end(),
        })
    })
}

/// Whether `text` mentions any tag in `tags`, closed or not
pub fn mentions_tag(text: &str, tags: TagSet) -> bool {
    TAG_MENTION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .any(|name| tags.contains(name.as_str()))
}

/// Inner content of an element, captured lexically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content<'a> {
    pub text: &'a str,
    /// Byte offset where the content starts
    pub start: usize,
    /// Byte offset just past the closing tag
    pub end: usize,
}

/// Capture from `from` up to the next closing tag named `tag`.
///
/// This is a shortest match: nested elements of the same name close the
/// capture early. Returns `None` when no closing tag follows.
pub fn element_content<'a>(markup: &'a str, tag: &str, from: usize) -> Option<Content<'a>> {
    let rest = markup.get(from..)?;
    let close = CLOSE_TAG
        .captures_iter(rest)
        .filter(|caps| caps.get(1).is_some_and(|name| name.as_str().eq_ignore_ascii_case(tag)))
        .find_map(|caps| caps.get(0))?;

    Some(Content {
        text: &rest[..close.start()],
        start: from,
        end: from + close.end(),
    })
}

/// A single attribute from a tag's attribute text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// `None` for bare attributes such as `disabled`
    pub value: Option<&'a str>,
}

/// Attribute extractor over the raw attribute text of one tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes<'a> {
    raw: &'a str,
}

impl<'a> Attributes<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn iter(&self) -> impl Iterator<Item = Attribute<'a>> + 'a {
        ATTRIBUTE.captures_iter(self.raw).filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str());
            Some(Attribute { name, value })
        })
    }

    /// First attribute with this name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<Attribute<'a>> {
        self.iter().find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn value(&self, name: &str) -> Option<&'a str> {
        self.find(name)?.value
    }

    /// Whitespace-separated tokens of the `class` attribute
    pub fn class_tokens(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.value("class").unwrap_or("").split_whitespace()
    }
}

/// 1-based line number of a byte offset
pub fn line_of(markup: &str, offset: usize) -> usize {
    let end = offset.min(markup.len());
    markup.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
