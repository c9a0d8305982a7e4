//! Markdown document tree built from the pulldown-cmark event stream.
//!
//! The tree is an owned, positionless structure except for headings, which
//! record their 0-based starting line so title resolution can tell a
//! page-header heading from one buried later in the document.

use crate::domain::LinkKind;
use pulldown_cmark::{CodeBlockKind, Event, LinkType, Options, Parser, Tag};

/// A parsed markdown document.
///
/// The root of the tree; children appear in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    /// Returns the document's top-level nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the first node (pre-order, document order) matching the
    /// predicate, or `None` if no node matches.
    pub fn find(&self, pred: impl Fn(&Node) -> bool) -> Option<&Node> {
        find_in(&self.children, &pred)
    }
}

fn find_in<'a>(nodes: &'a [Node], pred: &impl Fn(&Node) -> bool) -> Option<&'a Node> {
    for node in nodes {
        if pred(node) {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), pred) {
            return Some(found);
        }
    }
    None
}

/// A node in the document tree.
///
/// Block and inline content share one enum; markdown nesting rules decide
/// what actually appears where.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A heading with its rank (1-6) and 0-based starting line.
    Heading {
        level: u8,
        line: usize,
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    BlockQuote {
        children: Vec<Node>,
    },
    /// An ordered or unordered list of `Item` nodes.
    List {
        ordered: bool,
        children: Vec<Node>,
    },
    Item {
        children: Vec<Node>,
    },
    /// A fenced or indented code block with its verbatim contents.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
    Rule,
    Html(String),
    Text(String),
    Code(String),
    Emphasis {
        children: Vec<Node>,
    },
    Strong {
        children: Vec<Node>,
    },
    Strikethrough {
        children: Vec<Node>,
    },
    /// A link to another note or resource.
    Link {
        kind: LinkKind,
        target: String,
        children: Vec<Node>,
    },
    /// An image; never treated as a note link.
    Image {
        target: String,
        children: Vec<Node>,
    },
    SoftBreak,
    HardBreak,
    /// A task-list checkbox marker.
    TaskMarker(bool),
}

impl Node {
    /// Returns the node's children, or an empty slice for leaf nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::BlockQuote { children }
            | Node::List { children, .. }
            | Node::Item { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Strikethrough { children }
            | Node::Link { children, .. }
            | Node::Image { children, .. } => children,
            _ => &[],
        }
    }
}

/// Renders a subtree to plain text.
///
/// Text and inline code contribute their contents, breaks become single
/// spaces, and container nodes contribute their children. Markup itself
/// (emphasis markers, link targets) is dropped.
pub fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    push_plain_text(nodes, &mut out);
    out
}

fn push_plain_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(s) | Node::Code(s) => out.push_str(s),
            Node::CodeBlock { text, .. } => out.push_str(text),
            Node::SoftBreak | Node::HardBreak => out.push(' '),
            other => push_plain_text(other.children(), out),
        }
    }
}

/// Parses markdown text into a [`Document`].
///
/// Strikethrough, task lists, and `[[wikilink]]` syntax are enabled.
/// Parsing never fails; malformed markup degrades to text nodes.
pub fn parse_document(text: &str) -> Document {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_WIKILINKS);

    let line_starts = line_starts(text);
    let line_of = |offset: usize| line_starts.partition_point(|&s| s <= offset) - 1;

    // Each open container holds its frame plus the children built so far.
    let mut stack: Vec<(Frame, Vec<Node>)> = vec![(Frame::Root, Vec::new())];

    for (event, range) in Parser::new_ext(text, options).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                let frame = match tag {
                    Tag::Heading { level, .. } => Frame::Heading {
                        level: level as u8,
                        line: line_of(range.start),
                    },
                    Tag::Paragraph => Frame::Paragraph,
                    Tag::BlockQuote(_) => Frame::BlockQuote,
                    Tag::List(start) => Frame::List {
                        ordered: start.is_some(),
                    },
                    Tag::Item => Frame::Item,
                    Tag::CodeBlock(kind) => Frame::CodeBlock {
                        language: match kind {
                            CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                                Some(lang.to_string())
                            }
                            _ => None,
                        },
                    },
                    Tag::HtmlBlock => Frame::HtmlBlock,
                    Tag::Emphasis => Frame::Emphasis,
                    Tag::Strong => Frame::Strong,
                    Tag::Strikethrough => Frame::Strikethrough,
                    Tag::Link {
                        link_type,
                        dest_url,
                        ..
                    } => Frame::Link {
                        kind: link_kind(link_type),
                        target: dest_url.to_string(),
                    },
                    Tag::Image { dest_url, .. } => Frame::Image {
                        target: dest_url.to_string(),
                    },
                    // Tags behind options we never enable; treated as
                    // transparent containers if they somehow appear.
                    _ => Frame::Transparent,
                };
                stack.push((frame, Vec::new()));
            }
            Event::End(_) => {
                let (frame, children) = stack.pop().expect("unbalanced event stream");
                let parent = &mut stack.last_mut().expect("unbalanced event stream").1;
                match frame {
                    Frame::Root => unreachable!("root frame is never closed"),
                    Frame::Heading { level, line } => parent.push(Node::Heading {
                        level,
                        line,
                        children,
                    }),
                    Frame::Paragraph => parent.push(Node::Paragraph { children }),
                    Frame::BlockQuote => parent.push(Node::BlockQuote { children }),
                    Frame::List { ordered } => parent.push(Node::List { ordered, children }),
                    Frame::Item => parent.push(Node::Item { children }),
                    Frame::CodeBlock { language } => parent.push(Node::CodeBlock {
                        language,
                        text: concat_text(children),
                    }),
                    Frame::HtmlBlock => parent.push(Node::Html(concat_text(children))),
                    Frame::Emphasis => parent.push(Node::Emphasis { children }),
                    Frame::Strong => parent.push(Node::Strong { children }),
                    Frame::Strikethrough => parent.push(Node::Strikethrough { children }),
                    Frame::Link { kind, target } => parent.push(Node::Link {
                        kind,
                        target,
                        children,
                    }),
                    Frame::Image { target } => parent.push(Node::Image { target, children }),
                    Frame::Transparent => parent.extend(children),
                }
            }
            Event::Text(s) => current(&mut stack).push(Node::Text(s.to_string())),
            Event::Code(s) => current(&mut stack).push(Node::Code(s.to_string())),
            Event::Html(s) | Event::InlineHtml(s) => {
                current(&mut stack).push(Node::Html(s.to_string()))
            }
            Event::SoftBreak => current(&mut stack).push(Node::SoftBreak),
            Event::HardBreak => current(&mut stack).push(Node::HardBreak),
            Event::Rule => current(&mut stack).push(Node::Rule),
            Event::TaskListMarker(checked) => {
                current(&mut stack).push(Node::TaskMarker(checked))
            }
            // Math and footnotes are behind options we never enable.
            _ => {}
        }
    }

    let (_, children) = stack.pop().expect("unbalanced event stream");
    Document { children }
}

enum Frame {
    Root,
    Heading { level: u8, line: usize },
    Paragraph,
    BlockQuote,
    List { ordered: bool },
    Item,
    CodeBlock { language: Option<String> },
    HtmlBlock,
    Emphasis,
    Strong,
    Strikethrough,
    Link { kind: LinkKind, target: String },
    Image { target: String },
    Transparent,
}

fn current<'a>(stack: &'a mut [(Frame, Vec<Node>)]) -> &'a mut Vec<Node> {
    &mut stack.last_mut().expect("unbalanced event stream").1
}

fn concat_text(children: Vec<Node>) -> String {
    let mut out = String::new();
    for child in children {
        match child {
            Node::Text(s) | Node::Html(s) | Node::Code(s) => out.push_str(&s),
            Node::SoftBreak => out.push('\n'),
            _ => {}
        }
    }
    out
}

fn link_kind(link_type: LinkType) -> LinkKind {
    match link_type {
        LinkType::Inline => LinkKind::Inline,
        LinkType::Reference | LinkType::ReferenceUnknown => LinkKind::Reference,
        LinkType::Collapsed | LinkType::CollapsedUnknown => LinkKind::Collapsed,
        LinkType::Shortcut | LinkType::ShortcutUnknown => LinkKind::Shortcut,
        LinkType::Autolink => LinkKind::Autolink,
        LinkType::Email => LinkKind::Email,
        LinkType::WikiLink { .. } => LinkKind::Wiki,
    }
}

/// Byte offsets at which each line starts. Line numbers are 0-based.
fn line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}
