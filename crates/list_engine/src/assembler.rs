//! Appending content to a list
//!
//! Each paragraph appended to a list becomes a [`ListItem`] with a label
//! computed from the list's configuration. Items made of several blocks only
//! label their first block; nested lists are appended as they are, with their
//! indentation rebased on the parent.

use crate::label::render_label;
use crate::settings::NestedIndent;
use crate::{LabelKind, ListNode};
use doc_model::Font;
use render_model::{Chunk, ListItem, Paragraph};

/// A block of content appended to a list
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// A paragraph; one list item
    Paragraph(Paragraph),
    /// One logical list item made of several blocks
    Item(Vec<ContentBlock>),
    /// A nested list
    List(ListNode),
}

impl From<Paragraph> for ContentBlock {
    fn from(paragraph: Paragraph) -> Self {
        ContentBlock::Paragraph(paragraph)
    }
}

impl From<ListNode> for ContentBlock {
    fn from(list: ListNode) -> Self {
        ContentBlock::List(list)
    }
}

/// An entry of a list's content
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Item(ListItem),
    List(ListNode),
}

impl ListEntry {
    pub fn as_item(&self) -> Option<&ListItem> {
        match self {
            ListEntry::Item(item) => Some(item),
            ListEntry::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListNode> {
        match self {
            ListEntry::List(list) => Some(list),
            ListEntry::Item(_) => None,
        }
    }
}

impl ListNode {
    /// Append a block of content and return the entries it produced
    pub fn append_content(&mut self, block: ContentBlock) -> &[ListEntry] {
        let start = self.entries.len();
        match block {
            ContentBlock::Paragraph(paragraph) => {
                self.push_paragraph(paragraph, true);
                self.item_count += 1;
            }
            ContentBlock::Item(blocks) => {
                if self.push_blocks(blocks, true) {
                    self.item_count += 1;
                }
            }
            ContentBlock::List(list) => self.push_list(list),
        }
        &self.entries[start..]
    }

    /// Push the blocks of one logical item; returns whether a paragraph was pushed
    fn push_blocks(&mut self, blocks: Vec<ContentBlock>, add_label: bool) -> bool {
        let mut pushed_paragraph = false;
        for (i, block) in blocks.into_iter().enumerate() {
            let label_this = add_label && i == 0;
            match block {
                ContentBlock::Paragraph(paragraph) => {
                    self.push_paragraph(paragraph, label_this);
                    pushed_paragraph = true;
                }
                ContentBlock::Item(inner) => {
                    pushed_paragraph |= self.push_blocks(inner, label_this);
                }
                ContentBlock::List(list) => self.push_list(list),
            }
        }
        pushed_paragraph
    }

    fn push_paragraph(&mut self, paragraph: Paragraph, add_label: bool) {
        let font = label_font(&paragraph, &self.label);

        let label = if !add_label {
            Chunk::empty(font)
        } else {
            match &self.label {
                LabelKind::None => Chunk::empty(font),
                LabelKind::Bullet { text, .. } => Chunk::text(text.clone(), font),
                LabelKind::Image(image) => Chunk::image(image.clone()),
                LabelKind::Numeric {
                    prefix,
                    suffix,
                    style,
                    ..
                } => Chunk::text(render_label(self.next_index(), *style, prefix, suffix), font),
            }
        };

        tracing::trace!(
            "list level {} item {:?}: {:?}",
            self.level,
            self.item_count,
            label.as_text()
        );

        let item = ListItem::new(label, paragraph).with_indentation(self.label_indent, 0.0);
        self.entries.push(ListEntry::Item(item));
    }

    fn push_list(&mut self, mut list: ListNode) {
        if self.settings.nested_indent == NestedIndent::Relative {
            // lists resolve absolute indentation, the renderer nests relative to the parent
            let relative = (list.left_indent - self.left_indent).max(0.0);
            tracing::debug!(
                "nested list at level {} rebased from {} to {}",
                list.level,
                list.left_indent,
                relative
            );
            list.left_indent = relative;
        }
        list.parent = Some(self.id);
        self.entries.push(ListEntry::List(list));
    }

    /// All items of this list and its nested lists, depth first, with their level
    pub fn items(&self) -> Items<'_> {
        Items {
            stack: vec![(self.level, self.entries.iter())],
        }
    }
}

/// Font for an item's label
///
/// The first chunk with a non-standard font wins, then the paragraph's own
/// font, then the font the style gave the label.
fn label_font(paragraph: &Paragraph, label: &LabelKind) -> Font {
    paragraph
        .chunks
        .iter()
        .map(|chunk| &chunk.font)
        .find(|font| !font.is_standard())
        .or_else(|| Some(&paragraph.font).filter(|font| !font.is_standard()))
        .or_else(|| label.font())
        .cloned()
        .unwrap_or_default()
}

/// Depth-first iterator over the items of a list tree
pub struct Items<'a> {
    stack: Vec<(u32, std::slice::Iter<'a, ListEntry>)>,
}

impl<'a> Iterator for Items<'a> {
    type Item = (u32, &'a ListItem);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (level, entries) = self.stack.last_mut()?;
            let level = *level;
            match entries.next() {
                Some(ListEntry::Item(item)) => return Some((level, item)),
                Some(ListEntry::List(list)) => self.stack.push((list.level, list.entries.iter())),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
