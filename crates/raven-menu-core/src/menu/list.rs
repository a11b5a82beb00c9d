use std::io::BufRead;
use std::ops::Index;
use tracing::debug;

use super::item::Item;
use super::parser::parse_line;
use crate::error::{MenuError, Result};

/// All menu items in input order.
///
/// Items live in one contiguous vector and are chained through
/// `prev`/`next` indices, so growing the storage never invalidates links.
#[derive(Debug, Clone)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    /// Read and parse every line of `reader`
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut items = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if let Some(item) = parse_line(&line) {
                items.push(item);
            }
        }

        Self::from_items(items)
    }

    /// Parse menu items from an in-memory string
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_reader(input.as_bytes())
    }

    /// Link already parsed items into a list
    pub fn from_items(mut items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(MenuError::EmptyInput);
        }

        let count = items.len();
        for (i, item) in items.iter_mut().enumerate() {
            item.prev = i.checked_sub(1);
            item.next = (i + 1 < count).then_some(i + 1);
        }

        debug!("Loaded {} menu items", count);
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first item
    pub fn head(&self) -> usize {
        0
    }

    /// Index of the last item
    pub fn tail(&self) -> usize {
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    /// Walk the chain from the head
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.indices().map(move |i| &self.items[i])
    }

    /// Indices in chain order, following `next` links
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.head()), move |&i| self.items[i].next)
    }

    /// Items from `from` to `to`, inclusive
    pub fn range(&self, from: usize, to: usize) -> impl Iterator<Item = (usize, &Item)> {
        self.items[from..=to]
            .iter()
            .enumerate()
            .map(move |(i, item)| (from + i, item))
    }
}

impl Index<usize> for ItemList {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}
