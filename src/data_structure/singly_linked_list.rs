use std::fmt;
use std::iter::FusedIterator;

use crate::data_structure::list_node::{Link, ListNode};
use crate::error::EmptyListError;

/// A singly linked list that owns its whole chain of [`ListNode`]s.
///
/// `push_front`, `pop_front` and `size` are O(1). No tail pointer is kept, so
/// `push_back` walks the chain.
///
/// Mutation goes through `&mut self`; sharing a list between threads needs
/// external synchronization.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    size: usize,
}

pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_node().map(|node| node.into_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            self.remaining -= 1;
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList {
            head: Link::empty(),
            size: 0,
        }
    }

    pub fn push_front(&mut self, value: T) {
        let mut node = Box::new(ListNode::new(value));
        node.set_next(self.head.take());
        self.head.replace(Some(node));
        self.size += 1;
    }

    pub fn push_back(&mut self, value: T) {
        self.head.last_mut().insert(Box::new(ListNode::new(value)));
        self.size += 1;
    }

    /// Removes the head and returns its value.
    ///
    /// # Errors
    ///
    /// [`EmptyListError`] when the list has no elements; the list is left
    /// untouched.
    pub fn pop_front(&mut self) -> Result<T, EmptyListError> {
        match self.pop_node() {
            Some(head) => Ok(head.into_value()),
            None => {
                log::debug!("pop_front on an empty list");
                Err(EmptyListError)
            }
        }
    }

    fn pop_node(&mut self) -> Option<Box<ListNode<T>>> {
        let mut head = self.head.take()?;
        self.head.replace(head.take_next());
        self.size -= 1;
        Some(head)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_deref().map(ListNode::value)
    }

    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(ListNode::value_mut)
    }

    /// The head node, for walking the chain with [`ListNode::next`].
    pub fn front(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn clear(&mut self) {
        self.head = Link::empty();
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|x| x == value)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        if self.size > 0 {
            log::trace!("releasing {} list nodes", self.size);
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.head.last_mut();
        for value in iter {
            tail = &mut tail.insert(Box::new(ListNode::new(value))).next;
            self.size += 1;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
