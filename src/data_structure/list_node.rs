use std::fmt;
use std::mem;

/// A single node of a singly linked list: one value and an owning link to the
/// next node.
///
/// A node is owned either by a [`SinglyLinkedList`](super::singly_linked_list::SinglyLinkedList)
/// (the head) or by the node in front of it. Dropping a node releases its whole
/// successor chain without recursing once per node.
pub struct ListNode<T> {
    value: T,
    pub(crate) next: Link<T>,
}

/// Owning link to the next node. Tears the chain down iteratively.
pub(crate) struct Link<T>(Option<Box<ListNode<T>>>);

impl<T> Link<T> {
    pub(crate) const fn empty() -> Self {
        Link(None)
    }

    pub(crate) fn take(&mut self) -> Option<Box<ListNode<T>>> {
        self.0.take()
    }

    pub(crate) fn replace(&mut self, node: Option<Box<ListNode<T>>>) -> Option<Box<ListNode<T>>> {
        mem::replace(&mut self.0, node)
    }

    /// Stores `node` in this link and returns it. The link must be empty.
    pub(crate) fn insert(&mut self, node: Box<ListNode<T>>) -> &mut ListNode<T> {
        debug_assert!(self.0.is_none());
        self.0.insert(node)
    }

    pub(crate) fn as_deref(&self) -> Option<&ListNode<T>> {
        self.0.as_deref()
    }

    pub(crate) fn as_deref_mut(&mut self) -> Option<&mut ListNode<T>> {
        self.0.as_deref_mut()
    }

    pub(crate) fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Walks to the empty link after the last node.
    pub(crate) fn last_mut(&mut self) -> &mut Link<T> {
        let mut cursor = self;
        while let Link(Some(node)) = cursor {
            cursor = &mut node.next;
        }
        cursor
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut current = self.0.take();
        while let Some(mut node) = current {
            // detach before `node` goes out of scope so its own link is empty
            current = node.next.0.take();
        }
    }
}

impl<T> ListNode<T> {
    pub fn new(value: T) -> ListNode<T> {
        ListNode {
            value,
            next: Link::empty(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Consumes the node, returning its value. Any successors are released.
    pub fn into_value(self) -> T {
        let ListNode { value, .. } = self;
        value
    }

    pub fn next(&self) -> Option<&ListNode<T>> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut ListNode<T>> {
        self.next.as_deref_mut()
    }

    /// Links `next` after this node and hands the previous successor back to
    /// the caller.
    pub fn set_next(&mut self, next: Option<Box<ListNode<T>>>) -> Option<Box<ListNode<T>>> {
        self.next.replace(next)
    }

    pub fn take_next(&mut self) -> Option<Box<ListNode<T>>> {
        self.next.take()
    }
}

impl<T: Default> Default for ListNode<T> {
    fn default() -> Self {
        ListNode::new(T::default())
    }
}

impl<T> From<T> for ListNode<T> {
    fn from(value: T) -> Self {
        ListNode::new(value)
    }
}

impl<T: fmt::Display> fmt::Display for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("value", &self.value)
            .field("has_next", &!self.next.is_none())
            .finish()
    }
}
