pub mod data_structure;
pub mod error;
pub mod logging;

pub use data_structure::list_node::ListNode;
pub use data_structure::singly_linked_list::SinglyLinkedList;
pub use error::EmptyListError;

#[cfg(test)]
mod tests;
