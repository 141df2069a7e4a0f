pub mod list_node;
pub mod singly_linked_list;
