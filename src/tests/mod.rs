mod list_node_tests;
mod logging_tests;
