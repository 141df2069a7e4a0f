use std::env;

use slist::logging::{init_logging, parse_level};
use slist::{ListNode, SinglyLinkedList};

type Result<T> = anyhow::Result<T>;

const LOG_LEVEL_VAR: &str = "SLIST_LOG";

fn main() -> Result<()> {
    let level = parse_level(env::var(LOG_LEVEL_VAR).ok().as_deref())?;
    init_logging(level)?;

    let mut list = SinglyLinkedList::new();
    for x in 1..=3 {
        list.push_front(x);
    }
    println!("after push_front 1..=3: {}", list);

    list.push_back(0);
    println!("after push_back 0: {} (size {})", list, list.size());
    println!("contains 2: {}, contains 7: {}", list.contains(&2), list.contains(&7));

    let mut node = list.front();
    while let Some(n) = node {
        print!("{} ", n);
        node = n.next();
    }
    println!();

    while !list.is_empty() {
        let value = list.pop_front()?;
        println!("popped {}", value);
    }

    if let Err(e) = list.pop_front() {
        println!("pop on empty list: {}", e);
    }

    let mut head = ListNode::new("head");
    head.set_next(Some(Box::new(ListNode::new("tail"))));
    head.set_value("new head");
    println!("{} -> {:?}", head, head.next().map(ListNode::value));
    Ok(())
}
