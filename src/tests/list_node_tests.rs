use crate::data_structure::list_node::ListNode;
use crate::tests::drop_tracker::{drop_counts, Tracked};

#[test]
fn test1_new_has_no_successor() {
    let node = ListNode::new(42);
    assert_eq!(42, *node.value());
    assert!(node.next().is_none());
}

#[test]
fn test2_default_value() {
    let node: ListNode<i32> = ListNode::default();
    assert_eq!(0, *node.value());
    assert!(node.next().is_none());

    let node: ListNode<String> = ListNode::default();
    assert_eq!("", node.value());
}

#[test]
fn test3_set_value() {
    let mut node = ListNode::from(String::from("a"));
    let b = String::from("b");
    node.set_value(b.clone());
    assert_eq!("b", node.value());
    assert_eq!("b", b);

    node.value_mut().push('c');
    assert_eq!("bc", node.into_value());
}

#[test]
fn test4_link_and_walk() {
    let mut first = ListNode::new(1);
    let mut second = Box::new(ListNode::new(2));
    second.set_next(Some(Box::new(ListNode::new(3))));
    assert!(first.set_next(Some(second)).is_none());

    let mut values = vec![];
    let mut current = Some(&first);
    while let Some(node) = current {
        values.push(*node.value());
        current = node.next();
    }
    assert_eq!(vec![1, 2, 3], values);

    *first.next_mut().unwrap().value_mut() = 20;
    assert_eq!(Some(&20), first.next().map(ListNode::value));
}

#[test]
fn test5_set_next_returns_replaced_successor() {
    let mut head = ListNode::new('a');
    head.set_next(Some(Box::new(ListNode::new('b'))));

    let old = head.set_next(Some(Box::new(ListNode::new('c'))));
    assert_eq!(Some('b'), old.map(|n| n.into_value()));
    assert_eq!(Some(&'c'), head.next().map(ListNode::value));

    let detached = head.take_next();
    assert_eq!(Some('c'), detached.map(|n| n.into_value()));
    assert!(head.next().is_none());
}

#[test]
fn test6_display() {
    assert_eq!("[7]", ListNode::new(7).to_string());
    assert_eq!("[hi]", ListNode::new("hi").to_string());
}

#[test]
fn test7_drop_releases_chain_once() {
    let mut head = ListNode::new(Tracked::new());
    let mut ids = vec![head.value().id];
    for _ in 0..10 {
        let mut node = Box::new(ListNode::new(Tracked::new()));
        ids.push(node.value().id);
        node.set_next(head.take_next());
        head.set_next(Some(node));
    }
    assert_eq!(vec![0; 11], drop_counts(&ids));

    drop(head);
    assert_eq!(vec![1; 11], drop_counts(&ids));
}

#[test]
fn test8_into_value_releases_successors() {
    let mut head = ListNode::new(Tracked::new());
    let tail = Tracked::new();
    let tail_id = tail.id;
    head.set_next(Some(Box::new(ListNode::new(tail))));

    let value = head.into_value();
    assert_eq!(vec![1], drop_counts(&[tail_id]));
    assert_eq!(vec![0], drop_counts(&[value.id]));
}

#[test]
fn test9_drop_long_chain() {
    let mut head = ListNode::new(0u32);
    for x in 1..1_000_000 {
        let mut node = Box::new(ListNode::new(x));
        node.set_next(head.take_next());
        head.set_next(Some(node));
    }
    drop(head);
}
