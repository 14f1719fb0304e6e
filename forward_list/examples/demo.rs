use forward_list::ForwardList;

#[cfg_attr(test, test)]
fn main() {
    let mut list = ForwardList::new();

    list.push_back(1);
    list.push_back(2);
    list.push_front(3);
    list.push_front(4);
    println!("{list}"); // > 4 -> 3 -> 1 -> 2

    println!("Before inserting: {list}");
    let mut node = list.node_at(1).unwrap();
    for _ in 0..4 {
        node = list.insert_after(node, -1);
    }
    println!("After inserting: {list}"); // > 4 -> 3 -> -1 -> -1 -> -1 -> -1 -> 1 -> 2

    println!("Before popping: {list}");
    let popped = list.pop_front();
    println!("After popping: {list}");
    println!("Popped value: {popped:?}"); // > Some(4)

    println!("Before removing last node: {list}");
    let removed = list.remove_last();
    println!("After removing last node: {list}");
    println!("Removed value: {removed:?}"); // > Some(2)

    println!("Before removing at index 1: {list}");
    let index = 1;
    let node = list.node_at(index - 1).unwrap();
    let removed = list.remove_after(node);
    println!("After removing at index {index}: {list}");
    println!("Removed value: {removed:?}"); // > Some(-1)

    assert_eq!(list.to_vec(), [3, -1, -1, -1, 1]);
}
