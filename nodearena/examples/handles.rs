use nodearena::{NodeArena, NodeErrorKind};

#[cfg_attr(test, test)]
fn main() {
    let mut arena = NodeArena::<Option<usize>, &str>::new();

    let first = arena.insert(None, "first");
    let second = arena.insert(Some(first.index()), "second");
    println!("{:?}", arena.get(second)); // > Ok((Some(0), "second"))

    let (_, value) = arena.remove(first).unwrap();
    println!("removed {value}"); // > removed first

    let error = arena.value(first).unwrap_err();
    assert_eq!(error.kind(), NodeErrorKind::Stale);
    println!("{error}"); // > node has been removed (NodeHandle { .. })

    let third = arena.insert(None, "third");
    assert_eq!(third.index(), first.index());
    assert!(!arena.contains(first));
    println!("{arena:?}");
}
