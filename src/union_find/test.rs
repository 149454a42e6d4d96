use super::*;

#[test]
fn test_basic_union_find() {
    let mut uf = UnionFind::new();
    for x in [10, 20, 30, 40, 50] {
        uf.make_set(x);
    }

    // Test initial state
    assert_eq!(uf.find(&10), Some(&10));
    assert_eq!(uf.find(&20), Some(&20));
    assert_eq!(uf.set_count(), 5);

    // Test union
    assert!(uf.union(&10, &20));
    assert_eq!(uf.find(&10), uf.find(&20));
    assert!(uf.connected(&20, &10));
    assert!(!uf.connected(&10, &30));
    assert_eq!(uf.set_count(), 4);

    // Already joined
    assert!(!uf.union(&20, &10));
    assert_eq!(uf.set_count(), 4);
}

#[test]
fn test_path_compression() {
    let mut uf = UnionFind::new();
    for x in 0..4 {
        uf.make_set(x);
    }

    // Create a chain: 3->2->1->0
    uf.union(&0, &1);
    uf.union(&1, &2);
    uf.union(&2, &3);

    let representative = *uf.find(&3).unwrap();
    let root = uf.position(&representative).unwrap();
    for x in 0..4 {
        let p = uf.position(&x).unwrap();
        assert_eq!(uf.find_root(p), root);
        // after a find every element hangs directly off the root
        match uf.node(p) {
            UFNode::Root { .. } => assert_eq!(p, root),
            UFNode::Child(parent) => assert_eq!(parent, root),
        }
    }
}

#[test]
fn test_union_by_rank() {
    let mut uf = UnionFind::new();
    // rank 1 tree {a, b}
    uf.union(&'a', &'b');
    let big_root = uf.find_root(uf.position(&'a').unwrap());
    // a singleton joins under the bigger tree
    uf.union(&'c', &'a');
    assert_eq!(uf.find_root(uf.position(&'c').unwrap()), big_root);
    assert_eq!(uf.node(big_root), UFNode::Root { rank: 1 });
}

#[test]
fn test_unseen_elements() {
    let mut uf: UnionFind<&str> = UnionFind::new();
    assert_eq!(uf.find(&"ghost"), None);
    assert!(!uf.connected(&"ghost", &"ghost"));
    assert!(uf.members(&"ghost").is_empty());

    // union registers both sides
    assert!(uf.union(&"x", &"y"));
    assert_eq!(uf.len(), 2);
    assert_eq!(uf.set_count(), 1);
}

#[test]
fn test_make_set_is_idempotent() {
    let mut uf = UnionFind::new();
    uf.union(&1, &2);
    let p = uf.make_set(1);
    assert_eq!(Some(p), uf.position(&1));
    assert!(uf.connected(&1, &2));
}

#[test]
fn test_members_and_sets() {
    let mut uf = UnionFind::new();
    for x in 1..=6 {
        uf.make_set(x);
    }
    uf.union(&1, &4);
    uf.union(&4, &6);
    uf.union(&2, &5);

    assert_eq!(uf.members(&6), vec![&1, &4, &6]);
    assert_eq!(
        uf.sets(),
        vec![vec![&1, &4, &6], vec![&2, &5], vec![&3]]
    );
    insta::assert_snapshot!(uf.to_string(), @"[~{1, 4, 6} ~{2, 5} ~{3}]");
}
