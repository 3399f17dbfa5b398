use std::cell::Cell;

use lazyq_engine::{from_slice, from_vec, generate, range};

#[test]
fn filter_then_map_preserves_upstream_order() {
    let out = from_vec(vec![3, 10, 6, 1, 4, 8, 2, 5, 9, 7])
        .filter(|v| v % 2 == 1)
        .map(|v| v * 100)
        .to_list();
    assert_eq!(out, vec![300, 100, 500, 900, 700]);
}

#[test]
fn nothing_runs_until_a_terminal_pulls() {
    let calls = Cell::new(0);
    let query = from_vec(vec![1, 2, 3]).map(|v| {
        calls.set(calls.get() + 1);
        v * 2
    });
    assert_eq!(calls.get(), 0);

    assert_eq!(query.to_list(), vec![2, 4, 6]);
    assert_eq!(calls.get(), 3);

    // Each terminal starts a new pass.
    assert_eq!(query.count(), 3);
    assert_eq!(calls.get(), 6);
}

#[test]
fn captured_values_are_snapshotted_at_composition() {
    let mut factor = 10;
    let query = from_vec(vec![1, 2]).map(move |v| v * factor);
    factor = 20;
    assert_eq!(factor, 20);
    assert_eq!(query.to_list(), vec![10, 20]);
}

#[test]
fn take_stops_pulling_once_satisfied() {
    let pulled = Cell::new(0);
    let pulls = &pulled;
    let query = generate(move || {
        (0..).inspect(move |_| pulls.set(pulls.get() + 1))
    })
    .take(3);

    assert_eq!(query.to_list(), vec![0, 1, 2]);
    assert_eq!(pulled.get(), 3);
}

#[test]
fn take_zero_pulls_nothing() {
    let pulled = Cell::new(0);
    let pulls = &pulled;
    let query = generate(move || (0..5).inspect(move |_| pulls.set(pulls.get() + 1))).take(0);
    assert!(query.to_list().is_empty());
    assert_eq!(pulled.get(), 0);
}

#[test]
fn skip_and_take_window() {
    assert_eq!(range(0..10).skip(3).take(4).to_list(), vec![3, 4, 5, 6]);
    assert!(range(0..3).skip(10).to_list().is_empty());
}

#[test]
fn order_by_is_stable_across_equal_keys() {
    let words = ["pear", "fig", "apple", "kiwi", "plum", "date"];
    let out = from_slice(&words).order_by(|w| w.len()).to_list();
    assert_eq!(out, vec!["fig", "pear", "kiwi", "plum", "date", "apple"]);
}

#[test]
fn then_by_breaks_ties_only() {
    let rows = vec![("b", 2), ("a", 2), ("c", 1), ("a", 1)];
    let out = from_vec(rows)
        .order_by(|r| r.1)
        .then_by_descending(|r| r.0)
        .to_list();
    assert_eq!(out, vec![("c", 1), ("a", 1), ("b", 2), ("a", 2)]);
}

#[test]
fn order_by_with_custom_comparison() {
    let out = from_vec(vec![-3, 2, -1, 4])
        .order_by_with(|a: &i32, b: &i32| a.abs().cmp(&b.abs()))
        .to_list();
    assert_eq!(out, vec![-1, 2, -3, 4]);
}

#[test]
fn then_by_with_only_reorders_ties() {
    let rows = vec![("bb", 2), ("A", 1), ("c", 2), ("B", 1), ("a", 2)];
    let out = from_vec(rows)
        .order_by(|r| r.1)
        .then_by_with(|x, y| {
            x.0.to_ascii_lowercase().cmp(&y.0.to_ascii_lowercase())
        })
        .to_list();
    assert_eq!(out, vec![("A", 1), ("B", 1), ("a", 2), ("bb", 2), ("c", 2)]);
}

#[test]
fn then_by_with_keeps_source_order_when_it_also_ties() {
    let rows = vec![("x", 1), ("y", 0), ("z", 1), ("w", 0)];
    let out = from_vec(rows)
        .order_by(|r| r.1)
        .then_by_with(|_, _| std::cmp::Ordering::Equal)
        .to_list();
    assert_eq!(out, vec![("y", 0), ("w", 0), ("x", 1), ("z", 1)]);
}

#[test]
fn distinct_keeps_first_occurrence() {
    let out = from_vec(vec![3, 1, 3, 2, 1, 4]).distinct().to_list();
    assert_eq!(out, vec![3, 1, 2, 4]);

    let folded = from_vec(vec!["A", "b", "a", "B", "c"])
        .distinct_with(|x, y| x.eq_ignore_ascii_case(y))
        .to_list();
    assert_eq!(folded, vec!["A", "b", "c"]);
}

#[test]
fn zip_stops_at_the_shorter_side() {
    let letters = from_vec(vec!['a', 'b', 'c']);
    let out = range(1..10).zip(letters, |n, c| format!("{c}{n}")).to_list();
    assert_eq!(out, vec!["a1", "b2", "c3"]);
}

#[test]
fn group_by_keeps_first_seen_key_order() {
    let groups = from_vec(vec![5, 10, 3, 20, 7, 30])
        .group_by(|v| v % 10 == 0)
        .to_list();
    assert_eq!(groups.len(), 2);
    assert!(!*groups[0].key());
    assert_eq!(groups[0].elements(), &[5, 3, 7]);
    assert!(*groups[1].key());
    assert_eq!(groups[1].elements(), &[10, 20, 30]);
}

#[test]
fn group_by_with_projects_elements_in_upstream_order() {
    let orders = vec![
        ("tokyo", 30),
        ("osaka", 12),
        ("tokyo", 7),
        ("nagoya", 5),
        ("osaka", 40),
        ("tokyo", 18),
    ];
    let groups = from_vec(orders)
        .group_by_with(|o| o.0, |o| o.1 * 10)
        .to_list();

    let keys: Vec<&str> = groups.iter().map(|g| *g.key()).collect();
    assert_eq!(keys, vec!["tokyo", "osaka", "nagoya"]);
    assert_eq!(groups[0].elements(), &[300, 70, 180]);
    assert_eq!(groups[1].elements(), &[120, 400]);
    assert_eq!(groups[2].elements(), &[50]);
}

#[test]
fn empty_source_flows_through_every_stage() {
    let out = from_vec(Vec::<i32>::new())
        .filter(|_| true)
        .map(|v| v + 1)
        .order_by(|v| *v)
        .distinct()
        .take(5)
        .to_list();
    assert!(out.is_empty());
}
