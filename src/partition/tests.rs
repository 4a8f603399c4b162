use super::*;
use crate::Arbitrary;
use crate::DEMO_NODES;
use crate::Energy;
use std::time::Duration;

const TOLERANCE: Energy = 1e-6;

fn labels(names: &[&str]) -> Vec<Label> {
    names.iter().copied().map(Label::from).collect()
}

#[test]
fn demo_records_two_partitions() {
    let search = Search::new(Universe::new(DEMO_NODES).unwrap()).run().unwrap();
    let partitions = search.partitions();
    assert_eq!(partitions.len(), 2);

    assert_eq!(partitions[0].subset1(), labels(&["bt+1"]));
    assert_eq!(partitions[0].subset2(), labels(&["at", "bt", "at+1"]));
    assert!((partitions[0].emd() - 0.25).abs() < TOLERANCE);

    let merged = Label::merge("at+1".into(), "bt+1".into());
    assert_eq!(partitions[1].subset1(), &[merged]);
    assert_eq!(partitions[1].subset2(), labels(&["at", "bt"]));
    assert!((partitions[1].emd() - 1. / 3.).abs() < TOLERANCE);

    assert_eq!(search.current().len(), 2);
    assert_eq!(search.current().to_string(), "[at, bt_at+1_bt+1]");
}

#[test]
fn demo_optimal_is_cheapest() {
    let optimal = find_optimal_partition(DEMO_NODES).unwrap();
    assert_eq!(optimal.subset1(), labels(&["bt+1"]));
    assert_eq!(optimal.subset2(), labels(&["at", "bt", "at+1"]));
    assert!((optimal.emd() - 0.25).abs() < TOLERANCE);
}

#[test]
fn two_labels_record_nothing() {
    assert_eq!(
        find_optimal_partition(["at", "at+1"]),
        Err(Fault::EmptyPartitionList { size: 2 })
    );
}

#[test]
fn fewer_than_two_labels_are_rejected() {
    assert_eq!(
        find_optimal_partition(["at"]),
        Err(Fault::InsufficientUniverse { size: 1 })
    );
    assert_eq!(
        find_optimal_partition(Vec::<&str>::new()),
        Err(Fault::InsufficientUniverse { size: 0 })
    );
}

#[test]
fn duplicates_are_rejected() {
    assert_eq!(
        find_optimal_partition(["at", "bt", "bt"]),
        Err(Fault::DuplicateLabel("bt".into()))
    );
}

#[test]
fn leaf_containing_separator_stays_distinct() {
    // "a_b" as a leaf and a_b as a merge coexist at the second level
    let search = Search::new(Universe::new(["c", "a_b", "a", "b"]).unwrap())
        .run()
        .unwrap();
    assert_eq!(search.partitions().len(), 2);
    assert_eq!(search.partitions()[1].size(), 3);
}

#[test]
fn zero_budget_exceeds_deadline() {
    let search = Search::new(Universe::new(DEMO_NODES).unwrap()).budget(Some(Duration::ZERO));
    assert_eq!(
        search.run().map(|s| s.partitions().len()),
        Err(Fault::DeadlineExceeded { levels: 0 })
    );
}

#[test]
fn generous_budget_changes_nothing() {
    let ref universe = Universe::new(DEMO_NODES).unwrap();
    let bounded = Search::new(universe.clone())
        .budget(Some(Duration::from_secs(3600)))
        .run()
        .unwrap();
    let unbounded = Search::new(universe.clone()).run().unwrap();
    assert_eq!(bounded.partitions(), unbounded.partitions());
}

#[test]
fn levels_shrink_by_one() {
    for _ in 0..16 {
        let universe = Universe::random();
        let n = universe.len();
        let search = Search::new(universe).run().unwrap();
        assert_eq!(search.partitions().len(), n - 2);
        assert_eq!(search.current().len(), 2);
        for (k, partition) in search.partitions().iter().enumerate() {
            assert_eq!(partition.size(), n - k);
            assert_eq!(partition.subset1().len(), 1);
            assert!(!partition.subset2().contains(&partition.subset1()[0]));
        }
    }
}

#[test]
fn leaves_are_conserved() {
    for _ in 0..16 {
        let universe = Universe::random();
        let mut expected = universe
            .iter()
            .flat_map(|x| x.leaves())
            .map(String::from)
            .collect::<Vec<_>>();
        let search = Search::new(universe.clone()).run().unwrap();
        for partition in search.partitions() {
            let mut leaves = partition
                .subset1()
                .iter()
                .chain(partition.subset2())
                .flat_map(|x| x.leaves())
                .map(String::from)
                .collect::<Vec<_>>();
            leaves.sort();
            expected.sort();
            assert_eq!(leaves, expected);
        }
    }
}

#[test]
fn optimal_is_minimum_of_partitions() {
    for _ in 0..16 {
        let search = Search::new(Universe::random()).run().unwrap();
        let optimal = search.optimal().unwrap();
        assert!(search.partitions().iter().all(|p| optimal.emd() <= p.emd()));
        // singleton splits cost 1/n, so the widest level wins
        assert_eq!(optimal, &search.partitions()[0]);
    }
}

#[test]
fn is_idempotent() {
    for _ in 0..8 {
        let universe = Universe::random();
        let x = find_optimal_partition(universe.labels().to_vec()).unwrap();
        let y = find_optimal_partition(universe.labels().to_vec()).unwrap();
        assert_eq!(x, y);
        assert!(x.emd().to_bits() == y.emd().to_bits());
    }
}
