use super::*;

#[test]
fn first_group_takes_lane_plus_one() {
    assert_eq!(assign_lanes(&[500.0], 120.0), vec![1]);
    assert!(assign_lanes(&[], 120.0).is_empty());
}

#[test]
fn close_pair_splits_above_and_below() {
    assert_eq!(assign_lanes(&[100.0, 150.0], 120.0), vec![1, -1]);
}

#[test]
fn far_groups_reuse_lane_plus_one() {
    assert_eq!(assign_lanes(&[0.0, 120.0, 240.0], 120.0), vec![1, 1, 1]);
}

#[test]
fn dense_cluster_alternates_outward() {
    assert_eq!(
        assign_lanes(&[0.0, 10.0, 20.0, 30.0, 40.0], 120.0),
        vec![1, -1, 2, -2, 3]
    );
}

#[test]
fn freed_lanes_are_reused_greedily() {
    // Third group is only close to the second, so +1 is free again.
    assert_eq!(assign_lanes(&[0.0, 100.0, 200.0], 120.0), vec![1, -1, 1]);
}

#[test]
fn close_groups_never_share_a_lane() {
    let positions = [
        0.0, 15.0, 33.0, 90.0, 118.0, 119.0, 200.0, 210.0, 211.0, 400.0, 401.0, 402.0, 403.0,
        520.0, 600.0, 610.0,
    ];
    let lanes = assign_lanes(&positions, 120.0);
    for i in 0..positions.len() {
        assert_ne!(lanes[i], 0);
        for j in 0..i {
            if (positions[i] - positions[j]).abs() < 120.0 {
                assert_ne!(lanes[i], lanes[j], "groups {j} and {i} collide");
            }
        }
    }
}

#[test]
fn above_is_non_negative_lane() {
    assert!(is_above(1));
    assert!(is_above(3));
    assert!(!is_above(-1));
}
