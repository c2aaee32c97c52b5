use std::collections::BTreeSet;

/// Assign a signed lane to each group so close neighbours never share one.
///
/// `positions` are base-scale x coordinates in horizontal order. The first group takes
/// lane `+1`; every later group takes the nearest free lane among the ones used by
/// earlier groups closer than `min_spacing`, trying `+m` before `-m` for
/// `m = 1, 2, ..` up to the group count. If the search is exhausted the group falls
/// back to `+1`.
pub fn assign_lanes(positions: &[f64], min_spacing: f64) -> Vec<i32> {
    let bound = i32::try_from(positions.len()).unwrap_or(i32::MAX);
    let mut lanes = Vec::<i32>::with_capacity(positions.len());

    for (idx, &pos) in positions.iter().enumerate() {
        if idx == 0 {
            lanes.push(1);
            continue;
        }

        let in_use = positions[..idx]
            .iter()
            .zip(&lanes)
            .filter(|&(&other, _)| (pos - other).abs() < min_spacing)
            .map(|(_, &lane)| lane)
            .collect::<BTreeSet<_>>();

        let lane = (1..=bound)
            .flat_map(|m| [m, -m])
            .find(|cand| !in_use.contains(cand))
            .unwrap_or_else(|| {
                tracing::debug!(group = idx, "lane search exhausted, falling back to +1");
                1
            });
        lanes.push(lane);
    }
    lanes
}

/// Groups on non-negative lanes are drawn above the axis.
#[inline]
pub fn is_above(lane: i32) -> bool {
    lane >= 0
}

#[cfg(test)]
#[path = "../../tests/unit/layout/lanes.rs"]
mod tests;
