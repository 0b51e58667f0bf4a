use crate::models::Stop;

/// Order stops with a greedy nearest-neighbor walk from the first stop.
///
/// Not a TSP solve: the tour depends on which stop comes first and is not
/// globally optimal. Ties go to the earliest stop in the remaining list.
/// Positions are rewritten to match the output order.
pub fn sequence(stops: Vec<Stop>) -> Vec<Stop> {
    let mut remaining = stops;
    if remaining.is_empty() {
        return remaining;
    }

    let mut ordered = Vec::with_capacity(remaining.len());
    ordered.push(remaining.remove(0));

    while !remaining.is_empty() {
        let Some(current) = ordered.last() else {
            break;
        };

        let mut nearest_idx = 0;
        let mut nearest_km = f64::INFINITY;
        for (idx, candidate) in remaining.iter().enumerate() {
            let km = current.distance_to(candidate);
            // Strict comparison keeps the first minimal match
            if km < nearest_km {
                nearest_km = km;
                nearest_idx = idx;
            }
        }

        ordered.push(remaining.remove(nearest_idx));
    }

    for (position, stop) in ordered.iter_mut().enumerate() {
        stop.position = position as u32;
    }

    ordered
}

/// Sum of great-circle distances between consecutive stops, in kilometers.
pub fn total_distance_km(ordered: &[Stop]) -> f64 {
    ordered.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}
