// 2D elevation grid: Vec<Vec<f32>> of shape rows×cols
// access as `map[x][y]`, x runs along the course and y across it.
pub type HeightMap2D = Vec<Vec<f32>>;

// flatten a 2D height map (row‐major) into a single Vec<f32>
// Simulator heightfield loaders take a flat buffer plus the shape
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Lowest and highest elevation in the map, (0, 0) for an empty map
pub fn height_range(map: &HeightMap2D) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;

    for row in map.iter() {
        for &val in row.iter() {
            min = min.min(val);
            max = max.max(val);
        }
    }

    if min > max { (0.0, 0.0) } else { (min, max) }
}

// Rescale a copy of the map to [0.0, 1.0] for display
pub fn normalize2(map: &HeightMap2D) -> HeightMap2D {
    let (min, max) = height_range(map);
    let range = (max - min).max(0.001); // prevent zero-division

    map.iter()
        .map(|row| row.iter().map(|&val| (val - min) / range).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{flatten2, height_range, normalize2};

    #[test]
    fn flatten_is_row_major() {
        let map = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        assert_eq!(flatten2(&map), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn normalize_maps_pits_to_zero() {
        let map = vec![vec![-1.0, 0.0], vec![0.5, 1.0]];
        assert_eq!(height_range(&map), (-1.0, 1.0));

        let n = normalize2(&map);
        assert_eq!(n[0][0], 0.0);
        assert_eq!(n[1][1], 1.0);
        assert!((n[0][1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn flat_map_normalizes_without_nan() {
        let n = normalize2(&vec![vec![0.0; 3]; 3]);
        assert!(n.iter().flatten().all(|v| *v == 0.0));
        assert_eq!(height_range(&Vec::new()), (0.0, 0.0));
    }
}
