//! Proximity lines between particle pairs.
//!
//! Brute-force O(N²) over unordered pairs; fine for the ~80 particles a
//! background uses (3160 checks per frame).

use glam::Vec2;

use crate::core::particle::Particle;

/// A line between two particles closer than the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Index of the first particle (always lower than `b`).
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

/// Line alpha for two particles `distance` apart: `max_alpha * (1 - d / threshold)`,
/// or `None` when they are not connected (`d >= threshold`).
pub fn connection_alpha(distance: f32, threshold: f32, max_alpha: f32) -> Option<f32> {
    if distance < threshold {
        Some(max_alpha * (1.0 - distance / threshold))
    } else {
        None
    }
}

/// Visit every connected unordered pair in index order.
pub fn for_each_connection(
    particles: &[Particle],
    threshold: f32,
    max_alpha: f32,
    mut f: impl FnMut(Connection),
) {
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let distance = a.position.distance(b.position);
            if let Some(alpha) = connection_alpha(distance, threshold, max_alpha) {
                f(Connection {
                    a: i,
                    b: j,
                    from: a.position,
                    to: b.position,
                    alpha,
                });
            }
        }
    }
}

/// Collect every connected pair.
pub fn find_connections(particles: &[Particle], threshold: f32, max_alpha: f32) -> Vec<Connection> {
    let mut out = Vec::new();
    for_each_connection(particles, threshold, max_alpha, |c| out.push(c));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.0, 0.5)
    }

    #[test]
    fn alpha_at_zero_distance_is_max() {
        assert_eq!(connection_alpha(0.0, 120.0, 0.15), Some(0.15));
    }

    #[test]
    fn alpha_halfway() {
        let a = connection_alpha(60.0, 120.0, 0.15).unwrap();
        assert!((a - 0.075).abs() < 1e-6, "alpha was {}", a);
    }

    #[test]
    fn no_connection_at_or_beyond_threshold() {
        assert_eq!(connection_alpha(120.0, 120.0, 0.15), None);
        assert_eq!(connection_alpha(500.0, 120.0, 0.15), None);
        assert!(connection_alpha(119.999, 120.0, 0.15).is_some());
    }

    #[test]
    fn finds_only_close_pairs() {
        // 0-1 are 100 apart, 1-2 are 130 apart, 0-2 are 230 apart.
        let particles = [at(0.0, 0.0), at(100.0, 0.0), at(230.0, 0.0)];
        let conns = find_connections(&particles, 120.0, 0.15);
        assert_eq!(conns.len(), 1);
        assert_eq!((conns[0].a, conns[0].b), (0, 1));
        assert_eq!(conns[0].from, Vec2::new(0.0, 0.0));
        assert_eq!(conns[0].to, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn each_unordered_pair_visited_once() {
        let particles: Vec<Particle> = (0..10).map(|i| at(i as f32, 0.0)).collect();
        let conns = find_connections(&particles, 120.0, 0.15);
        // All within 9 px of each other: C(10, 2) pairs.
        assert_eq!(conns.len(), 45);
        assert!(conns.iter().all(|c| c.a < c.b));
    }

    #[test]
    fn connection_is_symmetric_in_distance() {
        let a = at(10.0, 20.0);
        let b = at(70.0, 100.0);
        let forward = find_connections(&[a, b], 120.0, 0.15);
        let backward = find_connections(&[b, a], 120.0, 0.15);
        assert_eq!(forward.len(), 1);
        assert_eq!(backward.len(), 1);
        assert_eq!(forward[0].alpha, backward[0].alpha);
    }
}
