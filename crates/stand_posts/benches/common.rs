#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use stand_posts::geometry::Polygon;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Star-shaped stand with `spikes` outer points around `(cx, cy)`.
pub fn star_stand(cx: f64, cy: f64, radius: f64, spikes: usize) -> Polygon {
    let n = spikes * 2;
    let points = (0..n).map(|i| {
        let angle = i as f64 / n as f64 * std::f64::consts::TAU;
        let r = if i % 2 == 0 { radius } else { radius * 0.55 };
        [cx + r * angle.cos(), cy + r * angle.sin()]
    });
    Polygon::from_exterior(points).expect("star stand is valid")
}

/// A row of `count` star stands spaced `step` apart.
pub fn stand_row(count: usize, radius: f64, step: f64) -> Vec<Polygon> {
    (0..count)
        .map(|i| star_stand(i as f64 * step, 0.0, radius, 7))
        .collect()
}
