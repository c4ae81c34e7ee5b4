use std::collections::VecDeque;

use nalgebra::Vector3;

use super::FlightObserver;
use crate::constants::SMOKE_TRAIL_LENGTH;

/// Bounded history of recent positions, oldest first.
pub struct SmokeTrail {
    points: VecDeque<Vector3<f64>>,
    max_points: usize,
}

impl SmokeTrail {
    pub fn new(max_points: usize) -> Self {
        SmokeTrail {
            points: VecDeque::with_capacity(max_points),
            max_points,
        }
    }

    pub fn add_point(&mut self, position: Vector3<f64>) {
        if self.max_points == 0 {
            return;
        }
        if self.points.len() == self.max_points {
            self.points.pop_front();
        }
        self.points.push_back(position);
    }

    pub fn points(&self) -> impl Iterator<Item = &Vector3<f64>> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for SmokeTrail {
    fn default() -> Self {
        SmokeTrail::new(SMOKE_TRAIL_LENGTH)
    }
}

impl FlightObserver for SmokeTrail {
    fn on_position(&mut self, position: &Vector3<f64>) {
        self.add_point(*position);
    }
}
