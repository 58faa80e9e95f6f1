use crate::species::Species;

pub const RING_SIZE: f64 = 420.0;
const CENTER: f64 = RING_SIZE / 2.0;
const OUTER_RADIUS: f64 = 205.0;
const INNER_RADIUS: f64 = 100.0;
const LABEL_RADIUS: f64 = 155.0;
const SEGMENT_SWEEP: f64 = 90.0;

/// One quarter of the species picker ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSlot {
    pub species: Species,
    pub start_angle: f64,
}

pub fn ring_slots() -> [RingSlot; 4] {
    [
        RingSlot { species: Species::Dog, start_angle: -45.0 },
        RingSlot { species: Species::Cat, start_angle: 45.0 },
        RingSlot { species: Species::Chicken, start_angle: 135.0 },
        RingSlot { species: Species::Cow, start_angle: 225.0 },
    ]
}

// Angles are measured clockwise from 12 o'clock.
fn point(radius: f64, degrees: f64) -> (f64, f64) {
    let rad = (degrees - 90.0).to_radians();
    (CENTER + radius * rad.cos(), CENTER + radius * rad.sin())
}

impl RingSlot {
    /// SVG path of the annular segment.
    pub fn segment_path(&self) -> String {
        let end = self.start_angle + SEGMENT_SWEEP;
        let (x1, y1) = point(OUTER_RADIUS, self.start_angle);
        let (x2, y2) = point(OUTER_RADIUS, end);
        let (x3, y3) = point(INNER_RADIUS, end);
        let (x4, y4) = point(INNER_RADIUS, self.start_angle);

        format!(
            "M {x1:.2} {y1:.2} A {o} {o} 0 0 1 {x2:.2} {y2:.2} L {x3:.2} {y3:.2} A {i} {i} 0 0 0 {x4:.2} {y4:.2} Z",
            o = OUTER_RADIUS,
            i = INNER_RADIUS,
        )
    }

    /// Centre of the animal's thumbnail, in ring coordinates.
    pub fn label_position(&self) -> (f64, f64) {
        point(LABEL_RADIUS, self.start_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn one_slot_per_species() {
        let species: Vec<_> = ring_slots().iter().map(|s| s.species).collect();
        assert_eq!(species, Species::all());
    }

    #[test]
    fn cat_label_sits_upper_right() {
        let cat = ring_slots()[1];
        let (x, y) = cat.label_position();
        let offset = LABEL_RADIUS * std::f64::consts::FRAC_1_SQRT_2;
        assert!(close(x, CENTER + offset));
        assert!(close(y, CENTER - offset));
    }

    #[test]
    fn labels_stay_inside_the_ring() {
        for slot in ring_slots() {
            let (x, y) = slot.label_position();
            let distance = ((x - CENTER).powi(2) + (y - CENTER).powi(2)).sqrt();
            assert!(close(distance, LABEL_RADIUS));
            assert!(distance > INNER_RADIUS && distance < OUTER_RADIUS);
        }
    }

    #[test]
    fn segment_path_is_closed_annulus() {
        let path = ring_slots()[0].segment_path();
        assert!(path.starts_with("M "));
        assert!(path.ends_with(" Z"));
        assert_eq!(path.matches(" A ").count(), 2);
    }
}
