// Hash-seeded candidate sampling. No ambient RNG: the same tag name and
// attempt always produce the same candidate, in every process.

const ATTEMPT_STRIDE: f64 = 100.0;
const SINE_SCALE: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn seed_offset(self) -> f64 {
        match self {
            Axis::X => 0.0,
            Axis::Y => 1.0,
        }
    }
}

/// 31-multiplier rolling hash over UTF-16 code units with 32-bit wraparound,
/// folded to its absolute value.
pub fn hash_name(name: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}

/// Fractional part of a scaled sine, in `[0, 1)`.
pub fn seeded_unit(seed: f64) -> f64 {
    let x = seed.sin() * SINE_SCALE;
    let fract = x - x.floor();
    if (0.0..1.0).contains(&fract) { fract } else { 0.0 }
}

pub fn sample_unit(name: &str, attempt: u32, axis: Axis) -> f64 {
    PositionSampler::new(name).unit(attempt, axis)
}

/// Candidate source for one tag; the name hash is computed once.
#[derive(Debug, Clone, Copy)]
pub struct PositionSampler {
    hash: u32,
}

impl PositionSampler {
    pub fn new(name: &str) -> Self {
        Self {
            hash: hash_name(name),
        }
    }

    pub fn unit(&self, attempt: u32, axis: Axis) -> f64 {
        let seed = self.hash as f64 + attempt as f64 * ATTEMPT_STRIDE + axis.seed_offset();
        seeded_unit(seed)
    }

    /// Unit-square candidate for `attempt`.
    pub fn candidate(&self, attempt: u32) -> (f64, f64) {
        (self.unit(attempt, Axis::X), self.unit(attempt, Axis::Y))
    }
}
