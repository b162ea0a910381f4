//! Option values confined to a range.

/// A value with a default and inclusive bounds; assignments are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped<T> {
    def: T,
    min: T,
    max: T,
    value: T,
}

impl<T: PartialOrd + Copy> Clamped<T> {
    pub fn new(def: T, min: T, max: T) -> Self {
        Clamped {
            def,
            min,
            max,
            value: def,
        }
    }

    /// Stores `v` clamped to `[min, max]` and returns the stored value.
    pub fn set(&mut self, v: T) -> T {
        self.value = clamp(v, self.min, self.max);
        self.value
    }

    /// Restores the default.
    pub fn clear(&mut self) {
        self.value = self.def;
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn default_value(&self) -> T {
        self.def
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// Whether `v` would be stored unchanged.
    pub fn in_range(&self, v: T) -> bool {
        v >= self.min && v <= self.max
    }
}

fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
