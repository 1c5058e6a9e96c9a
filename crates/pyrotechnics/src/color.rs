use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    pub fn lerp(self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            red: self.red + (end.red - self.red) * t,
            green: self.green + (end.green - self.green) * t,
            blue: self.blue + (end.blue - self.blue) * t,
            alpha: self.alpha + (end.alpha - self.alpha) * t,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.red.is_finite() && self.green.is_finite() && self.blue.is_finite() && self.alpha.is_finite()
    }
}

/// How one color channel is picked by [`ColorOptions::sample`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    Fixed(f32),
    Range { minimum: f32, maximum: f32 },
}

impl Channel {
    pub const fn at_least(minimum: f32) -> Self {
        Channel::Range {
            minimum,
            maximum: 1.0,
        }
    }

    pub const fn any() -> Self {
        Self::at_least(0.0)
    }

    fn sample(self, rng: &mut RandomSource) -> f32 {
        match self {
            Channel::Fixed(value) => value,
            // fixed channels consume no randomness, ranges consume exactly one draw
            Channel::Range { minimum, maximum } => {
                rng.random_between(minimum as f64, maximum as f64) as f32
            }
        }
    }

    pub fn admits(self, value: f32) -> bool {
        match self {
            Channel::Fixed(fixed) => value == fixed,
            Channel::Range { minimum, maximum } => value >= minimum && value <= maximum,
        }
    }
}

/// Constraints for a randomly generated color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorOptions {
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
    pub alpha: Channel,
}

impl ColorOptions {
    /// Samples red, green, blue, alpha in that order.
    pub fn sample(&self, rng: &mut RandomSource) -> Rgba {
        let red = self.red.sample(rng);
        let green = self.green.sample(rng);
        let blue = self.blue.sample(rng);
        let alpha = self.alpha.sample(rng);
        Rgba::new(red, green, blue, alpha)
    }

    pub fn admits(&self, color: Rgba) -> bool {
        self.red.admits(color.red)
            && self.green.admits(color.green)
            && self.blue.admits(color.blue)
            && self.alpha.admits(color.alpha)
    }
}

pub const SHOW_PALETTES: [ColorOptions; 4] = [
    // magenta
    ColorOptions {
        red: Channel::at_least(0.75),
        green: Channel::Fixed(0.0),
        blue: Channel::at_least(0.8),
        alpha: Channel::Fixed(1.0),
    },
    // cyan
    ColorOptions {
        red: Channel::Fixed(0.0),
        green: Channel::at_least(0.75),
        blue: Channel::at_least(0.8),
        alpha: Channel::Fixed(1.0),
    },
    // blue
    ColorOptions {
        red: Channel::Fixed(0.0),
        green: Channel::Fixed(0.0),
        blue: Channel::at_least(0.8),
        alpha: Channel::Fixed(1.0),
    },
    // yellow
    ColorOptions {
        red: Channel::at_least(0.75),
        green: Channel::at_least(0.75),
        blue: Channel::Fixed(0.0),
        alpha: Channel::Fixed(1.0),
    },
];

pub fn palette_index(firework_index: usize) -> usize {
    firework_index % SHOW_PALETTES.len()
}

pub fn palette_for(firework_index: usize) -> &'static ColorOptions {
    &SHOW_PALETTES[palette_index(firework_index)]
}
