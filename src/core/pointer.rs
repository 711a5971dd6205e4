use super::constants::TINT_THROTTLE_MS;

// x/y in [-1, 1], y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub hover: bool,
    pub last_update_ms: f64,
}

impl PointerState {
    pub fn moved(&mut self, x: f32, y: f32, now_ms: f64) {
        self.x = x;
        self.y = y;
        self.hover = true;
        self.last_update_ms = now_ms;
    }

    pub fn left(&mut self) {
        self.hover = false;
    }
}

#[inline]
pub fn normalize_client(
    client_x: f32,
    client_y: f32,
    rect_left: f32,
    rect_top: f32,
    rect_width: f32,
    rect_height: f32,
) -> (f32, f32) {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = ((client_x - rect_left) / rect_width) * 2.0 - 1.0;
    let y = -((client_y - rect_top) / rect_height) * 2.0 + 1.0;
    (x, y)
}

pub const NEUTRAL_TINT: [f32; 3] = [1.0, 1.0, 1.0];

// hue in turns
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(1.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |mut t: f32| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };
    [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
}

/// Pointer-driven colour for the star material.
///
/// While hovering the colour follows `hsl(|x|, 1, 0.5)`, refreshed at most
/// once per [`TINT_THROTTLE_MS`]. Without hover it snaps back to white.
#[derive(Clone, Debug)]
pub struct TintModulator {
    color: [f32; 3],
    last_update_ms: Option<f64>,
}

impl Default for TintModulator {
    fn default() -> Self {
        Self {
            color: NEUTRAL_TINT,
            last_update_ms: None,
        }
    }
}

impl TintModulator {
    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn update(&mut self, pointer: &PointerState, now_ms: f64) -> [f32; 3] {
        if !pointer.hover {
            self.color = NEUTRAL_TINT;
            return self.color;
        }
        let due = match self.last_update_ms {
            Some(last) => now_ms - last > TINT_THROTTLE_MS,
            None => true,
        };
        if due {
            self.color = hsl_to_rgb(pointer.x.abs(), 1.0, 0.5);
            self.last_update_ms = Some(now_ms);
        }
        self.color
    }
}
