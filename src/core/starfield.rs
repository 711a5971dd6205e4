use super::constants::*;
use super::phase::Phase;
use super::pointer::PointerState;
use super::viewport::Viewport;
use glam::{Vec2, Vec3};
use rand::Rng;

// position.xy equals base unless the pointer wave is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub base: Vec2,
}

pub struct StarField {
    particles: Vec<Particle>,
    world: Vec2,
}

impl StarField {
    pub fn new<R: Rng + ?Sized>(count: usize, world: Vec2, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| {
                let base = random_base(world, rng);
                let z = -rng.gen::<f32>() * INITIAL_DEPTH_SPAN - 1.0;
                Particle {
                    position: base.extend(z),
                    base,
                }
            })
            .collect();
        Self { particles, world }
    }

    pub fn with_defaults<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(STAR_COUNT, Vec2::new(WORLD_WIDTH, WORLD_HEIGHT), rng)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn world(&self) -> Vec2 {
        self.world
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // A star crossing z = 0 respawns at depth (-reset_depth - 1, -1].
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        time_sec: f32,
        phase: Phase,
        pointer: &PointerState,
        rng: &mut R,
    ) {
        let world = self.world;
        for p in self.particles.iter_mut() {
            p.position.z += phase.velocity;
            if p.position.z > 0.0 {
                p.position.z = -rng.gen::<f32>() * phase.reset_depth - 1.0;
                p.base = random_base(world, rng);
            }
            if pointer.hover {
                let wave_x = (time_sec
                    + p.base.y * WAVE_BASE_FREQ
                    + pointer.x * WAVE_POINTER_GAIN)
                    .sin()
                    * WAVE_AMPLITUDE;
                let wave_y = (time_sec
                    + p.base.x * WAVE_BASE_FREQ
                    + pointer.y * WAVE_POINTER_GAIN)
                    .cos()
                    * WAVE_AMPLITUDE;
                p.position.x = p.base.x + wave_x;
                p.position.y = p.base.y + wave_y;
            } else {
                p.position.x = p.base.x;
                p.position.y = p.base.y;
            }
        }
    }

    /// Rescale base positions so the field keeps its on-screen density.
    /// x scales by `(world_w / (new_w * 0.5)) / (world_w / (old_w * 0.5))`,
    /// y likewise with heights. Degenerate viewports leave the field as is.
    pub fn rescale(&mut self, old: &Viewport, new: &Viewport) {
        if old.is_degenerate() || new.is_degenerate() {
            return;
        }
        let scale_x =
            (self.world.x / (new.width * 0.5)) / (self.world.x / (old.width * 0.5));
        let scale_y =
            (self.world.y / (new.height * 0.5)) / (self.world.y / (old.height * 0.5));
        for p in self.particles.iter_mut() {
            p.base.x *= scale_x;
            p.base.y *= scale_y;
            p.position.x = p.base.x;
            p.position.y = p.base.y;
        }
    }

    pub fn write_positions(&self, out: &mut Vec<[f32; 3]>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| p.position.to_array()));
    }
}

#[inline]
fn random_base<R: Rng + ?Sized>(world: Vec2, rng: &mut R) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * world.x,
        (rng.gen::<f32>() - 0.5) * world.y,
    )
}
