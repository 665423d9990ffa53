// extensions/tween.rs
//
// Tween drivers — animate one property of a node from a start value to an end
// value, one step per frame.
//
// Usage (owned tween, ends when dropped):
//   let mut fade = Tween::fade_from_to(TintSlot::Material, 1.0, 0.0, 0.5, Easing::QuadOut);
//   fade.advance(clock.now(), &mut entity)?;   // once per frame
//
// Usage (managed by id):
//   let mut tweens = TweenState::new();
//   let id = tweens.add(entity_id, Tween::move_bounce(a, b, 1.0, Easing::Quad));
//   tweens.tick(clock.now(), &mut scene);      // once per frame
//   tweens.stop(id);

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use super::easing::{ease, ease_vec2, ease_vec3, Easing};
use super::random::{random_range_xy, Rng};
use crate::api::config::KitConfig;
use crate::api::error::KitError;
use crate::api::traits::Animatable;
use crate::api::types::{EntityId, TintSlot};
use crate::core::scene::Scene;

/// What property a tween animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Alpha of a tint slot; R, G and B are left alone.
    Alpha { slot: TintSlot, from: f32, to: f32 },
    /// Local euler angles, interpolated per component.
    Rotation { from: Vec3, to: Vec3 },
    /// Local scale x and y; z is left alone.
    Scale { from: Vec2, to: Vec2 },
    /// World position.
    Position { from: Vec3, to: Vec3 },
}

impl TweenTarget {
    /// Same property, travelling the other way.
    pub fn reversed(self) -> Self {
        match self {
            TweenTarget::Alpha { slot, from, to } => TweenTarget::Alpha { slot, from: to, to: from },
            TweenTarget::Rotation { from, to } => TweenTarget::Rotation { from: to, to: from },
            TweenTarget::Scale { from, to } => TweenTarget::Scale { from: to, to: from },
            TweenTarget::Position { from, to } => TweenTarget::Position { from: to, to: from },
        }
    }

    fn write<H: Animatable + ?Sized>(&self, host: &mut H, t: f32, easing: Easing) -> Result<(), KitError> {
        match *self {
            TweenTarget::Alpha { slot, from, to } => {
                let tint = host.tint_mut(slot).ok_or(KitError::MissingTint(slot))?;
                tint.set_alpha(ease(from, to, t, easing));
            }
            TweenTarget::Rotation { from, to } => {
                host.set_local_euler_angles(ease_vec3(from, to, t, easing));
            }
            TweenTarget::Scale { from, to } => {
                let xy = ease_vec2(from, to, t, easing);
                let z = host.local_scale().z;
                host.set_local_scale(xy.extend(z));
            }
            TweenTarget::Position { from, to } => {
                host.set_position(ease_vec3(from, to, t, easing));
            }
        }
        Ok(())
    }

    /// Write the end value exactly, without going through the interpolation.
    fn write_end<H: Animatable + ?Sized>(&self, host: &mut H) -> Result<(), KitError> {
        match *self {
            TweenTarget::Alpha { slot, to, .. } => {
                host.tint_mut(slot).ok_or(KitError::MissingTint(slot))?.set_alpha(to);
            }
            TweenTarget::Rotation { to, .. } => host.set_local_euler_angles(to),
            TweenTarget::Scale { to, .. } => {
                let z = host.local_scale().z;
                host.set_local_scale(to.extend(z));
            }
            TweenTarget::Position { to, .. } => host.set_position(to),
        }
        Ok(())
    }
}

/// What happens when a tween reaches its end value.
#[derive(Debug, Clone, Default)]
pub enum TweenLoop {
    /// Stop. `advance` reports `Complete`.
    #[default]
    Once,
    /// Swap start and end and go again, forever.
    PingPong,
    /// Move to a fresh random point in the rectangle spanned by the two
    /// corners (x from `upper_left.x` to `lower_right.x`, y from
    /// `lower_right.y` to `upper_left.y`, z = 0), forever.
    Wander { upper_left: Vec3, lower_right: Vec3, rng: Rng },
}

/// Result of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    Running,
    Complete,
}

/// A single tween animation.
///
/// The start time is taken from the first `advance` call. Looping tweens
/// (`PingPong`, `Wander`) never complete on their own: call [`Tween::stop`],
/// drop the tween, or remove it from its [`TweenState`].
#[derive(Debug, Clone)]
pub struct Tween {
    /// What to animate.
    pub target: TweenTarget,
    /// Easing function.
    pub easing: Easing,
    /// Loop behavior.
    pub loop_mode: TweenLoop,
    /// Duration in seconds, never negative.
    duration: f32,
    start_time: Option<f32>,
    finished: bool,
}

impl Tween {
    /// Create a tween. Negative or NaN durations are treated as zero: the end
    /// value is written on the first `advance`.
    pub fn new(target: TweenTarget, duration: f32, easing: Easing) -> Self {
        let clamped = duration.max(0.0);
        if clamped != duration {
            log::warn!("tween duration {} clamped to {}", duration, clamped);
        }
        Self {
            target,
            easing,
            loop_mode: TweenLoop::Once,
            duration: clamped,
            start_time: None,
            finished: false,
        }
    }

    // -- Alpha --

    /// Fade a tint slot between two alpha values.
    pub fn fade_from_to(slot: TintSlot, from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Alpha { slot, from, to }, duration, easing)
    }

    /// Fade from the slot's current alpha.
    pub fn fade_to<H: Animatable + ?Sized>(
        host: &H,
        slot: TintSlot,
        to: f32,
        duration: f32,
        easing: Easing,
    ) -> Result<Self, KitError> {
        let from = host.tint(slot).ok_or(KitError::MissingTint(slot))?.alpha();
        Ok(Self::fade_from_to(slot, from, to, duration, easing))
    }

    /// Fade back and forth forever.
    pub fn fade_bounce(slot: TintSlot, from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::fade_from_to(slot, from, to, duration, easing).with_loop(TweenLoop::PingPong)
    }

    /// Linear text fade from transparent to opaque.
    pub fn fade_in(duration: f32) -> Self {
        Self::fade_from_to(TintSlot::Text, 0.0, 1.0, duration, Easing::Linear)
    }

    /// Linear text fade from opaque to transparent.
    pub fn fade_out(duration: f32) -> Self {
        Self::fade_from_to(TintSlot::Text, 1.0, 0.0, duration, Easing::Linear)
    }

    // -- Rotation --

    pub fn rotate_from_to(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Rotation { from, to }, duration, easing)
    }

    /// Rotate from the current local euler angles.
    pub fn rotate_to<H: Animatable + ?Sized>(host: &H, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self::rotate_from_to(host.local_euler_angles(), to, duration, easing)
    }

    pub fn rotate_bounce(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self::rotate_from_to(from, to, duration, easing).with_loop(TweenLoop::PingPong)
    }

    // -- Scale --

    /// Scale x and y independently.
    pub fn scale_from_to_xy(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Scale { from, to }, duration, easing)
    }

    /// Uniform x/y scale.
    pub fn scale_from_to(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::scale_from_to_xy(Vec2::splat(from), Vec2::splat(to), duration, easing)
    }

    /// Scale from the current x/y scale to a uniform value.
    pub fn scale_to<H: Animatable + ?Sized>(host: &H, to: f32, duration: f32, easing: Easing) -> Self {
        let from = host.local_scale().truncate();
        Self::scale_from_to_xy(from, Vec2::splat(to), duration, easing)
    }

    pub fn scale_bounce(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::scale_from_to(from, to, duration, easing).with_loop(TweenLoop::PingPong)
    }

    // -- Position --

    pub fn move_from_to(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Position { from, to }, duration, easing)
    }

    /// Move between two points on the z = 0 plane.
    pub fn move_from_to_2d(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::move_from_to(from.extend(0.0), to.extend(0.0), duration, easing)
    }

    /// Move from the current position to a point on the z = 0 plane.
    pub fn move_to<H: Animatable + ?Sized>(host: &H, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::move_from_to(host.position(), to.extend(0.0), duration, easing)
    }

    pub fn move_bounce(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self::move_from_to(from, to, duration, easing).with_loop(TweenLoop::PingPong)
    }

    /// Drift between random points inside a rectangle, forever. Every leg,
    /// the first included, starts from the host's position when it begins.
    pub fn move_randomly<H: Animatable + ?Sized>(
        host: &H,
        upper_left: Vec3,
        lower_right: Vec3,
        mut rng: Rng,
        duration: f32,
        easing: Easing,
    ) -> Self {
        let to = wander_destination(&mut rng, upper_left, lower_right);
        Self::move_from_to(host.position(), to, duration, easing)
            .with_loop(TweenLoop::Wander { upper_left, lower_right, rng })
    }

    // -- Builder methods --

    pub fn with_loop(mut self, mode: TweenLoop) -> Self {
        self.loop_mode = mode;
        self
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Start time of the current leg, once the tween has been advanced.
    pub fn start_time(&self) -> Option<f32> {
        self.start_time
    }

    /// Raw progress of the current leg at `now`, clamped to [0, 1].
    pub fn progress(&self, now: f32) -> f32 {
        match self.start_time {
            None => 0.0,
            Some(_) if self.finished => 1.0,
            Some(_) if self.duration <= 0.0 => 1.0,
            Some(start) => ((now - start) / self.duration).clamp(0.0, 1.0),
        }
    }

    /// Whether the tween will no longer write anything.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// End the tween where it is. Later `advance` calls write nothing.
    pub fn stop(&mut self) {
        self.finished = true;
    }

    /// Step the tween to `now` and write the property to `host`. Call once
    /// per frame.
    ///
    /// Writes the eased value while the leg is in progress and the exact end
    /// value on the frame the leg runs out.
    pub fn advance<H: Animatable + ?Sized>(&mut self, now: f32, host: &mut H) -> Result<TweenStatus, KitError> {
        if self.finished {
            return Ok(TweenStatus::Complete);
        }

        if self.start_time.is_none() {
            if let (TweenLoop::Wander { .. }, TweenTarget::Position { from, .. }) = (&self.loop_mode, &mut self.target) {
                *from = host.position();
            }
        }
        let start = *self.start_time.get_or_insert(now);
        let elapsed = now - start;
        if elapsed < self.duration {
            self.target.write(host, elapsed / self.duration, self.easing)?;
            return Ok(TweenStatus::Running);
        }

        self.target.write_end(host)?;
        match &mut self.loop_mode {
            TweenLoop::Once => {
                self.finished = true;
                Ok(TweenStatus::Complete)
            }
            TweenLoop::PingPong => {
                self.target = self.target.reversed();
                self.start_time = Some(now);
                Ok(TweenStatus::Running)
            }
            TweenLoop::Wander { upper_left, lower_right, rng } => {
                let to = wander_destination(rng, *upper_left, *lower_right);
                self.target = TweenTarget::Position { from: host.position(), to };
                self.start_time = Some(now);
                Ok(TweenStatus::Running)
            }
        }
    }
}

fn wander_destination(rng: &mut Rng, upper_left: Vec3, lower_right: Vec3) -> Vec3 {
    random_range_xy(rng, (upper_left.x, lower_right.x), Some((lower_right.y, upper_left.y)))
}

/// Handle to a managed tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

/// Runs tweens against scene entities by id.
#[derive(Debug)]
pub struct TweenState {
    tweens: HashMap<TweenId, (EntityId, Tween)>,
    next_id: u32,
    rng: Rng,
}

impl Default for TweenState {
    fn default() -> Self {
        Self::with_config(&KitConfig::default())
    }
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &KitConfig) -> Self {
        Self {
            tweens: HashMap::new(),
            next_id: 0,
            rng: Rng::new(config.random_seed),
        }
    }

    /// A generator for a new `Wander` tween, split off the manager's own stream.
    pub fn fork_rng(&mut self) -> Rng {
        Rng::new(self.rng.next_u64())
    }

    /// Add a tween for an entity. Returns a handle for stopping it later.
    pub fn add(&mut self, entity: EntityId, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        log::debug!("tween {} started on entity {}: {:?}", id.0, entity.0, tween.target);
        self.tweens.insert(id, (entity, tween));
        id
    }

    /// Stop a tween. Returns whether it was still running.
    pub fn stop(&mut self, id: TweenId) -> bool {
        let removed = self.tweens.remove(&id).is_some();
        if removed {
            log::debug!("tween {} stopped", id.0);
        }
        removed
    }

    /// Stop all tweens for an entity, e.g. before destroying it.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.tweens.retain(|_, (e, _)| *e != entity);
    }

    /// Get a tween by handle.
    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(&id).map(|(_, t)| t)
    }

    /// Get a tween mutably.
    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tweens.get_mut(&id).map(|(_, t)| t)
    }

    /// Advance all tweens and apply them to entities in the scene.
    ///
    /// Completed tweens are removed. Tweens whose entity is gone, or lacks the
    /// colour an alpha tween needs, are removed with a warning.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, now: f32, scene: &mut Scene) -> usize {
        let mut completed = 0;

        self.tweens.retain(|id, (entity_id, tween)| {
            let Some(entity) = scene.get_mut(*entity_id) else {
                log::warn!("tween {} dropped: {}", id.0, KitError::MissingEntity(*entity_id));
                return false;
            };
            match tween.advance(now, entity) {
                Ok(TweenStatus::Running) => true,
                Ok(TweenStatus::Complete) => {
                    log::debug!("tween {} complete", id.0);
                    completed += 1;
                    false
                }
                Err(err) => {
                    log::warn!("tween {} dropped: {}", id.0, err);
                    false
                }
            }
        });

        completed
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active tweens.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Clear all tweens.
    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::color::Color;
    use crate::components::entity::Entity;
    use crate::components::renderer::{Renderer, TextLabel};

    fn entity() -> Entity {
        Entity::new(EntityId(1))
            .with_renderer(Renderer::new(Color::rgb(0.2, 0.4, 0.6)))
            .with_label(TextLabel::new("hi"))
    }

    #[test]
    fn finite_tween_lands_exactly_despite_jitter() {
        let mut e = entity();
        let mut tween = Tween::move_from_to(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1.0, Easing::Quad);
        let frames = [0.0, 0.013, 0.051, 0.2, 0.33, 0.37, 0.61, 0.9, 0.999, 1.07];
        let mut last = TweenStatus::Running;
        for now in frames {
            last = tween.advance(now, &mut e).unwrap();
        }
        assert_eq!(last, TweenStatus::Complete);
        assert_eq!(e.position.x, 10.0);
    }

    #[test]
    fn halfway_linear() {
        let mut e = entity();
        let mut tween = Tween::move_from_to(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 1.0, Easing::Linear);
        tween.advance(2.0, &mut e).unwrap();
        assert_eq!(e.position.x, 0.0);
        tween.advance(2.5, &mut e).unwrap();
        assert!((e.position.x - 50.0).abs() < 0.01);
    }

    #[test]
    fn zero_duration_jumps_on_first_advance() {
        let mut e = entity();
        let mut tween = Tween::scale_from_to(1.0, 3.0, 0.0, Easing::Linear);
        assert_eq!(tween.advance(5.0, &mut e).unwrap(), TweenStatus::Complete);
        assert_eq!(e.scale, Vec3::new(3.0, 3.0, 1.0));
    }

    #[test]
    fn negative_duration_is_clamped() {
        let tween = Tween::scale_from_to(1.0, 3.0, -2.0, Easing::Linear);
        assert_eq!(tween.duration(), 0.0);
        let tween = Tween::scale_from_to(1.0, 3.0, f32::NAN, Easing::Linear);
        assert_eq!(tween.duration(), 0.0);
    }

    #[test]
    fn completed_tween_stops_writing() {
        let mut e = entity();
        let mut tween = Tween::rotate_from_to(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0), 0.5, Easing::Linear);
        tween.advance(0.0, &mut e).unwrap();
        tween.advance(0.6, &mut e).unwrap();
        e.euler_angles = Vec3::ZERO;
        assert_eq!(tween.advance(0.7, &mut e).unwrap(), TweenStatus::Complete);
        assert_eq!(e.euler_angles, Vec3::ZERO);
    }

    #[test]
    fn fade_keeps_rgb() {
        let mut e = entity();
        let mut tween = Tween::fade_to(&e, TintSlot::Material, 0.0, 1.0, Easing::Linear).unwrap();
        tween.advance(0.0, &mut e).unwrap();
        tween.advance(0.5, &mut e).unwrap();
        let c = e.renderer.unwrap().color;
        assert_eq!((c.r, c.g, c.b), (0.2, 0.4, 0.6));
        assert!((c.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fade_without_renderer_is_error() {
        let mut bare = Entity::new(EntityId(2));
        assert!(matches!(
            Tween::fade_to(&bare, TintSlot::Material, 0.0, 1.0, Easing::Linear),
            Err(KitError::MissingTint(TintSlot::Material))
        ));
        let mut tween = Tween::fade_from_to(TintSlot::Material, 1.0, 0.0, 1.0, Easing::Linear);
        assert!(tween.advance(0.0, &mut bare).is_err());
    }

    #[test]
    fn text_fade_out_ends_transparent() {
        let mut e = entity();
        let mut tween = Tween::fade_out(0.25);
        tween.advance(0.0, &mut e).unwrap();
        assert_eq!(e.label.as_ref().unwrap().color.a, 1.0);
        tween.advance(0.3, &mut e).unwrap();
        assert_eq!(e.label.as_ref().unwrap().color.a, 0.0);
    }

    #[test]
    fn scale_leaves_z_alone() {
        let mut e = entity().with_scale(Vec3::new(1.0, 1.0, 7.0));
        let mut tween = Tween::scale_to(&e, 2.0, 1.0, Easing::QuadOut);
        tween.advance(0.0, &mut e).unwrap();
        tween.advance(1.0, &mut e).unwrap();
        assert_eq!(e.scale, Vec3::new(2.0, 2.0, 7.0));
    }

    #[test]
    fn move_to_lands_on_z_plane() {
        let mut e = entity().with_position(Vec3::new(1.0, 1.0, 5.0));
        let mut tween = Tween::move_to(&e, Vec2::new(4.0, 4.0), 1.0, Easing::Linear);
        tween.advance(0.0, &mut e).unwrap();
        assert_eq!(e.position, Vec3::new(1.0, 1.0, 5.0));
        tween.advance(1.0, &mut e).unwrap();
        assert_eq!(e.position, Vec3::new(4.0, 4.0, 0.0));
    }

    #[test]
    fn ping_pong_never_completes() {
        let mut e = entity();
        let mut tween = Tween::move_bounce(Vec3::ZERO, Vec3::X * 100.0, 1.0, Easing::Linear);
        assert_eq!(tween.advance(0.0, &mut e).unwrap(), TweenStatus::Running);
        assert_eq!(tween.advance(1.0, &mut e).unwrap(), TweenStatus::Running);
        assert_eq!(e.position.x, 100.0);
        tween.advance(1.5, &mut e).unwrap();
        assert!((e.position.x - 50.0).abs() < 0.01);
        tween.advance(2.0, &mut e).unwrap();
        assert_eq!(e.position.x, 0.0);
        for i in 0..50 {
            let status = tween.advance(2.0 + i as f32 * 0.37, &mut e).unwrap();
            assert_eq!(status, TweenStatus::Running);
        }
        tween.stop();
        assert_eq!(tween.advance(100.0, &mut e).unwrap(), TweenStatus::Complete);
    }

    #[test]
    fn wander_stays_inside_rectangle() {
        let mut e = entity();
        let upper_left = Vec3::new(-5.0, 5.0, 0.0);
        let lower_right = Vec3::new(5.0, -5.0, 0.0);
        let mut tween = Tween::move_randomly(&e, upper_left, lower_right, Rng::new(77), 0.5, Easing::Linear);
        let mut now = 0.0;
        for _ in 0..200 {
            assert_eq!(tween.advance(now, &mut e).unwrap(), TweenStatus::Running);
            now += 0.1;
            if let TweenTarget::Position { to, .. } = tween.target {
                assert!((-5.0..=5.0).contains(&to.x), "x = {}", to.x);
                assert!((-5.0..=5.0).contains(&to.y), "y = {}", to.y);
                assert_eq!(to.z, 0.0);
            }
        }
    }

    #[test]
    fn wander_first_leg_starts_where_host_is_on_first_advance() {
        let mut e = entity();
        let upper_left = Vec3::new(-5.0, 5.0, 0.0);
        let lower_right = Vec3::new(5.0, -5.0, 0.0);
        let mut tween = Tween::move_randomly(&e, upper_left, lower_right, Rng::new(5), 1.0, Easing::Linear);

        e.position = Vec3::new(3.0, -2.0, 0.0);
        tween.advance(10.0, &mut e).unwrap();
        assert_eq!(e.position, Vec3::new(3.0, -2.0, 0.0));
        match tween.target {
            TweenTarget::Position { from, .. } => assert_eq!(from, Vec3::new(3.0, -2.0, 0.0)),
            ref other => panic!("unexpected target {:?}", other),
        }
    }

    #[test]
    fn state_ticks_and_removes_completed() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id));

        tweens.add(id, Tween::move_from_to(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 1.0, Easing::Linear));

        assert_eq!(tweens.tick(0.0, &mut scene), 0);
        assert_eq!(tweens.tick(0.5, &mut scene), 0);
        assert!((scene.get(id).unwrap().position.x - 50.0).abs() < 0.01);
        assert_eq!(tweens.tick(1.0, &mut scene), 1);
        assert_eq!(scene.get(id).unwrap().position.x, 100.0);
        assert!(tweens.is_empty());
    }

    #[test]
    fn state_stop_by_handle() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id));

        let handle = tweens.add(id, Tween::rotate_bounce(Vec3::ZERO, Vec3::Z * 45.0, 1.0, Easing::Linear));
        tweens.tick(0.0, &mut scene);
        tweens.tick(0.5, &mut scene);
        assert!(tweens.stop(handle));
        assert!(!tweens.stop(handle));

        let before = scene.get(id).unwrap().euler_angles;
        tweens.tick(0.9, &mut scene);
        assert_eq!(scene.get(id).unwrap().euler_angles, before);
    }

    #[test]
    fn state_drops_tweens_of_destroyed_entities() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id));
        tweens.add(id, Tween::scale_bounce(1.0, 2.0, 1.0, Easing::Linear));

        scene.destroy(id).unwrap();
        assert_eq!(tweens.tick(0.0, &mut scene), 0);
        assert!(tweens.is_empty());
    }

    #[test]
    fn remove_entity_tweens() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);

        tweens.add(id, Tween::move_from_to(Vec3::ZERO, Vec3::ONE, 1.0, Easing::Linear));
        tweens.add(id, Tween::rotate_from_to(Vec3::ZERO, Vec3::ONE, 1.0, Easing::Linear));

        assert_eq!(tweens.len(), 2);
        tweens.remove_entity(id);
        assert!(tweens.is_empty());
    }

    #[test]
    fn forked_generators_differ() {
        let mut tweens = TweenState::new();
        let mut a = tweens.fork_rng();
        let mut b = tweens.fork_rng();
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
