//! The effect engine: one context object owning every component.
//!
//! Hosts call [`Engine::init`] once the document is ready, then forward each
//! input stream to its handler. Every handler writes into an [`Outbox`] that
//! the host applies before the next event is delivered.

use crate::config::{ConfigError, FxConfig};
use crate::lifecycle::{NoticeRules, SubmitGuard};
use crate::magnetic::{CardGlow, MagneticField};
use crate::parallax::ParallaxController;
use crate::particles::ParticleField;
use crate::pool::EffectPool;
use crate::registry::TargetRegistry;
use crate::reveal::{IntersectionEntry, RevealObserver, RevealTimings};
use crate::ripple::RippleEmitter;
use crate::scheduler::FrameScheduler;
use crate::sos;
use crate::surface::{EffectId, Outbox, Rect, TargetId, Timer};
use crate::theme::{PreferenceStore, Theme, ThemeController};
use crate::trail::PointerTrail;
use glam::Vec2;
use rand::Rng;

pub struct Engine<R: Rng> {
    config: FxConfig,
    rng: R,
    pool: EffectPool,
    frames: FrameScheduler,
    particles: ParticleField,
    trail: PointerTrail,
    magnetic: MagneticField,
    glow: CardGlow,
    ripples: RippleEmitter,
    reveal: RevealObserver,
    parallax: ParallaxController,
    notices: NoticeRules,
    submit: SubmitGuard,
    theme: ThemeController,
    initialized: bool,
}

impl<R: Rng> std::fmt::Debug for Engine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("initialized", &self.initialized)
            .field("live_effects", &self.pool.live_count())
            .field("particles", &self.particles.len())
            .field("theme", &self.theme.theme())
            .finish()
    }
}

impl<R: Rng> Engine<R> {
    pub fn new(
        config: FxConfig,
        rng: R,
        store: Box<dyn PreferenceStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            trail: PointerTrail::new(
                config.trail_max_points,
                config.trail_lifetime,
                config.trail_min_interval,
            ),
            magnetic: MagneticField::new(
                config.magnetic_radius,
                config.magnetic_strength,
                config.magnetic_snap_back,
            ),
            glow: CardGlow::default(),
            ripples: RippleEmitter::new(config.ripple_lifetime),
            reveal: RevealObserver::new(RevealTimings {
                fade_threshold: config.reveal_threshold,
                typing_threshold: config.typing_threshold,
                progress_threshold: config.progress_threshold,
                stagger: config.reveal_stagger,
                typing_interval: config.typing_interval,
                progress_settle: config.progress_settle,
            }),
            parallax: ParallaxController::new(config.parallax_ratio, config.parallax_fade_distance),
            notices: NoticeRules::new(config.notice_dismiss_after, config.notice_fade),
            submit: SubmitGuard::new(config.submit_busy_for),
            theme: ThemeController::new(store),
            particles: ParticleField::default(),
            pool: EffectPool::new(),
            frames: FrameScheduler::default(),
            rng,
            config,
            initialized: false,
        })
    }

    /// Wires every component against `registry`. Only the first call has an
    /// effect; returns whether this call initialized the engine.
    pub fn init(&mut self, registry: TargetRegistry, out: &mut Outbox) -> bool {
        if self.initialized {
            log::debug!("[engine] init ignored: already initialized");
            return false;
        }
        self.initialized = true;
        log::info!("\u{1F680} Initializing NOVA Enhanced Dashboard...");

        self.theme.load(registry.theme_icon, out);
        self.particles = ParticleField::spawn(
            self.config.particle_count,
            &mut self.rng,
            &mut self.pool,
            out,
        );
        self.trail.install(out);
        for &t in &registry.magnetic {
            self.magnetic.register(t);
        }
        self.ripples.install(out);
        for &t in &registry.ripple {
            self.ripples.register(t);
        }
        for &t in &registry.notices {
            self.notices.arm(t, out);
        }
        for (t, width) in &registry.progress {
            self.reveal.register_progress(*t, width.as_str());
        }
        for &t in &registry.glow {
            self.glow.register(t);
        }
        self.parallax.attach(registry.parallax);
        for &t in &registry.submit_buttons {
            self.submit.register(t);
        }
        for &t in &registry.reveal {
            self.reveal.register_fade(t, out);
        }
        for (t, text) in &registry.typing {
            self.reveal.register_typing(*t, text, out);
        }

        log::info!("\u{2705} NOVA Enhanced Dashboard Loaded!");
        log::debug!(
            "\u{2728} Features: Particles, Cursor Trail, Magnetic Buttons, Ripples ({} observed targets)",
            self.reveal.watched_count()
        );
        true
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2, out: &mut Outbox) -> Option<EffectId> {
        if !self.initialized {
            return None;
        }
        self.trail.on_move(pointer, &mut self.pool, out)
    }

    pub fn on_magnetic_move(&mut self, target: TargetId, rect: Rect, pointer: Vec2, out: &mut Outbox) {
        self.magnetic.on_move(target, rect, pointer, out);
    }

    pub fn on_magnetic_leave(&mut self, target: TargetId, out: &mut Outbox) {
        self.magnetic.on_leave(target, out);
    }

    pub fn on_card_move(&mut self, target: TargetId, rect: Rect, pointer: Vec2, out: &mut Outbox) {
        self.glow.on_move(target, rect, pointer, out);
    }

    pub fn on_click(
        &mut self,
        target: TargetId,
        rect: Rect,
        click: Vec2,
        out: &mut Outbox,
    ) -> Option<EffectId> {
        self.ripples.on_click(target, rect, click, &mut self.pool, out)
    }

    pub fn on_scroll(&mut self, offset: f32, out: &mut Outbox) {
        self.parallax.on_scroll(offset, &mut self.frames, out);
    }

    /// Display-frame callback. Returns false for frames nothing asked for.
    pub fn on_frame(&mut self, out: &mut Outbox) -> bool {
        let parallax = &self.parallax;
        self.frames.run_frame(|| parallax.apply(out)).is_some()
    }

    /// Returns how many (target, kind) reveals fired.
    pub fn on_intersections(&mut self, batch: &[IntersectionEntry], out: &mut Outbox) -> usize {
        self.reveal.on_intersections(batch, out).len()
    }

    pub fn on_timer(&mut self, timer: Timer, out: &mut Outbox) {
        match timer {
            Timer::Expire(id) => {
                self.pool.remove(id, out);
            }
            Timer::ClearTransition(t) => self.magnetic.on_snap_back_done(t, out),
            Timer::Reveal(t) => self.reveal.on_reveal_timer(t, out),
            Timer::TypeNext(t) => self.reveal.on_type_timer(t, out),
            Timer::ProgressFill(t) => self.reveal.on_progress_timer(t, out),
            Timer::NoticeFade(t) => self.notices.on_fade(t, out),
            Timer::NoticeRemove(t) => self.notices.on_remove(t, out),
            Timer::SubmitRestore(t) => self.submit.on_restore(t, out),
        }
    }

    pub fn on_animation_end(&mut self, id: EffectId, out: &mut Outbox) -> bool {
        self.pool.on_animation_end(id, out)
    }

    pub fn on_submit(&mut self, button: TargetId, label: &str, out: &mut Outbox) -> bool {
        self.submit.on_submit(button, label, out)
    }

    pub fn toggle_theme(&mut self, out: &mut Outbox) -> Theme {
        self.theme.toggle(out)
    }

    pub fn trigger_sos(&mut self, out: &mut Outbox) -> EffectId {
        log::warn!("[sos] emergency overlay triggered");
        sos::spawn_overlay(self.config.sos_duration, &mut self.pool, out)
    }

    // ---------------- Inspection ----------------

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn pool(&self) -> &EffectPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut EffectPool {
        &mut self.pool
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn trail(&self) -> &PointerTrail {
        &self.trail
    }

    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    pub fn notices(&self) -> &NoticeRules {
        &self.notices
    }

    pub fn submit(&self) -> &SubmitGuard {
        &self.submit
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn frame_pending(&self) -> bool {
        self.frames.in_flight()
    }
}
