//! The sunrise engine: initialization phase and timeline driver.
//!
//! A run moves through three phases: **Idle** (constructed, nothing sent),
//! **Running** (one tick per fixed sub-interval of the total duration), and
//! **Complete** (all 100 ticks driven; controllers stay at their last
//! commanded state).
//!
//! Initialization brings heterogeneous controllers — which may be off, or
//! left at arbitrary colors from whatever ran before — to the ramp's
//! starting state with a fixed, paced command sequence repeated a few
//! best-effort rounds per device. It guarantees attempts, not outcomes.
//!
//! Each timeline tick computes the interpolated target exactly once, then
//! fans the per-channel commands out to all controllers, skipping any
//! channel whose integer value is unchanged since the previous tick: the
//! device ranges are coarse while progress advances in 100 fine steps, so
//! many consecutive ticks compute identical values and skipping avoids
//! redundant network writes.
//!
//! The previous-tick state is a single value shared by all controllers, not
//! per-device. It is owned by the driver alone: read before a tick's
//! dispatch, overwritten only after the tick's join barrier has returned,
//! and never touched by device tasks. A crash mid-tick can leave some
//! devices one tick behind others; that drift is accepted.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::constants::*;
use crate::controller::{LightController, discover};
use crate::fanout::fan_out;
use crate::slide::{Rgb, Slide};

/// Lifecycle of one sunrise run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Running,
    Complete,
}

/// Interpolated target state of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Target {
    brightness: u8,
    color: Rgb,
}

/// One sunrise run over a fixed set of controllers.
///
/// Constructed Idle; [`run`](SunriseRun::run) drives it to Complete. The
/// pacing and round count of the initialization sequence default to the
/// observed controller behavior and are overridable for tests.
pub struct SunriseRun<C> {
    controllers: Vec<C>,
    slide: Slide,
    duration: Duration,
    pacing: Duration,
    init_rounds: u32,
    phase: RunPhase,
}

impl<C: LightController + Send> SunriseRun<C> {
    /// Create an Idle run with default pacing and init rounds.
    pub fn new(controllers: Vec<C>, slide: Slide, duration: Duration) -> Self {
        Self {
            controllers,
            slide,
            duration,
            pacing: Duration::from_millis(COMMAND_PACING_MS),
            init_rounds: INIT_ROUNDS,
            phase: RunPhase::Idle,
        }
    }

    /// Override the inter-command pacing of the initialization sequence.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Override the number of initialization rounds per controller.
    pub fn with_init_rounds(mut self, rounds: u32) -> Self {
        self.init_rounds = rounds;
        self
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Drive the full run: initialization, then all 100 timeline ticks.
    ///
    /// Individual command failures are reported and swallowed; once started,
    /// a run always reaches Complete.
    pub fn run(&mut self) {
        log_block_start!("Initializing {} controller(s)", self.controllers.len());
        self.initialize();

        // The initialization join is all we wait for; there is no
        // confirmation that any device actually reached the baseline
        self.phase = RunPhase::Running;
        log_block_start!(
            "Commencing sunrise: {} ticks over {:?}",
            TICK_COUNT,
            self.duration
        );
        self.drive_timeline();

        self.phase = RunPhase::Complete;
        log_block_start!("Sunrise complete");
    }

    /// Bring every controller to the ramp's starting state, best effort.
    ///
    /// Each controller gets the sequence power on → starting brightness →
    /// starting color with fixed pacing between commands, repeated for the
    /// configured number of rounds, concurrently with all other controllers
    /// and not coordinated with them. A failed command is reported and the
    /// sequence simply continues.
    fn initialize(&mut self) {
        let slide = self.slide;
        let pacing = self.pacing;
        let rounds = self.init_rounds;

        fan_out(&mut self.controllers, |controller| {
            log_indented!("{}: init", controller.address());
            for _ in 0..rounds {
                if let Err(err) = controller.set_power(true) {
                    log_warning!("Turning on {}: {err:#}", controller.address());
                }
                thread::sleep(pacing);
                if let Err(err) = controller.set_brightness(slide.brightness(0.0)) {
                    log_warning!("Setting brightness on {}: {err:#}", controller.address());
                }
                thread::sleep(pacing);
                if let Err(err) = controller.set_color(slide.color(0.0)) {
                    log_warning!("Setting color on {}: {err:#}", controller.address());
                }
                thread::sleep(pacing);
            }
        });
    }

    /// Drive all 100 ticks of the timeline.
    fn drive_timeline(&mut self) {
        let tick_interval = self.duration / TICK_COUNT;
        let mut previous: Option<Target> = None;

        for tick in 1..=TICK_COUNT {
            thread::sleep(tick_interval);

            let progress = f64::from(tick) / f64::from(TICK_COUNT);
            let target = Target {
                brightness: self.slide.brightness(progress),
                color: self.slide.color(progress),
            };

            let color_changed = previous.is_none_or(|prev| prev.color != target.color);
            let brightness_changed =
                previous.is_none_or(|prev| prev.brightness != target.brightness);

            if color_changed || brightness_changed {
                log_indented!(
                    "{tick:3}/{TICK_COUNT}: brightness {}, color {}",
                    target.brightness,
                    target.color
                );
            }

            if color_changed {
                fan_out(&mut self.controllers, |controller| {
                    if let Err(err) = controller.set_color(target.color) {
                        log_warning!("Setting color on {}: {err:#}", controller.address());
                    }
                });
            }

            if brightness_changed {
                fan_out(&mut self.controllers, |controller| {
                    if let Err(err) = controller.set_brightness(target.brightness) {
                        log_warning!("Setting brightness on {}: {err:#}", controller.address());
                    }
                });
            }

            // Always the last computed target, not the last sent one, and
            // only after the tick's join barrier has returned
            previous = Some(target);
        }
    }
}

/// Run a complete sunrise from configuration and CLI overrides.
///
/// Discovery failure is fatal and aborts before any device is touched;
/// everything after discovery runs to completion regardless of per-device
/// failures.
pub fn run_sunrise(
    network_override: Option<&str>,
    duration_override: Option<Duration>,
    debug_enabled: bool,
) -> Result<()> {
    log_version!();

    let config = Config::load()?;
    config.log_display();

    let network = match network_override {
        Some(network) => network.to_string(),
        None => config.network.clone().ok_or_else(|| {
            anyhow::anyhow!("No network range given on the command line or in the configuration")
        })?,
    };
    let duration = duration_override.unwrap_or_else(|| config.duration());
    let slide = config.slide()?;

    log_block_start!("Discovering controllers on {network}");
    let controllers = discover(&network, debug_enabled)?;
    for controller in &controllers {
        log_indented!("{controller}");
    }
    log_decorated!("Found {} controller(s)", controllers.len());

    let mut run = SunriseRun::new(controllers, slide, duration);
    run.run();

    log_end!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use mockall::predicate::eq;

    mockall::mock! {
        Controller {}

        impl LightController for Controller {
            fn set_power(&mut self, on: bool) -> Result<()>;
            fn set_brightness(&mut self, level: u8) -> Result<()>;
            fn set_color(&mut self, color: Rgb) -> Result<()>;
            fn address(&self) -> String;
        }
    }

    fn sunrise_slide() -> Slide {
        Slide {
            from_brightness: 1,
            to_brightness: 32,
            from_color: Rgb::new(255, 32, 0),
            to_color: Rgb::new(255, 192, 32),
        }
    }

    #[test]
    fn test_initialization_sequence_order_and_rounds() {
        let mut controller = MockController::new();
        controller
            .expect_address()
            .return_const("10.0.0.1".to_string());

        let mut seq = Sequence::new();
        for _ in 0..2 {
            controller
                .expect_set_power()
                .with(eq(true))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
            controller
                .expect_set_brightness()
                .with(eq(1))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
            controller
                .expect_set_color()
                .with(eq(Rgb::new(255, 32, 0)))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let mut run = SunriseRun::new(vec![controller], sunrise_slide(), Duration::ZERO)
            .with_pacing(Duration::ZERO)
            .with_init_rounds(2);

        assert_eq!(run.phase(), RunPhase::Idle);
        run.initialize();
        assert_eq!(run.phase(), RunPhase::Idle);
    }

    #[test]
    fn test_initialization_continues_past_command_failures() {
        let mut controller = MockController::new();
        controller
            .expect_address()
            .return_const("10.0.0.2".to_string());

        // Power fails every round; brightness and color must still be attempted
        controller
            .expect_set_power()
            .times(3)
            .returning(|_| Err(anyhow::anyhow!("connection refused")));
        controller
            .expect_set_brightness()
            .times(3)
            .returning(|_| Ok(()));
        controller.expect_set_color().times(3).returning(|_| Ok(()));

        let mut run = SunriseRun::new(vec![controller], sunrise_slide(), Duration::ZERO)
            .with_pacing(Duration::ZERO)
            .with_init_rounds(3);
        run.initialize();
    }

    #[test]
    fn test_constant_slide_sends_each_channel_exactly_once() {
        // Identical endpoints: every tick after the first computes the same
        // target, so the first tick fires both channels and the other 99
        // issue nothing at all
        let slide = Slide {
            from_brightness: 16,
            to_brightness: 16,
            from_color: Rgb::new(10, 20, 30),
            to_color: Rgb::new(10, 20, 30),
        };

        let mut controller = MockController::new();
        controller
            .expect_address()
            .return_const("10.0.0.3".to_string());
        controller
            .expect_set_color()
            .with(eq(Rgb::new(10, 20, 30)))
            .times(1)
            .returning(|_| Ok(()));
        controller
            .expect_set_brightness()
            .with(eq(16))
            .times(1)
            .returning(|_| Ok(()));

        let mut run = SunriseRun::new(vec![controller], slide, Duration::ZERO);
        run.drive_timeline();
    }

    #[test]
    fn test_full_run_reaches_complete_with_failing_controller() {
        let mut failing = MockController::new();
        failing
            .expect_address()
            .return_const("10.0.0.4".to_string());
        failing
            .expect_set_power()
            .returning(|_| Err(anyhow::anyhow!("unreachable")));
        failing
            .expect_set_brightness()
            .returning(|_| Err(anyhow::anyhow!("unreachable")));
        failing
            .expect_set_color()
            .returning(|_| Err(anyhow::anyhow!("unreachable")));

        let mut healthy = MockController::new();
        healthy
            .expect_address()
            .return_const("10.0.0.5".to_string());
        healthy.expect_set_power().returning(|_| Ok(()));
        healthy.expect_set_brightness().returning(|_| Ok(()));
        // The last color command must carry the ramp's end color
        healthy
            .expect_set_color()
            .returning(|_| Ok(()))
            .withf(|color| color.red == 255);

        let mut run = SunriseRun::new(
            vec![failing, healthy],
            sunrise_slide(),
            Duration::from_millis(100),
        )
        .with_pacing(Duration::ZERO)
        .with_init_rounds(1);

        run.run();
        assert_eq!(run.phase(), RunPhase::Complete);
    }

    #[test]
    fn test_final_tick_reaches_exact_end_state() {
        // Sunrise preset green advances >1 unit per tick, so every tick
        // fires a color command; the very last one must be the end color
        let mut controller = MockController::new();
        controller
            .expect_address()
            .return_const("10.0.0.6".to_string());

        let mut seq = Sequence::new();
        controller
            .expect_set_color()
            .times(99)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        controller
            .expect_set_color()
            .with(eq(Rgb::new(255, 192, 32)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        controller
            .expect_set_brightness()
            .times(32)
            .returning(|_| Ok(()));

        let mut run = SunriseRun::new(vec![controller], sunrise_slide(), Duration::ZERO);
        run.drive_timeline();
    }
}
