//! Timer controller: owns the countdown and keeps the screen in step with it

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    error::{parse_duration_seconds, TimerError},
    messages::{Locale, MessageId},
    services::{Clock, Notifier, Scheduler, TickHandle, View},
};

use super::{
    format_remaining, ButtonId, Phase, Progress, SavedState, Screen, TimerState,
};

/// Tunables for the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    /// Nominal delay between ticks
    pub tick_interval: Duration,
    /// Length of the completion pulse
    pub vibration: Duration,
    pub locale: Locale,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            vibration: Duration::from_millis(500),
            locale: Locale::default(),
        }
    }
}

/// Single-screen countdown controller.
///
/// All operations run on one thread. At most one tick is pending at any time:
/// every reschedule cancels the previous handle first, and ticks carrying any
/// other handle are dropped as stale.
#[derive(Debug)]
pub struct TimerController<C, S, V, N> {
    clock: C,
    scheduler: S,
    view: V,
    notifier: N,
    settings: TimerSettings,
    state: TimerState,
    screen: Screen,
    pending_tick: Option<TickHandle>,
    start_time: Instant,
    last_action: Option<&'static str>,
    last_action_time: Option<DateTime<Utc>>,
}

impl<C, S, V, N> TimerController<C, S, V, N>
where
    C: Clock,
    S: Scheduler,
    V: View,
    N: Notifier,
{
    /// Create an idle controller and draw the initial screen
    pub fn new(clock: C, scheduler: S, view: V, notifier: N, settings: TimerSettings) -> Self {
        let mut controller = Self {
            clock,
            scheduler,
            view,
            notifier,
            settings,
            state: TimerState::new(),
            screen: Screen::new(settings.locale),
            pending_tick: None,
            start_time: Instant::now(),
            last_action: None,
            last_action_time: None,
        };
        controller.render();
        controller
    }

    /// Replace the text of the input field
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.screen.input.text = text.into();
        self.screen.input.keyboard_visible = true;
        self.render();
    }

    /// Click a button. Returns false when the button is hidden or disabled.
    pub fn press(&mut self, button: ButtonId) -> bool {
        if !self.screen.button(button).is_clickable() {
            debug!("Ignoring click on unavailable {:?} button", button);
            return false;
        }

        match button {
            ButtonId::Start => {
                self.screen.input.keyboard_visible = false;
                let input = self.screen.input.text.clone();
                // Already reported to the user as a transient message
                if let Err(e) = self.start(&input) {
                    debug!("Start rejected: {}", e);
                }
            }
            ButtonId::Pause => self.toggle_pause(),
            ButtonId::Reset => self.reset(),
        }
        true
    }

    /// Editor "done" action: dismiss the keyboard and click start
    pub fn submit_input(&mut self) -> bool {
        self.screen.input.keyboard_visible = false;
        let pressed = self.press(ButtonId::Start);
        if !pressed {
            self.render();
        }
        pressed
    }

    /// Start a countdown from the given seconds text.
    ///
    /// Invalid input is reported through the notifier and leaves the current
    /// countdown, running or paused, untouched. Valid input replaces any
    /// countdown in progress.
    pub fn start(&mut self, input: &str) -> Result<(), TimerError> {
        let seconds = match parse_duration_seconds(input) {
            Ok(seconds) => seconds,
            Err(e) => {
                info!("Rejected start input {:?}", input);
                let text = self.text(MessageId::InvalidNumber);
                self.notifier.show_transient_message(text);
                self.render();
                return Err(e);
            }
        };

        self.cancel_pending_tick();
        let now = self.clock.now_millis();
        self.state.start(seconds * 1000, now);

        self.screen.show_countdown_controls();
        self.screen.set_pause_label(self.settings.locale, false);
        self.record_action("start");
        info!("Countdown started for {}s", seconds);

        self.schedule_tick(Duration::ZERO);
        self.render();
        Ok(())
    }

    /// Scheduler callback. Handles other than the pending one are stale.
    pub fn tick(&mut self, handle: TickHandle) {
        if self.pending_tick != Some(handle) {
            debug!("Ignoring stale tick {}", handle.generation());
            return;
        }
        self.pending_tick = None;

        let now = self.clock.now_millis();
        match self.state.advance(now) {
            Progress::Remaining(millis) | Progress::Frozen(millis) => {
                self.screen.display = format_remaining(millis);
                self.schedule_tick(self.settings.tick_interval);
                self.render();
            }
            Progress::Expired => self.finish(),
            Progress::Inactive => debug!("Tick with no active countdown"),
        }
    }

    /// Freeze the countdown. Repeated calls only refresh the label.
    pub fn pause(&mut self) {
        if !self.state.is_running() {
            debug!("Pause ignored: no countdown running");
            return;
        }

        if self.state.pause() {
            info!("Countdown paused with {}ms remaining", self.state.remaining_millis());
            self.screen.start.enabled = true;
            self.record_action("pause");
        }
        self.screen.set_pause_label(self.settings.locale, true);
        self.render();
    }

    /// Continue a paused countdown without charging the paused interval
    pub fn resume(&mut self) {
        if !self.state.is_running() {
            debug!("Resume ignored: no countdown running");
            return;
        }

        let now = self.clock.now_millis();
        if self.state.resume(now) {
            info!("Countdown resumed with {}ms remaining", self.state.remaining_millis());
            self.screen.start.enabled = false;
            self.record_action("resume");
        }
        self.screen.set_pause_label(self.settings.locale, false);
        self.render();
    }

    pub fn toggle_pause(&mut self) {
        if self.state.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Cancel everything and return to the idle baseline
    pub fn reset(&mut self) {
        self.cancel_pending_tick();
        self.state.clear();

        self.screen.display.clear();
        self.screen.show_idle_controls();
        self.screen.set_pause_label(self.settings.locale, false);
        self.record_action("reset");
        info!("Countdown reset");
        self.render();
    }

    /// Export what must survive a screen rebuild
    pub fn save_state(&self) -> SavedState {
        SavedState {
            remaining_millis: self.state.remaining_millis(),
            is_paused: self.state.is_paused(),
            is_running: self.state.is_running(),
            display_text: self.screen.display.clone(),
        }
    }

    /// Re-enter a saved countdown.
    ///
    /// Time spent while the screen was torn down is not charged: the elapsed
    /// delta restarts from now.
    pub fn restore_state(&mut self, saved: SavedState) {
        self.cancel_pending_tick();
        self.screen.display = saved.display_text.clone();

        if saved.should_resume() {
            let now = self.clock.now_millis();
            self.state
                .resume_from_saved(saved.remaining_millis, saved.is_paused, now);

            self.screen.show_countdown_controls();
            self.screen.start.enabled = saved.is_paused;
            self.screen.set_pause_label(self.settings.locale, saved.is_paused);
            info!(
                "Restored countdown with {}ms remaining (paused={})",
                saved.remaining_millis, saved.is_paused
            );
            self.schedule_tick(Duration::ZERO);
        } else {
            self.state.clear();
            self.screen.show_idle_controls();
            self.screen.set_pause_label(self.settings.locale, false);
            debug!("Restored idle screen");
        }

        self.record_action("restore");
        self.render();
    }

    /// Tear the screen down and bring it back up around `view`, carrying the
    /// countdown over through `save_state`/`restore_state`
    pub fn rebuild<W: View>(mut self, view: W) -> TimerController<C, S, W, N> {
        let saved = self.save_state();
        self.cancel_pending_tick();
        let input = std::mem::take(&mut self.screen.input);

        let mut rebuilt =
            TimerController::new(self.clock, self.scheduler, view, self.notifier, self.settings);
        rebuilt.screen.input = input;
        rebuilt.start_time = self.start_time;
        rebuilt.restore_state(saved);
        rebuilt
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending_tick
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Resolve a message in the configured locale
    pub fn text(&self, id: MessageId) -> &'static str {
        self.settings.locale.text(id)
    }

    /// Time since the controller was created, as a short human string
    pub fn uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Last state-changing action and when it happened
    pub fn last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        (self.last_action.map(str::to_string), self.last_action_time)
    }

    fn finish(&mut self) {
        info!("Countdown finished");
        self.screen.display = self.text(MessageId::Finished).to_string();
        self.screen.show_idle_controls();
        self.screen.set_pause_label(self.settings.locale, false);
        self.record_action("finish");

        // Messages may share the display's line, so the final frame goes last
        let text = self.text(MessageId::TimesUp);
        self.notifier.show_transient_message(text);
        self.notifier.vibrate(self.settings.vibration);
        self.render();
    }

    fn schedule_tick(&mut self, delay: Duration) {
        self.cancel_pending_tick();
        self.pending_tick = Some(self.scheduler.post_delayed(delay));
    }

    fn cancel_pending_tick(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn record_action(&mut self, action: &'static str) {
        self.last_action = Some(action);
        self.last_action_time = Some(Utc::now());
    }

    fn render(&mut self) {
        self.view.render(&self.screen);
    }

    /// Draw the current screen again, e.g. after other output scrolled it away
    pub fn redraw(&mut self) {
        self.render();
    }
}

/// Format an elapsed duration as `1h 2m 3s`, `2m 3s` or `3s`
pub fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
