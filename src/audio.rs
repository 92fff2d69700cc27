//! Procedural sound cues over WebAudio. No audio assets: every cue is a
//! couple of oscillator envelopes scheduled on the audio clock.
//!
//! Sound is cosmetic. Context construction or resume failures are swallowed
//! and simply leave the game silent; they never touch scoring or scheduling.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

const SETTINGS_KEY: &str = "pf_sfx_settings";

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct SfxSettings {
    muted: bool,
}

/// Owns the lazily created `AudioContext` and the mute preference. One
/// instance lives for the whole game section and is disposed with it.
pub struct Sfx {
    ctx: RefCell<Option<AudioContext>>,
    muted: Cell<bool>,
}

impl Sfx {
    pub fn new() -> Self {
        let settings = load_settings();
        Self {
            ctx: RefCell::new(None),
            muted: Cell::new(settings.muted),
        }
    }

    /// Creates and resumes the audio context. Must be called from a
    /// user-initiated event handler (the start button); browsers refuse
    /// autonomous audio initialization.
    pub fn prime(&self) {
        let mut ctx = self.ctx.borrow_mut();
        if ctx.is_none() {
            *ctx = AudioContext::new().ok();
        }
        if let Some(c) = ctx.as_ref() {
            if c.state() == AudioContextState::Suspended {
                let _ = c.resume();
            }
        }
    }

    pub fn muted(&self) -> bool {
        self.muted.get()
    }

    pub fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
        save_settings(SfxSettings { muted });
    }

    /// Ascending two-note tick.
    pub fn hit(&self) {
        let _ = self.tone_at(0.0, 380.0, 0.07, OscillatorType::Square, 0.06);
        let _ = self.tone_at(0.06, 540.0, 0.07, OscillatorType::Triangle, 0.05);
    }

    /// Descending buzz: one tone sweeping 220 Hz down to 90 Hz.
    pub fn miss(&self) {
        let _ = self.sweep();
    }

    /// Short ascending arpeggio.
    pub fn win(&self) {
        for (i, freq) in [440.0, 554.0, 659.0, 880.0].into_iter().enumerate() {
            let _ = self.tone_at(i as f64 * 0.11, freq, 0.11, OscillatorType::Sine, 0.07);
        }
    }

    /// One tone at `offset_s` seconds from now: fast linear fade-in then an
    /// exponential fade-out ending at the requested duration, so the tone
    /// boundaries never click.
    fn tone_at(
        &self,
        offset_s: f64,
        freq: f32,
        dur_s: f64,
        wave: OscillatorType,
        gain: f32,
    ) -> Result<(), JsValue> {
        if self.muted.get() {
            return Ok(());
        }
        let ctx = self.ctx.borrow();
        let Some(ctx) = ctx.as_ref() else {
            return Ok(());
        };
        let osc = ctx.create_oscillator()?;
        let env = ctx.create_gain()?;
        osc.set_type(wave);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&env)?;
        env.connect_with_audio_node(&ctx.destination())?;

        let t0 = ctx.current_time() + offset_s;
        env.gain().set_value_at_time(0.0, t0)?;
        env.gain().linear_ramp_to_value_at_time(gain, t0 + 0.01)?;
        env.gain().exponential_ramp_to_value_at_time(0.0001, t0 + dur_s)?;

        osc.start_with_when(t0)?;
        osc.stop_with_when(t0 + dur_s + 0.02)?;
        Ok(())
    }

    fn sweep(&self) -> Result<(), JsValue> {
        if self.muted.get() {
            return Ok(());
        }
        let ctx = self.ctx.borrow();
        let Some(ctx) = ctx.as_ref() else {
            return Ok(());
        };
        let osc = ctx.create_oscillator()?;
        let env = ctx.create_gain()?;
        osc.set_type(OscillatorType::Sine);
        let t0 = ctx.current_time();
        osc.frequency().set_value_at_time(220.0, t0)?;
        osc.frequency()
            .exponential_ramp_to_value_at_time(90.0, t0 + 0.15)?;

        env.gain().set_value_at_time(0.08, t0)?;
        env.gain()
            .exponential_ramp_to_value_at_time(0.0001, t0 + 0.18)?;

        osc.connect_with_audio_node(&env)?;
        env.connect_with_audio_node(&ctx.destination())?;

        osc.start()?;
        osc.stop_with_when(t0 + 0.2)?;
        Ok(())
    }
}

fn load_settings() -> SfxSettings {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|store| store.get_item(SETTINGS_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn save_settings(settings: SfxSettings) {
    if let Some(store) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(raw) = serde_json::to_string(&settings) {
            let _ = store.set_item(SETTINGS_KEY, &raw);
        }
    }
}
