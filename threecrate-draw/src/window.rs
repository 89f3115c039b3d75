//! winit-backed window
//!
//! The window shows the session status in its title bar and turns key
//! presses into [`UiEvent`]s. Drawing pixels is left to a rendering engine
//! layered on top.
//!
//! Key bindings:
//! - `1`..`9`: toolbar actions
//! - `F1`..`F12`: menu actions
//! - Left / Right: previous / next time tag
//! - Escape: close

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowBuilder},
};

use crate::action::ActionLayout;
use crate::backend::{RenderBackend, UiEvent};
use crate::error::{DrawError, Result};
use crate::options::WindowOptions;
use crate::session::Session;

const PUMP_INTERVAL: Duration = Duration::from_millis(16);

thread_local! {
    // winit allows one event loop per process, so it outlives each window
    static EVENT_LOOP: RefCell<Option<EventLoop<()>>> = const { RefCell::new(None) };
}

/// What the keyboard can currently address
#[derive(Debug, Clone, Default)]
struct KeyBindings {
    toolbar_len: usize,
    menu_len: usize,
    time_tags: Vec<f64>,
    current_time: Option<f64>,
}

impl KeyBindings {
    fn map(&self, key: &Key) -> Option<UiEvent> {
        match key {
            Key::Named(NamedKey::Escape) => Some(UiEvent::Close),
            Key::Named(NamedKey::ArrowRight) => self.step_time(true),
            Key::Named(NamedKey::ArrowLeft) => self.step_time(false),
            Key::Named(named) => {
                let index = function_key_index(named)?;
                (index < self.menu_len).then(|| UiEvent::menu(index))
            }
            Key::Character(c) => {
                let digit = c.as_str().parse::<usize>().ok().filter(|d| (1..=9).contains(d))?;
                (digit - 1 < self.toolbar_len).then(|| UiEvent::toolbar(digit - 1))
            }
            _ => None,
        }
    }

    fn step_time(&self, forward: bool) -> Option<UiEvent> {
        let position = self
            .current_time
            .and_then(|t| self.time_tags.iter().position(|&tag| tag == t));
        let next = match (position, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(self.time_tags.len().saturating_sub(1)),
            (Some(i), false) => i.saturating_sub(1),
        };
        self.time_tags.get(next).copied().map(UiEvent::SetTime)
    }
}

fn function_key_index(key: &NamedKey) -> Option<usize> {
    const KEYS: [NamedKey; 12] = [
        NamedKey::F1,
        NamedKey::F2,
        NamedKey::F3,
        NamedKey::F4,
        NamedKey::F5,
        NamedKey::F6,
        NamedKey::F7,
        NamedKey::F8,
        NamedKey::F9,
        NamedKey::F10,
        NamedKey::F11,
        NamedKey::F12,
    ];
    KEYS.iter().position(|k| k == key)
}

/// Native window backend
#[derive(Default)]
pub struct WindowBackend {
    event_loop: Option<EventLoop<()>>,
    window: Option<Window>,
    pending: VecDeque<UiEvent>,
    bindings: KeyBindings,
    title: String,
}

impl WindowBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_event_loop() -> Result<EventLoop<()>> {
        match EVENT_LOOP.with(|slot| slot.borrow_mut().take()) {
            Some(event_loop) => Ok(event_loop),
            None => EventLoop::new()
                .map_err(|e| DrawError::Backend(format!("Failed to create event loop: {}", e))),
        }
    }

    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };
        let bindings = &self.bindings;
        let pending = &mut self.pending;
        let status = event_loop.pump_events(Some(PUMP_INTERVAL), |event, _target| {
            if let Event::WindowEvent { event, .. } = event {
                match event {
                    WindowEvent::CloseRequested => pending.push_back(UiEvent::Close),
                    WindowEvent::KeyboardInput { event, .. }
                        if event.state == ElementState::Pressed && !event.repeat =>
                    {
                        if let Some(ui_event) = bindings.map(&event.logical_key) {
                            pending.push_back(ui_event);
                        }
                    }
                    _ => {}
                }
            }
        });
        if let PumpStatus::Exit(code) = status {
            debug!(code, "event loop exited");
            self.pending.push_back(UiEvent::Close);
        }
    }
}

impl RenderBackend for WindowBackend {
    fn open(&mut self, options: &WindowOptions, layout: &ActionLayout) -> Result<()> {
        let event_loop = Self::take_event_loop()?;
        let window = WindowBuilder::new()
            .with_title(&options.title)
            .with_inner_size(LogicalSize::new(options.width as f64, options.height as f64))
            .build(&event_loop)
            .map_err(|e| DrawError::Backend(format!("Failed to create window: {}", e)))?;

        info!(
            width = options.width,
            height = options.height,
            bg_color = ?options.bg_color,
            show_skybox = options.show_skybox,
            "window opened"
        );
        for (i, label) in layout.toolbar.iter().enumerate().take(9) {
            info!("  {}: {}", i + 1, label);
        }
        for (i, label) in layout.menu.iter().enumerate().take(12) {
            info!("  F{}: {}", i + 1, label);
        }

        self.bindings = KeyBindings {
            toolbar_len: layout.toolbar.len(),
            menu_len: layout.menu.len(),
            ..KeyBindings::default()
        };
        self.title = options.title.clone();
        self.pending.clear();
        self.event_loop = Some(event_loop);
        self.window = Some(window);
        Ok(())
    }

    fn refresh(&mut self, session: &Session) -> Result<()> {
        let scene = session.scene();
        self.bindings.time_tags = scene.time_tags();
        self.bindings.current_time = session.current_time();

        if let Some(window) = &self.window {
            let mut status = format!(
                "{} | {}/{} visible",
                self.title,
                scene.visible_names().len(),
                scene.len()
            );
            if let Some(time) = session.current_time() {
                status.push_str(&format!(" | t={}", time));
            }
            window.set_title(&status);
            window.request_redraw();
        }
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<UiEvent>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            if self.window.is_none() {
                return Ok(None);
            }
            self.pump();
        }
    }

    fn close(&mut self) {
        self.window = None;
        if let Some(mut event_loop) = self.event_loop.take() {
            // Let winit process the window teardown before parking the loop
            let _ = event_loop.pump_events(Some(Duration::ZERO), |_, _| {});
            EVENT_LOOP.with(|slot| *slot.borrow_mut() = Some(event_loop));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> KeyBindings {
        KeyBindings {
            toolbar_len: 3,
            menu_len: 2,
            time_tags: vec![0.0, 1.0, 2.0],
            current_time: Some(1.0),
        }
    }

    #[test]
    fn test_digit_keys_map_to_toolbar() {
        let b = bindings();
        assert_eq!(b.map(&Key::Character("1".into())), Some(UiEvent::toolbar(0)));
        assert_eq!(b.map(&Key::Character("3".into())), Some(UiEvent::toolbar(2)));
        assert_eq!(b.map(&Key::Character("4".into())), None);
        assert_eq!(b.map(&Key::Character("0".into())), None);
    }

    #[test]
    fn test_function_keys_map_to_menu() {
        let b = bindings();
        assert_eq!(b.map(&Key::Named(NamedKey::F2)), Some(UiEvent::menu(1)));
        assert_eq!(b.map(&Key::Named(NamedKey::F3)), None);
    }

    #[test]
    fn test_arrows_step_time() {
        let mut b = bindings();
        assert_eq!(b.map(&Key::Named(NamedKey::ArrowRight)), Some(UiEvent::SetTime(2.0)));
        assert_eq!(b.map(&Key::Named(NamedKey::ArrowLeft)), Some(UiEvent::SetTime(0.0)));
        b.current_time = Some(2.0);
        assert_eq!(b.map(&Key::Named(NamedKey::ArrowRight)), Some(UiEvent::SetTime(2.0)));
        b.time_tags.clear();
        assert_eq!(b.map(&Key::Named(NamedKey::ArrowRight)), None);
    }
}
