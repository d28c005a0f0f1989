//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use multichart_common::AppState;

use super::core::MultichartApp;
use super::placement::GeometryChange;
use super::types::READINESS_POLL_INTERVAL;

impl ApplicationHandler for MultichartApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.session.state() != AppState::Starting {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.observe_window_bounds(GeometryChange::Resized);
                    self.sync_pane_bounds();
                }
            }

            WindowEvent::Moved(_) => {
                self.observe_window_bounds(GeometryChange::Moved);
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_pane_bounds();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.state() != AppState::Ready {
            return;
        }

        let waiting = self.poll_pane_readiness();
        self.poll_webview_events();

        if waiting {
            event_loop.set_control_flow(ControlFlow::WaitUntil(
                Instant::now() + READINESS_POLL_INTERVAL,
            ));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}
