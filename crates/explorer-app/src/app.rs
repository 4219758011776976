//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: creates the window and shell surface, routes focus changes
//! to the lifecycle bridge, routes back/refresh input, and drains shell
//! events into the load-state reducer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use explorer_config::{ExplorerConfig, PRODUCT_TOKEN};
use explorer_webview::ipc::{KIND_PAGE_READY, KIND_REFRESH, KIND_RETRY};
use explorer_webview::{
    is_shell_internal, BrowserSurface, IpcMessage, LoadEvent, LoadState, ShellEvent, ShellView,
    SurfaceConfig,
};

use crate::lifecycle::{BackDecision, LifecycleBridge};

/// How often the event loop wakes to drain pending shell events.
const EVENT_PUMP_INTERVAL: Duration = Duration::from_millis(50);

/// Top-level application state.
pub struct ShellApp {
    config: ExplorerConfig,

    // Windowing
    window: Option<Arc<Window>>,
    shell: Option<ShellView>,

    // Host lifecycle mirroring
    lifecycle: LifecycleBridge,

    // Load-cycle state
    load_state: LoadState,
    /// Whether the current load's document posted its ready beacon.
    page_ready: bool,

    // Indicator state
    progress_visible: bool,
    refreshing: bool,

    // Modifier tracking (winit sends these separately)
    modifiers: winit::keyboard::ModifiersState,
}

impl ShellApp {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            window: None,
            shell: None,
            lifecycle: LifecycleBridge::new(),
            load_state: LoadState::Loading,
            page_ready: false,
            progress_visible: true,
            refreshing: false,
            modifiers: winit::keyboard::ModifiersState::empty(),
        }
    }
}

impl ApplicationHandler for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let bounds = window_rect(window.inner_size());
        let surface_config = SurfaceConfig::new(self.config.backend.origin.clone(), PRODUCT_TOKEN);

        match ShellView::create(window.as_ref(), bounds, surface_config) {
            Ok(shell) => self.shell = Some(shell),
            Err(e) => {
                tracing::error!("failed to create shell WebView: {e}");
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.update_window_title();
        tracing::info!(
            origin = %self.config.backend.origin,
            "window created, initial load issued"
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref shell) = self.shell {
                        shell.set_bounds(window_rect(size));
                    }
                }
            }

            WindowEvent::Focused(focused) => {
                if let Some(ref mut shell) = self.shell {
                    self.lifecycle.set_foregrounded(shell, focused);
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event_loop, event);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Back,
                ..
            } => {
                self.handle_back(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let events = match self.shell.as_mut() {
            Some(shell) => shell.pump_events(),
            None => return,
        };
        for event in events {
            self.apply_event(event);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + EVENT_PUMP_INTERVAL));
    }
}

impl ShellApp {
    /// Route a key press: back navigation and refresh are the only two
    /// native key bindings the shell owns; everything else stays with the page.
    fn handle_keyboard_input(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        match &logical_key {
            Key::Named(NamedKey::BrowserBack) => self.handle_back(event_loop),
            Key::Named(NamedKey::ArrowLeft) if self.modifiers.alt_key() => {
                self.handle_back(event_loop)
            }
            Key::Named(NamedKey::F5) => self.refresh(),
            Key::Character(c) if c.as_str() == "r" && self.modifiers.control_key() => {
                self.refresh()
            }
            _ => {}
        }
    }

    /// A host back request: step in-surface history, or exit the shell.
    fn handle_back(&mut self, event_loop: &ActiveEventLoop) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        match LifecycleBridge::back_request(shell) {
            BackDecision::Consumed => {
                tracing::debug!("back request consumed by in-surface history");
            }
            BackDecision::Forwarded => {
                tracing::info!("back request with no history: exiting shell");
                event_loop.exit();
            }
        }
    }

    /// The refresh gesture: reload the currently displayed page.
    fn refresh(&mut self) {
        let Some(shell) = self.shell.as_ref() else {
            return;
        };
        self.refreshing = true;
        shell.reload();
        self.update_window_title();
    }

    fn apply_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::LoadStarted { url } => {
                tracing::debug!(url = %url, "load started");
                self.page_ready = false;
                self.transition(LoadEvent::Started);
            }

            ShellEvent::LoadFinished { url } => {
                let outcome = load_outcome(&url, self.page_ready);
                if outcome == LoadEvent::Failed {
                    tracing::warn!(url = %url, "load finished without a ready document, treating as failure");
                } else {
                    tracing::debug!(url = %url, "load finished");
                }
                self.transition(outcome);
            }

            ShellEvent::NavigationDelegated { url } => {
                tracing::info!(url = %url, "link opened in system browser");
            }

            ShellEvent::Ipc { body } => self.handle_ipc(&body),
        }
    }

    fn handle_ipc(&mut self, body: &str) {
        let Some(message) = IpcMessage::from_json(body) else {
            return;
        };
        match ipc_command(&message.kind) {
            IpcCommand::PageReady => {
                self.page_ready = true;
            }
            IpcCommand::Retry => {
                let origin = self.config.backend.origin.clone();
                tracing::info!(origin = %origin, "retry requested from offline page");
                if let Some(ref mut shell) = self.shell {
                    retry(shell, &origin);
                }
            }
            IpcCommand::Refresh => {
                tracing::debug!("pull-to-refresh gesture");
                self.refresh();
            }
            IpcCommand::Ignore => {
                tracing::debug!(kind = %message.kind, "ignoring unknown IPC message");
            }
        }
    }

    /// Run the load-state reducer and apply its visible effects.
    fn transition(&mut self, event: LoadEvent) {
        let (next, effects) = self.load_state.apply(event);
        self.load_state = next;

        self.progress_visible = effects.progress_visible;
        if effects.clear_refresh {
            self.refreshing = false;
        }
        if effects.show_fallback {
            if let Some(ref mut shell) = self.shell {
                shell.show_fallback();
            }
        }
        self.update_window_title();
    }

    /// Reflect the indicator state in the window title.
    fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&window_title(
            &self.config.window.title,
            self.progress_visible,
            self.refreshing,
        ));
    }
}

/// What an IPC message from the page asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IpcCommand {
    PageReady,
    Retry,
    Refresh,
    Ignore,
}

fn ipc_command(kind: &str) -> IpcCommand {
    match kind {
        KIND_PAGE_READY => IpcCommand::PageReady,
        KIND_RETRY => IpcCommand::Retry,
        KIND_REFRESH => IpcCommand::Refresh,
        _ => IpcCommand::Ignore,
    }
}

/// Classify a finished load. The engine reports "finished" for its own
/// error pages too, so a real document that never posted its ready beacon
/// did not actually load. The shell's own synthetic documents carry no
/// beacon and always count as rendered, or displaying the offline page
/// would itself be classified as another failure.
fn load_outcome(url: &str, page_ready: bool) -> LoadEvent {
    if page_ready || is_shell_internal(url) {
        LoadEvent::Finished
    } else {
        LoadEvent::Failed
    }
}

/// Retry from the offline page: always re-issues the configured origin,
/// never the URL that failed.
fn retry(surface: &mut dyn BrowserSurface, origin: &str) {
    surface.load(origin);
}

/// Format the window title for the current indicator state.
fn window_title(base: &str, progress_visible: bool, refreshing: bool) -> String {
    if refreshing {
        format!("{base} — refreshing")
    } else if progress_visible {
        format!("{base} — loading")
    } else {
        base.to_string()
    }
}

/// The surface always fills the whole window.
fn window_rect(size: winit::dpi::PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}
