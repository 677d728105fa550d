use std::time::Duration;
use winit::event::{ElementState, Event, WindowEvent};
use winit::keyboard::Key;
use winit::platform::pump_events::EventLoopExtPumpEvents;

pub struct Window {
    pub window: winit::window::Window,
}

impl Window {
    pub fn new(window: winit::window::Window) -> Self {
        Self { window }
    }
}

pub struct EventLoop {
    event_loop: winit::event_loop::EventLoop<()>,
    queue: Vec<InputEvent>,
}

impl EventLoop {
    pub fn new(event_loop: winit::event_loop::EventLoop<()>) -> Self {
        Self {
            event_loop,
            queue: Vec::new(),
        }
    }

    pub fn poll(&mut self) -> Vec<InputEvent> {
        let Self { event_loop, queue } = self;
        let _ = event_loop.pump_events(Some(Duration::ZERO), |event, _| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };
            match event {
                WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                    queue.push(InputEvent::WindowClose);
                }

                WindowEvent::Resized(size) => {
                    queue.push(InputEvent::WindowResize {
                        width: size.width,
                        height: size.height,
                    });
                }

                WindowEvent::CursorMoved { position, .. } => {
                    queue.push(InputEvent::MouseMove {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }

                WindowEvent::MouseInput { state, button, .. } => {
                    let mouse_button = match button {
                        winit::event::MouseButton::Left => MouseButton::Left,
                        winit::event::MouseButton::Right => MouseButton::Right,
                        winit::event::MouseButton::Middle => MouseButton::Middle,
                        winit::event::MouseButton::Back => MouseButton::Button(3),
                        winit::event::MouseButton::Forward => MouseButton::Button(4),
                        winit::event::MouseButton::Other(n) => MouseButton::Button(n as u8),
                    };
                    let press_state = match state {
                        ElementState::Pressed => PressState::Down,
                        ElementState::Released => PressState::Up,
                    };
                    queue.push(InputEvent::MouseClick {
                        mouse_button,
                        press_state,
                    });
                }

                WindowEvent::KeyboardInput { event, .. } => {
                    let Key::Character(text) = event.logical_key.as_ref() else {
                        return;
                    };
                    let Some(keycode) = text.chars().next() else {
                        return;
                    };
                    let press_state = match (event.state, event.repeat) {
                        (ElementState::Released, _) => PressState::Up,
                        (ElementState::Pressed, false) => PressState::Down,
                        (ElementState::Pressed, true) => PressState::DownRepeat,
                    };
                    queue.push(InputEvent::KeyboardInput {
                        keycode,
                        press_state,
                    });
                }

                _ => {}
            }
        });

        std::mem::take(queue)
    }
}

#[derive(Debug, Copy, Clone)]
pub enum PressState {
    Up,
    Down,
    DownRepeat,
}

#[derive(Debug, Copy, Clone)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Button(u8),
}

#[derive(Debug, Copy, Clone)]
pub enum InputEvent {
    KeyboardInput {
        keycode: char,
        press_state: PressState,
    },
    MouseMove {
        x: f32,
        y: f32,
    },
    MouseClick {
        mouse_button: MouseButton,
        press_state: PressState,
    },
    WindowResize {
        width: u32,
        height: u32,
    },
    WindowClose,
}
