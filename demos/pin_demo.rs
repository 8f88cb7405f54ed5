//! Pin Demo - six-cell verification code in the terminal
//!
//! - Type digits, Backspace, arrows
//! - Paste a code (bracketed paste); `-` and letters are dropped
//! - Esc quits
//!
//! Run with: cargo run --example pin_demo

use std::cell::Cell;
use std::io::{self, stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::signal;
use spark_pin::state::input::{disable_paste, enable_paste, poll_event};
use spark_pin::{pin_input, InlineRenderer, InputEvent, PinInputProps};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    let code = signal(String::new());
    let done = Rc::new(Cell::new(false));

    let pin = pin_input(PinInputProps {
        id: Some("otp".to_string()),
        cell_count: 6,
        value: Some(code.clone()),
        placeholder: Some('_'),
        on_filled: Some(Rc::new({
            let done = done.clone();
            move |_| done.set(true)
        })),
        ..Default::default()
    })
    .map_err(io::Error::other)?;

    println!("Enter the 6-digit code (Esc to quit):");
    let mut out = stdout();
    {
        let _terminal = RawTerminal::enter()?;
        let mut renderer = InlineRenderer::new();
        renderer.render(&mut out, &pin.views())?;

        while !done.get() {
            let Some(event) = poll_event(Duration::from_millis(50))? else {
                continue;
            };
            if let InputEvent::Key(ref key) = event {
                if key.key == "Escape" {
                    break;
                }
            }
            if pin.handle_event(&event) {
                renderer.render(&mut out, &pin.views())?;
            }
        }
    }
    pin.unmount();

    writeln!(out)?;
    if done.get() {
        println!("code: {}", code.get());
    }
    Ok(())
}

/// Raw mode plus bracketed paste, restored on drop (including early `?` returns).
struct RawTerminal;

impl RawTerminal {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        enable_paste()?;
        Ok(guard)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = disable_paste();
        let _ = disable_raw_mode();
    }
}
