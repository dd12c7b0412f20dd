//! Builds a small window with the DSL, styles it and prints the result.
//!
//! Run with `cargo run --example hello`. Pass a path to write debug logs.

use swinky::builders::{border_pane, button, combo_box, label, panel, split_pane, text_field};
use swinky::log::LevelFilter;
use swinky::types::{Border, Color};
use swinky::{Frame, Stylesheet, UiDispatcher};

fn build(frame: &Frame) {
    panel(&frame.content_pane(), |p| {
        p.add_class("super-panel");
        label(p, |l| l.set_text("Hello, DSL!"));

        panel(p, |p| {
            label(p, |l| l.set_text("This is a nested panel."));
            border_pane(p, |pane| {
                pane.set_north(Some(&label(pane, |l| l.set_text("North"))));
                pane.set_center(Some(&panel(pane, |c| {
                    button(c, |b| {
                        b.set_text("Click Me");
                        b.on_action(|_| println!("Button clicked!"));
                    });
                })));
            });
            split_pane(p, |s| {
                s.set_left(Some(&label(s, |l| l.set_text("Left"))));
                s.set_right(Some(&label(s, |l| l.set_text("Right"))));
            });
        });

        button(p, |b| {
            b.set_text("OK");
            b.on_action(|_| println!("OK clicked!"));
            b.add_class("green");
        });
        label(p, |l| {
            l.set_text("Enter your name:");
            l.add_class("red");
        });
        text_field(p, |t| {
            t.set_columns(20);
            t.set_text("John Doe");
        });
        combo_box(p, |c| {
            for i in 1..=5 {
                c.add_item(format!("Item {i}"));
            }
        });
    });
}

fn styles() -> swinky::Result<Stylesheet> {
    let mut sheet = Stylesheet::new();
    sheet.register_all::<swinky::Button>(|b| b.set_font_size(20.0));
    sheet.button(".green", |b| {
        b.set_foreground(Color::GREEN);
        b.set_font_size(40.0);
    })?;
    sheet.panel(".super-panel", |p| p.set_border(Border::line(Color::RED)))?;
    sheet.label(".super-panel > *", |l| l.set_font_size(30.0))?;
    sheet.label(".red", |l| l.set_foreground(Color::RED))?;
    Ok(sheet)
}

fn main() -> swinky::Result<()> {
    if let Some(path) = std::env::args().nth(1) {
        swinky::init_logger(path, LevelFilter::Trace)?;
    }

    let mut dispatcher = UiDispatcher::new();
    let handle = dispatcher.handle();

    let frame = Frame::new("Swinky DSL Example");
    build(&frame);
    let sheet = styles()?;
    sheet.apply(&frame);

    // Work from other threads reaches the tree through the dispatcher.
    let worker = std::thread::spawn(move || handle.dispatch(|| println!("styles applied")));
    if let Ok(queued) = worker.join() {
        queued?;
    }
    dispatcher.run_pending();

    print!("{}", frame.dump());
    Ok(())
}
