use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use textool::app::{App, AppEvent, AppMode, Reply};
use textool::repl::{command_to_app_event, parse_repl_input};
use textool::watcher::ClipboardWatcher;

fn main() {
    let (sender, receiver) = mpsc::channel::<AppEvent>();

    // Stdin lines become events on the same channel the clipboard watcher
    // uses, so this thread stays the only terminal writer.
    let stdin_sender = sender.clone();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            let event = command_to_app_event(parse_repl_input(&line));
            if stdin_sender.send(event).is_err() {
                break;
            }
        }
        // EOF on stdin quits like :q.
        let _ = stdin_sender.send(AppEvent::Quit);
    });

    let mut app = App::new();
    let mut watcher: Option<ClipboardWatcher> = None;

    println!("textool, a clipboard text cleaner (:h for help)");
    print_prompt();

    while let Ok(event) = receiver.recv() {
        let reply = app.handle_event(event);
        print_reply(&reply);

        // Reconcile the watcher thread with the app's watch flag.
        if app.watching && watcher.is_none() {
            watcher = Some(ClipboardWatcher::spawn(sender.clone()));
        } else if !app.watching {
            if let Some(mut stale) = watcher.take() {
                stale.stop();
            }
        }

        if app.mode == AppMode::Quit {
            break;
        }
        print_prompt();
    }

    if let Some(mut stale) = watcher.take() {
        stale.stop();
    }
}

fn print_reply(reply: &Reply) {
    for section in &reply.sections {
        println!("--- {} ---", section.label);
        println!("{}", section.body);
    }
    if let Some(status) = &reply.status {
        println!("{status}");
    }
    if let Some(warning) = &reply.warning {
        eprintln!("warning: {warning}");
    }
}

fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
