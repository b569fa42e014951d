use std::{
    io::{self, stdin, stdout, Write},
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use golboard::{SimHandle, Snapshot};
use log::error;
use termion::{clear, cursor, event::Key, input::TermRead, raw::IntoRawMode};

pub struct View {
    thread: JoinHandle<()>,
}

impl View {
    pub fn spawn(handle: SimHandle, density: f64) -> Self {
        let thread = thread::spawn(move || {
            if let Err(err) = view_loop(&handle, density) {
                error!("terminal error: {err}");
                handle.stop();
            }
        });
        Self { thread }
    }

    pub fn join(self) {
        if self.thread.join().is_err() {
            error!("view thread panicked");
        }
    }
}

#[derive(Debug)]
pub enum InputCmd {
    Exit,
    TogglePause,
    Step,
    Accelerate,
    Decelerate,
    Reseed,
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let command = match key {
            Ok(Key::Char('q') | Key::Esc | Key::Ctrl('c')) => InputCmd::Exit,
            Ok(Key::Char(' ')) => InputCmd::TogglePause,
            Ok(Key::Char('n')) => InputCmd::Step,
            Ok(Key::Char('+' | '=')) => InputCmd::Accelerate,
            Ok(Key::Char('-')) => InputCmd::Decelerate,
            Ok(Key::Char('r')) => InputCmd::Reseed,
            Ok(_) => continue,
            Err(err) => {
                error!("reading input: {err}");
                InputCmd::Exit
            }
        };

        if sender.send(command).is_err() {
            break;
        }
    }
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(50);

fn view_loop(handle: &SimHandle, density: f64) -> io::Result<()> {
    let mut stdout = stdout().into_raw_mode()?;
    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));

    write!(stdout, "{}", cursor::Hide)?;
    while handle_inputs(&receiver, handle, density) {
        let Some(snapshot) = handle.snapshot() else {
            break;
        };
        display_snapshot(&mut stdout, &snapshot)?;
        thread::sleep(VIEW_REFRESH_INTERVAL);
    }
    write!(stdout, "{}{}{}", clear::All, cursor::Goto(1, 1), cursor::Show)?;
    stdout.flush()
}

/// returns false when the user asked to leave.
fn handle_inputs(receiver: &mpsc::Receiver<InputCmd>, handle: &SimHandle, density: f64) -> bool {
    while let Ok(cmd) = receiver.try_recv() {
        match cmd {
            InputCmd::Exit => {
                handle.stop();
                return false;
            }
            InputCmd::TogglePause => handle.toggle_pause(),
            InputCmd::Step => handle.step(1),
            InputCmd::Accelerate => handle.accelerate(),
            InputCmd::Decelerate => handle.decelerate(),
            InputCmd::Reseed => handle.randomize(density),
        };
    }
    true
}

fn display_snapshot(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    let (width, height) = termion::terminal_size()?;
    let visible_rows = height.saturating_sub(1) as usize;

    let mut result = format!("{}", clear::All);
    for (index, line) in snapshot.board.lines().take(visible_rows).enumerate() {
        let goto = cursor::Goto(1, index as u16 + 1);
        let line: String = line
            .chars()
            .take(width as usize)
            .map(|c| if c == 'X' { '#' } else { ' ' })
            .collect();
        result += &format!("{goto}{line}");
    }

    let state = match (snapshot.paused, snapshot.cycle) {
        (true, _) => "paused".to_string(),
        (false, Some(cycle)) if cycle.is_still() => format!("stable since {}", cycle.start),
        (false, Some(cycle)) => format!("period {}", cycle.period),
        (false, None) => "running".to_string(),
    };
    let status = format!(
        "gen {} | pop {} | {}ms | {state} | q quit, space pause, n step, +/- speed, r reseed",
        snapshot.generation,
        snapshot.population,
        snapshot.tick.as_millis(),
    );
    let status: String = status.chars().take(width as usize).collect();
    result += &format!("{}{status}", cursor::Goto(1, height));

    write!(out, "{result}")?;
    out.flush()
}
