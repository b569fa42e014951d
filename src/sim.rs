use std::{
    sync::mpsc::{self, TryRecvError},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{error, info, warn};
use rand::Rng;

use crate::{
    config::{MAX_TICK, MIN_TICK},
    Board,
};

pub use cycle::{Cycle, CycleDetector};
mod cycle;

/// The board as seen by a client at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub population: usize,
    pub board: String,
    pub paused: bool,
    pub tick: Duration,
    pub cycle: Option<Cycle>,
}

struct State<R> {
    board: Board<R>,
    generation: u64,
    paused: bool,
    tick: Duration,
    detector: CycleDetector,
}

impl<R> State<R>
where
    R: Rng,
{
    fn new(board: Board<R>, tick: Duration, paused: bool) -> Self {
        let mut state = Self {
            board,
            generation: 0,
            paused,
            tick: tick.clamp(MIN_TICK, MAX_TICK),
            detector: CycleDetector::default(),
        };
        state.observe();
        state
    }

    fn observe(&mut self) {
        let fingerprint = self.board.fingerprint();
        if let Some(cycle) = self.detector.observe(self.generation, fingerprint) {
            if self.board.population() == 0 {
                info!("extinct since generation {}", cycle.start);
            } else if cycle.is_still() {
                info!("still life since generation {}", cycle.start);
            } else {
                info!(
                    "period {} oscillation since generation {}",
                    cycle.period, cycle.start
                );
            }
        }
    }

    fn step(&mut self) {
        self.board.advance();
        self.generation += 1;
        self.observe();
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            population: self.board.population(),
            board: self.board.render(),
            paused: self.paused,
            tick: self.tick,
            cycle: self.detector.cycle(),
        }
    }

    /// applies a command, returns false once the simulation must stop.
    fn apply(&mut self, cmd: SimCmd) -> bool {
        match cmd {
            SimCmd::Snapshot(sender) => {
                if sender.send(self.snapshot()).is_err() {
                    warn!("snapshot requester went away");
                }
            }
            SimCmd::Step(count) => (0..count).for_each(|_| self.step()),
            SimCmd::TogglePause => self.paused = !self.paused,
            SimCmd::Accelerate => self.tick = (self.tick / 2).max(MIN_TICK),
            SimCmd::Decelerate => self.tick = (self.tick * 2).min(MAX_TICK),
            SimCmd::Randomize(density) => match self.board.randomize(density) {
                Ok(()) => {
                    self.generation = 0;
                    self.detector.forget();
                    self.observe();
                }
                Err(err) => warn!("ignoring randomize: {err}"),
            },
            SimCmd::Stop => return false,
        }
        true
    }
}

pub enum SimCmd {
    Snapshot(mpsc::Sender<Snapshot>),
    Step(u64),
    TogglePause,
    Accelerate,
    Decelerate,
    Randomize(f64),
    Stop,
}

#[derive(Debug, Clone)]
pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    pub fn new(sender: mpsc::Sender<SimCmd>) -> Self {
        Self { sender }
    }

    fn send(&self, cmd: SimCmd) -> bool {
        let sent = self.sender.send(cmd).is_ok();
        if !sent {
            warn!("simulation stopped, command dropped");
        }
        sent
    }

    /// None once the simulation has stopped.
    pub fn snapshot(&self) -> Option<Snapshot> {
        let (sender, receiver) = mpsc::channel();
        if !self.send(SimCmd::Snapshot(sender)) {
            return None;
        }
        receiver.recv().ok()
    }

    pub fn step(&self, count: u64) -> bool {
        self.send(SimCmd::Step(count))
    }

    pub fn toggle_pause(&self) -> bool {
        self.send(SimCmd::TogglePause)
    }

    pub fn accelerate(&self) -> bool {
        self.send(SimCmd::Accelerate)
    }

    pub fn decelerate(&self) -> bool {
        self.send(SimCmd::Decelerate)
    }

    pub fn randomize(&self, density: f64) -> bool {
        self.send(SimCmd::Randomize(density))
    }

    pub fn stop(&self) -> bool {
        self.send(SimCmd::Stop)
    }
}

/// Runs a board on its own thread, one generation per tick.
#[derive(Debug)]
pub struct Sim {
    thread: JoinHandle<()>,
    sender: mpsc::Sender<SimCmd>,
}

impl Sim {
    pub fn spawn<R>(board: Board<R>, tick: Duration) -> Self
    where
        R: Rng + Send + 'static,
    {
        Self::start(State::new(board, tick, false))
    }

    /// spawns without ticking, generations only advance on `SimHandle::step`.
    pub fn spawn_paused<R>(board: Board<R>, tick: Duration) -> Self
    where
        R: Rng + Send + 'static,
    {
        Self::start(State::new(board, tick, true))
    }

    fn start<R>(state: State<R>) -> Self
    where
        R: Rng + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, state));
        Self { sender, thread }
    }

    pub fn handle(&self) -> SimHandle {
        SimHandle::new(self.sender.clone())
    }

    pub fn join(self) {
        if self.thread.join().is_err() {
            error!("simulation thread panicked");
        }
    }

    pub fn stop(self) {
        self.handle().stop();
        self.join()
    }
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(5);

fn sim_loop<R>(receiver: mpsc::Receiver<SimCmd>, state: State<R>)
where
    R: Rng,
{
    let mut state = state;
    let mut last_update = Instant::now();

    loop {
        loop {
            match receiver.try_recv() {
                Ok(cmd) => {
                    if !state.apply(cmd) {
                        return;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return,
            }
        }

        if !state.paused && last_update.elapsed() >= state.tick {
            state.step();
            last_update = Instant::now();
        }

        thread::sleep(EVT_CHECK_TIMEOUT);
    }
}
