#![forbid(unsafe_code)]

//! Elm-style runtime for HTML components.
//!
//! The program runtime manages the update/view loop. It separates state
//! (Model) from rendering (View) and provides a command pattern for follow-up
//! messages.
//!
//! # Execution model
//!
//! Everything runs on the caller's thread. A host event or a sent message is
//! pushed onto a FIFO queue, and the queue is drained before control returns:
//! each message's `update` finishes, and the commands it returned are queued,
//! before the next message is taken. The model is rendered once after the
//! queue is empty if any update changed it. An update that returns
//! [`Cmd::Unchanged`] leaves the current frame in place.
//!
//! # Example
//!
//! ```ignore
//! use picklist_core::Frame;
//! use picklist_runtime::{Cmd, Model};
//! use picklist_widgets::{ListMsg, ListView};
//!
//! struct App {
//!     list: ListView,
//! }
//!
//! impl Model for App {
//!     type Message = ListMsg;
//!
//!     fn update(&mut self, msg: ListMsg) -> Cmd<ListMsg> {
//!         if self.list.update(msg).is_changed() {
//!             Cmd::none()
//!         } else {
//!             Cmd::unchanged()
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame<ListMsg>) {
//!         self.list.view(frame);
//!     }
//! }
//! ```

use std::collections::VecDeque;

use picklist_core::{Event, Frame};
use tracing::{debug, debug_span, info};

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages come from the triggers the model registers in its frame and
    /// from [`Program::send`].
    type Message: 'static;

    /// Initialize the model with startup commands.
    ///
    /// Called once when the program starts, before the first render.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function. Returns commands for any
    /// follow-up work.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    ///
    /// Must not have side effects; rendering the same state twice produces
    /// the same frame.
    fn view(&self, frame: &mut Frame<Self::Message>);
}

/// Commands returned from `init()` and `update()`.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Stop the program. Queued messages are dropped.
    Quit,
    /// Execute multiple commands.
    Batch(Vec<Cmd<M>>),
    /// Execute commands in order.
    Sequence(Vec<Cmd<M>>),
    /// Queue a message for the model.
    Msg(M),
    /// Emit a log line through `tracing`.
    Log(String),
    /// The update left the model's view as it was; no re-render is needed.
    ///
    /// Only meaningful as the whole return value of `update`. Inside a batch
    /// or sequence it is a no-op.
    Unchanged,
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a command reporting that the view did not change.
    #[inline]
    pub fn unchanged() -> Self {
        Self::Unchanged
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a batch of commands.
    pub fn batch(cmds: Vec<Self>) -> Self {
        Self::collapse(cmds, Self::Batch)
    }

    /// Create a sequence of commands.
    pub fn sequence(cmds: Vec<Self>) -> Self {
        Self::collapse(cmds, Self::Sequence)
    }

    fn collapse(mut cmds: Vec<Self>, wrap: fn(Vec<Self>) -> Self) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => wrap(cmds),
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// What happened to a host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event resolved to a message and the model was updated.
    Dispatched,
    /// The event did not hit a registered target, or was not an activation.
    Ignored,
    /// The program has quit.
    Stopped,
}

/// The program runtime that manages the update/view loop.
pub struct Program<M: Model> {
    /// The application model.
    model: M,
    /// Messages waiting to be processed, oldest first.
    queue: VecDeque<M::Message>,
    /// Most recently rendered frame; host events resolve against it.
    frame: Frame<M::Message>,
    /// Whether the program is running.
    running: bool,
    /// Whether an update changed the model since the last render.
    dirty: bool,
    /// Number of frames rendered.
    frames_rendered: u64,
    /// Number of messages processed.
    updates: u64,
}

impl<M: Model> Program<M> {
    /// Start a program: run `init`, process what it queued, render the first frame.
    pub fn new(mut model: M) -> Self {
        let init = model.init();
        let mut program = Self {
            model,
            queue: VecDeque::new(),
            frame: Frame::new(),
            running: true,
            dirty: true,
            frames_rendered: 0,
            updates: 0,
        };
        program.execute_cmd(init);
        program.run_to_idle();
        program
    }

    /// Queue a message and process the queue to completion.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            debug!(message = "program.send.stopped");
            return;
        }
        self.queue.push_back(msg);
        self.run_to_idle();
    }

    /// Resolve a host event against the current frame and process it.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        if !self.running {
            return EventOutcome::Stopped;
        }
        match event {
            Event::Click(click) => match self.frame.activate(click) {
                Some(msg) => {
                    self.send(msg);
                    EventOutcome::Dispatched
                }
                None => {
                    debug!(
                        message = "program.event.ignored",
                        hit_id = click.id.id(),
                        hit_data = click.data,
                        button = ?click.button
                    );
                    EventOutcome::Ignored
                }
            },
            _ => EventOutcome::Ignored,
        }
    }

    /// Markup of the current frame.
    #[must_use]
    pub fn html(&self) -> &str {
        self.frame.html()
    }

    /// The current frame.
    #[must_use]
    pub fn frame(&self) -> &Frame<M::Message> {
        &self.frame
    }

    /// Read-only access to the model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the program and return the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Whether the program has quit.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        !self.running
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Number of messages processed so far.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    fn run_to_idle(&mut self) {
        while self.running {
            let Some(msg) = self.queue.pop_front() else {
                break;
            };
            let _span = debug_span!("program.update", update = self.updates).entered();
            let cmd = self.model.update(msg);
            self.updates += 1;
            if matches!(cmd, Cmd::Unchanged) {
                debug!(message = "program.render.skipped");
            } else {
                self.dirty = true;
            }
            self.execute_cmd(cmd);
        }
        if !self.running {
            self.queue.clear();
        }
        if self.dirty {
            self.render_frame();
        }
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None | Cmd::Unchanged => {}
            Cmd::Quit => {
                debug!(message = "program.quit", pending = self.queue.len());
                self.running = false;
            }
            Cmd::Msg(m) => self.queue.push_back(m),
            Cmd::Batch(cmds) | Cmd::Sequence(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Log(text) => info!(target: "picklist::program", "{text}"),
        }
    }

    fn render_frame(&mut self) {
        self.frame.clear();
        self.model.view(&mut self.frame);
        self.dirty = false;
        self.frames_rendered += 1;
    }
}

impl<M: Model + std::fmt::Debug> std::fmt::Debug for Program<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("model", &self.model)
            .field("queued", &self.queue.len())
            .field("running", &self.running)
            .field("frames_rendered", &self.frames_rendered)
            .finish()
    }
}
