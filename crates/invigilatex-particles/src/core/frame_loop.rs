/// Lifecycle state of a per-frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Never started.
    #[default]
    Idle,
    /// Frames are being scheduled.
    Running,
    /// `stop()` was called; the next frame must not be scheduled.
    Stopped,
}

/// Start/stop control for a self-rescheduling frame callback.
///
/// The host (e.g. `requestAnimationFrame`) asks [`FrameLoop::begin_frame`]
/// before doing any work and schedules the next frame only when it returns
/// true, so a loop ends at most one frame after `stop()`.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the loop. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        log::info!("frame loop started");
        true
    }

    /// Request termination. Returns false if the loop was not running.
    pub fn stop(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.state = LoopState::Stopped;
        log::info!("frame loop stopped after {} frames", self.frames);
        true
    }

    /// Called at the top of each frame callback. Counts the frame and returns
    /// whether the frame should run (and the next one be scheduled).
    pub fn begin_frame(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.frames += 1;
        true
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames run since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
