//! Ownership of the animation-frame handle.
//!
//! The loop owns exactly one pending callback handle at a time. `stop` takes
//! the handle out before cancelling it, so a handle can never be cancelled
//! twice and stopping an already-stopped loop is a no-op.
//!
//! Scheduling and cancellation are injected as closures, which keeps the
//! state machine independent of `web-sys` and testable natively; the
//! component wires in `request_animation_frame` / `cancel_animation_frame`.

/// State machine for the self-rescheduling render loop: stopped or running.
#[derive(Debug, Default)]
pub struct FrameLoop {
	handle: Option<i32>,
}

impl FrameLoop {
	pub fn new() -> Self {
		Self::default()
	}

	/// True between a successful `schedule` and the next `stop`.
	pub fn is_running(&self) -> bool {
		self.handle.is_some()
	}

	/// Request the next frame and record its handle. Called once to start
	/// the loop and again from inside every frame callback.
	pub fn schedule(&mut self, request: impl FnOnce() -> Option<i32>) {
		self.handle = request();
	}

	/// Cancel the pending frame, if any, and transition to stopped.
	/// No further callbacks fire after this returns.
	pub fn stop(&mut self, cancel: impl FnOnce(i32)) {
		if let Some(handle) = self.handle.take() {
			cancel(handle);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn schedule_then_stop_cancels_that_exact_handle() {
		let mut frame_loop = FrameLoop::new();
		frame_loop.schedule(|| Some(17));
		assert!(frame_loop.is_running());

		let mut cancelled = Vec::new();
		frame_loop.stop(|h| cancelled.push(h));
		assert_eq!(cancelled, vec![17]);
		assert!(!frame_loop.is_running());
	}

	#[test]
	fn stop_is_idempotent() {
		let mut frame_loop = FrameLoop::new();
		frame_loop.schedule(|| Some(3));

		let mut cancellations = 0;
		frame_loop.stop(|_| cancellations += 1);
		frame_loop.stop(|_| cancellations += 1);
		assert_eq!(cancellations, 1);
		assert!(!frame_loop.is_running());
	}

	#[test]
	fn stop_on_never_started_loop_is_a_no_op() {
		let mut frame_loop = FrameLoop::new();
		let mut cancellations = 0;
		frame_loop.stop(|_| cancellations += 1);
		assert_eq!(cancellations, 0);
	}

	#[test]
	fn failed_schedule_leaves_the_loop_stopped() {
		let mut frame_loop = FrameLoop::new();
		frame_loop.schedule(|| None);
		assert!(!frame_loop.is_running());
	}

	#[test]
	fn rescheduling_replaces_the_handle() {
		let mut frame_loop = FrameLoop::new();
		frame_loop.schedule(|| Some(1));
		frame_loop.schedule(|| Some(2));

		let mut cancelled = Vec::new();
		frame_loop.stop(|h| cancelled.push(h));
		assert_eq!(cancelled, vec![2]);
	}
}
