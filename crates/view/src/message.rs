//! Advisory message-box state.

/// Holds at most one user-facing notice (empty keyword, no-match messages).
#[derive(Debug, Default)]
pub struct MessageBox {
	notice: Option<String>,
}

impl MessageBox {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Show a notice, replacing any previous one.
	pub fn show(&mut self, notice: impl Into<String>) {
		self.notice = Some(notice.into());
	}

	/// Dismiss the current notice.
	pub fn close(&mut self) {
		self.notice = None;
	}

	#[must_use]
	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.notice.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn show_replaces_and_close_dismisses() {
		let mut message = MessageBox::new();
		message.show("first");
		message.show("second");
		assert_eq!(message.notice(), Some("second"));
		message.close();
		assert!(!message.is_open());
	}
}
