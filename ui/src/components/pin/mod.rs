mod modal;
mod pinned;

pub use modal::PinRecordingModal;
pub use pinned::PinnedRecordingCard;
