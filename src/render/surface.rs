use crate::foundation::error::TimelineResult;
use crate::render::commands::RenderCommands;

/// Kinds of input a mounted timeline listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputChannel {
    Pointer,
    Wheel,
    Drag,
    Touch,
    Hover,
}

impl InputChannel {
    pub const ALL: [Self; 5] = [
        Self::Pointer,
        Self::Wheel,
        Self::Drag,
        Self::Touch,
        Self::Hover,
    ];
}

/// Handle returned by [`RenderSurface::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// The drawing target a timeline is mounted on.
///
/// The surface is owned exclusively by the controller while mounted. Every listener the
/// controller attaches is detached again on resize and unmount.
pub trait RenderSurface {
    fn attach(&mut self, channel: InputChannel) -> ListenerId;

    /// Detaching an unknown id is a no-op.
    fn detach(&mut self, id: ListenerId);

    fn present(&mut self, frame: &RenderCommands) -> TimelineResult<()>;
}
