/// A failure while driving a [`crate::ScrollHistory`].
///
/// Nothing is retried or swallowed; the caller that forwarded the event gets the error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScrollHistoryError<H, B> {
    /// The history collaborator rejected the transition. No completion was delivered.
    #[error("history transition failed")]
    History(#[source] H),
    /// The scroll behavior failed, typically because the state store did.
    #[error("scroll behavior failed")]
    Scroll(#[source] B),
}
