use thiserror::Error;

/// Rejected break-even input.
///
/// The two variants keep "the trade itself is wrong" apart from "the fee
/// schedule is wrong" so the caller can point the user at the right form
/// section.
#[derive(Debug, Error)]
pub enum InvalidInput {
    #[error("invalid trade parameters: {reason}")]
    Trade { reason: String },

    #[error("invalid fee parameters: {reason}")]
    Fees { reason: String },
}
