// Application layer - Use case interactors

pub mod cancel;
pub mod container;
pub mod split_interactor;

// Re-export interactors
pub use cancel::CancelFlag;
pub use split_interactor::SplitInteractor;
