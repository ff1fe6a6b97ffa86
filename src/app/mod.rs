// Application layer - Use case interactors

pub mod container;
pub mod stitch_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use stitch_interactor::StitchInteractor;
