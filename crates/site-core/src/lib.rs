pub mod capability;
pub mod constants;
pub mod follower;
pub mod hoverfx;
pub mod particles;
pub mod rate_limit;
pub mod reveal;
pub mod scramble;
pub mod scrolling;
pub mod typing;

pub use capability::*;
pub use constants::*;
pub use follower::*;
pub use hoverfx::*;
pub use particles::*;
pub use rate_limit::*;
pub use reveal::*;
pub use scramble::*;
pub use scrolling::*;
pub use typing::*;
