//! Application Layer
//!
//! Use cases orchestrating domain objects, plus configuration and the
//! token service.

pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod token;
pub mod verify_token;

pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token::{Claims, IssuedToken, TokenService};
pub use verify_token::VerifyTokenUseCase;
