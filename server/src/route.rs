pub use self::{booking::*, car::*, user::*};

mod booking;
mod car;
mod user;
