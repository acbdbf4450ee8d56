mod booking;
mod car;
mod user;

pub use self::{booking::*, car::*, user::*};
