mod booking;
mod car;
mod common;
mod user;

pub use self::{booking::*, car::*, common::*, user::*};
