pub use self::rest::*;

mod rest;
