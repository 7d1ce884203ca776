mod all;
mod footer;
mod goals;
mod home;
mod log;
mod log_intake;
mod main;
mod mascot;
mod progress;
mod summary;
mod tracker;

use self::log::log;
use super::*;
use footer::footer;
use main::main;

pub use all::all as render;
