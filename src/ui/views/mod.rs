pub mod check;
pub mod diff;
pub mod rules;
pub mod suggest;
pub mod window;
