pub mod run;
pub mod team;
pub mod timer;
