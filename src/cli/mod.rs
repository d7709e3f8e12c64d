pub mod check;
pub mod list;
pub mod lookup;
pub mod minor_units;
pub mod setup;
pub mod ui;
