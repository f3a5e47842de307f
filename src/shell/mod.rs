// Composition root for the time card app.
//
// - Read config from the environment.
// - Install the tracing subscriber.
// - Build every screen controller from seed data.
// - Drive the controllers from console commands.

pub mod config;
pub mod console;
pub mod logging;
pub mod seed;
