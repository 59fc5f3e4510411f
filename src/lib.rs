pub mod configuration;
pub mod domain;
pub mod prerender;
pub mod routes;
pub mod site;
pub mod startup;
pub mod telemetry;
pub mod waitlist;
