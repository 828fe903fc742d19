// Domain layer: request/view models and the ports the pipeline talks to.
// Nothing here depends on reqwest or on a concrete host.

pub mod model;
pub mod ports;
