// Prebuilt transfer functions and the descriptor parser
// for raw datasets used in development.
// Every dataset needs its own transfer function, these
// are starting points for CT-like data.

pub mod parse;
pub mod transfer_functions;
