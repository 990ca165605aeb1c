//! Transfer functions mapping density (and gradient magnitude) to color and
//! opacity, sampled into lookup tables for the renderer.

mod control_point;
mod shared;
mod table;
mod tf1d;
mod tf2d;

pub use control_point::{AlphaPoint, ColorPoint, ControlPoint};
pub use shared::SharedTransferFunction;
pub use table::{Tf2dTable, TfTable};
pub use tf1d::{TransferFunction, TF_TABLE_WIDTH};
pub use tf2d::{TfBox, TransferFunction2D, TF2D_TABLE_SIZE};
