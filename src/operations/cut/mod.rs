mod cut_path;
mod resolve_cut;
mod validate_extension;

pub use cut_path::CutPath;
pub use resolve_cut::{CutResolution, ResolveCut};
pub use validate_extension::ValidateExtension;
