mod mirror;
mod rotate;
mod translate;
mod unfold;

pub use mirror::Mirror;
pub use rotate::Rotate;
pub use translate::Translate;
pub use unfold::Unfold;
