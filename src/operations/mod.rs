pub mod cut;
pub mod transform;
