pub mod assessment;
pub mod camera;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod hooks;
pub mod mesh;
pub mod model;
pub mod ray;
pub mod resolver;
pub mod timeline;
pub mod transform;
pub mod zone;

pub use assessment::*;
pub use camera::*;
pub use classifier::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use hooks::*;
pub use mesh::*;
pub use ray::*;
pub use resolver::*;
pub use transform::*;
pub use zone::*;
