pub mod traits;
pub mod primitives;
pub mod registry;

pub use registry::FunctionRegistry;
pub use traits::Primitive;
