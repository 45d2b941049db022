pub mod decode;
pub mod dispatch;
pub mod emit;
pub mod invoke;
pub mod list;
pub mod probe;
pub mod schema;
